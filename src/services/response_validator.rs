use serde_json::Value;

use crate::models::domain::QuestionItem;

const STATUS_LABEL: &str = "status";
const STATUS_ERROR: &str = "error";

fn report(verbose: bool, msg: &str) {
    if verbose {
        log::warn!("{msg}");
    }
}

/// Shallow shape gate over a final payload: rejects empty values, mappings
/// carrying an error status, and anything that is not a mapping or a
/// sequence. It deliberately does not check per-question invariants; see
/// [`validate_question_set`] for the opt-in deeper pass.
pub fn is_valid(response: &Value, verbose: bool) -> bool {
    let empty = match response {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    };
    if empty {
        report(verbose, "error - empty api response");
        return false;
    }

    if let Value::Object(map) = response {
        if map.get(STATUS_LABEL).and_then(Value::as_str) == Some(STATUS_ERROR) {
            report(verbose, "error - status error detected");
            return false;
        }
    }

    if !matches!(response, Value::Object(_) | Value::Array(_)) {
        report(verbose, "error - response is not a mapping or a sequence");
        return false;
    }

    true
}

/// Opt-in structural check of the invariants the shallow gate skips: no
/// embedded error items, and every closed question carrying exactly four
/// answers with at least one marked correct.
pub fn validate_question_set(items: &[QuestionItem]) -> bool {
    items.iter().all(|item| match item {
        QuestionItem::Error(_) => false,
        QuestionItem::Open(open) => !open.question.is_empty(),
        QuestionItem::Closed(closed) => {
            closed.answers.len() == 4 && closed.correct_count() >= 1
        }
    })
}
