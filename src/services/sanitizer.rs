use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*([\]\}])").expect("trailing comma pattern is valid"));

/// Removes trailing commas before a closing `]` or `}` so near-valid
/// generator output parses as JSON. Scope is intentionally this one defect;
/// no other normalization happens here. Rewrites until a fixpoint so repeated
/// commas collapse in a single call.
pub fn repair(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        let next = TRAILING_COMMA.replace_all(&current, "$1").into_owned();
        if next == current {
            return next;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_trailing_comma_before_bracket() {
        assert_eq!(repair(r#"[{"a":1},]"#), r#"[{"a":1}]"#);
    }

    #[test]
    fn removes_trailing_comma_before_brace() {
        assert_eq!(repair(r#"{"a":1,}"#), r#"{"a":1}"#);
    }

    #[test]
    fn tolerates_whitespace_between_comma_and_close() {
        assert_eq!(repair("[1, 2,  \n ]"), "[1, 2]");
    }

    #[test]
    fn leaves_valid_json_untouched() {
        let valid = r#"[{"question":"Q1"},{"question":"Q2"}]"#;
        assert_eq!(repair(valid), valid);
    }

    #[test]
    fn leaves_commas_inside_strings_structure_alone() {
        // Commas between elements are not trailing and must survive.
        assert_eq!(repair("[1,2,3]"), "[1,2,3]");
    }

    #[test]
    fn is_idempotent() {
        for raw in [
            r#"[{"a":1},]"#,
            r#"{"a":1,}"#,
            "[1,,]",
            "not json at all",
            "",
        ] {
            let once = repair(raw);
            assert_eq!(repair(&once), once, "repair not idempotent for {raw:?}");
        }
    }
}
