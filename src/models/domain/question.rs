use serde::{Deserialize, Serialize};

/// The question-type batches the generator is asked for. Each variant maps to
/// its own instruction block and sub-request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionType {
    Open,
    ClosedSingle, // Exactly one correct answer
    ClosedMulti,  // Two to four correct answers
}

/// One logical generation request, already past boundary validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRequest {
    pub text: String,
    pub closed_amount: u32,
    pub open_amount: u32,
    pub allow_multiple_correct: bool,
    pub force_multiple_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub content: String,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClosedQuestion {
    pub question: String,
    pub answers: Vec<Answer>,
}

impl ClosedQuestion {
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenQuestion {
    pub question: String,
}

/// In-band error sentinel. Both the generator's own refusal and a local parse
/// failure surface as this value, embedded in the result sequence.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorPayload {
    pub status: String,
    pub content: String,
}

impl ErrorPayload {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            content: content.into(),
        }
    }

    /// Sub-request output failed to parse after sanitation.
    pub fn invalid_answer_format() -> Self {
        Self::new("invalid answer format")
    }

    /// Completion call itself failed or timed out.
    pub fn completion_unavailable() -> Self {
        Self::new("completion unavailable")
    }
}

/// One element of a generation result. Untagged so the wire shape stays the
/// bare object the generator emits; variant order matters, since a closed
/// question would otherwise also satisfy the open shape.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum QuestionItem {
    Error(ErrorPayload),
    Closed(ClosedQuestion),
    Open(OpenQuestion),
}

impl QuestionItem {
    pub fn is_error(&self) -> bool {
        matches!(self, QuestionItem::Error(_))
    }
}

pub type QuestionSet = Vec<QuestionItem>;
