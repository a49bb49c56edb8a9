use crate::models::domain::QuestionType;

pub const OPEN_QUESTION_INSTRUCTION: &str = r#"Each open question object must have:
- "question": string"#;

pub const CLOSED_SINGLE_INSTRUCTION: &str = r#"Each closed question object must have:
- "question": string,
- "answers": array of exactly 4 items, where each item must be built in form: {"content": string, "isCorrect": boolean}
Each answer must have exactly one "isCorrect": true property and three "isCorrect": false properties."#;

pub const CLOSED_MULTI_INSTRUCTION: &str = r#"Each closed question object must have:
- "question": string,
- "answers": array of exactly 4 items, where each item must be built in form: {"content": string, "isCorrect": boolean}
There must be at least two "isCorrect": true properties and not more than three "isCorrect": false properties.
There can be 2, 3 or 4 "isCorrect": true properties."#;

/// Structural constraint block interpolated into the generation system prompt.
pub fn instruction_for(question_type: QuestionType) -> &'static str {
    match question_type {
        QuestionType::Open => OPEN_QUESTION_INSTRUCTION,
        QuestionType::ClosedSingle => CLOSED_SINGLE_INSTRUCTION,
        QuestionType::ClosedMulti => CLOSED_MULTI_INSTRUCTION,
    }
}
