use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::QuestionRequest;

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_generate_request"))]
pub struct GenerateQuestionsRequestDto {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,

    pub closed_amount: u32,

    pub open_amount: u32,

    #[serde(default)]
    pub allow_multiple: bool,

    #[serde(default)]
    pub force_multiple: bool,
}

fn validate_generate_request(dto: &GenerateQuestionsRequestDto) -> Result<(), ValidationError> {
    if dto.text.trim().is_empty() {
        return Err(ValidationError::new("blank_text"));
    }
    if dto.closed_amount == 0 && dto.open_amount == 0 {
        return Err(ValidationError::new("no_questions_requested"));
    }
    Ok(())
}

impl From<GenerateQuestionsRequestDto> for QuestionRequest {
    fn from(dto: GenerateQuestionsRequestDto) -> Self {
        QuestionRequest {
            text: dto.text,
            closed_amount: dto.closed_amount,
            open_amount: dto.open_amount,
            allow_multiple_correct: dto.allow_multiple,
            force_multiple_correct: dto.force_multiple,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckOpenAnswerRequestDto {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,

    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,

    #[validate(length(min = 1, message = "answer must not be empty"))]
    pub answer: String,
}
