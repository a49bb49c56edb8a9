use std::sync::Arc;

use serde_json::Value;

use crate::{
    constants::prompts,
    models::domain::{ErrorPayload, QuestionItem, QuestionRequest, QuestionSet, QuestionType},
    services::{
        answer_mix::AnswerMixPolicy, completion_gateway::CompletionGateway, sanitizer,
    },
};

/// Fans a logical request out into per-type sub-requests, runs each through
/// prompt assembly, the completion gateway and sanitation, and concatenates
/// the parsed batches. A failed sub-request degrades to an embedded error
/// item instead of aborting the whole request.
pub struct QuestionService {
    gateway: Arc<dyn CompletionGateway>,
    mix_policy: Arc<dyn AnswerMixPolicy>,
}

impl QuestionService {
    pub fn new(gateway: Arc<dyn CompletionGateway>, mix_policy: Arc<dyn AnswerMixPolicy>) -> Self {
        Self { gateway, mix_policy }
    }

    /// Open batch first, then closed batches in issue order.
    pub async fn generate_questions(&self, request: &QuestionRequest) -> QuestionSet {
        let mut all_questions = Vec::new();

        if request.open_amount > 0 {
            all_questions.extend(
                self.generate_questions_per_type(&request.text, request.open_amount, QuestionType::Open)
                    .await,
            );
        }

        if request.closed_amount > 0 {
            if request.force_multiple_correct {
                all_questions.extend(
                    self.generate_questions_per_type(
                        &request.text,
                        request.closed_amount,
                        QuestionType::ClosedMulti,
                    )
                    .await,
                );
            } else if request.allow_multiple_correct {
                let (single_amount, multiple_amount) =
                    self.mix_policy.split_single_multiple(request.closed_amount);

                if single_amount > 0 {
                    all_questions.extend(
                        self.generate_questions_per_type(
                            &request.text,
                            single_amount,
                            QuestionType::ClosedSingle,
                        )
                        .await,
                    );
                }
                if multiple_amount > 0 {
                    all_questions.extend(
                        self.generate_questions_per_type(
                            &request.text,
                            multiple_amount,
                            QuestionType::ClosedMulti,
                        )
                        .await,
                    );
                }
            } else {
                all_questions.extend(
                    self.generate_questions_per_type(
                        &request.text,
                        request.closed_amount,
                        QuestionType::ClosedSingle,
                    )
                    .await,
                );
            }
        }

        all_questions
    }

    async fn generate_questions_per_type(
        &self,
        text: &str,
        amount: u32,
        question_type: QuestionType,
    ) -> Vec<QuestionItem> {
        log::debug!("issuing {question_type:?} sub-request for {amount} questions");

        let sys_prompt = prompts::sys_generate_questions(amount, question_type);
        let dev_prompt = prompts::dev_generate_questions();
        let user_prompt = prompts::user_generate_questions(text);

        let raw = match self.gateway.complete(&sys_prompt, &dev_prompt, &user_prompt).await {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("completion failed for {question_type:?} sub-request: {err}");
                return vec![QuestionItem::Error(ErrorPayload::completion_unavailable())];
            }
        };

        parse_batch(&sanitizer::repair(&raw), question_type)
    }
}

/// Parses one sanitized sub-request payload. A refusal arrives as a single
/// error object rather than an array and is carried through as one item.
fn parse_batch(payload: &str, question_type: QuestionType) -> Vec<QuestionItem> {
    let parsed = match serde_json::from_str::<Value>(payload) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("{question_type:?} sub-request returned unparseable text: {err}");
            return vec![QuestionItem::Error(ErrorPayload::invalid_answer_format())];
        }
    };

    let value = if parsed.is_array() {
        parsed
    } else {
        Value::Array(vec![parsed])
    };

    match serde_json::from_value::<Vec<QuestionItem>>(value) {
        Ok(items) => items,
        Err(err) => {
            log::warn!("{question_type:?} sub-request payload did not match any question shape: {err}");
            vec![QuestionItem::Error(ErrorPayload::invalid_answer_format())]
        }
    }
}
