use std::sync::Arc;

use crate::{constants::prompts, services::completion_gateway::CompletionGateway};

/// Sentinel meaning "scoring failed" - not a valid score, and distinct from
/// a genuine 0.
pub const SCORE_FAILED: i64 = -1;

/// Scores a free-text answer against the source material via the completion
/// gateway. Never raises to the caller; any failure surfaces as
/// [`SCORE_FAILED`].
pub struct ScoringService {
    gateway: Arc<dyn CompletionGateway>,
}

impl ScoringService {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self { gateway }
    }

    /// Returns an integer in [0, 100] on success. Out-of-range values from
    /// the generator are passed through verbatim.
    pub async fn check_open_answer(&self, text: &str, question: &str, answer: &str) -> i64 {
        let dev_prompt = prompts::dev_check_open_answer(text, question);
        let user_prompt = prompts::user_check_open_answer(answer);

        let raw = match self
            .gateway
            .complete(prompts::SYS_CHECK_OPEN_ANSWER, &dev_prompt, &user_prompt)
            .await
        {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("completion failed while scoring open answer: {err}");
                return SCORE_FAILED;
            }
        };

        match raw.trim().parse::<i64>() {
            Ok(score) => score,
            Err(_) => {
                log::warn!("open answer score was not an integer, the response was: {raw}");
                SCORE_FAILED
            }
        }
    }
}
