use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        answer_mix::{AnswerMixPolicy, UniformMixPolicy},
        completion_gateway::{CompletionGateway, OpenAiGateway},
        question_service::QuestionService,
        scoring_service::ScoringService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub scoring_service: Arc<ScoringService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let gateway: Arc<dyn CompletionGateway> = Arc::new(OpenAiGateway::new(&config));
        Self::with_gateway(config, gateway)
    }

    /// Wires the services around a caller-supplied gateway, for alternate
    /// completion providers and test doubles.
    pub fn with_gateway(config: Config, gateway: Arc<dyn CompletionGateway>) -> Self {
        let mix_policy: Arc<dyn AnswerMixPolicy> = Arc::new(UniformMixPolicy);

        Self {
            question_service: Arc::new(QuestionService::new(gateway.clone(), mix_policy)),
            scoring_service: Arc::new(ScoringService::new(gateway)),
            config: Arc::new(config),
        }
    }
}
