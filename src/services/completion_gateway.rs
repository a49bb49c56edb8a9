use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestDeveloperMessageArgs, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use tokio::time::timeout;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Opaque completion call: three prompt ranks in, raw model text out. The
/// production impl talks to OpenAI; tests mock this seam.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        developer_prompt: &str,
        user_prompt: &str,
    ) -> AppResult<String>;
}

pub struct OpenAiGateway {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiGateway {
    pub fn new(config: &Config) -> Self {
        let openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
            timeout: Duration::from_secs(config.completion_timeout_secs),
        }
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn complete(
        &self,
        system_prompt: &str,
        developer_prompt: &str,
        user_prompt: &str,
    ) -> AppResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_prompt)
                    .build()?
                    .into(),
                ChatCompletionRequestDeveloperMessageArgs::default()
                    .content(developer_prompt)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_prompt)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = match timeout(self.timeout, self.client.chat().create(request)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(AppError::CompletionError(format!(
                    "completion request timed out after {}s",
                    self.timeout.as_secs()
                )))
            }
        };

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::CompletionError("completion returned no content".to_string()))
    }
}
