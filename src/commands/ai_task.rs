//! Handler for the `AI_TASK` command.
//!
//! Binds the `prompt` argument, validates the API key, then asks the
//! completion provider. Key problems never reach the provider.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::{debug, warn};

use super::{AI_TASK, CommandArgs, CommandError, CommandHandler, CommandOutcome};
use crate::auth::ApiKeySource;
use crate::providers::CompletionProvider;

pub struct AiTaskHandler {
    api_keys: Arc<dyn ApiKeySource>,
    completions: Arc<dyn CompletionProvider>,
}

impl AiTaskHandler {
    pub fn new(api_keys: Arc<dyn ApiKeySource>, completions: Arc<dyn CompletionProvider>) -> Self {
        Self {
            api_keys,
            completions,
        }
    }

    async fn run(&self, mut args: CommandArgs) -> Result<CommandOutcome, CommandError> {
        let prompt = super::take_string(&mut args, "prompt")?;
        super::reject_remaining(&args)?;

        let api_key = self.api_keys.validated().inspect_err(|e| {
            warn!(var = %self.api_keys.variable(), reason = %e, "rejected API key");
        })?;

        debug!(prompt_len = prompt.len(), "requesting completion");
        let response = self
            .completions
            .complete(&api_key, &prompt)
            .await
            .map_err(|e| CommandError::upstream("AI request failed", e))?;

        Ok(CommandOutcome::success_with_response(
            "AI response generated",
            response,
        ))
    }
}

impl CommandHandler for AiTaskHandler {
    fn name(&self) -> &str {
        AI_TASK
    }

    fn description(&self) -> &str {
        "Run an AI analysis for `prompt` (requires an sk- API key)."
    }

    fn execute(
        &self,
        args: CommandArgs,
    ) -> Pin<Box<dyn Future<Output = CommandOutcome> + Send + '_>> {
        Box::pin(async move { self.run(args).await.unwrap_or_else(CommandOutcome::from) })
    }
}
