//! The external text-generation contract and the sidebar state around it.
//!
//! The editor only ever sees a [`TextGenerator`]; failures are folded into a
//! fixed placeholder string before they reach the UI, so callers have exactly
//! one success path.

mod prompt;
mod session;
pub mod tools;

pub use prompt::render_prompt;
pub use session::{GenerationSession, GenerationStatus};
pub use tools::{AiTool, InputKind, ToolInput};

use std::collections::BTreeMap;
use std::future::Future;

use futures::future::BoxFuture;
use thiserror::Error;

/// Shown in place of a result when generation fails for any reason.
pub const GENERATION_FAILED: &str = "Failed to generate.";
/// Shown when the service succeeds but returns nothing.
pub const EMPTY_RESPONSE: &str = "No response generated.";

pub type GenerationFuture = BoxFuture<'static, Result<String, GenerationError>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Generation service is not configured")]
    Unavailable,

    #[error("Generation service error: {0}")]
    Service(String),
}

/// Turns a prompt template and its variables into generated text.
///
/// Implementations own their transport and threading; the returned future
/// must not block the caller's executor.
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        prompt_template: &str,
        variables: &BTreeMap<String, String>,
    ) -> GenerationFuture;
}

/// Generator used when no service is wired in. Every request fails, which
/// the editor presents as [`GENERATION_FAILED`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DisconnectedGenerator;

impl TextGenerator for DisconnectedGenerator {
    fn generate(
        &self,
        prompt_template: &str,
        variables: &BTreeMap<String, String>,
    ) -> GenerationFuture {
        log::debug!(
            "No generation service; dropping prompt:\n{}",
            render_prompt(prompt_template, variables)
        );
        Box::pin(async { Err(GenerationError::Unavailable) })
    }
}

/// Requests text and maps every failure to [`GENERATION_FAILED`].
pub fn generate_text(
    generator: &dyn TextGenerator,
    prompt_template: &str,
    variables: &BTreeMap<String, String>,
) -> impl Future<Output = String> + Send + 'static {
    let request = generator.generate(prompt_template, variables);
    async move { resolve(request.await) }
}

fn resolve(result: Result<String, GenerationError>) -> String {
    match result {
        Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE.to_owned(),
        Ok(text) => text,
        Err(err) => {
            log::warn!("Text generation failed: {}", err);
            GENERATION_FAILED.to_owned()
        }
    }
}
