use crate::ai::client::CompletionBackend;
use crate::ai::persona::{Persona, instruction_for};
use crate::error::ExpertError;
use serde::Deserialize;
use uuid::Uuid;

pub const EMPTY_INPUT_WARNING: &str = "テキストを入力してください。";

/// What the page posts back.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub persona: Option<String>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Warning(&'static str),
    Answer { persona: Option<Persona>, text: String },
}

/// Handles one press of the submit button.
///
/// Blank text is answered locally with a warning. Anything else costs exactly
/// one backend call, and its failure is handed back untouched.
pub async fn submit(backend: &dyn CompletionBackend, submission: &Submission) -> Result<Outcome, ExpertError> {
    if submission.text.trim().is_empty() {
        log::info!("Empty submission, nothing sent");
        return Ok(Outcome::Warning(EMPTY_INPUT_WARNING));
    }

    let label = submission.persona.as_deref().unwrap_or_default();
    let persona = Persona::from_label(label);
    let instruction = instruction_for(label);

    let request_id = Uuid::new_v4();
    log::info!(
        "[{}] Asking {} as {} ({} chars)",
        request_id,
        backend.model(),
        persona.map(Persona::label).unwrap_or("fallback"),
        submission.text.chars().count()
    );

    let completion = backend.complete(instruction, &submission.text).await.map_err(|e| {
        log::error!("[{}] Completion failed: {}", request_id, e);
        e
    })?;

    log::info!("[{}] Received {} chars", request_id, completion.text.chars().count());

    Ok(Outcome::Answer { persona, text: completion.text })
}
