//! Caller-side policy for an external mood arbiter.
//!
//! The engine never waits on anything; this module does. An arbiter is asked
//! for a verdict under a per-attempt timeout with linear backoff between
//! retries. A reply that does not parse, or names a mood outside the catalog,
//! counts as a failed attempt. When every attempt fails the heuristic result
//! is returned, so [`analyze_mood`] always produces a classification.
//!
//! # Retry policy
//!
//! - Up to `1 + max_retries` attempts
//! - Each attempt bounded by `timeout_secs`
//! - Attempt `n` (0-based) first sleeps `n * retry_backoff_ms`

use crate::config::{ArbiterConfig, MoodsyncConfig};
use crate::error::{MoodsyncError, Result};
use async_trait::async_trait;
use moodsync_engine::{ArbiterCandidate, ClassificationResult, classify_with_config, list_mood_ids, validate_candidate};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Maximum characters of the entry included in a prompt.
pub const MAX_PROMPT_ENTRY_CHARS: usize = 2000;

/// An external classifier that can be asked for a mood verdict.
///
/// Implementations return the model's raw reply text; parsing and validation
/// happen here.
#[async_trait]
pub trait MoodArbiter: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Ask for a verdict on `text`.
    async fn assess(&self, text: &str) -> Result<String>;
}

// ── Command arbiter ─────────────────────────────────────────────────────────

/// Arbiter backed by an external command.
///
/// Each assessment spawns the command, writes [`build_mood_prompt`] to its
/// stdin and takes everything it prints on stdout as the reply. The child is
/// killed if the assessment is dropped (for example on timeout).
#[derive(Debug, Clone)]
pub struct CommandArbiter {
    program: String,
    args: Vec<String>,
}

impl CommandArbiter {
    /// Build from `[program, args...]`. Returns `None` for an empty command.
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

#[async_trait]
impl MoodArbiter for CommandArbiter {
    fn name(&self) -> &str {
        &self.program
    }

    async fn assess(&self, text: &str) -> Result<String> {
        let mut child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| MoodsyncError::Arbiter(format!("failed to start {}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(build_mood_prompt(text).as_bytes()).await?;
            // Dropping stdin closes the pipe so the command sees EOF.
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(MoodsyncError::Arbiter(format!(
                "{} exited with {}",
                self.program, output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Instruction text for a language-model arbiter.
pub fn build_mood_prompt(text: &str) -> String {
    let ids = list_mood_ids();
    let entry: String = text.chars().take(MAX_PROMPT_ENTRY_CHARS).collect();
    format!(
        "You classify the emotional tone of personal journal entries.\n\
         Reply with ONLY a JSON object of this shape:\n\
         {{\n  \"mood\": \"<one id from the list>\",\n  \"confidence\": <0.0 to 1.0>,\n  \
         \"reasoning\": \"<one short sentence>\",\n  \"relatedMoods\": [\n    \
         {{\"mood\": \"<id>\", \"confidence\": <0.0 to 1.0>}}\n  ]\n}}\n\n\
         Allowed mood ids ({count}): {list}\n\n\
         Pick the single most dominant emotion as \"mood\". List up to three other \
         emotions that are clearly present as \"relatedMoods\", with lower confidence.\n\
         Use only ids from the list, in lowercase.\n\n\
         Journal entry: \"{entry}\"\n",
        count = ids.len(),
        list = ids.join(", "),
    )
}

/// Extract a candidate from raw model output.
///
/// Tries the whole reply as JSON, then the span from the first `{` to the
/// last `}`, then a fenced ```` ```json ```` block.
pub fn parse_arbiter_reply(raw: &str) -> Option<ArbiterCandidate> {
    let trimmed = raw.trim();
    if let Ok(candidate) = serde_json::from_str::<ArbiterCandidate>(trimmed) {
        return Some(candidate);
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            if let Ok(candidate) = serde_json::from_str::<ArbiterCandidate>(&trimmed[start..=end]) {
                return Some(candidate);
            }
        }
    }

    let fenced = trimmed.split("```json").nth(1)?;
    let body = fenced.split("```").next()?;
    serde_json::from_str::<ArbiterCandidate>(body.trim()).ok()
}

/// Classify `text`, preferring the arbiter's verdict when it can be obtained.
///
/// Skips the arbiter when it is absent, disabled, or the trimmed entry is
/// shorter than `min_text_chars`. Never fails.
pub async fn analyze_mood(
    text: &str,
    arbiter: Option<&dyn MoodArbiter>,
    config: &MoodsyncConfig,
) -> ClassificationResult {
    let Some(arbiter) = arbiter.filter(|_| config.arbiter.enabled) else {
        return classify_with_config(text, &config.scoring);
    };

    let chars = text.trim().chars().count();
    if chars < config.arbiter.min_text_chars {
        debug!(chars, min = config.arbiter.min_text_chars, "entry too short for arbiter");
        return classify_with_config(text, &config.scoring);
    }

    match request_verdict(arbiter, text, &config.arbiter).await {
        Ok(result) => result,
        Err(e) => {
            warn!(arbiter = arbiter.name(), error = %e, "arbiter unavailable, using keyword analysis");
            classify_with_config(text, &config.scoring)
        }
    }
}

/// Ask `arbiter` for a validated verdict, retrying per `policy`.
///
/// # Errors
///
/// Returns [`MoodsyncError::Arbiter`] (or the arbiter's own error) from the
/// last attempt once every attempt has failed.
pub async fn request_verdict(
    arbiter: &dyn MoodArbiter,
    text: &str,
    policy: &ArbiterConfig,
) -> Result<ClassificationResult> {
    let attempts = policy.max_retries.saturating_add(1);
    let mut last_error = MoodsyncError::Arbiter("no attempt made".into());

    for attempt in 0..attempts {
        if attempt > 0 {
            let delay = Duration::from_millis(policy.retry_backoff_ms.saturating_mul(u64::from(attempt)));
            info!(
                arbiter = arbiter.name(),
                attempt = attempt + 1,
                of = attempts,
                delay_ms = delay.as_millis() as u64,
                "retrying arbiter"
            );
            tokio::time::sleep(delay).await;
        }

        match attempt_once(arbiter, text, policy).await {
            Ok(result) => {
                info!(
                    arbiter = arbiter.name(),
                    attempt = attempt + 1,
                    mood = %result.mood,
                    "arbiter verdict accepted"
                );
                return Ok(result);
            }
            Err(e) => {
                warn!(arbiter = arbiter.name(), attempt = attempt + 1, error = %e, "arbiter attempt failed");
                last_error = e;
            }
        }
    }

    Err(last_error)
}

async fn attempt_once(arbiter: &dyn MoodArbiter, text: &str, policy: &ArbiterConfig) -> Result<ClassificationResult> {
    let raw = tokio::time::timeout(Duration::from_secs(policy.timeout_secs), arbiter.assess(text))
        .await
        .map_err(|_| MoodsyncError::Arbiter(format!("timed out after {}s", policy.timeout_secs)))??;
    let candidate =
        parse_arbiter_reply(&raw).ok_or_else(|| MoodsyncError::Arbiter("reply contains no JSON verdict".into()))?;
    validate_candidate(&candidate).map_err(|rejection| MoodsyncError::Arbiter(rejection.to_string()))
}
