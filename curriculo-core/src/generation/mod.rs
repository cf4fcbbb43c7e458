//! Generation orchestration
//!
//! Drives one enhancement attempt end to end: provider call, sanitize,
//! parse, merge, all raced against a hard timeout. The flow always
//! completes with a usable record - enhancement failures degrade to the
//! original data with a soft warning instead of blocking the user.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::AiSettings;
use crate::http::{HttpClient, TextGenerator, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::providers::sanitize::{parse_enhancement, sanitize};
use crate::providers::{EnhanceError, EnhanceResult};
use crate::resume::{merge, ResumeRecord};

/// Progress phases exposed to the display layer.
///
/// Display-only: phases carry no semantic effect on the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Connecting,
    Analyzing,
    Formatting,
    Completed,
}

/// Terminal branch taken by a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Succeeded,
    TimedOut,
    Failed,
}

/// Result of a completed generation request.
///
/// `record` is always fully usable: the merged record on success, the
/// original unmodified record on timeout or failure.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub record: ResumeRecord,
    pub status: GenerationStatus,
    /// Soft, non-blocking warning for display when enhancement degraded.
    pub warning: Option<String>,
}

impl GenerationOutcome {
    pub fn enhanced(&self) -> bool {
        self.status == GenerationStatus::Succeeded
    }
}

/// Coordinates a single enhancement attempt per user-initiated
/// generation. One logical flow per request; no concurrent AI requests
/// are issued for the same record.
pub struct Orchestrator {
    settings: AiSettings,
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
    phase_tx: watch::Sender<GenerationPhase>,
}

impl Orchestrator {
    /// Orchestrator over the live HTTP transport.
    pub fn new(settings: AiSettings) -> EnhanceResult<Self> {
        let client = HttpClient::new()?;
        Ok(Self::with_generator(settings, Arc::new(client)))
    }

    /// Orchestrator over a custom generator (tests, alternative
    /// transports).
    pub fn with_generator(settings: AiSettings, generator: Arc<dyn TextGenerator>) -> Self {
        let (phase_tx, _) = watch::channel(GenerationPhase::Idle);
        Self {
            settings,
            generator,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            phase_tx,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Subscribe to progress phases for display.
    pub fn phases(&self) -> watch::Receiver<GenerationPhase> {
        self.phase_tx.subscribe()
    }

    fn set_phase(&self, phase: GenerationPhase) {
        // Nobody listening is fine; progress is display-only.
        let _ = self.phase_tx.send(phase);
    }

    /// Run one enhancement attempt.
    ///
    /// Errors only on precondition-class failures: a missing credential
    /// (checked before any network call) or a non-recoverable error
    /// surfaced by the pipeline. Every recoverable failure - transport,
    /// malformed response, timeout - resolves to an outcome carrying
    /// the original record and a warning. The timeout drops the
    /// in-flight call; a late provider answer is never observed.
    pub async fn enhance(&self, record: &ResumeRecord) -> EnhanceResult<GenerationOutcome> {
        if !self.settings.has_credential() {
            return Err(EnhanceError::MissingCredential);
        }

        self.set_phase(GenerationPhase::Connecting);
        let provider = self.settings.provider;
        info!("Starting enhancement via {}", provider);

        let outcome = match tokio::time::timeout(self.timeout, self.attempt(record)).await {
            Ok(Ok(merged)) => {
                info!("Enhancement succeeded via {}", provider);
                GenerationOutcome {
                    record: merged,
                    status: GenerationStatus::Succeeded,
                    warning: None,
                }
            }
            Ok(Err(err)) if !err.is_recoverable() => {
                // Precondition-class failure; falling back would mask a
                // configuration bug.
                warn!("Enhancement via {} refused: {}", provider, err);
                return Err(err);
            }
            Ok(Err(err)) => {
                warn!("Enhancement via {} failed, using raw data: {}", provider, err);
                GenerationOutcome {
                    record: record.clone(),
                    status: GenerationStatus::Failed,
                    warning: Some(format!("AI enhancement unavailable: {err}")),
                }
            }
            Err(_) => {
                let err = EnhanceError::Timeout(self.timeout.as_secs());
                warn!("Enhancement via {} timed out, using raw data", provider);
                GenerationOutcome {
                    record: record.clone(),
                    status: GenerationStatus::TimedOut,
                    warning: Some(format!("AI enhancement unavailable: {err}")),
                }
            }
        };

        self.set_phase(GenerationPhase::Formatting);
        self.set_phase(GenerationPhase::Completed);
        Ok(outcome)
    }

    async fn attempt(&self, record: &ResumeRecord) -> EnhanceResult<ResumeRecord> {
        let adapter = self.settings.provider.create_adapter();
        let raw = self
            .generator
            .generate(
                adapter.as_ref(),
                self.settings.credential.expose_secret(),
                record,
            )
            .await?;

        self.set_phase(GenerationPhase::Analyzing);
        let enhancement = parse_enhancement(&sanitize(&raw))?;
        Ok(merge(record, &enhancement))
    }
}
