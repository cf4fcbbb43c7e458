//! HTTP layer for provider requests
//!
//! Handles the single outbound call an enhancement makes:
//! - Connection pooling and client management
//! - Status and transport error mapping
//! - Request ID generation and log correlation

pub mod client;

pub use client::HttpClient;

use async_trait::async_trait;

use crate::providers::{EnhanceResult, ProviderAdapter};
use crate::resume::ResumeRecord;

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Seam between the orchestrator and the transport.
///
/// Lets tests drive the orchestrator with stub generators instead of a
/// live HTTP client.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one provider call and return the raw model output text.
    ///
    /// Single attempt only; there is no retry loop anywhere in the
    /// pipeline.
    async fn generate(
        &self,
        adapter: &dyn ProviderAdapter,
        credential: &str,
        record: &ResumeRecord,
    ) -> EnhanceResult<String>;
}
