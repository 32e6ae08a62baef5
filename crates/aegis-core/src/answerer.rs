//! Answer Backend Seam
//!
//! Strategy trait between the ask endpoint and whatever produces answers.
//! The server holds an `Arc<dyn Answerer>` so the backend can be swapped
//! without touching handler code.

use async_trait::async_trait;

use crate::error::Result;

/// Turns one prompt into one reply.
#[async_trait]
pub trait Answerer: Send + Sync {
    /// Backend name, for logs and health reporting.
    fn name(&self) -> &'static str;

    /// Produce the answer for a single prompt.
    async fn answer(&self, prompt: &str) -> Result<String>;
}

/// Canned-reply backend standing in for the scan pipeline.
#[derive(Clone, Debug, Default)]
pub struct StubAnswerer;

impl StubAnswerer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Answerer for StubAnswerer {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn answer(&self, prompt: &str) -> Result<String> {
        tracing::debug!(chars = prompt.len(), "answering with canned reply");
        Ok("No scan has been run yet.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stub_replies_with_canned_message() {
        let answerer = StubAnswerer::new();

        let reply = answerer.answer("What ports are open?").await.unwrap();

        assert_eq!(reply, "No scan has been run yet.");
    }
}
