//! Assistant request/response plumbing.
//!
//! The editor treats the assistant as an external service with its own
//! timeout and retry contract. The demo build ships [`LocalAssistant`], a
//! canned backend that answers after a fixed latency, but every call from
//! the UI goes through [`AssistantClient`] so a real backend can be dropped
//! in without touching the components.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::constants::{CHAT_REPLY_LATENCY_MS, PROMPT_APPLY_LATENCY_MS};

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Failure reported by a backend implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("assistant backend unavailable: {0}")]
    Unavailable(String),
}

/// Failure surfaced to the UI after the client's retry budget is spent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssistantError {
    #[error("assistant request timed out after {attempts} attempt(s)")]
    TimedOut { attempts: u32 },
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// A backend that can answer chat messages and apply editing prompts.
pub trait AssistantBackend: Send + Sync {
    /// Answer a chat message.
    fn reply(&self, prompt: String) -> BoxFuture<Result<String, BackendError>>;
    /// Apply an editing prompt to the project.
    fn apply_edit(&self, prompt: String) -> BoxFuture<Result<(), BackendError>>;
}

/// Client wrapper enforcing the timeout and retry contract.
#[derive(Clone)]
pub struct AssistantClient {
    backend: Arc<dyn AssistantBackend>,
    timeout: Duration,
    max_attempts: u32,
}

impl PartialEq for AssistantClient {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.backend, &other.backend)
            && self.timeout == other.timeout
            && self.max_attempts == other.max_attempts
    }
}

impl Default for AssistantClient {
    fn default() -> Self {
        Self::new(Arc::new(LocalAssistant::new()))
    }
}

impl AssistantClient {
    pub fn new(backend: Arc<dyn AssistantBackend>) -> Self {
        Self {
            backend,
            timeout: Duration::from_secs(10),
            max_attempts: 2,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Answer a chat message, retrying timed-out requests.
    pub async fn reply(&self, prompt: &str) -> Result<String, AssistantError> {
        let prompt = prompt.to_string();
        self.request(|| self.backend.reply(prompt.clone())).await
    }

    /// Apply an editing prompt, retrying timed-out requests.
    pub async fn apply_edit(&self, prompt: &str) -> Result<(), AssistantError> {
        let prompt = prompt.to_string();
        self.request(|| self.backend.apply_edit(prompt.clone())).await
    }

    async fn request<T>(
        &self,
        mut call: impl FnMut() -> BoxFuture<Result<T, BackendError>>,
    ) -> Result<T, AssistantError> {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match tokio::time::timeout(self.timeout, call()).await {
                Ok(result) => return result.map_err(AssistantError::from),
                Err(_) if attempts < self.max_attempts => {
                    warn!(attempts, "assistant request timed out, retrying");
                }
                Err(_) => return Err(AssistantError::TimedOut { attempts }),
            }
        }
    }
}

/// Canned local backend used by the demo build.
pub struct LocalAssistant {
    reply_latency: Duration,
    apply_latency: Duration,
}

impl LocalAssistant {
    pub fn new() -> Self {
        Self {
            reply_latency: Duration::from_millis(CHAT_REPLY_LATENCY_MS),
            apply_latency: Duration::from_millis(PROMPT_APPLY_LATENCY_MS),
        }
    }

    /// Override both latencies (used by tests).
    pub fn with_latency(reply_latency: Duration, apply_latency: Duration) -> Self {
        Self {
            reply_latency,
            apply_latency,
        }
    }
}

impl Default for LocalAssistant {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantBackend for LocalAssistant {
    fn reply(&self, prompt: String) -> BoxFuture<Result<String, BackendError>> {
        let latency = self.reply_latency;
        let response = canned_reply(&prompt);
        Box::pin(async move {
            tokio::time::sleep(latency).await;
            Ok(response)
        })
    }

    fn apply_edit(&self, _prompt: String) -> BoxFuture<Result<(), BackendError>> {
        let latency = self.apply_latency;
        Box::pin(async move {
            tokio::time::sleep(latency).await;
            Ok(())
        })
    }
}

/// Keyword-matched canned responses for the demo assistant.
fn canned_reply(query: &str) -> String {
    let query = query.to_lowercase();

    if query.contains("how to") || query.contains("help") {
        return "To get started with editing, you can drag media from your library onto the \
                timeline. Try using the AI prompt box to describe effects you'd like to apply \
                to your clips."
            .to_string();
    }

    if query.contains("effect") || query.contains("filter") {
        return "You can create custom effects by using the prompt box. Try something like \
                'Apply a cinematic color grade with high contrast' or 'Create a dream-like \
                glowing effect'."
            .to_string();
    }

    if query.contains("export") || query.contains("save") {
        return "To export your project, click the Export button in the top toolbar. You can \
                choose from various formats and quality settings."
            .to_string();
    }

    "I can help you edit your video more efficiently. Try asking about specific effects, \
     editing techniques, or tools in the editor."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_canned_reply_routing() {
        assert!(canned_reply("How to trim a clip?").starts_with("To get started"));
        assert!(canned_reply("add a glow EFFECT").contains("cinematic color grade"));
        assert!(canned_reply("can I export this?").contains("Export button"));
        assert!(canned_reply("hello there").starts_with("I can help you"));
    }

    #[tokio::test]
    async fn test_client_returns_reply() {
        let backend = LocalAssistant::with_latency(
            Duration::from_millis(5),
            Duration::from_millis(5),
        );
        let client = AssistantClient::new(Arc::new(backend));
        let reply = client.reply("help").await.unwrap();
        assert!(reply.starts_with("To get started"));
        client.apply_edit("add film grain").await.unwrap();
    }

    #[tokio::test]
    async fn test_overlapping_requests_run_independently() {
        // A send issued while another reply is pending is its own request,
        // not queued behind or dropped by the first.
        let backend = LocalAssistant::with_latency(
            Duration::from_millis(30),
            Duration::from_millis(30),
        );
        let client = AssistantClient::new(Arc::new(backend));
        let (first, second) = tokio::join!(client.reply("help"), client.reply("export"));
        assert!(first.unwrap().starts_with("To get started"));
        assert!(second.unwrap().contains("Export button"));
    }

    #[tokio::test]
    async fn test_client_times_out_after_retries() {
        let backend = LocalAssistant::with_latency(
            Duration::from_millis(200),
            Duration::from_millis(200),
        );
        let client = AssistantClient::new(Arc::new(backend))
            .with_timeout(Duration::from_millis(10))
            .with_max_attempts(2);
        let err = client.reply("help").await.unwrap_err();
        assert_eq!(err, AssistantError::TimedOut { attempts: 2 });
    }

    /// Backend whose first attempt hangs past any reasonable timeout and
    /// whose second attempt answers immediately.
    struct FlakyBackend {
        calls: AtomicU32,
    }

    impl AssistantBackend for FlakyBackend {
        fn reply(&self, _prompt: String) -> BoxFuture<Result<String, BackendError>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                if call == 0 {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                }
                Ok("recovered".to_string())
            })
        }

        fn apply_edit(&self, _prompt: String) -> BoxFuture<Result<(), BackendError>> {
            Box::pin(async { Ok(()) })
        }
    }

    #[tokio::test]
    async fn test_client_retries_after_timeout() {
        let client = AssistantClient::new(Arc::new(FlakyBackend {
            calls: AtomicU32::new(0),
        }))
        .with_timeout(Duration::from_millis(20))
        .with_max_attempts(2);
        assert_eq!(client.reply("hi").await.unwrap(), "recovered");
    }

    #[tokio::test]
    async fn test_backend_error_passes_through() {
        struct DownBackend;
        impl AssistantBackend for DownBackend {
            fn reply(&self, _prompt: String) -> BoxFuture<Result<String, BackendError>> {
                Box::pin(async { Err(BackendError::Unavailable("offline".to_string())) })
            }
            fn apply_edit(&self, _prompt: String) -> BoxFuture<Result<(), BackendError>> {
                Box::pin(async { Err(BackendError::Unavailable("offline".to_string())) })
            }
        }
        let client = AssistantClient::new(Arc::new(DownBackend));
        let err = client.reply("hi").await.unwrap_err();
        assert_eq!(
            err,
            AssistantError::Backend(BackendError::Unavailable("offline".to_string()))
        );
    }
}
