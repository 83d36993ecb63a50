use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::error::Result;
use crate::platform::types::{AgentRun, AgentRunRequest};
use crate::platform::AgentRunner;

/// Runner that accepts every request without contacting any service.
#[derive(Default)]
pub struct DryRunRunner {
    issued: AtomicU64,
}

impl DryRunRunner {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AgentRunner for DryRunRunner {
    async fn create_agent_run(&self, request: &AgentRunRequest) -> Result<AgentRun> {
        let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(
            repo = %request.repo,
            branch = %request.branch,
            prompt_bytes = request.message.len(),
            "Dry run: skipping agent run creation"
        );
        Ok(AgentRun {
            id: format!("dry-run-{n}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let runner = DryRunRunner::new();
        let request = AgentRunRequest {
            repo: "acme/a".to_string(),
            message: String::new(),
            branch: "main".to_string(),
        };

        let first = runner.create_agent_run(&request).await.unwrap();
        let second = runner.create_agent_run(&request).await.unwrap();
        assert_eq!(first.id, "dry-run-1");
        assert_eq!(second.id, "dry-run-2");
    }
}
