pub mod codegen;
pub mod dry_run;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;
use types::*;

#[async_trait]
pub trait AgentRunner: Send + Sync {
    /// Create a remote agent run. Returns once the run is accepted, not when it finishes.
    async fn create_agent_run(&self, request: &AgentRunRequest) -> Result<AgentRun>;
}
