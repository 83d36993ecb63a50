use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::platform::types::{AgentRun, AgentRunRequest, RunId};
use crate::platform::AgentRunner;

/// Agent-run client backed by the hosted REST API.
pub struct CodegenRunner {
    client: Client,
    base_url: String,
    org_id: String,
    token: String,
}

impl CodegenRunner {
    pub fn new(base_url: &str, org_id: &str, token: &str) -> Self {
        Self::with_client(Client::new(), base_url, org_id, token)
    }

    pub fn with_client(client: Client, base_url: &str, org_id: &str, token: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            org_id: org_id.to_string(),
            token: token.to_string(),
        }
    }

    fn agent_run_url(&self) -> String {
        format!(
            "{}/v1/organizations/{}/agent/run",
            self.base_url, self.org_id
        )
    }
}

#[async_trait]
impl AgentRunner for CodegenRunner {
    async fn create_agent_run(&self, request: &AgentRunRequest) -> Result<AgentRun> {
        let body = CreateAgentRunBody {
            repo: &request.repo,
            prompt: &request.message,
            branch: &request.branch,
        };

        let response = self
            .client
            .post(self.agent_run_url())
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::AgentApi(format!("API returned {status}: {body}")));
        }

        let text = response.text().await?;
        let created: CreateAgentRunResponse = serde_json::from_str(&text)?;

        tracing::debug!(repo = %request.repo, run_id = %created.id, "Agent run accepted");

        Ok(AgentRun {
            id: created.id.to_string(),
        })
    }
}

// --- Wire types ---

#[derive(Debug, Serialize)]
struct CreateAgentRunBody<'a> {
    repo: &'a str,
    prompt: &'a str,
    branch: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateAgentRunResponse {
    id: RunId,
}
