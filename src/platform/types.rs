use serde::Deserialize;

/// Everything needed to start one agent run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRunRequest {
    /// Target repository as `owner/name`.
    pub repo: String,
    pub message: String,
    pub branch: String,
}

/// A run accepted by the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRun {
    pub id: String,
}

/// Run ids come back as numbers from some deployments and strings from others.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RunId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunId::Number(n) => write!(f, "{n}"),
            RunId::Text(s) => f.write_str(s),
        }
    }
}
