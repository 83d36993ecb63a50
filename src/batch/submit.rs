use crate::batch::item::WorkItem;
use crate::platform::types::AgentRunRequest;
use crate::platform::AgentRunner;

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Created { item: WorkItem, run_id: String },
    Failed { item: WorkItem, error: String },
}

impl SubmissionResult {
    pub fn is_created(&self) -> bool {
        matches!(self, SubmissionResult::Created { .. })
    }
}

/// Submission target for an item: `namespace/name`, name taken verbatim.
pub fn target(namespace: &str, name: &str) -> String {
    format!("{namespace}/{name}")
}

/// Submit one agent run. Client errors become `Failed`; nothing is retried.
pub async fn submit(
    runner: &dyn AgentRunner,
    item: &WorkItem,
    payload: String,
    branch: &str,
    namespace: &str,
) -> SubmissionResult {
    let request = AgentRunRequest {
        repo: target(namespace, &item.name),
        message: payload,
        branch: branch.to_string(),
    };

    match runner.create_agent_run(&request).await {
        Ok(run) => SubmissionResult::Created {
            item: item.clone(),
            run_id: run.id,
        },
        Err(e) => SubmissionResult::Failed {
            item: item.clone(),
            error: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, Result};
    use crate::platform::types::AgentRun;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingRunner {
        fail: bool,
        seen: Mutex<Vec<AgentRunRequest>>,
    }

    #[async_trait]
    impl AgentRunner for RecordingRunner {
        async fn create_agent_run(&self, request: &AgentRunRequest) -> Result<AgentRun> {
            self.seen.lock().unwrap().push(request.clone());
            if self.fail {
                Err(AppError::AgentApi("invalid target".to_string()))
            } else {
                Ok(AgentRun {
                    id: "run-1".to_string(),
                })
            }
        }
    }

    fn item(name: &str) -> WorkItem {
        WorkItem {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_target_is_prefix_and_verbatim_name() {
        assert_eq!(target("Zeeeepa", "my-repo"), "Zeeeepa/my-repo");
        assert_eq!(target("Zeeeepa", ""), "Zeeeepa/");
        assert_eq!(target("acme", "a/b c"), "acme/a/b c");
    }

    #[tokio::test]
    async fn test_submit_success_builds_request() {
        let runner = RecordingRunner {
            fail: false,
            seen: Mutex::new(Vec::new()),
        };

        let result = submit(&runner, &item("my-repo"), "payload".to_string(), "cicd-ratings", "acme").await;
        assert_eq!(
            result,
            SubmissionResult::Created {
                item: item("my-repo"),
                run_id: "run-1".to_string(),
            }
        );

        let seen = runner.seen.lock().unwrap();
        assert_eq!(
            seen.as_slice(),
            &[AgentRunRequest {
                repo: "acme/my-repo".to_string(),
                message: "payload".to_string(),
                branch: "cicd-ratings".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_submit_failure_is_captured_once() {
        let runner = RecordingRunner {
            fail: true,
            seen: Mutex::new(Vec::new()),
        };

        let result = submit(&runner, &item("broken"), String::new(), "main", "acme").await;
        assert!(!result.is_created());
        match result {
            SubmissionResult::Failed { item, error } => {
                assert_eq!(item.name, "broken");
                assert!(error.contains("invalid target"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(runner.seen.lock().unwrap().len(), 1);
    }
}
