pub mod item;
pub mod submit;

use std::io::Write;

use crate::agent::prompt::render_prompt;
use crate::config::BatchConfig;
use crate::platform::AgentRunner;

use item::WorkItem;
use submit::{submit, SubmissionResult};

const RULE_WIDTH: usize = 60;

/// Aggregate counts for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub created_count: usize,
    pub failed_count: usize,
    pub total: usize,
}

impl BatchOutcome {
    fn record(&mut self, result: &SubmissionResult) {
        if result.is_created() {
            self.created_count += 1;
        } else {
            self.failed_count += 1;
        }
    }
}

/// Display-only completion estimate in minutes. Not a measured duration.
pub fn estimated_minutes(total: usize, per_item_seconds: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    total as f64 * per_item_seconds as f64 / 60.0
}

/// Submit one agent run per item, in order, writing progress to `out`.
///
/// A failed submission is reported and counted; the loop always covers every item.
pub async fn run_batch<W: Write>(
    runner: &dyn AgentRunner,
    items: &[WorkItem],
    settings: &BatchConfig,
    out: &mut W,
) -> BatchOutcome {
    let total = items.len();
    let mut outcome = BatchOutcome {
        total,
        ..BatchOutcome::default()
    };

    emit(out, format_args!("📊 Total repositories to analyze: {total}"));
    tracing::info!(
        total,
        branch = %settings.branch,
        namespace = %settings.namespace,
        "Starting batch"
    );

    for (idx, item) in items.iter().enumerate() {
        let position = idx + 1;
        emit(
            out,
            format_args!("[{position}/{total}] Creating agent for: {}", item.name),
        );

        let payload = render_prompt(item, &settings.branch);
        let result = submit(runner, item, payload, &settings.branch, &settings.namespace).await;

        match &result {
            SubmissionResult::Created { item, run_id } => {
                tracing::info!(repo = %item.name, run_id = %run_id, "Agent run created");
                emit(out, format_args!("  ✅ Created agent run ID: {run_id}"));
            }
            SubmissionResult::Failed { item, error } => {
                tracing::warn!(repo = %item.name, error = %error, "Agent run creation failed");
                emit(out, format_args!("  ❌ Failed: {}: {error}", item.name));
            }
        }

        outcome.record(&result);
    }

    write_summary(out, &outcome, settings.per_item_seconds);
    tracing::info!(
        created = outcome.created_count,
        failed = outcome.failed_count,
        total = outcome.total,
        "Batch complete"
    );

    outcome
}

fn write_summary<W: Write>(out: &mut W, outcome: &BatchOutcome, per_item_seconds: u64) {
    let rule = "=".repeat(RULE_WIDTH);
    let minutes = estimated_minutes(outcome.total, per_item_seconds);

    emit(out, format_args!("\n{rule}"));
    emit(
        out,
        format_args!(
            "✅ Successfully created: {} agent runs",
            outcome.created_count
        ),
    );
    emit(out, format_args!("❌ Failed: {}", outcome.failed_count));
    emit(out, format_args!("⏱️  Estimated completion: ~{minutes:.1} minutes"));
    emit(out, format_args!("{rule}"));
}

// Progress output is best effort; a broken stdout must not stop submissions.
fn emit<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{line}") {
        tracing::debug!(error = %e, "Failed to write progress line");
    }
}
