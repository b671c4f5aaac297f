use async_trait::async_trait;
use prepmaster_catalog::SubmissionOutcome;

/// Capability seam for solution judging. The data-access layer only depends
/// on this contract, so a real sandboxed executor can replace the simulated
/// judge without touching callers.
#[async_trait]
pub trait SolutionJudge: Send + Sync {
    async fn judge(&self, problem_id: &str, code: &str) -> SubmissionOutcome;
}

/// Placeholder judge: accepts every submission. This is not an execution
/// engine and does not look at the code.
pub struct SimulatedJudge;

#[async_trait]
impl SolutionJudge for SimulatedJudge {
    async fn judge(&self, problem_id: &str, _code: &str) -> SubmissionOutcome {
        tracing::info!(problem_id, "Simulated judge accepting submission");
        SubmissionOutcome::accepted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simulated_judge_always_accepts() {
        let judge = SimulatedJudge;
        let outcome = judge.judge("1", "fn main() {}").await;
        assert_eq!(outcome.status, "Accepted");
        assert_eq!(outcome.points, 50);

        // Deterministic regardless of input
        let again = judge.judge("2", "").await;
        assert_eq!(outcome, again);
    }
}
