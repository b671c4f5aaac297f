use crate::services::AppState;
use futures::TryStreamExt;
use mongodb::{bson::doc, Database};
use prepmaster_catalog::{
    default_mcqs, default_mcqs_for_topic, default_problems, McqQuestion, Problem,
    SubmissionOutcome,
};

/// Read-only query surface over problems and topic-scoped MCQs.
///
/// Reads never fail: on a persistence error (or an unseeded store) the
/// service serves the bundled defaults, so freshness degrades but liveness
/// does not. The degradation is logged for observability.
pub struct ContentService {
    mongo: Database,
}

impl ContentService {
    pub fn new(state: &AppState) -> Self {
        Self {
            mongo: state.mongo.clone(),
        }
    }

    pub async fn list_problems(&self) -> Vec<Problem> {
        let collection = self.mongo.collection::<Problem>("problems");

        let live: Result<Vec<Problem>, mongodb::error::Error> = async {
            collection.find(doc! {}).await?.try_collect().await
        }
        .await;

        match live {
            Ok(problems) if !problems.is_empty() => problems,
            Ok(_) => {
                tracing::warn!("Problems collection empty, serving bundled defaults");
                default_problems()
            }
            Err(e) => {
                tracing::warn!("Failed to load problems, serving bundled defaults: {}", e);
                default_problems()
            }
        }
    }

    /// MCQs filtered by topic when given. An authored-free topic yields an
    /// empty list, not an error.
    pub async fn list_mcqs(&self, topic_id: Option<&str>) -> Vec<McqQuestion> {
        let collection = self.mongo.collection::<McqQuestion>("mcqs");

        let filter = match topic_id {
            Some(topic) => doc! { "topicId": topic },
            None => doc! {},
        };

        let live: Result<Vec<McqQuestion>, mongodb::error::Error> = async {
            collection.find(filter).await?.try_collect().await
        }
        .await;

        match live {
            Ok(mcqs) if !mcqs.is_empty() => mcqs,
            Ok(_) => {
                // A seeded store may legitimately have no questions for
                // this topic; only an unseeded store triggers fallback.
                if self.store_has_mcqs().await {
                    return Vec::new();
                }
                tracing::warn!("MCQ collection empty, serving bundled defaults");
                fallback_mcqs(topic_id)
            }
            Err(e) => {
                tracing::warn!("Failed to load MCQs, serving bundled defaults: {}", e);
                fallback_mcqs(topic_id)
            }
        }
    }

    async fn store_has_mcqs(&self) -> bool {
        self.mongo
            .collection::<McqQuestion>("mcqs")
            .count_documents(doc! {})
            .await
            .map(|count| count > 0)
            .unwrap_or(false)
    }
}

fn fallback_mcqs(topic_id: Option<&str>) -> Vec<McqQuestion> {
    match topic_id {
        Some(topic) => default_mcqs_for_topic(topic),
        None => default_mcqs(),
    }
}

/// Submission passes through the injected judge; the service itself knows
/// nothing about code execution.
pub async fn submit_solution(
    state: &AppState,
    problem_id: &str,
    code: &str,
) -> SubmissionOutcome {
    state.judge.judge(problem_id, code).await
}
