use anyhow::{Context, Result};
use mongodb::{
    bson::{doc, to_document},
    options::IndexOptions,
    Database, IndexModel,
};
use prepmaster_catalog::{default_mcqs, default_problems, McqQuestion, Problem};
use serde::Serialize;

/// Counts of documents inserted by a seeding run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub problems_inserted: u64,
    pub mcqs_inserted: u64,
}

/// One-time population of empty content collections, run at boot before the
/// server accepts connections. Each collection is checked independently:
/// a non-empty collection is left untouched, so sequential restarts insert
/// nothing. Documents go in as `$setOnInsert` upserts keyed on their stable
/// `_id`, which makes two processes racing on the same empty store converge
/// on a single copy instead of duplicating it.
pub async fn run(mongo: &Database) -> Result<SeedReport> {
    ensure_user_email_index(mongo).await?;

    let mut report = SeedReport::default();

    let problems = mongo.collection::<Problem>("problems");
    let problem_count = problems
        .count_documents(doc! {})
        .await
        .context("Failed to count problems")?;

    if problem_count == 0 {
        report.problems_inserted = upsert_defaults(mongo, "problems", &default_problems(), |p| {
            p.id.clone()
        })
        .await?;
        tracing::info!(count = report.problems_inserted, "Seeded default problems");
    } else {
        tracing::debug!(count = problem_count, "Problems already present, seed skipped");
    }

    let mcqs = mongo.collection::<McqQuestion>("mcqs");
    let mcq_count = mcqs
        .count_documents(doc! {})
        .await
        .context("Failed to count mcqs")?;

    if mcq_count == 0 {
        report.mcqs_inserted =
            upsert_defaults(mongo, "mcqs", &default_mcqs(), |q| q.id.clone()).await?;
        tracing::info!(count = report.mcqs_inserted, "Seeded default MCQs");
    } else {
        tracing::debug!(count = mcq_count, "MCQs already present, seed skipped");
    }

    Ok(report)
}

async fn upsert_defaults<T, F>(
    mongo: &Database,
    collection_name: &str,
    defaults: &[T],
    id_of: F,
) -> Result<u64>
where
    T: Serialize + Send + Sync,
    F: Fn(&T) -> String,
{
    let collection = mongo.collection::<T>(collection_name);
    let mut inserted = 0u64;

    for item in defaults {
        let document = seed_document(item)?;

        let update = collection
            .update_one(
                doc! { "_id": id_of(item) },
                doc! { "$setOnInsert": document },
            )
            .upsert(true)
            .await
            .with_context(|| format!("Failed to upsert default into {}", collection_name))?;

        if update.upserted_id.is_some() {
            inserted += 1;
        }
    }

    Ok(inserted)
}

/// Serializes a default document for a `$setOnInsert` upsert. The serialized
/// `_id` is stripped because the filter already pins it and Mongo rejects
/// updates that try to set `_id` themselves.
fn seed_document<T>(item: &T) -> Result<mongodb::bson::Document>
where
    T: Serialize + Send + Sync,
{
    let mut document = to_document(item).context("Failed to serialize default document")?;
    document.remove("_id");
    Ok(document)
}

/// The unique index on `users.email` is the true arbiter for concurrent
/// registrations racing on the same address.
async fn ensure_user_email_index(mongo: &Database) -> Result<()> {
    let users = mongo.collection::<mongodb::bson::Document>("users");
    let index = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();

    users
        .create_index(index)
        .await
        .context("Failed to create unique email index")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exercises the generic path with both seeded document types, so a bound
    // that only one of them satisfies cannot slip back in.
    fn documents_of<T>(defaults: &[T]) -> Vec<mongodb::bson::Document>
    where
        T: Serialize + Send + Sync,
    {
        defaults
            .iter()
            .map(|item| seed_document(item).expect("default must serialize"))
            .collect()
    }

    #[test]
    fn seed_documents_never_carry_their_own_id() {
        for document in documents_of(&default_problems()) {
            assert!(!document.contains_key("_id"));
            assert!(document.contains_key("title"));
        }

        for document in documents_of(&default_mcqs()) {
            assert!(!document.contains_key("_id"));
            assert!(document.contains_key("topicId"));
        }
    }
}
