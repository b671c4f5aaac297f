//! Shared data model and canonical default dataset for PrepMaster.
//!
//! Both the API server (seeding, server-side fallback) and the client
//! (offline fallback) depend on this crate, so the "live" and "fallback"
//! query paths are guaranteed to agree on shape and on the canonical
//! content they start from.

pub mod defaults;
pub mod types;

pub use defaults::{
    default_mcqs, default_mcqs_for_topic, default_problems, languages, topics,
};
pub use types::{
    AuthResponse, Difficulty, Example, Language, McqQuestion, Problem, SubmissionOutcome, Topic,
    UserSummary,
};
