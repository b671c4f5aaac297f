use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Problem difficulty tiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A worked example attached to a problem statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Example {
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// A coding problem as stored in the "problems" collection and served over
/// the wire. Problems keep stable string ids so the seeded store and the
/// bundled defaults refer to the same documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub description: String,
    pub constraints: Vec<String>,
    pub examples: Vec<Example>,
    pub starter_code: BTreeMap<String, String>,
}

impl Problem {
    /// Starter code for the requested editor language. Problems are expected
    /// to carry starter code for every offered language; when a key is
    /// absent the lookup degrades deterministically: `javascript` first,
    /// then the lexicographically smallest language present.
    pub fn starter_code_for(&self, language_id: &str) -> Option<&str> {
        self.starter_code
            .get(language_id)
            .or_else(|| self.starter_code.get("javascript"))
            .map(String::as_str)
            .or_else(|| {
                self.starter_code
                    .first_key_value()
                    .map(|(_, code)| code.as_str())
            })
    }
}

/// A multiple-choice question belonging to a topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct McqQuestion {
    #[serde(rename = "_id")]
    pub id: String,
    pub topic_id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

impl McqQuestion {
    /// The answer index must point into `options`.
    pub fn has_valid_answer(&self) -> bool {
        self.correct_answer < self.options.len()
    }
}

/// A named MCQ category from the static topic catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub count: u32,
}

/// A programming language offered by the playground editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    pub id: String,
    pub name: String,
}

/// Non-sensitive user shape returned by auth endpoints. `solved_problems`
/// and `points` default to empty so both the server summary and the richer
/// offline session shape deserialize into it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub solved_problems: Vec<String>,
    #[serde(default)]
    pub points: i64,
}

/// Body of a successful register/login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Result of submitting a solution. The current judge is simulated and
/// always accepts; a real execution engine plugs in behind the same shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub status: String,
    pub points: i64,
}

impl SubmissionOutcome {
    pub fn accepted() -> Self {
        Self {
            status: "Accepted".to_string(),
            points: 50,
        }
    }
}
