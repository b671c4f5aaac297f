//! Canonical default content. Seeded into an empty store at boot and served
//! as the Fallback Dataset whenever the live backend is unreachable.

use crate::types::{Difficulty, Example, Language, McqQuestion, Problem, Topic};
use std::collections::BTreeMap;

/// Languages offered by the playground editor.
pub fn languages() -> Vec<Language> {
    [
        ("javascript", "JavaScript"),
        ("python", "Python"),
        ("java", "Java"),
        ("cpp", "C++"),
    ]
    .into_iter()
    .map(|(id, name)| Language {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Static MCQ topic catalog.
pub fn topics() -> Vec<Topic> {
    [
        ("java", "Java Programming", "☕", 120),
        ("dbms", "Database Systems", "🗄️", 85),
        ("os", "Operating Systems", "💻", 64),
        ("aptitude", "Aptitude & Logic", "🧠", 210),
        ("networking", "Networking", "🌐", 45),
    ]
    .into_iter()
    .map(|(id, name, icon, count)| Topic {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        count,
    })
    .collect()
}

fn starter_code(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(lang, code)| (lang.to_string(), code.to_string()))
        .collect()
}

/// The canonical problem set.
pub fn default_problems() -> Vec<Problem> {
    vec![
        Problem {
            id: "1".to_string(),
            title: "Two Sum".to_string(),
            difficulty: Difficulty::Easy,
            category: "Arrays".to_string(),
            description: "Given an array of integers nums and an integer target, return \
                indices of the two numbers such that they add up to target. You may assume \
                that each input would have exactly one solution, and you may not use the \
                same element twice."
                .to_string(),
            constraints: vec![
                "2 <= nums.length <= 10^4".to_string(),
                "-10^9 <= nums[i] <= 10^9".to_string(),
                "-10^9 <= target <= 10^9".to_string(),
            ],
            examples: vec![Example {
                input: "nums = [2,7,11,15], target = 9".to_string(),
                output: "[0,1]".to_string(),
                explanation: Some(
                    "Because nums[0] + nums[1] == 9, we return [0, 1].".to_string(),
                ),
            }],
            starter_code: starter_code(&[
                (
                    "javascript",
                    "function twoSum(nums, target) {\n  // Write your code here\n};",
                ),
                (
                    "python",
                    "class Solution:\n    def twoSum(self, nums: List[int], target: int) -> List[int]:\n        pass",
                ),
                (
                    "java",
                    "class Solution {\n    public int[] twoSum(int[] nums, int target) {\n        \n    }\n}",
                ),
                (
                    "cpp",
                    "class Solution {\npublic:\n    vector<int> twoSum(vector<int>& nums, int target) {\n        \n    }\n};",
                ),
            ]),
        },
        Problem {
            id: "2".to_string(),
            title: "Valid Parentheses".to_string(),
            difficulty: Difficulty::Easy,
            category: "Stacks".to_string(),
            description: "Given a string s containing just the characters \"(\", \")\", \
                \"{\", \"}\", \"[\" and \"]\", determine if the input string is valid."
                .to_string(),
            constraints: vec![
                "1 <= s.length <= 10^4".to_string(),
                "s consists of parentheses only \"()[]{}\"".to_string(),
            ],
            examples: vec![
                Example {
                    input: "s = \"()\"".to_string(),
                    output: "true".to_string(),
                    explanation: None,
                },
                Example {
                    input: "s = \"()[]{}\"".to_string(),
                    output: "true".to_string(),
                    explanation: None,
                },
                Example {
                    input: "s = \"(]\"".to_string(),
                    output: "false".to_string(),
                    explanation: None,
                },
            ],
            starter_code: starter_code(&[
                ("javascript", "function isValid(s) {\n  \n};"),
                (
                    "python",
                    "class Solution:\n    def isValid(self, s: str) -> bool:\n        pass",
                ),
                (
                    "java",
                    "class Solution {\n    public boolean isValid(String s) {\n        \n    }\n}",
                ),
                (
                    "cpp",
                    "class Solution {\npublic:\n    bool isValid(string s) {\n        \n    }\n};",
                ),
            ]),
        },
    ]
}

/// The canonical MCQ set.
pub fn default_mcqs() -> Vec<McqQuestion> {
    vec![
        McqQuestion {
            id: "m1".to_string(),
            topic_id: "java".to_string(),
            question: "Which of these is not a feature of Java?".to_string(),
            options: vec![
                "Object-oriented".to_string(),
                "Use of pointers".to_string(),
                "Platform independent".to_string(),
                "Architecture neutral".to_string(),
            ],
            correct_answer: 1,
            explanation: "Java does not support pointers to ensure security and simplicity."
                .to_string(),
        },
        McqQuestion {
            id: "m2".to_string(),
            topic_id: "java".to_string(),
            question: "What is the extension of a Java bytecode file?".to_string(),
            options: vec![
                ".java".to_string(),
                ".js".to_string(),
                ".class".to_string(),
                ".obj".to_string(),
            ],
            correct_answer: 2,
            explanation: "The compiler generates a .class file containing the bytecode."
                .to_string(),
        },
        McqQuestion {
            id: "m3".to_string(),
            topic_id: "dbms".to_string(),
            question: "What does SQL stand for?".to_string(),
            options: vec![
                "Strong Question Language".to_string(),
                "Structured Query Language".to_string(),
                "Structured Question Layout".to_string(),
                "Standard Query List".to_string(),
            ],
            correct_answer: 1,
            explanation: "SQL stands for Structured Query Language, used for managing \
                relational databases."
                .to_string(),
        },
    ]
}

/// Default MCQs filtered by topic, with the same predicate the live query
/// path uses. An unknown topic yields an empty list, not an error.
pub fn default_mcqs_for_topic(topic_id: &str) -> Vec<McqQuestion> {
    default_mcqs()
        .into_iter()
        .filter(|q| q.topic_id == topic_id)
        .collect()
}
