// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod errors;
pub mod output;
pub mod storage;

// Re-export commonly used types
pub use crate::analysis::{
    analyze, classify_recommendation, detect_category, follow_up_questions, next_questions,
    question_key, Analysis, Answers, Category, Recommendation,
};
pub use crate::errors::StoreError;
pub use crate::storage::{DecisionRecord, DecisionStatus, DecisionStore, Statistics};
