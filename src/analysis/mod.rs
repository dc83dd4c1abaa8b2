//! Decision analysis engine.
//!
//! Category detection, adaptive question planning, answer scoring, and
//! follow-up synthesis. Everything here is pure, synchronous, and total;
//! the only shared state is the fixed keyword and template tables.

pub mod category;
pub mod followup;
pub mod planner;
pub mod scorer;
pub mod tiers;

pub use category::{detect_category, Category};
pub use followup::follow_up_questions;
pub use planner::{next_questions, question_key, MAX_BATCH};
pub use scorer::{analyze, Analysis, Answers};
pub use tiers::{classify_recommendation, Recommendation};
