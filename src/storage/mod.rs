//! Decision record persistence.
//!
//! Records live in a single JSON document. Every operation loads the whole
//! document and writes it back; the store keeps no state between calls. A
//! missing or unreadable document loads as the empty store.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{Analysis, Answers};
use crate::errors::StoreError;

pub mod location;

/// Lifecycle state of a decision record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    Pending,
    Done,
    Abandoned,
}

impl DecisionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStatus::Pending => "pending",
            DecisionStatus::Done => "done",
            DecisionStatus::Abandoned => "abandoned",
        }
    }

    /// Display label with status emoji.
    pub fn label(&self) -> &'static str {
        match self {
            DecisionStatus::Pending => "⏳ 待執行",
            DecisionStatus::Done => "✅ 已完成",
            DecisionStatus::Abandoned => "❌ 已放棄",
        }
    }
}

/// One persisted decision with its collected answers and analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub id: u64,
    pub question: String,
    pub answers: Answers,
    pub analysis: Analysis,
    pub recommendation: String,
    pub created_at: DateTime<Utc>,
    pub status: DecisionStatus,
    pub review_at: Option<DateTime<Utc>>,
    pub result: Option<String>,
}

/// Aggregate counts over all records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub pending: usize,
    pub done: usize,
    pub abandoned: usize,
    /// Share of done decisions whose recorded outcome adopted the
    /// recommendation, as a percentage.
    pub adoption_rate: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreData {
    decisions: Vec<DecisionRecord>,
    next_id: u64,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            decisions: Vec::new(),
            next_id: 1,
        }
    }
}

/// Outcome words that count as adopting the recommendation.
const ADOPTED_RESULTS: &[&str] = &["接受", "同意", "去", "做"];

/// File-backed decision store.
pub struct DecisionStore {
    path: PathBuf,
}

impl DecisionStore {
    /// Open a store at an explicit file path, creating an empty store file
    /// (and parent directories) when none exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
        }

        let store = Self { path };
        if !store.path.exists() {
            store.save(&StoreData::default())?;
        }
        Ok(store)
    }

    /// Open the store at the default location (see [`location::resolve`]).
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(location::resolve(None))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreData {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                log::warn!(
                    "store file {} is unreadable ({err}), starting empty",
                    self.path.display()
                );
                StoreData::default()
            }),
            Err(_) => StoreData::default(),
        }
    }

    fn save(&self, data: &StoreData) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Persist a freshly analyzed decision; returns its assigned id.
    pub fn create(
        &self,
        question: &str,
        answers: Answers,
        analysis: Analysis,
    ) -> Result<u64, StoreError> {
        let mut data = self.load();
        let id = data.next_id;

        data.decisions.push(DecisionRecord {
            id,
            question: question.to_string(),
            recommendation: analysis.recommendation.label().to_string(),
            answers,
            analysis,
            created_at: Utc::now(),
            status: DecisionStatus::Pending,
            review_at: None,
            result: None,
        });
        data.next_id += 1;

        self.save(&data)?;
        log::info!("stored decision #{id}");
        Ok(id)
    }

    pub fn list(&self) -> Result<Vec<DecisionRecord>, StoreError> {
        Ok(self.load().decisions)
    }

    pub fn get(&self, id: u64) -> Result<Option<DecisionRecord>, StoreError> {
        Ok(self.load().decisions.into_iter().find(|d| d.id == id))
    }

    /// Transition a record's lifecycle state, optionally noting the outcome.
    /// Leaving the pending state stamps the review time.
    pub fn update_status(
        &self,
        id: u64,
        status: DecisionStatus,
        result: Option<String>,
    ) -> Result<(), StoreError> {
        let mut data = self.load();
        let record = data
            .decisions
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(StoreError::RecordNotFound(id))?;

        record.status = status;
        if result.is_some() {
            record.result = result;
        }
        if matches!(status, DecisionStatus::Done | DecisionStatus::Abandoned) {
            record.review_at = Some(Utc::now());
        }

        self.save(&data)
    }

    pub fn statistics(&self) -> Result<Statistics, StoreError> {
        let decisions = self.load().decisions;

        let count = |status: DecisionStatus| {
            decisions
                .iter()
                .filter(|record| record.status == status)
                .count()
        };
        let total = decisions.len();
        let pending = count(DecisionStatus::Pending);
        let done = count(DecisionStatus::Done);
        let abandoned = count(DecisionStatus::Abandoned);

        let adopted = decisions
            .iter()
            .filter(|record| {
                record.result.as_ref().is_some_and(|result| {
                    let lowered = result.to_lowercase();
                    ADOPTED_RESULTS.contains(&lowered.as_str())
                })
            })
            .count();
        let adoption_rate = if done > 0 {
            adopted as f64 / done as f64 * 100.0
        } else {
            0.0
        };

        Ok(Statistics {
            total,
            pending,
            done,
            abandoned,
            adoption_rate,
        })
    }
}
