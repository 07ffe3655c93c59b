//! Growth report heuristics.
//!
//! [`analyze`] turns journal entries and tasks into a [`GrowthReport`]. It is a
//! pure function of two counts and one rate:
//!
//! - `stress_count` / `positive_count`: distinct keywords found in the journal
//!   text (see [`keywords`]).
//! - `completion_rate`: rounded percentage of completed tasks (see
//!   [`productivity`]).
//!
//! Every field of the report is chosen from a fixed table by comparing those
//! numbers against fixed cut points. Tasks are never scanned for keywords.

pub mod keywords;
pub mod productivity;
pub mod templates;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

use crate::model::{JournalEntry, Task};

pub use keywords::{KeywordScan, POSITIVE_WORDS, STRESS_WORDS, scan_keywords};
pub use productivity::TaskTally;

/// Strongest emotional signal in the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DominantEmotion {
    Anxious,
    Positive,
    Neutral,
}

impl DominantEmotion {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Anxious => "Anxious",
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
        }
    }

    #[must_use]
    pub const fn classify(stress_count: usize, positive_count: usize) -> Self {
        if stress_count > positive_count {
            Self::Anxious
        } else if positive_count > 0 {
            Self::Positive
        } else {
            Self::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// `High` above two stress keywords, `Medium` for one or two, else `Low`.
    #[must_use]
    pub const fn from_stress_count(stress_count: usize) -> Self {
        match stress_count {
            0 => Self::Low,
            1 | 2 => Self::Medium,
            _ => Self::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Consistency {
    Excellent,
    Fluctuating,
}

impl Consistency {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Fluctuating => "Fluctuating",
        }
    }

    #[must_use]
    pub const fn from_completion_rate(completion_rate: u32) -> Self {
        if completion_rate > 80 {
            Self::Excellent
        } else {
            Self::Fluctuating
        }
    }
}

impl fmt::Display for DominantEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Consistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionalAnalysis {
    pub summary: String,
    pub dominant_emotion: DominantEmotion,
    pub stress_level: StressLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductivityAnalysis {
    /// Percentage in `0..=100`.
    pub completion_rate: u32,
    pub insight: String,
    pub consistency: Consistency,
}

/// Structured personal-growth report. The JSON shape is consumed by the
/// dashboard and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthReport {
    pub emotional_analysis: EmotionalAnalysis,
    pub productivity_analysis: ProductivityAnalysis,
    pub growth_areas: [String; 3],
    pub recommendations: [String; 2],
    pub encouragement: String,
}

impl GrowthReport {
    /// Assemble a report from already-computed signals.
    #[must_use]
    pub fn from_signals(scan: &KeywordScan, tally: TaskTally) -> Self {
        let stress = scan.stress_count();
        let positive = scan.positive_count();
        let rate = tally.completion_rate();
        let any_stress = stress > 0;

        Self {
            emotional_analysis: EmotionalAnalysis {
                summary: templates::summary(stress > positive).to_string(),
                dominant_emotion: DominantEmotion::classify(stress, positive),
                stress_level: StressLevel::from_stress_count(stress),
            },
            productivity_analysis: ProductivityAnalysis {
                completion_rate: rate,
                insight: templates::insight(rate > 60).to_string(),
                consistency: Consistency::from_completion_rate(rate),
            },
            growth_areas: [
                templates::focus_area(any_stress).to_string(),
                templates::work_area(rate < 50).to_string(),
                templates::AREA_MINDFULNESS.to_string(),
            ],
            recommendations: [
                templates::wellbeing_tip(any_stress).to_string(),
                templates::workflow_tip(rate < 60).to_string(),
            ],
            encouragement: templates::encouragement(any_stress).to_string(),
        }
    }
}

/// Build a growth report from journal entries and tasks.
///
/// Never fails: empty inputs give a neutral report with a zero completion rate.
#[must_use]
#[instrument(skip_all, fields(entries = entries.len(), tasks = tasks.len()))]
pub fn analyze(entries: &[JournalEntry], tasks: &[Task]) -> GrowthReport {
    let scan = scan_keywords(entries);
    let tally = TaskTally::from_tasks(tasks);
    debug!(
        stress = scan.stress_count(),
        positive = scan.positive_count(),
        completed = tally.completed,
        total = tally.total,
        "computed growth signals"
    );
    GrowthReport::from_signals(&scan, tally)
}
