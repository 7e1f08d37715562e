//! Mood distribution over a window of entries.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::color_entry::{ColorEntry, MoodRow};

pub const DEFAULT_MOOD: &str = "Neutral";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MoodStatistics {
    pub total_entries: usize,
    pub mood_counts: BTreeMap<String, u64>,
    pub mood_percentages: BTreeMap<String, f64>,
}

/// Anything that carries a mood label. Missing or empty labels count as [`DEFAULT_MOOD`].
pub trait MoodLabel {
    fn mood_label(&self) -> Option<&str>;
}

impl MoodLabel for ColorEntry {
    fn mood_label(&self) -> Option<&str> {
        self.mood.as_deref()
    }
}

impl MoodLabel for MoodRow {
    fn mood_label(&self) -> Option<&str> {
        self.mood.as_deref()
    }
}

#[cfg(test)]
impl MoodLabel for Option<String> {
    fn mood_label(&self) -> Option<&str> {
        self.as_deref()
    }
}

#[cfg(test)]
impl MoodLabel for &str {
    fn mood_label(&self) -> Option<&str> {
        Some(*self)
    }
}

/// Count each label and express it as a percentage of all entries, rounded to
/// one decimal. An empty window yields empty maps.
pub fn aggregate<T: MoodLabel>(entries: &[T]) -> MoodStatistics {
    let mut mood_counts: BTreeMap<String, u64> = BTreeMap::new();
    for entry in entries {
        let label = entry
            .mood_label()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MOOD);
        *mood_counts.entry(label.to_string()).or_insert(0) += 1;
    }

    let total_entries = entries.len();
    let mood_percentages = if total_entries == 0 {
        BTreeMap::new()
    } else {
        mood_counts
            .iter()
            .map(|(mood, &count)| {
                let pct = count as f64 / total_entries as f64 * 100.0;
                (mood.clone(), round_one_decimal(pct))
            })
            .collect()
    };

    MoodStatistics {
        total_entries,
        mood_counts,
        mood_percentages,
    }
}

/// Round to one decimal, ties to even on the exact binary value (6.25 -> 6.2).
///
/// Scaling by 10 first would itself round, so this goes through the float
/// formatter, which rounds the exact value.
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
