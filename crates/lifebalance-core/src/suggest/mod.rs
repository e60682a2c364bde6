//! Asynchronous suggestion panels: query types, the request/response
//! wrapper shared by the meal-planner and life-hack panels, and the
//! Gemini-backed service client.

mod gemini;
mod requester;

pub use gemini::GeminiService;
pub use requester::{SuggestionRequester, SuggestionStatus, Ticket};

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SuggestionError;

/// Cooking-time budget for meal suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBudget {
    Min15,
    Min30,
    Min45,
    HourPlus,
}

impl TimeBudget {
    pub const ALL: [TimeBudget; 4] = [
        TimeBudget::Min15,
        TimeBudget::Min30,
        TimeBudget::Min45,
        TimeBudget::HourPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeBudget::Min15 => "15 mins",
            TimeBudget::Min30 => "30 mins",
            TimeBudget::Min45 => "45 mins",
            TimeBudget::HourPlus => "1 hour+",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.label() == label.trim())
    }
}

impl Default for TimeBudget {
    fn default() -> Self {
        TimeBudget::Min30
    }
}

impl fmt::Display for TimeBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Life-hack categories. The selector defaults to the first entry and is
/// never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HackCategory {
    MorningRoutine,
    ProductivityBoosters,
    WorkBreaks,
    StressManagement,
    HomeOrganization,
    StudyHabits,
    SleepHygiene,
    HealthyEating,
    DigitalDetox,
}

impl HackCategory {
    pub const ALL: [HackCategory; 9] = [
        HackCategory::MorningRoutine,
        HackCategory::ProductivityBoosters,
        HackCategory::WorkBreaks,
        HackCategory::StressManagement,
        HackCategory::HomeOrganization,
        HackCategory::StudyHabits,
        HackCategory::SleepHygiene,
        HackCategory::HealthyEating,
        HackCategory::DigitalDetox,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HackCategory::MorningRoutine => "Morning Routine",
            HackCategory::ProductivityBoosters => "Productivity Boosters",
            HackCategory::WorkBreaks => "Work Breaks",
            HackCategory::StressManagement => "Stress Management",
            HackCategory::HomeOrganization => "Home Organization",
            HackCategory::StudyHabits => "Study Habits",
            HackCategory::SleepHygiene => "Sleep Hygiene",
            HackCategory::HealthyEating => "Healthy Eating",
            HackCategory::DigitalDetox => "Digital Detox",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().to_ascii_lowercase() == wanted)
    }
}

impl Default for HackCategory {
    fn default() -> Self {
        HackCategory::MorningRoutine
    }
}

impl fmt::Display for HackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The consumed text-generation service. Both operations may fail with an
/// opaque error and return free-form natural language, not structured
/// data.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    async fn generate_meal_ideas(
        &self,
        ingredients: &str,
        time_budget: TimeBudget,
    ) -> Result<String, SuggestionError>;

    async fn generate_life_hack(
        &self,
        category: HackCategory,
    ) -> Result<String, SuggestionError>;
}

/// Strip one leading and one trailing `"` before display. A pure text
/// rule for life-hack results, not truncation or sanitization.
pub fn strip_surrounding_quotes(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

/// Thin wrapper around the OS keyring for the suggestion API key.
pub mod keyring_store {
    const SERVICE: &str = "lifebalance";

    pub fn get(key: &str) -> Result<Option<String>, Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.get_password() {
            Ok(pw) => Ok(Some(pw)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set(key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        entry.set_password(value)?;
        Ok(())
    }

    pub fn delete(key: &str) -> Result<(), Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_stripping_removes_one_pair() {
        assert_eq!(strip_surrounding_quotes("\"hack\""), "hack");
        assert_eq!(strip_surrounding_quotes("\"\"nested\"\""), "\"nested\"");
        assert_eq!(strip_surrounding_quotes("plain"), "plain");
        assert_eq!(strip_surrounding_quotes("  \"padded\"  "), "padded");
        // Inner quotes survive.
        assert_eq!(strip_surrounding_quotes("say \"hi\" now"), "say \"hi\" now");
    }

    #[test]
    fn hack_selector_defaults_to_first_entry() {
        assert_eq!(HackCategory::default(), HackCategory::ALL[0]);
    }

    #[test]
    fn labels_roundtrip() {
        for budget in TimeBudget::ALL {
            assert_eq!(TimeBudget::from_label(budget.label()), Some(budget));
        }
        for category in HackCategory::ALL {
            assert_eq!(HackCategory::from_label(category.label()), Some(category));
        }
        assert_eq!(HackCategory::from_label("Couch Surfing"), None);
    }
}
