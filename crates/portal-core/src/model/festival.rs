use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::metadata::Metadata;

/// Festival calendar entry used for campaign planning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalEvent {
    /// Unique identifier (UUID v7)
    pub id: String,

    pub name: String,

    pub date: NaiveDate,

    pub description: Option<String>,

    /// Calendar grouping, e.g. "religious", "national"
    pub category: Option<String>,

    /// Campaign angles worth considering around this date
    pub marketing_ideas: Vec<String>,

    /// Extensible metadata storage
    pub metadata: Metadata,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FestivalEvent {
    pub fn new(id: String, name: String, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            date,
            description: None,
            category: None,
            marketing_ideas: Vec::new(),
            metadata: Metadata::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_festival_event() {
        let date = NaiveDate::from_ymd_opt(2026, 11, 8).unwrap();
        let event = FestivalEvent::new("festival-1".to_string(), "Diwali".to_string(), date);
        assert_eq!(event.date, date);
        assert!(event.marketing_ideas.is_empty());
    }
}
