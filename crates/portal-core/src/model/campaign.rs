use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::metadata::Metadata;
use crate::errors::PortalError;

/// Lifecycle status of a marketing campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Planning,
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Planning => "planning",
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }
}

impl FromStr for CampaignStatus {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planning" => Ok(CampaignStatus::Planning),
            "active" => Ok(CampaignStatus::Active),
            "paused" => Ok(CampaignStatus::Paused),
            "completed" => Ok(CampaignStatus::Completed),
            other => Err(PortalError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// Funnel counters for a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CampaignMetrics {
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
}

impl CampaignMetrics {
    /// Click-through rate in percent, zero when there are no impressions
    pub fn click_through_rate(&self) -> f64 {
        if self.impressions == 0 {
            0.0
        } else {
            self.clicks as f64 / self.impressions as f64 * 100.0
        }
    }

    /// Conversion rate in percent, zero when there are no clicks
    pub fn conversion_rate(&self) -> f64 {
        if self.clicks == 0 {
            0.0
        } else {
            self.conversions as f64 / self.clicks as f64 * 100.0
        }
    }
}

/// Marketing campaign document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Unique identifier (UUID v7)
    pub id: String,

    pub name: String,

    pub description: Option<String>,

    pub status: CampaignStatus,

    /// Platform label (free text, e.g. "instagram", "email")
    pub platform: Option<String>,

    pub budget: Option<f64>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    pub metrics: CampaignMetrics,

    /// Extensible metadata storage
    pub metadata: Metadata,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    /// Create a new Campaign in `planning` status with zeroed metrics
    pub fn new(id: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            status: CampaignStatus::Planning,
            platform: None,
            budget: None,
            start_date: None,
            end_date: None,
            metrics: CampaignMetrics::default(),
            metadata: Metadata::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_live(&self) -> bool {
        self.status == CampaignStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_campaign_defaults() {
        let campaign = Campaign::new("campaign-1".to_string(), "Holi Promo".to_string());
        assert_eq!(campaign.status, CampaignStatus::Planning);
        assert!(!campaign.is_live());
        assert_eq!(campaign.metrics, CampaignMetrics::default());
    }

    #[test]
    fn test_metrics_rates() {
        let metrics = CampaignMetrics {
            impressions: 10_000,
            clicks: 250,
            conversions: 50,
        };
        assert_eq!(metrics.click_through_rate(), 2.5);
        assert_eq!(metrics.conversion_rate(), 20.0);
    }

    #[test]
    fn test_metrics_rates_guard_division_by_zero() {
        let metrics = CampaignMetrics::default();
        assert_eq!(metrics.click_through_rate(), 0.0);
        assert_eq!(metrics.conversion_rate(), 0.0);
    }
}
