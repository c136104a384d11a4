use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::client_ops::validate_name;
use super::store::Store;
use crate::errors::{PortalError, Result};
use crate::model::{Campaign, CampaignMetrics, CampaignStatus, FestivalEvent, Metadata};

/// Fields for creating a marketing campaign
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Partial update for a campaign; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<CampaignStatus>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub metrics: Option<CampaignMetrics>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// Fields for adding a festival calendar entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalDraft {
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub marketing_ideas: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

fn validate_budget(budget: f64) -> Result<()> {
    if !budget.is_finite() || budget < 0.0 {
        return Err(PortalError::InvalidAmount {
            reason: "budget must be a non-negative finite number".to_string(),
        });
    }
    Ok(())
}

/// Create a new campaign in `planning` status
///
/// # Returns
/// The ID of the newly created campaign
///
/// # Errors
/// * `InvalidName` - If name is empty or whitespace-only
/// * `InvalidAmount` - If budget is negative or non-finite
pub fn create_campaign(store: &mut Store, draft: CampaignDraft) -> Result<String> {
    validate_name(&draft.name)?;
    if let Some(budget) = draft.budget {
        validate_budget(budget)?;
    }

    let campaign_id = Uuid::now_v7().to_string();
    let mut campaign = Campaign::new(campaign_id.clone(), draft.name);
    campaign.description = draft.description;
    campaign.platform = draft.platform;
    campaign.budget = draft.budget;
    campaign.start_date = draft.start_date;
    campaign.end_date = draft.end_date;
    campaign.metadata = draft.metadata;

    store.insert_campaign(campaign);
    Ok(campaign_id)
}

/// Read a campaign by ID
///
/// # Errors
/// * `CampaignNotFound` - If the campaign doesn't exist
pub fn read_campaign<'a>(store: &'a Store, id: &str) -> Result<&'a Campaign> {
    store.get_campaign(id)
}

/// Update a campaign with a partial payload
///
/// Metrics arrive as a whole snapshot; the funnel counters are replaced,
/// not merged.
///
/// # Errors
/// * `CampaignNotFound` - If the campaign doesn't exist
/// * `InvalidName` - If a provided name fails validation
/// * `InvalidAmount` - If a provided budget is negative or non-finite
pub fn update_campaign(store: &mut Store, id: &str, update: CampaignUpdate) -> Result<()> {
    if let Some(ref name) = update.name {
        validate_name(name)?;
    }
    if let Some(budget) = update.budget {
        validate_budget(budget)?;
    }

    let campaign = store.get_campaign_mut(id)?;

    if let Some(name) = update.name {
        campaign.name = name;
    }
    if let Some(description) = update.description {
        campaign.description = Some(description);
    }
    if let Some(status) = update.status {
        campaign.status = status;
    }
    if let Some(platform) = update.platform {
        campaign.platform = Some(platform);
    }
    if let Some(budget) = update.budget {
        campaign.budget = Some(budget);
    }
    if let Some(start_date) = update.start_date {
        campaign.start_date = Some(start_date);
    }
    if let Some(end_date) = update.end_date {
        campaign.end_date = Some(end_date);
    }
    if let Some(metrics) = update.metrics {
        campaign.metrics = metrics;
    }
    if let Some(metadata) = update.metadata {
        campaign.metadata.merge(metadata);
    }
    campaign.updated_at = Utc::now();

    Ok(())
}

/// Delete a campaign (hard delete)
///
/// # Errors
/// * `CampaignNotFound` - If the campaign doesn't exist
pub fn delete_campaign(store: &mut Store, id: &str) -> Result<()> {
    store.remove_campaign(id)?;
    Ok(())
}

/// Add a festival calendar entry
///
/// # Returns
/// The ID of the new entry
///
/// # Errors
/// * `InvalidName` - If name is empty or whitespace-only
pub fn add_festival_event(store: &mut Store, draft: FestivalDraft) -> Result<String> {
    validate_name(&draft.name)?;

    let festival_id = Uuid::now_v7().to_string();
    let mut event = FestivalEvent::new(festival_id.clone(), draft.name, draft.date);
    event.description = draft.description;
    event.category = draft.category;
    event.marketing_ideas = draft.marketing_ideas;
    event.metadata = draft.metadata;

    store.insert_festival(event);
    Ok(festival_id)
}

/// Remove a festival calendar entry
///
/// # Errors
/// * `FestivalNotFound` - If the entry doesn't exist
pub fn remove_festival_event(store: &mut Store, id: &str) -> Result<()> {
    store.remove_festival(id)?;
    Ok(())
}

/// Festival events falling on or after the given date, in calendar order
pub fn upcoming_festivals(store: &Store, from: NaiveDate) -> Vec<&FestivalEvent> {
    store
        .list_festivals()
        .into_iter()
        .filter(|f| f.date >= from)
        .collect()
}
