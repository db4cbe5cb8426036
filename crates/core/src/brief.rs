//! Brief data model: the submission payload and the persisted record.
//!
//! A [`BriefDraft`] is what the form posts; once it passes validation the
//! orchestrator persists it unchanged and it never mutates again. The
//! category fan-out is a map keyed by [`Category`] rather than a flat
//! record of ~40 optional fields, so only selected categories carry data.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// Row id of a persisted brief (Postgres BIGSERIAL).
pub type DbId = i64;

/// Submission timestamps, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingType {
    Retainer,
    OutOfScope,
}

impl BillingType {
    pub fn label(self) -> &'static str {
        match self {
            BillingType::Retainer => "Retainer",
            BillingType::OutOfScope => "OutOfScope",
        }
    }
}

// ---------------------------------------------------------------------------
// Category requirements
// ---------------------------------------------------------------------------

/// Requirement details for one selected (non-social) category.
///
/// `options` and `extras` hold ticked entries from the category's primary
/// and secondary catalog lists; `details` is the free-text field that
/// becomes mandatory once the category is selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryRequirement {
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub extras: Vec<String>,
    #[serde(default)]
    pub details: String,
}

impl CategoryRequirement {
    /// True when the requirement would contribute no lines to the summary.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.extras.is_empty() && self.details.trim().is_empty()
    }
}

/// One Social Media deliverable line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMediaItem {
    pub platform: String,
    pub format: String,
    pub size: String,
    pub quantity: u32,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

impl SocialMediaItem {
    pub fn new(platform: impl Into<String>, format: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            format: format.into(),
            size: size.into(),
            quantity: 1,
            descriptions: vec![String::new()],
        }
    }

    /// Change the quantity, keeping `descriptions.len() == quantity`:
    /// shrinking truncates, growing pads with empty strings. This invariant
    /// must hold after every edit, not only at submission.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.descriptions.resize(quantity as usize, String::new());
    }

    /// Whether the per-unit description list length matches the quantity.
    pub fn descriptions_consistent(&self) -> bool {
        self.descriptions.len() == self.quantity as usize
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// A candidate brief as posted by the intake form, prior to validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefDraft {
    // Overview
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_phone: Option<String>,
    pub client_name: String,
    pub brand_name: String,
    pub campaign_name: String,
    pub campaign_summary: String,
    pub requested_by: String,
    pub job_bag_email: String,
    #[serde(with = "iso_date")]
    pub start_date: NaiveDate,
    #[serde(with = "iso_date")]
    pub end_date: NaiveDate,

    // Classification
    pub priority: Priority,
    pub billing_type: BillingType,
    /// Absent means "not yet known", not zero.
    #[serde(default)]
    pub budget: Option<f64>,

    // Category selection, in the order the user ticked them.
    pub categories: Vec<Category>,
    /// Per-category sub-structures, keyed by the categories actually
    /// selected. Social Media is carried by `social_media_items` instead.
    #[serde(default)]
    pub requirements: BTreeMap<Category, CategoryRequirement>,
    #[serde(default)]
    pub social_media_items: Vec<SocialMediaItem>,

    // Assets & notes
    pub has_assets: bool,
    #[serde(default)]
    pub asset_link: Option<String>,
    #[serde(default)]
    pub other_requirements: Option<String>,
    pub references: String,

    // Timeline
    #[serde(with = "iso_date")]
    pub kickstart_date: NaiveDate,
    #[serde(with = "iso_date")]
    pub first_review_date: NaiveDate,
    #[serde(with = "iso_date")]
    pub sign_off_date: NaiveDate,
}

impl BriefDraft {
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Requirement entry for a category, if one was submitted.
    pub fn requirement(&self, category: Category) -> Option<&CategoryRequirement> {
        self.requirements.get(&category)
    }
}

/// A persisted brief: the validated draft plus its storage identity.
/// Immutable once created; there is no update or delete surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brief {
    pub id: DbId,
    pub created_at: Timestamp,
    #[serde(flatten)]
    pub draft: BriefDraft,
}

// ---------------------------------------------------------------------------
// Date handling
// ---------------------------------------------------------------------------

/// Parse a calendar date from a date-only or full ISO-8601 string by
/// truncating to the first 10 characters (`YYYY-MM-DD`). The original form
/// posts `Date::toISOString()` output, so both shapes arrive in practice.
pub fn parse_brief_date(value: &str) -> Option<NaiveDate> {
    let head = value.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Serde adapter: serializes as `YYYY-MM-DD`, deserializes any ISO-8601
/// string via [`parse_brief_date`].
mod iso_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(de)?;
        super::parse_brief_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid ISO date: {raw}")))
    }
}
