//! Conditional brief validation. Pure logic, no I/O.
//!
//! Runs as an explicit two-phase check: serde/chrono typing already
//! guarantees shape, then a rule list is evaluated against the full draft.
//! Each rule yields zero or one [`FieldError`] scoped to the field path it
//! concerns, so callers can render inline per-field feedback. Rules whose
//! required-ness depends on other fields (category selection, billing,
//! assets) read the whole draft rather than being embedded in per-field
//! declarations.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::brief::BriefDraft;
use crate::catalog::{self, Category};

/// A single field-scoped validation error.
///
/// `field` is a dotted path into the draft, e.g. `job_bag_email` or
/// `requirements.TV.details` or `social_media_items[2].size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a draft, returning every violated rule.
///
/// An empty result means the draft is acceptable. Validation is
/// synchronous and side-effect free; the API runs it once per submission
/// and the form may re-run single rules on blur.
pub fn validate(draft: &BriefDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    base_rules(draft, &mut errors);
    date_rules(draft, &mut errors);
    category_rules(draft, &mut errors);
    social_media_rules(draft, &mut errors);
    asset_rules(draft, &mut errors);

    errors
}

// ---------------------------------------------------------------------------
// Base rules (always enforced)
// ---------------------------------------------------------------------------

fn base_rules(draft: &BriefDraft, errors: &mut Vec<FieldError>) {
    let required_text: [(&str, &str); 7] = [
        ("user_name", &draft.user_name),
        ("client_name", &draft.client_name),
        ("brand_name", &draft.brand_name),
        ("campaign_name", &draft.campaign_name),
        ("campaign_summary", &draft.campaign_summary),
        ("requested_by", &draft.requested_by),
        ("references", &draft.references),
    ];
    for (field, value) in required_text {
        if value.trim().is_empty() {
            errors.push(FieldError::new(field, "Required"));
        }
    }

    if !draft.job_bag_email.validate_email() {
        errors.push(FieldError::new("job_bag_email", "Invalid email"));
    }

    if draft.categories.is_empty() {
        errors.push(FieldError::new(
            "categories",
            "Select at least one category",
        ));
    }

    if let Some(budget) = draft.budget {
        if !(budget > 0.0) {
            errors.push(FieldError::new(
                "budget",
                "Budget must be a positive number",
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// Date ordering (on-or-after policy; equality is permitted)
// ---------------------------------------------------------------------------

fn date_rules(draft: &BriefDraft, errors: &mut Vec<FieldError>) {
    if draft.end_date < draft.start_date {
        errors.push(FieldError::new(
            "end_date",
            "End date must be on or after start date",
        ));
    }
    if draft.first_review_date < draft.kickstart_date {
        errors.push(FieldError::new(
            "first_review_date",
            "First review must be on or after kickstart",
        ));
    }
    if draft.sign_off_date < draft.first_review_date {
        errors.push(FieldError::new(
            "sign_off_date",
            "Sign-off must be on or after first review",
        ));
    }
}

// ---------------------------------------------------------------------------
// Category fan-out
// ---------------------------------------------------------------------------

/// Every selected category except Social Media requires non-empty details.
/// Social Media is carried by line items and checked separately.
fn category_rules(draft: &BriefDraft, errors: &mut Vec<FieldError>) {
    for &category in &draft.categories {
        if category == Category::SocialMedia {
            continue;
        }
        let has_details = draft
            .requirement(category)
            .is_some_and(|req| !req.details.trim().is_empty());
        if !has_details {
            errors.push(FieldError::new(
                format!("requirements.{}.details", category.label()),
                format!("Tell us more about your {} requirements", category.label()),
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// Social Media line items
// ---------------------------------------------------------------------------

fn social_media_rules(draft: &BriefDraft, errors: &mut Vec<FieldError>) {
    if draft.has_category(Category::SocialMedia)
        && !draft
            .social_media_items
            .iter()
            .any(|item| item.quantity >= 1)
    {
        errors.push(FieldError::new(
            "social_media_items",
            "Add at least one Social Media deliverable",
        ));
    }

    for (idx, item) in draft.social_media_items.iter().enumerate() {
        let path = |field: &str| format!("social_media_items[{idx}].{field}");

        if item.quantity < 1 {
            errors.push(FieldError::new(
                path("quantity"),
                "Quantity must be at least 1",
            ));
        }
        if !item.descriptions_consistent() {
            errors.push(FieldError::new(
                path("descriptions"),
                "Description count must match quantity",
            ));
        }

        let formats = catalog::formats_for(&item.platform);
        if formats.is_empty() {
            errors.push(FieldError::new(path("platform"), "Unknown platform"));
            continue; // format/size lookups would be vacuous
        }
        if !formats.contains(&item.format.as_str()) {
            errors.push(FieldError::new(
                path("format"),
                format!("Invalid format for {}", item.platform),
            ));
            continue;
        }
        if !catalog::sizes_for(&item.platform, &item.format).contains(&item.size.as_str()) {
            errors.push(FieldError::new(
                path("size"),
                format!("Invalid size for {} {}", item.platform, item.format),
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

fn asset_rules(draft: &BriefDraft, errors: &mut Vec<FieldError>) {
    let link_present = draft
        .asset_link
        .as_deref()
        .is_some_and(|link| !link.trim().is_empty());
    if draft.has_assets && !link_present {
        errors.push(FieldError::new(
            "asset_link",
            "Asset link is required when assets are provided",
        ));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;

    use super::*;
    use crate::brief::{BillingType, CategoryRequirement, Priority, SocialMediaItem};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A draft that passes every rule: single TV category with details.
    fn valid_draft() -> BriefDraft {
        let mut requirements = BTreeMap::new();
        requirements.insert(
            Category::Tv,
            CategoryRequirement {
                options: vec!["30s".into()],
                extras: vec!["Storyboard".into()],
                details: "teaser only".into(),
            },
        );
        BriefDraft {
            user_name: "Inge".into(),
            user_email: Some("inge@example.com".into()),
            user_phone: None,
            client_name: "Acme".into(),
            brand_name: "Sparkle".into(),
            campaign_name: "Summer Launch".into(),
            campaign_summary: "A summer thing".into(),
            requested_by: "Debbie Wells".into(),
            job_bag_email: "job-123456@agency.monday.com".into(),
            start_date: date(2026, 9, 1),
            end_date: date(2026, 10, 31),
            priority: Priority::High,
            billing_type: BillingType::Retainer,
            budget: Some(250_000.0),
            categories: vec![Category::Tv],
            requirements,
            social_media_items: Vec::new(),
            has_assets: false,
            asset_link: None,
            other_requirements: None,
            references: "see pinterest board".into(),
            kickstart_date: date(2026, 8, 20),
            first_review_date: date(2026, 8, 25),
            sign_off_date: date(2026, 8, 28),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(validate(&valid_draft()), Vec::new());
    }

    #[test]
    fn each_missing_base_field_is_reported_on_its_own_path() {
        for field in [
            "user_name",
            "client_name",
            "brand_name",
            "campaign_name",
            "campaign_summary",
            "requested_by",
            "references",
        ] {
            let mut draft = valid_draft();
            match field {
                "user_name" => draft.user_name.clear(),
                "client_name" => draft.client_name.clear(),
                "brand_name" => draft.brand_name.clear(),
                "campaign_name" => draft.campaign_name.clear(),
                "campaign_summary" => draft.campaign_summary.clear(),
                "requested_by" => draft.requested_by.clear(),
                "references" => draft.references.clear(),
                _ => unreachable!(),
            }
            let errors = validate(&draft);
            assert_eq!(fields(&errors), vec![field]);
            assert_eq!(errors[0].message, "Required");
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut draft = valid_draft();
        draft.references = "   ".into();
        assert_eq!(fields(&validate(&draft)), vec!["references"]);
    }

    #[test]
    fn malformed_job_bag_email_is_rejected() {
        let mut draft = valid_draft();
        draft.job_bag_email = "not-an-email".into();
        let errors = validate(&draft);
        assert_eq!(fields(&errors), vec!["job_bag_email"]);
    }

    #[test]
    fn no_categories_selected_fails() {
        let mut draft = valid_draft();
        draft.categories.clear();
        draft.requirements.clear();
        assert_eq!(fields(&validate(&draft)), vec!["categories"]);
    }

    #[test]
    fn missing_budget_is_not_an_error() {
        let mut draft = valid_draft();
        draft.budget = None;
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn non_positive_budget_fails() {
        for bad in [0.0, -100.0] {
            let mut draft = valid_draft();
            draft.budget = Some(bad);
            assert_eq!(fields(&validate(&draft)), vec!["budget"]);
        }
    }

    #[test]
    fn end_before_start_fails_on_end_date() {
        let mut draft = valid_draft();
        draft.end_date = date(2026, 8, 31);
        assert_eq!(fields(&validate(&draft)), vec!["end_date"]);
    }

    #[test]
    fn end_equal_to_start_is_accepted() {
        let mut draft = valid_draft();
        draft.end_date = draft.start_date;
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn timeline_order_violations_attach_to_the_later_date() {
        let mut draft = valid_draft();
        draft.first_review_date = date(2026, 8, 19);
        assert_eq!(fields(&validate(&draft)), vec!["first_review_date"]);

        let mut draft = valid_draft();
        draft.sign_off_date = date(2026, 8, 24);
        assert_eq!(fields(&validate(&draft)), vec!["sign_off_date"]);
    }

    #[test]
    fn equal_timeline_dates_are_accepted() {
        let mut draft = valid_draft();
        draft.first_review_date = draft.kickstart_date;
        draft.sign_off_date = draft.kickstart_date;
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn selected_category_requires_details() {
        let mut draft = valid_draft();
        draft.categories.push(Category::Radio);
        let errors = validate(&draft);
        assert_eq!(fields(&errors), vec!["requirements.Radio.details"]);
        assert_eq!(
            errors[0].message,
            "Tell us more about your Radio requirements"
        );
    }

    #[test]
    fn blank_details_also_fails() {
        let mut draft = valid_draft();
        draft
            .requirements
            .get_mut(&Category::Tv)
            .unwrap()
            .details = "  ".into();
        assert_eq!(fields(&validate(&draft)), vec!["requirements.TV.details"]);
    }

    #[test]
    fn deselected_category_does_not_require_details() {
        let mut draft = valid_draft();
        // Stale requirement entry left behind after unticking the category.
        draft
            .requirements
            .insert(Category::Print, CategoryRequirement::default());
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn social_media_requires_at_least_one_item() {
        let mut draft = valid_draft();
        draft.categories.push(Category::SocialMedia);
        assert_eq!(fields(&validate(&draft)), vec!["social_media_items"]);
    }

    #[test]
    fn social_media_with_one_item_passes() {
        let mut draft = valid_draft();
        draft.categories.push(Category::SocialMedia);
        draft
            .social_media_items
            .push(SocialMediaItem::new("Instagram", "Reels", "1080 × 1920"));
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn zero_quantity_item_is_reported() {
        let mut draft = valid_draft();
        let mut item = SocialMediaItem::new("Instagram", "Reels", "1080 × 1920");
        item.set_quantity(0);
        draft.social_media_items.push(item);
        assert_eq!(
            fields(&validate(&draft)),
            vec!["social_media_items[0].quantity"]
        );
    }

    #[test]
    fn inconsistent_descriptions_are_reported() {
        let mut draft = valid_draft();
        let mut item = SocialMediaItem::new("Instagram", "Reels", "1080 × 1920");
        item.descriptions.push("extra".into());
        draft.social_media_items.push(item);
        assert_eq!(
            fields(&validate(&draft)),
            vec!["social_media_items[0].descriptions"]
        );
    }

    #[test]
    fn unknown_platform_format_size_are_scoped_per_item() {
        let mut draft = valid_draft();
        let mut item = SocialMediaItem::new("Myspace", "Static", "1080 × 1080");
        item.set_quantity(1);
        draft.social_media_items.push(item);
        assert_eq!(
            fields(&validate(&draft)),
            vec!["social_media_items[0].platform"]
        );

        let mut draft = valid_draft();
        draft
            .social_media_items
            .push(SocialMediaItem::new("Instagram", "Reels", "999 × 999"));
        assert_eq!(
            fields(&validate(&draft)),
            vec!["social_media_items[0].size"]
        );
    }

    #[test]
    fn assets_flag_requires_link() {
        let mut draft = valid_draft();
        draft.has_assets = true;
        draft.asset_link = Some(String::new());
        assert_eq!(fields(&validate(&draft)), vec!["asset_link"]);

        draft.asset_link = Some("https://drive.google.com/x".into());
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn no_assets_means_link_is_optional() {
        let mut draft = valid_draft();
        draft.has_assets = false;
        draft.asset_link = None;
        assert!(validate(&draft).is_empty());
    }
}
