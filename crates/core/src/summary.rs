//! Plain-text brief summary for the external update feed.
//!
//! [`render`] is a pure function from a validated draft to a multi-section
//! report with stable section ordering. The output carries no timestamps
//! and no random ordering, so identical input yields byte-identical text;
//! callers rely on that to diff summaries and to test idempotence. Empty
//! fields are omitted entirely rather than printed as "N/A"; a category
//! block that would contribute no lines is dropped header and all.

use crate::brief::BriefDraft;
use crate::catalog::{self, Category};

/// Sentinel rendered when no budget has been captured yet. A missing
/// budget means "not yet known", never zero.
const BUDGET_PENDING: &str = "Not yet confirmed";

/// Render the full summary text for one brief.
pub fn render(draft: &BriefDraft) -> String {
    let mut sections: Vec<Vec<String>> = Vec::new();

    sections.push(vec!["NEW CAMPAIGN BRIEF SUBMITTED".to_string()]);
    sections.push(overview_section(draft));
    sections.push(timing_section(draft));
    sections.push(vec![
        "Campaign Summary".to_string(),
        draft.campaign_summary.clone(),
    ]);
    sections.push(categories_section(draft));

    for category in Category::ALL {
        if category == Category::SocialMedia {
            continue;
        }
        if let Some(block) = category_block(draft, category) {
            sections.push(block);
        }
    }

    if let Some(block) = social_media_block(draft) {
        sections.push(block);
    }

    sections.push(additional_section(draft));

    sections
        .iter()
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Push `Label: value` unless the value is empty.
fn push_field(lines: &mut Vec<String>, label: &str, value: &str) {
    if !value.trim().is_empty() {
        lines.push(format!("{label}: {value}"));
    }
}

fn push_opt(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        push_field(lines, label, value);
    }
}

fn overview_section(draft: &BriefDraft) -> Vec<String> {
    let mut lines = vec!["Overview".to_string()];
    push_field(&mut lines, "Campaign", &draft.campaign_name);
    push_field(&mut lines, "Client", &draft.client_name);
    push_field(&mut lines, "Brand", &draft.brand_name);
    push_field(&mut lines, "Requested By", &draft.requested_by);
    push_field(&mut lines, "Submitted By", &draft.user_name);
    push_opt(&mut lines, "Email", draft.user_email.as_deref());
    push_opt(&mut lines, "Phone", draft.user_phone.as_deref());
    push_field(&mut lines, "Job Bag Email", &draft.job_bag_email);
    lines
}

fn timing_section(draft: &BriefDraft) -> Vec<String> {
    let date = |d: &chrono::NaiveDate| d.format("%Y-%m-%d").to_string();
    let budget = match draft.budget {
        Some(amount) => amount.to_string(),
        None => BUDGET_PENDING.to_string(),
    };
    vec![
        "Timing & Priority".to_string(),
        format!("Start Date: {}", date(&draft.start_date)),
        format!("End Date: {}", date(&draft.end_date)),
        format!("Kickstart Date: {}", date(&draft.kickstart_date)),
        format!("First Review Date: {}", date(&draft.first_review_date)),
        format!("Sign-off Date: {}", date(&draft.sign_off_date)),
        format!("Priority: {}", draft.priority.label()),
        format!("Budget: {budget}"),
        format!("Billing: {}", draft.billing_type.label()),
    ]
}

fn categories_section(draft: &BriefDraft) -> Vec<String> {
    let labels: Vec<&str> = draft.categories.iter().map(|c| c.label()).collect();
    vec!["Categories Required".to_string(), labels.join(", ")]
}

/// Titled block for one non-social category, or `None` when the category
/// contributes nothing (not selected, no entry, or an all-empty entry).
fn category_block(draft: &BriefDraft, category: Category) -> Option<Vec<String>> {
    if !draft.has_category(category) {
        return None;
    }
    let req = draft.requirement(category)?;
    if req.is_empty() {
        return None;
    }

    let (primary_label, secondary_label) = catalog::option_labels(category);
    let mut lines = vec![category.heading().to_string()];
    if !req.options.is_empty() {
        lines.push(format!("{primary_label}: {}", req.options.join(", ")));
    }
    if let Some(label) = secondary_label {
        if !req.extras.is_empty() {
            lines.push(format!("{label}: {}", req.extras.join(", ")));
        }
    }
    push_field(&mut lines, "Details", &req.details);
    Some(lines)
}

fn social_media_block(draft: &BriefDraft) -> Option<Vec<String>> {
    if draft.social_media_items.is_empty() {
        return None;
    }
    let mut lines = vec!["Social Media".to_string()];
    for (idx, item) in draft.social_media_items.iter().enumerate() {
        lines.push(format!(
            "Item {}: {} - {} - {} (Qty: {})",
            idx + 1,
            item.platform,
            item.format,
            item.size,
            item.quantity
        ));
        for desc in &item.descriptions {
            if !desc.trim().is_empty() {
                lines.push(format!("  {desc}"));
            }
        }
    }
    Some(lines)
}

fn additional_section(draft: &BriefDraft) -> Vec<String> {
    let mut lines = vec!["Additional Information".to_string()];
    lines.push(format!(
        "Assets Available: {}",
        if draft.has_assets { "Yes" } else { "No" }
    ));
    if draft.has_assets {
        push_opt(&mut lines, "Asset Link", draft.asset_link.as_deref());
    }
    push_opt(
        &mut lines,
        "Other Requirements",
        draft.other_requirements.as_deref(),
    );
    push_field(&mut lines, "References", &draft.references);
    lines
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

    fn tv_draft() -> BriefDraft {
        let mut requirements = BTreeMap::new();
        requirements.insert(
            Category::Tv,
            CategoryRequirement {
                options: vec!["30s".into()],
                extras: vec!["Storyboard".into(), "Final mix".into()],
                details: "teaser only".into(),
            },
        );
        BriefDraft {
            user_name: "Inge".into(),
            user_email: None,
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
            budget: None,
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

    #[test]
    fn rendering_is_idempotent() {
        let draft = tv_draft();
        assert_eq!(render(&draft), render(&draft));
    }

    #[test]
    fn title_and_section_order_is_stable() {
        let text = render(&tv_draft());
        let expected_order = [
            "NEW CAMPAIGN BRIEF SUBMITTED",
            "Overview",
            "Timing & Priority",
            "Campaign Summary",
            "Categories Required",
            "TV",
            "Additional Information",
        ];
        let mut last = 0;
        for marker in expected_order {
            let pos = text[last..]
                .find(marker)
                .unwrap_or_else(|| panic!("missing or out of order: {marker}"));
            last += pos;
        }
    }

    #[test]
    fn tv_block_lists_options_and_details() {
        let text = render(&tv_draft());
        assert!(text.contains("TV\nDurations: 30s\nDeliverables: Storyboard, Final mix\nDetails: teaser only"));
    }

    #[test]
    fn dates_are_date_only() {
        let text = render(&tv_draft());
        assert!(text.contains("Start Date: 2026-09-01"));
        assert!(text.contains("Sign-off Date: 2026-08-28"));
        assert!(!text.contains("T00:00"));
    }

    #[test]
    fn missing_budget_renders_sentinel_not_zero() {
        let text = render(&tv_draft());
        assert!(text.contains("Budget: Not yet confirmed"));
        assert!(!text.contains("Budget: 0"));
    }

    #[test]
    fn present_budget_renders_number() {
        let mut draft = tv_draft();
        draft.budget = Some(250_000.0);
        assert!(render(&draft).contains("Budget: 250000"));
    }

    #[test]
    fn long_summary_is_never_truncated() {
        let mut draft = tv_draft();
        draft.campaign_summary = "x".repeat(2000);
        let text = render(&draft);
        assert!(text.contains(&draft.campaign_summary));
        assert!(!text.contains("..."));
    }

    #[test]
    fn empty_identity_fields_are_omitted_not_placeholdered() {
        let text = render(&tv_draft());
        assert!(!text.contains("\nEmail:"), "no email was supplied");
        assert!(!text.contains("\nPhone:"));
        assert!(!text.contains("N/A"));
    }

    #[test]
    fn unselected_category_block_is_entirely_absent() {
        let mut draft = tv_draft();
        // Data left behind for a category that is not selected must not leak.
        draft.requirements.insert(
            Category::Radio,
            CategoryRequirement {
                options: vec!["10s".into()],
                extras: Vec::new(),
                details: "stale".into(),
            },
        );
        let text = render(&draft);
        assert!(!text.contains("\nRadio\n"));
        assert!(!text.contains("stale"));
    }

    #[test]
    fn all_empty_requirement_drops_header_too() {
        let mut draft = tv_draft();
        draft.categories.push(Category::Print);
        draft
            .requirements
            .insert(Category::Print, CategoryRequirement::default());
        let text = render(&draft);
        assert!(!text.contains("\nPrint\n"), "dangling header for empty block");
    }

    #[test]
    fn category_blocks_follow_catalog_order_not_selection_order() {
        let mut draft = tv_draft();
        draft.categories = vec![Category::Website, Category::Tv];
        draft.requirements.insert(
            Category::Website,
            CategoryRequirement {
                options: vec!["Landing page".into()],
                extras: Vec::new(),
                details: "one pager".into(),
            },
        );
        let text = render(&draft);
        let tv = text.find("\nTV\n").unwrap();
        let website = text.find("\nWebsite\n").unwrap();
        assert!(tv < website, "TV precedes Website in catalog order");
        // The selection list keeps the user's insertion order.
        assert!(text.contains("Categories Required\nWebsite, TV"));
    }

    #[test]
    fn social_items_render_indexed_lines_with_descriptions() {
        let mut draft = tv_draft();
        draft.categories.push(Category::SocialMedia);
        let mut item = SocialMediaItem::new("Instagram", "Reels", "1080 × 1920");
        item.set_quantity(2);
        item.descriptions[0] = "launch teaser".into();
        // second description intentionally left empty
        draft.social_media_items.push(item);
        draft
            .social_media_items
            .push(SocialMediaItem::new("TikTok", "Videos", "1080 × 1920"));

        let text = render(&draft);
        assert!(text.contains("Item 1: Instagram - Reels - 1080 × 1920 (Qty: 2)"));
        assert!(text.contains("\n  launch teaser\n"));
        assert!(text.contains("Item 2: TikTok - Videos - 1080 × 1920 (Qty: 1)"));
        // Empty per-unit descriptions contribute no line.
        assert!(!text.contains("\n  \n"));
    }

    #[test]
    fn asset_link_only_when_assets_present() {
        let mut draft = tv_draft();
        draft.has_assets = true;
        draft.asset_link = Some("https://drive.google.com/x".into());
        let text = render(&draft);
        assert!(text.contains("Assets Available: Yes"));
        assert!(text.contains("Asset Link: https://drive.google.com/x"));

        let mut draft = tv_draft();
        draft.asset_link = Some("https://drive.google.com/x".into());
        draft.has_assets = false;
        let text = render(&draft);
        assert!(text.contains("Assets Available: No"));
        assert!(!text.contains("Asset Link:"));
    }
}
