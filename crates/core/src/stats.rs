//! Admin aggregation over submitted briefs.
//!
//! Counts are recomputed by full scan on each read; there is no
//! incrementally maintained aggregate anywhere. `BTreeMap` keys keep the
//! output ordering deterministic for API responses and tests.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::brief::{BillingType, BriefDraft};

/// Number of briefs submitted by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStat {
    pub name: String,
    pub count: u64,
}

/// Per-submitter brief counts, sorted by count descending (ties broken by
/// name so the ordering is stable).
pub fn user_stats(briefs: &[BriefDraft]) -> Vec<UserStat> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for brief in briefs {
        *counts.entry(brief.user_name.as_str()).or_default() += 1;
    }
    let mut stats: Vec<UserStat> = counts
        .into_iter()
        .map(|(name, count)| UserStat {
            name: name.to_string(),
            count,
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    stats
}

/// Headline metrics for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BriefMetrics {
    pub total_briefs: u64,
    pub retainer_briefs: u64,
    pub out_of_scope_briefs: u64,
    pub category_counts: BTreeMap<String, u64>,
    pub priority_counts: BTreeMap<String, u64>,
    pub total_budget: f64,
    pub briefs_with_budget: u64,
    /// Mean over briefs that carry a budget, rounded; 0 when none do.
    pub average_budget: f64,
}

pub fn metrics(briefs: &[BriefDraft]) -> BriefMetrics {
    let total_briefs = briefs.len() as u64;
    let retainer_briefs = briefs
        .iter()
        .filter(|b| b.billing_type == BillingType::Retainer)
        .count() as u64;
    let out_of_scope_briefs = briefs
        .iter()
        .filter(|b| b.billing_type == BillingType::OutOfScope)
        .count() as u64;

    let mut category_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut priority_counts: BTreeMap<String, u64> = BTreeMap::new();
    for brief in briefs {
        for category in &brief.categories {
            *category_counts.entry(category.label().to_string()).or_default() += 1;
        }
        *priority_counts
            .entry(brief.priority.label().to_string())
            .or_default() += 1;
    }

    let budgets: Vec<f64> = briefs.iter().filter_map(|b| b.budget).collect();
    let total_budget: f64 = budgets.iter().sum();
    let briefs_with_budget = budgets.len() as u64;
    let average_budget = if briefs_with_budget > 0 {
        (total_budget / briefs_with_budget as f64).round()
    } else {
        0.0
    };

    BriefMetrics {
        total_briefs,
        retainer_briefs,
        out_of_scope_briefs,
        category_counts,
        priority_counts,
        total_budget,
        briefs_with_budget,
        average_budget,
    }
}
