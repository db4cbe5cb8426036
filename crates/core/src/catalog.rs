//! Static option catalog for the brief form.
//!
//! Maps each campaign category to its legal checkbox options, and provides
//! the three-level Social Media lookup (platform → formats → sizes). This
//! module is pure data; no validation logic lives here. Lookups for an
//! unknown platform or format return an empty slice so dependent selectors
//! can degrade gracefully instead of erroring.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The 16 fixed campaign categories a brief can select.
///
/// Declaration order is the canonical display order used by the summary
/// formatter; `Ord` follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    #[serde(rename = "Strategy")]
    Strategy,
    #[serde(rename = "Brand development")]
    BrandDevelopment,
    #[serde(rename = "TV")]
    Tv,
    #[serde(rename = "Radio")]
    Radio,
    #[serde(rename = "Billboard")]
    Billboard,
    #[serde(rename = "Print")]
    Print,
    #[serde(rename = "Brand Video")]
    BrandVideo,
    #[serde(rename = "Photography")]
    Photography,
    #[serde(rename = "PR")]
    Pr,
    #[serde(rename = "Influencer")]
    Influencer,
    #[serde(rename = "Activation")]
    Activation,
    #[serde(rename = "Digital")]
    Digital,
    #[serde(rename = "Application Build")]
    ApplicationBuild,
    #[serde(rename = "Website")]
    Website,
    #[serde(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories in canonical display order.
    pub const ALL: [Category; 16] = [
        Category::Strategy,
        Category::BrandDevelopment,
        Category::Tv,
        Category::Radio,
        Category::Billboard,
        Category::Print,
        Category::BrandVideo,
        Category::Photography,
        Category::Pr,
        Category::Influencer,
        Category::Activation,
        Category::Digital,
        Category::ApplicationBuild,
        Category::Website,
        Category::SocialMedia,
        Category::Other,
    ];

    /// Human-readable label, identical to the serde representation.
    pub fn label(self) -> &'static str {
        match self {
            Category::Strategy => "Strategy",
            Category::BrandDevelopment => "Brand development",
            Category::Tv => "TV",
            Category::Radio => "Radio",
            Category::Billboard => "Billboard",
            Category::Print => "Print",
            Category::BrandVideo => "Brand Video",
            Category::Photography => "Photography",
            Category::Pr => "PR",
            Category::Influencer => "Influencer",
            Category::Activation => "Activation",
            Category::Digital => "Digital",
            Category::ApplicationBuild => "Application Build",
            Category::Website => "Website",
            Category::SocialMedia => "Social Media",
            Category::Other => "Other",
        }
    }

    /// Section heading used for this category's block in the summary.
    ///
    /// Differs from [`Category::label`] only where the form label is not
    /// title-cased ("Brand development" renders as "Brand Development").
    pub fn heading(self) -> &'static str {
        match self {
            Category::BrandDevelopment => "Brand Development",
            other => other.label(),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-category options
// ---------------------------------------------------------------------------

pub const STRATEGY_OPTIONS: &[&str] = &[
    "Campaign strategy",
    "Content strategy",
    "Digital strategy",
    "Social media strategy",
    "Influencer strategy",
    "Brand positioning",
    "Audience segmentation",
    "Messaging framework",
    "Competitor analysis",
    "Research & insights",
];

pub const BRAND_DEV_OPTIONS: &[&str] = &[
    "CI development",
    "Logo refresh",
    "CI application",
    "Tone of voice",
    "Brand toolkit",
    "Packaging design",
    "Naming/renaming",
    "Brand guidelines update",
    "Template creation",
];

pub const TV_DURATIONS: &[&str] = &["10s", "15s", "20s", "30s", "45s", "60s"];

pub const TV_DELIVERABLES: &[&str] = &[
    "TVC concept",
    "Scriptwriting",
    "Storyboard",
    "Animatic",
    "Final mix",
    "Supers & legal lines",
    "Adaptations / cutdowns",
    "Location",
    "Concept",
    "Pitch",
    "Talent",
    "Media Buying",
    "Research",
];

pub const RADIO_DURATIONS: &[&str] = &["10s", "15s", "20s", "30s", "45s", "60s"];

pub const RADIO_DELIVERABLES: &[&str] = &[
    "Script",
    "Voice casting",
    "Studio recording",
    "SFX/Music",
    "Final mix",
    "Adaptations",
];

pub const BILLBOARD_SIZES: &[&str] = &[
    "6m x 3m",
    "3m x 6m digital",
    "12m x 3m",
    "Portrait Digital",
    "Mega board",
    "Street pole ad",
    "Bus shelter",
    "Mall digital screen",
    "Taxi rank digital",
];

pub const BILLBOARD_DELIVERABLES: &[&str] = &[
    "Static artwork",
    "Digital animated artwork",
    "Multiple language versions",
];

pub const PRINT_SIZES: &[&str] = &[
    "A5",
    "A4",
    "A3",
    "A2",
    "A1",
    "A0",
    "Magazine full page",
    "Magazine half page",
    "Brochure (bi-fold/tri-fold)",
];

pub const PRINT_DELIVERABLES: &[&str] = &[
    "Print-ready artwork",
    "Bleed/no bleed options",
    "Multiple language versions",
];

pub const BRAND_VIDEO_DURATIONS: &[&str] =
    &["6s", "10s", "15s", "20s", "30s", "45s", "60s", "90s+"];

pub const BRAND_VIDEO_DELIVERABLES: &[&str] = &[
    "Brand film",
    "Corporate video",
    "Product video",
    "Animation",
    "Motion graphics",
    "Cutdowns",
    "Subtitled versions",
    "Aspect ratios: 16:9 / 9:16 / 1:1",
];

pub const PHOTOGRAPHY_TYPES: &[&str] = &[
    "Product shoot",
    "Lifestyle shoot",
    "Studio shoot",
    "Event shoot",
    "Flatlays",
    "Social content shoot",
];

pub const PHOTOGRAPHY_DELIVERABLES: &[&str] = &[
    "Edited stills",
    "RAW files",
    "Cut-outs",
    "High-res / Web-res",
    "Retouching",
];

pub const PR_OPTIONS: &[&str] = &[
    "Press release",
    "Media alert",
    "Media list build",
    "Media drops",
    "Influencer seeding",
    "Event PR",
    "Thought leadership",
    "Reputation management",
    "Reactive PR",
];

pub const INFLUENCER_OPTIONS: &[&str] = &[
    "Influencer strategy",
    "Talent sourcing",
    "Talent vetting",
    "Contracting",
    "Brief development",
    "Content approvals",
    "Campaign management",
    "Reporting",
    "Usage rights management",
];

pub const ACTIVATION_OPTIONS: &[&str] = &[
    "In-store",
    "Mall",
    "Roadshow",
    "Sampling",
    "Pop-up installation",
    "Event design",
    "Event staffing",
    "Logistics & production",
    "Permits",
];

pub const DIGITAL_OPTIONS: &[&str] = &[
    "Display banners",
    "HTML5 animations",
    "Rich media",
    "Google ads (PPC)",
    "Emailers",
    "CRM journeys",
    "SEO",
    "SEM",
    "Remarketing creatives",
];

pub const DIGITAL_BANNER_SIZES: &[&str] = &[
    "300x250",
    "728x90",
    "300x600",
    "160x600",
    "970x250",
    "1080x1920 (mobile)",
];

pub const APP_BUILD_OPTIONS: &[&str] = &[
    "Web app",
    "Mobile app",
    "API integration",
    "Wireframes",
    "UI/UX",
    "User testing",
    "QA & bug fixes",
    "Launch support",
];

pub const WEBSITE_OPTIONS: &[&str] = &[
    "Landing page",
    "Multi-page website",
    "Website refresh",
    "Wireframes",
    "UI/UX",
    "Development",
    "SEO setup",
    "Copywriting",
    "CMS build",
];

pub const OTHER_OPTIONS: &[&str] = &[
    "Internal comms",
    "Presentations",
    "Pitch decks",
    "Training materials",
    "Templates",
    "Merchandise",
    "Packaging",
    "POS",
];

/// Primary checkbox options for a category.
///
/// Social Media has no flat option list (it uses line items instead), so
/// it returns an empty slice.
pub fn options(category: Category) -> &'static [&'static str] {
    match category {
        Category::Strategy => STRATEGY_OPTIONS,
        Category::BrandDevelopment => BRAND_DEV_OPTIONS,
        Category::Tv => TV_DURATIONS,
        Category::Radio => RADIO_DURATIONS,
        Category::Billboard => BILLBOARD_SIZES,
        Category::Print => PRINT_SIZES,
        Category::BrandVideo => BRAND_VIDEO_DURATIONS,
        Category::Photography => PHOTOGRAPHY_TYPES,
        Category::Pr => PR_OPTIONS,
        Category::Influencer => INFLUENCER_OPTIONS,
        Category::Activation => ACTIVATION_OPTIONS,
        Category::Digital => DIGITAL_OPTIONS,
        Category::ApplicationBuild => APP_BUILD_OPTIONS,
        Category::Website => WEBSITE_OPTIONS,
        Category::SocialMedia => &[],
        Category::Other => OTHER_OPTIONS,
    }
}

/// Secondary checkbox options for categories with two option lists
/// (e.g. TV durations + deliverables). Empty for single-list categories.
pub fn secondary_options(category: Category) -> &'static [&'static str] {
    match category {
        Category::Tv => TV_DELIVERABLES,
        Category::Radio => RADIO_DELIVERABLES,
        Category::Billboard => BILLBOARD_DELIVERABLES,
        Category::Print => PRINT_DELIVERABLES,
        Category::BrandVideo => BRAND_VIDEO_DELIVERABLES,
        Category::Photography => PHOTOGRAPHY_DELIVERABLES,
        Category::Digital => DIGITAL_BANNER_SIZES,
        _ => &[],
    }
}

/// Display labels for a category's option lists, as shown in the summary.
///
/// Returns `(primary_label, secondary_label)`; the secondary label is
/// `None` for single-list categories.
pub fn option_labels(category: Category) -> (&'static str, Option<&'static str>) {
    match category {
        Category::Tv | Category::Radio | Category::BrandVideo => {
            ("Durations", Some("Deliverables"))
        }
        Category::Billboard | Category::Print => ("Sizes", Some("Deliverables")),
        Category::Photography => ("Types", Some("Deliverables")),
        Category::Digital => ("Options", Some("Banner Sizes")),
        _ => ("Options", None),
    }
}

// ---------------------------------------------------------------------------
// Social Media: platform → formats → sizes
// ---------------------------------------------------------------------------

pub const SOCIAL_MEDIA_PLATFORMS: &[&str] = &[
    "Instagram",
    "Facebook",
    "TikTok",
    "YouTube",
    "Twitter / X",
    "LinkedIn",
    "Pinterest",
    "Snapchat",
    "Threads",
    "WhatsApp (Business)",
];

/// Formats with their valid size labels, keyed per platform.
type FormatTable = &'static [(&'static str, &'static [&'static str])];

fn format_table(platform: &str) -> FormatTable {
    match platform {
        "Instagram" => &[
            (
                "Static Posts",
                &[
                    "1080 × 1080 (Square)",
                    "1080 × 1350 (Portrait)",
                    "1080 × 608 (Landscape)",
                    "1242 × 1242 (High-res Square)",
                    "1350 × 1080 (Portrait alt)",
                    "2048 × 2048 (Max-quality Square)",
                ],
            ),
            ("Carousels", &["1080 × 1080", "1080 × 1350", "1080 × 608"]),
            ("Reels", &["1080 × 1920", "Thumbnail: 1080 × 1080"]),
            (
                "Stories",
                &[
                    "1080 × 1920",
                    "Safe zone: 1080 × 1420",
                    "Story Ads: 1080 × 1920",
                ],
            ),
        ],
        "Facebook" => &[
            (
                "Static",
                &[
                    "1080 × 1080",
                    "1200 × 630 (Link post)",
                    "1200 × 1200",
                    "1200 × 1500 (Portrait)",
                ],
            ),
            ("Carousels", &["1080 × 1080", "1200 × 1200"]),
            (
                "Video",
                &[
                    "1080 × 1350",
                    "1080 × 1080",
                    "1920 × 1080",
                    "1080 × 1920",
                    "Thumbnail: 1200 × 675",
                ],
            ),
            ("Facebook Stories", &["1080 × 1920"]),
        ],
        "TikTok" => &[
            (
                "Videos",
                &["1080 × 1920", "Safe zone: Top 150px, Bottom 250px"],
            ),
            (
                "Thumbnails",
                &["1080 × 1920", "Cover crop: 1080 × 720 (Top third)"],
            ),
        ],
        "YouTube" => &[
            ("Thumbnails", &["1280 × 720"]),
            ("YouTube Shorts", &["1080 × 1920", "Safe zone: 1080 × 1420"]),
            ("Standard Video", &["1920 × 1080", "3840 × 2160 (4K)"]),
        ],
        "Twitter / X" => &[
            ("Static", &["1200 × 675", "1600 × 900", "1080 × 1080"]),
            ("Header", &["1500 × 500"]),
            ("Card Ads", &["800 × 418", "800 × 800"]),
        ],
        "LinkedIn" => &[
            ("Static", &["1200 × 1200", "1200 × 627", "1080 × 1080"]),
            ("Carousel Ads", &["1080 × 1080"]),
            ("Video", &["1920 × 1080", "1080 × 1080"]),
            ("Cover photo", &["1584 × 396"]),
        ],
        "Pinterest" => &[
            ("Pins", &["1000 × 1500 (2:3)", "1000 × 2100 (Long Pin)"]),
            ("Video Pins", &["1080 × 1920"]),
        ],
        "Snapchat" => &[(
            "Snap Ads / Organic",
            &["1080 × 1920", "Safe zone: top & bottom 150px"],
        )],
        "Threads" => &[
            ("Static", &["1080 × 1080", "1080 × 1350", "1080 × 608"]),
            ("Video", &["1080 × 1350", "1080 × 1080", "1920 × 1080"]),
        ],
        "WhatsApp (Business)" => &[
            ("Status", &["1080 × 1920"]),
            ("Catalogue Images", &["1080 × 1080"]),
        ],
        _ => &[],
    }
}

/// Valid formats for a platform. Unknown platforms yield an empty list.
pub fn formats_for(platform: &str) -> Vec<&'static str> {
    format_table(platform).iter().map(|(f, _)| *f).collect()
}

/// Valid size labels for a (platform, format) pair. Unknown pairs yield
/// an empty list.
pub fn sizes_for(platform: &str, format: &str) -> &'static [&'static str] {
    format_table(platform)
        .iter()
        .find(|(f, _)| *f == format)
        .map(|(_, sizes)| *sizes)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_listed_once() {
        assert_eq!(Category::ALL.len(), 16);
        for pair in Category::ALL.windows(2) {
            assert!(pair[0] < pair[1], "ALL must follow declaration order");
        }
    }

    #[test]
    fn category_serde_round_trips_on_label() {
        for cat in Category::ALL {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.label()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cat);
        }
    }

    #[test]
    fn two_list_categories_have_secondary_labels() {
        for cat in Category::ALL {
            let (_, secondary_label) = option_labels(cat);
            assert_eq!(
                secondary_label.is_some(),
                !secondary_options(cat).is_empty(),
                "secondary label and option list must agree for {cat:?}"
            );
        }
    }

    #[test]
    fn social_media_has_no_flat_options() {
        assert!(options(Category::SocialMedia).is_empty());
        assert!(secondary_options(Category::SocialMedia).is_empty());
    }

    #[test]
    fn known_platform_lookup() {
        let formats = formats_for("Instagram");
        assert_eq!(formats, vec!["Static Posts", "Carousels", "Reels", "Stories"]);
        let sizes = sizes_for("Instagram", "Reels");
        assert_eq!(sizes, &["1080 × 1920", "Thumbnail: 1080 × 1080"]);
    }

    #[test]
    fn unknown_platform_degrades_to_empty() {
        assert!(formats_for("Myspace").is_empty());
        assert!(sizes_for("Myspace", "Static").is_empty());
        assert!(sizes_for("Instagram", "Nope").is_empty());
    }

    #[test]
    fn every_platform_has_at_least_one_format_with_sizes() {
        for platform in SOCIAL_MEDIA_PLATFORMS {
            let formats = formats_for(platform);
            assert!(!formats.is_empty(), "{platform} has no formats");
            for format in formats {
                assert!(
                    !sizes_for(platform, format).is_empty(),
                    "{platform}/{format} has no sizes"
                );
            }
        }
    }
}
