use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::category::Category;
use crate::answers::QuizField;

/// Point tables for the four score categories.
///
/// Each category is an ordered list of factors. A category left out of the
/// config file falls back to the built-in table.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   social_presence:
///     - field: contentFrequency
///       tiers:
///         - { when: "contains:Daily", points: 40 }
///         - { when: "contains:Weekly", points: 20 }
///     - field: instagramHandle
///       tiers:
///         - { when: "len>3", points: 20 }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_generation: Option<Vec<FactorConfig>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_clarity: Option<Vec<FactorConfig>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_presence: Option<Vec<FactorConfig>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_process: Option<Vec<FactorConfig>>,
}

impl ScoringConfig {
    /// Configured factors for a category, or the built-in table
    pub fn factors(&self, category: Category) -> &[FactorConfig] {
        let configured = match category {
            Category::LeadGeneration => &self.lead_generation,
            Category::OfferClarity => &self.offer_clarity,
            Category::SocialPresence => &self.social_presence,
            Category::ConversionProcess => &self.conversion_process,
        };
        match configured {
            Some(factors) => factors,
            None => builtin_factors(category),
        }
    }

    /// Config with every category spelled out (the built-in tables)
    pub fn builtin() -> Self {
        Self {
            lead_generation: Some(builtin_factors(Category::LeadGeneration).to_vec()),
            offer_clarity: Some(builtin_factors(Category::OfferClarity).to_vec()),
            social_presence: Some(builtin_factors(Category::SocialPresence).to_vec()),
            conversion_process: Some(builtin_factors(Category::ConversionProcess).to_vec()),
        }
    }
}

/// One quiz field's contribution to a category.
///
/// Tiers are checked in order; the first whose `when` predicate matches
/// awards its points. No match awards `default`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FactorConfig {
    pub field: QuizField,

    #[serde(default)]
    pub default: u32,

    pub tiers: Vec<Tier>,
}

/// Predicate/points pair. Predicate grammar lives in `factors.rs`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Tier {
    pub when: String,
    pub points: u32,
}

impl FactorConfig {
    /// Most points this factor can award
    pub fn max_points(&self) -> u32 {
        self.tiers
            .iter()
            .map(|t| t.points)
            .chain(std::iter::once(self.default))
            .max()
            .unwrap_or(0)
    }
}

fn factor(field: QuizField, default: u32, tiers: &[(&str, u32)]) -> FactorConfig {
    FactorConfig {
        field,
        default,
        tiers: tiers
            .iter()
            .map(|(when, points)| Tier {
                when: when.to_string(),
                points: *points,
            })
            .collect(),
    }
}

static BUILTIN: LazyLock<[Vec<FactorConfig>; 4]> = LazyLock::new(|| {
    [
        vec![
            factor(
                QuizField::CrmUsage,
                0,
                &[
                    ("contains:Yes (use it daily)", 30),
                    ("contains:Yes (but rarely)", 15),
                    ("contains:Spreadsheet", 10),
                ],
            ),
            factor(
                QuizField::LeadResponseSpeed,
                0,
                &[
                    ("contains:Within 5 minutes", 35),
                    ("contains:Within 1 hour", 25),
                    ("contains:Same day", 10),
                ],
            ),
            // fewer missed leads scores higher
            factor(
                QuizField::MissedLeads,
                0,
                &[
                    ("contains:0-10%", 20),
                    ("contains:10-25%", 15),
                    ("contains:25-50%", 5),
                ],
            ),
            factor(
                QuizField::ChatAgents,
                0,
                &[
                    ("contains:Yes (website + social)", 15),
                    ("contains:Yes (website only)", 10),
                    ("contains:Thinking about it", 5),
                ],
            ),
        ],
        vec![
            factor(
                QuizField::OfferConfidence,
                10,
                &[
                    ("contains:Very confident", 50),
                    ("contains:Somewhat confident", 30),
                ],
            ),
            factor(
                QuizField::MainOffer,
                0,
                &[
                    ("contains:$ & len>50", 30),
                    ("len>30", 20),
                    ("len>10", 10),
                ],
            ),
            factor(
                QuizField::MonthlyRevenue,
                0,
                &[
                    ("contains:$100K+", 20),
                    ("contains:$50K-$100K", 15),
                    ("contains:$20K-$50K", 10),
                    ("contains:$5K-$20K", 5),
                ],
            ),
        ],
        vec![
            factor(
                QuizField::ContentFrequency,
                0,
                &[
                    ("contains:Daily", 40),
                    ("contains:Several times a week", 35),
                    ("contains:Weekly", 20),
                    ("contains:Monthly", 5),
                ],
            ),
            factor(
                QuizField::AudienceSize,
                5,
                &[
                    ("contains:100K+", 40),
                    ("contains:10K-100K", 35),
                    ("contains:5K-10K", 25),
                    ("contains:1K-5K", 15),
                    ("contains:500-1K", 10),
                ],
            ),
            factor(QuizField::InstagramHandle, 0, &[("len>3", 20)]),
        ],
        vec![
            factor(
                QuizField::MonthlyAdBudget,
                0,
                &[
                    ("contains:$5K+", 50),
                    ("contains:$2K-$5K", 40),
                    ("contains:$1K-$2K", 30),
                    ("contains:$500-$1K", 15),
                ],
            ),
            factor(
                QuizField::NinetyDayGoal,
                0,
                &[("len>20 & any:$|K", 30), ("len>10", 15)],
            ),
            factor(QuizField::Website, 0, &[("len>5", 20)]),
        ],
    ]
});

/// Built-in point table for a category
pub fn builtin_factors(category: Category) -> &'static [FactorConfig] {
    &BUILTIN[category as usize]
}
