use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::category::Category;
use super::config::{FactorConfig, ScoringConfig};
use super::factors::Predicate;
use crate::answers::{QuizAnswers, QuizField};

const CATEGORY_MAX: u32 = 100;

/// Category scores derived from one set of quiz answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHealthScore {
    pub lead_generation: u32,
    pub offer_clarity: u32,
    pub social_presence: u32,
    pub conversion_process: u32,
    pub overall: u32,
    pub top_strength: Category,
    pub biggest_gap: Category,
}

impl BusinessHealthScore {
    /// Assemble a score from the four category values, deriving the rest
    pub fn from_categories(
        lead_generation: u32,
        offer_clarity: u32,
        social_presence: u32,
        conversion_process: u32,
    ) -> Self {
        let scores = [
            lead_generation,
            offer_clarity,
            social_presence,
            conversion_process,
        ];

        // Integer round-half-up of sum / 4
        let overall = (scores.iter().sum::<u32>() + 2) / 4;

        // sort_by is stable, so ties keep category order
        let mut ranked: Vec<(Category, u32)> = Category::ALL.into_iter().zip(scores).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            lead_generation,
            offer_clarity,
            social_presence,
            conversion_process,
            overall,
            top_strength: ranked[0].0,
            biggest_gap: ranked[ranked.len() - 1].0,
        }
    }

    pub fn category_score(&self, category: Category) -> u32 {
        match category {
            Category::LeadGeneration => self.lead_generation,
            Category::OfferClarity => self.offer_clarity,
            Category::SocialPresence => self.social_presence,
            Category::ConversionProcess => self.conversion_process,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorContribution {
    pub category: Category,
    pub field: QuizField,
    pub matched: Option<String>, // the tier predicate that matched, None = default
    pub points: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
}

impl ScoreBreakdown {
    pub fn for_category(&self, category: Category) -> impl Iterator<Item = &FactorContribution> {
        self.factors.iter().filter(move |f| f.category == category)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: BusinessHealthScore,
    pub breakdown: ScoreBreakdown,
}

/// One factor with its tier predicates already parsed.
#[derive(Debug, Clone)]
struct CompiledFactor {
    field: QuizField,
    default: u32,
    tiers: Vec<CompiledTier>,
}

#[derive(Debug, Clone)]
struct CompiledTier {
    predicate: Predicate,
    when: String,
    points: u32,
}

/// Scoring tables ready for repeated use.
///
/// Built once from a `ScoringConfig`; every tier predicate is parsed here and
/// never again while scoring. Unparseable tiers are dropped with a warning
/// (validation reports them as errors before this point).
#[derive(Debug, Clone)]
pub struct ScoringTables {
    categories: [Vec<CompiledFactor>; 4],
}

impl ScoringTables {
    pub fn compile(config: &ScoringConfig) -> Self {
        let categories = Category::ALL.map(|category| {
            config
                .factors(category)
                .iter()
                .map(|factor| compile_factor(category, factor))
                .collect()
        });
        Self { categories }
    }

    /// The built-in tables, compiled once per process.
    pub fn builtin() -> &'static ScoringTables {
        &BUILTIN_TABLES
    }

    /// Score quiz answers, keeping a per-factor breakdown.
    pub fn score(&self, answers: &QuizAnswers) -> ScoreResult {
        let mut breakdown = ScoreBreakdown::default();
        let mut totals = [0u32; 4];

        for ((slot, category), factors) in totals.iter_mut().zip(Category::ALL).zip(&self.categories) {
            let mut sum = 0u32;
            for factor in factors {
                let contribution = apply_factor(category, factor, answers);
                sum = sum.saturating_add(contribution.points);
                breakdown.factors.push(contribution);
            }
            *slot = sum.min(CATEGORY_MAX);
            tracing::debug!(category = %category, score = *slot, "category scored");
        }

        let score = BusinessHealthScore::from_categories(totals[0], totals[1], totals[2], totals[3]);
        ScoreResult { score, breakdown }
    }
}

impl Default for ScoringTables {
    fn default() -> Self {
        BUILTIN_TABLES.clone()
    }
}

static BUILTIN_TABLES: LazyLock<ScoringTables> =
    LazyLock::new(|| ScoringTables::compile(&ScoringConfig::default()));

/// Score quiz answers against the built-in point tables.
///
/// Total over every input: missing or unrecognized answers fall through to
/// each factor's default points.
pub fn calculate_business_health_score(answers: &QuizAnswers) -> BusinessHealthScore {
    BUILTIN_TABLES.score(answers).score
}

/// Score quiz answers against the given point tables, keeping a per-factor
/// breakdown. Compiles the tables on every call; hold a `ScoringTables` to
/// score many submissions.
pub fn calculate_score(answers: &QuizAnswers, config: &ScoringConfig) -> ScoreResult {
    ScoringTables::compile(config).score(answers)
}

fn compile_factor(category: Category, factor: &FactorConfig) -> CompiledFactor {
    let tiers = factor
        .tiers
        .iter()
        .filter_map(|tier| match Predicate::parse(&tier.when) {
            Ok(predicate) => Some(CompiledTier {
                predicate,
                when: tier.when.clone(),
                points: tier.points,
            }),
            Err(e) => {
                tracing::warn!(category = %category, field = %factor.field, rule = %tier.when, "skipping tier: {:#}", e);
                None
            }
        })
        .collect();

    CompiledFactor {
        field: factor.field,
        default: factor.default,
        tiers,
    }
}

fn apply_factor(category: Category, factor: &CompiledFactor, answers: &QuizAnswers) -> FactorContribution {
    let answer = answers.get(factor.field);

    if let Some(tier) = factor.tiers.iter().find(|t| t.predicate.matches(answer)) {
        tracing::debug!(field = %factor.field, rule = %tier.when, points = tier.points, "tier matched");
        return FactorContribution {
            category,
            field: factor.field,
            matched: Some(tier.when.clone()),
            points: tier.points,
        };
    }

    FactorContribution {
        category,
        field: factor.field,
        matched: None,
        points: factor.default,
    }
}
