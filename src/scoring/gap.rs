use serde::{Deserialize, Serialize};
use std::fmt;

use super::engine::BusinessHealthScore;
use crate::answers::{QuizAnswers, QuizField};

const CLOSE_RATE_LIFT: u32 = 15;
const CLOSE_RATE_CEILING: u32 = 40;

/// Monthly revenue bracket from the quiz.
///
/// Variants are declared in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevenueBucket {
    Over100K,
    From50KTo100K,
    From20KTo50K,
    From5KTo20K,
    Under5K,
}

impl RevenueBucket {
    const MATCHED: [RevenueBucket; 4] = [
        RevenueBucket::Over100K,
        RevenueBucket::From50KTo100K,
        RevenueBucket::From20KTo50K,
        RevenueBucket::From5KTo20K,
    ];

    /// First bucket whose label appears in the answer; `Under5K` otherwise
    pub fn classify(answer: &str) -> Self {
        Self::MATCHED
            .into_iter()
            .find(|bucket| answer.contains(bucket.label()))
            .unwrap_or(RevenueBucket::Under5K)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RevenueBucket::Over100K => "$100K+",
            RevenueBucket::From50KTo100K => "$50K-$100K",
            RevenueBucket::From20KTo50K => "$20K-$50K",
            RevenueBucket::From5KTo20K => "$5K-$20K",
            RevenueBucket::Under5K => "$0-$5K",
        }
    }

    /// Typical monthly leads for a business in this bracket
    pub fn estimated_leads(&self) -> u32 {
        match self {
            RevenueBucket::Over100K => 50,
            RevenueBucket::From50KTo100K => 35,
            RevenueBucket::From20KTo50K => 20,
            RevenueBucket::From5KTo20K => 10,
            RevenueBucket::Under5K => 5,
        }
    }

    /// Next-tier-up bracket label
    pub fn potential_label(&self) -> &'static str {
        match self {
            RevenueBucket::Over100K => "$200K-$300K",
            RevenueBucket::From50KTo100K => "$125K-$200K",
            RevenueBucket::From20KTo50K => "$60K-$100K",
            RevenueBucket::From5KTo20K => "$30K-$50K",
            RevenueBucket::Under5K => "$10K-$20K",
        }
    }

    /// Bracket bounds in USD. The open-ended top bracket is capped at 200K.
    pub fn bounds(&self) -> (u32, u32) {
        match self {
            RevenueBucket::Over100K => (100_000, 200_000),
            RevenueBucket::From50KTo100K => (50_000, 100_000),
            RevenueBucket::From20KTo50K => (20_000, 50_000),
            RevenueBucket::From5KTo20K => (5_000, 20_000),
            RevenueBucket::Under5K => (0, 5_000),
        }
    }

    /// Bounds of the `potential_label` bracket in USD
    pub fn potential_bounds(&self) -> (u32, u32) {
        match self {
            RevenueBucket::Over100K => (200_000, 300_000),
            RevenueBucket::From50KTo100K => (125_000, 200_000),
            RevenueBucket::From20KTo50K => (60_000, 100_000),
            RevenueBucket::From5KTo20K => (30_000, 50_000),
            RevenueBucket::Under5K => (10_000, 20_000),
        }
    }
}

impl fmt::Display for RevenueBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the business is today versus the next tier up.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysis {
    pub current_revenue: String,
    pub current_leads: u32,
    pub current_close_rate: u32,
    pub potential_revenue: String,
    pub potential_leads: f64,
    pub potential_close_rate: u32,
    pub potential_multiplier: f64,
}

/// Estimated close rate (percent) from the conversion process score
pub fn estimated_close_rate(conversion_process: u32) -> u32 {
    if conversion_process >= 70 {
        35
    } else if conversion_process >= 50 {
        25
    } else if conversion_process >= 30 {
        18
    } else {
        12
    }
}

/// Lead growth multiplier from the overall score
pub fn potential_multiplier(overall: u32) -> f64 {
    if overall >= 70 {
        2.5
    } else if overall >= 50 {
        2.0
    } else {
        1.5
    }
}

/// Project current revenue/leads/close rate to the next tier.
///
/// `potential_leads` is left unrounded.
pub fn get_gap_analysis(answers: &QuizAnswers, score: &BusinessHealthScore) -> GapAnalysis {
    let bucket = RevenueBucket::classify(answers.get(QuizField::MonthlyRevenue));
    let current_leads = bucket.estimated_leads();
    let current_close_rate = estimated_close_rate(score.conversion_process);
    let multiplier = potential_multiplier(score.overall);

    tracing::debug!(bucket = %bucket, multiplier, "gap analysis");

    GapAnalysis {
        current_revenue: bucket.label().to_string(),
        current_leads,
        current_close_rate,
        potential_revenue: bucket.potential_label().to_string(),
        potential_leads: f64::from(current_leads) * multiplier,
        potential_close_rate: (current_close_rate + CLOSE_RATE_LIFT).min(CLOSE_RATE_CEILING),
        potential_multiplier: multiplier,
    }
}
