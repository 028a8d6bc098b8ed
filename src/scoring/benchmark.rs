use serde::{Deserialize, Serialize};

use super::category::Category;
use super::engine::BusinessHealthScore;

/// A category score next to industry reference points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkData {
    pub category: Category,
    pub your_score: u32,
    pub industry_average: u32,
    pub top_performers: u32,
}

/// One row per category, in category order
pub fn get_benchmark_data(score: &BusinessHealthScore) -> Vec<BenchmarkData> {
    Category::ALL
        .into_iter()
        .map(|category| BenchmarkData {
            category,
            your_score: score.category_score(category),
            industry_average: category.industry_average(),
            top_performers: category.top_performers(),
        })
        .collect()
}
