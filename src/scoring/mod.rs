pub mod benchmark;
pub mod category;
pub mod config;
pub mod engine;
pub mod factors;
pub mod gap;
pub mod validation;

pub use benchmark::{get_benchmark_data, BenchmarkData};
pub use category::Category;
pub use config::*;
pub use engine::{
    calculate_business_health_score, calculate_score, BusinessHealthScore, FactorContribution,
    ScoreBreakdown, ScoreResult, ScoringTables,
};
pub use factors::{Predicate, Term};
pub use gap::{get_gap_analysis, GapAnalysis, RevenueBucket};
pub use validation::validate_scoring;
