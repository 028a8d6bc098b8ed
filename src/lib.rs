//! Business health scoring and split-test bucketing for the lead-generation
//! quiz and sales funnel.
//!
//! - [`scoring`] turns quiz answers into category scores, benchmarks and a
//!   gap projection.
//! - [`split_test`] deterministically assigns visitors to experiment arms.
//!
//! Both are pure and may be called from any number of threads.

pub mod answers;
pub mod config;
pub mod logging;
pub mod output;
pub mod report;
pub mod scoring;
pub mod split_test;

pub use answers::{load_answers, QuizAnswers, QuizField};
pub use report::HealthReport;
pub use scoring::{
    calculate_business_health_score, get_benchmark_data, get_gap_analysis, BenchmarkData,
    BusinessHealthScore, Category, GapAnalysis,
};
pub use split_test::{assign_variant, hash_to_number, SplitTest, SplitTestVariant};
