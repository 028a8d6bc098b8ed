use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

use crate::answers::QuizAnswers;
use crate::scoring::{
    get_benchmark_data, get_gap_analysis, BenchmarkData, BusinessHealthScore, GapAnalysis,
    ScoreBreakdown, ScoringTables,
};

/// Everything derived from one quiz submission.
///
/// This is the record handed to persistence and to the roadmap prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub generated_at: DateTime<Utc>,
    pub score: BusinessHealthScore,
    pub benchmarks: Vec<BenchmarkData>,
    pub gap: GapAnalysis,
    pub breakdown: ScoreBreakdown,
}

impl HealthReport {
    pub fn build(answers: &QuizAnswers, tables: &ScoringTables) -> Self {
        let result = tables.score(answers);
        let benchmarks = get_benchmark_data(&result.score);
        let gap = get_gap_analysis(answers, &result.score);

        tracing::info!(
            overall = result.score.overall,
            top_strength = %result.score.top_strength,
            biggest_gap = %result.score.biggest_gap,
            "report built"
        );

        Self {
            generated_at: Utc::now(),
            score: result.score,
            benchmarks,
            gap,
            breakdown: result.breakdown,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    /// Write the JSON report atomically; the file is never left half-written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut file = AtomicWriteFile::open(path)
            .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

        serde_json::to_writer_pretty(&mut file, self).context("Failed to serialize report")?;

        file.commit()
            .with_context(|| format!("Failed to save report to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::QuizField;

    fn sample_answers() -> QuizAnswers {
        QuizAnswers::new()
            .with(QuizField::MonthlyRevenue, "$20K-$50K")
            .with(QuizField::OfferConfidence, "Very confident")
            .with(QuizField::LeadResponseSpeed, "Within 1 hour")
    }

    #[test]
    fn test_build_report() {
        let report = HealthReport::build(&sample_answers(), ScoringTables::builtin());
        // 50 confidence + 10 revenue bonus
        assert_eq!(report.score.offer_clarity, 60);
        assert_eq!(report.score.lead_generation, 25);
        assert_eq!(report.benchmarks.len(), 4);
        assert_eq!(report.gap.current_revenue, "$20K-$50K");
        assert_eq!(report.breakdown.factors.len(), 13);
    }

    #[test]
    fn test_json_shape() {
        let report = HealthReport::build(&sample_answers(), ScoringTables::builtin());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert!(value["generatedAt"].is_string());
        assert_eq!(value["score"]["offerClarity"], 60);
        assert_eq!(value["gap"]["currentLeads"], 20);
        assert_eq!(value["benchmarks"][0]["category"], "Lead Generation");
    }

    #[test]
    fn test_save_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = HealthReport::build(&sample_answers(), ScoringTables::builtin());

        report.save(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["score"]["overall"], report.score.overall);
    }
}
