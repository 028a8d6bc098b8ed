use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::report::HealthReport;
use crate::scoring::{BenchmarkData, BusinessHealthScore, Category, GapAnalysis, ScoreBreakdown};

const NAME_WIDTH: usize = 20;
const MAX_BAR_WIDTH: usize = 40;
const MIN_BAR_WIDTH: usize = 10;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Bar width that fits beside the name and score columns
fn bar_width() -> usize {
    match get_terminal_width() {
        Some(width) => width
            .saturating_sub(NAME_WIDTH + 8)
            .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH),
        None => MAX_BAR_WIDTH,
    }
}

/// Render a 0-100 score as a fixed-width bar: "#######...."
pub fn format_bar(score: u32, width: usize) -> String {
    let filled = (score.min(100) as usize * width + 50) / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

fn colorize_score(score: u32, text: &str, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    if score >= 70 {
        text.green().to_string()
    } else if score >= 40 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

/// Category scores, one line each, followed by overall/strength/gap
pub fn format_score(score: &BusinessHealthScore, use_colors: bool) -> String {
    let width = bar_width();
    let mut lines: Vec<String> = Category::ALL
        .iter()
        .map(|category| {
            let value = score.category_score(*category);
            let bar = format_bar(value, width);
            format!(
                "{:<name$} {:>3}  {}",
                category.display_name(),
                value,
                colorize_score(value, &bar, use_colors),
                name = NAME_WIDTH
            )
        })
        .collect();

    lines.push(String::new());
    let overall = format!("{}/100", score.overall);
    if use_colors {
        lines.push(format!("Overall: {}", colorize_score(score.overall, &overall, true).bold()));
        lines.push(format!("Top strength: {}", score.top_strength.green()));
        lines.push(format!("Biggest gap: {}", score.biggest_gap.red()));
    } else {
        lines.push(format!("Overall: {}", overall));
        lines.push(format!("Top strength: {}", score.top_strength));
        lines.push(format!("Biggest gap: {}", score.biggest_gap));
    }
    lines.join("\n")
}

/// Benchmark rows as an aligned table with a header
pub fn format_benchmarks(rows: &[BenchmarkData], use_colors: bool) -> String {
    let header = format!(
        "{:<name$} {:>5} {:>8} {:>5}",
        "Category",
        "You",
        "Average",
        "Top",
        name = NAME_WIDTH
    );
    let mut lines = vec![if use_colors {
        header.dimmed().to_string()
    } else {
        header
    }];

    for row in rows {
        let yours = format!("{:>5}", row.your_score);
        let yours = if use_colors && row.your_score < row.industry_average {
            yours.red().to_string()
        } else {
            yours
        };
        lines.push(format!(
            "{:<name$} {} {:>8} {:>5}",
            row.category.display_name(),
            yours,
            row.industry_average,
            row.top_performers,
            name = NAME_WIDTH
        ));
    }
    lines.join("\n")
}

/// Format a lead count, dropping a trailing ".0"
pub fn format_leads(leads: f64) -> String {
    if leads.fract() == 0.0 {
        format!("{:.0}", leads)
    } else {
        format!("{:.1}", leads)
    }
}

/// Current vs potential side by side
pub fn format_gap(gap: &GapAnalysis, use_colors: bool) -> String {
    let rows = [
        ("Monthly revenue", gap.current_revenue.clone(), gap.potential_revenue.clone()),
        ("Leads per month", gap.current_leads.to_string(), format_leads(gap.potential_leads)),
        (
            "Close rate",
            format!("{}%", gap.current_close_rate),
            format!("{}%", gap.potential_close_rate),
        ),
    ];

    let mut lines = vec![format!("{:<16} {:>12}    {:>12}", "", "Current", "Potential")];
    for (label, current, potential) in rows {
        let potential = format!("{:>12}", potential);
        lines.push(format!(
            "{:<16} {:>12} -> {}",
            label,
            current,
            if use_colors {
                potential.green().to_string()
            } else {
                potential
            }
        ));
    }
    lines.push(format!("Lead multiplier: x{}", gap.potential_multiplier));
    lines.join("\n")
}

/// Per-factor points, grouped by category (for verbose mode)
pub fn format_breakdown(breakdown: &ScoreBreakdown, use_colors: bool) -> String {
    let mut lines = Vec::new();
    for category in Category::ALL {
        lines.push(if use_colors {
            category.display_name().bold().to_string()
        } else {
            category.display_name().to_string()
        });
        for factor in breakdown.for_category(category) {
            let rule = match &factor.matched {
                Some(rule) => format!("matched '{}'", rule),
                None => "default".to_string(),
            };
            lines.push(format!("  {:<18} {:>+4}  {}", factor.field.key(), factor.points, rule));
        }
    }
    lines.join("\n")
}

/// Full text report
pub fn format_report(report: &HealthReport, verbose: bool, use_colors: bool) -> String {
    let mut sections = vec![
        format_score(&report.score, use_colors),
        format_benchmarks(&report.benchmarks, use_colors),
        format_gap(&report.gap, use_colors),
    ];
    if verbose {
        sections.push(format_breakdown(&report.breakdown, use_colors));
    }
    sections.join("\n\n")
}

/// Per-variant counts with percentages, for `simulate`
pub fn format_distribution(counts: &[(String, usize)]) -> String {
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return "No sessions assigned.".to_string();
    }
    counts
        .iter()
        .map(|(id, n)| format!("{:<12} {:>8}  {:>5.1}%", id, n, *n as f64 * 100.0 / total as f64))
        .collect::<Vec<_>>()
        .join("\n")
}
