pub mod formatter;

pub use formatter::{
    format_bar, format_benchmarks, format_breakdown, format_distribution, format_gap,
    format_report, format_score, should_use_colors,
};
