use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_UNKNOWN_TEST: i32 = 5;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a quiz submission and print the health report
    Score {
        /// JSON file with the quiz answers
        answers: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Also write the JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compare a submission's category scores with industry benchmarks
    Benchmarks {
        /// JSON file with the quiz answers
        answers: PathBuf,
    },
    /// Show which variant of a split test a session sees
    Assign {
        /// Visitor session id
        session_id: String,

        /// Split test id from the config file
        test_id: i64,
    },
    /// Assign synthetic sessions to a split test and report the spread
    Simulate {
        /// Split test id from the config file
        test_id: i64,

        /// Number of synthetic sessions
        #[arg(short, long, default_value_t = 10_000)]
        sessions: usize,
    },
    /// Validate the config file and exit
    CheckConfig,
}

#[derive(Parser, Debug)]
#[command(name = "bizscore")]
#[command(about = "Business health scoring and split-test assignment", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/bizscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    bizscore::logging::init_logging(cli.verbose);

    // Load and validate config at startup
    let config = match bizscore::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = bizscore::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Tier predicates are parsed here once, not per submission
    let scoring = config
        .scoring
        .as_ref()
        .map(bizscore::scoring::ScoringTables::compile)
        .unwrap_or_default();
    let use_colors = bizscore::output::should_use_colors();

    match cli.command {
        Commands::Score {
            answers,
            format,
            output,
        } => {
            let answers = load_answers_or_exit(&answers);
            let report = bizscore::HealthReport::build(&answers, &scoring);

            if let Some(path) = output {
                if let Err(e) = report.save(&path) {
                    eprintln!("Failed to write report: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
                tracing::info!(path = %path.display(), "report written");
            }

            match format {
                Format::Text => {
                    println!(
                        "{}",
                        bizscore::output::format_report(&report, cli.verbose, use_colors)
                    );
                }
                Format::Json => match report.to_json() {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("{:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
            }
        }
        Commands::Benchmarks { answers } => {
            let answers = load_answers_or_exit(&answers);
            let score = scoring.score(&answers).score;
            let rows = bizscore::get_benchmark_data(&score);
            println!("{}", bizscore::output::format_benchmarks(&rows, use_colors));
        }
        Commands::Assign {
            session_id,
            test_id,
        } => {
            let Some(test) = config.split_test(test_id) else {
                eprintln!("No split test with id {} in config.", test_id);
                std::process::exit(EXIT_UNKNOWN_TEST);
            };

            match test.assign(&session_id) {
                Some(variant) => println!("{}", variant.id),
                None => {
                    // validation rejects tests that cannot assign
                    eprintln!("Split test {} has no assignable variants.", test.display_name());
                    std::process::exit(EXIT_CONFIG);
                }
            }
        }
        Commands::Simulate { test_id, sessions } => {
            let Some(test) = config.split_test(test_id) else {
                eprintln!("No split test with id {} in config.", test_id);
                std::process::exit(EXIT_UNKNOWN_TEST);
            };

            let counts = bizscore::split_test::simulate_distribution(test, sessions);
            println!("Split test {} ({} sessions)", test.display_name(), sessions);
            println!("{}", bizscore::output::format_distribution(&counts));
        }
        Commands::CheckConfig => {
            println!(
                "Config OK: {} split test(s), scoring {}",
                config.split_tests.len(),
                if config.scoring.is_some() {
                    "customized"
                } else {
                    "built-in"
                }
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn load_answers_or_exit(path: &std::path::Path) -> bizscore::QuizAnswers {
    match bizscore::load_answers(path) {
        Ok(a) => {
            tracing::debug!(answers = a.len(), "loaded answers");
            a
        }
        Err(e) => {
            eprintln!("Answers error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}
