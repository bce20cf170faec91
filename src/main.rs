use clap::Parser;

use profile_card::age::Age;
use profile_card::ascii::PROFILE_IMAGE_ENV;
use profile_card::cli::Args;
use profile_card::config::Config;
use profile_card::pipeline::{self, GenerateError, GenerateOptions};
use profile_card::stats::GITHUB_TOKEN_ENV;

/// Load .env without overriding variables that are already set.
fn load_env() {
    // dotenv::dotenv() returns Err if .env doesn't exist, which is fine
    let _ = dotenv::dotenv();
}

fn init_logging(args: &Args) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level().as_str()),
    )
    .format_timestamp(None)
    .init();
}

/// Non-empty value of an environment variable.
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn run(args: &Args) -> Result<(), GenerateError> {
    let mut config = Config::load(&args.config)?;
    args.apply(&mut config);
    config.validate()?;

    let image = args.image.clone().or_else(|| env_value(PROFILE_IMAGE_ENV));
    let mut options = GenerateOptions::from_config(&config, image.as_deref())?;
    if args.no_readme {
        options.readme = None;
    }

    let age = Age::today(config.birth_date()?);
    log::debug!("Computed age: {}", age);

    let stats = if args.no_stats {
        log::info!("Skipping GitHub statistics (--no-stats)");
        None
    } else {
        log::info!("Fetching GitHub statistics for {}", config.github_username);
        pipeline::resolve_stats(
            &config.github_username,
            env_value(GITHUB_TOKEN_ENV).as_deref(),
        )
    };

    let report = pipeline::generate(&config.profile_data, &age, stats.as_ref(), &options)?;
    for card in &report.cards {
        log::info!("Wrote {}", card.display());
    }
    if let Some(readme) = &report.readme {
        log::info!("Wrote {}", readme.display());
    }
    log::info!(
        "Generated {} card(s) with {} section(s)",
        report.cards.len(),
        report.section_count
    );
    Ok(())
}

fn main() {
    // Load .env file before anything else
    load_env();

    let args = Args::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
