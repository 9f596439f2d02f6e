use clap::Parser;
use school_meal::adapters::render::renderer_for;
use school_meal::utils::error::{ErrorSeverity, MealError};
use school_meal::utils::validation::{parse_search_date, validate_not_past, Validate};
use school_meal::utils::logger;
use school_meal::{CliConfig, MealSearch, ReqwestTransport, ViewState};

fn exit_code_for(e: &MealError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: MealError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(exit_code_for(&e).max(1));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting school-meal CLI");
    tracing::debug!("CLI args: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => fail(e),
    };
    if let Err(e) = config.validate() {
        fail(e);
    }

    let today = chrono::Local::now().date_naive();
    let date = match cli.date.as_deref() {
        Some(input) => match parse_search_date(input) {
            Ok(date) => date,
            Err(e) => fail(e),
        },
        None => today,
    };
    if !cli.allow_past {
        if let Err(e) = validate_not_past(date, today) {
            fail(e);
        }
    }

    let format = config.format;
    let search = MealSearch::new(ReqwestTransport::new(), config);
    let mut renderer = renderer_for(format, std::io::stdout());

    let state = search.run(date, renderer.as_mut()).await?;

    if let ViewState::Error(message) = state {
        tracing::debug!("Search ended with error state: {}", message);
        std::process::exit(2);
    }

    Ok(())
}
