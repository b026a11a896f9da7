//! CLI entrypoint for moodscribe
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use moodscribe_application::{RunGenerationError, RunGenerationInput, RunGenerationUseCase};
use moodscribe_domain::{GenerationParams, OutputFormat};
use moodscribe_infrastructure::{
    ConfigLoader, FileConfig, HuggingFaceClient, HuggingFaceSentimentClassifier,
    HuggingFaceTextGenerator, JsonlConversationLogger,
};
use moodscribe_presentation::{
    Cli, ConsoleFormatter, OutputConfig, OutputFormatter, ProgressMode, PromptRepl, ReplConfig,
    run_prompt,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines reach the file
    let _log_guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting moodscribe");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    output.apply_color();

    // --about must work even when the config fails validation
    if cli.about {
        println!("{}", about_text(&config));
        return Ok(ExitCode::SUCCESS);
    }

    check_config(&config)?;

    let params = GenerationParams::new(cli.max_length.unwrap_or(config.generation.max_length))?;

    // === Dependency Injection ===
    let use_case = build_use_case(&config)?;

    if cli.wants_repl() {
        let repl_config = ReplConfig {
            show_progress: config.repl.show_progress && !cli.quiet,
            history_file: config.repl.history_file.as_ref().map(PathBuf::from),
            history_size: config.repl.history_size,
        };
        PromptRepl::new(use_case)
            .with_params(params)
            .with_output(output)
            .with_config(repl_config)
            .run()
            .await?;
        return Ok(ExitCode::SUCCESS);
    }

    let prompt = cli.one_shot_prompt().unwrap_or_default();
    let input = RunGenerationInput::new(prompt).with_params(params);

    let outcome = run_prompt(&use_case, input, ProgressMode::detect(!cli.quiet)).await;
    match &outcome {
        Ok(result) => println!("{}", ConsoleFormatter.render(result, output.format)),
        Err(e) if e.is_user_error() => eprintln!("{}", ConsoleFormatter::warning(&e.to_string())),
        Err(e) => eprintln!("{}", ConsoleFormatter::error(&e.to_string())),
    }
    Ok(ExitCode::from(exit_status(outcome.as_ref().err())))
}

/// Process exit status for a one-shot run: 0 on success, 2 for user
/// mistakes such as an empty prompt, 1 for any other failure
fn exit_status(error: Option<&RunGenerationError>) -> u8 {
    match error {
        None => 0,
        Some(e) if e.is_user_error() => 2,
        Some(_) => 1,
    }
}

fn about_text(config: &FileConfig) -> String {
    ConsoleFormatter::about(&config.models.sentiment, &config.models.generation)
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("--log-file must name a file: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}

/// Report configuration issues; errors abort, warnings are logged
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            eprintln!("{}", ConsoleFormatter::error(&issue.message));
        } else {
            warn!("{}", issue.message);
        }
    }
    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("Configuration has {errors} error(s)");
    }
    Ok(())
}

fn build_use_case(config: &FileConfig) -> Result<RunGenerationUseCase> {
    let hf = &config.providers.huggingface;
    let client = HuggingFaceClient::new(&hf.base_url, hf.resolve_api_key(), hf.timeout())?
        .with_wait_for_model(hf.wait_for_model);
    info!(
        "Inference endpoint: {} (token: {})",
        client.base_url(),
        if client.has_api_key() { "set" } else { "none" }
    );

    let classifier = Arc::new(HuggingFaceSentimentClassifier::new(
        client.clone(),
        &config.models.sentiment,
    ));
    let generator = Arc::new(HuggingFaceTextGenerator::new(client, &config.models.generation));

    let mut use_case = RunGenerationUseCase::new(classifier, generator);

    if let Some(path) = &config.logging.conversation_log {
        let logger = JsonlConversationLogger::open(path)
            .with_context(|| format!("Failed to open conversation log {path}"))?;
        info!("Writing conversation transcript to {}", logger.path().display());
        use_case = use_case.with_conversation_logger(Arc::new(logger));
    }

    Ok(use_case)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodscribe_application::{InferenceError, InferenceStage};

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(None), 0);
        assert_eq!(exit_status(Some(&RunGenerationError::EmptyPrompt)), 2);
        assert_eq!(exit_status(Some(&RunGenerationError::NoGeneratedText)), 1);
        let failed = RunGenerationError::Inference {
            stage: InferenceStage::Generation,
            source: InferenceError::RequestFailed("HTTP 503".to_string()),
        };
        assert_eq!(exit_status(Some(&failed)), 1);
    }

    #[test]
    fn test_about_does_not_need_valid_config() {
        let mut config = FileConfig::default();
        config.generation.max_length = 0;
        config.providers.huggingface.base_url = String::new();
        assert!(check_config(&config).is_err());

        let about = about_text(&config);
        assert!(about.contains("About moodscribe"));
        assert!(about.contains(&config.models.sentiment));
    }
}
