use anyhow::{Context, Result};
use clap::Parser;
use likert::cli::CliArgs;
use likert::config::Config;
use likert::logger::Logger;
use likert::survey::{ConsoleNotifier, SimulatedSubmitter, Submitter, SurveyForm};
use likert::ui;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    if let Some(path) = &args.generate_config {
        let path = match path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(&path);
    }

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    args.apply(&mut config);
    config.validate()?;

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install(config.logging.level_filter()?)?;

    let delay = config.submission.simulated_delay();
    let submitter: Arc<dyn Submitter> = if config.submission.simulate_failure {
        Arc::new(SimulatedSubmitter::failing(delay))
    } else {
        Arc::new(SimulatedSubmitter::new(delay))
    };

    let result = if args.is_headless() {
        run_headless(&args, &config, submitter.as_ref()).await
    } else {
        ui::run_app(&config, submitter, logger.clone()).await
    };

    logger.flush();
    result
}

/// Submit one response from the command line and print it as JSON
async fn run_headless(args: &CliArgs, config: &Config, submitter: &dyn Submitter) -> Result<()> {
    let scale = config.survey.build_scale()?;
    let mut form = SurveyForm::new(scale, Arc::new(ConsoleNotifier));

    if let Some(value) = args.score {
        let score = form.scale().score(value)?;
        form.update_score(score)?;
    }
    if let Some(comment) = &args.comment {
        form.update_comment(comment.as_str())?;
    }

    let receipt = form
        .submit(submitter, &config.submission.policy())
        .await
        .context("Survey submission failed")?;

    let output = serde_json::json!({
        "score": form.score(),
        "comment": form.comment(),
        "band": form.score().map(|score| form.scale().classify(score)),
        "receipt": receipt,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
