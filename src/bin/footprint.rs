//! Footprint CLI
//!
//! Computes a carbon footprint report from a JSON lifestyle file, from the
//! default form values, or interactively step by step.
//!
//! Usage:
//!   footprint [INPUT.json] [--format json|markdown|summary] [--seed N]
//!   footprint --wizard

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::{Input, Select};
use rand::RngCore;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use footprint_estimator::{
    compute_with_rng, normalize_input, EstimatorConfig, FootprintReport, FootprintResult,
    FormField, JsonFormatter, LifestyleInput, MarkdownFormatter, OutputFormat, WizardSession,
    WizardStep,
};

#[derive(Parser)]
#[command(name = "footprint", about = "Estimate an annual carbon footprint")]
struct Cli {
    /// Lifestyle input as JSON; the default form values are used when omitted
    input: Option<PathBuf>,

    /// Output format (overrides FOOTPRINT_FORMAT)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Seed for tip selection (overrides FOOTPRINT_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Walk through the calculator questions interactively
    #[arg(long, conflicts_with = "input")]
    wizard: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "footprint_estimator=warn,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = EstimatorConfig::from_env()?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    tracing::debug!("Configuration: {:?}", config);

    let mut rng = config.rng();

    if cli.wizard {
        return run_wizard(&config, &mut *rng);
    }

    let input = match &cli.input {
        Some(path) => load_input(path)?,
        None => LifestyleInput::default(),
    };

    let result = compute_with_rng(&input, &mut *rng);
    print_report(&config, &input, &result)
}

fn load_input(path: &Path) -> Result<LifestyleInput> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {:?}", path))?;
    let input: LifestyleInput = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse lifestyle JSON: {:?}", path))?;
    normalize_input(&input).with_context(|| format!("Invalid lifestyle values in {:?}", path))
}

fn print_report(
    config: &EstimatorConfig,
    input: &LifestyleInput,
    result: &FootprintResult,
) -> Result<()> {
    let report = FootprintReport::new(input, result);
    let rendered = match config.format {
        OutputFormat::Json => JsonFormatter::format(&report)?,
        OutputFormat::Markdown => MarkdownFormatter::format(&report),
        OutputFormat::Summary => JsonFormatter::format_summary(&report)?,
    };
    println!("{}", rendered);
    Ok(())
}

// ============================================================================
// Interactive wizard
// ============================================================================

fn run_wizard(config: &EstimatorConfig, rng: &mut dyn RngCore) -> Result<()> {
    let mut session = WizardSession::new();

    loop {
        let step = session.step();

        if step == WizardStep::Results {
            if let Some(result) = session.result() {
                print_report(config, session.form(), result)?;
            }
            let choice = Select::new()
                .with_prompt("What next?")
                .items(&["Start over", "Quit"])
                .default(1)
                .interact()?;
            if choice == 1 {
                return Ok(());
            }
            session.reset()?;
            continue;
        }

        if let Some(progress) = step.progress_percent() {
            println!("\n== {} ({}%) ==", step, progress);
        }
        prompt_step_fields(&mut session)?;

        let actions: &[&str] = if step == WizardStep::Shopping {
            &["Calculate My Footprint", "Previous"]
        } else {
            &["Next", "Previous"]
        };
        let choice = Select::new()
            .with_prompt("Continue")
            .items(actions)
            .default(0)
            .interact()?;

        match (choice, step) {
            (0, WizardStep::Shopping) => {
                session.calculate_with_rng(rng)?;
            }
            (0, _) => {
                session.next()?;
            }
            _ => {
                session.previous()?;
            }
        }
    }
}

/// Ask for every field on the current step, re-prompting on invalid input
fn prompt_step_fields(session: &mut WizardSession) -> Result<()> {
    let step = session.step();
    let mut index = 0;

    // Visibility is re-evaluated after each edit (vehicle type hides mileage)
    while let Some(field) = FormField::visible_on(step, session.form()).get(index).copied() {
        let current = field.current_value(session.form());
        let choices = field.choices();

        let raw = if choices.is_empty() {
            Input::<String>::new()
                .with_prompt(field.label())
                .default(current)
                .interact_text()?
        } else {
            let selected = choices.iter().position(|c| *c == current).unwrap_or(0);
            let idx = Select::new()
                .with_prompt(field.label())
                .items(&choices)
                .default(selected)
                .interact()?;
            choices[idx].to_string()
        };

        match field.parse(&raw) {
            Ok(edit) => match session.edit(edit) {
                Ok(()) => index += 1,
                Err(e) => eprintln!("  {}", e),
            },
            Err(e) => eprintln!("  {}", e),
        }
    }

    Ok(())
}
