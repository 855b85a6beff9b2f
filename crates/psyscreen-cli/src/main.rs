use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use psyscreen_audit::events::AuditEvent;
use psyscreen_core::models::evaluation::SubmissionSet;
use psyscreen_instruments::registry::Registry;
use psyscreen_report::context::{build_assessment_block, build_instrument_sections};
use psyscreen_report::render::{render_default_summary, render_summary};
use psyscreen_triage::assess::assess;

mod config;

use config::{LogFormat, OutputFormat, PsyscreenConfig};

#[derive(Parser)]
#[command(name = "psyscreen")]
#[command(about = "Classify psychometric instrument scores and resolve a clinical profile")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a submission set read from a JSON file ("-" for stdin)
    Assess {
        input: PathBuf,
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,
        /// Tera template for summary output
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// List supported instruments and their threshold tables
    Instruments,
    /// Write a default config file
    InitConfig,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    init_tracing(cli.log_format.unwrap_or(config.log_format));

    match cli.command {
        Commands::Assess {
            input,
            output,
            template,
        } => {
            let output = output.unwrap_or(config.output);
            let template = template.or_else(|| config.summary_template.clone());
            run_assess(&config, &input, output, template.as_deref())
        }
        Commands::Instruments => {
            list_instruments();
            Ok(())
        }
        Commands::InitConfig => {
            let path = match cli.config {
                Some(path) => path,
                None => config::config_path()?,
            };
            config::save_config(&PsyscreenConfig::default(), &path)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn run_assess(
    config: &PsyscreenConfig,
    input: &Path,
    output: OutputFormat,
    template: Option<&Path>,
) -> eyre::Result<()> {
    let contents = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", input.display()))?
    };

    let submissions = SubmissionSet::from_json(&contents)?;
    tracing::info!(
        subject_id = %submissions.subject_id,
        submissions = submissions.submissions.len(),
        "assessing submission set"
    );

    let registry = Registry::global();
    let assessment = assess(registry, &submissions);

    AuditEvent::profile_resolved(
        assessment.subject_id,
        assessment.episode_id,
        &assessment.profile,
        config.actor.as_str(),
    )
    .emit();

    let rendered = match output {
        OutputFormat::Json => serde_json::to_string_pretty(&assessment)?,
        OutputFormat::Summary => match template {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    eyre::eyre!("failed to read template {}: {e}", path.display())
                })?;
                render_summary(&path.display().to_string(), &content, &assessment)?
            }
            None => render_default_summary(&assessment)?,
        },
        OutputFormat::Context => format!(
            "{}\n\n{}",
            build_assessment_block(&assessment),
            build_instrument_sections(registry, &assessment)
        ),
    };
    println!("{rendered}");
    Ok(())
}

fn list_instruments() {
    for instrument in Registry::global().iter() {
        let domain = instrument.domain();
        let clamping = if instrument.clamps() { "clamps" } else { "rejects out-of-domain" };
        println!(
            "{:<6} {} [{}–{}, {clamping}]",
            instrument.id().code(),
            instrument.name(),
            domain.min,
            domain.max
        );
        for range in instrument.ranges() {
            println!(
                "       ≤ {:<5} {:<18} {}",
                range.upper_bound,
                range.tier.label(),
                range.description
            );
        }
        if let Some(rule) = instrument.risk_rule() {
            println!("       acute risk at ≥ {}", rule.threshold);
        }
    }
}
