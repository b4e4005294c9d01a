//! CLI entry point for listguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `listguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use listguard_app::{
    AnalysisInput, ExplainOutput, ListingSource, parse_report_json, render_markdown, render_text,
    run_analysis, run_explain, verdict_exit_code, write_report, write_text,
};
use listguard_augment::CancelToken;
use listguard_settings::Overrides;
use listguard_store::{InMemoryStore, JsonPolicyFile, JsonRuleFile, PolicyStore, RuleStore};
use listguard_types::ListingFields;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LISTGUARD_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "listguard",
    version,
    about = "Compliance checker for marketplace listings"
)]
struct Cli {
    /// Path to listguard config TOML (missing file means defaults).
    #[arg(long, global = true, default_value = "listguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (standard|bare).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override the lowest overall tier that exits with code 2.
    #[arg(long, global = true)]
    fail_on: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a listing and write the JSON report.
    Analyze(AnalyzeArgs),

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/listguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a tier or issue kind with remediation guidance.
    Explain {
        /// A tier (e.g. "high") or issue kind (e.g. "policy").
        identifier: String,
    },
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    #[arg(long, conflicts_with_all = ["text", "input"])]
    title: Option<String>,
    #[arg(long, conflicts_with_all = ["text", "input"])]
    description: Option<String>,
    #[arg(long, conflicts_with_all = ["text", "input"])]
    tags: Option<String>,
    #[arg(long, conflicts_with_all = ["text", "input"])]
    category: Option<String>,
    #[arg(long, conflicts_with_all = ["text", "input"])]
    price: Option<String>,

    /// Listing text, analyzed as-is (`Title:`-style labels are recognized).
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    /// Read the listing from a file: `.json` holds listing fields, anything else is text.
    #[arg(long)]
    input: Option<Utf8PathBuf>,

    /// JSON array of prohibited-term rules.
    #[arg(long)]
    rules: Option<Utf8PathBuf>,

    /// JSON array of policy sections.
    #[arg(long)]
    policies: Option<Utf8PathBuf>,

    /// AI augmentation endpoint (overrides `[ai].endpoint`).
    #[arg(long)]
    ai_endpoint: Option<String>,

    /// Skip AI augmentation.
    #[arg(long)]
    no_ai: bool,

    /// Where to write the JSON report.
    #[arg(long, default_value = "artifacts/listguard/report.json")]
    report_out: Utf8PathBuf,

    /// Write a Markdown report alongside the JSON.
    #[arg(long)]
    write_markdown: bool,

    /// Where to write the Markdown report (if enabled).
    #[arg(long, default_value = "artifacts/listguard/comment.md")]
    markdown_out: Utf8PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match &cli.cmd {
        Commands::Analyze(args) => cmd_analyze(&cli, args),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Explain { identifier } => cmd_explain(identifier),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn cmd_analyze(cli: &Cli, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let listing = listing_source(args)?;
        let config_text = read_config(&cli.config)?;

        let rules: Box<dyn RuleStore> = match &args.rules {
            Some(path) => Box::new(JsonRuleFile::new(path)),
            None => Box::new(InMemoryStore::default()),
        };
        let policies: Box<dyn PolicyStore> = match &args.policies {
            Some(path) => Box::new(JsonPolicyFile::new(path)),
            None => Box::new(InMemoryStore::default()),
        };

        let input = AnalysisInput {
            listing,
            config_text: &config_text,
            overrides: Overrides {
                profile: cli.profile.clone(),
                fail_on: cli.fail_on.clone(),
                ai_endpoint: args.ai_endpoint.clone(),
                no_ai: args.no_ai,
            },
            rules: &*rules,
            policies: &*policies,
            augmenter: None,
            cancel: CancelToken::new(),
        };
        let output = run_analysis(input)?;

        write_report(&args.report_out, &output.report).context("write report json")?;
        if args.write_markdown {
            let md = render_markdown(&output.report);
            write_text(&args.markdown_out, &md).context("write markdown")?;
        }
        print!("{}", render_text(&output.report));

        Ok(verdict_exit_code(&output))
    })();

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("listguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn listing_source(args: &AnalyzeArgs) -> anyhow::Result<ListingSource> {
    if let Some(text) = &args.text {
        return Ok(ListingSource::Text(text.clone()));
    }
    if let Some(path) = &args.input {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read listing: {path}"))?;
        if path.extension() == Some("json") {
            let fields: ListingFields = serde_json::from_str(&raw)
                .with_context(|| format!("parse listing fields: {path}"))?;
            return Ok(ListingSource::Fields(fields));
        }
        return Ok(ListingSource::Text(raw));
    }

    let field = |v: &Option<String>| v.clone().unwrap_or_default();
    Ok(ListingSource::Fields(ListingFields {
        title: field(&args.title),
        description: field(&args.description),
        tags: field(&args.tags),
        category: field(&args.category),
        price: field(&args.price),
    }))
}

/// Missing config file is allowed (defaults apply); an unreadable one is not.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    match output {
        Some(out_path) => write_text(out_path, &md).context("write markdown output")?,
        None => print!("{md}"),
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", listguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_tiers,
            available_kinds,
        } => {
            eprint!(
                "{}",
                listguard_app::format_not_found(&identifier, available_tiers, available_kinds)
            );
            std::process::exit(1);
        }
    }
}
