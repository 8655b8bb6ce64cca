//! Command line front end for moddoc.
//!
//! Generate the section with the built-in catalog:
//! ```sh
//! moddoc
//! moddoc generate out.docx --title "3.2 Описание структур данных"
//! ```
//!
//! Use an external catalog and configuration, rejecting blank items:
//! ```sh
//! moddoc generate out.docx --catalog modules.yaml --config report.yaml --strict
//! ```
//!
//! Print the paragraphs of a generated document:
//! ```sh
//! moddoc outline out.docx
//! ```

use clap::{Args, Parser, Subcommand};
use moddoc::config::DEFAULT_OUTPUT;
use moddoc::ooxml::docx::{ParagraphSnapshot, read_paragraphs_from_path};
use moddoc::{Catalog, ReportConfig, ValidationPolicy};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Generate the "description of software modules" report section
#[derive(Parser, Debug)]
#[command(name = "moddoc", version, about)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the report section to a .docx file (the default)
    Generate(GenerateArgs),
    /// Print the paragraphs of a .docx file, code runs in backticks
    Outline(OutlineArgs),
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Catalog YAML file (defaults to the built-in catalog)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Report configuration YAML file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Section header text
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Reject items with neither code nor description
    #[arg(long)]
    strict: bool,
}

#[derive(Args, Debug)]
struct OutlineArgs {
    /// Document to read
    #[arg(value_name = "DOCX")]
    input: PathBuf,

    /// Report configuration naming the code font
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match resolve_command(cli.command) {
        Command::Generate(args) => generate(args),
        Command::Outline(args) => outline(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Running without a subcommand means `generate` with every default.
fn resolve_command(command: Option<Command>) -> Command {
    command.unwrap_or_else(|| Command::Generate(GenerateArgs::default()))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> moddoc::Result<ReportConfig> {
    match path {
        Some(path) => ReportConfig::from_path(path),
        None => Ok(ReportConfig::default()),
    }
}

fn generate(args: GenerateArgs) -> moddoc::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(title) = args.title {
        config.title = title;
    }
    if args.strict {
        config.validation = ValidationPolicy::Strict;
    }

    let catalog = match args.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };

    let output = args.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    moddoc::write_report(&catalog, &config, &output)?;
    println!("Готово: {}", output.display());
    Ok(())
}

fn outline(args: OutlineArgs) -> moddoc::Result<()> {
    let config = load_config(args.config.as_deref())?;
    for para in read_paragraphs_from_path(&args.input)? {
        println!("{}", outline_line(&para, &config.typography.code_font));
    }
    Ok(())
}

fn outline_line(para: &ParagraphSnapshot, code_font: &str) -> String {
    let mut line = String::new();
    for run in &para.runs {
        if run.font.as_deref() == Some(code_font) {
            line.push('`');
            line.push_str(&run.text);
            line.push('`');
        } else {
            line.push_str(&run.text);
        }
    }
    line
}
