//! sparkpmml - translate pipeline expressions into markup expressions

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use serde::Serialize;
use sparkpmml::input::{load_expression, read_expression};
use sparkpmml::pmml::{to_markup, DataType, PmmlExpression};
use sparkpmml::translator::{ExpressionTranslator, TranslatorConfig, DEFAULT_MAX_DEPTH};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markup,
    Json,
}

/// Translate a JSON encoded pipeline expression into a markup expression
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Expression file, read from stdin when omitted
    input: Option<PathBuf>,

    /// Deepest expression tree accepted. JSON input is also limited to 128
    /// nested containers, roughly 60 levels of binary operators
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, conflicts_with = "unbounded")]
    max_depth: usize,

    /// Skip the translator depth check; the JSON nesting limit still applies
    #[arg(long)]
    unbounded: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markup)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    data_type: DataType,
    expression: &'a PmmlExpression,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let expr = match &args.input {
        Some(path) => load_expression(path)?,
        None => read_expression(io::stdin().lock())?,
    };

    let config = if args.unbounded {
        TranslatorConfig::unbounded()
    } else {
        TranslatorConfig::with_max_depth(args.max_depth)
    };
    let translator = ExpressionTranslator::new(config);

    let mapping = translator
        .translate(&expr)
        .with_context(|| format!("Failed to translate expression '{}'", expr))?;
    log::debug!("Translated expression with inferred type {}", mapping.data_type);

    match args.format {
        OutputFormat::Markup => {
            println!("<!-- dataType: {} -->", mapping.data_type);
            print!("{}", to_markup(&mapping.to));
        }
        OutputFormat::Json => {
            let output = JsonOutput {
                data_type: mapping.data_type,
                expression: &mapping.to,
            };
            let json = serde_json::to_string_pretty(&output).context("Failed to encode output")?;
            println!("{}", json);
        }
    }

    Ok(())
}
