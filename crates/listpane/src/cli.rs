//! Command-line front end.
//!
//! ```text
//! listpane [--config FILE] [--data FILE] [--format text|json] <products|leads>
//!          [--search Q] [--filter FIELD=VALUE]... [--range LABEL]
//!          [--page N] [--export DIR] [--options FIELD]
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use listpane_export::DirectoryDownload;
use listpane_seeker::Seekable;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{Config, ViewConfig};
use crate::error::ViewError;
use crate::records::{self, lead_schema, product_schema, sample_leads, sample_products};
use crate::render::{render_page, BorderStyle};
use crate::store::RecordStore;
use crate::view::{ListView, ViewSchema};

#[derive(Debug, Parser)]
#[command(
    name = "listpane",
    version,
    about = "Search, filter, page through and export the product and lead lists"
)]
pub struct Cli {
    /// YAML file with per-view overrides
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON array of rows to use instead of the built-in sample
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Render tables without box-drawing borders
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub view: ViewCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum ViewCommand {
    /// The product catalog
    Products(ViewArgs),
    /// The sales-lead roster
    Leads(ViewArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    /// Case-insensitive text search
    #[arg(long, short)]
    pub search: Option<String>,

    /// Exact-match select, repeatable
    #[arg(long = "filter", short = 'f', value_name = "FIELD=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Range bucket label, e.g. "Under $50"
    #[arg(long, value_name = "LABEL")]
    pub range: Option<String>,

    /// Page to show
    #[arg(long, short, value_name = "N")]
    pub page: Option<usize>,

    /// Write the filtered rows as CSV into DIR
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// List the options of a select instead of rows
    #[arg(long, value_name = "FIELD")]
    pub options: Option<String>,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected FIELD=VALUE, got '{}'", raw)),
    }
}

/// Runs one invocation, writing everything user-facing to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let border = if cli.plain {
        BorderStyle::None
    } else {
        BorderStyle::default()
    };

    match &cli.view {
        ViewCommand::Products(args) => {
            let view = build_view(
                "products",
                cli,
                &config.products,
                product_schema()?,
                sample_products,
            )?;
            run_view(view, args, cli.format, border, out)
        }
        ViewCommand::Leads(args) => {
            let view = build_view("leads", cli, &config.leads, lead_schema()?, sample_leads)?;
            run_view(view, args, cli.format, border, out)
        }
    }
}

fn build_view<T: DeserializeOwned + Seekable>(
    name: &str,
    cli: &Cli,
    config: &ViewConfig,
    schema: ViewSchema<T>,
    sample: fn() -> Vec<T>,
) -> anyhow::Result<ListView<T>> {
    let rows = match &cli.data {
        Some(path) => records::load_json(path)?,
        None => sample(),
    };
    let schema = config.apply(name, schema)?;
    log::info!("{} view: {} rows", name, rows.len());
    Ok(ListView::new(RecordStore::new(rows), schema))
}

fn run_view<T, W>(
    mut view: ListView<T>,
    args: &ViewArgs,
    format: OutputFormat,
    border: BorderStyle,
    out: &mut W,
) -> anyhow::Result<()>
where
    T: Seekable + Serialize,
    W: Write,
{
    if let Some(query) = &args.search {
        view.search(query);
    }
    for (field, value) in &args.filters {
        view.select(field, value)
            .with_context(|| format!("cannot filter on '{}'", field))?;
    }
    if let Some(label) = &args.range {
        view.select_range(label)
            .with_context(|| format!("cannot select range '{}'", label))?;
    }
    if let Some(page) = args.page {
        view.go_to_page(page);
    }

    if let Some(field) = &args.options {
        return write_options(&view, field, format, out);
    }

    if let Some(dir) = &args.export {
        let mut download = DirectoryDownload::new(dir);
        let export = view
            .export_to(&mut download)
            .with_context(|| format!("export to {} failed", dir.display()))?;
        let path = dir.join(&export.filename);
        let rows = export.rows;
        log::info!("exported {} rows to {}", rows, path.display());
        match format {
            OutputFormat::Text => writeln!(out, "Exported {} rows to {}", rows, path.display())?,
            OutputFormat::Json => {
                let summary = serde_json::json!({ "path": path, "rows": rows });
                serde_json::to_writer_pretty(&mut *out, &summary)?;
                writeln!(out)?;
            }
        }
        return Ok(());
    }

    let page = view.current_page();
    match format {
        OutputFormat::Text => write!(out, "{}", render_page(&page, view.schema().columns(), border))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &page)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_options<T: Seekable, W: Write>(
    view: &ListView<T>,
    field: &str,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let options = view.options(field).map_err(|err| match err {
        ViewError::UnknownFilter { .. } => anyhow::Error::new(err)
            .context(format!("no select named '{}'", field)),
        other => other.into(),
    })?;

    match format {
        OutputFormat::Text => {
            for option in &options {
                if option.label == option.value {
                    writeln!(out, "{}", option.value)?;
                } else {
                    writeln!(out, "{} ({})", option.value, option.label)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &options)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_pairs_parse() {
        assert_eq!(
            parse_filter("status=In Progress"),
            Ok(("status".to_string(), "In Progress".to_string()))
        );
        assert_eq!(
            parse_filter("category="),
            Ok(("category".to_string(), String::new()))
        );
        assert!(parse_filter("status").is_err());
        assert!(parse_filter("=New").is_err());
    }

    #[test]
    fn arguments_parse() {
        let cli = Cli::try_parse_from([
            "listpane",
            "--format",
            "json",
            "leads",
            "--search",
            "john",
            "-f",
            "status=New",
            "--filter",
            "source=Website",
            "--page",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        let ViewCommand::Leads(args) = cli.view else {
            panic!("expected leads");
        };
        assert_eq!(args.search.as_deref(), Some("john"));
        assert_eq!(args.filters.len(), 2);
        assert_eq!(args.page, Some(2));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["listpane", "products", "--plain", "--format", "json"]).unwrap();
        assert!(cli.plain);
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
