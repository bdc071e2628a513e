//! ftsq CLI
//!
//! Command-line interface for the search query formatter.

use anyhow::{Context, bail};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use ftsq_ast::FieldList;
use ftsq_formatter::{AppConfig, Formatter, Paging, SearchQueryBuilder};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default)]
struct Options {
    query: String,
    fields: Option<String>,
    config: Option<PathBuf>,
    json: bool,
    paging: Paging,
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            query: matches.get_one::<String>("query").cloned().unwrap_or_default(),
            fields: matches.get_one::<String>("fields").cloned(),
            config: matches.get_one::<PathBuf>("config").cloned(),
            json: matches.get_flag("json"),
            paging: Paging::new(
                matches.get_one::<u32>("max-items").copied().unwrap_or_default(),
                matches.get_one::<u32>("skip-count").copied().unwrap_or_default(),
            ),
        }
    }
}

fn cli() -> Command {
    Command::new("ftsq")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Format free text into a full-text search query")
        .arg(
            Arg::new("query")
                .value_name("QUERY")
                .help("Search text as typed by the user")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("fields")
                .short('f')
                .long("fields")
                .value_name("LIST")
                .help("Comma-separated fields to search, overrides the config file")
                .num_args(1),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Application config JSON with a search.aca:fields entry")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the full search request as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-items")
                .long("max-items")
                .value_name("N")
                .help("Page size for --json")
                .value_parser(value_parser!(u32))
                .default_value("25"),
        )
        .arg(
            Arg::new("skip-count")
                .long("skip-count")
                .value_name("N")
                .help("Results to skip for --json")
                .value_parser(value_parser!(u32))
                .default_value("0"),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = Options::from_matches(&cli().get_matches());

    match execute(&options) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn resolve_fields(options: &Options) -> Result<FieldList, anyhow::Error> {
    if let Some(list) = &options.fields {
        return Ok(FieldList::parse_list(list));
    }
    match &options.config {
        Some(path) => Ok(AppConfig::load(path)?.search_fields()),
        None => Ok(FieldList::default()),
    }
}

fn execute(options: &Options) -> Result<String, anyhow::Error> {
    let formatter = Formatter::new(resolve_fields(options)?);
    tracing::debug!(fields = ?formatter.fields(), "resolved search fields");

    if !options.json {
        return match formatter.format(Some(&options.query)) {
            Some(query) => Ok(query),
            None => bail!("ftsq: ERR_INVALID_QUERY: nothing to search for"),
        };
    }

    let mut builder = SearchQueryBuilder::new(formatter);
    builder.set_user_query(options.query.as_str());
    let Some(request) = builder.on_pagination_changed(options.paging) else {
        bail!("ftsq: ERR_INVALID_QUERY: nothing to search for");
    };
    serde_json::to_string(request).context("serializing search request")
}
