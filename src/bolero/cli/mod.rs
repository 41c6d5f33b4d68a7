//! # CLI Layer
//!
//! This module is **one possible UI client** for the search library. It is the only
//! place that parses arguments, installs the log subscriber and writes to the
//! terminal. Everything it prints comes from a `CmdResult` returned by the API.
//!
//! - `run()`: parse, set up logging and the API, dispatch
//! - `handle_*()`: per-command handlers that call the API and print the result
//! - `print::*`: output formatting

mod print;
mod setup;

use bolero::api::{ConfigAction, PageOverrides, SearchApi, SessionSpec};
use bolero::catalog::{self, EntityKind};
use bolero::config::config_dir;
use bolero::error::Result;
use clap::Parser;
use print::{
    print_catalog, print_choices, print_config, print_messages, print_request,
    print_request_json,
};
use setup::{Cli, Commands, FilterArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    catalog::validate_all()?;
    let api = SearchApi::load(config_dir()?)?;

    match cli.command {
        Commands::Fields { entity } => handle_fields(&api, entity),
        Commands::Choices {
            entity,
            filters,
            blank,
            row,
        } => handle_choices(&api, session_spec(entity, filters, blank), row),
        Commands::List {
            entity,
            filters,
            page,
            limit,
            sort,
            order,
            json,
        } => {
            let overrides = PageOverrides {
                page,
                limit,
                sort,
                order,
            };
            handle_list(&api, session_spec(entity, filters, false), overrides, json)
        }
        Commands::Export {
            entity,
            filters,
            json,
        } => handle_export(&api, session_spec(entity, filters, false), json),
        Commands::Config { key, value } => handle_config(&api, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "bolero=debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn session_spec(entity: EntityKind, filters: FilterArgs, blank: bool) -> SessionSpec {
    SessionSpec {
        entity,
        fixed: filters.fixed,
        rows: filters.fields,
        blank_rows: usize::from(blank),
    }
}

fn handle_fields(api: &SearchApi, entity: EntityKind) -> Result<()> {
    let result = api.fields(entity);
    if let Some(catalog) = result.catalog {
        print_catalog(catalog);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_choices(api: &SearchApi, spec: SessionSpec, row: Option<usize>) -> Result<()> {
    let result = api.choices(&spec, row)?;
    print_choices(&result.choices);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    api: &SearchApi,
    spec: SessionSpec,
    overrides: PageOverrides,
    json: bool,
) -> Result<()> {
    let result = api.list_request(&spec, &overrides)?;
    if let Some(request) = &result.request {
        if json {
            print_request_json(request)?;
            return Ok(());
        }
        print_request(request);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(api: &SearchApi, spec: SessionSpec, json: bool) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let result = api.export_request(&spec, today)?;
    if let Some(request) = &result.request {
        if json {
            print_request_json(request)?;
            return Ok(());
        }
        print_request(request);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &SearchApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
