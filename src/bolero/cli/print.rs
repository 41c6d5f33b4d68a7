use bolero::api::{CmdMessage, MessageLevel};
use bolero::catalog::{Catalog, FieldDescriptor};
use bolero::config::{SearchConfig, CONFIG_KEYS};
use bolero::request::{ResponseMode, SearchRequest};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_catalog(catalog: &Catalog) {
    println!("{}", format!("Fixed fields ({})", catalog.entity).bold());
    for fixed in catalog.fixed_fields {
        println!("  {}", fixed.name);
    }
    println!();
    println!("{}", "Selectable fields".bold());
    print_fields(catalog.available_fields.iter());
}

pub(super) fn print_choices(choices: &[&FieldDescriptor]) {
    if choices.is_empty() {
        return;
    }
    print_fields(choices.iter().copied());
}

fn print_fields<'a>(fields: impl Iterator<Item = &'a FieldDescriptor> + Clone) {
    let key_width = fields.clone().map(|f| f.key.width()).max().unwrap_or(0);
    for field in fields {
        let padding = key_width.saturating_sub(field.key.width());
        println!(
            "  {}{}  {}",
            field.key.cyan(),
            " ".repeat(padding),
            field.label.dimmed()
        );
    }
}

pub(super) fn print_request(request: &SearchRequest) {
    let mode = match request.response {
        ResponseMode::Json => "json",
        ResponseMode::Binary => "binary",
    };
    println!("{} {}", "GET".bold(), request.url);
    println!("{}", format!("response: {}, timeout: {}s", mode, request.timeout.as_secs()).dimmed());

    let key_width = request.params.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    for (key, value) in request.params.iter() {
        let padding = key_width.saturating_sub(key.width());
        println!("  {}{} = {}", key.cyan(), " ".repeat(padding), value);
    }
}

pub(super) fn print_request_json(request: &SearchRequest) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(request)?);
    Ok(())
}

pub(super) fn print_config(config: &SearchConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}
