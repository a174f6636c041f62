mod clipboard;
mod logging;

use clipboard::SystemClipboardHost;
use unipick_app::manifest::plugin_manifest;
use unipick_app::plugin::{
    PluginSettings, UniCommandLookup, UnicodePluginService, execute_clip_action,
};
use unipick_contracts::models::PaletteItemDto;

const USAGE: &str =
    "usage: unipick [--json] [--manifest] [--limit N] [--copy INDEX LABEL] <query>...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CliArgs {
    query: String,
    as_json: bool,
    print_manifest: bool,
    show_usage: bool,
    result_cap: Option<usize>,
    copy: Option<(usize, String)>,
}

fn parse_args<I>(args: I) -> anyhow::Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut query_parts: Vec<String> = Vec::new();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => parsed.as_json = true,
            "--manifest" => parsed.print_manifest = true,
            "--help" | "-h" => parsed.show_usage = true,
            "--limit" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--limit requires a value\n{USAGE}"))?;
                let cap = value.trim().parse::<usize>().map_err(|_| {
                    anyhow::anyhow!("--limit expects a number, got {value:?}\n{USAGE}")
                })?;
                parsed.result_cap = Some(cap);
            }
            "--copy" => {
                let index_raw = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--copy requires INDEX and LABEL\n{USAGE}"))?;
                let label = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--copy requires INDEX and LABEL\n{USAGE}"))?;
                let index = index_raw.trim().parse::<usize>().map_err(|_| {
                    anyhow::anyhow!("--copy expects a numeric index, got {index_raw:?}\n{USAGE}")
                })?;
                parsed.copy = Some((index, label));
            }
            _ => query_parts.push(arg),
        }
    }

    parsed.query = query_parts.join(" ");
    Ok(parsed)
}

fn render_items(items: &[PaletteItemDto]) {
    if items.is_empty() {
        println!("no results");
        return;
    }

    for (index, item) in items.iter().enumerate() {
        println!("[{index}] {}\t{}", item.text, item.subtext);
    }
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let args = parse_args(std::env::args().skip(1))?;
    if args.show_usage {
        println!("{USAGE}");
        return Ok(());
    }
    if args.print_manifest {
        println!("{}", serde_json::to_string_pretty(&plugin_manifest())?);
        return Ok(());
    }
    if args.query.trim().is_empty() {
        println!("{USAGE}");
        return Ok(());
    }

    let mut settings = PluginSettings::from_env();
    if let Some(result_cap) = args.result_cap {
        settings.result_cap = result_cap;
    }
    let settings = settings.normalize();

    let lookup = UniCommandLookup::new(settings.uni_bin.clone());
    let service = UnicodePluginService::new(settings);
    tracing::debug!(event = "host_cli_query_started", query = args.query.as_str());
    let items = service.handle(&lookup, args.query.as_str())?;

    if args.as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        render_items(items.as_slice());
    }

    if let Some((index, label)) = args.copy {
        let item = items.get(index).ok_or_else(|| {
            anyhow::anyhow!("no item at index {index}, query returned {}", items.len())
        })?;
        let outcome = execute_clip_action(&SystemClipboardHost, item, label.as_str())?;
        println!("{outcome}");
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/cli/args_tests.rs"]
mod tests;
