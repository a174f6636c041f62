use crate::{AppError, AppResult, ResultExt};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use unipick_contracts::models::UnicodeEntryDto;

pub const ACTION_COPY_CHAR: &str = "Copy Char";
pub const ACTION_COPY_JSON: &str = "Copy JSON";
pub const ACTION_COPY_HTML: &str = "Copy HTML";
pub const ACTION_COPY_UTF8: &str = "Copy UTF-8 bytes";
pub const ACTION_COPY_ALL: &str = "Copy All";

pub const CLIP_ACTION_LABELS: [&str; 5] = [
    ACTION_COPY_CHAR,
    ACTION_COPY_JSON,
    ACTION_COPY_HTML,
    ACTION_COPY_UTF8,
    ACTION_COPY_ALL,
];

pub fn escape_utf8_bytes(utf8: &str) -> String {
    let mut escaped = String::with_capacity(utf8.len() * 2);
    for byte in utf8.split_whitespace() {
        escaped.push_str("\\x");
        escaped.push_str(byte);
    }
    escaped
}

pub fn pretty_entry_dump(entry: &UnicodeEntryDto) -> AppResult<String> {
    let mut buffer = Vec::with_capacity(256);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    entry
        .serialize(&mut serializer)
        .with_code("entry_dump_serialize_failed", "序列化字符详情失败")
        .map_err(|error| error.with_context("entryName", entry.name.as_str()))?;
    String::from_utf8(buffer).with_code("entry_dump_serialize_failed", "序列化字符详情失败")
}

pub fn entry_action_payload(label: &str, entry: &UnicodeEntryDto) -> AppResult<String> {
    match label {
        ACTION_COPY_CHAR => Ok(entry.r#char.clone()),
        ACTION_COPY_JSON => Ok(entry.json.clone()),
        ACTION_COPY_HTML => Ok(entry.html.clone()),
        ACTION_COPY_UTF8 => Ok(escape_utf8_bytes(entry.utf8.as_str())),
        ACTION_COPY_ALL => pretty_entry_dump(entry),
        _ => Err(unknown_action_error(label)),
    }
}

pub fn aggregate_action_payload(label: &str, entries: &[UnicodeEntryDto]) -> AppResult<String> {
    if !CLIP_ACTION_LABELS.contains(&label) {
        return Err(unknown_action_error(label));
    }

    let mut lines = String::new();
    for entry in entries {
        lines.push_str(aggregate_line(label, entry)?.as_str());
        lines.push('\n');
    }
    Ok(lines)
}

fn aggregate_line(label: &str, entry: &UnicodeEntryDto) -> AppResult<String> {
    match label {
        ACTION_COPY_CHAR => Ok(entry.r#char.clone()),
        ACTION_COPY_JSON => Ok(format!("{} {}", entry.r#char, entry.json)),
        ACTION_COPY_HTML => Ok(format!("{} {}", entry.r#char, entry.html)),
        ACTION_COPY_UTF8 => Ok(format!(
            "{} {}",
            entry.r#char,
            escape_utf8_bytes(entry.utf8.as_str())
        )),
        ACTION_COPY_ALL => pretty_entry_dump(entry),
        _ => Err(unknown_action_error(label)),
    }
}

fn unknown_action_error(label: &str) -> AppError {
    AppError::new("clip_action_unknown", "未知的复制动作").with_context("label", label)
}

pub fn stable_id(prefix: &str, input: &str) -> String {
    let mut hasher = DefaultHasher::new();
    input.hash(&mut hasher);
    format!("{prefix}.{:x}", hasher.finish())
}

#[cfg(test)]
#[path = "../tests/payload/payload_tests.rs"]
mod tests;
