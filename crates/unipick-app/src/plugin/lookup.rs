use anyhow::Context;
use std::process::Command;
use unipick_contracts::models::UnicodeEntryDto;
use unipick_contracts::{AppError, AppResult, ResultExt};

pub const NO_MATCHES_OUTPUT: &str = "uni: no matches\n";
const NO_MATCHES_EXIT_CODE: i32 = 1;
const OUTPUT_CONTEXT_LIMIT: usize = 256;

pub trait UnicodeLookup: Send + Sync {
    fn search(&self, query: &str) -> AppResult<Vec<UnicodeEntryDto>>;
}

#[derive(Debug, Clone)]
pub struct UniCommandLookup {
    uni_bin: String,
}

impl UniCommandLookup {
    pub fn new(uni_bin: impl Into<String>) -> Self {
        Self {
            uni_bin: uni_bin.into(),
        }
    }
}

impl UnicodeLookup for UniCommandLookup {
    fn search(&self, query: &str) -> AppResult<Vec<UnicodeEntryDto>> {
        let output = Command::new(self.uni_bin.as_str())
            .args(["search", "-format=all", "-as=json"])
            .arg(query)
            .output()
            .with_context(|| format!("启动 unicode 查询命令失败: {}", self.uni_bin))
            .with_code("unicode_lookup_spawn_failed", "无法启动 unicode 查询工具")
            .map_err(|error| error.with_context("uniBin", self.uni_bin.as_str()))?;

        let mut combined = String::from_utf8_lossy(output.stdout.as_slice()).into_owned();
        combined.push_str(String::from_utf8_lossy(output.stderr.as_slice()).as_ref());
        interpret_lookup_output(
            output.status.code(),
            output.status.success(),
            combined.as_str(),
        )
    }
}

fn interpret_lookup_output(
    exit_code: Option<i32>,
    success: bool,
    combined_output: &str,
) -> AppResult<Vec<UnicodeEntryDto>> {
    if success {
        return parse_entries(combined_output);
    }

    if exit_code == Some(NO_MATCHES_EXIT_CODE) && combined_output == NO_MATCHES_OUTPUT {
        return Ok(Vec::new());
    }

    let exit_text = exit_code
        .map(|code| code.to_string())
        .unwrap_or_else(|| "signal".to_string());
    tracing::warn!(
        event = "unicode_lookup_failed",
        exit_code = exit_text.as_str(),
        output = truncate_for_context(combined_output).as_str()
    );
    Err(AppError::new("unicode_lookup_failed", "unicode 查询工具执行失败")
        .with_context("exitCode", exit_text)
        .with_context("output", truncate_for_context(combined_output)))
}

fn parse_entries(raw: &str) -> AppResult<Vec<UnicodeEntryDto>> {
    serde_json::from_str::<Vec<UnicodeEntryDto>>(raw)
        .with_code("unicode_output_parse_failed", "解析 unicode 查询结果失败")
        .map_err(|error| error.with_context("output", truncate_for_context(raw)))
}

fn truncate_for_context(value: &str) -> String {
    if value.chars().count() <= OUTPUT_CONTEXT_LIMIT {
        return value.to_string();
    }
    value.chars().take(OUTPUT_CONTEXT_LIMIT).collect()
}

#[cfg(test)]
#[path = "../../tests/plugin/lookup_tests.rs"]
mod tests;
