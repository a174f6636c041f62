use crate::host::PluginHost;
use unipick_contracts::models::PaletteItemDto;
use unipick_contracts::{AppError, AppResult};

pub fn execute_clip_action(
    host: &dyn PluginHost,
    item: &PaletteItemDto,
    label: &str,
) -> AppResult<String> {
    let action = item
        .actions
        .iter()
        .find(|action| action.label == label)
        .ok_or_else(|| {
            AppError::new("clip_action_not_found", "结果条目上不存在该复制动作")
                .with_context("itemId", item.id.as_str())
                .with_context("label", label)
        })?;

    host.write_clipboard_text(action.clipboard_text.as_str())?;
    tracing::debug!(
        event = "clip_action_executed",
        item_id = item.id.as_str(),
        label
    );
    Ok(format!("copied:{label}"))
}

#[cfg(test)]
#[path = "../../tests/plugin/actions_tests.rs"]
mod tests;
