use crate::manifest::{PLUGIN_ICON_KIND, PLUGIN_ICON_VALUE};
use crate::plugin::lookup::UnicodeLookup;
use crate::plugin::settings::PluginSettings;
use unipick_contracts::AppResult;
use unipick_contracts::models::{ClipActionDto, PaletteItemDto, UnicodeEntryDto};
use unipick_kernel::payload::{
    CLIP_ACTION_LABELS, aggregate_action_payload, entry_action_payload, stable_id,
};

pub const AGGREGATE_ITEM_ID: &str = "uni.all";
pub const AGGREGATE_ITEM_TEXT: &str = "All";

pub struct UnicodePluginService {
    settings: PluginSettings,
}

impl UnicodePluginService {
    pub fn new(settings: PluginSettings) -> Self {
        Self {
            settings: settings.normalize(),
        }
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    pub fn handle(
        &self,
        lookup: &dyn UnicodeLookup,
        query: &str,
    ) -> AppResult<Vec<PaletteItemDto>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            tracing::debug!(event = "unicode_query_skipped_empty");
            return Ok(Vec::new());
        }

        let entries = lookup.search(trimmed)?;
        let total = entries.len();
        if total == 0 {
            tracing::debug!(event = "unicode_query_no_matches", query = trimmed);
            return Ok(Vec::new());
        }

        let shown = total.min(self.settings.result_cap);
        let mut items = Vec::with_capacity(shown + 1);
        for (index, entry) in entries.iter().take(shown).enumerate() {
            items.push(build_entry_item(index, entry)?);
        }
        items.push(build_aggregate_item(entries.as_slice(), shown)?);

        tracing::info!(
            event = "unicode_query_completed",
            query = trimmed,
            total,
            shown
        );
        Ok(items)
    }
}

fn build_entry_item(index: usize, entry: &UnicodeEntryDto) -> AppResult<PaletteItemDto> {
    let mut actions = Vec::with_capacity(CLIP_ACTION_LABELS.len());
    for label in CLIP_ACTION_LABELS {
        actions.push(ClipActionDto {
            label: label.to_string(),
            clipboard_text: entry_action_payload(label, entry)?,
        });
    }

    Ok(PaletteItemDto {
        id: stable_id("uni", format!("{index}:{}", entry.name).as_str()),
        text: entry.r#char.clone(),
        subtext: format!("{}: {}", entry.cat, entry.name),
        icon_kind: PLUGIN_ICON_KIND.to_string(),
        icon_value: PLUGIN_ICON_VALUE.to_string(),
        actions,
    })
}

fn build_aggregate_item(entries: &[UnicodeEntryDto], shown: usize) -> AppResult<PaletteItemDto> {
    let mut actions = Vec::with_capacity(CLIP_ACTION_LABELS.len());
    for label in CLIP_ACTION_LABELS {
        actions.push(ClipActionDto {
            label: label.to_string(),
            clipboard_text: aggregate_action_payload(label, entries)?,
        });
    }

    Ok(PaletteItemDto {
        id: AGGREGATE_ITEM_ID.to_string(),
        text: AGGREGATE_ITEM_TEXT.to_string(),
        subtext: format!("{shown}/{} displayed", entries.len()),
        icon_kind: PLUGIN_ICON_KIND.to_string(),
        icon_value: PLUGIN_ICON_VALUE.to_string(),
        actions,
    })
}

#[cfg(test)]
#[path = "../../tests/plugin/service_tests.rs"]
mod tests;
