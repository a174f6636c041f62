use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnicodeEntryDto {
    pub cat: String,
    pub r#char: String,
    pub html: String,
    pub json: String,
    pub name: String,
    pub utf8: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipActionDto {
    pub label: String,
    pub clipboard_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteItemDto {
    pub id: String,
    pub text: String,
    pub subtext: String,
    pub icon_kind: String,
    pub icon_value: String,
    pub actions: Vec<ClipActionDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifestDto {
    pub title: String,
    pub trigger: String,
    pub version: String,
    pub required_tools: Vec<String>,
    pub disable_host_sort: bool,
}
