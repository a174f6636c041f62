use unipick_contracts::models::PluginManifestDto;

pub const PLUGIN_TITLE: &str = "Unicode";
pub const PLUGIN_TRIGGER: &str = "u ";
pub const PLUGIN_ICON_KIND: &str = "builtin";
pub const PLUGIN_ICON_VALUE: &str = "i-noto:input-symbols";

pub fn plugin_manifest() -> PluginManifestDto {
    PluginManifestDto {
        title: PLUGIN_TITLE.to_string(),
        trigger: PLUGIN_TRIGGER.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        required_tools: vec!["uni".to_string()],
        disable_host_sort: true,
    }
}

#[cfg(test)]
#[path = "../tests/plugin/manifest_tests.rs"]
mod tests;
