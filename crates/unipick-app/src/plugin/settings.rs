pub const RESULT_CAP_DEFAULT: usize = 100;
pub const RESULT_CAP_MIN: usize = 1;
pub const RESULT_CAP_MAX: usize = 500;
pub const UNI_BIN_DEFAULT: &str = "uni";

const RESULT_CAP_ENV: &str = "UNIPICK_RESULT_CAP";
const UNI_BIN_ENV: &str = "UNIPICK_UNI_BIN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSettings {
    pub result_cap: usize,
    pub uni_bin: String,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            result_cap: RESULT_CAP_DEFAULT,
            uni_bin: UNI_BIN_DEFAULT.to_string(),
        }
    }
}

impl PluginSettings {
    pub fn from_env() -> Self {
        let result_cap_raw = std::env::var(RESULT_CAP_ENV).ok();
        let uni_bin_raw = std::env::var(UNI_BIN_ENV).ok();
        Self {
            result_cap: resolve_result_cap(result_cap_raw.as_deref()),
            uni_bin: resolve_uni_bin(uni_bin_raw.as_deref()),
        }
        .normalize()
    }

    pub fn normalize(mut self) -> Self {
        self.result_cap = self.result_cap.clamp(RESULT_CAP_MIN, RESULT_CAP_MAX);
        if self.uni_bin.trim().is_empty() {
            self.uni_bin = UNI_BIN_DEFAULT.to_string();
        }
        self
    }
}

fn resolve_result_cap(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return RESULT_CAP_DEFAULT;
    };

    match raw.trim().parse::<usize>() {
        Ok(value) => value.clamp(RESULT_CAP_MIN, RESULT_CAP_MAX),
        Err(_) => {
            tracing::warn!(event = "unicode_settings_cap_invalid", value = raw);
            RESULT_CAP_DEFAULT
        }
    }
}

fn resolve_uni_bin(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| UNI_BIN_DEFAULT.to_string())
}

#[cfg(test)]
#[path = "../../tests/plugin/settings_tests.rs"]
mod tests;
