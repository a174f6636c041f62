use super::*;

#[test]
fn defaults_should_match_documented_values() {
    let settings = PluginSettings::default();
    assert_eq!(settings.result_cap, RESULT_CAP_DEFAULT);
    assert_eq!(settings.uni_bin, UNI_BIN_DEFAULT);
}

#[test]
fn normalize_should_clamp_result_cap() {
    let low = PluginSettings {
        result_cap: 0,
        uni_bin: "uni".to_string(),
    }
    .normalize();
    assert_eq!(low.result_cap, RESULT_CAP_MIN);

    let high = PluginSettings {
        result_cap: 10_000,
        uni_bin: "uni".to_string(),
    }
    .normalize();
    assert_eq!(high.result_cap, RESULT_CAP_MAX);
}

#[test]
fn normalize_should_restore_blank_binary_name() {
    let settings = PluginSettings {
        result_cap: 100,
        uni_bin: "   ".to_string(),
    }
    .normalize();
    assert_eq!(settings.uni_bin, UNI_BIN_DEFAULT);
}

#[test]
fn resolve_result_cap_should_parse_and_clamp() {
    assert_eq!(resolve_result_cap(None), RESULT_CAP_DEFAULT);
    assert_eq!(resolve_result_cap(Some("250")), 250);
    assert_eq!(resolve_result_cap(Some(" 42 ")), 42);
    assert_eq!(resolve_result_cap(Some("0")), RESULT_CAP_MIN);
    assert_eq!(resolve_result_cap(Some("99999")), RESULT_CAP_MAX);
}

#[test]
fn resolve_result_cap_should_fall_back_on_garbage() {
    assert_eq!(resolve_result_cap(Some("plenty")), RESULT_CAP_DEFAULT);
    assert_eq!(resolve_result_cap(Some("-5")), RESULT_CAP_DEFAULT);
    assert_eq!(resolve_result_cap(Some("")), RESULT_CAP_DEFAULT);
}

#[test]
fn resolve_uni_bin_should_trim_and_default() {
    assert_eq!(resolve_uni_bin(None), UNI_BIN_DEFAULT);
    assert_eq!(resolve_uni_bin(Some("  /usr/local/bin/uni  ")), "/usr/local/bin/uni");
    assert_eq!(resolve_uni_bin(Some("   ")), UNI_BIN_DEFAULT);
}
