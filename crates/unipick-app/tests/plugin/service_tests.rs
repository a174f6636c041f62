use super::*;

use crate::plugin::settings::RESULT_CAP_MIN;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use unipick_kernel::payload::{ACTION_COPY_ALL, ACTION_COPY_CHAR};

struct StubLookup {
    entries: Vec<UnicodeEntryDto>,
    calls: AtomicUsize,
}

impl StubLookup {
    fn new(entries: Vec<UnicodeEntryDto>) -> Self {
        Self {
            entries,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl UnicodeLookup for StubLookup {
    fn search(&self, _query: &str) -> AppResult<Vec<UnicodeEntryDto>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.clone())
    }
}

fn entry(char_text: &str, name: &str) -> UnicodeEntryDto {
    UnicodeEntryDto {
        cat: "Sc".to_string(),
        r#char: char_text.to_string(),
        html: format!("&{name};"),
        json: format!("\\u{name}"),
        name: name.to_string(),
        utf8: "e2 82 ac".to_string(),
    }
}

fn numbered_entries(count: usize) -> Vec<UnicodeEntryDto> {
    (0..count)
        .map(|index| entry("€", format!("SIGN {index}").as_str()))
        .collect()
}

fn service_with_cap(result_cap: usize) -> UnicodePluginService {
    UnicodePluginService::new(PluginSettings {
        result_cap,
        uni_bin: "uni".to_string(),
    })
}

#[test]
fn should_skip_lookup_for_blank_query() {
    let lookup = StubLookup::new(vec![entry("€", "EURO SIGN")]);
    let service = service_with_cap(100);

    let items = service.handle(&lookup, "   \t ").expect("handle");
    assert!(items.is_empty());
    assert_eq!(lookup.call_count(), 0);
}

#[test]
fn should_return_empty_for_no_matches() {
    let lookup = StubLookup::new(Vec::new());
    let service = service_with_cap(100);

    let items = service.handle(&lookup, "zzzz").expect("handle");
    assert!(items.is_empty());
    assert_eq!(lookup.call_count(), 1);
}

#[test]
fn should_emit_item_per_entry_plus_aggregate() {
    let lookup = StubLookup::new(vec![
        entry("€", "EURO SIGN"),
        entry("$", "DOLLAR SIGN"),
        entry("¥", "YEN SIGN"),
    ]);
    let service = service_with_cap(100);

    let items = service.handle(&lookup, "sign").expect("handle");
    assert_eq!(items.len(), 4);
    assert_eq!(items[0].text, "€");
    assert_eq!(items[0].subtext, "Sc: EURO SIGN");

    let aggregate = items.last().expect("aggregate item");
    assert_eq!(aggregate.id, AGGREGATE_ITEM_ID);
    assert_eq!(aggregate.text, AGGREGATE_ITEM_TEXT);
    assert_eq!(aggregate.subtext, "3/3 displayed");
}

#[test]
fn action_labels_should_be_identical_on_every_item() {
    let lookup = StubLookup::new(vec![entry("€", "EURO SIGN"), entry("$", "DOLLAR SIGN")]);
    let service = service_with_cap(100);

    let items = service.handle(&lookup, "sign").expect("handle");
    for item in &items {
        let labels: Vec<&str> = item
            .actions
            .iter()
            .map(|action| action.label.as_str())
            .collect();
        assert_eq!(labels, CLIP_ACTION_LABELS.to_vec());
    }
}

#[test]
fn should_truncate_display_but_aggregate_all_matches() {
    let lookup = StubLookup::new(numbered_entries(150));
    let service = service_with_cap(100);

    let items = service.handle(&lookup, "sign").expect("handle");
    assert_eq!(items.len(), 101);

    let aggregate = items.last().expect("aggregate item");
    assert_eq!(aggregate.subtext, "100/150 displayed");

    let char_payload = aggregate
        .actions
        .iter()
        .find(|action| action.label == ACTION_COPY_CHAR)
        .expect("copy char action");
    assert_eq!(char_payload.clipboard_text.lines().count(), 150);
    assert!(char_payload.clipboard_text.ends_with('\n'));
}

#[test]
fn item_ids_should_be_unique_per_query() {
    let lookup = StubLookup::new(numbered_entries(25));
    let service = service_with_cap(100);

    let items = service.handle(&lookup, "sign").expect("handle");
    let ids: HashSet<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids.len(), items.len());
}

#[test]
fn copy_char_payload_should_equal_raw_char() {
    let lookup = StubLookup::new(vec![entry("€", "EURO SIGN")]);
    let service = service_with_cap(100);

    let items = service.handle(&lookup, "euro").expect("handle");
    let copy_char = items[0]
        .actions
        .iter()
        .find(|action| action.label == ACTION_COPY_CHAR)
        .expect("copy char action");
    assert_eq!(copy_char.clipboard_text, "€");
}

#[test]
fn copy_all_payload_should_round_trip_to_entry_fields() {
    let lookup = StubLookup::new(vec![entry("€", "EURO SIGN")]);
    let service = service_with_cap(100);

    let items = service.handle(&lookup, "euro").expect("handle");
    let copy_all = items[0]
        .actions
        .iter()
        .find(|action| action.label == ACTION_COPY_ALL)
        .expect("copy all action");

    let parsed: serde_json::Value =
        serde_json::from_str(copy_all.clipboard_text.as_str()).expect("parse dump");
    assert_eq!(parsed["name"], "EURO SIGN");
    assert_eq!(parsed["char"], "€");
    assert_eq!(parsed["cat"], "Sc");
}

#[test]
fn cap_below_minimum_should_be_clamped_at_construction() {
    let service = service_with_cap(0);
    assert_eq!(service.settings().result_cap, RESULT_CAP_MIN);
}
