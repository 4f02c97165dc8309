//! Tests for warning deduplication.

use kata_common::warning::{has_warned, warn_once};

#[test]
fn test_unreported_message_is_not_recorded() {
    assert!(!has_warned("Test", "never emitted anywhere"));
}

#[test]
fn test_warn_once_records_message() {
    warn_once("Test", "recorded after first call");
    assert!(has_warned("Test", "recorded after first call"));
}

#[test]
fn test_repeated_warning_stays_recorded() {
    warn_once("Test", "repeated");
    warn_once("Test", "repeated");
    assert!(has_warned("Test", "repeated"));
}

#[test]
fn test_component_is_part_of_the_key() {
    warn_once("Selector", "shared text");
    assert!(has_warned("Selector", "shared text"));
    assert!(!has_warned("Json", "shared text"));
}
