//! Integration tests for sequence files

use super::helpers::fixture;
use synapsis::sequence::{
    check_highlights, hero_sequence, load_sequence, parse_sequence, to_toml, SequenceError,
};
use synapsis::Step;

#[test]
fn short_fixture_loads() {
    let sequence = load_sequence(fixture("short.toml")).unwrap();

    assert_eq!(sequence.len(), 4);
    assert_eq!(sequence.get(0), Some(&Step::type_text("hi there", 100)));
    assert_eq!(sequence.get(3), Some(&Step::reset(50)));
    assert_eq!(sequence.cycle_duration().as_millis(), 350);
    assert!(check_highlights(&sequence).is_empty());
}

#[test]
fn bad_highlight_fixture_reports_step() {
    let sequence = load_sequence(fixture("bad_highlight.toml")).unwrap();
    let violations = check_highlights(&sequence);

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].step_index, 1);
    assert_eq!(violations[0].text_len, 5);
}

#[test]
fn empty_fixture_is_rejected() {
    let err = load_sequence(fixture("empty.toml")).unwrap_err();
    assert!(matches!(err, SequenceError::Empty));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_sequence(fixture("does_not_exist.toml")).unwrap_err();
    assert!(matches!(err, SequenceError::Io { .. }));
}

#[test]
fn exported_hero_reloads_identically() {
    let toml = to_toml(&hero_sequence()).unwrap();
    let reloaded = parse_sequence(&toml, "<export>").unwrap();
    assert_eq!(reloaded.steps(), hero_sequence().steps());
}
