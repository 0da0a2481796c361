//! Integration tests for driving the player with a manual clock

use std::time::Duration;

use super::helpers::fixture;
use synapsis::player::playback::playback_frames;
use synapsis::player::render::{render_editor, render_markup};
use synapsis::player::{Clock, ManualClock};
use synapsis::sequence::{hero_sequence, load_sequence, HERO_ORIGINAL_TEXT};
use synapsis::{Phase, SequencePlayer};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn fixture_plays_through_every_phase() {
    let sequence = load_sequence(fixture("short.toml")).unwrap();
    let clock = ManualClock::new();
    let mut player = SequencePlayer::new();
    player.start(sequence, clock.now());

    player.poll(clock.now());
    assert_eq!(render_markup(&render_editor(player.state())), "hi there|");

    clock.advance(ms(100));
    player.poll(clock.now());
    assert_eq!(player.state().phase, Phase::Highlighting);
    assert_eq!(render_markup(&render_editor(player.state())), "[hi] there");

    clock.advance(ms(100));
    player.poll(clock.now());
    assert_eq!(render_markup(&render_editor(player.state())), "there|");

    clock.advance(ms(100));
    player.poll(clock.now());
    assert_eq!(player.state().text, "");
    assert_eq!(player.state().phase, Phase::Reset);
}

#[test]
fn hero_text_repeats_every_cycle() {
    let sequence = hero_sequence();
    let cycle = sequence.cycle_duration();
    let clock = ManualClock::new();
    let mut player = SequencePlayer::new();
    player.start(sequence, clock.now());

    player.poll(clock.now());
    let first = player.state().text.clone();
    assert_eq!(first, HERO_ORIGINAL_TEXT);

    for n in 1..=3 {
        clock.set(cycle * n);
        player.poll(clock.now());
        assert_eq!(player.state().text, first);
        assert_eq!(player.state().phase, Phase::Typing);
    }
}

#[test]
fn late_poll_catches_up_without_drift() {
    let sequence = load_sequence(fixture("short.toml")).unwrap();
    let mut player = SequencePlayer::new();
    player.start(sequence, ms(0));

    // One poll far past several deadlines applies every due step.
    assert_eq!(player.poll(ms(320)), 4);
    assert_eq!(player.next_deadline(), Some(ms(350)));
}

#[test]
fn stopped_player_ignores_time() {
    let mut player = SequencePlayer::new();
    player.start(hero_sequence(), ms(0));
    player.poll(ms(0));
    let before = player.state().clone();

    player.stop();
    assert_eq!(player.poll(ms(60_000)), 0);
    assert_eq!(player.state(), &before);
}

#[test]
fn headless_frames_cover_whole_cycles() {
    let sequence = load_sequence(fixture("short.toml")).unwrap();
    let frames = playback_frames(&sequence, 2);

    assert_eq!(frames.len(), 8);
    assert_eq!(frames[4].at, ms(350));
    assert_eq!(frames[4].markup, frames[0].markup);
}
