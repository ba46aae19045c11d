use super::*;
use std::path::PathBuf;

fn t(name: &str) -> Track {
    Track {
        path: PathBuf::from(format!("/music/{name}.mp3")),
        title: name.into(),
        artist: "Artist".into(),
        album: "Album".into(),
        duration_secs: 180,
    }
}

fn abc(mode: RepeatMode) -> Sequencer {
    let mut seq = Sequencer::new();
    seq.add(t("A"));
    seq.add(t("B"));
    seq.add(t("C"));
    seq.set_repeat_mode(mode);
    seq
}

fn with_tracks(n: usize) -> Sequencer {
    let mut seq = Sequencer::new();
    for i in 0..n {
        seq.add(t(&format!("T{i}")));
    }
    seq
}

fn assert_permutation(seq: &Sequencer) {
    let mut sorted = seq.playback_order().to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..seq.len()).collect::<Vec<_>>());
}

#[test]
fn new_sequencer_is_empty() {
    let seq = Sequencer::new();
    assert!(seq.is_empty());
    assert_eq!(seq.len(), 0);
    assert_eq!(seq.cursor(), None);
    assert_eq!(seq.current_index(), None);
    assert_eq!(seq.repeat_mode(), RepeatMode::Off);
    assert!(!seq.is_shuffled());
}

#[test]
fn first_add_places_cursor_on_it() {
    let mut seq = Sequencer::new();
    seq.add(t("A"));
    assert_eq!(seq.cursor(), Some(0));
    assert_eq!(seq.current().title, "A");
}

#[test]
fn at_uses_storage_index_and_defaults_when_out_of_range() {
    let mut seq = abc(RepeatMode::Off);
    seq.shuffle(7);
    assert_eq!(seq.at(0).title, "A");
    assert_eq!(seq.at(2).title, "C");
    assert_eq!(seq.at(3), Track::default());
}

#[test]
fn next_with_repeat_off_freezes_at_end() {
    let mut seq = abc(RepeatMode::Off);
    assert_eq!(seq.current().title, "A");
    assert_eq!(seq.next().title, "B");
    assert_eq!(seq.next().title, "C");
    assert_eq!(seq.next().title, "C");
    assert_eq!(seq.next().title, "C");
    assert_eq!(seq.cursor(), Some(2));
    assert!(seq.at_end());
}

#[test]
fn next_with_repeat_all_wraps() {
    let mut seq = abc(RepeatMode::All);
    seq.next();
    assert_eq!(seq.next().title, "C");
    assert_eq!(seq.next().title, "A");
}

#[test]
fn repeat_all_full_cycle_returns_to_start_from_any_cursor() {
    for start in 0..5 {
        let mut seq = with_tracks(5);
        seq.set_repeat_mode(RepeatMode::All);
        seq.shuffle(99);
        for _ in 0..start {
            seq.next();
        }
        let original = seq.current();
        let mut last = Track::default();
        for _ in 0..seq.playback_order().len() {
            last = seq.next();
        }
        assert_eq!(last, original);
    }
}

#[test]
fn repeat_one_holds_position() {
    let mut seq = abc(RepeatMode::Off);
    seq.next();
    seq.set_repeat_mode(RepeatMode::One);
    for _ in 0..4 {
        assert_eq!(seq.next().title, "B");
        assert_eq!(seq.prev().title, "B");
    }
    assert_eq!(seq.cursor(), Some(1));
}

#[test]
fn prev_clamps_at_start_unless_repeat_all() {
    let mut off = abc(RepeatMode::Off);
    assert_eq!(off.prev().title, "A");
    assert_eq!(off.cursor(), Some(0));

    let mut all = abc(RepeatMode::All);
    assert_eq!(all.prev().title, "C");
    assert_eq!(all.prev().title, "B");
}

#[test]
fn navigation_on_empty_returns_default_track() {
    let mut seq = Sequencer::new();
    assert_eq!(seq.next(), Track::default());
    assert_eq!(seq.prev(), Track::default());
    assert_eq!(seq.current(), Track::default());
    seq.set_repeat_mode(RepeatMode::One);
    assert_eq!(seq.next(), Track::default());
}

#[test]
fn shuffle_is_deterministic_for_a_seed() {
    let mut a = with_tracks(20);
    let mut b = with_tracks(20);
    a.shuffle(42);
    b.shuffle(42);
    assert_eq!(a.playback_order(), b.playback_order());

    let first = a.playback_order().to_vec();
    a.shuffle(42);
    assert_eq!(a.playback_order(), first.as_slice());
    assert!(a.is_shuffled());
}

#[test]
fn shuffle_resets_cursor_to_start_of_new_order() {
    let mut seq = with_tracks(8);
    seq.next();
    seq.next();
    seq.shuffle(3);
    assert_eq!(seq.cursor(), Some(0));
    assert_eq!(seq.current_index(), Some(seq.playback_order()[0]));
}

#[test]
fn disable_shuffle_restores_identity_and_rewinds() {
    let mut seq = with_tracks(6);
    seq.shuffle(5);
    seq.next();
    seq.disable_shuffle();
    assert_eq!(seq.playback_order(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(seq.cursor(), Some(0));
    assert!(!seq.is_shuffled());
}

#[test]
fn add_discards_shuffle_order() {
    let mut seq = with_tracks(6);
    seq.shuffle(11);
    seq.add(t("late"));
    assert_eq!(seq.playback_order(), &[0, 1, 2, 3, 4, 5, 6]);
    assert!(!seq.is_shuffled());
}

#[test]
fn order_is_a_permutation_after_every_mutation() {
    for n in 0..12 {
        let mut seq = with_tracks(n);
        assert_permutation(&seq);
        seq.shuffle(n as u64);
        assert_permutation(&seq);
        seq.add(t("extra"));
        assert_permutation(&seq);
        seq.shuffle(1234);
        seq.remove_at(0);
        assert_permutation(&seq);
        seq.disable_shuffle();
        assert_permutation(&seq);
    }
}

#[test]
fn remove_current_last_track_moves_cursor_to_new_last() {
    let mut seq = abc(RepeatMode::Off);
    seq.next();
    seq.next();
    assert_eq!(seq.current().title, "C");

    seq.remove_at(2);
    assert_eq!(seq.len(), 2);
    assert_eq!(seq.cursor(), Some(1));
    assert_eq!(seq.current().title, "B");
}

#[test]
fn remove_keeps_relative_shuffle_order() {
    let mut seq = with_tracks(6);
    seq.shuffle(21);
    let before: Vec<Track> = seq
        .playback_order()
        .iter()
        .map(|&i| seq.at(i))
        .filter(|tr| tr.title != "T3")
        .collect();

    seq.remove_at(3);
    let after: Vec<Track> = seq.playback_order().iter().map(|&i| seq.at(i)).collect();
    assert_eq!(after, before);
}

#[test]
fn remove_out_of_range_is_noop_and_last_removal_empties() {
    let mut seq = abc(RepeatMode::Off);
    seq.remove_at(10);
    assert_eq!(seq.len(), 3);

    seq.remove_at(0);
    seq.remove_at(0);
    seq.remove_at(0);
    assert!(seq.is_empty());
    assert_eq!(seq.cursor(), None);
    assert_eq!(seq.next(), Track::default());

    seq.add(t("again"));
    assert_eq!(seq.cursor(), Some(0));
    assert_eq!(seq.current().title, "again");
}

#[test]
fn select_moves_cursor_to_storage_index() {
    let mut seq = with_tracks(5);
    seq.shuffle(8);
    seq.select(3);
    assert_eq!(seq.current_index(), Some(3));
    seq.select(99);
    assert_eq!(seq.current_index(), Some(3));
}

#[test]
fn repeat_mode_accessors_leave_cursor_alone() {
    let mut seq = abc(RepeatMode::Off);
    seq.next();
    seq.set_repeat_mode(RepeatMode::All);
    assert_eq!(seq.repeat_mode(), RepeatMode::All);
    assert_eq!(seq.cursor(), Some(1));
    assert_eq!(seq.playback_order(), &[0, 1, 2]);
}

#[test]
fn repeat_mode_cycles_three_states() {
    assert_eq!(RepeatMode::Off.cycle(), RepeatMode::All);
    assert_eq!(RepeatMode::All.cycle(), RepeatMode::One);
    assert_eq!(RepeatMode::One.cycle(), RepeatMode::Off);
}

#[test]
fn sequencer_works_behind_the_trait() {
    fn drive(seq: &mut dyn PlaybackSequence) -> Vec<String> {
        seq.add(t("X"));
        seq.add(t("Y"));
        vec![seq.current().title, seq.next().title, seq.prev().title]
    }

    let mut seq = Sequencer::new();
    assert_eq!(drive(&mut seq), vec!["X", "Y", "X"]);
    assert!(!PlaybackSequence::is_empty(&seq));
}

#[test]
fn track_duration_is_none_when_unknown() {
    let mut track = t("A");
    assert_eq!(track.duration(), Some(std::time::Duration::from_secs(180)));
    track.duration_secs = 0;
    assert_eq!(track.duration(), None);
}
