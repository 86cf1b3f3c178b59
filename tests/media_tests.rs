use cardshow_core::{plan_shared_playback, PlayerCommand, PlayerStatus};

fn status(source: Option<&str>, paused: bool) -> PlayerStatus {
    PlayerStatus {
        source: source.map(str::to_string),
        paused,
    }
}

#[test]
fn empty_player_gets_the_wanted_source() {
    assert_eq!(
        plan_shared_playback("b.mp4", &status(None, true)),
        Some(PlayerCommand::Swap("b.mp4".into()))
    );
}

#[test]
fn different_source_is_swapped_even_while_playing() {
    assert_eq!(
        plan_shared_playback("c.mp4", &status(Some("b.mp4"), false)),
        Some(PlayerCommand::Swap("c.mp4".into()))
    );
}

#[test]
fn same_source_paused_resumes() {
    assert_eq!(
        plan_shared_playback("b.mp4", &status(Some("b.mp4"), true)),
        Some(PlayerCommand::Resume)
    );
}

#[test]
fn same_source_playing_is_left_alone() {
    assert_eq!(plan_shared_playback("b.mp4", &status(Some("b.mp4"), false)), None);
}

#[test]
fn source_comparison_is_exact() {
    // "b.mp4" and "./b.mp4" are different attribute values
    assert_eq!(
        plan_shared_playback("b.mp4", &status(Some("./b.mp4"), false)),
        Some(PlayerCommand::Swap("b.mp4".into()))
    );
}
