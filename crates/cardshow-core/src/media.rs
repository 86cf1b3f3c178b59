/// Snapshot of a shared media player as seen right before a step is shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerStatus {
    /// Current source, `None` when the player has never been given one.
    pub source: Option<String>,
    pub paused: bool,
}

/// What the shared player must do for the newly active step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Replace the source, reload and start playback.
    Swap(String),
    /// Same source but paused: resume.
    Resume,
}

/// Decide how a shared player reacts to a step wanting `wanted`.
///
/// Returns `None` when the player already plays the wanted source, which keeps
/// repeated calls for the same step from reloading the media.
pub fn plan_shared_playback(wanted: &str, status: &PlayerStatus) -> Option<PlayerCommand> {
    match status.source.as_deref() {
        Some(current) if current == wanted => status.paused.then_some(PlayerCommand::Resume),
        _ => Some(PlayerCommand::Swap(wanted.to_string())),
    }
}
