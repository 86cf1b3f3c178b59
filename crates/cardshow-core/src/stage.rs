use crate::media::PlayerStatus;
use crate::step::GroupId;

/// Everything the sequencer asks of its host page.
///
/// Every request here is best-effort: implementations log failures (denied
/// fullscreen, blocked autoplay) and return normally, so nothing a stage does
/// can alter the sequencer's state.
pub trait Stage {
    fn request_fullscreen(&mut self);
    fn exit_fullscreen(&mut self);

    /// Toggle page chrome for presentation mode: start control, scroll hint
    /// and the presentation body class.
    fn show_presentation_chrome(&mut self, presenting: bool);

    fn set_step_active(&mut self, index: usize, active: bool);

    /// Status of the shared player of `group`, `None` if the group has none.
    fn shared_player(&self, group: GroupId) -> Option<PlayerStatus>;
    fn swap_shared_source(&mut self, group: GroupId, source: &str);
    fn resume_shared(&mut self, group: GroupId);

    /// Rewind the step's own media to the start and play it.
    fn restart_step_media(&mut self, index: usize);

    /// Smoothly center the section that contains the step.
    fn scroll_step_into_view(&mut self, index: usize);
    fn scroll_to_top(&mut self);
}
