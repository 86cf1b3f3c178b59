//! Presentation mode: a linear walk over a fixed list of steps.
//!
//! The sequencer owns the cursor, the mode and the active flags; every side
//! effect on the page goes through a [`Stage`]. Transitions are synchronous and
//! never wait on the stage, so a denied fullscreen request or blocked autoplay
//! cannot leave the state machine half-way through a transition.

use crate::media::{plan_shared_playback, PlayerCommand};
use crate::stage::Stage;
use crate::step::Step;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Inactive,
    Presenting,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequencerError {
    #[error("presentation is already running")]
    AlreadyPresenting,
    #[error("presentation is not running")]
    NotPresenting,
    #[error("step {index} is out of range for {len} steps")]
    StepOutOfRange { index: usize, len: usize },
}

/// Outcome of a single [`Sequencer::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Shown(usize),
    /// Advanced past the last step; presentation mode has been left.
    Finished,
    /// Not presenting; nothing happened.
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct Sequencer {
    steps: Vec<Step>,
    cursor: Option<usize>,
    mode: Mode,
}

impl Sequencer {
    /// Build from the page's steps in document order. Incoming active flags
    /// are cleared; the list is fixed from here on.
    pub fn new(steps: Vec<Step>) -> Self {
        let steps = steps
            .into_iter()
            .map(|mut s| {
                s.active = false;
                s
            })
            .collect();
        Self {
            steps,
            cursor: None,
            mode: Mode::Inactive,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the step last revealed by [`advance`](Self::advance); `None`
    /// before the first advance and after exit.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_presenting(&self) -> bool {
        self.mode == Mode::Presenting
    }

    pub fn active_step(&self) -> Option<usize> {
        self.steps.iter().position(Step::is_active)
    }

    pub fn enter<S: Stage>(&mut self, stage: &mut S) -> Result<(), SequencerError> {
        if self.is_presenting() {
            return Err(SequencerError::AlreadyPresenting);
        }
        stage.request_fullscreen();
        self.mode = Mode::Presenting;
        stage.show_presentation_chrome(true);
        self.deactivate_all_except(None, stage);
        self.cursor = None;
        log::info!("[present] enter steps={}", self.steps.len());
        Ok(())
    }

    pub fn advance<S: Stage>(&mut self, stage: &mut S) -> Advance {
        if !self.is_presenting() {
            return Advance::Ignored;
        }
        let next = self.cursor.map_or(0, |c| c + 1);
        if next < self.steps.len() {
            self.cursor = Some(next);
            self.reveal(next, stage);
            Advance::Shown(next)
        } else {
            self.exit(stage);
            Advance::Finished
        }
    }

    /// Activate `index`, bind its media and scroll it into view. Does not move
    /// the cursor.
    pub fn show_step<S: Stage>(
        &mut self,
        index: usize,
        stage: &mut S,
    ) -> Result<(), SequencerError> {
        if !self.is_presenting() {
            return Err(SequencerError::NotPresenting);
        }
        if index >= self.steps.len() {
            return Err(SequencerError::StepOutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        self.reveal(index, stage);
        Ok(())
    }

    pub fn exit<S: Stage>(&mut self, stage: &mut S) {
        stage.exit_fullscreen();
        self.mode = Mode::Inactive;
        stage.show_presentation_chrome(false);
        self.cursor = None;
        self.deactivate_all_except(None, stage);
        stage.scroll_to_top();
        log::info!("[present] exit");
    }

    // index must be in bounds
    fn reveal<S: Stage>(&mut self, index: usize, stage: &mut S) {
        self.deactivate_all_except(Some(index), stage);
        let step = &mut self.steps[index];
        step.active = true;
        stage.set_step_active(index, true);
        log::debug!("[present] step {}", index);

        if let (Some(wanted), Some(group)) = (step.media_ref(), step.group()) {
            if let Some(status) = stage.shared_player(group) {
                match plan_shared_playback(wanted, &status) {
                    Some(PlayerCommand::Swap(src)) => {
                        log::debug!("[media] group {} -> {}", group.0, src);
                        stage.swap_shared_source(group, &src);
                    }
                    Some(PlayerCommand::Resume) => stage.resume_shared(group),
                    None => {}
                }
            }
        }
        if step.owns_media() {
            stage.restart_step_media(index);
        }
        stage.scroll_step_into_view(index);
    }

    fn deactivate_all_except<S: Stage>(&mut self, keep: Option<usize>, stage: &mut S) {
        for (i, step) in self.steps.iter_mut().enumerate() {
            if Some(i) != keep {
                step.active = false;
                stage.set_step_active(i, false);
            }
        }
    }
}
