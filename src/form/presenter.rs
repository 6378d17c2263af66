//! Show/restart flow of the whole login panel.
//!
//! The panel's "IsShown" animator flag is owned here. The host tells the
//! presenter once the hide animation has reached its hidden state, since
//! animation playback lives outside this crate.

use crate::animation::DelayedCall;

/// Timing of the intro and restart sequence, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormTimings {
    pub show_delay: f32,
    pub restart_delay: f32,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            show_delay: 1.0,
            restart_delay: 0.5,
        }
    }
}

/// Side effects the host must perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    /// Clear the email and password fields.
    ResetForm,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Intro(DelayedCall),
    Idle,
    WaitingHidden,
    Cooldown(DelayedCall),
}

#[derive(Debug, Clone)]
pub struct FormPresenter {
    timings: FormTimings,
    phase: Phase,
    shown: bool,
}

impl Default for FormPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPresenter {
    pub fn new() -> Self {
        Self::with_config(FormTimings::default())
    }

    pub fn with_config(timings: FormTimings) -> Self {
        Self {
            timings,
            phase: Phase::Intro(DelayedCall::new(timings.show_delay)),
            shown: false,
        }
    }

    /// Value for the panel's "IsShown" flag.
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn is_restarting(&self) -> bool {
        matches!(self.phase, Phase::WaitingHidden | Phase::Cooldown(_))
    }

    /// Start hiding the panel. Ignored while a restart is already running.
    pub fn restart(&mut self) -> bool {
        if self.is_restarting() {
            return false;
        }
        log::debug!("form: restart requested");
        self.shown = false;
        self.phase = Phase::WaitingHidden;
        true
    }

    /// Advance the flow. `hidden` reports whether the panel animator has
    /// reached its hidden state this frame.
    pub fn update(&mut self, dt: f32, hidden: bool) -> Option<FormCommand> {
        match &mut self.phase {
            Phase::Intro(delay) => {
                if delay.tick(dt) {
                    self.shown = true;
                    self.phase = Phase::Idle;
                }
                None
            }
            Phase::Idle => None,
            Phase::WaitingHidden => {
                if hidden {
                    self.phase = Phase::Cooldown(DelayedCall::new(self.timings.restart_delay));
                }
                None
            }
            Phase::Cooldown(delay) => {
                if !delay.tick(dt) {
                    return None;
                }
                log::debug!("form: reset and show");
                self.shown = true;
                self.phase = Phase::Idle;
                Some(FormCommand::ResetForm)
            }
        }
    }
}
