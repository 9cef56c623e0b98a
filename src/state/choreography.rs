//! Loading → success choreography before a native form submission.
//!
//! DESIGN
//! ======
//! The sequence is an explicit state machine (`Idle → Loading → Success →
//! Submitted`). On activation the whole timeline is computed up front and
//! each phase is handed to one injected `Scheduler` at its offset from the
//! click, so nothing nests timers and tests can drive a manual clock.
//!
//! TRADE-OFFS
//! ==========
//! The delays are purely for perceived latency; they wait on nothing. A
//! second click inside the window starts a second sequence and the form may
//! be submitted twice. That is existing page behavior and is kept as is.

#[cfg(test)]
#[path = "choreography_test.rs"]
mod choreography_test;

use std::rc::Rc;

use crate::config::Timing;
use crate::state::screen::Rejection;

/// Phase of one click-to-submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Status modal shown with its loading panel.
    Loading,
    /// Loading panel swapped for the success panel.
    Success,
    /// Form submitted; the page is navigating away.
    Submitted,
}

impl Phase {
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Loading),
            Self::Loading => Some(Self::Success),
            Self::Success => Some(Self::Submitted),
            Self::Submitted => None,
        }
    }

    /// How long this phase lasts before the next one starts.
    fn dwell_ms(self, timing: Timing) -> u32 {
        match self {
            Self::Idle | Self::Submitted => 0,
            Self::Loading => timing.loading_ms,
            Self::Success => timing.success_ms,
        }
    }
}

/// Every phase after `Idle` paired with its offset from activation.
pub fn timeline(timing: Timing) -> Vec<(u32, Phase)> {
    let mut steps = Vec::new();
    let mut at_ms = 0_u32;
    let mut phase = Phase::Idle;
    while let Some(next) = phase.next() {
        at_ms = at_ms.saturating_add(phase.dwell_ms(timing));
        steps.push((at_ms, next));
        phase = next;
    }
    steps
}

/// Runs a task after a delay. The browser implementation uses timeouts.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// The page side of the choreography. Every method is best-effort: a missing
/// element is a silent no-op.
pub trait ActionSurface {
    fn has_status_modal(&self) -> bool;
    fn set_loading_text(&self, message: &str);
    /// Write the pending action into the bulk form's hidden input.
    fn set_pending_action(&self, action: &str);
    fn show_status_modal(&self);
    fn show_success_panel(&self);
    fn submit_form(&self, form_id: &str);
    fn reject(&self, rejection: &Rejection);
}

pub type Validator = Rc<dyn Fn() -> Result<(), Rejection>>;

/// One bound trigger: the form it submits plus its pending action, if any.
#[derive(Clone)]
pub struct Trigger {
    pub form_id: String,
    /// Text copied into the loading label (`data-msg`).
    pub message: Option<String>,
    /// Action token copied into the hidden input (`data-action`).
    pub action: Option<String>,
    pub validate: Option<Validator>,
}

impl Trigger {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self { form_id: form_id.into(), message: None, action: None, validate: None }
    }

    /// Blank values count as absent, like a missing data attribute.
    #[must_use]
    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message.filter(|m| !m.is_empty());
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: Option<String>) -> Self {
        self.action = action.filter(|a| !a.is_empty());
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validate: Validator) -> Self {
        self.validate = Some(validate);
        self
    }
}

/// What an activation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Validation failed; the user was told and nothing else happened.
    Rejected,
    /// No status modal on the page; the form was submitted right away.
    Submitted,
    /// The loading/success sequence was scheduled.
    Choreographed,
}

#[derive(Clone)]
pub struct Choreographer {
    surface: Rc<dyn ActionSurface>,
    scheduler: Rc<dyn Scheduler>,
    timing: Timing,
}

impl Choreographer {
    pub fn new(surface: Rc<dyn ActionSurface>, scheduler: Rc<dyn Scheduler>, timing: Timing) -> Self {
        Self { surface, scheduler, timing }
    }

    /// Handle a click on `trigger`.
    pub fn activate(&self, trigger: &Trigger) -> Activation {
        if let Some(validate) = &trigger.validate
            && let Err(rejection) = validate()
        {
            self.surface.reject(&rejection);
            return Activation::Rejected;
        }

        if !self.surface.has_status_modal() {
            self.surface.submit_form(&trigger.form_id);
            return Activation::Submitted;
        }

        if let Some(message) = &trigger.message {
            self.surface.set_loading_text(message);
        }
        if let Some(action) = &trigger.action {
            self.surface.set_pending_action(action);
        }

        for (at_ms, phase) in timeline(self.timing) {
            if at_ms == 0 {
                enter(self.surface.as_ref(), &trigger.form_id, phase);
                continue;
            }
            let surface = Rc::clone(&self.surface);
            let form_id = trigger.form_id.clone();
            self.scheduler
                .schedule(at_ms, Box::new(move || enter(surface.as_ref(), &form_id, phase)));
        }
        Activation::Choreographed
    }
}

fn enter(surface: &dyn ActionSurface, form_id: &str, phase: Phase) {
    match phase {
        Phase::Idle => {}
        Phase::Loading => surface.show_status_modal(),
        Phase::Success => surface.show_success_panel(),
        Phase::Submitted => surface.submit_form(form_id),
    }
}
