//! Timeout-backed scheduler for the choreography.

use gloo_timers::callback::Timeout;

use crate::state::choreography::Scheduler;

/// Schedules each task with its own `setTimeout`. Tasks are never cancelled.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
