//! `Scheduler` backed by `setTimeout` via gloo-timers.

use gloo_timers::callback::Timeout;

use demo_core::ports::Scheduler;

/// Fire-and-forget timeouts; there is no cancellation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
