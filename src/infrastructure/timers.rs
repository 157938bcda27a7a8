use crate::application::sync_scheduler::{Delay, TimerHandle, TimerProvider};
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;

/// Non-blocking wait on a browser timeout.
#[derive(Clone, Copy, Default)]
pub struct GlooDelay;

impl Delay for GlooDelay {
    async fn sleep_ms(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

/// Interval timers backed by gloo. The wrapped `Interval` clears itself
/// on drop, which gives the scheduler its cancel-then-restart guarantee
/// for free.
#[derive(Clone, Copy, Default)]
pub struct GlooIntervalProvider;

struct GlooIntervalHandle {
    _interval: Interval,
}

impl TimerHandle for GlooIntervalHandle {}

impl TimerProvider for GlooIntervalProvider {
    fn start_interval(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Box<dyn TimerHandle> {
        Box::new(GlooIntervalHandle { _interval: Interval::new(period_ms, move || tick()) })
    }
}
