use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{
    CoinRecord, Currency, FilterKey, MarketDataSource, MarketSnapshot,
};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use strum::Display as StrumDisplay;

/// Fixed backoff between retry attempts inside one cycle. Deliberately
/// constant rather than exponential.
pub const RETRY_DELAY_MS: u32 = 2000;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Scheduler cycle states. A cycle is one fetch attempt sequence,
/// started by the periodic timer, the initial load or a manual refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Idle,
    Fetching,
    Succeeded,
    Failed,
}

/// Severity of a passive user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum Notice {
    #[strum(serialize = "info")]
    Info,
    #[strum(serialize = "success")]
    Success,
    #[strum(serialize = "danger")]
    Danger,
    #[strum(serialize = "error")]
    Error,
}

/// Outbound port for everything the scheduler pushes at the UI.
/// Callbacks are synchronous, side-effecting and safe to call
/// repeatedly with a full replacement set.
pub trait RenderSink {
    fn render_records(&self, records: &[CoinRecord]);
    fn render_filter_options(&self, records: &[CoinRecord]);
    fn notify(&self, kind: Notice, message: &str);
}

/// Outbound port for non-blocking waits. The browser impl suspends on a
/// gloo timeout; tests resolve immediately and record the request.
#[allow(async_fn_in_trait)]
pub trait Delay {
    async fn sleep_ms(&self, ms: u32);
}

/// An armed interval timer. Dropping the handle cancels the timer,
/// which is what makes cancel-then-restart atomic: the old handle is
/// dropped before a replacement is created.
pub trait TimerHandle {}

/// Outbound port for interval timers.
pub trait TimerProvider {
    fn start_interval(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Box<dyn TimerHandle>;
}

/// Orchestrates periodic fetch-and-render cycles with bounded
/// fixed-delay retry. Owns its timer handle and the current snapshot;
/// collaborators (data source, render sink, delay, timers) are injected
/// at construction.
pub struct SyncScheduler<S, R, D> {
    source: S,
    sink: R,
    delay: D,
    timers: Box<dyn TimerProvider>,
    snapshot: RefCell<Option<MarketSnapshot>>,
    state: Cell<CycleState>,
    interval_ms: Cell<u64>,
    retry_budget: Cell<u32>,
    currency: Cell<Currency>,
    periodic: RefCell<Option<Box<dyn TimerHandle>>>,
    periodic_in_flight: Cell<bool>,
}

impl<S, R, D> SyncScheduler<S, R, D>
where
    S: MarketDataSource,
    R: RenderSink,
    D: Delay,
{
    pub fn new(
        source: S,
        sink: R,
        delay: D,
        timers: Box<dyn TimerProvider>,
        interval_ms: u64,
        retry_budget: u32,
    ) -> Self {
        Self {
            source,
            sink,
            delay,
            timers,
            snapshot: RefCell::new(None),
            state: Cell::new(CycleState::Idle),
            interval_ms: Cell::new(interval_ms),
            retry_budget: Cell::new(retry_budget),
            currency: Cell::new(Currency::Usd),
            periodic: RefCell::new(None),
            periodic_in_flight: Cell::new(false),
        }
    }

    pub fn state(&self) -> CycleState {
        self.state.get()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms.get()
    }

    pub fn retry_budget(&self) -> u32 {
        self.retry_budget.get()
    }

    pub fn set_retry_budget(&self, budget: u32) {
        self.retry_budget.set(budget);
    }

    pub fn set_currency(&self, currency: Currency) {
        self.currency.set(currency);
    }

    pub fn snapshot(&self) -> Option<MarketSnapshot> {
        self.snapshot.borrow().clone()
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.borrow().is_some()
    }

    /// Runs one full cycle: initial attempt plus retries up to the
    /// configured budget, with a fixed delay between attempts. Empty
    /// results and fetch errors fail an attempt the same way. Exhausted
    /// retries leave the previous snapshot in place and return false.
    pub async fn run_cycle(&self) -> bool {
        let attempts = self.retry_budget.get().max(1);

        for attempt in 1..=attempts {
            self.state.set(CycleState::Fetching);
            crate::log_debug!(
                LogComponent::Application("SyncScheduler"),
                "📡 Fetch attempt {}/{}",
                attempt,
                attempts
            );

            match self
                .source
                .fetch_market_records(DEFAULT_PAGE, DEFAULT_PER_PAGE, self.currency.get())
                .await
            {
                Ok(records) if !records.is_empty() => {
                    get_logger().info(
                        LogComponent::Application("SyncScheduler"),
                        &format!("✅ Cycle succeeded with {} records", records.len()),
                    );
                    self.state.set(CycleState::Succeeded);
                    self.publish_snapshot(records);
                    self.state.set(CycleState::Idle);
                    return true;
                }
                Ok(_) => {
                    get_logger().warn(
                        LogComponent::Application("SyncScheduler"),
                        "Data source returned an empty record set",
                    );
                }
                Err(e) => {
                    get_logger().error(
                        LogComponent::Application("SyncScheduler"),
                        &format!("❌ Fetch failed: {}", e),
                    );
                }
            }

            self.state.set(CycleState::Failed);
            self.sink.notify(
                Notice::Error,
                "⚠️ Failed to load market data. The upstream API may be congested; retrying shortly.",
            );

            if attempt < attempts {
                self.delay.sleep_ms(RETRY_DELAY_MS).await;
            }
        }

        get_logger().warn(
            LogComponent::Application("SyncScheduler"),
            &format!("Retries exhausted after {} attempts, keeping previous snapshot", attempts),
        );
        self.state.set(CycleState::Idle);
        false
    }

    /// Replaces the snapshot wholesale, preserving the active filter,
    /// then triggers the dependent renders. The snapshot write happens
    /// before any render callback runs, so renders never observe a
    /// partially-updated collection.
    fn publish_snapshot(&self, records: Vec<CoinRecord>) {
        let filter =
            self.snapshot.borrow().as_ref().map(|s| s.filter().clone()).unwrap_or_default();
        let snapshot = MarketSnapshot::new(records, filter);
        let all = snapshot.records().to_vec();
        let filtered = snapshot.filtered();

        *self.snapshot.borrow_mut() = Some(snapshot);

        self.sink.render_filter_options(&all);
        self.sink.render_records(&filtered);
    }

    /// Applies a new filter to the current snapshot and re-renders the
    /// cards. A no-op until the first successful sync.
    pub fn set_filter(&self, filter: FilterKey) {
        let filtered = {
            let mut guard = self.snapshot.borrow_mut();
            match guard.as_mut() {
                Some(snapshot) => {
                    snapshot.set_filter(filter);
                    Some(snapshot.filtered())
                }
                None => None,
            }
        };
        if let Some(filtered) = filtered {
            self.sink.render_records(&filtered);
        }
    }
}

impl<S, R, D> SyncScheduler<S, R, D>
where
    S: MarketDataSource + 'static,
    R: RenderSink + 'static,
    D: Delay + 'static,
{
    /// Arms the periodic timer and kicks off the initial load.
    pub fn start(self: &Rc<Self>) {
        self.arm_periodic();
        self.refresh();
    }

    /// Manual refresh: one immediate cycle, independent of the periodic
    /// timer's own schedule.
    pub fn refresh(self: &Rc<Self>) {
        let scheduler = Rc::clone(self);
        spawn(async move {
            scheduler.run_cycle().await;
        });
    }

    /// Reconfigures the polling interval. The previous timer handle is
    /// dropped (cancelling it) before the new one is armed, so at most
    /// one periodic timer is ever active.
    pub fn set_interval_ms(self: &Rc<Self>, interval_ms: u64) {
        self.interval_ms.set(interval_ms);
        self.arm_periodic();
        get_logger().info(
            LogComponent::Application("SyncScheduler"),
            &format!("⏱️ Periodic sync rescheduled every {}ms", interval_ms),
        );
    }

    /// Disarms the periodic timer. In-flight cycles still finish.
    pub fn stop(&self) {
        self.periodic.borrow_mut().take();
    }

    fn arm_periodic(self: &Rc<Self>) {
        self.periodic.borrow_mut().take();
        let weak = Rc::downgrade(self);
        let handle = self.timers.start_interval(
            self.interval_ms.get() as u32,
            Box::new(move || {
                if let Some(scheduler) = weak.upgrade() {
                    scheduler.on_periodic_tick();
                }
            }),
        );
        *self.periodic.borrow_mut() = Some(handle);
    }

    /// Each periodic tick starts a fresh cycle with a fresh retry
    /// budget, unless the previous periodic cycle is still in flight.
    fn on_periodic_tick(self: Rc<Self>) {
        if self.periodic_in_flight.get() {
            crate::log_debug!(
                LogComponent::Application("SyncScheduler"),
                "Previous periodic cycle still in flight, skipping tick"
            );
            return;
        }
        self.periodic_in_flight.set(true);
        let scheduler = Rc::clone(&self);
        spawn(async move {
            scheduler.run_cycle().await;
            scheduler.periodic_in_flight.set(false);
        });
    }
}

/// Cooperative single-threaded spawn: the browser queues the task on
/// the event loop; native test builds just drive it to completion.
fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(fut);
    #[cfg(not(target_arch = "wasm32"))]
    futures::executor::block_on(fut);
}
