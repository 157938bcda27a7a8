//! The full pipeline against one scripted record: sync, filter
//! options, alert flagging, trend color and sparkline geometry.

use crypto_dashboard_wasm::application::sync_scheduler::{
    Delay, Notice, RenderSink, SyncScheduler, TimerHandle, TimerProvider,
};
use crypto_dashboard_wasm::domain::chart::{
    ChartOptions, SparklineLayout, color_for_trend,
};
use crypto_dashboard_wasm::domain::errors::FetchResult;
use crypto_dashboard_wasm::domain::market_data::{
    AlertDirection, AlertEvaluator, CoinId, CoinRecord, Currency, MarketDataSource, Percent,
    Price, PriceSeries, Trend, Volume,
};
use futures::executor::block_on;
use std::cell::RefCell;
use std::rc::Rc;

fn btc_record() -> CoinRecord {
    CoinRecord {
        id: CoinId::from("btc"),
        name: "Bitcoin".to_string(),
        symbol: "BTC".to_string(),
        image: String::new(),
        current_price: Price::from(110.0),
        market_cap_rank: Some(1),
        price_change_24h: Some(Percent::from(12.3)),
        total_volume: Volume::from(1000.0),
        high_24h: Price::from(112.0),
        low_24h: Price::from(98.0),
        market_cap: Price::from(1_000_000.0),
        ath: Price::from(150.0),
        atl: Price::from(1.0),
        sparkline: PriceSeries::new(vec![100.0, 105.0, 102.0, 110.0]),
    }
}

#[derive(Clone)]
struct OneCoinSource;

impl MarketDataSource for OneCoinSource {
    async fn fetch_market_records(
        &self,
        _page: u32,
        _per_page: u32,
        _currency: Currency,
    ) -> FetchResult<Vec<CoinRecord>> {
        Ok(vec![btc_record()])
    }
}

#[derive(Clone, Default)]
struct CapturingSink {
    records: Rc<RefCell<Vec<CoinRecord>>>,
    options: Rc<RefCell<Vec<String>>>,
}

impl RenderSink for CapturingSink {
    fn render_records(&self, records: &[CoinRecord]) {
        *self.records.borrow_mut() = records.to_vec();
    }

    fn render_filter_options(&self, records: &[CoinRecord]) {
        *self.options.borrow_mut() = records.iter().map(|r| r.id.value().to_string()).collect();
    }

    fn notify(&self, _kind: Notice, _message: &str) {}
}

#[derive(Clone, Default)]
struct ImmediateDelay;

impl Delay for ImmediateDelay {
    async fn sleep_ms(&self, _ms: u32) {}
}

struct NoopHandle;
impl TimerHandle for NoopHandle {}

struct NoTimers;
impl TimerProvider for NoTimers {
    fn start_interval(&self, _period_ms: u32, _tick: Box<dyn FnMut()>) -> Box<dyn TimerHandle> {
        Box::new(NoopHandle)
    }
}

#[test]
fn first_sync_flags_alert_and_lays_out_the_chart() {
    let sink = CapturingSink::default();
    let sched = SyncScheduler::new(
        OneCoinSource,
        sink.clone(),
        ImmediateDelay,
        Box::new(NoTimers),
        60_000,
        3,
    );

    assert!(!sched.has_snapshot());
    assert!(block_on(sched.run_cycle()));

    // snapshot and renders reflect the fetched record
    assert_eq!(sink.options.borrow().as_slice(), ["btc"]);
    let rendered = sink.records.borrow();
    assert_eq!(rendered.len(), 1);
    let record = &rendered[0];

    // threshold 5 -> flagged "exceeds, up"
    let signal = AlertEvaluator::evaluate(record, 5.0);
    assert!(signal.exceeds);
    assert_eq!(signal.direction, AlertDirection::Up);

    // rising trend color, since 110 >= 100
    assert_eq!(record.trend(), Trend::Rising);
    assert_eq!(color_for_trend(record.trend()), "#28a745");

    // 4 markers with strictly increasing x coordinates
    let geometry =
        SparklineLayout::compute(&record.sparkline, 300.0, 100.0, &ChartOptions::default())
            .expect("non-empty series draws");
    assert_eq!(geometry.marker_count(), 4);
    assert!(geometry.points.windows(2).all(|pair| pair[1].x > pair[0].x));
}
