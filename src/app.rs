use leptos::html::Canvas;
use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{
    application::config::DashboardConfig,
    application::sync_scheduler::{Notice, RenderSink, SyncScheduler},
    domain::{
        chart::{ChartTheme, ValueAnimation},
        errors::ConfigResult,
        logging::{LogComponent, get_logger},
        market_data::{AlertDirection, AlertEvaluator, CoinRecord, FilterKey},
    },
    format::{format_currency, format_percentage},
    global_state::{
        alert_threshold, dark_mode, dashboard_records, displayed_prices, filter_key,
        filter_options, toast, update_interval_secs,
    },
    infrastructure::{
        http::CoinGeckoHttpClient,
        rendering::{PriceAnimator, SparklineRenderer},
        storage::LocalStorageConfigStore,
        timers::{GlooDelay, GlooIntervalProvider},
    },
};

const CHART_WIDTH: u32 = 300;
const CHART_HEIGHT: u32 = 100;
const PRICE_ANIMATION_MS: f64 = 1000.0;
const TOAST_DISMISS_MS: u32 = 5000;

pub type AppScheduler = SyncScheduler<CoinGeckoHttpClient, LeptosRenderSink, GlooDelay>;

thread_local! {
    static SCHEDULER: RefCell<Option<Rc<AppScheduler>>> = const { RefCell::new(None) };
    static CONFIG: RefCell<DashboardConfig> = RefCell::new(DashboardConfig::default());
    static ANIMATOR: PriceAnimator = PriceAnimator::new();
    static NEXT_TOAST_ID: Cell<u64> = const { Cell::new(0) };
}

/// A passive notification shown in the toast corner. A new toast
/// replaces the previous one; each dismisses itself after a few
/// seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub kind: Notice,
    pub message: String,
}

pub fn show_toast(kind: Notice, message: &str) {
    let id = NEXT_TOAST_ID.with(|next| {
        let id = next.get() + 1;
        next.set(id);
        id
    });
    toast().set(Some(ToastMessage { id, kind, message: message.to_string() }));

    gloo_timers::callback::Timeout::new(TOAST_DISMISS_MS, move || {
        if toast().with_untracked(|t| t.as_ref().map(|t| t.id) == Some(id)) {
            toast().set(None);
        }
    })
    .forget();
}

/// 🌉 Bridge from the scheduler's render sink port to Leptos signals.
pub struct LeptosRenderSink;

impl RenderSink for LeptosRenderSink {
    fn render_records(&self, records: &[CoinRecord]) {
        animate_price_updates(records);
        surface_alerts(records);
        dashboard_records().set(records.to_vec());
    }

    fn render_filter_options(&self, records: &[CoinRecord]) {
        filter_options().set(
            records.iter().map(|r| (r.id.value().to_string(), r.name.clone())).collect(),
        );
    }

    fn notify(&self, kind: Notice, message: &str) {
        show_toast(kind, message);
    }
}

/// Kicks off price transitions for every record whose displayed value
/// differs from the incoming one. Unchanged prices are written through
/// directly.
fn animate_price_updates(records: &[CoinRecord]) {
    for record in records {
        let new_price = record.current_price.value();
        let old_price = displayed_prices()
            .with_untracked(|m| m.get(&record.id).copied())
            .unwrap_or(new_price);

        match ValueAnimation::new(old_price, new_price, PRICE_ANIMATION_MS) {
            Some(animation) => {
                let id = record.id.clone();
                let target = record.id.clone();
                ANIMATOR.with(|animator| {
                    animator.animate(id, animation, move |value| {
                        displayed_prices().update(|m| {
                            m.insert(target.clone(), value);
                        });
                    });
                });
            }
            None => {
                let id = record.id.clone();
                displayed_prices().update(|m| {
                    m.insert(id, new_price);
                });
            }
        }
    }
}

/// Toasts records whose 24h change crosses the configured threshold.
fn surface_alerts(records: &[CoinRecord]) {
    let threshold = alert_threshold().get_untracked();
    for record in records {
        let signal = AlertEvaluator::evaluate(record, threshold);
        if !signal.exceeds {
            continue;
        }
        let change = record.price_change_24h.map(|c| c.value()).unwrap_or(0.0);
        let kind = match signal.direction {
            AlertDirection::Up => Notice::Success,
            AlertDirection::Down => Notice::Danger,
        };
        show_toast(
            kind,
            &format!("{} moved {} in the last 24h.", record.name, format_percentage(change)),
        );
    }
}

/// Loads persisted settings, builds the scheduler with its browser
/// collaborators and starts the first sync cycle.
pub fn bootstrap() {
    let store = LocalStorageConfigStore::new();
    let config = DashboardConfig::load(&store);

    alert_threshold().set(config.alert_threshold);
    update_interval_secs().set(config.update_interval_ms / 1000);
    dark_mode().set(config.dark_mode);

    let scheduler = Rc::new(SyncScheduler::new(
        CoinGeckoHttpClient::new(),
        LeptosRenderSink,
        GlooDelay,
        Box::new(GlooIntervalProvider),
        config.update_interval_ms,
        config.retry_budget,
    ));

    CONFIG.with(|c| *c.borrow_mut() = config);
    SCHEDULER.with(|s| *s.borrow_mut() = Some(Rc::clone(&scheduler)));

    get_logger().info(LogComponent::Presentation("Bootstrap"), "🚀 Dashboard sync starting");
    scheduler.start();
}

pub fn with_scheduler<T>(f: impl FnOnce(&Rc<AppScheduler>) -> T) -> Option<T> {
    SCHEDULER.with(|s| s.borrow().as_ref().map(f))
}

pub fn manual_refresh() {
    if with_scheduler(|s| s.refresh()).is_some() {
        show_toast(Notice::Info, "Data refreshed manually.");
    }
}

/// Config boundary for the threshold input. Rejected values leave the
/// stored threshold untouched.
pub fn apply_alert_threshold(value: f64) -> ConfigResult<f64> {
    let store = LocalStorageConfigStore::new();
    let applied = CONFIG.with(|c| c.borrow_mut().store_threshold(&store, value))?;
    alert_threshold().set(applied);
    show_toast(Notice::Info, &format!("Alert threshold set to ±{applied}%"));
    Ok(applied)
}

/// Config boundary for the update-interval input (seconds). On success
/// the periodic timer is atomically re-armed at the new period.
pub fn apply_interval_secs(secs: u64) -> ConfigResult<u64> {
    let store = LocalStorageConfigStore::new();
    let ms = secs.saturating_mul(1000);
    let applied = CONFIG.with(|c| c.borrow_mut().store_interval_ms(&store, ms))?;
    with_scheduler(|s| s.set_interval_ms(applied));
    update_interval_secs().set(applied / 1000);
    show_toast(Notice::Info, &format!("Update interval set to {} seconds.", applied / 1000));
    Ok(applied)
}

pub fn apply_dark_mode(enabled: bool) {
    let store = LocalStorageConfigStore::new();
    CONFIG.with(|c| c.borrow_mut().store_dark_mode(&store, enabled));
    dark_mode().set(enabled);
}

/// 🦀 Root dashboard component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .dashboard-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #f4f6fb;
                color: #1a1a2e;
                min-height: 100vh;
                padding: 20px;
            }

            .dashboard-app.dark-mode {
                background: #16213e;
                color: #f0f0f0;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                padding: 20px;
                border-radius: 15px;
                background: rgba(15, 52, 96, 0.08);
            }

            .dark-mode .header {
                background: rgba(255, 255, 255, 0.06);
            }

            .filters {
                display: flex;
                flex-wrap: wrap;
                align-items: center;
                gap: 16px;
                margin-bottom: 20px;
            }

            .filter-item label {
                font-size: 13px;
                margin-right: 6px;
            }

            .filter-item input, .filter-item select {
                padding: 4px 8px;
                border-radius: 6px;
                border: 1px solid #4a5d73;
            }

            .crypto-cards {
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                gap: 16px;
            }

            .crypto-card {
                border-radius: 12px;
                padding: 16px;
                background: white;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
            }

            .dark-mode .crypto-card {
                background: #0f3460;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
            }

            .crypto-card.alert-positive { border: 2px solid #28a745; }
            .crypto-card.alert-negative { border: 2px solid #dc3545; }

            .card-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
            }

            .card-header img { vertical-align: middle; margin-right: 6px; }

            .rank { font-size: 12px; color: #888; }

            .price { font-size: 24px; font-weight: 700; }

            .change-24h.positive { color: #28a745; }
            .change-24h.negative { color: #dc3545; }

            .volume-info { font-size: 13px; margin: 6px 0; }

            .card-extra-info p { font-size: 12px; margin: 2px 0; }

            .empty-note { font-style: italic; }

            .alert-toast {
                position: fixed;
                top: 20px;
                right: 20px;
                padding: 15px 25px;
                border-radius: 12px;
                color: white;
                font-weight: 600;
                z-index: 9999;
                box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
                max-width: 90%;
            }

            .alert-toast.alert-error, .alert-toast.alert-danger { background: rgba(255, 71, 87, 0.95); }
            .alert-toast.alert-success { background: rgba(0, 184, 148, 0.95); }
            .alert-toast.alert-info { background: rgba(33, 150, 243, 0.95); }

            .refresh-button {
                padding: 6px 14px;
                border: none;
                border-radius: 8px;
                background: #0f3460;
                color: white;
                cursor: pointer;
            }

            .refresh-button:hover { background: #1a4a80; }
            "#}
        </style>
        <div class=move || {
            if dark_mode().get() { "dashboard-app dark-mode" } else { "dashboard-app" }
        }>
            <Header/>
            <FilterBar/>
            <CardsGrid/>
            <ToastHost/>
        </div>
    }
}

/// 📊 Header with live record count
#[component]
fn Header() -> impl IntoView {
    view! {
        <div class="header">
            <h1>"📈 Crypto Market Dashboard"</h1>
            <p>
                {move || dashboard_records().with(|r| r.len())}
                " coins tracked • auto-refresh every "
                {move || update_interval_secs().get()}
                "s"
            </p>
        </div>
    }
}

/// Filter select, alert threshold, update interval, refresh and theme
/// controls.
#[component]
fn FilterBar() -> impl IntoView {
    let on_filter_change = move |ev: ev::Event| {
        let key = event_target_value(&ev);
        filter_key().set(key.clone());
        with_scheduler(|s| s.set_filter(FilterKey::parse(&key)));
    };

    let on_threshold_change = move |ev: ev::Event| {
        match event_target_value(&ev).parse::<f64>() {
            Ok(value) => {
                if apply_alert_threshold(value).is_err() {
                    show_toast(
                        Notice::Error,
                        "Invalid alert threshold. It must be a positive number.",
                    );
                }
            }
            Err(_) => {
                show_toast(Notice::Error, "Invalid alert threshold. It must be a positive number.")
            }
        }
    };

    let on_interval_change = move |ev: ev::Event| {
        match event_target_value(&ev).parse::<u64>() {
            Ok(secs) => {
                if apply_interval_secs(secs).is_err() {
                    show_toast(
                        Notice::Error,
                        "Invalid update interval. It must be at least 10 seconds.",
                    );
                }
            }
            Err(_) => {
                show_toast(Notice::Error, "Invalid update interval. It must be at least 10 seconds.")
            }
        }
    };

    view! {
        <div class="filters">
            <div class="filter-item">
                <label for="crypto-filter">"Filter by coin:"</label>
                <select
                    id="crypto-filter"
                    on:change=on_filter_change
                    prop:value=move || filter_key().get()
                >
                    <option value="all">"All"</option>
                    <For
                        each=move || filter_options().get()
                        key=|(id, _)| id.clone()
                        children=move |(id, name)| {
                            view! { <option value=id.clone()>{name}</option> }
                        }
                    />
                </select>
            </div>
            <div class="filter-item">
                <label for="alert-threshold">"Alert threshold (%):"</label>
                <input
                    type="number"
                    id="alert-threshold"
                    min="0.1"
                    step="0.1"
                    prop:value=move || alert_threshold().get().to_string()
                    on:change=on_threshold_change
                />
            </div>
            <div class="filter-item">
                <label for="update-interval">"Update interval (s):"</label>
                <input
                    type="number"
                    id="update-interval"
                    min="10"
                    step="10"
                    prop:value=move || update_interval_secs().get().to_string()
                    on:change=on_interval_change
                />
            </div>
            <button class="refresh-button" id="refresh-button" on:click=move |_| manual_refresh()>
                "🔄 Refresh"
            </button>
            <label class="filter-item">
                <input
                    type="checkbox"
                    id="checkbox"
                    prop:checked=move || dark_mode().get()
                    on:change=move |ev| apply_dark_mode(event_target_checked(&ev))
                />
                "🌙 Dark mode"
            </label>
        </div>
    }
}

/// Card grid for the filtered snapshot view.
#[component]
fn CardsGrid() -> impl IntoView {
    view! {
        <div class="crypto-cards">
            <Show when=move || dashboard_records().with(|r| r.is_empty())>
                <p class="empty-note">"No cryptocurrencies found."</p>
            </Show>
            <For
                each=move || dashboard_records().get()
                key=|record| record.id.clone()
                children=move |record| view! { <CryptoCard record/> }
            />
        </div>
    }
}

/// One instrument card: identity, animated price, 24h change, volume,
/// sparkline and the extra stats footer.
#[component]
fn CryptoCard(record: CoinRecord) -> impl IntoView {
    let canvas_id = format!("chart-{}", record.id.value());

    let change = record.price_change_24h;
    let change_class = match change {
        Some(c) if !c.is_non_negative() => "change-24h negative",
        _ => "change-24h positive",
    };
    let change_text = change
        .map(|c| format!("{} (24h)", format_percentage(c.value())))
        .unwrap_or_else(|| "n/a (24h)".to_string());

    let alert_record = record.clone();
    let card_class = move || {
        let signal = AlertEvaluator::evaluate(&alert_record, alert_threshold().get());
        if signal.exceeds {
            match signal.direction {
                AlertDirection::Up => "crypto-card alert-positive",
                AlertDirection::Down => "crypto-card alert-negative",
            }
        } else {
            "crypto-card"
        }
    };

    let price_id = record.id.clone();
    let fallback_price = record.current_price.value();
    let displayed_price = move || {
        let value =
            displayed_prices().with(|m| m.get(&price_id).copied()).unwrap_or(fallback_price);
        format_currency(value)
    };

    let canvas_ref = create_node_ref::<Canvas>();
    let series = record.sparkline.clone();
    let trend = record.trend();
    let effect_canvas_id = canvas_id.clone();
    create_effect(move |_| {
        let theme = ChartTheme::from_dark_flag(dark_mode().get());
        if canvas_ref.get().is_some() {
            let renderer =
                SparklineRenderer::new(effect_canvas_id.clone(), CHART_WIDTH, CHART_HEIGHT);
            if let Err(e) = renderer.draw(&series, trend, theme) {
                crate::log_warn!(LogComponent::Presentation("CryptoCard"), "Chart draw failed: {}", e);
            }
        }
    });

    view! {
        <div class=card_class>
            <div class="card-header">
                <h3>
                    <img src=record.image.clone() alt=format!("{} icon", record.name) width="30"/>
                    {record.name.clone()}
                    " ("
                    {record.symbol.clone()}
                    ")"
                </h3>
                <span class="rank">
                    {record.market_cap_rank.map(|r| format!("Rank #{r}")).unwrap_or_default()}
                </span>
            </div>
            <div class="price-info">
                <div class="price">{displayed_price}</div>
                <div class=change_class>{change_text}</div>
            </div>
            <div class="volume-info">
                "24h volume: " {format_currency(record.total_volume.value())}
            </div>
            <div class="chart-container">
                <canvas
                    id=canvas_id
                    node_ref=canvas_ref
                    width=CHART_WIDTH
                    height=CHART_HEIGHT
                ></canvas>
            </div>
            <div class="card-extra-info">
                <p>"Market cap: " {format_currency(record.market_cap.value())}</p>
                <p>"24h high: " {format_currency(record.high_24h.value())}</p>
                <p>"24h low: " {format_currency(record.low_24h.value())}</p>
                <p>"ATH: " {format_currency(record.ath.value())}</p>
                <p>"ATL: " {format_currency(record.atl.value())}</p>
            </div>
        </div>
    }
}

/// Toast corner. Renders the single active toast, if any.
#[component]
fn ToastHost() -> impl IntoView {
    view! {
        {move || {
            toast()
                .with(|t| {
                    t.as_ref()
                        .map(|t| {
                            view! {
                                <div class=format!(
                                    "alert-toast alert-{}",
                                    t.kind,
                                )>{t.message.clone()}</div>
                            }
                        })
                })
        }}
    }
}
