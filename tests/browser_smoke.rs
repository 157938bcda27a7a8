#![cfg(target_arch = "wasm32")]

use crypto_dashboard_wasm::domain::chart::ChartTheme;
use crypto_dashboard_wasm::domain::market_data::{PriceSeries, Trend};
use crypto_dashboard_wasm::infrastructure::rendering::SparklineRenderer;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn draws_on_a_mounted_canvas() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document.create_element("canvas").unwrap();
    canvas.set_id("chart-smoke");
    document.body().unwrap().append_child(&canvas).unwrap();

    let renderer = SparklineRenderer::new("chart-smoke".to_string(), 300, 100);
    let series = PriceSeries::new(vec![100.0, 105.0, 102.0, 110.0]);
    renderer.draw(&series, Trend::Rising, ChartTheme::Light).unwrap();

    // an empty series is an explicit no-op, not an error
    renderer.draw(&PriceSeries::default(), Trend::Falling, ChartTheme::Dark).unwrap();
}
