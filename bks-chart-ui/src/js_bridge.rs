//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals,
//! and the browser `fetch` used to download the dataset at startup.

use bks_core::error::DashboardError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static GROUPED_BAR_CHART_JS: &str = include_str!("../assets/js/grouped-bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('BKS JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderLineChart(...)` via
/// `function` declarations. They are evaluated at global scope via an
/// indirect `eval()` once D3 is ready, then promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, LINE_CHART_JS, GROUPED_BAR_CHART_JS].join("\n");

    let store_js = format!(
        "window.__bksChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__bksChartsReady || window.__bksChartsPending) { return; }
            window.__bksChartsPending = true;
            var attempts = 0;
            var waitForD3 = setInterval(function() {
                attempts += 1;
                if (attempts > 300) {
                    clearInterval(waitForD3);
                    window.__bksChartsPending = false;
                    console.warn('BKS charts: D3 did not load');
                    return;
                }
                if (typeof d3 !== 'undefined' && window.__bksChartScripts) {
                    clearInterval(waitForD3);
                    (0, eval)(window.__bksChartScripts);
                    delete window.__bksChartScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderGroupedBarChart !== 'undefined') window.renderGroupedBarChart = renderGroupedBarChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__bksChartsReady = true;
                    window.__bksChartsPending = false;
                    console.log('BKS charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Escape a JSON payload for embedding in a single-quoted JS string literal.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Poll interval and attempt cap shared by every wait-for-D3 loop (30 s).
const POLL_INTERVAL_MS: u32 = 100;
const MAX_POLL_ATTEMPTS: u32 = 300;

/// Script that waits for the charts and the container, then calls
/// `window.<render_fn>(container_id, data, config)`.
///
/// A newer render for the same container cancels the older poll, and a poll
/// gives up after `MAX_POLL_ATTEMPTS`.
fn render_script(render_fn: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let escaped_data = escape_for_js(data_json);
    let escaped_config = escape_for_js(config_json);
    format!(
        r#"
        (function() {{
            var polls = window.__bksPolls = window.__bksPolls || {{}};
            if (polls['{container_id}']) {{ clearInterval(polls['{container_id}']); }}
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts += 1;
                if (window.__bksChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    delete polls['{container_id}'];
                    try {{
                        window.{render_fn}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[BKS] {render_fn} error:', e); }}
                }} else if (attempts >= {MAX_POLL_ATTEMPTS}) {{
                    clearInterval(poll);
                    delete polls['{container_id}'];
                    console.warn('[BKS] gave up waiting to render {container_id}');
                }}
            }}, {POLL_INTERVAL_MS});
            polls['{container_id}'] = poll;
        }})();
        "#,
    )
}

fn render_when_ready(render_fn: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_script(render_fn, container_id, data_json, config_json));
}

/// Render the monthly multi-series line chart.
///
/// `data_json` is a list of `{label, series, value}` points.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render the seasonal grouped bar chart.
///
/// `data_json` is a list of `{season, rider_type, rider_count}` rows.
pub fn render_grouped_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderGroupedBarChart", container_id, data_json, config_json);
}

fn js_error(context: &str, value: JsValue) -> DashboardError {
    let detail = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    DashboardError::DataUnavailable(format!("{}: {}", context, detail))
}

/// Fetch a text resource with the browser `fetch` API.
///
/// Non-success status and empty bodies are `DataUnavailable`.
pub async fn fetch_text(url: &str) -> Result<String, DashboardError> {
    let window = web_sys::window()
        .ok_or_else(|| DashboardError::DataUnavailable("no browser window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_error(url, e))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| js_error("unexpected fetch result", e))?;

    if !response.ok() {
        return Err(DashboardError::DataUnavailable(format!(
            "bad response status for {}: {}",
            url,
            response.status()
        )));
    }

    let body_promise = response.text().map_err(|e| js_error(url, e))?;
    let body = JsFuture::from(body_promise)
        .await
        .map_err(|e| js_error(url, e))?
        .as_string()
        .unwrap_or_default();

    if body.trim().is_empty() {
        return Err(DashboardError::DataUnavailable(format!(
            "empty response from {}",
            url
        )));
    }
    log::info!("[BKS] fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
