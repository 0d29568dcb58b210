//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js prediction chart lives in `assets/js/prediction-chart.js` and is
//! loaded at runtime. It is evaluated as a global script (no ES modules) and
//! exposed via `window.*`. This module provides safe Rust wrappers that
//! serialize data and call those globals.

// Embed the D3 chart JS at compile time
static PREDICTION_CHART_JS: &str = include_str!("../assets/js/prediction-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Folio JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The chart JS defines `renderPredictionChart(...)` and friends via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via a separate `eval()` call once D3 is ready,
/// and then explicitly promote each function to `window.*`.
pub fn init_charts() {
    // Store the script on window so the polling callback can eval it
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__folioChartScripts = {};",
        serde_json::to_string(PREDICTION_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__folioChartScripts);
                    delete window.__folioChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderPredictionChart !== 'undefined') window.renderPredictionChart = renderPredictionChart;
                    if (typeof destroyPredictionChart !== 'undefined') window.destroyPredictionChart = destroyPredictionChart;
                    window.__folioChartsReady = true;
                    console.log('Folio charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the predicted-vs-actual chart for one project.
///
/// Uses a polling loop to wait for D3.js to load, the chart script to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_prediction_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__folioChartsReady &&
                    typeof window.renderPredictionChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderPredictionChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[Folio] renderPredictionChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
