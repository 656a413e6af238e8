//! Web assets embedded at compile time.
//!
//! `index.html` lays out the dropdown and the two chart containers. The D3.js
//! renderers in `assets/js/` are served as plain scripts and define
//! `renderBarChart(containerId, figure, onBarClick)` and
//! `renderPieChart(containerId, figure)` as globals; `dashboard.js` wires the
//! page events to the update endpoint.

pub static INDEX_HTML: &str = include_str!("../assets/index.html");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static DASHBOARD_JS: &str = include_str!("../assets/js/dashboard.js");

/// Script file names as referenced from `index.html`.
pub const SCRIPTS: [(&str, &str); 3] = [
    ("bar-chart.js", BAR_CHART_JS),
    ("pie-chart.js", PIE_CHART_JS),
    ("dashboard.js", DASHBOARD_JS),
];

/// Look up an embedded script by file name.
pub fn script(name: &str) -> Option<&'static str> {
    SCRIPTS
        .iter()
        .find(|(file, _)| *file == name)
        .map(|(_, body)| *body)
}
