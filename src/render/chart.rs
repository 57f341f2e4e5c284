use super::RenderView;
use crate::chart::ChartConfig;

/// Chart.js radar document, ready to pass to `new Chart(ctx, config)`.
pub fn to_chart_config(view: &RenderView<'_>, pretty: bool) -> Result<String, serde_json::Error> {
    let config = ChartConfig::radar(view.payload, view.options);
    if pretty {
        serde_json::to_string_pretty(&config)
    } else {
        serde_json::to_string(&config)
    }
}
