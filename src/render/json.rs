use super::RenderView;
use crate::chart::ChartConfig;
use crate::store::RatingState;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RatingReport<'a> {
    #[serde(flatten)]
    pub state: &'a RatingState,
    pub average: u8,
    pub chart: ChartConfig<'a>,
    pub generated_at: String,
}

impl<'a> RatingReport<'a> {
    pub fn new(view: &RenderView<'a>) -> Self {
        Self {
            state: view.state,
            average: view.average,
            chart: ChartConfig::radar(view.payload, view.options),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

pub fn to_json(view: &RenderView<'_>, pretty: bool) -> Result<String, serde_json::Error> {
    let report = RatingReport::new(view);
    if pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
}
