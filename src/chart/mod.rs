pub mod options;

use crate::store::RatingState;
use crate::types::{Dimension, Rating};
use serde::Serialize;

pub use options::{chart_options, ChartOptions};

pub const RATING_SERIES_LABEL: &str = "评分";
pub const BASELINE_SERIES_LABEL: &str = "基准线";

const INDIGO: &str = "rgb(99, 102, 241)";
const WHITE: &str = "#fff";

/// Visual settings for one radar series, named the way Chart.js expects them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStyle {
    pub fill: bool,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub border_width: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<[u8; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_background_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_border_color: Option<&'static str>,
    pub point_radius: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u8>,
}

impl SeriesStyle {
    pub fn rating() -> Self {
        Self {
            fill: true,
            background_color: "rgba(99, 102, 241, 0.3)",
            border_color: INDIGO,
            border_width: 2,
            border_dash: None,
            point_background_color: Some(INDIGO),
            point_border_color: Some(WHITE),
            point_hover_background_color: Some(WHITE),
            point_hover_border_color: Some(INDIGO),
            point_radius: 4,
            point_hover_radius: Some(6),
        }
    }

    pub fn baseline() -> Self {
        Self {
            fill: true,
            background_color: "rgba(249, 115, 22, 0.1)",
            border_color: "rgba(249, 115, 22, 0.6)",
            border_width: 1,
            border_dash: Some([5, 5]),
            point_background_color: None,
            point_border_color: None,
            point_hover_background_color: None,
            point_hover_border_color: None,
            point_radius: 0,
            point_hover_radius: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<u8>,
    #[serde(flatten)]
    pub style: SeriesStyle,
}

/// Order-aligned chart data: `labels[i]` names the value at `data[i]` of
/// every dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    labels: Vec<&'static str>,
    datasets: [Dataset; 2],
}

impl ChartPayload {
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    pub fn ratings(&self) -> &Dataset {
        &self.datasets[0]
    }

    pub fn baseline(&self) -> &Dataset {
        &self.datasets[1]
    }
}

/// Projects a snapshot into radar chart data.
///
/// Labels and both series come from one pass over [`Dimension::ALL`], so they
/// cannot drift out of alignment.
pub fn project(state: &RatingState) -> ChartPayload {
    let mut labels = Vec::with_capacity(Dimension::ALL.len());
    let mut ratings = Vec::with_capacity(Dimension::ALL.len());
    let mut baseline = Vec::with_capacity(Dimension::ALL.len());

    for (dimension, rating) in state.iter() {
        labels.push(dimension.label());
        ratings.push(rating.value());
        baseline.push(Rating::BASELINE.value());
    }

    ChartPayload {
        labels,
        datasets: [
            Dataset {
                label: RATING_SERIES_LABEL,
                data: ratings,
                style: SeriesStyle::rating(),
            },
            Dataset {
                label: BASELINE_SERIES_LABEL,
                data: baseline,
                style: SeriesStyle::baseline(),
            },
        ],
    }
}

/// Complete Chart.js document handed to the rendering collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: &'a ChartPayload,
    pub options: &'a ChartOptions,
}

impl<'a> ChartConfig<'a> {
    pub fn radar(data: &'a ChartPayload, options: &'a ChartOptions) -> Self {
        Self {
            kind: "radar",
            data,
            options,
        }
    }
}
