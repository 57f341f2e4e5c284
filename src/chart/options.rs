use serde::Serialize;
use std::sync::OnceLock;

const GRID_COLOR: &str = "rgba(0, 0, 0, 0.1)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<&'static str>,
}

impl Font {
    fn sized(size: u8) -> Self {
        Self { size, weight: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    pub color: &'static str,
    pub line_width: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub step_size: u8,
    pub font: Font,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointLabels {
    pub font: Font,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialScale {
    pub angle_lines: LineStyle,
    pub grid: LineStyle,
    pub suggested_min: u8,
    pub suggested_max: u8,
    pub ticks: Ticks,
    pub point_labels: PointLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub r: RadialScale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub font: Font,
    pub use_point_style: bool,
    pub point_style: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    pub position: &'static str,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub background_color: &'static str,
    pub title_color: &'static str,
    pub body_color: &'static str,
    pub border_color: &'static str,
    pub border_width: u8,
    pub padding: u8,
    pub title_font: Font,
    pub body_font: Font,
    pub display_colors: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

/// Static radar chart configuration. None of it depends on rating state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub scales: Scales,
    pub plugins: Plugins,
}

impl ChartOptions {
    pub fn radar() -> Self {
        Self {
            scales: Scales {
                r: RadialScale {
                    angle_lines: LineStyle {
                        display: Some(true),
                        color: GRID_COLOR,
                        line_width: 1,
                    },
                    grid: LineStyle {
                        display: None,
                        color: GRID_COLOR,
                        line_width: 1,
                    },
                    suggested_min: 0,
                    suggested_max: 100,
                    ticks: Ticks {
                        step_size: 20,
                        font: Font::sized(14),
                        color: "#666",
                    },
                    point_labels: PointLabels {
                        font: Font {
                            size: 16,
                            weight: Some("600"),
                        },
                        color: "#333",
                    },
                },
            },
            plugins: Plugins {
                legend: Legend {
                    display: true,
                    position: "bottom",
                    labels: LegendLabels {
                        font: Font::sized(14),
                        use_point_style: true,
                        point_style: "circle",
                    },
                },
                tooltip: Tooltip {
                    background_color: "rgba(255, 255, 255, 0.9)",
                    title_color: "#333",
                    body_color: "#666",
                    border_color: "#ddd",
                    border_width: 1,
                    padding: 12,
                    title_font: Font {
                        size: 14,
                        weight: Some("bold"),
                    },
                    body_font: Font::sized(14),
                    display_colors: false,
                },
            },
        }
    }
}

static RADAR_OPTIONS: OnceLock<ChartOptions> = OnceLock::new();

/// Shared options instance, built on first use.
pub fn chart_options() -> &'static ChartOptions {
    RADAR_OPTIONS.get_or_init(ChartOptions::radar)
}
