pub mod chart;
pub mod json;
pub mod md;

use crate::chart::{ChartOptions, ChartPayload};
use crate::error::Result;
use crate::store::RatingState;
use serde::Deserialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Md,
    Json,
    Chart,
}

/// Everything a renderer needs for one redraw.
#[derive(Debug, Clone, Copy)]
pub struct RenderView<'a> {
    pub state: &'a RatingState,
    pub average: u8,
    pub payload: &'a ChartPayload,
    pub options: &'a ChartOptions,
}

#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub format: OutputFormat,
    pub pretty: bool,
    pub untitled: String,
}

/// The drawing side of a session. Each call redraws from scratch.
pub trait Renderer {
    fn render(&mut self, view: &RenderView<'_>) -> Result<()>;
}

pub fn render(view: &RenderView<'_>, settings: &RenderSettings) -> Result<String> {
    let rendered = match settings.format {
        OutputFormat::Md => md::to_markdown(view, &settings.untitled),
        OutputFormat::Json => json::to_json(view, settings.pretty)?,
        OutputFormat::Chart => chart::to_chart_config(view, settings.pretty)?,
    };
    Ok(rendered)
}

/// Renders into any writer, one document per redraw.
pub struct StreamRenderer<W: Write> {
    settings: RenderSettings,
    out: W,
    frames: usize,
}

impl<W: Write> StreamRenderer<W> {
    pub fn new(settings: RenderSettings, out: W) -> Self {
        Self {
            settings,
            out,
            frames: 0,
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for StreamRenderer<W> {
    fn render(&mut self, view: &RenderView<'_>) -> Result<()> {
        let rendered = render(view, &self.settings)?;
        writeln!(self.out, "{rendered}")?;
        self.out.flush()?;
        self.frames += 1;
        tracing::debug!(frame = self.frames, format = ?self.settings.format, "rendered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{chart_options, project};
    use crate::store::RatingStore;

    fn settings(format: OutputFormat) -> RenderSettings {
        RenderSettings {
            format,
            pretty: false,
            untitled: "歌曲".to_string(),
        }
    }

    #[test]
    fn stream_renderer_writes_one_document_per_frame() {
        let mut store = RatingStore::new();
        let mut renderer = StreamRenderer::new(settings(OutputFormat::Chart), Vec::new());

        for value in [10, 90] {
            store.set_rating("melody", value);
            let payload = project(store.state());
            let view = RenderView {
                state: store.state(),
                average: store.average(),
                payload: &payload,
                options: chart_options(),
            };
            renderer.render(&view).expect("render should succeed");
        }

        assert_eq!(renderer.frames(), 2);
        let output = String::from_utf8(renderer.into_inner()).expect("output should be utf-8");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[50,10,50,50,50,50]"));
        assert!(lines[1].contains("[50,90,50,50,50,50]"));
    }

    #[test]
    fn output_format_parses_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let parsed: Wrapper = toml::from_str("format = \"json\"").expect("format should parse");
        assert_eq!(parsed.format, OutputFormat::Json);
    }
}
