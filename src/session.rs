use crate::chart::{chart_options, project};
use crate::error::Result;
use crate::render::{RenderView, Renderer};
use crate::store::RatingStore;
use crate::types::rating::parse_requested;
use std::io::BufRead;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SetSongName(String),
    SetRating { id: String, value: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(SessionEvent),
    Show,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("usage: set <dimension> <value>")]
    MissingArgument,

    #[error("rating must be an integer: {0}")]
    InvalidValue(String),
}

/// Parses one line of the session protocol. Blank lines and `#` comments
/// yield `None`.
pub fn parse_line(line: &str) -> std::result::Result<Option<Command>, LineError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    // Only the first separator is consumed so song names keep their spacing.
    let (keyword, raw_rest) = match line.trim_start().split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest),
        None => (trimmed, ""),
    };

    let command = match keyword {
        "name" => Command::Event(SessionEvent::SetSongName(raw_rest.to_string())),
        "set" => {
            let mut parts = raw_rest.split_whitespace();
            let (Some(id), Some(raw)) = (parts.next(), parts.next()) else {
                return Err(LineError::MissingArgument);
            };
            if parts.next().is_some() {
                return Err(LineError::MissingArgument);
            }
            let value = parse_requested(raw)
                .map_err(|_| LineError::InvalidValue(raw.to_string()))?;
            Command::Event(SessionEvent::SetRating {
                id: id.to_string(),
                value,
            })
        }
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        other => return Err(LineError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

/// One rating session: input events update the store, then the renderer
/// redraws from a fresh projection.
pub struct Session<R: Renderer> {
    store: RatingStore,
    renderer: R,
    warnings: usize,
}

impl<R: Renderer> Session<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            store: RatingStore::new(),
            renderer,
            warnings: 0,
        }
    }

    /// Applies an event without redrawing.
    pub fn update(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::SetSongName(name) => {
                tracing::debug!(name = %name, "song name updated");
                self.store.set_song_name(name);
            }
            SessionEvent::SetRating { id, value } => {
                if self.store.set_rating(&id, value).is_warning() {
                    self.warnings += 1;
                }
            }
        }
    }

    pub fn apply(&mut self, event: SessionEvent) -> Result<()> {
        self.update(event);
        self.redraw()
    }

    pub fn redraw(&mut self) -> Result<()> {
        let state = self.store.snapshot();
        let payload = project(&state);
        let view = RenderView {
            state: &state,
            average: self.store.average(),
            payload: &payload,
            options: chart_options(),
        };
        self.renderer.render(&view)
    }

    /// Draws the initial state, then replays the line protocol from `input`
    /// until `quit` or end of input.
    pub fn run<B: BufRead>(&mut self, input: B) -> Result<()> {
        self.redraw()?;
        for (number, line) in input.lines().enumerate() {
            let line = line?;
            match parse_line(&line) {
                Ok(None) => {}
                Ok(Some(Command::Event(event))) => self.apply(event)?,
                Ok(Some(Command::Show)) => self.redraw()?,
                Ok(Some(Command::Quit)) => break,
                Err(e) => {
                    tracing::warn!(line = number + 1, "skipping input: {e}");
                    self.warnings += 1;
                }
            }
        }
        Ok(())
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
