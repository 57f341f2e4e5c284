use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the six fixed rating categories.
///
/// The variant order is the declaration order used for chart labels and
/// every chart series. [`Dimension::ALL`] is the only place that order lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Lyrics,
    Melody,
    Arrangement,
    Vocals,
    Emotion,
    Quality,
}

pub const DIMENSION_COUNT: usize = 6;

impl Dimension {
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::Lyrics,
        Dimension::Melody,
        Dimension::Arrangement,
        Dimension::Vocals,
        Dimension::Emotion,
        Dimension::Quality,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Dimension::Lyrics => "lyrics",
            Dimension::Melody => "melody",
            Dimension::Arrangement => "arrangement",
            Dimension::Vocals => "vocals",
            Dimension::Emotion => "emotion",
            Dimension::Quality => "quality",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Lyrics => "歌词",
            Dimension::Melody => "旋律",
            Dimension::Arrangement => "编曲",
            Dimension::Vocals => "人声",
            Dimension::Emotion => "情感",
            Dimension::Quality => "音质",
        }
    }

    /// Position in declaration order; indexes rating storage.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dimension| dimension.id() == id)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDimension(pub String);

impl fmt::Display for UnknownDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dimension: {}", self.0)
    }
}

impl std::error::Error for UnknownDimension {}

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s.trim()).ok_or_else(|| UnknownDimension(s.to_string()))
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}
