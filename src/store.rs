use crate::types::dimension::DIMENSION_COUNT;
use crate::types::{Dimension, Rating};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// Immutable view of one rating session.
///
/// Ratings live in a fixed-size array indexed by [`Dimension::index`], so the
/// key set can never grow, shrink, or miss an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingState {
    song_name: String,
    ratings: [Rating; DIMENSION_COUNT],
}

impl Default for RatingState {
    fn default() -> Self {
        Self {
            song_name: String::new(),
            ratings: [Rating::BASELINE; DIMENSION_COUNT],
        }
    }
}

impl RatingState {
    pub fn song_name(&self) -> &str {
        &self.song_name
    }

    pub fn rating(&self, dimension: Dimension) -> Rating {
        self.ratings[dimension.index()]
    }

    /// Ratings paired with their dimension, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Rating)> + '_ {
        Dimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.rating(dimension)))
    }

    pub fn sum(&self) -> u32 {
        self.ratings.iter().map(|rating| rating.value() as u32).sum()
    }

    /// `round(sum / 6)`, rounding halves up.
    pub fn average(&self) -> u8 {
        let count = DIMENSION_COUNT as u32;
        ((self.sum() + count / 2) / count) as u8
    }

    pub fn with_song_name(&self, name: impl Into<String>) -> Self {
        Self {
            song_name: name.into(),
            ratings: self.ratings,
        }
    }

    pub fn with_rating(&self, dimension: Dimension, rating: Rating) -> Self {
        let mut ratings = self.ratings;
        ratings[dimension.index()] = rating;
        Self {
            song_name: self.song_name.clone(),
            ratings,
        }
    }
}

struct OrderedRatings<'a>(&'a RatingState);

impl Serialize for OrderedRatings<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DIMENSION_COUNT))?;
        for (dimension, rating) in self.0.iter() {
            map.serialize_entry(dimension.id(), &rating)?;
        }
        map.end()
    }
}

impl Serialize for RatingState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RatingState", 2)?;
        state.serialize_field("song_name", &self.song_name)?;
        state.serialize_field("ratings", &OrderedRatings(self))?;
        state.end()
    }
}

/// What a rating update did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingUpdate {
    Applied {
        dimension: Dimension,
        stored: Rating,
    },
    Clamped {
        dimension: Dimension,
        requested: i64,
        stored: Rating,
    },
    /// The id named no known dimension; the state is unchanged.
    Ignored { id: String },
}

impl RatingUpdate {
    pub fn is_warning(&self) -> bool {
        !matches!(self, RatingUpdate::Applied { .. })
    }
}

#[derive(Debug, Default)]
pub struct RatingStore {
    state: RatingState,
}

impl RatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_song_name(&mut self, name: impl Into<String>) {
        self.state = self.state.with_song_name(name);
    }

    /// Sets one rating by dimension id. Unknown ids leave the store untouched.
    pub fn set_rating(&mut self, dimension_id: &str, value: i64) -> RatingUpdate {
        match dimension_id.parse::<Dimension>() {
            Ok(dimension) => self.set(dimension, value),
            Err(e) => {
                tracing::warn!(value, "ignoring rating: {e}");
                RatingUpdate::Ignored {
                    id: dimension_id.to_string(),
                }
            }
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: i64) -> RatingUpdate {
        let stored = Rating::clamped(value);
        self.state = self.state.with_rating(dimension, stored);
        if i64::from(stored.value()) == value {
            tracing::debug!(%dimension, %stored, "rating updated");
            RatingUpdate::Applied { dimension, stored }
        } else {
            tracing::warn!(%dimension, requested = value, %stored, "rating clamped into range");
            RatingUpdate::Clamped {
                dimension,
                requested: value,
                stored,
            }
        }
    }

    pub fn average(&self) -> u8 {
        self.state.average()
    }

    pub fn snapshot(&self) -> RatingState {
        self.state.clone()
    }

    #[cfg(test)]
    pub fn state(&self) -> &RatingState {
        &self.state
    }
}
