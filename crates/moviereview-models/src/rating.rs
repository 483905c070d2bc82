use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::error::{ModelError, Result};
use crate::ids::new_id;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// A rating held by both the rating user and the rated movie.
pub type SharedRating = Rc<Rating>;

/// Raw score as supplied by a caller, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreInput {
    Integer(i64),
    Float(f64), // Truncated toward zero before the range check
    Text(String),
}

impl ScoreInput {
    /// Validate into a score in `MIN_SCORE..=MAX_SCORE`.
    pub fn to_score(&self) -> Result<u8> {
        let value = match self {
            ScoreInput::Text(_) => {
                return Err(ModelError::invalid_type("Score should be a number!"));
            }
            ScoreInput::Integer(value) => *value,
            ScoreInput::Float(value) => {
                if !value.is_finite() {
                    return Err(ModelError::validation("Score should be 1-10"));
                }
                let truncated = value.trunc();
                if truncated < MIN_SCORE as f64 || truncated > MAX_SCORE as f64 {
                    return Err(ModelError::validation("Score should be 1-10"));
                }
                truncated as i64
            }
        };

        if value < MIN_SCORE as i64 || value > MAX_SCORE as i64 {
            return Err(ModelError::validation("Score should be 1-10"));
        }
        Ok(value as u8)
    }
}

macro_rules! score_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for ScoreInput {
            fn from(value: $t) -> Self {
                ScoreInput::Integer(value as i64)
            }
        })*
    };
}

score_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for ScoreInput {
    fn from(value: f32) -> Self {
        ScoreInput::Float(value as f64)
    }
}

impl From<f64> for ScoreInput {
    fn from(value: f64) -> Self {
        ScoreInput::Float(value)
    }
}

impl From<&str> for ScoreInput {
    fn from(value: &str) -> Self {
        ScoreInput::Text(value.to_string())
    }
}

impl From<String> for ScoreInput {
    fn from(value: String) -> Self {
        ScoreInput::Text(value)
    }
}

/// One user's score for one movie. Immutable: re-rating builds a new `Rating`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    rating_id: String,
    movie_id: String,
    user_id: String,
    score: u8,
    date: DateTime<Utc>,
}

impl Rating {
    pub fn new(
        movie_id: impl Into<String>,
        user_id: impl Into<String>,
        score: impl Into<ScoreInput>,
    ) -> Result<Self> {
        let score = score.into().to_score()?;
        Ok(Self {
            rating_id: new_id(),
            movie_id: movie_id.into(),
            user_id: user_id.into(),
            score,
            date: Utc::now(),
        })
    }

    pub fn rating_id(&self) -> &str {
        &self.rating_id
    }

    pub fn movie_id(&self) -> &str {
        &self.movie_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_new() {
        let rating = Rating::new("movie-1", "user-1", 8).unwrap();
        assert_eq!(rating.score(), 8);
        assert_eq!(rating.movie_id(), "movie-1");
        assert_eq!(rating.user_id(), "user-1");
        assert!(!rating.rating_id().is_empty());
    }

    #[test]
    fn test_rating_bounds_inclusive() {
        assert_eq!(Rating::new("m", "u", 1).unwrap().score(), 1);
        assert_eq!(Rating::new("m", "u", 10).unwrap().score(), 10);
    }

    #[test]
    fn test_rating_out_of_bounds() {
        for score in [0, 11, -3, 255] {
            let err = Rating::new("m", "u", score).unwrap_err();
            assert!(err.is_validation(), "expected validation error for {}", score);
        }
    }

    #[test]
    fn test_rating_truncates_fractional_scores() {
        assert_eq!(Rating::new("m", "u", 8.9).unwrap().score(), 8);
        assert_eq!(Rating::new("m", "u", 10.99).unwrap().score(), 10);
        assert_eq!(Rating::new("m", "u", 1.0).unwrap().score(), 1);
        assert!(Rating::new("m", "u", 0.5).unwrap_err().is_validation());
        assert!(Rating::new("m", "u", -0.5).unwrap_err().is_validation());
        assert!(Rating::new("m", "u", 11.2).unwrap_err().is_validation());
    }

    #[test]
    fn test_rating_non_finite_scores() {
        assert!(Rating::new("m", "u", f64::NAN).unwrap_err().is_validation());
        assert!(Rating::new("m", "u", f64::INFINITY).unwrap_err().is_validation());
    }

    #[test]
    fn test_rating_rejects_text() {
        let err = Rating::new("m", "u", "not_number").unwrap_err();
        assert!(err.is_invalid_type());

        let err = Rating::new("m", "u", "8".to_string()).unwrap_err();
        assert!(err.is_invalid_type());
    }
}
