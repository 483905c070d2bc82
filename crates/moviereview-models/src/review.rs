use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ModelError, Result};
use crate::ids::new_id;

/// A review held by both its author and the reviewed movie.
pub type SharedReview = Rc<RefCell<Review>>;

/// One user's text review of one movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    review_id: String,
    user_id: String,
    movie_id: String,
    date: DateTime<Utc>, // Creation time, refreshed on every text edit
    review_text: String,
}

/// Trim `text`, rejecting empty and whitespace-only input.
pub(crate) fn normalize_text(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ModelError::validation("Review can't be empty!"));
    }
    Ok(trimmed.to_string())
}

impl Review {
    pub fn new(user_id: impl Into<String>, movie_id: impl Into<String>, text: &str) -> Result<Self> {
        let review_text = normalize_text(text)?;
        Ok(Self {
            review_id: new_id(),
            user_id: user_id.into(),
            movie_id: movie_id.into(),
            date: Utc::now(),
            review_text,
        })
    }

    pub fn review_id(&self) -> &str {
        &self.review_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn movie_id(&self) -> &str {
        &self.movie_id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn review_text(&self) -> &str {
        &self.review_text
    }

    /// Replace the text and stamp the review with the current time.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.review_text = normalize_text(text)?;
        self.date = Utc::now();
        Ok(())
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.date = date;
    }

    /// Set the date from an RFC 3339 string, converting it to UTC.
    pub fn set_date_rfc3339(&mut self, value: &str) -> Result<()> {
        let parsed = DateTime::parse_from_rfc3339(value)
            .map_err(|_| ModelError::invalid_type("Date should be a datetime object!"))?;
        self.date = parsed.with_timezone(&Utc);
        Ok(())
    }

    pub fn into_shared(self) -> SharedReview {
        Rc::new(RefCell::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_review_new_trims_text() {
        let review = Review::new("user-1", "movie-1", "  Great movie!  ").unwrap();
        assert_eq!(review.review_text(), "Great movie!");
        assert_eq!(review.user_id(), "user-1");
        assert_eq!(review.movie_id(), "movie-1");
        assert!(!review.review_id().is_empty());
    }

    #[test]
    fn test_review_new_rejects_blank_text() {
        for text in ["", "   ", "\t\n"] {
            let err = Review::new("user-1", "movie-1", text).unwrap_err();
            assert!(err.is_validation(), "expected validation error for {:?}", text);
        }
    }

    #[test]
    fn test_review_date_is_recent() {
        let before = Utc::now();
        let review = Review::new("user-1", "movie-1", "Good").unwrap();
        assert!(review.date() >= before);
        assert!(review.date() <= Utc::now());
    }

    #[test]
    fn test_set_text_refreshes_date() {
        let mut review = Review::new("user-1", "movie-1", "Good").unwrap();
        let past = Utc::now() - Duration::days(3);
        review.set_date(past);

        review.set_text("  Amazing film!  ").unwrap();
        assert_eq!(review.review_text(), "Amazing film!");
        assert!(review.date() > past);
    }

    #[test]
    fn test_set_text_rejects_blank_and_keeps_state() {
        let mut review = Review::new("user-1", "movie-1", "Good").unwrap();
        let past = Utc::now() - Duration::hours(1);
        review.set_date(past);

        let err = review.set_text("   ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(review.review_text(), "Good");
        assert_eq!(review.date(), past);
    }

    #[test]
    fn test_set_date_rfc3339() {
        let mut review = Review::new("user-1", "movie-1", "Good").unwrap();
        review.set_date_rfc3339("2024-03-01T12:30:00+02:00").unwrap();
        assert_eq!(review.date(), Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_set_date_rfc3339_rejects_garbage() {
        let mut review = Review::new("user-1", "movie-1", "Good").unwrap();
        let original = review.date();
        let err = review.set_date_rfc3339("yesterday").unwrap_err();
        assert!(err.is_invalid_type());
        assert_eq!(review.date(), original);
    }

    #[test]
    fn test_review_serializes() {
        let review = Review::new("user-1", "movie-1", "Good").unwrap();
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["review_text"], "Good");
        assert_eq!(json["movie_id"], "movie-1");
    }
}
