use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::media::Media;
use crate::rating::SharedRating;
use crate::review::SharedReview;

/// A movie with the reviews and ratings attached to it.
#[derive(Debug)]
pub struct Movie {
    media: Media,
    classification: Option<String>, // Age rating such as "PG-13", passed through as-is
    year: u32,
    reviews: HashMap<String, SharedReview>, // Keyed by review id
    ratings: HashMap<String, SharedRating>, // Keyed by user id
    average_rating: Option<f64>,
}

/// Serializable view of a movie for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: String,
    pub name: String,
    pub genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    pub year: u32,
    pub review_count: usize,
    pub rating_count: usize,
    pub average_rating: Option<f64>,
}

impl Movie {
    pub fn new(
        name: impl Into<String>,
        genre: impl Into<String>,
        classification: Option<String>,
        year: u32,
    ) -> Self {
        Self {
            media: Media::new(name, genre),
            classification,
            year,
            reviews: HashMap::new(),
            ratings: HashMap::new(),
            average_rating: None,
        }
    }

    pub fn media(&self) -> &Media {
        &self.media
    }

    pub fn id(&self) -> &str {
        self.media.id()
    }

    pub fn name(&self) -> &str {
        self.media.name()
    }

    pub fn genre(&self) -> &str {
        self.media.genre()
    }

    pub fn classification(&self) -> Option<&str> {
        self.classification.as_deref()
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn reviews(&self) -> &HashMap<String, SharedReview> {
        &self.reviews
    }

    pub fn ratings(&self) -> &HashMap<String, SharedRating> {
        &self.ratings
    }

    pub fn review(&self, review_id: &str) -> Option<&SharedReview> {
        self.reviews.get(review_id)
    }

    pub fn rating_by(&self, user_id: &str) -> Option<&SharedRating> {
        self.ratings.get(user_id)
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }

    /// Mean of all current scores, `None` while unrated.
    pub fn average_rating(&self) -> Option<f64> {
        self.average_rating
    }

    /// Attach a review, overwriting any entry with the same review id.
    pub fn add_review(&mut self, review: SharedReview) {
        let review_id = review.borrow().review_id().to_string();
        debug!(movie_id = %self.id(), review_id = %review_id, "Review attached to movie");
        self.reviews.insert(review_id, review);
    }

    /// Detach a review. Unknown ids are ignored.
    pub fn remove_review(&mut self, review_id: &str) -> Option<SharedReview> {
        let removed = self.reviews.remove(review_id);
        if removed.is_some() {
            debug!(movie_id = %self.id(), review_id = %review_id, "Review detached from movie");
        }
        removed
    }

    /// Store a rating under its user id, replacing that user's previous one,
    /// and recompute the average.
    pub fn add_rating(&mut self, rating: SharedRating) {
        self.ratings.insert(rating.user_id().to_string(), rating);
        self.recompute_average();
    }

    fn recompute_average(&mut self) {
        self.average_rating = if self.ratings.is_empty() {
            None
        } else {
            let total: u32 = self.ratings.values().map(|r| r.score() as u32).sum();
            Some(total as f64 / self.ratings.len() as f64)
        };
        debug!(
            movie_id = %self.id(),
            ratings = self.ratings.len(),
            average = ?self.average_rating,
            "Average rating recomputed"
        );
    }

    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id().to_string(),
            name: self.name().to_string(),
            genre: self.genre().to_string(),
            classification: self.classification.clone(),
            year: self.year,
            review_count: self.review_count(),
            rating_count: self.rating_count(),
            average_rating: self.average_rating,
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::Rating;
    use crate::review::Review;
    use std::rc::Rc;

    fn create_movie() -> Movie {
        Movie::new("The Matrix", "Sci-Fi", None, 1999)
    }

    fn create_rating(movie: &Movie, user_id: &str, score: i32) -> SharedRating {
        Rc::new(Rating::new(movie.id(), user_id, score).unwrap())
    }

    #[test]
    fn test_movie_new() {
        let movie = Movie::new("Inception", "Sci-Fi", Some("PG-13".to_string()), 2010);
        assert_eq!(movie.name(), "Inception");
        assert_eq!(movie.genre(), "Sci-Fi");
        assert_eq!(movie.classification(), Some("PG-13"));
        assert_eq!(movie.year(), 2010);
        assert_eq!(movie.id(), movie.media().id());
        assert_eq!(movie.review_count(), 0);
        assert_eq!(movie.average_rating(), None);
        assert_eq!(movie.to_string(), "Inception (2010)");
    }

    #[test]
    fn test_add_and_remove_review() {
        let mut movie = create_movie();
        let review = Review::new("user-1", movie.id(), "Nice").unwrap().into_shared();
        let review_id = review.borrow().review_id().to_string();

        movie.add_review(review.clone());
        movie.add_review(review);
        assert_eq!(movie.review_count(), 1);
        assert!(movie.review(&review_id).is_some());

        assert!(movie.remove_review(&review_id).is_some());
        assert_eq!(movie.review_count(), 0);
    }

    #[test]
    fn test_remove_unknown_review_is_noop() {
        let mut movie = create_movie();
        let review = Review::new("user-1", movie.id(), "Nice").unwrap().into_shared();
        movie.add_review(review);

        assert!(movie.remove_review("no_such_id").is_none());
        assert_eq!(movie.review_count(), 1);
    }

    #[test]
    fn test_add_rating_recomputes_average() {
        let mut movie = create_movie();
        let first = create_rating(&movie, "user-1", 8);
        movie.add_rating(first);
        assert_eq!(movie.average_rating(), Some(8.0));

        let second = create_rating(&movie, "user-2", 5);
        movie.add_rating(second);
        assert_eq!(movie.average_rating(), Some(6.5));
        assert_eq!(movie.rating_count(), 2);
    }

    #[test]
    fn test_add_rating_replaces_same_user() {
        let mut movie = create_movie();
        let first = create_rating(&movie, "user-1", 2);
        let second = create_rating(&movie, "user-1", 9);
        movie.add_rating(first);
        movie.add_rating(second.clone());

        assert_eq!(movie.rating_count(), 1);
        assert_eq!(movie.average_rating(), Some(9.0));
        assert!(Rc::ptr_eq(movie.rating_by("user-1").unwrap(), &second));
    }

    #[test]
    fn test_summary() {
        let mut movie = create_movie();
        let rating = create_rating(&movie, "user-1", 7);
        movie.add_rating(rating);

        let summary = movie.summary();
        assert_eq!(summary.name, "The Matrix");
        assert_eq!(summary.rating_count, 1);
        assert_eq!(summary.average_rating, Some(7.0));

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("classification").is_none());
        assert_eq!(json["year"], 1999);
    }
}
