use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::ids::new_id;
use crate::movie::Movie;
use crate::rating::{Rating, ScoreInput, SharedRating};
use crate::review::{normalize_text, Review, SharedReview};

/// Timestamp format used in review confirmations (day-month-year hour:minute).
pub const CONFIRMATION_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// A user and everything they have written or rated.
///
/// All review and rating mutations go through `User` so that the user's
/// collections and the movie's collections always point at the same entries.
#[derive(Debug)]
pub struct User {
    id: String,
    user_name: String,
    reviews: HashMap<String, SharedReview>, // Keyed by review id
    ratings: HashMap<String, SharedRating>, // Keyed by movie id
}

/// Serializable view of a user for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub id: String,
    pub user_name: String,
    pub review_count: usize,
    pub rating_count: usize,
}

impl User {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            user_name: user_name.into(),
            reviews: HashMap::new(),
            ratings: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
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

    pub fn rating_for(&self, movie_id: &str) -> Option<&SharedRating> {
        self.ratings.get(movie_id)
    }

    /// Write a review of `movie`, returning a confirmation with its timestamp.
    pub fn write_review(&mut self, movie: &mut Movie, text: &str) -> Result<String> {
        let review = Review::new(self.id.as_str(), movie.id(), text)?;
        let review_id = review.review_id().to_string();
        let confirmation = format!(
            "The review is added at {}",
            review.date().format(CONFIRMATION_TIME_FORMAT)
        );

        let review = review.into_shared();
        self.reviews.insert(review_id.clone(), Rc::clone(&review));
        movie.add_review(review);

        debug!(user_id = %self.id, movie_id = %movie.id(), review_id = %review_id, "Review written");
        Ok(confirmation)
    }

    /// Replace the text of one of this user's reviews.
    ///
    /// The movie holds the same review, so no movie-side call is needed.
    pub fn update_review(&mut self, review_id: &str, new_text: &str) -> Result<()> {
        let new_text = normalize_text(new_text)?;
        let review = self
            .reviews
            .get(review_id)
            .ok_or_else(|| ModelError::not_found("The review is not found!"))?;
        review.borrow_mut().set_text(&new_text)?;

        debug!(user_id = %self.id, review_id = %review_id, "Review updated");
        Ok(())
    }

    /// Delete one of this user's reviews from the user and from `movie`.
    ///
    /// Fails if the user does not own `review_id`; a movie that never held it
    /// is left untouched.
    pub fn delete_review(&mut self, review_id: &str, movie: &mut Movie) -> Result<SharedReview> {
        let review = self
            .reviews
            .remove(review_id)
            .ok_or_else(|| ModelError::not_found("The review is not found!"))?;
        movie.remove_review(review_id);

        debug!(user_id = %self.id, movie_id = %movie.id(), review_id = %review_id, "Review deleted");
        Ok(review)
    }

    /// Rate `movie`, replacing any earlier rating this user gave it.
    pub fn rate_movie(&mut self, movie: &mut Movie, score: impl Into<ScoreInput>) -> Result<SharedRating> {
        let rating = Rc::new(Rating::new(movie.id(), self.id.as_str(), score)?);

        self.ratings.insert(movie.id().to_string(), Rc::clone(&rating));
        movie.add_rating(Rc::clone(&rating));

        debug!(
            user_id = %self.id,
            movie_id = %movie.id(),
            score = rating.score(),
            "Movie rated"
        );
        Ok(rating)
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            user_name: self.user_name.clone(),
            review_count: self.reviews.len(),
            rating_count: self.ratings.len(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_name)
    }
}
