pub mod error;
pub mod ids;
pub mod media;
pub mod movie;
pub mod rating;
pub mod review;
pub mod user;

pub use error::{ModelError, Result};
pub use ids::new_id;
pub use media::Media;
pub use movie::{Movie, MovieSummary};
pub use rating::{Rating, ScoreInput, SharedRating, MAX_SCORE, MIN_SCORE};
pub use review::{Review, SharedReview};
pub use user::{User, UserSummary, CONFIRMATION_TIME_FORMAT};
