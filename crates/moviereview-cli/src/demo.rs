use color_eyre::eyre::{eyre, Result};
use moviereview_config::DemoConfig;
use moviereview_models::{Movie, User};
use serde_json::json;
use tracing::info;

use crate::output::Output;

/// Write a review, update it, and optionally rate the movie.
pub fn run_demo(config: &DemoConfig, output: &Output) -> Result<()> {
    let mut movie = Movie::new(
        config.movie_title.as_str(),
        config.movie_genre.as_str(),
        config.movie_classification.clone(),
        config.movie_year,
    );
    let mut user = User::new(config.user_name.as_str());
    info!(movie = %movie, user = %user, "Starting demo");

    let confirmation = user.write_review(&mut movie, &config.review_text)?;
    let review_id = user
        .reviews()
        .keys()
        .next()
        .cloned()
        .ok_or_else(|| eyre!("Review was not stored"))?;

    if output.is_human() {
        output.success(&confirmation);
        output.info(format!("Amount of reviews: {}", movie.review_count()));
    }

    user.update_review(&review_id, &config.updated_text)?;
    let updated = user
        .review(&review_id)
        .map(|review| review.borrow().clone())
        .ok_or_else(|| eyre!("Review {} disappeared after update", review_id))?;

    if output.is_human() {
        output.info(format!("Updated review: {}", updated.review_text()));
    }

    if let Some(score) = config.score {
        let rating = user.rate_movie(&mut movie, score)?;
        if output.is_human() {
            output.info(format!(
                "Rated {} with {}/10, average rating: {}",
                movie,
                rating.score(),
                movie
                    .average_rating()
                    .map(|avg| format!("{:.1}", avg))
                    .unwrap_or_else(|| "n/a".to_string())
            ));
        }
    }

    if !output.is_human() {
        output.json(&json!({
            "confirmation": confirmation,
            "review_count": movie.review_count(),
            "updated_review": serde_json::to_value(&updated)?,
            "movie": serde_json::to_value(movie.summary())?,
            "user": serde_json::to_value(user.summary())?,
        }));
    }

    Ok(())
}
