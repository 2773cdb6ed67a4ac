use leptos::*;

pub const MAX_STARS: usize = 5;
const STAR: &str = "★";
const EMPTY_STAR: &str = "☆";

/// How many filled, half and empty stars a rating is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub filled: usize,
    pub half: usize,
    pub empty: usize,
}

impl StarRating {
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, MAX_STARS as f64)
        };
        let filled = rating.floor() as usize;
        let half = usize::from(rating - rating.floor() >= 0.5);
        Self {
            filled,
            half,
            empty: MAX_STARS - filled - half,
        }
    }
}

#[component]
pub fn Stars(rating: f64) -> impl IntoView {
    let stars = StarRating::from_rating(rating);

    view! {
        <span class="stars" title=format!("{:.1} out of {}", rating, MAX_STARS)>
            <span class="star-filled text-yellow-500">{ STAR.repeat(stars.filled) }</span>
            <span class="star-half text-yellow-300">{ STAR.repeat(stars.half) }</span>
            <span class="star-empty text-gray-300">{ EMPTY_STAR.repeat(stars.empty) }</span>
        </span>
    }
}
