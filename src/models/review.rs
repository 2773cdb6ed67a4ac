// src/models/review.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::models::business::{deserialize_id, deserialize_number, deserialize_text};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Review {
    #[serde(default, alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub reviewer_name: String, // Display name of the reviewer
    #[serde(default, deserialize_with = "deserialize_number")]
    pub rating: Option<f64>, // 0 to 5, halves allowed
    #[serde(default, rename = "text", deserialize_with = "deserialize_text")]
    pub body: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub review_date: String, // As sent by the API, shown verbatim
    #[serde(default, deserialize_with = "deserialize_id")]
    pub business_id: String,
}

impl Review {
    pub fn rating(&self) -> f64 {
        self.rating.unwrap_or_default()
    }

    /// The review date as a timestamp, if it is in one of the formats the API emits.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        let raw = self.review_date.trim();
        if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
            return Some(date_time.naive_utc());
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(date_time);
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    }
}

/// Orders reviews newest first. Reviews with unreadable dates go last and keep
/// their relative order.
pub fn sort_newest_first(reviews: &mut [Review]) {
    reviews.sort_by_cached_key(|review| {
        let date = review.parsed_date();
        (date.is_none(), Reverse(date))
    });
}
