use serde::{Deserialize, Deserializer, Serialize};

/// Text rendered in place of a missing contact field.
pub const NOT_AVAILABLE: &str = "Not available";
/// Image shown when a business has no picture of its own.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x250?text=No+Image+Available";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    #[default]
    Pending,
    Approved,
    #[serde(other)]
    Unknown,
}

/// A listed (or pending) business as returned by the directory API.
///
/// The admin API keys records by a string `_id`, the public API by a numeric
/// `id`; both end up in `id` as a string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Business {
    #[serde(default, alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub contact: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: ModerationStatus,
}

impl Business {
    pub fn category_label(&self) -> String {
        format!("Category: {}", capitalize(&self.category))
    }

    pub fn location_label(&self) -> String {
        format!("Location: {}", self.location)
    }

    pub fn phone_label(&self) -> String {
        labelled("Phone", non_empty(&self.phone))
    }

    pub fn email_label(&self) -> String {
        labelled("Email", non_empty(&self.email))
    }

    pub fn hours_label(&self) -> String {
        labelled("Hours", non_empty(&self.hours))
    }

    pub fn website(&self) -> Option<&str> {
        non_empty(&self.website)
    }

    pub fn image_src(&self) -> &str {
        non_empty(&self.image).unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn image_alt(&self) -> String {
        format!("{} image", self.name)
    }

    pub fn rating(&self) -> f64 {
        self.rating.unwrap_or_default()
    }

    /// Latitude and longitude, only when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

fn labelled(label: &str, value: Option<&str>) -> String {
    format!("{}: {}", label, value.unwrap_or(NOT_AVAILABLE))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

/// Accepts identifiers sent either as JSON strings or numbers.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(text)) => text,
        Some(RawId::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

/// Text fields sent as `null` read as empty.
pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<ModerationStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ModerationStatus>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

// Coordinates entered through the submission form, and NUMERIC columns, can
// arrive as strings.
pub(crate) fn deserialize_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Number(value)) => Some(value),
        Some(RawNumber::Text(text)) => text.trim().parse().ok(),
        None => None,
    }
    .filter(|value: &f64| value.is_finite()))
}
