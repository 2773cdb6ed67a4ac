//! Client for the TownLink directory APIs.
//!
//! Every call maps the transport and status outcome onto [`ApiError`] so the
//! pages only have to decide what to show.
use gloo_net::http::{Request, RequestBuilder, Response};
use http::StatusCode;
use leptos::logging::log;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::models::business::Business;
use crate::models::moderation::{AdminKey, ModerationAction};
use crate::models::review::Review;

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("admin key rejected")]
    Unauthorized,
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("request did not complete: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Maps an HTTP status onto success or the matching [`ApiError`].
pub fn check_status(status: u16) -> Result<(), ApiError> {
    match StatusCode::from_u16(status) {
        Ok(StatusCode::FORBIDDEN) => Err(ApiError::Unauthorized),
        Ok(code) if code.is_success() => Ok(()),
        _ => Err(ApiError::Status(status)),
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check_status(response.status())?;
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

pub async fn fetch_pending_businesses(
    config: &ApiConfig,
    key: &AdminKey,
) -> Result<Vec<Business>, ApiError> {
    let url = config.admin_url("/admin/pending-businesses");
    log!("[API] GET {}", url);
    let response = send(Request::get(&url).header(ADMIN_KEY_HEADER, key.as_str())).await?;
    read_json(response).await
}

pub async fn moderate_business(
    config: &ApiConfig,
    key: &AdminKey,
    action: ModerationAction,
    business_id: &str,
) -> Result<(), ApiError> {
    let url = config.admin_url(&action.path(business_id));
    let request = match action {
        ModerationAction::Approve => Request::put(&url),
        ModerationAction::Delete => Request::delete(&url),
    };
    log!("[API] {} {}", action.label(), url);
    send(request.header(ADMIN_KEY_HEADER, key.as_str())).await?;
    Ok(())
}

pub async fn fetch_business(config: &ApiConfig, business_id: u64) -> Result<Business, ApiError> {
    let url = config.public_url(&format!("/businesses/{}", business_id));
    log!("[API] GET {}", url);
    read_json(send(Request::get(&url)).await?).await
}

pub async fn fetch_reviews(config: &ApiConfig, business_id: u64) -> Result<Vec<Review>, ApiError> {
    let url = config.public_url(&format!("/reviews/{}", business_id));
    log!("[API] GET {}", url);
    read_json(send(Request::get(&url)).await?).await
}

/// Fetches a business and its reviews concurrently. Both must succeed.
pub async fn fetch_business_page(
    config: &ApiConfig,
    business_id: u64,
) -> Result<(Business, Vec<Review>), ApiError> {
    let (business, reviews) = futures::join!(
        fetch_business(config, business_id),
        fetch_reviews(config, business_id)
    );
    Ok((business?, reviews?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_is_the_bad_credential_signal() {
        assert_eq!(check_status(403), Err(ApiError::Unauthorized));
    }

    #[test]
    fn any_2xx_is_success() {
        for status in [200, 201, 204, 299] {
            assert_eq!(check_status(status), Ok(()), "status {}", status);
        }
    }

    #[test]
    fn other_statuses_keep_their_code() {
        for status in [301, 400, 401, 404, 500, 503] {
            assert_eq!(check_status(status), Err(ApiError::Status(status)));
        }
        assert_eq!(check_status(0), Err(ApiError::Status(0)));
    }
}
