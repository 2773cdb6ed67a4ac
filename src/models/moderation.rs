use std::fmt;

use crate::api::ApiError;

/// The shared-secret key an operator types into the admin panel.
///
/// Only ever built from trimmed, non-empty input. `Debug` never prints the key.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminKey(String);

impl AdminKey {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AdminKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminKey(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Approve,
    Delete,
}

impl ModerationAction {
    /// Value of the `data-action` attribute on the card buttons.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Delete => "delete",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "approve" => Some(Self::Approve),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Delete => "Delete",
        }
    }

    /// Admin API path for applying this action to one business.
    pub fn path(self, business_id: &str) -> String {
        let id = urlencoding::encode(business_id);
        match self {
            Self::Approve => format!("/admin/approve-business/{}", id),
            Self::Delete => format!("/admin/delete-business/{}", id),
        }
    }

    /// Alert text for the outcome of a moderation request.
    pub fn alert_message(self, result: &Result<(), ApiError>) -> &'static str {
        match (self, result) {
            (Self::Approve, Ok(())) => "Business approved!",
            (Self::Delete, Ok(())) => "Business deleted!",
            (Self::Approve, Err(ApiError::Network(_))) => "Error approving business.",
            (Self::Delete, Err(ApiError::Network(_))) => "Error deleting business.",
            (Self::Approve, Err(_)) => "Failed to approve business.",
            (Self::Delete, Err(_)) => "Failed to delete business.",
        }
    }
}
