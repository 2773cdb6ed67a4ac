use leptos::use_context;

pub const DEFAULT_ADMIN_API_URL: &str = "https://townlink-api.onrender.com";
pub const DEFAULT_PUBLIC_API_URL: &str = "http://localhost:3000/api";

/// Base URLs of the two directory APIs the pages talk to.
///
/// Baked in at build time from `TOWNLINK_ADMIN_API_URL` and
/// `TOWNLINK_PUBLIC_API_URL`, falling back to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub admin_base_url: String,
    pub public_base_url: String,
}

impl ApiConfig {
    pub fn new(admin_base_url: impl Into<String>, public_base_url: impl Into<String>) -> Self {
        Self {
            admin_base_url: trim_base(admin_base_url.into()),
            public_base_url: trim_base(public_base_url.into()),
        }
    }

    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("TOWNLINK_ADMIN_API_URL").unwrap_or(DEFAULT_ADMIN_API_URL),
            option_env!("TOWNLINK_PUBLIC_API_URL").unwrap_or(DEFAULT_PUBLIC_API_URL),
        )
    }

    pub fn admin_url(&self, path: &str) -> String {
        format!("{}{}", self.admin_base_url, path)
    }

    pub fn public_url(&self, path: &str) -> String {
        format!("{}{}", self.public_base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// The config provided by the app shell, or the build defaults when a page is
/// mounted on its own.
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_default()
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
