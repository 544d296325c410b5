pub const DEFAULT_BACKEND_URL: &str = "https://localfix.xyz";

pub const APP_STORE_URL: &str = "https://apps.apple.com/app/localfix";
pub const PLAY_STORE_URL: &str = "https://play.google.com/store/apps/details?id=com.localfix";
// Landing page that forwards to the right store once opened on a phone
pub const DOWNLOAD_PAGE_URL: &str = "https://localfix.app/download";

pub const SUPPORT_EMAIL: &str = "support@localfix.app";
pub const CONTACT_EMAIL: &str = "contact@localfix.app";

pub const API_KEY_STORAGE_KEY: &str = "instant_booking_api_key";
pub const API_KEY_CREATED_STORAGE_KEY: &str = "instant_booking_api_key_created_at";

/// Base URL of the booking backend, baked in at build time from `LOCALFIX_API_URL`.
pub fn get_backend_url() -> &'static str {
    resolve_backend_url(option_env!("LOCALFIX_API_URL"))
}

fn resolve_backend_url(configured: Option<&'static str>) -> &'static str {
    match configured.map(|url| url.trim_end_matches('/')) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_BACKEND_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_url() {
        assert_eq!(resolve_backend_url(None), DEFAULT_BACKEND_URL);
        assert_eq!(resolve_backend_url(Some("")), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn configured_url_drops_trailing_slash() {
        assert_eq!(
            resolve_backend_url(Some("http://localhost:3001/")),
            "http://localhost:3001"
        );
    }
}
