use crate::config;

/// What the wizard needs to know about the device it runs on.
#[cfg_attr(test, mockall::automock)]
pub trait DeviceCapabilities {
    fn user_agent(&self) -> String;
}

/// The real browser, read through `navigator.userAgent`.
pub struct BrowserDevice;

impl DeviceCapabilities for BrowserDevice {
    fn user_agent(&self) -> String {
        web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default()
    }
}

const MOBILE_MARKERS: &[&str] = &["iphone", "ipad", "ipod", "android"];
const IOS_MARKERS: &[&str] = &["iphone", "ipad", "ipod"];

fn has_marker(user_agent: &str, markers: &[&str]) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    markers.iter().any(|m| ua.contains(m))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppStore {
    Apple,
    Google,
}

impl AppStore {
    pub fn name(self) -> &'static str {
        match self {
            AppStore::Apple => "App Store",
            AppStore::Google => "Play Store",
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            AppStore::Apple => config::APP_STORE_URL,
            AppStore::Google => config::PLAY_STORE_URL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadAction {
    /// Phones go straight to their store.
    Redirect(AppStore),
    /// Desktops get a code to scan with the phone.
    ShowQrCode(&'static str),
}

impl DownloadAction {
    pub fn target_url(self) -> &'static str {
        match self {
            DownloadAction::Redirect(store) => store.url(),
            DownloadAction::ShowQrCode(url) => url,
        }
    }
}

pub fn is_mobile(device: &dyn DeviceCapabilities) -> bool {
    has_marker(&device.user_agent(), MOBILE_MARKERS)
}

pub fn download_action(device: &dyn DeviceCapabilities) -> DownloadAction {
    if !is_mobile(device) {
        return DownloadAction::ShowQrCode(config::DOWNLOAD_PAGE_URL);
    }
    if has_marker(&device.user_agent(), IOS_MARKERS) {
        DownloadAction::Redirect(AppStore::Apple)
    } else {
        DownloadAction::Redirect(AppStore::Google)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
    const IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";
    const ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Mobile Safari/537.36";
    const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

    fn device(user_agent: &'static str) -> MockDeviceCapabilities {
        let mut mock = MockDeviceCapabilities::new();
        mock.expect_user_agent()
            .return_const(user_agent.to_string());
        mock
    }

    #[test]
    fn iphone_redirects_to_app_store() {
        let action = download_action(&device(IPHONE));
        assert_eq!(action, DownloadAction::Redirect(AppStore::Apple));
        assert_eq!(action.target_url(), config::APP_STORE_URL);
    }

    #[test]
    fn ipad_counts_as_ios() {
        assert_eq!(
            download_action(&device(IPAD)),
            DownloadAction::Redirect(AppStore::Apple)
        );
    }

    #[test]
    fn android_redirects_to_play_store() {
        let action = download_action(&device(ANDROID));
        assert_eq!(action, DownloadAction::Redirect(AppStore::Google));
        assert_eq!(action.target_url(), config::PLAY_STORE_URL);
    }

    #[test]
    fn desktop_gets_qr_code_of_download_page() {
        let action = download_action(&device(DESKTOP));
        assert_eq!(action, DownloadAction::ShowQrCode(config::DOWNLOAD_PAGE_URL));
        assert!(!is_mobile(&device(DESKTOP)));
    }

    #[test]
    fn marker_match_ignores_case() {
        assert!(is_mobile(&device("some-ANDROID-webview")));
        assert!(!is_mobile(&device("")));
    }
}
