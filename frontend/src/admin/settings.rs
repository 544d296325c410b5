use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Local, Utc};
use gloo_timers::callback::Timeout;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{js_sys, window, Storage};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

const KEY_BYTES: usize = 32;
const MESSAGE_TIMEOUT_MS: u32 = 3_000;
const COPIED_TIMEOUT_MS: u32 = 2_000;
const KEY_PLACEHOLDER: &str = "your-api-key-here";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    fn write_clipboard_text(text: &str) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Debug, Error)]
pub enum KeyStoreError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("could not write to local storage")]
    WriteFailed,
    #[error("secure random source failed: {0}")]
    Random(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoredKey {
    pub key: String,
    pub created_at: Option<DateTime<Utc>>,
}

pub fn encode_key(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub fn parse_created(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

/// The documentation snippet, with the admin's key filled in when there is one.
pub fn curl_example(key: Option<&str>) -> String {
    let key = key.filter(|k| !k.is_empty()).unwrap_or(KEY_PLACEHOLDER);
    format!(
        r#"curl -X POST https://api.localfix.com/api/v1/bookings/instant \
  -H "Content-Type: application/json" \
  -H "x-api-key: {key}" \
  -d '{{
    "customerId": "507f1f77bcf86cd799439011",
    "service": "507f1f77bcf86cd799439012",
    "provider": "507f1f77bcf86cd799439013",
    "scheduledDate": "2026-01-20T00:00:00.000Z",
    "scheduledTime": {{
      "startTime": "10:00 AM"
    }},
    "address": {{
      "street": "123 Main St",
      "city": "New York",
      "state": "NY",
      "zipCode": "10001"
    }}
  }}'"#
    )
}

fn local_storage() -> Result<Storage, KeyStoreError> {
    window()
        .ok_or(KeyStoreError::NoWindow)?
        .local_storage()
        .ok()
        .flatten()
        .ok_or(KeyStoreError::StorageUnavailable)
}

fn load_key() -> Option<StoredKey> {
    let storage = local_storage().ok()?;
    let key = storage
        .get_item(config::API_KEY_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|k| !k.is_empty())?;
    let created_at = storage
        .get_item(config::API_KEY_CREATED_STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|raw| parse_created(&raw));
    Some(StoredKey { key, created_at })
}

fn generate_key() -> Result<StoredKey, KeyStoreError> {
    let crypto = window()
        .ok_or(KeyStoreError::NoWindow)?
        .crypto()
        .map_err(|e| KeyStoreError::Random(format!("{:?}", e)))?;
    let mut bytes = [0u8; KEY_BYTES];
    crypto
        .get_random_values_with_u8_array(&mut bytes)
        .map_err(|e| KeyStoreError::Random(format!("{:?}", e)))?;

    let stored = StoredKey {
        key: encode_key(&bytes),
        created_at: Some(Utc::now()),
    };
    let storage = local_storage()?;
    storage
        .set_item(config::API_KEY_STORAGE_KEY, &stored.key)
        .map_err(|_| KeyStoreError::WriteFailed)?;
    if let Some(created_at) = stored.created_at {
        let _ = storage.set_item(config::API_KEY_CREATED_STORAGE_KEY, &created_at.to_rfc3339());
    }
    Ok(stored)
}

fn revoke_key() -> Result<(), KeyStoreError> {
    let storage = local_storage()?;
    storage
        .remove_item(config::API_KEY_STORAGE_KEY)
        .map_err(|_| KeyStoreError::WriteFailed)?;
    let _ = storage.remove_item(config::API_KEY_CREATED_STORAGE_KEY);
    Ok(())
}

#[derive(Clone, PartialEq)]
enum Notice {
    Success(String),
    Error(String),
}

#[function_component]
pub fn AdminSettings() -> Html {
    use_title("Instant Booking API Settings | LocalFix".to_string());
    let api_key = use_state(|| None::<StoredKey>);
    let show_key = use_bool_toggle(false);
    let copied = use_state(|| false);
    let notice = use_state(|| None::<Notice>);
    let notice_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let copied_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let api_key = api_key.clone();
        use_effect_with_deps(
            move |_| {
                api_key.set(load_key());
                || ()
            },
            (),
        );
    }

    let show_notice = {
        let notice = notice.clone();
        let notice_timer = notice_timer.clone();
        Callback::from(move |next: Notice| {
            notice.set(Some(next));
            let notice = notice.clone();
            // replacing the handle cancels the previous timer
            *notice_timer.borrow_mut() = Some(Timeout::new(MESSAGE_TIMEOUT_MS, move || {
                notice.set(None);
            }));
        })
    };

    let on_generate = {
        let api_key = api_key.clone();
        let show_notice = show_notice.clone();
        Callback::from(move |_: MouseEvent| match generate_key() {
            Ok(stored) => {
                log::info!("Generated new instant booking API key");
                api_key.set(Some(stored));
                show_notice.emit(Notice::Success("New API key generated successfully!".to_string()));
            }
            Err(e) => {
                log::error!("API key generation failed: {}", e);
                show_notice.emit(Notice::Error(format!("Could not generate API key: {}", e)));
            }
        })
    };

    let on_revoke = {
        let api_key = api_key.clone();
        let show_notice = show_notice.clone();
        Callback::from(move |_: MouseEvent| {
            let confirmed = window()
                .and_then(|w| {
                    w.confirm_with_message(
                        "Are you sure you want to revoke this API key? This action cannot be undone.",
                    )
                    .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            match revoke_key() {
                Ok(()) => {
                    api_key.set(None);
                    show_notice.emit(Notice::Success("API key revoked successfully.".to_string()));
                }
                Err(e) => {
                    log::error!("API key revoke failed: {}", e);
                    show_notice.emit(Notice::Error(format!("Could not revoke API key: {}", e)));
                }
            }
        })
    };

    let on_copy = {
        let api_key = api_key.clone();
        let copied = copied.clone();
        let copied_timer = copied_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(stored) = (*api_key).clone() else {
                return;
            };
            let copied = copied.clone();
            let copied_timer = copied_timer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let written = match write_clipboard_text(&stored.key) {
                    Ok(promise) => JsFuture::from(promise).await.is_ok(),
                    Err(_) => false,
                };
                if !written {
                    gloo_console::error!("Clipboard write failed");
                    return;
                }
                copied.set(true);
                let copied = copied.clone();
                *copied_timer.borrow_mut() = Some(Timeout::new(COPIED_TIMEOUT_MS, move || {
                    copied.set(false);
                }));
            });
        })
    };

    let on_toggle_key = {
        let show_key = show_key.clone();
        Callback::from(move |_: MouseEvent| show_key.toggle())
    };

    let notice_html = match (*notice).as_ref() {
        Some(Notice::Success(text)) => html! {
            <div class="message success"><span>{"✓ "}</span><span>{text}</span></div>
        },
        Some(Notice::Error(text)) => html! {
            <div class="message error"><span>{"⚠ "}</span><span>{text}</span></div>
        },
        None => html! {},
    };

    let key_card = match (*api_key).as_ref() {
        Some(stored) => {
            let created = stored
                .created_at
                .map(|at| at.with_timezone(&Local).format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| "Unknown".to_string());
            html! {
                <>
                    <div class="api-key-display">
                        <label>{"Your API Key"}</label>
                        <div class="key-input-group">
                            <input
                                type={if *show_key { "text" } else { "password" }}
                                value={stored.key.clone()}
                                readonly={true}
                                class="key-input"
                            />
                            <button onclick={on_toggle_key} class="btn-icon" title={if *show_key { "Hide key" } else { "Show key" }}>
                                { if *show_key { "🙈" } else { "👁" } }
                            </button>
                            <button onclick={on_copy} class="btn-icon" title="Copy to clipboard">
                                { if *copied { "✓" } else { "⧉" } }
                            </button>
                        </div>
                        if *copied {
                            <span class="copy-success">{"✓ Copied to clipboard!"}</span>
                        }
                    </div>
                    <div class="key-info">
                        <div class="info-item">
                            <span class="label">{"Status:"}</span>
                            <span class="value active">{"Active"}</span>
                        </div>
                        <div class="info-item">
                            <span class="label">{"Created:"}</span>
                            <span class="value">{created}</span>
                        </div>
                    </div>
                    <div class="action-buttons">
                        <button onclick={on_generate} class="btn btn-secondary">
                            {"↻ Regenerate Key"}
                        </button>
                        <button onclick={on_revoke} class="btn btn-danger">
                            {"Revoke Key"}
                        </button>
                    </div>
                </>
            }
        }
        None => html! {
            <div class="no-key">
                <div class="no-key-icon">{"🔑"}</div>
                <h3>{"No API Key Generated"}</h3>
                <p>{"Generate an API key to enable instant booking integrations"}</p>
                <button onclick={on_generate} class="btn btn-primary">
                    {"Generate API Key"}
                </button>
            </div>
        },
    };

    let example = curl_example((*api_key).as_ref().map(|s| s.key.as_str()));

    html! {
        <div class="admin-settings">
            <div class="settings-container">
                <div class="settings-header">
                    <div class="header-icon">{"🔑"}</div>
                    <h1>{"Instant Booking API Settings"}</h1>
                    <p>{"Manage your API key for external integrations and instant booking"}</p>
                </div>

                {notice_html}

                <div class="settings-card">
                    <div class="card-header">
                        <h2>{"API Key Configuration"}</h2>
                        <span class="badge">{"Admin Only"}</span>
                    </div>
                    <div class="card-content">
                        {key_card}
                    </div>
                </div>

                <div class="settings-card">
                    <div class="card-header">
                        <h2>{"API Documentation"}</h2>
                    </div>
                    <div class="card-content">
                        <div class="doc-section">
                            <h3>{"Endpoint"}</h3>
                            <code class="code-block">{"POST /api/v1/bookings/instant"}</code>
                        </div>
                        <div class="doc-section">
                            <h3>{"Authentication"}</h3>
                            <p>{"Include your API key in the request header:"}</p>
                            <code class="code-block">{format!("x-api-key: {}", KEY_PLACEHOLDER)}</code>
                        </div>
                        <div class="doc-section">
                            <h3>{"Example Request"}</h3>
                            <pre class="code-block">{example}</pre>
                        </div>
                        <div class="doc-section">
                            <h3>{"Security Notes"}</h3>
                            <ul class="security-list">
                                <li>{"Never share your API key publicly"}</li>
                                <li>{"Store the key securely in environment variables"}</li>
                                <li>{"Regenerate the key if compromised"}</li>
                                <li>{"Monitor API usage regularly"}</li>
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
.admin-settings {
    min-height: 100vh;
    background: #f8fafc;
    padding: 3rem 1rem;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.settings-container {
    max-width: 760px;
    margin: 0 auto;
}
.settings-header {
    text-align: center;
    margin-bottom: 2rem;
}
.header-icon {
    font-size: 2rem;
}
.settings-header p {
    color: #667085;
}
.message {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.9rem 1.2rem;
    border-radius: 12px;
    margin-bottom: 1.5rem;
}
.message.success {
    background: #ecfdf3;
    color: #027a48;
}
.message.error {
    background: #fef3f2;
    color: #b42318;
}
.settings-card {
    background: #fff;
    border-radius: 16px;
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.05);
    margin-bottom: 1.5rem;
    overflow: hidden;
}
.card-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1.2rem 1.5rem;
    border-bottom: 1px solid #eef2f6;
}
.card-header h2 {
    font-size: 1.1rem;
    margin: 0;
}
.card-header .badge {
    padding: 0.25rem 0.7rem;
    border-radius: 999px;
    background: #fff4e5;
    color: #b54708;
    font-size: 0.75rem;
    font-weight: 600;
}
.card-content {
    padding: 1.5rem;
}
.key-input-group {
    display: flex;
    gap: 0.5rem;
    margin-top: 0.4rem;
}
.key-input {
    flex: 1;
    padding: 0.7rem;
    border: 1px solid #d0d5dd;
    border-radius: 10px;
    font-family: monospace;
}
.btn-icon {
    width: 42px;
    border: 1px solid #d0d5dd;
    border-radius: 10px;
    background: #fff;
    cursor: pointer;
}
.copy-success {
    display: block;
    color: #027a48;
    font-size: 0.85rem;
    margin-top: 0.4rem;
}
.key-info {
    display: flex;
    gap: 2rem;
    margin: 1.25rem 0;
}
.info-item .label {
    color: #667085;
    margin-right: 0.4rem;
}
.value.active {
    color: #027a48;
    font-weight: 600;
}
.action-buttons {
    display: flex;
    gap: 0.75rem;
}
.btn {
    padding: 0.65rem 1.2rem;
    border-radius: 10px;
    border: none;
    font-weight: 600;
    cursor: pointer;
}
.btn-primary {
    background: #ff7a00;
    color: #fff;
}
.btn-secondary {
    background: #eef2f6;
    color: #101828;
}
.btn-danger {
    background: #fee4e2;
    color: #b42318;
}
.no-key {
    text-align: center;
}
.no-key-icon {
    font-size: 3rem;
}
.doc-section {
    margin-bottom: 1.25rem;
}
.doc-section h3 {
    font-size: 0.95rem;
    margin-bottom: 0.5rem;
}
.code-block {
    display: block;
    background: #0b1220;
    color: #e2e8f0;
    padding: 0.9rem 1rem;
    border-radius: 10px;
    font-size: 0.8rem;
    overflow-x: auto;
    white-space: pre;
}
.security-list {
    color: #475467;
    line-height: 1.8;
}
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_lowercase_hex_of_every_byte() {
        let bytes: Vec<u8> = (0..KEY_BYTES as u8).collect();
        let key = encode_key(&bytes);
        assert_eq!(key.len(), 64);
        assert!(key.starts_with("000102"));
        assert!(key.ends_with("1f"));
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn created_timestamp_parses_rfc3339() {
        let at = parse_created("2026-01-14T10:30:00+05:30").unwrap();
        assert_eq!(at.to_rfc3339(), "2026-01-14T05:00:00+00:00");
        assert!(parse_created("yesterday").is_none());
    }

    #[test]
    fn curl_example_embeds_key_or_placeholder() {
        assert!(curl_example(Some("abc123")).contains("x-api-key: abc123"));
        assert!(curl_example(None).contains("x-api-key: your-api-key-here"));
        assert!(curl_example(Some("")).contains("x-api-key: your-api-key-here"));
        assert!(curl_example(None).contains("\"startTime\": \"10:00 AM\""));
    }
}
