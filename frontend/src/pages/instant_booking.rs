use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;
use web_sys::{window, HtmlInputElement};
use wasm_bindgen_futures::spawn_local;
use log::{error, info};

use crate::Route;
use crate::booking::api::BookingClient;
use crate::booking::device::{download_action, BrowserDevice, DownloadAction};
use crate::booking::qr::QrMatrix;
use crate::booking::services::{BoardAction, BookingBoard, BookingStatus, ServiceKind};
use crate::booking::session::{
    digits_only, DotState, PhoneNumber, Session, SessionAction, Step, COUNTRY_PREFIX, OTP_LEN,
    PHONE_LEN,
};

#[function_component]
pub fn InstantBooking() -> Html {
    use_title("Book a Service | LocalFix".to_string());
    let session = use_reducer(Session::default);
    let client = use_memo(|_| BookingClient::default(), ());
    let is_mounted = use_is_mounted();

    let on_phone_input = {
        let session = session.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let digits = digits_only(&input.value(), PHONE_LEN);
            input.set_value(&digits);
            session.dispatch(SessionAction::PhoneInput(digits));
        })
    };

    let on_otp_input = {
        let session = session.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let digits = digits_only(&input.value(), OTP_LEN);
            input.set_value(&digits);
            session.dispatch(SessionAction::OtpInput(digits));
        })
    };

    let on_phone_submit = {
        let session = session.clone();
        let client = client.clone();
        let is_mounted = is_mounted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = session.phone_submission();
            session.dispatch(SessionAction::SubmitPhone);
            let Some(Ok(phone)) = submission else {
                return;
            };
            info!("Requesting OTP for {}", phone);
            let session = session.clone();
            let client = client.clone();
            let is_mounted = is_mounted.clone();
            spawn_local(async move {
                let outcome = client.send_otp(&phone).await;
                if is_mounted() {
                    session.dispatch(SessionAction::SendOtpResolved { phone, outcome });
                }
            });
        })
    };

    let on_otp_submit = {
        let session = session.clone();
        let client = client.clone();
        let is_mounted = is_mounted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = session.otp_submission();
            session.dispatch(SessionAction::SubmitOtp);
            let Some(Ok((phone, otp))) = submission else {
                return;
            };
            let session = session.clone();
            let client = client.clone();
            let is_mounted = is_mounted.clone();
            spawn_local(async move {
                let outcome = client.verify_otp(&phone, &otp).await;
                if is_mounted() {
                    session.dispatch(SessionAction::VerifyOtpResolved { phone, outcome });
                }
            });
        })
    };

    let on_reset = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::Reset))
    };

    let error_alert = match session.error.as_ref() {
        Some(message) => html! { <div class="error-alert">{message}</div> },
        None => html! {},
    };

    let content = match &session.step {
        Step::PhoneEntry => html! {
            <div class="booking-step-content">
                <div class="step-header">
                    <div class="step-icon">{"📞"}</div>
                    <h1>{"Book a Service"}</h1>
                    <p>{"Enter your mobile number to get started"}</p>
                </div>
                <form onsubmit={on_phone_submit} class="booking-form">
                    <div class="input-group">
                        <label>{"Phone Number"}</label>
                        <div class="phone-input-wrapper">
                            <span class="country-code">{format!("🇮🇳 {}", COUNTRY_PREFIX)}</span>
                            <input
                                type="tel"
                                placeholder="Enter 10-digit number"
                                value={session.phone_input.clone()}
                                oninput={on_phone_input}
                                class="phone-input"
                                maxlength="10"
                                disabled={session.busy}
                                required={true}
                            />
                        </div>
                    </div>
                    {error_alert}
                    <button type="submit" class="btn-submit" disabled={!session.can_submit_phone()}>
                        { if session.busy { "Sending OTP..." } else { "Get OTP" } }
                        <span class="arrow">{"→"}</span>
                    </button>
                </form>
            </div>
        },
        Step::OtpEntry { phone } => html! {
            <div class="booking-step-content">
                <div class="step-header">
                    <div class="step-icon">{"🔑"}</div>
                    <h1>{"Verify Phone"}</h1>
                    <p>{format!("Enter the 6-digit OTP sent to {}", phone.international())}</p>
                </div>
                <form onsubmit={on_otp_submit} class="booking-form">
                    <div class="input-group">
                        <label>{"One-Time Password"}</label>
                        <div class="phone-input-wrapper">
                            <input
                                type="text"
                                inputmode="numeric"
                                placeholder="______"
                                value={session.otp_input.clone()}
                                oninput={on_otp_input}
                                class="phone-input otp-input"
                                maxlength="6"
                                disabled={session.busy}
                                required={true}
                            />
                        </div>
                    </div>
                    {error_alert}
                    <button type="submit" class="btn-submit" disabled={!session.can_submit_otp()}>
                        { if session.busy { "Verifying..." } else { "Verify & Continue" } }
                        <span class="arrow">{"→"}</span>
                    </button>
                </form>
                <button onclick={on_reset} class="btn-secondary">
                    {"Change Phone Number"}
                </button>
            </div>
        },
        step @ Step::DownloadPrompt { .. } => html! {
            <div class="booking-step-content">
                <div class="step-header">
                    <div class="step-icon download">{"📱"}</div>
                    <h1>{"Download LocalFix App"}</h1>
                    if step.user().is_some() {
                        <p>{"Complete your profile on mobile to start booking"}</p>
                    } else {
                        <p>{"Sign up on the LocalFix app to start booking"}</p>
                    }
                </div>
                <DownloadPanel />
                <button onclick={on_reset} class="btn-secondary">
                    {"Try Different Number"}
                </button>
            </div>
        },
        Step::ServiceBooking { phone, user } => html! {
            <div class="booking-step-content">
                <div class="step-header">
                    <h1>{format!("Welcome back, {}!", user.name)}</h1>
                    <p>{"Choose a service to book instantly"}</p>
                </div>
                <ServicesMenu phone={phone.clone()} client={(*client).clone()} />
                <button onclick={on_reset} class="btn-secondary">
                    {"Use Different Number"}
                </button>
            </div>
        },
    };

    let dots = session.step_indicator();
    let dot_label = |index: usize| {
        if dots[index] == DotState::Completed {
            "✓".to_string()
        } else {
            (index + 1).to_string()
        }
    };

    html! {
        <div class="instant-booking-page">
            <header class="booking-header">
                <div class="booking-header-content">
                    <Link<Route> to={Route::Home} classes="booking-logo">
                        <div class="booking-logo-icon">
                            <img src="/logo.png" alt="LocalFix Logo" />
                        </div>
                        <span class="booking-logo-text">{"LocalFix"}</span>
                    </Link<Route>>
                    <Link<Route> to={Route::Home} classes="back-home">
                        {"⌂"}
                    </Link<Route>>
                </div>
            </header>
            <div class="booking-main">
                <div class="booking-background"></div>
                <div class="booking-content-wrapper">
                    <div class="booking-card">
                        <div class="step-indicator">
                            <div class={dots[0].class()}>{dot_label(0)}</div>
                            <div class="step-line"></div>
                            <div class={dots[1].class()}>{dot_label(1)}</div>
                            <div class="step-line"></div>
                            <div class={dots[2].class()}>{dot_label(2)}</div>
                        </div>
                        {content}
                    </div>
                </div>
            </div>
            <style>
                {r#"
.instant-booking-page {
    min-height: 100vh;
    background: #f5f7fb;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.booking-header {
    position: sticky;
    top: 0;
    z-index: 10;
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(10px);
    border-bottom: 1px solid rgba(0, 0, 0, 0.05);
}
.booking-header-content {
    max-width: 960px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.booking-logo {
    display: flex;
    align-items: center;
    gap: 0.6rem;
    text-decoration: none;
    color: #111;
    font-weight: 700;
    font-size: 1.3rem;
}
.booking-logo-icon img {
    width: 36px;
    height: 36px;
    object-fit: contain;
}
.back-home {
    font-size: 1.5rem;
    color: #444;
    text-decoration: none;
}
.booking-main {
    position: relative;
    display: flex;
    justify-content: center;
    padding: 3rem 1rem;
}
.booking-background {
    position: absolute;
    inset: 0;
    background: radial-gradient(circle at 20% 20%, rgba(255, 122, 0, 0.15), transparent 50%),
                radial-gradient(circle at 80% 60%, rgba(30, 144, 255, 0.15), transparent 50%);
    filter: blur(40px);
    z-index: 0;
}
.booking-content-wrapper {
    position: relative;
    z-index: 1;
    width: 100%;
    max-width: 460px;
}
.booking-card {
    background: #fff;
    border-radius: 20px;
    padding: 2rem;
    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.08);
}
.step-indicator {
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 2rem;
}
.step-dot {
    width: 32px;
    height: 32px;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.85rem;
    font-weight: 600;
    background: #eceff4;
    color: #8a93a3;
}
.step-dot.active {
    background: #ff7a00;
    color: #fff;
}
.step-dot.completed {
    background: #22c55e;
    color: #fff;
}
.step-line {
    width: 48px;
    height: 2px;
    background: #eceff4;
    margin: 0 0.5rem;
}
.step-header {
    text-align: center;
    margin-bottom: 1.5rem;
}
.step-header h1 {
    font-size: 1.6rem;
    margin: 0.75rem 0 0.25rem;
}
.step-header p {
    color: #667085;
}
.step-icon {
    font-size: 2rem;
}
.booking-form {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.input-group label {
    display: block;
    font-size: 0.85rem;
    font-weight: 600;
    margin-bottom: 0.4rem;
}
.phone-input-wrapper {
    display: flex;
    align-items: center;
    border: 1px solid #d0d5dd;
    border-radius: 12px;
    overflow: hidden;
}
.country-code {
    padding: 0 0.8rem;
    color: #344054;
    border-right: 1px solid #d0d5dd;
    white-space: nowrap;
}
.phone-input {
    flex: 1;
    border: none;
    padding: 0.9rem;
    font-size: 1rem;
    outline: none;
}
.otp-input {
    letter-spacing: 0.6rem;
    text-align: center;
}
.error-alert {
    background: #fef3f2;
    color: #b42318;
    border-radius: 10px;
    padding: 0.75rem 1rem;
    font-size: 0.9rem;
}
.success-alert {
    background: #ecfdf3;
    color: #027a48;
    border-radius: 10px;
    padding: 0.6rem 0.8rem;
    font-size: 0.85rem;
}
.btn-submit {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.9rem;
    border: none;
    border-radius: 12px;
    background: #ff7a00;
    color: #fff;
    font-weight: 600;
    font-size: 1rem;
    cursor: pointer;
}
.btn-submit:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
.btn-secondary {
    width: 100%;
    margin-top: 1rem;
    padding: 0.8rem;
    border: 1px solid #d0d5dd;
    border-radius: 12px;
    background: transparent;
    cursor: pointer;
}
.download-mobile, .download-desktop {
    text-align: center;
}
.qr-container {
    display: inline-block;
    padding: 0.5rem;
    background: #fff;
    border-radius: 12px;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
}
.download-hint, .qr-hint {
    color: #667085;
    font-size: 0.85rem;
    margin-top: 0.75rem;
}
.services-list {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}
.service-item {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    align-items: center;
    gap: 0.5rem;
    padding: 0.9rem 1rem;
    border: 1px solid #eceff4;
    border-radius: 12px;
}
.service-info {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    font-weight: 600;
}
.service-emoji {
    font-size: 1.4rem;
}
.btn-book {
    padding: 0.5rem 1.2rem;
    border: none;
    border-radius: 999px;
    background: #111;
    color: #fff;
    cursor: pointer;
}
.btn-book:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
.service-item .error-alert, .service-item .success-alert {
    flex-basis: 100%;
}
                "#}
            </style>
        </div>
    }
}

#[function_component]
fn DownloadPanel() -> Html {
    let action = use_memo(|_| download_action(&BrowserDevice), ());

    match *action {
        DownloadAction::Redirect(store) => {
            let target = action.target_url();
            let onclick = Callback::from(move |_: MouseEvent| {
                if let Some(window) = window() {
                    if window.location().set_href(target).is_err() {
                        error!("Failed to open {}", store.name());
                    }
                }
            });
            html! {
                <div class="download-mobile">
                    <button {onclick} class="btn-submit btn-download">
                        {"⬇ Download App"}
                    </button>
                    <p class="download-hint">
                        {format!("You'll be redirected to the {}", store.name())}
                    </p>
                </div>
            }
        }
        DownloadAction::ShowQrCode(url) => html! {
            <div class="download-desktop">
                <div class="qr-container">
                    <QrCodeSvg value={url} size={180} />
                </div>
                <p class="qr-hint">{"Scan with your phone to download"}</p>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct QrCodeProps {
    pub value: AttrValue,
    pub size: u32,
}

#[function_component]
pub fn QrCodeSvg(props: &QrCodeProps) -> Html {
    let matrix = use_memo(|value: &AttrValue| QrMatrix::encode(value).map_err(|e| e.to_string()), props.value.clone());

    match &*matrix {
        Ok(matrix) => {
            let view = matrix.view_size();
            html! {
                <svg
                    width={props.size.to_string()}
                    height={props.size.to_string()}
                    viewBox={format!("0 0 {} {}", view, view)}
                    shape-rendering="crispEdges"
                    role="img"
                    aria-label="Download QR code"
                >
                    <rect width={view.to_string()} height={view.to_string()} fill="#ffffff" />
                    <path d={matrix.svg_path()} fill="#000000" />
                </svg>
            }
        }
        Err(e) => {
            error!("QR code render failed: {}", e);
            html! {
                <a href={props.value.clone()} class="download-hint">{props.value.clone()}</a>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct ServicesMenuProps {
    phone: PhoneNumber,
    client: BookingClient,
}

#[function_component]
fn ServicesMenu(props: &ServicesMenuProps) -> Html {
    let board = use_reducer(BookingBoard::default);
    let is_mounted = use_is_mounted();

    let on_book = {
        let board = board.clone();
        let phone = props.phone.clone();
        let client = props.client.clone();
        Callback::from(move |service: ServiceKind| {
            if board.is_in_flight(service) {
                return;
            }
            board.dispatch(BoardAction::Started(service));
            let board = board.clone();
            let phone = phone.clone();
            let client = client.clone();
            let is_mounted = is_mounted.clone();
            spawn_local(async move {
                let outcome = client.create_instant_booking(&phone, service).await;
                if is_mounted() {
                    board.dispatch(BoardAction::Resolved(service, outcome));
                }
            });
        })
    };

    html! {
        <div class="services-list">
            { ServiceKind::ALL.iter().map(|&service| html! {
                <ServiceCard
                    key={service.title()}
                    {service}
                    status={board.status(service)}
                    on_book={on_book.clone()}
                />
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: ServiceKind,
    status: BookingStatus,
    on_book: Callback<ServiceKind>,
}

#[function_component]
fn ServiceCard(props: &ServiceCardProps) -> Html {
    let in_flight = props.status == BookingStatus::InFlight;
    let onclick = {
        let on_book = props.on_book.clone();
        let service = props.service;
        Callback::from(move |_: MouseEvent| on_book.emit(service))
    };
    let notice = match (&props.status, props.status.message()) {
        (BookingStatus::Confirmed(_), Some(message)) => {
            html! { <div class="success-alert">{format!("✅ {}", message)}</div> }
        }
        (_, Some(message)) => html! { <div class="error-alert">{format!("❌ {}", message)}</div> },
        (_, None) => html! {},
    };

    html! {
        <div class="service-item">
            <div class="service-info">
                <span class="service-emoji">{props.service.icon()}</span>
                <span class="service-name">{props.service.title()}</span>
            </div>
            <button {onclick} class="btn-book" disabled={in_flight}>
                { if in_flight { "Booking..." } else { "Book" } }
            </button>
            {notice}
        </div>
    }
}
