use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::app_showcase::AppShowcase;
use crate::components::layout::{SiteFooter, SiteStyles};

const HERO_TEXT_SPEED: f64 = 0.3;
const HERO_IMAGE_SPEED: f64 = -0.2;
const HEADER_SHADOW_AFTER: f64 = 20.0;

/// Inline transform that moves an element at `speed` times the page scroll.
pub fn parallax_style(scroll_y: f64, speed: f64) -> String {
    format!(
        "transform: translateY({:.1}px); transition: transform 0.1s ease-out;",
        scroll_y * speed
    )
}

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🛡️",
        title: "Verified Pros",
        text: "Every provider is vetted and background checked for your safety and peace of mind.",
    },
    Feature {
        icon: "📍",
        title: "Local Talent",
        text: "Support your community by hiring skilled neighbors near you for quick assistance.",
    },
    Feature {
        icon: "⭐",
        title: "Top Rated",
        text: "See real reviews and ratings before you book to ensure quality service.",
    },
];

const STEPS: &[(&str, &str, &str)] = &[
    ("01", "Choose a Service", "Select from a wide range of services offered by local professionals."),
    ("02", "Book Instantly", "Schedule a time that works for you with upfront pricing."),
    ("03", "Relax & Pay", "Get the job done and pay securely through the app."),
];

const STATS: &[(&str, &str)] = &[
    ("5k+", "Active Providers"),
    ("20k+", "Jobs Completed"),
    ("4.8", "Average Rating"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    use_title("LocalFix | Home & Business Services".to_string());
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let nav_class = if *menu_open { "nav mobile-menu-open" } else { "nav" };

    html! {
        <div class="app">
            <SiteStyles />
            <header class={classes!("header", (scroll_y > HEADER_SHADOW_AFTER).then(|| "scrolled"))}>
                <div class="container header-content">
                    <div class="logo">
                        <div class="logo-icon">
                            <img src="/logo.png" alt="LocalFix Logo" style="width: 45px; height: 45px; object-fit: contain;" />
                        </div>
                        <span class="logo-text">{"LocalFix™"}</span>
                    </div>
                    <button class="mobile-menu-btn" aria-label="Menu" onclick={toggle_menu}>
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                    <nav class={nav_class} onclick={close_menu}>
                        <a href="#features">{"Features"}</a>
                        <a href="#how-it-works">{"How it Works"}</a>
                        <a href="#" class="btn btn-outline-sm">{"Join as Provider"}</a>
                        <Link<Route> to={Route::Book} classes="btn btn-primary">
                            {"⚡ Instant Booking"}
                        </Link<Route>>
                    </nav>
                </div>
            </header>

            <section class="hero">
                <div class="container hero-content">
                    <div class="hero-text" style={parallax_style(scroll_y, HERO_TEXT_SPEED)}>
                        <h1>{"India’s #1 App for "}<span class="highlight">{"Home & Business"}</span></h1>
                        <p>{"One stop solution for all your residential and commercial maintenance needs. Trusted professionals, instant booking."}</p>
                        <div class="sector-icons">
                            <div class="sector-item" title="Home">{"🏠"}</div>
                            <div class="sector-item" title="Office">{"💼"}</div>
                            <div class="sector-item" title="Store">{"🏪"}</div>
                        </div>
                        <div class="hero-btns">
                            <Link<Route> to={Route::Book} classes="btn btn-primary">
                                {"⬇ Download App"}
                            </Link<Route>>
                        </div>
                    </div>
                    <div class="hero-image" style={parallax_style(scroll_y, HERO_IMAGE_SPEED)}>
                        <div class="phone-mockup">
                            <div class="screen">
                                <img src="/screen-home.png" alt="LocalFix App Home" class="app-screen-img" />
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section id="features" class="features">
                <div class="container">
                    <div class="section-header">
                        <span class="badge">{"Features"}</span>
                        <h2 class="section-title">{"Why Choose LocalFix?"}</h2>
                    </div>
                    <div class="feature-grid">
                        { FEATURES.iter().map(|feature| html! {
                            <div class="feature-card" key={feature.title}>
                                <div class="icon-box">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.text}</p>
                            </div>
                        }).collect::<Html>() }
                    </div>
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <div class="container">
                    <div class="section-header">
                        <span class="badge">{"Workflow"}</span>
                        <h2 class="section-title">{"How it Works"}</h2>
                    </div>
                    <div class="steps-grid">
                        { STEPS.iter().map(|(number, title, text)| html! {
                            <div class="step-card" key={*number}>
                                <div class="step-number">{*number}</div>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }).collect::<Html>() }
                    </div>
                </div>
            </section>

            <AppShowcase />

            <section class="stats-section">
                <div class="container">
                    { for STATS.iter().enumerate().map(|(i, (number, label))| html! {
                        <>
                            if i > 0 {
                                <div class="stat-divider"></div>
                            }
                            <div class="stat-item">
                                <div class="stat-number">{*number}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        </>
                    }) }
                </div>
            </section>

            <SiteFooter />

            <style>
                {r#"
.hero {
    padding: 6rem 0 4rem;
    background: linear-gradient(180deg, #fff7ef 0%, #ffffff 100%);
    overflow: hidden;
}
.hero-content {
    display: flex;
    align-items: center;
    gap: 3rem;
}
.hero-text {
    flex: 1.2;
}
.hero-text h1 {
    font-size: 3rem;
    line-height: 1.15;
    margin-bottom: 1rem;
}
.highlight {
    color: var(--primary);
}
.hero-text p {
    color: var(--muted);
    font-size: 1.15rem;
    line-height: 1.7;
}
.sector-icons {
    display: flex;
    gap: 1rem;
    margin: 1.5rem 0;
}
.sector-item {
    width: 48px;
    height: 48px;
    border-radius: 14px;
    background: #fff;
    box-shadow: 0 6px 16px rgba(0, 0, 0, 0.06);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.3rem;
}
.hero-image {
    flex: 1;
    display: flex;
    justify-content: center;
}
.phone-mockup {
    width: 260px;
    padding: 12px;
    border-radius: 40px;
    background: #111;
    box-shadow: 0 30px 60px rgba(0, 0, 0, 0.2);
}
.phone-mockup .screen {
    border-radius: 30px;
    overflow: hidden;
}
.app-screen-img {
    width: 100%;
    display: block;
}
.features, .how-it-works {
    padding: 5rem 0;
}
.how-it-works {
    background: #f8fafc;
}
.section-header {
    text-align: center;
    margin-bottom: 3rem;
}
.badge {
    display: inline-block;
    padding: 0.3rem 0.9rem;
    border-radius: 999px;
    background: rgba(255, 122, 0, 0.1);
    color: var(--primary);
    font-weight: 600;
    font-size: 0.8rem;
}
.section-title {
    font-size: 2.2rem;
    margin-top: 0.75rem;
}
.feature-grid, .steps-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.5rem;
}
.feature-card, .step-card {
    background: #fff;
    border-radius: 20px;
    padding: 2rem;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.05);
}
.icon-box {
    font-size: 2rem;
    margin-bottom: 1rem;
}
.feature-card p, .step-card p {
    color: var(--muted);
    line-height: 1.6;
}
.step-number {
    font-size: 2.5rem;
    font-weight: 800;
    color: rgba(255, 122, 0, 0.3);
}
.stats-section {
    padding: 4rem 0;
    background: var(--primary);
    color: #fff;
}
.stats-section .container {
    display: flex;
    justify-content: space-around;
    align-items: center;
}
.stat-item {
    text-align: center;
}
.stat-number {
    font-size: 2.5rem;
    font-weight: 800;
}
.stat-divider {
    width: 1px;
    height: 60px;
    background: rgba(255, 255, 255, 0.4);
}
@media (max-width: 768px) {
    .hero-content {
        flex-direction: column;
    }
    .hero-text h1 {
        font-size: 2.2rem;
    }
    .stats-section .container {
        flex-direction: column;
        gap: 2rem;
    }
    .stat-divider {
        display: none;
    }
}
                "#}
            </style>
        </div>
    }
}
