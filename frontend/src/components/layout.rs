use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Header and footer around the secondary pages.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="app">
            <SiteStyles />
            <header class="header">
                <div class="container header-content">
                    <Link<Route> to={Route::Home} classes="logo">
                        <div class="logo-icon">
                            <img src="/logo.png" alt="LocalFix Logo" style="width: 45px; height: 45px; object-fit: contain;" />
                        </div>
                        <span class="logo-text">{"LocalFix"}</span>
                    </Link<Route>>
                    <nav class="nav">
                        <a href="/#features">{"Features"}</a>
                        <a href="/#how-it-works">{"How it Works"}</a>
                        <a href="#" class="btn btn-outline-sm">{"Join as Provider"}</a>
                        <Link<Route> to={Route::Book} classes="btn btn-primary">
                            {"Get the App"}
                        </Link<Route>>
                    </nav>
                </div>
            </header>
            <main>
                { for props.children.iter() }
            </main>
            <SiteFooter />
        </div>
    }
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container footer-content">
                <div class="footer-col brand-col">
                    <div class="logo">
                        <div class="logo-icon">
                            <img src="/logo.png" alt="LocalFix Logo" style="width: 29px; height: 29px; object-fit: contain;" />
                        </div>
                        <span class="logo-text">{"LocalFix™"}</span>
                    </div>
                    <p>{"Connecting you with the best local professionals for all your home service needs."}</p>
                </div>

                <div class="footer-col">
                    <h4>{"Company"}</h4>
                    <a href="#">{"About Us"}</a>
                    <a href="#">{"Careers"}</a>
                    <a href="#">{"Blog"}</a>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{"Contact"}</a>
                </div>

                <div class="footer-col">
                    <h4>{"Services"}</h4>
                    <a href="#">{"Plumbing"}</a>
                    <a href="#">{"Electrical"}</a>
                    <a href="#">{"Cleaning"}</a>
                    <a href="#">{"Painting"}</a>
                </div>

                <div class="footer-col">
                    <h4>{"For Professionals"}</h4>
                    <p>{"Grow your business with LocalFix."}</p>
                    <a href="#" class="btn btn-primary footer-btn">{"Download Provider App"}</a>
                </div>

                <div class="footer-col">
                    <h4>{"Need Help?"}</h4>
                    <p>{"We are here for you 24/7."}</p>
                    <a href={format!("mailto:{}", config::SUPPORT_EMAIL)}>{config::SUPPORT_EMAIL}</a>
                </div>
            </div>
            <div class="container footer-bottom">
                <p>{"© 2026 LocalFix. All rights reserved."}</p>
                <div class="social-links">
                    <a href="https://instagram.com" target="_blank" rel="noopener noreferrer" aria-label="Instagram">{"Instagram"}</a>
                    <a href="https://facebook.com" target="_blank" rel="noopener noreferrer" aria-label="Facebook">{"Facebook"}</a>
                    <a href="https://twitter.com" target="_blank" rel="noopener noreferrer" aria-label="Twitter">{"Twitter"}</a>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                </div>
            </div>
        </footer>
    }
}

/// Styles shared by every marketing page.
#[function_component(SiteStyles)]
pub fn site_styles() -> Html {
    html! {
        <style>
            {r#"
:root {
    --primary: #ff7a00;
    --text: #101828;
    --muted: #667085;
}
.app {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: var(--text);
}
.container {
    max-width: 1140px;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.7rem 1.4rem;
    border-radius: 999px;
    font-weight: 600;
    text-decoration: none;
    border: none;
    cursor: pointer;
}
.btn-primary {
    background: var(--primary);
    color: #fff;
}
.btn-outline-sm {
    border: 1px solid var(--primary);
    color: var(--primary);
    padding: 0.5rem 1rem;
}
.header {
    position: sticky;
    top: 0;
    z-index: 100;
    background: rgba(255, 255, 255, 0.85);
    backdrop-filter: blur(12px);
    transition: box-shadow 0.3s ease;
}
.header.scrolled {
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
}
.header-content {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 72px;
}
.logo {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    text-decoration: none;
    color: var(--text);
}
.logo-text {
    font-size: 1.4rem;
    font-weight: 800;
}
.nav {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}
.nav a {
    color: var(--text);
    text-decoration: none;
    font-weight: 500;
}
.nav a.btn-primary {
    color: #fff;
}
.mobile-menu-btn {
    display: none;
    background: none;
    border: none;
    flex-direction: column;
    gap: 4px;
    cursor: pointer;
}
.mobile-menu-btn .bar {
    width: 24px;
    height: 2px;
    background: var(--text);
}
.footer {
    background: #0b1220;
    color: #cbd5e1;
    padding: 4rem 0 2rem;
}
.footer-content {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
    gap: 2rem;
}
.footer-col h4 {
    color: #fff;
    margin-bottom: 1rem;
}
.footer-col a {
    display: block;
    color: #94a3b8;
    text-decoration: none;
    margin-bottom: 0.5rem;
}
.footer-col .logo {
    color: #fff;
}
.footer-col a.footer-btn {
    display: inline-flex;
    color: #fff;
}
.footer-bottom {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
    margin-top: 3rem;
    padding-top: 1.5rem;
    border-top: 1px solid rgba(255, 255, 255, 0.08);
}
.social-links, .footer-links {
    display: flex;
    gap: 1rem;
}
.social-links a, .footer-links a {
    color: #94a3b8;
    text-decoration: none;
}
@media (max-width: 768px) {
    .nav {
        display: none;
    }
    .mobile-menu-btn {
        display: flex;
    }
    .nav.mobile-menu-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 72px;
        left: 0;
        right: 0;
        background: #fff;
        padding: 1.5rem;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
    }
}
            "#}
        </style>
    }
}
