use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod booking {
    pub mod api;
    pub mod device;
    pub mod qr;
    pub mod services;
    pub mod session;
}
mod components {
    pub mod app_showcase;
    pub mod layout;
}
mod pages {
    pub mod instant_booking;
    pub mod landing;
    pub mod termsprivacy;
}
mod admin {
    pub mod settings;
}

use pages::{
    instant_booking::InstantBooking,
    landing::Landing,
    termsprivacy::{PrivacyPolicy, TermsOfService},
};
use admin::settings::AdminSettings;
use components::layout::Layout;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/book")]
    Book,
    #[at("/privacy-policy")]
    Privacy,
    #[at("/terms-of-service")]
    Terms,
    #[at("/admin/settings")]
    AdminSettings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Book => {
            info!("Rendering Instant Booking page");
            html! { <InstantBooking /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::AdminSettings => {
            info!("Rendering Admin Settings page");
            html! { <AdminSettings /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn NotFound() -> Html {
    html! {
        <Layout>
            <div class="container" style="padding: 6rem 1.5rem; text-align: center;">
                <h1>{"Page not found"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Back to Home"}
                </Link<Route>>
            </div>
        </Layout>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(Route::Book.to_path(), "/book");
        assert_eq!(Route::Privacy.to_path(), "/privacy-policy");
        assert_eq!(Route::Terms.to_path(), "/terms-of-service");
        assert_eq!(Route::AdminSettings.to_path(), "/admin/settings");
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert!(Route::recognize("/book") == Some(Route::Book));
        assert!(Route::recognize("/does-not-exist") == Some(Route::NotFound));
    }
}
