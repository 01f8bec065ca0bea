use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod hooks;
mod cta {
    pub mod clock;
    pub mod controller;
    pub mod sequence;
}
mod components {
    pub mod floating_cta;
    pub mod navbar;
    pub mod popups;
}
mod pages {
    pub mod consultation;
    pub mod destinations;
    pub mod home;
    pub mod placeholder;
    pub mod treatments;
}

use components::navbar::Navbar;
use pages::{
    consultation::Consultation,
    destinations::Destinations,
    home::Home,
    placeholder::{ComingSoon, NotFound},
    treatments::Treatments,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/consultation")]
    Consultation,
    #[at("/destinations")]
    Destinations,
    #[at("/treatments")]
    Treatments,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/blogs")]
    Blogs,
    #[at("/questionnaire")]
    Questionnaire,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Consultation => {
            info!("Rendering Consultation page");
            html! { <Consultation /> }
        }
        Route::Destinations => {
            info!("Rendering Destinations page");
            html! { <Destinations /> }
        }
        Route::Treatments => {
            info!("Rendering Treatments page");
            html! { <Treatments /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <ComingSoon title="About Us" /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ComingSoon title="Booking & Contact" /> }
        }
        Route::Blogs => {
            info!("Rendering Blogs page");
            html! { <ComingSoon title="Blog" /> }
        }
        Route::Questionnaire => {
            info!("Rendering Questionnaire page");
            html! { <ComingSoon title="Is Ayurveda for me?" /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
