use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod animator;
mod motion {
    pub mod math;
    pub mod progress;
    pub mod layers;
    pub mod phrases;
    pub mod scene;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{
    home::Home,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    // `is-scrolled` is toggled by the scroll animator, not by this component
    html! {
        <nav class="nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"studio"}
                </Link<Route>>
                <div class="nav-right">
                    <a href="#story" class="nav-link">{"Approach"}</a>
                    <a href="#work" class="nav-link">{"Work"}</a>
                    <a href="#process" class="nav-link">{"Process"}</a>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
