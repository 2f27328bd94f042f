use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod carousel;
mod config;
mod observer;
mod scroll;
mod components {
    pub mod footer;
    pub mod lazy_image;
    pub mod modal;
    pub mod nav;
    pub mod reveal;
    pub mod scroll_top;
    pub mod slider;
    pub mod tabs;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to Bankist"}</Link<Route>>
                </div>
            }
        },
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
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", err.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
