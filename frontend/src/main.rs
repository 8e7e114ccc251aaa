use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod session {
    pub mod context;
    pub mod record;
    pub mod store;
}
mod nav {
    pub mod listener;
    pub mod navbar;
    pub mod state;
}
mod components {
    pub mod avatar;
    pub mod features;
    pub mod footer;
    pub mod hero;
}
mod pages {
    pub mod landing;
    pub mod not_found;
    pub mod profile;
}

use nav::navbar::Navbar;
use session::context::StoreHandle;
use session::store::BrowserStore;
use pages::{landing::Landing, not_found::NotFound, profile::Profile};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/perfil")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Profile => {
            info!("Rendering Profile page");
            html! { <Profile /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let store = use_state(|| StoreHandle::new(BrowserStore));

    html! {
        <ContextProvider<StoreHandle> context={(*store).clone()}>
            <BrowserRouter>
                <Navbar />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<StoreHandle>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
