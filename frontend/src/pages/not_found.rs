use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 2rem; background: #0f172a; color: #e2e8f0;">
            <div style="text-align: center;">
                <h1>{"404"}</h1>
                <p>{"Esta página no existe."}</p>
                <Link<Route> to={Route::Home} classes="hero-cta">{"Volver al inicio"}</Link<Route>>
            </div>
        </div>
    }
}
