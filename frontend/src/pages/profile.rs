use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, StorageEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::avatar::Avatar;
use crate::nav::listener::Subscription;
use crate::session::context::use_session_store;
use crate::session::store::{affects_session, read_session};
use crate::Route;

#[function_component(Profile)]
pub fn profile() -> Html {
    let store = use_session_store();
    let session = {
        let store = store.clone();
        use_state(move || read_session(&*store))
    };

    // Sign-outs in another tab
    {
        let setter = session.setter();
        use_effect_with_deps(
            move |_| {
                let subscription = window().and_then(|w| {
                    Subscription::new(&w, "storage", move |e: Event| {
                        let key = e.dyn_ref::<StorageEvent>().and_then(|se| se.key());
                        if affects_session(key.as_deref()) {
                            debug!("Session storage changed, refreshing profile");
                            setter.set(read_session(&*store));
                        }
                    })
                });
                move || drop(subscription)
            },
            (),
        );
    }

    let body = match &*session {
        Some(session) => html! {
            <>
                <Avatar
                    src={session.avatar_src().to_string()}
                    alt={format!("Foto de {}", session.display_name())}
                    class={classes!("profile-avatar")}
                />
                <h1>{&session.name}</h1>
                <p>{"Tus presentaciones aparecerán aquí."}</p>
            </>
        },
        None => html! {
            <>
                <h1>{"No has iniciado sesión"}</h1>
                <Link<Route> to={Route::Home} classes="hero-cta">{"Volver al inicio"}</Link<Route>>
            </>
        },
    };

    html! {
        <div class="profile-page">
            <div class="profile-card">
                { body }
            </div>
            <style>
                {r#"
                    .profile-page {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 8rem 2rem 4rem;
                        background: #0f172a;
                    }
                    .profile-card {
                        padding: 3rem;
                        max-width: 480px;
                        width: 100%;
                        text-align: center;
                        color: #e2e8f0;
                        background: rgba(30, 41, 59, 0.7);
                        border: 1px solid rgba(56, 189, 248, 0.1);
                        border-radius: 16px;
                    }
                    .profile-avatar {
                        width: 96px;
                        height: 96px;
                        border-radius: 50%;
                        object-fit: cover;
                    }
                "#}
            </style>
        </div>
    }
}
