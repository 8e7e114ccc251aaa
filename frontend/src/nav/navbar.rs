use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{window, Event, MouseEvent, Node, StorageEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::avatar::Avatar;
use crate::nav::listener::Subscription;
use crate::nav::state::{NavAction, NavState};
use crate::session::context::use_session_store;
use crate::session::store::{affects_session, read_session, sign_out, SessionStore};
use crate::Route;

/// Drop the stored credentials and send the user to the landing page.
pub fn sign_out_and_leave(store: &dyn SessionStore, navigate: impl FnOnce(Route)) {
    sign_out(store);
    navigate(Route::Home);
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let store = use_session_store();
    let state = {
        let store = store.clone();
        use_reducer(move || NavState::new(read_session(&*store)))
    };
    let root = use_node_ref();
    let navigator = use_navigator();

    // Other tabs signing in or out.
    {
        let dispatcher = state.dispatcher();
        let store = store.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = window().and_then(|w| {
                    Subscription::new(&w, "storage", move |e: Event| {
                        let key = e.dyn_ref::<StorageEvent>().and_then(|se| se.key());
                        if affects_session(key.as_deref()) {
                            debug!("Session storage changed, reloading");
                            dispatcher.dispatch(NavAction::SessionLoaded(read_session(&*store)));
                        }
                    })
                });
                move || drop(subscription)
            },
            (),
        );
    }

    // Click-away for the user menu.
    {
        let dispatcher = state.dispatcher();
        let root = root.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = window().and_then(|w| w.document()).and_then(|document| {
                    Subscription::new(&document, "pointerdown", move |e: Event| {
                        let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                        let inside = match (root.get(), target) {
                            (Some(root), Some(target)) => root.contains(Some(&target)),
                            _ => false,
                        };
                        dispatcher.dispatch(NavAction::PointerDown { inside });
                    })
                });
                move || drop(subscription)
            },
            (),
        );
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let subscription = window().and_then(|w| {
                    dispatcher.dispatch(NavAction::Scrolled(w.scroll_y().unwrap_or(0.0)));
                    let win = w.clone();
                    Subscription::new(&w, "scroll", move |_: Event| {
                        dispatcher.dispatch(NavAction::Scrolled(win.scroll_y().unwrap_or(0.0)));
                    })
                });
                move || drop(subscription)
            },
            (),
        );
    }

    let toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(NavAction::ToggleMenu);
        })
    };

    let toggle_mobile = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleMobile))
    };

    let close_mobile = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::CloseMobile))
    };

    let open_profile = {
        let dispatcher = state.dispatcher();
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(NavAction::CloseMenu);
            dispatcher.dispatch(NavAction::CloseMobile);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Profile);
            }
        })
    };

    let on_sign_out = {
        let dispatcher = state.dispatcher();
        let navigator = navigator.clone();
        let store = store.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            // storage events don't fire in the tab that made the change
            dispatcher.dispatch(NavAction::SessionLoaded(None));
            dispatcher.dispatch(NavAction::CloseMobile);
            sign_out_and_leave(&*store, |route| {
                info!("Redirecting to {}", route.to_path());
                if let Some(navigator) = &navigator {
                    navigator.push(&route);
                }
            });
        })
    };

    let session_area = match &state.session {
        Some(session) => html! {
            <div class="user-menu">
                <button
                    class="user-trigger"
                    onclick={toggle_menu}
                    aria-haspopup="true"
                    aria-expanded={state.menu_open.to_string()}
                >
                    <Avatar
                        src={session.avatar_src().to_string()}
                        alt={format!("Foto de {}", session.display_name())}
                        class={classes!("user-avatar")}
                    />
                    <span class="user-name">{session.display_name()}</span>
                </button>
                {
                    if state.menu_open {
                        html! {
                            <div class="user-dropdown" role="menu">
                                <button class="dropdown-item" role="menuitem" onclick={open_profile}>
                                    {"Mi perfil"}
                                </button>
                                <button class="dropdown-item logout" role="menuitem" onclick={on_sign_out}>
                                    {"Cerrar sesión"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        },
        None => html! {
            <a href="#contacto" class="nav-cta" onclick={close_mobile.clone()}>
                {"Solicitar demo"}
            </a>
        },
    };

    html! {
        <nav ref={root} class={classes!("top-nav", state.scrolled.then(|| "scrolled"), state.signed_in().then(|| "signed-in"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"TecCreate"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_mobile} aria-label="Abrir menú">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", state.mobile_open.then(|| "mobile-menu-open"))}>
                    <a href="#features" class="nav-link" onclick={close_mobile.clone()}>{"Funciones"}</a>
                    <a href="#como-funciona" class="nav-link" onclick={close_mobile.clone()}>{"Cómo funciona"}</a>
                    <a href="#contacto" class="nav-link" onclick={close_mobile}>{"Contacto"}</a>
                    { session_area }
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1rem 2rem;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(15, 23, 42, 0.95);
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.25);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.85);
                        text-decoration: none;
                    }
                    .nav-link:hover {
                        color: #38bdf8;
                    }
                    .nav-cta {
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        background: linear-gradient(45deg, #2563eb, #38bdf8);
                        color: #fff;
                        text-decoration: none;
                    }
                    .user-menu {
                        position: relative;
                    }
                    .user-trigger {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .user-avatar {
                        width: 36px;
                        height: 36px;
                        border-radius: 50%;
                        object-fit: cover;
                    }
                    .user-dropdown {
                        position: absolute;
                        right: 0;
                        top: calc(100% + 0.5rem);
                        min-width: 180px;
                        display: flex;
                        flex-direction: column;
                        background: #0f172a;
                        border: 1px solid rgba(56, 189, 248, 0.2);
                        border-radius: 12px;
                        overflow: hidden;
                    }
                    .dropdown-item {
                        padding: 0.75rem 1rem;
                        background: none;
                        border: none;
                        color: #e2e8f0;
                        text-align: left;
                        cursor: pointer;
                    }
                    .dropdown-item:hover {
                        background: rgba(56, 189, 248, 0.1);
                    }
                    .dropdown-item.logout {
                        color: #f87171;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1.5rem;
                            background: rgba(15, 23, 42, 0.98);
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
