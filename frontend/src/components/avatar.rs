use yew::prelude::*;

use crate::session::record::avatar_fallback;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub src: String,
    pub alt: String,
    #[prop_or_default]
    pub class: Classes,
}

/// Profile picture that swaps itself for the placeholder when it fails to load.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let fallback = use_state(|| None::<&'static str>);

    // A new session may come with a working picture again.
    {
        let fallback = fallback.clone();
        use_effect_with_deps(
            move |_| {
                fallback.set(None);
                || ()
            },
            props.src.clone(),
        );
    }

    let src = (*fallback).unwrap_or(props.src.as_str()).to_string();

    let onerror = {
        let fallback = fallback.clone();
        let failed = src.clone();
        Callback::from(move |_: Event| {
            if let Some(placeholder) = avatar_fallback(&failed) {
                gloo_console::warn!("Avatar failed to load, using placeholder:", failed.clone());
                fallback.set(Some(placeholder));
            }
        })
    };

    html! {
        <img
            src={src}
            alt={props.alt.clone()}
            class={classes!("avatar", props.class.clone())}
            referrerpolicy="no-referrer"
            onerror={onerror}
        />
    }
}
