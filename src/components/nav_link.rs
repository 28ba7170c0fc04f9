use leptos::prelude::*;
use crate::location::{navigate, Route};

/// Anchor that switches pages without a reload
#[component]
pub fn NavLink(
    route: Route,
    set_route: WriteSignal<Route>,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let href = route.href();

    view! {
        <a
            href=href
            class=class
            on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                navigate(set_route, route.clone());
            }
        >
            {children()}
        </a>
    }
}
