pub mod dashboard;
pub mod login;

use crate::auth::use_app;
use leptos::prelude::*;

/// 经过路由守卫的站内链接
#[component]
pub fn Link(
    /// 目标路径
    to: &'static str,
    children: Children,
) -> impl IntoView {
    let app = use_app();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        app.navigate(to);
    };

    view! {
        <a href=to class="link link-hover" on:click=on_click>
            {children()}
        </a>
    }
}
