//! mycc 前端应用
//!
//! 核心逻辑（会话、路由表、守卫）都在 `mycc` 库中，这里只做两件事：
//! - `web`: 把浏览器 API 接入核心库
//! - `auth` / `components`: 把核心库的状态渲染出来

mod auth;
mod components;
pub(crate) mod web;

use crate::auth::provide_app_state;
use crate::components::dashboard::DashboardLayout;
use crate::components::login::{LoginPage, RegisterPage, ResetPasswordPage};

use leptos::prelude::*;
use mycc::{AppRoute, Navigation, View};

/// 路由匹配函数
///
/// 根据导航结果的视图链返回对应的视图组件。
fn route_matcher(nav: &Navigation) -> AnyView {
    let route = nav.route();
    if nav.resolved.views.first() == Some(&View::DashboardLayout) {
        return view! { <DashboardLayout page=route /> }.into_any();
    }

    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::ResetPassword => view! { <ResetPasswordPage /> }.into_any(),
        _ => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 装配核心库并完成首次导航
    let app = provide_app_state();

    move || {
        app.navigation
            .with(|nav| nav.as_ref().map(route_matcher))
            .unwrap_or_else(|| ().into_any())
    }
}
