use crate::auth::use_app;
use leptos::prelude::*;
use mycc::AppRoute;

const NAV_ITEMS: [(&str, AppRoute); 4] = [
    ("Dashboard", AppRoute::Dashboard),
    ("Orders", AppRoute::Orders),
    ("Clients", AppRoute::Clients),
    ("Users", AppRoute::Users),
];

/// 控制面板外壳：导航栏 + 子页面出口
#[component]
pub fn DashboardLayout(page: AppRoute) -> impl IntoView {
    let app = use_app();

    let user_name = move || {
        app.session.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| u.get("name"))
                .and_then(|n| n.as_str())
                .map(str::to_string)
        })
    };
    let is_loading = move || app.session.with(|s| s.loading);
    let error_msg = move || app.session.with(|s| s.error.clone());

    let nav_links = NAV_ITEMS
        .iter()
        .map(|&(name, route)| {
            let class = if route == page {
                "btn btn-ghost btn-sm btn-active"
            } else {
                "btn btn-ghost btn-sm"
            };
            view! {
                <a href=route.to_path() class=class on:click=move |ev| {
                    ev.prevent_default();
                    app.navigate_named(name);
                }>
                    {name}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <div class="navbar bg-base-100 shadow-sm px-4">
                <div class="flex-1 gap-2">
                    <span class="text-xl font-bold mr-4">"mycc"</span>
                    {nav_links}
                </div>
                <div class="flex-none gap-3">
                    <span class="text-sm text-base-content/70">{user_name}</span>
                    <button
                        class="btn btn-outline btn-sm"
                        disabled=is_loading
                        on:click=move |_| app.logout()
                    >
                        "Logout"
                    </button>
                </div>
            </div>

            <Show when=move || error_msg().is_some()>
                <div role="alert" class="alert alert-error rounded-none">
                    <span>{move || error_msg().unwrap_or_default()}</span>
                </div>
            </Show>

            <main class="max-w-7xl mx-auto p-4 md:p-8">
                <DashboardPage page=page />
            </main>
        </div>
    }
}

/// 业务页面不在本客户端的范围内，这里只渲染标题
#[component]
fn DashboardPage(page: AppRoute) -> impl IntoView {
    let title = NAV_ITEMS
        .iter()
        .find(|(_, route)| *route == page)
        .map(|(name, _)| *name)
        .unwrap_or("Dashboard");

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{title}</h2>
            </div>
        </div>
    }
}
