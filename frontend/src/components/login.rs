use crate::auth::use_app;
use crate::components::Link;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let is_loading = move || app.session.with(|s| s.loading);
    let error_msg = move || app.session.with(|s| s.error.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        app.login(email.get_untracked(), password.get_untracked());
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"mycc"</h1>
                    <p class="text-base-content/70">"Sign in to continue"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=is_loading>
                                {move || if is_loading() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>
                        <div class="flex justify-between text-sm mt-2">
                            <Link to="/auth/register">"Create an account"</Link>
                            <Link to="/auth/reset-password">"Forgot password?"</Link>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let app = use_app();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());

    let is_loading = move || app.session.with(|s| s.loading);
    let error_msg = move || app.session.with(|s| s.error.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        app.register(
            name.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
            confirmation.get_untracked(),
        );
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold mb-4">"Create an account"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        {text_field("name", "Name", "text", name, set_name)}
                        {text_field("email", "Email", "email", email, set_email)}
                        {text_field("password", "Password", "password", password, set_password)}
                        {text_field("password_confirmation", "Confirm password", "password", confirmation, set_confirmation)}

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=is_loading>"Register"</button>
                        </div>
                        <div class="text-sm mt-2">
                            <Link to="/auth/login">"Already have an account?"</Link>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

/// 找回密码页面，仅占位
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col text-center">
                <h1 class="text-3xl font-bold">"Reset password"</h1>
                <p class="text-base-content/70">"Contact your administrator to reset your password."</p>
                <Link to="/auth/login">"Back to sign in"</Link>
            </div>
        </div>
    }
}

fn text_field(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    value: ReadSignal<String>,
    set: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=kind
                on:input=move |ev| set.set(event_target_value(&ev))
                prop:value=value
                class="input input-bordered"
            />
        </div>
    }
}
