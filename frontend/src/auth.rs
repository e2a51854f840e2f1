//! 应用状态模块
//!
//! 持有核心库的 `SessionContext`，并把会话状态和当前导航镜像为 Leptos 信号。
//! 组件只读取信号，所有写操作都经过核心库。

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use mycc::context::AuthStore;
use mycc::{ClientConfig, Navigation, Session, SessionContext};

use crate::web::{self, BrowserStorage, FetchHttpClient};

pub type AppContext = SessionContext<FetchHttpClient, BrowserStorage>;

/// 应用上下文
///
/// `Copy`，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AppState {
    ctx: StoredValue<AppContext, LocalStorage>,
    /// 会话状态（只读镜像）
    pub session: ReadSignal<Session>,
    /// 当前导航（首次导航完成前为 None）
    pub navigation: ReadSignal<Option<Navigation>>,
}

/// 创建并提供应用上下文
///
/// 构建时可通过 `MYCC_API_BASE_URL` 覆盖 API 地址。
pub fn provide_app_state() -> AppState {
    let config = ClientConfig::resolve(option_env!("MYCC_API_BASE_URL"));
    let ctx = mycc::bootstrap(config, FetchHttpClient, BrowserStorage);

    let (session, set_session) = signal(ctx.session().snapshot());
    let (navigation, set_navigation) = signal(None::<Navigation>);

    ctx.session().subscribe(move |s| set_session.set(s.clone()));
    ctx.router()
        .subscribe(move |nav| set_navigation.set(Some(nav.clone())));
    web::attach_history(ctx.router());

    if let Err(e) = ctx.start(&web::current_path()) {
        tracing::error!(error = %e, "initial navigation failed");
    }

    let state = AppState {
        ctx: StoredValue::new_local(ctx),
        session,
        navigation,
    };
    provide_context(state);
    state
}

/// 从 Context 获取应用上下文
pub fn use_app() -> AppState {
    use_context::<AppState>().expect("AppState should be provided")
}

impl AppState {
    fn auth(&self) -> Rc<AuthStore<FetchHttpClient, BrowserStorage>> {
        self.ctx.with_value(|ctx| ctx.auth().clone())
    }

    pub fn navigate(&self, path: &str) {
        if let Err(e) = self.ctx.with_value(|ctx| ctx.router().navigate(path)) {
            tracing::warn!(path, error = %e, "navigation failed");
        }
    }

    pub fn navigate_named(&self, name: &str) {
        if let Err(e) = self.ctx.with_value(|ctx| ctx.router().navigate_named(name)) {
            tracing::warn!(name, error = %e, "navigation failed");
        }
    }

    /// 登录；失败信息写入 `session.error`
    pub fn login(&self, email: String, password: String) {
        let auth = self.auth();
        spawn_local(async move {
            if let Err(e) = auth.login(&email, &password).await {
                tracing::debug!(error = %e, "login rejected");
            }
        });
    }

    pub fn register(&self, name: String, email: String, password: String, confirmation: String) {
        let auth = self.auth();
        spawn_local(async move {
            if let Err(e) = auth.register(&name, &email, &password, &confirmation).await {
                tracing::debug!(error = %e, "registration rejected");
            }
        });
    }

    pub fn logout(&self) {
        let auth = self.auth();
        spawn_local(async move { auth.logout().await });
    }
}
