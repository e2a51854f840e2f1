//! History API 封装
//!
//! 所有对 window.history 的操作都集中在此模块。
//! 路由器本身与平台无关，这里只负责把导航结果同步到地址栏，
//! 以及把浏览器的后退/前进交还给路由器。

use mycc::{HistoryMode, Navigation, Router};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, mode: HistoryMode) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(path)),
    };
    if let Err(e) = result {
        tracing::warn!(path, error = ?e, "history update failed");
    }
}

fn sync(nav: &Navigation) {
    let path = nav.path();
    // 地址栏已经是目标路径（popstate 且未被重定向）时不写入
    if current_path() == path {
        return;
    }
    // 被守卫重定向的导航不留下被拒绝的记录
    let mode = if nav.redirected {
        HistoryMode::Replace
    } else {
        nav.mode
    };
    write_history(path, mode);
}

/// 订阅路由器并监听 popstate
pub fn attach(router: &Router) {
    router.subscribe(sync);

    let router = router.clone();
    let closure = Closure::<dyn Fn()>::new(move || {
        if let Err(e) = router.replace(&current_path()) {
            tracing::warn!(error = %e, "popstate navigation failed");
        }
    });

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }

    // 泄漏闭包以保持监听器存活
    closure.forget();
}
