//! 浏览器适配层
//!
//! 把 fetch、localStorage 和 History API 接入平台无关的核心库。

mod history;
mod http;
mod storage;

pub use history::{attach as attach_history, current_path};
pub use http::FetchHttpClient;
pub use storage::BrowserStorage;
