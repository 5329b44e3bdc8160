#![forbid(unsafe_code)]
//! taskboard-server
//!
//! HTTP の境界だけを担当します。board の意味論は `taskboard-core` にあります。
//!
//! | メソッド + パス | store の操作 | 成功時 |
//! |---|---|---|
//! | GET /tasks | list_all | 200 |
//! | GET /tasks/{id} | get_by_id | 200 |
//! | POST /tasks | create | 201 |
//! | PATCH /tasks/{id} | update | 200 |
//! | DELETE /tasks/{id} | delete | 200 |
//! | OPTIONS * | - | 200 |

pub mod config;
pub mod http;

pub use config::{ConfigError, ServerConfig};
pub use http::{ApiError, AppState, build_router};

pub const CRATE_NAME: &str = "taskboard-server";
