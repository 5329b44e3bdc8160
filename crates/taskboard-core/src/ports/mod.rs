//! Ports - 抽象化レイヤー
//!
//! HTTP 境界などの呼び出し側は、ここで定義する trait だけに依存します。
//! 実装（in-memory など）は `impls` に置きます。

pub mod event_sink;
pub mod task_store;

// 主要な trait を再エクスポート
pub use self::event_sink::{EventSink, NoopEventSink};
pub use self::task_store::TaskStore;
