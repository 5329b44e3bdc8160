//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryTaskStore**: プロセス内の TaskStore（永続化なし）
//! - **TracingEventSink**: tracing へのイベント出力

pub mod inmem_store;
pub mod tracing_sink;

// 主要な型を再エクスポート
pub use self::inmem_store::InMemoryTaskStore;
pub use self::tracing_sink::TracingEventSink;
