//! taskboard-core
//!
//! Core building blocks for the task board.
//! board の状態機械と、それを公開する port / 実装をまとめています。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, column, task, board, errors, events）
//! - **ports**: 抽象化レイヤー（TaskStore, EventSink）
//! - **impls**: 実装（InMemoryTaskStore, TracingEventSink）

pub mod domain;
pub mod impls;
pub mod ports;

pub use domain::{
    Board, BoardError, BoardEvent, BoardSnapshot, Column, ColumnKey, ErrorKind, NewTask, Priority,
    Task, TaskId, TaskPatch, TaskView,
};
pub use impls::{InMemoryTaskStore, TracingEventSink};
pub use ports::{EventSink, NoopEventSink, TaskStore};
