//! TracingEventSink - イベントを tracing に流す
//!
//! 構造化フィールド（event, task_id, status / from / to）付きで info レベルに出力します。

use tracing::info;

use crate::domain::BoardEvent;
use crate::ports::EventSink;

/// TracingEventSink は InMemoryTaskStore のデフォルトの送信先
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &BoardEvent) {
        match event {
            BoardEvent::TaskMoved { task_id, from, to } => {
                info!(event = event.name(), task_id = %task_id, from = %from, to = %to, "board event");
            }
            BoardEvent::TaskCreated { task_id, status }
            | BoardEvent::TaskUpdated { task_id, status }
            | BoardEvent::TaskDeleted { task_id, status } => {
                info!(event = event.name(), task_id = %task_id, status = %status, "board event");
            }
        }
    }
}
