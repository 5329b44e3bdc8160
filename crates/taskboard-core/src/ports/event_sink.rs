//! EventSink port - イベント記録の抽象化
//!
//! # 実装
//! - NoopEventSink: 何もしない
//! - TracingEventSink（impls）: tracing でログ出力

use crate::domain::BoardEvent;

/// EventSink はコミット済みのドメインイベントを受け取る
///
/// store はロックを解放してから `emit` を呼びます。
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &BoardEvent);
}

/// NoopEventSink は何もしない
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: &BoardEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnKey, NewTask, TaskId};
    use crate::impls::InMemoryTaskStore;
    use crate::ports::TaskStore;
    use std::sync::Arc;

    #[test]
    fn noop_sink_accepts_any_event() {
        NoopEventSink.emit(&BoardEvent::TaskDeleted {
            task_id: TaskId::new(9),
            status: ColumnKey::Review,
        });
    }

    #[tokio::test]
    async fn store_works_with_a_silent_sink() {
        let store = InMemoryTaskStore::new().with_sink(Arc::new(NoopEventSink));
        let created = store.create(NewTask::new("A", "B")).await.unwrap();

        let board = store.list_all().await.unwrap();
        assert!(board[&ColumnKey::Todo].contains(created.id()));
    }
}
