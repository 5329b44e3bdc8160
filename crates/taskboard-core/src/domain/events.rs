//! Events - ドメインイベント
//!
//! コミット済みの変更だけを表します（失敗した操作はイベントを出さない）。
//! 送信先は `EventSink` port で差し替え可能です。

use serde::Serialize;

use super::column::ColumnKey;
use super::ids::TaskId;

/// BoardEvent は board で発生したイベント
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoardEvent {
    TaskCreated { task_id: TaskId, status: ColumnKey },
    /// フィールドのみ更新（カラムは変わらない）
    TaskUpdated { task_id: TaskId, status: ColumnKey },
    /// カラム間の移動（フィールド更新を伴ってもよい）
    TaskMoved {
        task_id: TaskId,
        from: ColumnKey,
        to: ColumnKey,
    },
    TaskDeleted { task_id: TaskId, status: ColumnKey },
}

impl BoardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            BoardEvent::TaskCreated { .. } => "task_created",
            BoardEvent::TaskUpdated { .. } => "task_updated",
            BoardEvent::TaskMoved { .. } => "task_moved",
            BoardEvent::TaskDeleted { .. } => "task_deleted",
        }
    }

    pub fn task_id(&self) -> TaskId {
        match self {
            BoardEvent::TaskCreated { task_id, .. }
            | BoardEvent::TaskUpdated { task_id, .. }
            | BoardEvent::TaskMoved { task_id, .. }
            | BoardEvent::TaskDeleted { task_id, .. } => *task_id,
        }
    }
}
