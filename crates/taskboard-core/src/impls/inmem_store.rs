//! InMemoryTaskStore - プロセス内の board
//!
//! # 学習ポイント
//! - `tokio::sync::RwLock` による読み取り共有 / 書き込み排他
//! - ロックの範囲 = 1 操作（ロックを跨いで await しない）
//! - イベント送信はロック解放後

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    Board, BoardError, BoardEvent, BoardSnapshot, NewTask, TaskId, TaskPatch, TaskView,
};
use crate::impls::TracingEventSink;
use crate::ports::{EventSink, TaskStore};

/// InMemoryTaskStore は永続化なしの TaskStore
///
/// # 実装詳細
/// - `Arc<RwLock<Board>>` を clone で共有（ハンドラごとに clone してよい）
/// - 読み取り（list_all / get_by_id）は共有ロック
/// - 書き込み（create / update / delete）は排他ロック
///   → 移動中の task が 2 つのカラムに見えたり、どこにも見えなかったりしない
///
/// # 使用例
/// ```ignore
/// let store = InMemoryTaskStore::seeded();
/// let task = store.create(NewTask::new("A", "B")).await?;
/// store.update(task.id(), TaskPatch::default().with_status("done")).await?;
/// ```
#[derive(Clone)]
pub struct InMemoryTaskStore {
    board: Arc<RwLock<Board>>,
    sink: Arc<dyn EventSink>,
}

impl InMemoryTaskStore {
    /// 空の board で作成
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// デモ用 task 入りの board で作成
    pub fn seeded() -> Self {
        Self::with_board(Board::with_demo_tasks())
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            board: Arc::new(RwLock::new(board)),
            sink: Arc::new(TracingEventSink),
        }
    }

    /// イベントの送信先を差し替える
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// 現在の task 数
    pub async fn len(&self) -> usize {
        self.board.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.board.read().await.is_empty()
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list_all(&self) -> Result<BoardSnapshot, BoardError> {
        let board = self.board.read().await;
        Ok(board.list_all())
    }

    async fn get_by_id(&self, id: TaskId) -> Result<TaskView, BoardError> {
        let board = self.board.read().await;
        board.get(id)
    }

    async fn create(&self, new_task: NewTask) -> Result<TaskView, BoardError> {
        let created = {
            let mut board = self.board.write().await;
            board.create(new_task)?
        }; // Lock released here

        self.sink.emit(&BoardEvent::TaskCreated {
            task_id: created.id(),
            status: created.status,
        });
        Ok(created)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<TaskView, BoardError> {
        let (from, updated) = {
            let mut board = self.board.write().await;
            let from = board.column_of(id).ok_or(BoardError::NotFound(id))?;
            (from, board.update(id, patch)?)
        };

        let event = if from == updated.status {
            BoardEvent::TaskUpdated {
                task_id: id,
                status: updated.status,
            }
        } else {
            BoardEvent::TaskMoved {
                task_id: id,
                from,
                to: updated.status,
            }
        };
        self.sink.emit(&event);
        Ok(updated)
    }

    async fn delete(&self, id: TaskId) -> Result<TaskView, BoardError> {
        let removed = {
            let mut board = self.board.write().await;
            board.delete(id)?
        };

        self.sink.emit(&BoardEvent::TaskDeleted {
            task_id: id,
            status: removed.status,
        });
        Ok(removed)
    }
}
