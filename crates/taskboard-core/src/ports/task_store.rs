//! TaskStore port - board の操作を公開するインターフェース
//!
//! 内部のカラム・task 列を直接触らせず、ここに定義した操作だけを公開します。
//! 戻り値はすべて clone（snapshot）です。

use async_trait::async_trait;

use crate::domain::{BoardError, BoardSnapshot, NewTask, TaskId, TaskPatch, TaskView};

/// TaskStore は board の唯一の入口
///
/// # 設計原則
/// - 1 操作 = 1 つの排他境界（読み取りは共有ロック、書き込みは排他ロック）
/// - 失敗した操作は状態を一切変更しない
/// - `Send + Sync` を要求（複数のリクエストから共有される）
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// board 全体（カラム -> Column）
    async fn list_all(&self) -> Result<BoardSnapshot, BoardError>;

    /// id で task を取得（所属カラムを status として含む）
    async fn get_by_id(&self, id: TaskId) -> Result<TaskView, BoardError>;

    /// 検証 → 採番 → 対象カラムの末尾に追加
    async fn create(&self, new_task: NewTask) -> Result<TaskView, BoardError>;

    /// 指定されたフィールドのみ上書き。status が変われば末尾へ移動
    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<TaskView, BoardError>;

    /// 削除して、削除した task を返す
    async fn delete(&self, id: TaskId) -> Result<TaskView, BoardError>;
}
