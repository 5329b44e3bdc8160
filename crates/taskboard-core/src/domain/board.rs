//! Board - task とカラムの状態機械
//!
//! # 設計
//! - `columns` が「どの task がどのカラムに属するか」と「カラム内の順序」の唯一の正
//! - `index`（TaskId -> ColumnKey）は検索用のアクセラレータに過ぎない
//! - 不変条件: 生きている id はちょうど 1 つのカラムに存在し、`index` は `columns` と一致する
//! - すべての操作は変更前に検証する。失敗した呼び出しは board を一切変更しない

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::column::{Column, ColumnKey};
use super::errors::BoardError;
use super::ids::TaskId;
use super::task::{NewTask, Task, TaskPatch, TaskView};

/// board 全体の読み取り専用コピー（カラムの表示順）
pub type BoardSnapshot = BTreeMap<ColumnKey, Column>;

#[derive(Debug, Clone)]
pub struct Board {
    columns: BTreeMap<ColumnKey, Column>,

    /// TaskId -> 所属カラム
    index: HashMap<TaskId, ColumnKey>,

    /// 次に採番する TaskId
    next_id: u64,
}

impl Board {
    /// 固定の 4 カラムを持つ空の board を作成
    pub fn new() -> Self {
        let columns = ColumnKey::ALL
            .into_iter()
            .map(|key| (key, Column::new(key)))
            .collect();
        Self {
            columns,
            index: HashMap::new(),
            next_id: 1,
        }
    }

    /// 新しい TaskId を採番
    fn allocate_task_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn column_mut(&mut self, key: ColumnKey) -> &mut Column {
        self.columns.entry(key).or_insert_with(|| Column::new(key))
    }

    /// 採番済みの task を配置する（seed データ用）
    ///
    /// カウンタはその id より先に進め、同じ id を二度と払い出さない。
    pub(crate) fn insert_existing(&mut self, key: ColumnKey, task: Task) -> Result<(), BoardError> {
        if self.index.contains_key(&task.id) {
            return Err(BoardError::Internal(format!("duplicate task id {}", task.id)));
        }
        self.next_id = self.next_id.max(task.id.as_u64() + 1);
        self.index.insert(task.id, key);
        self.column_mut(key).push(task);
        Ok(())
    }

    /// TaskId を (カラム, 位置) に解決
    fn locate(&self, id: TaskId) -> Result<(ColumnKey, usize), BoardError> {
        let key = *self.index.get(&id).ok_or(BoardError::NotFound(id))?;
        let position = self
            .columns
            .get(&key)
            .and_then(|column| column.position(id))
            .ok_or_else(|| {
                BoardError::Internal(format!("index points task {id} at {key} but it is not there"))
            })?;
        Ok((key, position))
    }

    fn view_at(&self, key: ColumnKey, position: usize) -> Result<TaskView, BoardError> {
        self.columns
            .get(&key)
            .and_then(|column| column.get(position))
            .map(|task| TaskView::new(task.clone(), key))
            .ok_or_else(|| BoardError::Internal(format!("no task at {key}[{position}]")))
    }

    /// board 全体（読み取り専用）
    pub fn list_all(&self) -> BoardSnapshot {
        self.columns.clone()
    }

    pub fn get(&self, id: TaskId) -> Result<TaskView, BoardError> {
        let (key, position) = self.locate(id)?;
        self.view_at(key, position)
    }

    /// `id` が現在属しているカラム
    pub fn column_of(&self, id: TaskId) -> Option<ColumnKey> {
        self.index.get(&id).copied()
    }

    pub fn column(&self, key: ColumnKey) -> Option<&Column> {
        self.columns.get(&key)
    }

    /// 全カラムの task 数
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// 検証 → 採番 → 対象カラムの末尾に追加
    pub fn create(&mut self, new_task: NewTask) -> Result<TaskView, BoardError> {
        let validated = new_task.validate()?;
        let key = validated.column;
        let id = self.allocate_task_id();
        let task = validated.into_task(id);

        self.index.insert(id, key);
        self.column_mut(key).push(task.clone());
        debug!(task_id = %id, column = %key, "task created");
        Ok(TaskView::new(task, key))
    }

    /// patch を適用し、`status` が別のカラムを指していればそのカラムの末尾へ移動する
    ///
    /// all-or-nothing: 途中で失敗した場合は何も変更しない。
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> Result<TaskView, BoardError> {
        let (from, position) = self.locate(id)?;
        let patch = patch.validate()?;
        let to = patch.status.unwrap_or(from);

        let column = self.column_mut(from);
        let task = column
            .get_mut(position)
            .ok_or_else(|| BoardError::Internal(format!("no task at {from}[{position}]")))?;
        patch.apply(task);

        if to == from {
            debug!(task_id = %id, column = %from, "task updated");
            return self.view_at(from, position);
        }

        let task = column
            .remove(position)
            .ok_or_else(|| BoardError::Internal(format!("no task at {from}[{position}]")))?;
        let target = self.column_mut(to);
        target.push(task.clone());
        self.index.insert(id, to);
        debug!(task_id = %id, from = %from, to = %to, "task relocated");
        Ok(TaskView::new(task, to))
    }

    /// task を削除し、削除した task を返す
    pub fn delete(&mut self, id: TaskId) -> Result<TaskView, BoardError> {
        let (key, position) = self.locate(id)?;
        let task = self
            .column_mut(key)
            .remove(position)
            .ok_or_else(|| BoardError::Internal(format!("no task at {key}[{position}]")))?;
        self.index.remove(&id);
        debug!(task_id = %id, column = %key, "task deleted");
        Ok(TaskView::new(task, key))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
