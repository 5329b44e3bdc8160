//! Column - board のカラム（status バケット）
//!
//! カラムは固定の 4 種類（todo / in-progress / review / done）で、
//! 実行時に追加・削除されることはありません。
//! 表示用のメタデータ（title, color）もキーごとに固定です。

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::BoardError;
use super::ids::TaskId;
use super::task::Task;

/// ColumnKey はカラムの識別子（= task の status）
///
/// 宣言順がそのまま表示順になります（`Ord` は BTreeMap の並びに使う）。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKey {
    #[default]
    Todo,
    InProgress,
    Review,
    Done,
}

impl ColumnKey {
    pub const ALL: [ColumnKey; 4] = [
        ColumnKey::Todo,
        ColumnKey::InProgress,
        ColumnKey::Review,
        ColumnKey::Done,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKey::Todo => "todo",
            ColumnKey::InProgress => "in-progress",
            ColumnKey::Review => "review",
            ColumnKey::Done => "done",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ColumnKey::Todo => "To Do",
            ColumnKey::InProgress => "In Progress",
            ColumnKey::Review => "Review",
            ColumnKey::Done => "Done",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ColumnKey::Todo => "#6b7280",
            ColumnKey::InProgress => "#3b82f6",
            ColumnKey::Review => "#f59e0b",
            ColumnKey::Done => "#10b981",
        }
    }

    /// 文字列から ColumnKey を解決する（大文字小文字は区別する）
    pub fn parse(value: &str) -> Result<Self, BoardError> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| BoardError::InvalidStatus(value.to_string()))
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column は表示メタデータと順序付きの task 列
///
/// `tasks` の順序は到着順（作成・移動された順）。
/// 外部には clone（snapshot）としてのみ渡し、直接の変更は board 経由に限定します。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    title: String,
    color: String,
    tasks: Vec<Task>,
}

impl Column {
    pub fn new(key: ColumnKey) -> Self {
        Self {
            title: key.title().to_string(),
            color: key.color().to_string(),
            tasks: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.position(id).is_some()
    }

    pub(crate) fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    /// 末尾に追加（作成・移動はどちらも末尾）
    pub(crate) fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// index の task を取り除く。他の task の相対順序は変わらない
    pub(crate) fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::todo("todo", ColumnKey::Todo)]
    #[case::in_progress("in-progress", ColumnKey::InProgress)]
    #[case::review("review", ColumnKey::Review)]
    #[case::done("done", ColumnKey::Done)]
    fn parses_the_four_fixed_keys(#[case] raw: &str, #[case] expected: ColumnKey) {
        assert_eq!(ColumnKey::parse(raw).unwrap(), expected);
        assert_eq!(expected.as_str(), raw);
        assert_eq!(serde_json::to_value(expected).unwrap(), raw);
    }

    #[rstest]
    #[case::unknown("bogus")]
    #[case::wrong_case("Done")]
    #[case::display_title("In Progress")]
    #[case::empty("")]
    fn rejects_everything_else(#[case] raw: &str) {
        assert_eq!(
            ColumnKey::parse(raw),
            Err(BoardError::InvalidStatus(raw.to_string()))
        );
    }

    #[test]
    fn default_column_is_todo() {
        assert_eq!(ColumnKey::default(), ColumnKey::Todo);
    }

    #[test]
    fn keys_sort_in_display_order() {
        let mut keys = vec![
            ColumnKey::Done,
            ColumnKey::Todo,
            ColumnKey::Review,
            ColumnKey::InProgress,
        ];
        keys.sort();
        assert_eq!(keys, ColumnKey::ALL.to_vec());
    }

    #[test]
    fn new_column_carries_display_metadata() {
        let column = Column::new(ColumnKey::Review);
        assert_eq!(column.title(), "Review");
        assert_eq!(column.color(), "#f59e0b");
        assert!(column.is_empty());

        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "Review", "color": "#f59e0b", "tasks": [] })
        );
    }
}
