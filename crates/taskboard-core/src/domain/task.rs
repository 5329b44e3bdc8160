//! Task - task モデルと作成 / 更新用の payload
//!
//! task が属するカラムは `Task` 自体には持たせません。
//! 単一 task の読み取りでは `TaskView::status` として返します。

use serde::{Deserialize, Serialize};

use super::column::ColumnKey;
use super::errors::BoardError;
use super::ids::TaskId;

/// Task の優先度（固定の 3 種類）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(value: &str) -> Result<Self, BoardError> {
        match value {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(BoardError::validation(format!("Invalid priority: {other}"))),
        }
    }
}

/// board 上の作業単位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub project: String,
    pub assignee: String,
    pub due_date: String,
    pub priority: Priority,
    pub tags: Vec<String>,
}

/// Task + 現在の所属カラム
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub status: ColumnKey,
}

impl TaskView {
    pub fn new(task: Task, status: ColumnKey) -> Self {
        Self { task, status }
    }

    pub fn id(&self) -> TaskId {
        self.task.id
    }
}

/// 作成用 payload
///
/// 型としては全フィールド optional。`title` の欠落はデコード失敗ではなく
/// board の `Validation` エラーとして扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// payload を検証し、追加先のカラムを決める
    ///
    /// 順序: 必須フィールド → priority → status
    pub(crate) fn validate(self) -> Result<ValidatedTask, BoardError> {
        let (title, description) = match (self.title, self.description) {
            (Some(t), Some(d)) if !t.trim().is_empty() && !d.trim().is_empty() => (t, d),
            _ => {
                return Err(BoardError::validation(
                    "Title and description are required",
                ));
            }
        };
        let priority = self
            .priority
            .as_deref()
            .map(Priority::parse)
            .transpose()?
            .unwrap_or_default();
        let column = self
            .status
            .as_deref()
            .map(ColumnKey::parse)
            .transpose()?
            .unwrap_or_default();

        Ok(ValidatedTask {
            title,
            description,
            project: self.project.unwrap_or_default(),
            assignee: self.assignee.unwrap_or_default(),
            due_date: self.due_date.unwrap_or_default(),
            priority,
            tags: self.tags.unwrap_or_default(),
            column,
        })
    }
}

/// 検証済みの作成 payload（足りないのは id だけ）
#[derive(Debug)]
pub(crate) struct ValidatedTask {
    title: String,
    description: String,
    project: String,
    assignee: String,
    due_date: String,
    priority: Priority,
    tags: Vec<String>,
    pub(crate) column: ColumnKey,
}

impl ValidatedTask {
    pub(crate) fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            project: self.project,
            assignee: self.assignee,
            due_date: self.due_date,
            priority: self.priority,
            tags: self.tags,
        }
    }
}

/// 更新用 payload
///
/// `None`（欠落または JSON の `null`）は変更なし。`Some` は常に上書きする
/// （`Some("")` や `Some(vec![])` も含む）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
}

impl TaskPatch {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// 列挙値のフィールドを先にすべて解析する
    ///
    /// どれか 1 つでも不正なら何も適用しない。
    pub(crate) fn validate(self) -> Result<ValidatedPatch, BoardError> {
        let priority = self.priority.as_deref().map(Priority::parse).transpose()?;
        let status = self.status.as_deref().map(ColumnKey::parse).transpose()?;
        Ok(ValidatedPatch {
            title: self.title,
            description: self.description,
            project: self.project,
            assignee: self.assignee,
            due_date: self.due_date,
            priority,
            tags: self.tags,
            status,
        })
    }
}

#[derive(Debug)]
pub(crate) struct ValidatedPatch {
    title: Option<String>,
    description: Option<String>,
    project: Option<String>,
    assignee: Option<String>,
    due_date: Option<String>,
    priority: Option<Priority>,
    tags: Option<Vec<String>>,
    pub(crate) status: Option<ColumnKey>,
}

impl ValidatedPatch {
    /// patch にあるフィールドだけを上書きする（status は board が扱う）
    pub(crate) fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(project) = self.project {
            task.project = project;
        }
        if let Some(assignee) = self.assignee {
            task.assignee = assignee;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(tags) = self.tags {
            task.tags = tags;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn sample_task() -> Task {
        Task {
            id: TaskId::new(1),
            title: "Design user authentication flow".into(),
            description: "Create wireframes".into(),
            project: "E-commerce Platform".into(),
            assignee: "Sarah Wilson".into(),
            due_date: "2024-11-10".into(),
            priority: Priority::High,
            tags: vec!["Design".into(), "UX".into()],
        }
    }

    #[rstest]
    #[case::low("low", Priority::Low)]
    #[case::medium("medium", Priority::Medium)]
    #[case::high("high", Priority::High)]
    fn priority_parses_known_values(#[case] raw: &str, #[case] expected: Priority) {
        assert_eq!(Priority::parse(raw).unwrap(), expected);
        assert_eq!(expected.as_str(), raw);
    }

    #[test]
    fn priority_rejects_unknown_values() {
        let err = Priority::parse("urgent").unwrap_err();
        assert!(matches!(err, BoardError::Validation(_)));
    }

    #[test]
    fn task_view_serializes_flat_with_camel_case_fields() {
        let view = TaskView::new(sample_task(), ColumnKey::InProgress);
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "title": "Design user authentication flow",
                "description": "Create wireframes",
                "project": "E-commerce Platform",
                "assignee": "Sarah Wilson",
                "dueDate": "2024-11-10",
                "priority": "high",
                "tags": ["Design", "UX"],
                "status": "in-progress",
            })
        );
    }

    #[test]
    fn new_task_defaults_optional_fields() {
        let validated = NewTask::new("A", "B").validate().unwrap();
        assert_eq!(validated.column, ColumnKey::Todo);

        let task = validated.into_task(TaskId::new(9));
        assert_eq!(task.project, "");
        assert_eq!(task.assignee, "");
        assert_eq!(task.due_date, "");
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.tags.is_empty());
    }

    #[rstest]
    #[case::missing_description(NewTask { title: Some("A".into()), ..NewTask::default() })]
    #[case::missing_title(NewTask { description: Some("B".into()), ..NewTask::default() })]
    #[case::blank_title(NewTask::new("   ", "B"))]
    #[case::empty_description(NewTask::new("A", ""))]
    fn new_task_requires_title_and_description(#[case] payload: NewTask) {
        let err = payload.validate().unwrap_err();
        assert_eq!(
            err,
            BoardError::validation("Title and description are required")
        );
    }

    #[test]
    fn new_task_rejects_unknown_status() {
        let err = NewTask::new("A", "B").with_status("bogus").validate().unwrap_err();
        assert_eq!(err, BoardError::InvalidStatus("bogus".into()));
    }

    #[test]
    fn new_task_decodes_camel_case_payload() {
        let payload: NewTask = serde_json::from_value(json!({
            "title": "A",
            "description": "B",
            "dueDate": "2024-12-01",
            "status": "review",
            "unknown": true,
        }))
        .unwrap();
        assert_eq!(payload.due_date.as_deref(), Some("2024-12-01"));
        assert_eq!(payload.status.as_deref(), Some("review"));
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut task = sample_task();
        TaskPatch::default()
            .with_title("Renamed")
            .with_tags(Vec::<String>::new())
            .validate()
            .unwrap()
            .apply(&mut task);

        assert_eq!(task.title, "Renamed");
        assert!(task.tags.is_empty());
        assert_eq!(task.description, "Create wireframes");
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn patch_explicit_empty_string_overwrites() {
        let mut task = sample_task();
        let patch: TaskPatch = serde_json::from_value(json!({ "assignee": "", "project": null })).unwrap();
        patch.validate().unwrap().apply(&mut task);

        assert_eq!(task.assignee, "");
        // null は欠落と同じ扱い
        assert_eq!(task.project, "E-commerce Platform");
    }

    #[test]
    fn patch_validation_fails_before_anything_is_applied() {
        let patch = TaskPatch::default().with_title("X").with_priority("urgent");
        assert!(matches!(patch.validate(), Err(BoardError::Validation(_))));

        let patch = TaskPatch::default().with_title("X").with_status("bogus");
        assert_eq!(
            patch.validate().unwrap_err(),
            BoardError::InvalidStatus("bogus".into())
        );
    }
}
