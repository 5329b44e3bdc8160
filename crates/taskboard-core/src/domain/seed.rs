//! Seed - デモ用の初期データ
//!
//! サーバ起動時に `TASKBOARD_SEED_DEMO=true` なら、この 5 件が入った board から始まります。
//! id は 1〜5 を使い、以降の採番は 6 から続きます。

use super::board::Board;
use super::column::ColumnKey;
use super::ids::TaskId;
use super::task::{Priority, Task};

#[allow(clippy::too_many_arguments)]
fn demo_task(
    id: u64,
    title: &str,
    description: &str,
    project: &str,
    assignee: &str,
    due_date: &str,
    priority: Priority,
    tags: &[&str],
) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        project: project.to_string(),
        assignee: assignee.to_string(),
        due_date: due_date.to_string(),
        priority,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn demo_tasks() -> Vec<(ColumnKey, Task)> {
    vec![
        (
            ColumnKey::Todo,
            demo_task(
                1,
                "Design user authentication flow",
                "Create wireframes and mockups for login/signup process",
                "E-commerce Platform",
                "Sarah Wilson",
                "2024-11-10",
                Priority::High,
                &["Design", "UX"],
            ),
        ),
        (
            ColumnKey::Todo,
            demo_task(
                2,
                "Set up CI/CD pipeline",
                "Configure automated testing and deployment workflow",
                "Internal Tools",
                "Mike Johnson",
                "2024-11-12",
                Priority::Medium,
                &["DevOps", "Automation"],
            ),
        ),
        (
            ColumnKey::InProgress,
            demo_task(
                3,
                "Implement payment gateway",
                "Integrate Stripe API for payment processing",
                "E-commerce Platform",
                "John Doe",
                "2024-11-15",
                Priority::High,
                &["Backend", "Payment"],
            ),
        ),
        (
            ColumnKey::Review,
            demo_task(
                4,
                "Database schema design",
                "Design and implement the database structure",
                "E-commerce Platform",
                "Alice Brown",
                "2024-11-08",
                Priority::High,
                &["Database", "Backend"],
            ),
        ),
        (
            ColumnKey::Done,
            demo_task(
                5,
                "Project kickoff meeting",
                "Initial meeting with stakeholders",
                "E-commerce Platform",
                "Sarah Wilson",
                "2024-11-01",
                Priority::Medium,
                &["Meeting", "Planning"],
            ),
        ),
    ]
}

impl Board {
    /// デモ用 task 入りの board
    pub fn with_demo_tasks() -> Self {
        let mut board = Board::new();
        for (key, task) in demo_tasks() {
            // fixture の id は重複しないので、ここには来ない
            if let Err(e) = board.insert_existing(key, task) {
                tracing::warn!(error = %e, "skipping demo task");
            }
        }
        board
    }
}
