use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A card on the project-management task board.
///
/// Tasks belong to a workspace: the organization the creating session was
/// acting for, or the user's personal workspace. They are never visible
/// outside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    /// Workspace the task belongs to.
    pub org_id: String,
    /// User id of the session that created the task.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Board column a task sits in, in board order.
///
/// - `Backlog`: captured, not yet planned
/// - `Ready`: planned and ready to pick up
/// - `InProgress`: being worked on
/// - `InReview`: waiting for review
/// - `Done`: finished
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Backlog,
    Ready,
    InProgress,
    InReview,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        Self::Backlog,
        Self::Ready,
        Self::InProgress,
        Self::InReview,
        Self::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Ready => "ready",
            Self::InProgress => "in_progress",
            Self::InReview => "in_review",
            Self::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "backlog" => Some(Self::Backlog),
            "ready" => Some(Self::Ready),
            "in_progress" => Some(Self::InProgress),
            "in_review" => Some(Self::InReview),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Column heading on the board.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Ready => "Ready",
            Self::InProgress => "In progress",
            Self::InReview => "In review",
            Self::Done => "Done",
        }
    }
}

/// Input for creating a task. The workspace and author come from the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
}

/// Input for updating a task. All fields are optional for partial updates.
///
/// `description` tells an absent field (`None`, keep) from an explicit
/// `null` (`Some(None)`, clear).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskInput {
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
}

fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Input for moving a task to another column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TaskStatusUpdate {
    pub status: TaskStatus,
}

/// Tasks of one column, for board rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardColumn {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

/// Group tasks into one column per status, in board order. Tasks keep their
/// relative order within a column.
pub fn board_columns(tasks: Vec<Task>) -> Vec<BoardColumn> {
    let mut columns: Vec<BoardColumn> = TaskStatus::ALL
        .iter()
        .map(|&status| BoardColumn {
            status,
            tasks: Vec::new(),
        })
        .collect();

    for task in tasks {
        if let Some(column) = columns.iter_mut().find(|c| c.status == task.status) {
            column.tasks.push(task);
        }
    }

    columns
}
