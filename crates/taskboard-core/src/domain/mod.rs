//! Domain - ドメインモデル
//!
//! ids, column, task, board（状態機械）, errors, events

pub mod board;
pub mod column;
pub mod errors;
pub mod events;
pub mod ids;
mod seed;
pub mod task;

pub use self::board::{Board, BoardSnapshot};
pub use self::column::{Column, ColumnKey};
pub use self::errors::{BoardError, ErrorKind};
pub use self::events::BoardEvent;
pub use self::ids::{ParseTaskIdError, TaskId};
pub use self::task::{NewTask, Priority, Task, TaskPatch, TaskView};
