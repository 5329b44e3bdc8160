//! Errors - エラー型と分類
//!
//! board の操作はすべて同期的な in-memory 計算なので、
//! リトライすべき一時的エラーは存在しません。
//! エラーは状態を変更する前に検出され、失敗した操作は board を一切変更しません。

use super::ids::TaskId;

/// ErrorKind はエラーの分類（HTTP 境界でのステータス決定に使う）
///
/// # 分類
/// - Validation: 必須フィールドの欠落、不正な priority
/// - InvalidStatus: 4 つのカラム以外の status
/// - NotFound: 存在しない task id
/// - Internal: 想定外の内部エラー（上記 3 つとは区別する）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    InvalidStatus,
    NotFound,
    Internal,
}

/// BoardError はドメインエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Task not found: {0}")]
    NotFound(TaskId),

    #[error("internal error: {0}")]
    Internal(String),
}

impl BoardError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::Validation(_) => ErrorKind::Validation,
            BoardError::InvalidStatus(_) => ErrorKind::InvalidStatus,
            BoardError::NotFound(_) => ErrorKind::NotFound,
            BoardError::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::validation(BoardError::validation("Title and description are required"), ErrorKind::Validation)]
    #[case::invalid_status(BoardError::InvalidStatus("bogus".into()), ErrorKind::InvalidStatus)]
    #[case::not_found(BoardError::NotFound(TaskId::new(3)), ErrorKind::NotFound)]
    #[case::internal(BoardError::Internal("index out of sync".into()), ErrorKind::Internal)]
    fn errors_are_classified(#[case] err: BoardError, #[case] kind: ErrorKind) {
        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            BoardError::InvalidStatus("bogus".into()).to_string(),
            "Invalid status: bogus"
        );
        assert_eq!(
            BoardError::NotFound(TaskId::new(12)).to_string(),
            "Task not found: 12"
        );
    }
}
