//! Domain identifiers - ドメインの識別子
//!
//! # TaskId
//! board 全体で一意な整数 ID です。
//! 採番は `Board` の単調増加カウンタが担当し、削除された ID も再利用しません。
//! JSON では素の整数として表現します（`{"id": 3}`）。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task の識別子（board の全カラムを通して一意）
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// 数字だけで構成されていない、または u64 に収まらない文字列
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid task id: {0:?}")]
pub struct ParseTaskIdError(String);

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    /// パスパラメータ（`/tasks/{id}`）からの変換に使う
    ///
    /// 空白や符号（`+1`）は受け付けない。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseTaskIdError(s.to_string()));
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| ParseTaskIdError(s.to_string()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
