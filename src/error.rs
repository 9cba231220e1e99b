//! 错误类型定义

use crate::types::EdgeKey;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("边已存在: {0}")]
    DuplicateEdge(EdgeKey),
}
