//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("栄養列 '{column}' の分散がゼロです（全行が同一値のためスケーリング不可）")]
    DegenerateColumn { column: String },

    #[error("ベクトル次元が一致しません: expected {expected}, actual {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("カタログが空です")]
    EmptyCatalog,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
