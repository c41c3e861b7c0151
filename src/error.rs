use thiserror::Error;

#[derive(Error, Debug)]
pub enum DietAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データセットが見つかりません: {0}")]
    DatasetNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("データセットが不正: {0}")]
    InvalidDataset(String),

    #[error("モデルファイルが見つかりません: {0}。`diet-ai train` で作成してください")]
    ModelNotFound(String),

    #[error("モデルファイルが不正: {0}")]
    InvalidModel(String),

    #[error("モデルバージョン不一致: 期待 v{expected}, 実際 v{found}。`diet-ai train` で再学習してください")]
    ModelVersionMismatch { expected: u32, found: u32 },

    #[error("カタログが空のため推薦できません")]
    EmptyCatalog,

    #[error("入力プロンプトエラー: {0}")]
    PromptFailed(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] diet_ai_common::Error),
}

pub type Result<T> = std::result::Result<T, DietAiError>;
