//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use diet_ai_rust::error::DietAiError;

/// DietAiErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        DietAiError::Config("テスト設定エラー".to_string()),
        DietAiError::DatasetNotFound("foods.csv".to_string()),
        DietAiError::FolderNotFound("/path/to/folder".to_string()),
        DietAiError::InvalidDataset("必須列がありません".to_string()),
        DietAiError::ModelNotFound("diet_model.json".to_string()),
        DietAiError::InvalidModel("件数不一致".to_string()),
        DietAiError::EmptyCatalog,
        DietAiError::PromptFailed("入力中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// ModelNotFoundエラーのメッセージ確認
#[test]
fn test_model_not_found_message() {
    let err = DietAiError::ModelNotFound("diet_model.json".to_string());
    let display = format!("{}", err);

    assert!(display.contains("diet_model.json"));
    assert!(display.contains("diet-ai train"));
}

/// バージョン不一致エラーのメッセージ確認
#[test]
fn test_version_mismatch_message() {
    let err = DietAiError::ModelVersionMismatch {
        expected: 1,
        found: 2,
    };
    let display = format!("{}", err);

    assert!(display.contains("v1"));
    assert!(display.contains("v2"));
    assert!(display.contains("再学習"));
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = DietAiError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: DietAiError = io_err.into();

    assert!(matches!(err, DietAiError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: DietAiError = json_err.into();

    assert!(matches!(err, DietAiError::JsonParse(_)));
}

/// common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let common_err = diet_ai_common::Error::Config("設定エラー".to_string());
    let err: DietAiError = common_err.into();

    assert!(matches!(err, DietAiError::Common(_)));
}

/// エラーチェーン（透過的エラー）
#[test]
fn test_error_chain_transparent() {
    let common_err = diet_ai_common::Error::DegenerateColumn {
        column: "Fiber (g)".to_string(),
    };
    let err: DietAiError = common_err.into();

    // 透過的エラーなのでメッセージがそのまま表示される
    let display = format!("{}", err);
    assert!(display.contains("Fiber (g)"));
}
