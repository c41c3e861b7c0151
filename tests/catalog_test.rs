//! カタログ構築の統合テスト
//!
//! ファイル読み込み経由での欠損除外・重複除外・順序維持を検証

use diet_ai_rust::catalog::{self, load_catalog, scan_datasets};
use diet_ai_rust::error::DietAiError;
use tempfile::tempdir;

const TEST_CSV: &str = "\
Food_Item,Category,Calories (kcal),Protein (g),Carbohydrates (g),Fat (g),Fiber (g),Sugars (g),Sodium (mg),Cholesterol (mg)
Oatmeal,Grains,150,5,27,3,4,1,2,0
Salmon,Seafood,208,20,0,13,0,0,59,55
Oatmeal,Grains,150,5,27,3,4,1,2,0
Tofu,Protein,76,8,1.9,4.8,0.3,,7,0
Apple,Fruits,52,0.3,14,0.2,2.4,10,1,0
";

/// 全フィールド一致の行はちょうど1件に畳まれる
#[test]
fn test_load_catalog_removes_duplicates() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("foods.csv");
    std::fs::write(&path, TEST_CSV).unwrap();

    let (catalog, stats) = load_catalog(&path).expect("カタログ構築失敗");

    let oatmeal_count = catalog
        .entries()
        .iter()
        .filter(|entry| entry.name == "Oatmeal")
        .count();
    assert_eq!(oatmeal_count, 1);
    assert_eq!(stats.dropped_duplicate, 1);
}

/// 欠損値のある行は除外される
#[test]
fn test_load_catalog_drops_missing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("foods.csv");
    std::fs::write(&path, TEST_CSV).unwrap();

    let (catalog, stats) = load_catalog(&path).expect("カタログ構築失敗");

    assert!(catalog.entries().iter().all(|entry| entry.name != "Tofu"));
    assert_eq!(stats.dropped_missing, 1);
    assert_eq!(catalog.len(), 3);
}

/// 行順（＝識別子）はファイルの出現順で安定
#[test]
fn test_load_catalog_stable_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("foods.csv");
    std::fs::write(&path, TEST_CSV).unwrap();

    let (catalog, _) = load_catalog(&path).expect("カタログ構築失敗");

    let names: Vec<&str> = catalog
        .entries()
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["Oatmeal", "Salmon", "Apple"]);
}

/// クォート内カンマを含む食品名を正しく読む
#[test]
fn test_load_catalog_quoted_names() {
    let csv = "\
Food_Item,Category,Calories (kcal),Protein (g),Carbohydrates (g),Fat (g),Fiber (g),Sugars (g),Sodium (mg),Cholesterol (mg)
\"Rice, fried\",Grains,163,3.1,35,0.5,0.6,0.2,2,0
";
    let (catalog, _) = catalog::from_csv_str(csv).expect("カタログ構築失敗");

    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.get(0).map(|entry| entry.name.as_str()),
        Some("Rice, fried")
    );
}

/// 必須列が欠けたデータセットはエラー
#[test]
fn test_load_catalog_missing_column() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("foods.csv");
    std::fs::write(&path, "Food_Item,Category,Calories (kcal)\nOatmeal,Grains,150\n").unwrap();

    let result = load_catalog(&path);
    assert!(matches!(result, Err(DietAiError::InvalidDataset(_))));
}

/// 存在しないファイルはエラー
#[test]
fn test_load_catalog_not_found() {
    let result = load_catalog(std::path::Path::new("/nonexistent/foods.csv"));
    assert!(matches!(result, Err(DietAiError::DatasetNotFound(_))));
}

/// データセット一覧はCSVのみを名前順で返す
#[test]
fn test_scan_datasets() {
    let dir = tempdir().expect("Failed to create temp dir");

    std::fs::write(dir.path().join("nutrition.csv"), TEST_CSV).unwrap();
    std::fs::write(dir.path().join("extra.csv"), "header\nrow\n").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "memo").unwrap();

    let datasets = scan_datasets(dir.path()).expect("一覧取得失敗");

    assert_eq!(datasets.len(), 2);
    assert_eq!(datasets[0].name, "extra");
    assert_eq!(datasets[0].rows, 1);
    assert_eq!(datasets[1].name, "nutrition");
    assert_eq!(datasets[1].rows, 5);
}
