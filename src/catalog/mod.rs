//! 食品カタログモジュール
//!
//! データセットCSVを読み込み、欠損行と重複行を除去した
//! 順序付きカタログを構築する。カタログは構築後は不変。

pub mod parse;

use crate::error::{DietAiError, Result};
use diet_ai_common::FoodEntry;
use parse::{ColumnMap, RawFoodRow};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// クリーニング済みカタログ（位置 = エントリの識別子）
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<FoodEntry>,
}

impl Catalog {
    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&FoodEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// カタログ構築の統計情報
#[derive(Debug, Clone, Default)]
pub struct CatalogStats {
    /// 読み込んだデータ行数（ヘッダー除く）
    pub total_rows: usize,
    /// 欠損値で除外した行数
    pub dropped_missing: usize,
    /// 重複で除外した行数
    pub dropped_duplicate: usize,
}

/// データセットCSVからカタログを構築する
pub fn load_catalog(path: &Path) -> Result<(Catalog, CatalogStats)> {
    if !path.exists() {
        return Err(DietAiError::DatasetNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    from_csv_str(&content)
}

/// CSV文字列からカタログを構築する
pub fn from_csv_str(content: &str) -> Result<(Catalog, CatalogStats)> {
    let mut lines = content.lines();

    let header = lines
        .next()
        .ok_or_else(|| DietAiError::InvalidDataset("ヘッダー行がありません".into()))?;
    let columns = ColumnMap::from_header(header)?;

    let rows: Vec<RawFoodRow> = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse::parse_row(line, &columns))
        .collect();

    Ok(prepare(rows))
}

/// 生レコード列からカタログを構築する
///
/// - 欠損フィールドのある行を除外
/// - 先行行と全フィールド一致の行を除外
/// - 残りをファイル順の密な0始まり列に再インデックス
///
/// 空の結果も有効（エラーにしない）。
pub fn prepare(rows: Vec<RawFoodRow>) -> (Catalog, CatalogStats) {
    let mut stats = CatalogStats {
        total_rows: rows.len(),
        ..Default::default()
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut entries = Vec::new();

    for row in rows {
        if !row.is_complete() {
            stats.dropped_missing += 1;
            continue;
        }

        let (Some(name), Some(category)) = (row.name, row.category) else {
            stats.dropped_missing += 1;
            continue;
        };
        let mut nutrients = [0.0; diet_ai_common::NUTRIENT_DIM];
        for (j, value) in row.nutrients.iter().enumerate() {
            nutrients[j] = value.unwrap_or_default();
        }

        let entry = FoodEntry {
            name,
            category,
            calories: nutrients[0],
            protein: nutrients[1],
            carbohydrates: nutrients[2],
            fat: nutrients[3],
            fiber: nutrients[4],
            sugars: nutrients[5],
            sodium: nutrients[6],
            cholesterol: nutrients[7],
        };

        if !seen.insert(entry_key(&entry)) {
            stats.dropped_duplicate += 1;
            continue;
        }

        entries.push(entry);
    }

    (Catalog { entries }, stats)
}

/// 全フィールド一致の判定キー
///
/// 浮動小数はビット表現で比較する（同一テキスト由来なら必ず一致）。
fn entry_key(entry: &FoodEntry) -> String {
    let bits: Vec<String> = entry
        .nutrient_vector()
        .iter()
        .map(|value| format!("{:x}", value.to_bits()))
        .collect();
    format!("{}\u{1f}{}\u{1f}{}", entry.name, entry.category, bits.join(","))
}

/// データセット情報（一覧表示用）
#[derive(Debug, Clone)]
pub struct DatasetInfo {
    pub name: String,
    pub path: PathBuf,
    /// データ行数（ヘッダー除く）
    pub rows: usize,
}

/// ディレクトリ直下のデータセットCSVを一覧する（名前順）
pub fn scan_datasets(dir: &Path) -> Result<Vec<DatasetInfo>> {
    if !dir.exists() {
        return Err(DietAiError::FolderNotFound(dir.display().to_string()));
    }

    let mut datasets = Vec::new();

    for entry in WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false)
        {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_default();
            let rows = count_csv_rows(path);

            datasets.push(DatasetInfo {
                name,
                path: path.to_path_buf(),
                rows,
            });
        }
    }

    // 名前でソート
    datasets.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(datasets)
}

/// CSVの行数を取得（ヘッダー除く）
fn count_csv_rows(path: &Path) -> usize {
    std::fs::read_to_string(path)
        .map(|content| content.lines().count().saturating_sub(1))
        .unwrap_or(0)
}
