//! データセットCSVのパース
//!
//! ヘッダー行から必須列の位置を解決し、各行を生レコード
//! （欠損ありうる）に変換する。欠損判定までがここの責務で、
//! 行の採否はカタログ構築側が決める。

use crate::error::{DietAiError, Result};
use diet_ai_common::types::{NUTRIENT_COLUMNS, NUTRIENT_DIM};

/// 食品名の列名
pub const FOOD_ITEM_COLUMN: &str = "Food_Item";

/// カテゴリの列名
pub const CATEGORY_COLUMN: &str = "Category";

/// 必須列の位置マップ（ヘッダー行から構築）
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub name: usize,
    pub category: usize,
    pub nutrients: [usize; NUTRIENT_DIM],
}

impl ColumnMap {
    /// ヘッダー行から必須列を解決する（列名は完全一致）
    pub fn from_header(header: &str) -> Result<Self> {
        let fields = parse_csv_line(header);

        let find = |column: &str| -> Result<usize> {
            fields
                .iter()
                .position(|field| *field == column)
                .ok_or_else(|| {
                    DietAiError::InvalidDataset(format!("必須列 '{}' がありません", column))
                })
        };

        let name = find(FOOD_ITEM_COLUMN)?;
        let category = find(CATEGORY_COLUMN)?;

        let mut nutrients = [0usize; NUTRIENT_DIM];
        for (j, column) in NUTRIENT_COLUMNS.iter().enumerate() {
            nutrients[j] = find(column)?;
        }

        Ok(Self {
            name,
            category,
            nutrients,
        })
    }
}

/// 生レコード（欠損フィールドはNone）
#[derive(Debug, Clone, Default)]
pub struct RawFoodRow {
    pub name: Option<String>,
    pub category: Option<String>,
    pub nutrients: [Option<f64>; NUTRIENT_DIM],
}

impl RawFoodRow {
    /// 全フィールドが揃っているか
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.category.is_some() && self.nutrients.iter().all(Option::is_some)
    }
}

/// 1行を生レコードに変換する
pub fn parse_row(line: &str, columns: &ColumnMap) -> RawFoodRow {
    let fields = parse_csv_line(line);

    let text_at = |index: usize| -> Option<String> {
        fields
            .get(index)
            .map(|field| field.trim())
            .filter(|field| !field.is_empty())
            .map(str::to_string)
    };

    let mut nutrients = [None; NUTRIENT_DIM];
    for (j, &index) in columns.nutrients.iter().enumerate() {
        nutrients[j] = fields.get(index).and_then(|field| parse_number(field));
    }

    RawFoodRow {
        name: text_at(columns.name),
        category: text_at(columns.category),
        nutrients,
    }
}

/// 数値フィールドをパースする
///
/// 空文字・非数値・非有限値（NaN/inf）は欠損扱いでNone。
pub fn parse_number(field: &str) -> Option<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// CSV行をパース（ダブルクォート対応）
pub fn parse_csv_line(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut field_start = 0;
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == ',' && !in_quotes {
            // フィールド終了
            let field = &line[field_start..byte_index(line, i)];
            fields.push(trim_quotes(field));
            field_start = byte_index(line, i + 1);
        }
        i += 1;
    }

    // 最後のフィールド
    if field_start <= line.len() {
        let field = &line[field_start..];
        fields.push(trim_quotes(field));
    }

    fields
}

fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn trim_quotes(s: &str) -> &str {
    let s = s.trim();
    if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
