//! モデル永続化モジュール
//!
//! オフライン学習の成果物（スケーラ＋最近傍インデックス）を
//! 1つのJSONファイルとして保存・読み込みする。学習元データセットの
//! SHA-256ハッシュを持ち、推薦時にデータセットとの食い違いを検出する。

use crate::catalog::Catalog;
use crate::error::{DietAiError, Result};
use diet_ai_common::{NearestNeighbors, NutrientVector, StandardScaler};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// モデルファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    /// バージョン（互換性チェック用）
    version: u32,
    /// 学習日時
    pub created_at: String,
    /// 学習元データセットのSHA-256ハッシュ
    pub dataset_hash: String,
    /// 学習時のカタログ件数
    pub entry_count: usize,
    /// 列ごとの標準化パラメータ
    pub scaler: StandardScaler,
    /// スケール済みベクトルの最近傍インデックス
    pub index: NearestNeighbors,
}

impl ModelFile {
    const CURRENT_VERSION: u32 = 1;

    /// カタログからスケーラをフィットし、インデックスを構築する
    ///
    /// 空カタログは`EmptyCatalog`、分散ゼロの栄養列があれば
    /// `DegenerateColumn`で失敗する。
    pub fn train(catalog: &Catalog, dataset_hash: String) -> Result<Self> {
        let vectors: Vec<NutrientVector> = catalog
            .entries()
            .iter()
            .map(|entry| entry.nutrient_vector())
            .collect();

        let scaler = StandardScaler::fit(&vectors)?;
        let scaled: Vec<NutrientVector> = vectors
            .iter()
            .map(|vector| scaler.transform(vector))
            .collect();
        let index = NearestNeighbors::fit(scaled);

        Ok(Self {
            version: Self::CURRENT_VERSION,
            created_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            dataset_hash,
            entry_count: catalog.len(),
            scaler,
            index,
        })
    }

    /// モデルファイルを保存する
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// モデルファイルを読み込む
    ///
    /// 欠損・破損・バージョン不一致はすべてエラー（起動時に即失敗させる）。
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DietAiError::ModelNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let model: ModelFile = serde_json::from_reader(reader)?;

        if model.version != Self::CURRENT_VERSION {
            return Err(DietAiError::ModelVersionMismatch {
                expected: Self::CURRENT_VERSION,
                found: model.version,
            });
        }

        Ok(model)
    }

    /// モデルバージョン
    pub fn version(&self) -> u32 {
        self.version
    }

    /// 学習元データセットと一致するか
    pub fn matches_dataset(&self, dataset_hash: &str) -> bool {
        self.dataset_hash == dataset_hash
    }
}

/// データセットファイルのSHA-256ハッシュを計算する
pub fn compute_dataset_hash(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
