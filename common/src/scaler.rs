//! 特徴量スケーラモジュール
//!
//! 栄養列ごとに平均0・分散1へ標準化する。距離計算の前に
//! カタログ側・クエリ側の両方へ同じ変換を適用する。

use crate::error::{Error, Result};
use crate::types::{NutrientVector, NUTRIENT_COLUMNS, NUTRIENT_DIM};
use serde::{Deserialize, Serialize};

/// 列ごとの標準化パラメータ（学習時にフィットし、モデルと一緒に永続化）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// 列ごとの平均
    mean: Vec<f64>,
    /// 列ごとの標準偏差（母標準偏差、全列 > 0）
    std: Vec<f64>,
}

impl StandardScaler {
    /// 栄養ベクトル集合から平均・標準偏差をフィットする
    ///
    /// 標準偏差は母標準偏差（nで割る）。分散ゼロの列があれば
    /// `DegenerateColumn`、入力が空なら`EmptyCatalog`で失敗する。
    pub fn fit(rows: &[NutrientVector]) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        let n = rows.len() as f64;

        let mut mean = vec![0.0; NUTRIENT_DIM];
        for (j, mean_j) in mean.iter_mut().enumerate() {
            *mean_j = rows.iter().map(|row| row[j]).sum::<f64>() / n;
        }

        let mut std = vec![0.0; NUTRIENT_DIM];
        for (j, std_j) in std.iter_mut().enumerate() {
            let sum_sq: f64 = rows
                .iter()
                .map(|row| {
                    let diff = row[j] - mean[j];
                    diff * diff
                })
                .sum();
            *std_j = (sum_sq / n).sqrt();

            if *std_j == 0.0 {
                return Err(Error::DegenerateColumn {
                    column: NUTRIENT_COLUMNS[j].to_string(),
                });
            }
        }

        Ok(Self { mean, std })
    }

    /// 1ベクトルを標準化する
    pub fn transform(&self, vector: &NutrientVector) -> NutrientVector {
        let mut scaled = [0.0; NUTRIENT_DIM];
        for j in 0..NUTRIENT_DIM {
            scaled[j] = (vector[j] - self.mean[j]) / self.std[j];
        }
        scaled
    }

    /// 列ごとの平均
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// 列ごとの標準偏差
    pub fn std(&self) -> &[f64] {
        &self.std
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(calories: f64, protein: f64) -> NutrientVector {
        // 他6列は行ごとに変えて分散ゼロを避ける
        [
            calories,
            protein,
            calories * 0.5,
            protein * 0.2,
            calories * 0.01,
            protein * 0.3,
            calories + 1.0,
            protein + 2.0,
        ]
    }

    #[test]
    fn test_fit_mean_and_std() {
        let rows = vec![vector(100.0, 10.0), vector(300.0, 30.0)];
        let scaler = StandardScaler::fit(&rows).unwrap();

        assert_eq!(scaler.mean()[0], 200.0);
        assert_eq!(scaler.mean()[1], 20.0);
        // 母標準偏差: sqrt(((100-200)^2 + (300-200)^2) / 2) = 100
        assert_eq!(scaler.std()[0], 100.0);
        assert_eq!(scaler.std()[1], 10.0);
    }

    #[test]
    fn test_transform_centers_and_scales() {
        let rows = vec![vector(100.0, 10.0), vector(300.0, 30.0)];
        let scaler = StandardScaler::fit(&rows).unwrap();

        let scaled = scaler.transform(&vector(100.0, 10.0));
        assert_eq!(scaled[0], -1.0);
        assert_eq!(scaled[1], -1.0);

        let scaled = scaler.transform(&vector(300.0, 30.0));
        assert_eq!(scaled[0], 1.0);
        assert_eq!(scaled[1], 1.0);
    }

    #[test]
    fn test_fit_empty_fails() {
        let result = StandardScaler::fit(&[]);
        assert!(matches!(result, Err(Error::EmptyCatalog)));
    }

    #[test]
    fn test_fit_degenerate_column_fails() {
        // 全行で同じベクトル → 全列の分散がゼロ
        let rows = vec![vector(100.0, 10.0), vector(100.0, 10.0)];
        let result = StandardScaler::fit(&rows);

        match result {
            Err(Error::DegenerateColumn { column }) => {
                assert_eq!(column, "Calories (kcal)");
            }
            other => panic!("DegenerateColumnになるべき: {:?}", other),
        }
    }

    #[test]
    fn test_scaler_serde_roundtrip() {
        let rows = vec![vector(100.0, 10.0), vector(300.0, 30.0)];
        let scaler = StandardScaler::fit(&rows).unwrap();

        let json = serde_json::to_string(&scaler).unwrap();
        let loaded: StandardScaler = serde_json::from_str(&json).unwrap();
        assert_eq!(scaler, loaded);
    }
}
