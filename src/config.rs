use crate::error::{DietAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// データセットCSVのデフォルトファイル名
pub const DEFAULT_DATASET_FILE: &str = "daily_food_nutrition_dataset.csv";

/// モデルファイルのデフォルトファイル名
pub const DEFAULT_MODEL_FILE: &str = "diet_model.json";

/// 推薦件数（食事スロット数）のデフォルト
pub const DEFAULT_MEAL_COUNT: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// データセットCSVのパス
    pub dataset_path: Option<PathBuf>,
    /// モデルファイルのパス
    pub model_path: Option<PathBuf>,
    /// 1プランあたりの推薦件数
    pub default_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            model_path: None,
            default_k: DEFAULT_MEAL_COUNT,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DietAiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("diet-ai").join("config.json"))
    }

    /// CLI指定 > 設定ファイル > デフォルトの順でデータセットパスを決める
    pub fn resolve_dataset_path(&self, cli_path: Option<&Path>) -> PathBuf {
        cli_path
            .map(Path::to_path_buf)
            .or_else(|| self.dataset_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_FILE))
    }

    /// CLI指定 > 設定ファイル > デフォルトの順でモデルパスを決める
    pub fn resolve_model_path(&self, cli_path: Option<&Path>) -> PathBuf {
        cli_path
            .map(Path::to_path_buf)
            .or_else(|| self.model_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_FILE))
    }

    pub fn set_dataset_path(&mut self, path: PathBuf) -> Result<()> {
        self.dataset_path = Some(path);
        self.save()
    }

    pub fn set_model_path(&mut self, path: PathBuf) -> Result<()> {
        self.model_path = Some(path);
        self.save()
    }

    pub fn set_default_k(&mut self, k: usize) -> Result<()> {
        self.default_k = k;
        self.save()
    }
}
