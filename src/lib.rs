//! diet-ai-rust ライブラリルート
//!
//! パイプライン: データセット読み込み（catalog） → 学習（model） →
//! ターゲット計算＋マッチング（matcher） → 出力（export）

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interactive;
pub mod matcher;
pub mod model;
