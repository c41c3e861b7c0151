use clap::{Parser, Subcommand};
use diet_ai_common::{ActivityLevel, Goal, Sex};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "diet-ai")]
#[command(about = "パーソナル食事推薦ツール（栄養ターゲット計算＋食品マッチング）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 栄養データセットからスケーラと最近傍インデックスを学習
    Train {
        /// データセットCSV（省略時は設定またはカレントのデフォルト名）
        dataset: Option<PathBuf>,

        /// 出力モデルファイル（デフォルト: diet_model.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// プロフィールから1日の食事プランを生成
    Recommend {
        /// 性別 (male/female)
        #[arg(long, default_value = "male")]
        sex: Sex,

        /// 年齢
        #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(1..=120))]
        age: u32,

        /// 身長cm
        #[arg(long, default_value_t = 170, value_parser = clap::value_parser!(u32).range(100..=250))]
        height: u32,

        /// 体重kg
        #[arg(long, default_value_t = 70, value_parser = clap::value_parser!(u32).range(20..=200))]
        weight: u32,

        /// 活動レベル (little/light/moderate/heavy/very-heavy)
        #[arg(long, default_value = "little")]
        activity: ActivityLevel,

        /// 体重目標 (extreme-loss/loss/mild-loss/maintain/mild-gain/gain/extreme-gain)
        #[arg(long, default_value = "maintain")]
        goal: Goal,

        /// 対話式でプロフィールを入力（指定時は上のフラグを無視）
        #[arg(short, long)]
        interactive: bool,

        /// 推薦件数（省略時は設定値、通常4 = 朝食/昼食/夕食/間食）
        #[arg(short, long)]
        k: Option<usize>,

        /// モデルファイル
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// データセットCSV
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// 出力形式 (text/json/both)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// JSON出力先（デフォルト: meal_plan.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 利用可能なデータセットCSVを一覧表示
    Datasets {
        /// 検索ディレクトリ（省略時はカレント）
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// 学習済みモデルの情報を表示
    Model {
        /// モデルファイル（省略時は設定またはデフォルトパス）
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// デフォルトのデータセットCSVを設定
        #[arg(long)]
        set_dataset: Option<PathBuf>,

        /// デフォルトのモデルファイルを設定
        #[arg(long)]
        set_model: Option<PathBuf>,

        /// デフォルトの推薦件数を設定
        #[arg(long)]
        set_k: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// プラン出力形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "t" => Ok(OutputFormat::Text),
            "json" | "j" => Ok(OutputFormat::Json),
            "both" => Ok(OutputFormat::Both),
            _ => Err(format!("Unknown format: {}. Use text, json, or both", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Both => write!(f, "both"),
        }
    }
}
