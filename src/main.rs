use clap::Parser;
use diet_ai_rust::{catalog, cli, config, error, export, interactive, matcher, model};

use cli::{Cli, Commands};
use config::Config;
use diet_ai_common::{ActivityLevel, Goal, Sex, UserProfile};
use error::Result;
use model::ModelFile;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Train { dataset, output } => {
            println!("🥗 diet-ai - モデル学習\n");

            let dataset_path = config.resolve_dataset_path(dataset.as_deref());
            let model_path = config.resolve_model_path(output.as_deref());

            // 1. カタログ構築
            println!("[1/3] データセットを読み込み中...");
            let (catalog, stats) = catalog::load_catalog(&dataset_path)?;
            println!(
                "✔ {}件の食品を取得（欠損除外: {}件, 重複除外: {}件）\n",
                catalog.len(),
                stats.dropped_missing,
                stats.dropped_duplicate
            );

            // 2. スケーラ学習＋インデックス構築
            println!("[2/3] スケーラ学習とインデックス構築中...");
            let dataset_hash = model::compute_dataset_hash(&dataset_path)?;
            let model = ModelFile::train(&catalog, dataset_hash)?;
            println!("✔ 学習完了（{}次元 × {}件）\n", diet_ai_common::NUTRIENT_DIM, model.entry_count);

            // 3. 保存
            println!("[3/3] モデルを保存中...");
            model.save(&model_path)?;
            println!("✔ モデルを保存: {}", model_path.display());

            println!("\n✅ 学習完了");
        }

        Commands::Recommend {
            sex,
            age,
            height,
            weight,
            activity,
            goal,
            interactive: use_interactive,
            k,
            model: model_path,
            dataset,
            format,
            output,
        } => {
            println!("🍽  diet-ai - 食事プラン生成\n");

            let profile = if use_interactive {
                interactive::run_interactive_profile()?
            } else {
                build_profile(sex, age, height, weight, activity, goal)
            };

            if cli.verbose {
                println!(
                    "  プロフィール: {} / {}歳 / {}cm / {}kg / {} / {}",
                    profile.sex,
                    profile.age,
                    profile.height_cm,
                    profile.weight_kg,
                    profile.activity_level,
                    profile.goal
                );
            }

            let dataset_path = config.resolve_dataset_path(dataset.as_deref());
            let model_path = config.resolve_model_path(model_path.as_deref());
            let k = k.unwrap_or(config.default_k);

            // 1. モデルとカタログ読み込み
            println!("[1/3] モデルとカタログを読み込み中...");
            let model = ModelFile::load(&model_path)?;
            let (catalog, _) = catalog::load_catalog(&dataset_path)?;

            let dataset_hash = model::compute_dataset_hash(&dataset_path)?;
            if !model.matches_dataset(&dataset_hash) {
                eprintln!("⚠ データセットが学習時と異なります。`diet-ai train` での再学習を推奨します");
            }
            println!("✔ カタログ: {}件 / モデル: v{}（{}）\n", catalog.len(), model.version(), model.created_at);

            // 2. ターゲット計算＋マッチング
            println!("[2/3] 栄養ターゲット計算と食品マッチング中...");
            let plan = matcher::generate_meal_plan(&profile, &model, &catalog, k)?;
            println!("✔ {}件の食品を推薦\n", plan.meals.len());

            // 3. 出力
            println!("[3/3] プランを出力中...\n");
            export::export_plan(&plan, &format, output.as_deref())?;

            println!("✅ 完了");
        }

        Commands::Datasets { dir } => {
            println!("📋 diet-ai - データセット一覧\n");

            let dir = dir.unwrap_or_else(|| std::path::PathBuf::from("."));
            let datasets = catalog::scan_datasets(&dir)?;

            if datasets.is_empty() {
                println!("⚠ {} にデータセットCSVがありません", dir.display());
            } else {
                for info in &datasets {
                    println!("  {} ({}行) - {}", info.name, info.rows, info.path.display());
                }
                println!("\n{}件のデータセットを検出", datasets.len());
            }
        }

        Commands::Model { path } => {
            let model_path = config.resolve_model_path(path.as_deref());

            if !model_path.exists() {
                println!("モデルファイルが存在しません: {}", model_path.display());
                println!("`diet-ai train` で作成してください");
                return Ok(());
            }

            let model = ModelFile::load(&model_path)?;
            println!("モデル情報:");
            println!("  パス: {}", model_path.display());
            println!("  バージョン: v{}", model.version());
            println!("  学習日時: {}", model.created_at);
            println!("  件数: {}", model.entry_count);
            println!("  データセットハッシュ: {}", model.dataset_hash);
            if let Ok(meta) = std::fs::metadata(&model_path) {
                println!("  サイズ: {} bytes", meta.len());
            }
        }

        Commands::Config {
            set_dataset,
            set_model,
            set_k,
            show,
        } => {
            let mut config = config;

            if let Some(path) = set_dataset {
                config.set_dataset_path(path)?;
                println!("✔ データセットパスを設定しました");
            }

            if let Some(path) = set_model {
                config.set_model_path(path)?;
                println!("✔ モデルパスを設定しました");
            }

            if let Some(k) = set_k {
                config.set_default_k(k)?;
                println!("✔ 推薦件数を設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  データセット: {}",
                    config
                        .dataset_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| format!("未設定（デフォルト: {}）", config::DEFAULT_DATASET_FILE))
                );
                println!(
                    "  モデル: {}",
                    config
                        .model_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| format!("未設定（デフォルト: {}）", config::DEFAULT_MODEL_FILE))
                );
                println!("  推薦件数: {}", config.default_k);
            }
        }
    }

    Ok(())
}

fn build_profile(
    sex: Sex,
    age: u32,
    height: u32,
    weight: u32,
    activity_level: ActivityLevel,
    goal: Goal,
) -> UserProfile {
    UserProfile {
        sex,
        age,
        height_cm: f64::from(height),
        weight_kg: f64::from(weight),
        activity_level,
        goal,
    }
}
