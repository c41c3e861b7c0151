pub mod text;

use crate::cli::OutputFormat;
use crate::error::Result;
use diet_ai_common::MealPlan;
use std::path::{Path, PathBuf};

/// JSON出力のデフォルトファイル名
const DEFAULT_JSON_FILE: &str = "meal_plan.json";

fn json_output_path(output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(DEFAULT_JSON_FILE),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(DEFAULT_JSON_FILE),
    }
}

/// プランを指定形式で出力する
pub fn export_plan(plan: &MealPlan, format: &OutputFormat, output: Option<&Path>) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", text::render_plan(plan));
        }
        OutputFormat::Json => {
            let path = json_output_path(output);
            write_json(plan, &path)?;
            println!("✔ JSON出力: {}", path.display());
        }
        OutputFormat::Both => {
            println!("{}", text::render_plan(plan));

            let path = json_output_path(output);
            write_json(plan, &path)?;
            println!("✔ JSON出力: {}", path.display());
        }
    }

    Ok(())
}

fn write_json(plan: &MealPlan, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    std::fs::write(path, json)?;
    Ok(())
}
