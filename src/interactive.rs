//! 対話式プロフィール入力モジュール
//!
//! フラグ指定の代わりに、選択メニューと数値入力で
//! ユーザープロフィールを組み立てる。
//!
//! ## 変更履歴
//! - 2026-08-06: 初期作成

use crate::error::{DietAiError, Result};
use diet_ai_common::{ActivityLevel, Goal, Sex, UserProfile};
use dialoguer::{Input, Select};

/// 対話式でプロフィールを入力する
pub fn run_interactive_profile() -> Result<UserProfile> {
    println!("プロフィールを入力してください\n");

    let sex = select_from("性別", &Sex::all())?;
    let age: u32 = prompt_number("年齢", 25, 1, 120)?;
    let height: u32 = prompt_number("身長 (cm)", 170, 100, 250)?;
    let weight: u32 = prompt_number("体重 (kg)", 70, 20, 200)?;
    let activity_level = select_from("活動レベル", &ActivityLevel::all())?;
    let goal = select_from("体重目標", &Goal::all())?;

    println!();

    Ok(UserProfile {
        sex,
        age,
        height_cm: f64::from(height),
        weight_kg: f64::from(weight),
        activity_level,
        goal,
    })
}

/// 選択肢メニューから1つ選ぶ
fn select_from<T: Copy + std::fmt::Display>(prompt: &str, options: &[T]) -> Result<T> {
    let labels: Vec<String> = options.iter().map(|option| option.to_string()).collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| DietAiError::PromptFailed(e.to_string()))?;

    Ok(options[selection])
}

/// 範囲検証つきの数値入力
fn prompt_number(prompt: &str, default: u32, min: u32, max: u32) -> Result<u32> {
    Input::new()
        .with_prompt(format!("{} [{}-{}]", prompt, min, max))
        .default(default)
        .validate_with(|value: &u32| {
            if (min..=max).contains(value) {
                Ok(())
            } else {
                Err(format!("{}〜{}の範囲で入力してください", min, max))
            }
        })
        .interact_text()
        .map_err(|e| DietAiError::PromptFailed(e.to_string()))
}
