//! 栄養ターゲット計算モジュール
//!
//! ユーザープロフィールからBMIと1日の栄養ターゲット（8次元）を導出する。
//!
//! ## 計算フロー
//! 1. BMI = 体重kg / (身長m)^2
//! 2. BMR（Mifflin-St Jeor式）
//! 3. 必要カロリー = BMR × 活動係数 + 目標調整
//! 4. カロリーからマクロ栄養素を配分

use crate::types::{NutrientTarget, Sex, UserProfile};
use serde::{Deserialize, Serialize};

/// ナトリウムの固定ターゲット（mg/日）
pub const SODIUM_TARGET_MG: f64 = 2300.0;

/// コレステロールの固定ターゲット（mg/日）
pub const CHOLESTEROL_TARGET_MG: f64 = 300.0;

/// 小数2桁に丸める
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// BMIを計算する（小数2桁）
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

/// BMI区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// BMI値から区分を判定する
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// 表示用アドバイス
    pub fn advice(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "低体重です。栄養豊富な食事を心がけてください。",
            BmiCategory::Normal => "標準的なBMIです。バランスの良い食事を維持しましょう。",
            BmiCategory::Overweight => "過体重です。カロリー摂取を抑えることを意識してください。",
            BmiCategory::Obese => "肥満です。食事制限と運動の計画を立ててください。",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "低体重"),
            BmiCategory::Normal => write!(f, "標準"),
            BmiCategory::Overweight => write!(f, "過体重"),
            BmiCategory::Obese => write!(f, "肥満"),
        }
    }
}

/// 基礎代謝量（Mifflin-St Jeor式）
pub fn basal_metabolic_rate(sex: Sex, age: u32, weight_kg: f64, height_cm: f64) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// プロフィールから1日の栄養ターゲットを計算する
///
/// 全分岐が全域（失敗しない）。マクロ配分:
/// - たんぱく質: 体重 × 1.2 g
/// - 脂質: カロリーの25%（9 kcal/g）
/// - 糖類: カロリーの10%（4 kcal/g）
/// - 炭水化物: 残りカロリーを4 kcal/gで換算（負になってもクランプしない）
/// - 食物繊維: 炭水化物の10%
pub fn compute_target(profile: &UserProfile) -> NutrientTarget {
    let bmr = basal_metabolic_rate(
        profile.sex,
        profile.age,
        profile.weight_kg,
        profile.height_cm,
    );
    let calorie_needs = bmr * profile.activity_level.multiplier();
    let calories = (calorie_needs + profile.goal.adjustment()).round();

    let protein = round2(profile.weight_kg * 1.2);
    let fat = round2(calories * 0.25 / 9.0);
    let sugars = round2(calories * 0.1 / 4.0);
    let carbohydrates = round2((calories - (protein * 4.0 + fat * 9.0 + sugars * 4.0)) / 4.0);
    let fiber = round2(carbohydrates * 0.1);

    NutrientTarget {
        calories,
        protein,
        carbohydrates,
        fat,
        fiber,
        sugars,
        sodium: SODIUM_TARGET_MG,
        cholesterol: CHOLESTEROL_TARGET_MG,
    }
}
