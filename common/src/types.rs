//! 共有型定義
//!
//! CLIと将来のフロントエンドで共有される型:
//! - FoodEntry: 栄養データセットの1行（クリーニング済み）
//! - UserProfile: 推薦リクエスト1件分のユーザー情報
//! - NutrientTarget: プロフィールから導出した1日の栄養ターゲット
//! - MealPlan: 推薦結果（BMI + カロリー + 食事スロット）

use serde::{Deserialize, Serialize};

/// 栄養ベクトルの次元数
pub const NUTRIENT_DIM: usize = 8;

/// データセットの栄養列（この順でベクトル化する）
pub const NUTRIENT_COLUMNS: [&str; NUTRIENT_DIM] = [
    "Calories (kcal)",
    "Protein (g)",
    "Carbohydrates (g)",
    "Fat (g)",
    "Fiber (g)",
    "Sugars (g)",
    "Sodium (mg)",
    "Cholesterol (mg)",
];

/// 8次元の栄養ベクトル
pub type NutrientVector = [f64; NUTRIENT_DIM];

/// 食品エントリ（カタログの1行）
///
/// JSONのフィールド名はデータセットの列名に合わせる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    #[serde(rename = "Food_Item")]
    pub name: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Calories (kcal)")]
    pub calories: f64,

    #[serde(rename = "Protein (g)")]
    pub protein: f64,

    #[serde(rename = "Carbohydrates (g)")]
    pub carbohydrates: f64,

    #[serde(rename = "Fat (g)")]
    pub fat: f64,

    #[serde(rename = "Fiber (g)")]
    pub fiber: f64,

    #[serde(rename = "Sugars (g)")]
    pub sugars: f64,

    #[serde(rename = "Sodium (mg)")]
    pub sodium: f64,

    #[serde(rename = "Cholesterol (mg)")]
    pub cholesterol: f64,
}

impl FoodEntry {
    /// 栄養列順の8次元ベクトルを返す
    pub fn nutrient_vector(&self) -> NutrientVector {
        [
            self.calories,
            self.protein,
            self.carbohydrates,
            self.fat,
            self.fiber,
            self.sugars,
            self.sodium,
            self.cholesterol,
        ]
    }
}

/// 性別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// 正式ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    /// 全選択肢
    pub fn all() -> [Sex; 2] {
        [Sex::Male, Sex::Female]
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(format!("Unknown sex: {}. Use male or female", s)),
        }
    }
}

/// 活動レベル
///
/// ラベルはデータ入力画面の選択肢と一字一句同じ（大文字小文字も区別）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// 運動なし: 係数1.2
    #[default]
    #[serde(rename = "Little/no exercise")]
    LittleNoExercise,
    /// 軽い運動: 係数1.375
    #[serde(rename = "Light exercise (1-3 days/week)")]
    LightExercise,
    /// 中程度: 係数1.55
    #[serde(rename = "Moderate exercise (3-5 days/week)")]
    ModerateExercise,
    /// 激しい運動: 係数1.725
    #[serde(rename = "Heavy exercise (6-7 days/week)")]
    HeavyExercise,
    /// 非常に激しい運動: 係数1.9
    #[serde(rename = "Very heavy exercise (twice/day, intense)")]
    VeryHeavyExercise,
}

impl ActivityLevel {
    /// 正式ラベル
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::LittleNoExercise => "Little/no exercise",
            ActivityLevel::LightExercise => "Light exercise (1-3 days/week)",
            ActivityLevel::ModerateExercise => "Moderate exercise (3-5 days/week)",
            ActivityLevel::HeavyExercise => "Heavy exercise (6-7 days/week)",
            ActivityLevel::VeryHeavyExercise => "Very heavy exercise (twice/day, intense)",
        }
    }

    /// BMRに掛ける活動係数
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::LittleNoExercise => 1.2,
            ActivityLevel::LightExercise => 1.375,
            ActivityLevel::ModerateExercise => 1.55,
            ActivityLevel::HeavyExercise => 1.725,
            ActivityLevel::VeryHeavyExercise => 1.9,
        }
    }

    /// ラベル文字列から変換（完全一致）
    ///
    /// 未知のラベルはデフォルト（運動なし、係数1.2）にフォールバックし、
    /// 失敗しない。
    pub fn from_label(label: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|level| level.label() == label)
            .unwrap_or_default()
    }

    /// 全選択肢（選択UI用、係数の昇順）
    pub fn all() -> [ActivityLevel; 5] {
        [
            ActivityLevel::LittleNoExercise,
            ActivityLevel::LightExercise,
            ActivityLevel::ModerateExercise,
            ActivityLevel::HeavyExercise,
            ActivityLevel::VeryHeavyExercise,
        ]
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    /// CLI用の短縮形を受け付ける。それ以外は`from_label`に委譲するため
    /// 失敗しない。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "little" | "none" | "sedentary" => Ok(ActivityLevel::LittleNoExercise),
            "light" => Ok(ActivityLevel::LightExercise),
            "moderate" => Ok(ActivityLevel::ModerateExercise),
            "heavy" => Ok(ActivityLevel::HeavyExercise),
            "very-heavy" | "veryheavy" | "intense" => Ok(ActivityLevel::VeryHeavyExercise),
            _ => Ok(ActivityLevel::from_label(s)),
        }
    }
}

/// 体重目標
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    /// -1000 kcal
    #[serde(rename = "Extreme weight loss")]
    ExtremeWeightLoss,
    /// -500 kcal
    #[serde(rename = "Weight loss")]
    WeightLoss,
    /// -200 kcal
    #[serde(rename = "Mild weight loss")]
    MildWeightLoss,
    /// 調整なし
    #[default]
    #[serde(rename = "Maintain weight")]
    MaintainWeight,
    /// +200 kcal
    #[serde(rename = "Mild weight gain")]
    MildWeightGain,
    /// +500 kcal
    #[serde(rename = "Weight gain")]
    WeightGain,
    /// +1000 kcal
    #[serde(rename = "Extreme weight gain")]
    ExtremeWeightGain,
}

impl Goal {
    /// 正式ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Goal::ExtremeWeightLoss => "Extreme weight loss",
            Goal::WeightLoss => "Weight loss",
            Goal::MildWeightLoss => "Mild weight loss",
            Goal::MaintainWeight => "Maintain weight",
            Goal::MildWeightGain => "Mild weight gain",
            Goal::WeightGain => "Weight gain",
            Goal::ExtremeWeightGain => "Extreme weight gain",
        }
    }

    /// 必要カロリーへの加算量（kcal）
    pub fn adjustment(&self) -> f64 {
        match self {
            Goal::ExtremeWeightLoss => -1000.0,
            Goal::WeightLoss => -500.0,
            Goal::MildWeightLoss => -200.0,
            Goal::MaintainWeight => 0.0,
            Goal::MildWeightGain => 200.0,
            Goal::WeightGain => 500.0,
            Goal::ExtremeWeightGain => 1000.0,
        }
    }

    /// ラベル文字列から変換（完全一致）
    ///
    /// 未知のラベルは維持（調整なし）にフォールバックし、失敗しない。
    pub fn from_label(label: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|goal| goal.label() == label)
            .unwrap_or_default()
    }

    /// 全選択肢（選択UI用、調整量の昇順）
    pub fn all() -> [Goal; 7] {
        [
            Goal::ExtremeWeightLoss,
            Goal::WeightLoss,
            Goal::MildWeightLoss,
            Goal::MaintainWeight,
            Goal::MildWeightGain,
            Goal::WeightGain,
            Goal::ExtremeWeightGain,
        ]
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    /// CLI用の短縮形を受け付ける。それ以外は`from_label`に委譲するため
    /// 失敗しない。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extreme-loss" => Ok(Goal::ExtremeWeightLoss),
            "loss" | "lose" => Ok(Goal::WeightLoss),
            "mild-loss" => Ok(Goal::MildWeightLoss),
            "maintain" | "keep" => Ok(Goal::MaintainWeight),
            "mild-gain" => Ok(Goal::MildWeightGain),
            "gain" => Ok(Goal::WeightGain),
            "extreme-gain" => Ok(Goal::ExtremeWeightGain),
            _ => Ok(Goal::from_label(s)),
        }
    }
}

/// ユーザープロフィール（推薦リクエスト1件分、永続化しない）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub sex: Sex,
    /// 年齢（1〜120）
    pub age: u32,
    /// 身長cm（100〜250）
    pub height_cm: f64,
    /// 体重kg（20〜200）
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

/// 1日の栄養ターゲット（8次元、プロフィールから導出）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientTarget {
    /// kcal（整数に丸め済み）
    pub calories: f64,
    /// g
    pub protein: f64,
    /// g（極端な低カロリー設定では負になりうる。クランプしない）
    pub carbohydrates: f64,
    /// g
    pub fat: f64,
    /// g
    pub fiber: f64,
    /// g
    pub sugars: f64,
    /// mg（固定値2300）
    pub sodium: f64,
    /// mg（固定値300）
    pub cholesterol: f64,
}

impl NutrientTarget {
    /// 栄養列順の8次元ベクトルを返す（FoodEntryと同順）
    pub fn to_vector(&self) -> NutrientVector {
        [
            self.calories,
            self.protein,
            self.carbohydrates,
            self.fat,
            self.fiber,
            self.sugars,
            self.sodium,
            self.cholesterol,
        ]
    }
}

/// 食事スロット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// 推薦リストの位置からスロットを割り当てる（4件目以降は間食）
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => MealSlot::Breakfast,
            1 => MealSlot::Lunch,
            2 => MealSlot::Dinner,
            _ => MealSlot::Snack,
        }
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealSlot::Breakfast => write!(f, "朝食"),
            MealSlot::Lunch => write!(f, "昼食"),
            MealSlot::Dinner => write!(f, "夕食"),
            MealSlot::Snack => write!(f, "間食"),
        }
    }
}

/// 推薦された1食
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    pub slot: MealSlot,
    /// ターゲットとのスケール済みユークリッド距離
    pub distance: f64,
    pub food: FoodEntry,
}

/// 推薦結果（1リクエスト分の食事プラン）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// BMI（小数2桁）
    pub bmi: f64,
    pub bmi_category: crate::nutrition::BmiCategory,
    /// 1日の必要カロリー（kcal）
    pub calories: f64,
    pub target: NutrientTarget,
    /// 距離の昇順。カタログがk件未満なら短くなる
    pub meals: Vec<PlannedMeal>,
}
