//! 食品マッチングモジュール
//!
//! プロフィール → 栄養ターゲット → スケーリング → k近傍検索 →
//! 食事スロット割り当て、までの推薦パイプライン本体。

use crate::catalog::Catalog;
use crate::error::{DietAiError, Result};
use crate::model::ModelFile;
use diet_ai_common::nutrition::{calculate_bmi, compute_target, BmiCategory};
use diet_ai_common::{MealPlan, MealSlot, PlannedMeal, UserProfile};

/// プロフィールから食事プランを生成する
///
/// 返されるプランの食事は距離の昇順。カタログがk件未満なら
/// その分だけ短いプランになる（エラーにしない）。
pub fn generate_meal_plan(
    profile: &UserProfile,
    model: &ModelFile,
    catalog: &Catalog,
    k: usize,
) -> Result<MealPlan> {
    if catalog.is_empty() {
        return Err(DietAiError::EmptyCatalog);
    }

    // インデックスはカタログと同じ並び・同じ件数で学習されている前提
    if model.index.len() != catalog.len() {
        return Err(DietAiError::InvalidModel(format!(
            "インデックス件数({})がカタログ件数({})と一致しません。データセットを変更した場合は再学習してください",
            model.index.len(),
            catalog.len()
        )));
    }

    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
    let target = compute_target(profile);

    let scaled = model.scaler.transform(&target.to_vector());
    let neighbors = model.index.k_nearest(&scaled, k);

    let meals: Vec<PlannedMeal> = neighbors
        .iter()
        .enumerate()
        .map(|(position, neighbor)| PlannedMeal {
            slot: MealSlot::for_index(position),
            distance: neighbor.distance,
            food: catalog.entries()[neighbor.index].clone(),
        })
        .collect();

    Ok(MealPlan {
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        calories: target.calories,
        target,
        meals,
    })
}
