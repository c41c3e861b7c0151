//! 食事プランのテキスト描画

use diet_ai_common::MealPlan;

/// プランを端末表示用の文字列に描画する
pub fn render_plan(plan: &MealPlan) -> String {
    let mut out = String::new();

    out.push_str("あなたの食事プラン\n");
    out.push_str("==================\n\n");
    out.push_str(&format!(
        "BMI: {} kg/m²（{}）\n",
        plan.bmi, plan.bmi_category
    ));
    out.push_str(&format!("  → {}\n", plan.bmi_category.advice()));
    out.push_str(&format!("1日の必要カロリー: {} kcal\n", plan.calories));
    out.push_str(&format!(
        "ターゲット: たんぱく質 {} g / 炭水化物 {} g / 脂質 {} g\n\n",
        plan.target.protein, plan.target.carbohydrates, plan.target.fat
    ));

    if plan.meals.is_empty() {
        out.push_str("推薦できる食品がありません\n");
        return out;
    }

    for meal in &plan.meals {
        let food = &meal.food;
        out.push_str(&format!("── {}: {} ──\n", meal.slot, food.name));
        out.push_str(&format!("  カテゴリ: {}\n", food.category));
        out.push_str(&format!("  カロリー: {} kcal\n", food.calories));
        out.push_str(&format!(
            "  たんぱく質: {} g | 炭水化物: {} g | 脂質: {} g\n",
            food.protein, food.carbohydrates, food.fat
        ));
        out.push_str(&format!(
            "  食物繊維: {} g | 糖類: {} g\n",
            food.fiber, food.sugars
        ));
        out.push_str(&format!(
            "  ナトリウム: {} mg | コレステロール: {} mg\n\n",
            food.sodium, food.cholesterol
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use diet_ai_common::nutrition::BmiCategory;
    use diet_ai_common::{FoodEntry, MealSlot, NutrientTarget, PlannedMeal};

    fn test_plan() -> MealPlan {
        MealPlan {
            bmi: 24.22,
            bmi_category: BmiCategory::Normal,
            calories: 1971.0,
            target: NutrientTarget {
                calories: 1971.0,
                protein: 84.0,
                carbohydrates: 236.28,
                fat: 54.75,
                fiber: 23.63,
                sugars: 49.28,
                sodium: 2300.0,
                cholesterol: 300.0,
            },
            meals: vec![PlannedMeal {
                slot: MealSlot::Breakfast,
                distance: 0.5,
                food: FoodEntry {
                    name: "Oatmeal".into(),
                    category: "Grains".into(),
                    calories: 150.0,
                    protein: 5.0,
                    carbohydrates: 27.0,
                    fat: 3.0,
                    fiber: 4.0,
                    sugars: 1.0,
                    sodium: 2.0,
                    cholesterol: 0.0,
                },
            }],
        }
    }

    #[test]
    fn test_render_plan_contains_profile_summary() {
        let text = render_plan(&test_plan());
        assert!(text.contains("BMI: 24.22"));
        assert!(text.contains("標準"));
        assert!(text.contains("1971 kcal"));
    }

    #[test]
    fn test_render_plan_contains_meal_block() {
        let text = render_plan(&test_plan());
        assert!(text.contains("朝食: Oatmeal"));
        assert!(text.contains("カテゴリ: Grains"));
        assert!(text.contains("ナトリウム: 2 mg"));
    }

    #[test]
    fn test_render_plan_empty_meals() {
        let mut plan = test_plan();
        plan.meals.clear();
        let text = render_plan(&plan);
        assert!(text.contains("推薦できる食品がありません"));
    }
}
