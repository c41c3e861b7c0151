//! Diet AI Common Library
//!
//! CLIと将来のフロントエンドで共有される型と計算コア

pub mod error;
pub mod knn;
pub mod nutrition;
pub mod scaler;
pub mod types;

pub use error::{Error, Result};
pub use knn::{NearestNeighbors, Neighbor};
pub use nutrition::{calculate_bmi, compute_target, BmiCategory};
pub use scaler::StandardScaler;
pub use types::{
    ActivityLevel, FoodEntry, Goal, MealPlan, MealSlot, NutrientTarget, NutrientVector,
    PlannedMeal, Sex, UserProfile, NUTRIENT_COLUMNS, NUTRIENT_DIM,
};
