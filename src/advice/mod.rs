mod coach;
mod meals;
mod workouts;

pub use coach::coach_response;
pub use meals::{diet_goal_for, meal_plan, recipes_for, DietGoal, MealPlan, Recipe};
pub use workouts::{station_workouts, StationWorkout, MAINTENANCE_PLAN};
