use crate::health::BmiCategory;

/// Diet direction derived from the latest BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietGoal {
    MuscleGain,
    Maintenance,
    WeightLoss,
}

impl std::fmt::Display for DietGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DietGoal::MuscleGain => f.write_str("Muscle Gain"),
            DietGoal::Maintenance => f.write_str("Maintenance"),
            DietGoal::WeightLoss => f.write_str("Weight Loss"),
        }
    }
}

/// Underweight students are steered toward gaining, overweight and obese
/// toward losing, everyone else toward maintaining.
pub fn diet_goal_for(category: BmiCategory) -> DietGoal {
    match category {
        BmiCategory::Underweight => DietGoal::MuscleGain,
        BmiCategory::Normal => DietGoal::Maintenance,
        BmiCategory::Overweight | BmiCategory::Obesity => DietGoal::WeightLoss,
    }
}

/// Meal ideas for one diet goal, grouped the way they are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealPlan {
    pub goal: DietGoal,
    pub breakfast: &'static [&'static str],
    pub lunch_dinner: &'static [&'static str],
    pub snacks: &'static [&'static str],
    pub tips: &'static str,
}

pub fn meal_plan(goal: DietGoal) -> MealPlan {
    match goal {
        DietGoal::MuscleGain => MealPlan {
            goal,
            breakfast: &[
                "Oatmeal with banana, nuts, and honey",
                "Whole grain toast with peanut butter and scrambled eggs",
                "Smoothie with milk, banana, oats, and protein powder",
            ],
            lunch_dinner: &[
                "Chicken rice with extra chicken and vegetables",
                "Salmon with quinoa and roasted vegetables",
                "Lean beef with sweet potato and broccoli",
            ],
            snacks: &[
                "Trail mix (nuts, dried fruits)",
                "Greek yogurt with granola",
                "Whole grain crackers with cheese",
            ],
            tips: "Eat 5-6 smaller meals, focus on nutrient-dense foods, stay hydrated.",
        },
        DietGoal::Maintenance => MealPlan {
            goal,
            breakfast: &[
                "Oatmeal with fruits and a glass of milk",
                "Eggs with whole grain toast and fruit",
                "Yogurt parfait with granola and berries",
            ],
            lunch_dinner: &[
                "Balanced plate: half vegetables, quarter protein, quarter carbs",
                "Grilled chicken wrap with salad",
                "Fish with brown rice and stir-fried vegetables",
            ],
            snacks: &[
                "Fresh fruit",
                "A handful of nuts",
                "Vegetable sticks with hummus",
            ],
            tips: "Keep meals balanced and portion sizes steady; hydrate through the day.",
        },
        DietGoal::WeightLoss => MealPlan {
            goal,
            breakfast: &[
                "Egg white omelette with vegetables",
                "Greek yogurt with berries",
                "Oatmeal with a small amount of fruit",
            ],
            lunch_dinner: &[
                "Grilled chicken salad with olive oil and lemon",
                "Steamed fish with broccoli and carrots",
                "Vegetable soup with a lean protein side",
            ],
            snacks: &[
                "Fresh fruit instead of sweets",
                "Vegetable sticks",
                "A small portion of unsalted nuts",
            ],
            tips: "Aim for a small calorie deficit, cut sugary drinks, and keep cardio regular.",
        },
    }
}

/// One curated recipe entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: &'static str,
    pub calories: u32,
    pub protein: &'static str,
    pub carbs: &'static str,
    pub prep_time: &'static str,
    pub ingredients: &'static [&'static str],
}

static WEIGHT_LOSS_RECIPES: [Recipe; 5] = [
    Recipe {
        name: "Grilled Chicken Salad",
        calories: 350,
        protein: "35g",
        carbs: "20g",
        prep_time: "20 min",
        ingredients: &[
            "Chicken breast",
            "Mixed greens",
            "Cherry tomatoes",
            "Cucumber",
            "Olive oil",
            "Lemon",
        ],
    },
    Recipe {
        name: "Steamed Fish with Vegetables",
        calories: 320,
        protein: "40g",
        carbs: "15g",
        prep_time: "25 min",
        ingredients: &[
            "White fish fillet",
            "Broccoli",
            "Carrots",
            "Ginger",
            "Soy sauce",
            "Garlic",
        ],
    },
    Recipe {
        name: "Egg White Omelette",
        calories: 180,
        protein: "20g",
        carbs: "8g",
        prep_time: "10 min",
        ingredients: &[
            "Egg whites (4)",
            "Spinach",
            "Mushrooms",
            "Tomatoes",
            "Black pepper",
        ],
    },
    Recipe {
        name: "Greek Yogurt Bowl",
        calories: 250,
        protein: "18g",
        carbs: "30g",
        prep_time: "5 min",
        ingredients: &[
            "Greek yogurt",
            "Berries",
            "Chia seeds",
            "Honey (small amount)",
            "Almonds",
        ],
    },
    Recipe {
        name: "Vegetable Soup",
        calories: 150,
        protein: "8g",
        carbs: "25g",
        prep_time: "30 min",
        ingredients: &[
            "Mixed vegetables",
            "Vegetable broth",
            "Garlic",
            "Onion",
            "Herbs",
        ],
    },
];

static MUSCLE_GAIN_RECIPES: [Recipe; 5] = [
    Recipe {
        name: "Chicken Rice Bowl",
        calories: 650,
        protein: "50g",
        carbs: "70g",
        prep_time: "30 min",
        ingredients: &[
            "Chicken breast",
            "Brown rice",
            "Sweet potato",
            "Broccoli",
            "Olive oil",
        ],
    },
    Recipe {
        name: "Salmon with Quinoa",
        calories: 700,
        protein: "45g",
        carbs: "60g",
        prep_time: "25 min",
        ingredients: &["Salmon fillet", "Quinoa", "Avocado", "Spinach", "Lemon"],
    },
    Recipe {
        name: "Protein Smoothie Bowl",
        calories: 550,
        protein: "40g",
        carbs: "65g",
        prep_time: "10 min",
        ingredients: &[
            "Protein powder",
            "Banana",
            "Oats",
            "Peanut butter",
            "Milk",
            "Berries",
        ],
    },
    Recipe {
        name: "Beef Stir Fry",
        calories: 600,
        protein: "48g",
        carbs: "50g",
        prep_time: "20 min",
        ingredients: &[
            "Lean beef",
            "Mixed vegetables",
            "Brown rice",
            "Soy sauce",
            "Garlic",
            "Ginger",
        ],
    },
    Recipe {
        name: "Tuna Pasta",
        calories: 620,
        protein: "42g",
        carbs: "75g",
        prep_time: "20 min",
        ingredients: &[
            "Whole wheat pasta",
            "Canned tuna",
            "Cherry tomatoes",
            "Olive oil",
            "Garlic",
            "Basil",
        ],
    },
];

static MAINTENANCE_RECIPES: [Recipe; 5] = [
    Recipe {
        name: "Balanced Buddha Bowl",
        calories: 500,
        protein: "28g",
        carbs: "55g",
        prep_time: "25 min",
        ingredients: &[
            "Chickpeas",
            "Quinoa",
            "Mixed greens",
            "Avocado",
            "Cherry tomatoes",
            "Tahini",
        ],
    },
    Recipe {
        name: "Chicken Wrap",
        calories: 480,
        protein: "35g",
        carbs: "45g",
        prep_time: "15 min",
        ingredients: &[
            "Whole wheat wrap",
            "Grilled chicken",
            "Lettuce",
            "Tomato",
            "Hummus",
            "Cucumber",
        ],
    },
    Recipe {
        name: "Egg Fried Rice",
        calories: 520,
        protein: "22g",
        carbs: "62g",
        prep_time: "20 min",
        ingredients: &[
            "Brown rice",
            "Eggs",
            "Mixed vegetables",
            "Soy sauce",
            "Spring onions",
        ],
    },
    Recipe {
        name: "Grilled Fish Tacos",
        calories: 450,
        protein: "32g",
        carbs: "48g",
        prep_time: "20 min",
        ingredients: &[
            "White fish",
            "Corn tortillas",
            "Cabbage",
            "Lime",
            "Greek yogurt",
            "Cilantro",
        ],
    },
    Recipe {
        name: "Oatmeal with Fruits",
        calories: 380,
        protein: "15g",
        carbs: "58g",
        prep_time: "10 min",
        ingredients: &["Oats", "Milk", "Banana", "Berries", "Honey", "Nuts"],
    },
];

pub fn recipes_for(goal: DietGoal) -> &'static [Recipe] {
    match goal {
        DietGoal::WeightLoss => &WEIGHT_LOSS_RECIPES,
        DietGoal::MuscleGain => &MUSCLE_GAIN_RECIPES,
        DietGoal::Maintenance => &MAINTENANCE_RECIPES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_goal_mapping() {
        assert_eq!(diet_goal_for(BmiCategory::Underweight), DietGoal::MuscleGain);
        assert_eq!(diet_goal_for(BmiCategory::Normal), DietGoal::Maintenance);
        assert_eq!(diet_goal_for(BmiCategory::Overweight), DietGoal::WeightLoss);
        assert_eq!(diet_goal_for(BmiCategory::Obesity), DietGoal::WeightLoss);
    }

    #[test]
    fn test_each_goal_has_recipes_and_meals() {
        for goal in [DietGoal::MuscleGain, DietGoal::Maintenance, DietGoal::WeightLoss] {
            assert_eq!(recipes_for(goal).len(), 5);
            let plan = meal_plan(goal);
            assert_eq!(plan.goal, goal);
            assert!(!plan.breakfast.is_empty());
            assert!(!plan.lunch_dinner.is_empty());
            assert!(!plan.snacks.is_empty());
        }
    }

    #[test]
    fn test_weight_loss_recipes_are_lighter_than_gain() {
        let max_loss = recipes_for(DietGoal::WeightLoss)
            .iter()
            .map(|r| r.calories)
            .max()
            .unwrap();
        let min_gain = recipes_for(DietGoal::MuscleGain)
            .iter()
            .map(|r| r.calories)
            .min()
            .unwrap();
        assert!(max_loss < min_gain);
    }
}
