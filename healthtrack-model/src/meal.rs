#[derive(Clone, Debug, PartialEq)]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl FoodItem {
    pub fn new(name: String, calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            name,
            calories,
            protein,
            carbs,
            fats,
        }
    }
}

/// Macronutrient totals in grams.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalorieBudget {
    Exceeded(f64),
    Within(f64),
}

/// Everything eaten in a day, measured against a calorie goal.
#[derive(Clone, Debug, PartialEq)]
pub struct MealLog {
    daily_goal: f64,
    items: Vec<FoodItem>,
}

impl MealLog {
    pub fn new(daily_goal: f64) -> Self {
        Self {
            daily_goal,
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, item: FoodItem) {
        self.items.push(item)
    }

    pub fn daily_goal(&self) -> f64 {
        self.daily_goal
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn total_calories(&self) -> f64 {
        self.items.iter().map(|item| item.calories).sum()
    }

    pub fn total_macros(&self) -> Macros {
        self.items.iter().fold(Macros::default(), |acc, item| Macros {
            protein: acc.protein + item.protein,
            carbs: acc.carbs + item.carbs,
            fats: acc.fats + item.fats,
        })
    }

    pub fn budget(&self) -> CalorieBudget {
        let total = self.total_calories();
        if total > self.daily_goal {
            CalorieBudget::Exceeded(total - self.daily_goal)
        } else {
            CalorieBudget::Within(self.daily_goal - total)
        }
    }
}
