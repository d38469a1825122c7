use healthtrack_model::meal::{CalorieBudget, FoodItem, MealLog};

pub fn file_name(user: &str) -> String {
    format!("{}_calorie_log.txt", user)
}

fn item_line(item: &FoodItem) -> String {
    format!(
        "{}: {:?} kcal | P: {:?}g, C: {:?}g, F: {:?}g\n",
        item.name, item.calories, item.protein, item.carbs, item.fats
    )
}

fn summary(log: &MealLog) -> String {
    let macros = log.total_macros();
    format!(
        "--- Daily Meal Summary ---\n\
         {}\
         \n\
         Total Calories: {:?} kcal\n\
         Total Macros: Protein: {:?}g, Carbs: {:?}g, Fats: {:?}g\n",
        log.items().iter().map(item_line).collect::<String>(),
        log.total_calories(),
        macros.protein,
        macros.carbs,
        macros.fats
    )
}

pub fn render_summary(log: &MealLog) -> String {
    format!("\n{}", summary(log))
}

pub fn render_budget(log: &MealLog) -> String {
    match log.budget() {
        CalorieBudget::Exceeded(by) => {
            format!("\n⚠️ You exceeded your daily goal by {:?} kcal.", by)
        }
        CalorieBudget::Within(remaining) => format!(
            "\n✅ You are within your daily goal. Remaining: {:?} kcal.",
            remaining
        ),
    }
}

pub fn render_export(user: &str, log: &MealLog) -> String {
    format!(
        "User: {}\nDaily Calorie Goal: {:?} kcal\n\n{}",
        user,
        log.daily_goal(),
        summary(log)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch(goal: f64) -> MealLog {
        let mut log = MealLog::new(goal);
        log.add(FoodItem::new("Rice".to_owned(), 200.0, 4.0, 45.0, 0.5));
        log.add(FoodItem::new("Chicken".to_owned(), 165.0, 31.0, 0.0, 3.6));
        log
    }

    #[test]
    fn export() {
        assert_eq!(file_name("Bo"), "Bo_calorie_log.txt");
        assert_eq!(
            render_export("Bo", &lunch(1800.0)),
            "User: Bo\n\
             Daily Calorie Goal: 1800.0 kcal\n\
             \n\
             --- Daily Meal Summary ---\n\
             Rice: 200.0 kcal | P: 4.0g, C: 45.0g, F: 0.5g\n\
             Chicken: 165.0 kcal | P: 31.0g, C: 0.0g, F: 3.6g\n\
             \n\
             Total Calories: 365.0 kcal\n\
             Total Macros: Protein: 35.0g, Carbs: 45.0g, Fats: 4.1g\n"
        );
    }

    #[test]
    fn budget() {
        let test_data = [
            (
                1800.0,
                "\n✅ You are within your daily goal. Remaining: 1435.0 kcal.",
            ),
            (300.0, "\n⚠️ You exceeded your daily goal by 65.0 kcal."),
        ];

        for (i, (goal, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(render_budget(&lunch(goal)), expected_output, "Test case #{}", i);
        }
    }
}
