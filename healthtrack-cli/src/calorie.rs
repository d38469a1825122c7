use healthtrack_model::meal::{FoodItem, MealLog};
use healthtrack_report::{meal, ReportStore};
use log::{debug, info};

use crate::console::{ask_number, ask_text, ask_yes_no, Console};
use crate::Result;

pub const INPUT_HINT: &str = "Please enter valid numbers.";

const DONE: &str = "done";

/// Collects food items until the user types "done".
pub fn read_meals(console: &mut dyn Console, log: &mut MealLog) -> Result<()> {
    console.print("\nEnter your meals. Type 'done' when finished.")?;
    loop {
        let name = ask_text(console, "\nFood name: ")?;
        if name.eq_ignore_ascii_case(DONE) {
            return Ok(());
        }
        let item = FoodItem::new(
            name,
            ask_number(console, "Calories (kcal): ")?,
            ask_number(console, "Protein (g): ")?,
            ask_number(console, "Carbs (g): ")?,
            ask_number(console, "Fats (g): ")?,
        );
        debug!("Adding {:?}", item);
        log.add(item);
    }
}

pub fn run(console: &mut dyn Console, store: &dyn ReportStore) -> Result<()> {
    let name = ask_text(console, "Enter your name: ")?;
    let goal = ask_number(console, "Enter your daily calorie goal (kcal): ")?;

    let mut log = MealLog::new(goal);
    read_meals(console, &mut log)?;
    info!(
        "Logged {} items, {} of {} kcal",
        log.items().len(),
        log.total_calories(),
        goal
    );

    console.print(meal::render_summary(&log).trim_end())?;
    console.print(&meal::render_budget(&log))?;

    if ask_yes_no(console, "\nDo you want to export your meal log? (yes/no): ")? {
        let path = store.save(&meal::file_name(&name), &meal::render_export(&name, &log))?;
        console.print(&format!("Data exported to {}", path.display()))?;
    }
    Ok(())
}
