use healthtrack_model::body::{BmiCategory, BodyMetrics};
use healthtrack_model::food::ServingIntake;

pub const FILE_NAME: &str = "user_info.txt";

pub fn render_bmi(bmi: f64) -> String {
    format!("Your BMI is: {:?} ({})", bmi, BmiCategory::from_bmi(bmi))
}

pub fn render_export(metrics: &BodyMetrics, intake: &ServingIntake) -> String {
    let servings = intake
        .iter()
        .map(|(group, servings)| format!("{}: {:?} servings\n", group, servings))
        .collect::<String>();

    format!(
        "Age: {} years\n\
         Gender: {}\n\
         Weight: {:?} kg\n\
         Height: {:?} cm\n\
         Daily Serving Intake:\n\
         {}",
        metrics.age, metrics.gender, metrics.weight_kg, metrics.height_cm, servings
    )
}
