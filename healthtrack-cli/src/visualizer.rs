use std::path::Path;

use healthtrack_charts::{bmi_chart, intake_bar_chart, intake_line_chart, intake_pie_charts};
use healthtrack_model::body::{BodyMetrics, REFERENCE_INTAKE};
use healthtrack_model::food::{FoodGroup, ServingIntake, Servings};
use healthtrack_report::{nutrition, ReportStore};
use log::info;
use strum::IntoEnumIterator;

use crate::console::{ask_integer, ask_number, ask_text, ask_yes_no, Console};
use crate::Result;

pub const INPUT_HINT: &str = "Please enter valid numbers, and a height above zero.";

pub fn read_metrics(console: &mut dyn Console) -> Result<BodyMetrics> {
    Ok(BodyMetrics::new(
        ask_integer(console, "Enter your age (in years): ")?,
        ask_text(console, "Enter your gender (male or female): ")?,
        ask_number(console, "Enter your weight (in kg): ")?,
        ask_number(console, "Enter your height (in cm): ")?,
    ))
}

pub fn read_intake(console: &mut dyn Console) -> Result<ServingIntake> {
    FoodGroup::iter().try_fold(Servings::new(0.0, 0.0, 0.0, 0.0, 0.0), |intake, group| {
        let servings = ask_number(
            console,
            &format!("Enter your daily intake of {} (in servings): ", group),
        )?;
        Ok(intake.with(group, servings))
    })
}

pub fn run(console: &mut dyn Console, store: &dyn ReportStore, chart_dir: &Path) -> Result<()> {
    let metrics = read_metrics(console)?;
    let intake = read_intake(console)?;

    let bmi = metrics.bmi()?;
    info!("BMI {} from {} kg at {} cm", bmi, metrics.weight_kg, metrics.height_cm);
    console.print(&nutrition::render_bmi(bmi))?;

    if ask_yes_no(console, "Would you like to save the BMI chart? (yes/no): ")? {
        let path = bmi_chart(bmi, chart_dir)?;
        console.print(&format!("BMI chart saved as {}", path.display()))?;
    }

    if ask_yes_no(console, "Would you like to save the charts? (yes/no): ")? {
        let bar = intake_bar_chart(&intake, &REFERENCE_INTAKE, chart_dir)?;
        console.print(&format!("Bar chart saved as {}", bar.display()))?;
        let line = intake_line_chart(&intake, &REFERENCE_INTAKE, chart_dir)?;
        console.print(&format!("Line chart saved as {}", line.display()))?;
        let pie = intake_pie_charts(&intake, &REFERENCE_INTAKE, chart_dir)?;
        console.print(&format!("Pie charts saved as {}", pie.display()))?;
    }

    if ask_yes_no(console, "Do you also want to export your data? (yes/no): ")? {
        let path = store.save(
            nutrition::FILE_NAME,
            &nutrition::render_export(&metrics, &intake),
        )?;
        console.print(&format!("Data has been exported to {}", path.display()))?;
    }
    Ok(())
}
