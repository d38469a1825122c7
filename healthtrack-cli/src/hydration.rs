use std::path::Path;

use healthtrack_charts::{water_bar_chart, water_line_chart};
use healthtrack_model::hydration::{ActivityLevel, HydrationProfile, WaterLog};
use healthtrack_report::{hydration, ReportStore};
use log::{info, warn};

use crate::console::{ask_integer, ask_number, ask_text, ask_yes_no, Console};
use crate::Result;

pub const INPUT_HINT: &str = "Please enter valid numbers.";

const NO_DAYS_NOTICE: &str = "No days were tracked, so there is nothing to chart.";

pub fn read_profile(console: &mut dyn Console) -> Result<HydrationProfile> {
    let name = ask_text(console, "Enter your name: ")?;
    let weight = ask_number(console, "Enter your weight (kg): ")?;
    let activity = ask_text(console, "Enter your activity level (low, medium, high): ")?;
    let activity_level = activity.parse().unwrap_or_else(|_| {
        warn!("Unknown activity level {:?}, assuming low", activity);
        ActivityLevel::Low
    });
    Ok(HydrationProfile::new(name, weight, activity_level))
}

pub fn read_log(console: &mut dyn Console) -> Result<WaterLog> {
    let days: usize = ask_integer(console, "Enter number of days to track: ")?;
    let daily_intake = (1..=days)
        .map(|day| {
            ask_number(
                console,
                &format!("Enter water intake for Day {} (in liters): ", day),
            )
        })
        .collect::<Result<Vec<f64>>>()?;
    Ok(WaterLog::new(daily_intake))
}

fn chart(
    console: &mut dyn Console,
    log: &WaterLog,
    recommended: f64,
    chart_dir: &Path,
) -> Result<()> {
    if log.days().is_empty() {
        warn!("Empty water log, skipping charts");
        console.print(NO_DAYS_NOTICE)?;
        return Ok(());
    }
    let bar = water_bar_chart(log.days(), recommended, chart_dir)?;
    console.print(&format!("Bar chart saved to {}", bar.display()))?;
    let line = water_line_chart(log.days(), recommended, chart_dir)?;
    console.print(&format!("Line chart saved to {}", line.display()))?;
    Ok(())
}

pub fn run(console: &mut dyn Console, store: &dyn ReportStore, chart_dir: &Path) -> Result<()> {
    let profile = read_profile(console)?;
    let log = read_log(console)?;
    let recommended = profile.recommended_intake();
    info!(
        "Tracked {} days for {}, target {} L",
        log.days().len(),
        profile.name,
        recommended
    );

    console.print(&hydration::render_summary(&profile, &log))?;

    if ask_yes_no(console, "Would you like to generate charts? (yes/no): ")? {
        chart(console, &log, recommended, chart_dir)?;
    }

    if ask_yes_no(
        console,
        "Would you like to export your water intake data? (yes/no): ",
    )? {
        let path = store.save(
            &hydration::file_name(&profile),
            &hydration::render_export(&profile, &log),
        )?;
        console.print(&format!("Data exported to {}", path.display()))?;
    }
    Ok(())
}
