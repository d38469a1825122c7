use std::path::{Path, PathBuf};

use log::info;
use plotters::prelude::*;

use crate::{
    axis_limit, category_label, Error, Result, FONT, LIGHT_GREEN, ORANGE, SKY_BLUE, STEEL_BLUE,
};

pub const BAR_CHART_FILE: &str = "water_intake_bar_chart.svg";
pub const LINE_CHART_FILE: &str = "water_intake_line_chart.svg";

const BAR_WIDTH: f64 = 0.4;

fn day_labels(days: usize) -> Vec<String> {
    (1..=days).map(|day| format!("Day {}", day)).collect()
}

/// Bars of each day's intake next to the recommended amount.
pub fn water_bar_chart(daily_intake: &[f64], recommended: f64, dir: &Path) -> Result<PathBuf> {
    if daily_intake.is_empty() {
        return Err(Error::NoData("no days of water intake"));
    }
    let path = dir.join(BAR_CHART_FILE);
    let labels = day_labels(daily_intake.len());
    let y_max = axis_limit(daily_intake.iter().chain([recommended].iter()));

    {
        let root = SVGBackend::new(&path, (1000, 500)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption("Daily Water Intake vs Recommended", (FONT, 24))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5..(daily_intake.len() as f64 - 0.5), 0.0..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(daily_intake.len() + 1)
            .x_label_formatter(&|x| category_label(*x, &labels))
            .y_desc("Water Intake (L)")
            .draw()?;

        chart
            .draw_series(daily_intake.iter().enumerate().map(|(day, intake)| {
                let x = day as f64;
                Rectangle::new([(x - BAR_WIDTH, 0.0), (x, *intake)], SKY_BLUE.filled())
            }))?
            .label("Actual Intake")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], SKY_BLUE.filled()));

        chart
            .draw_series((0..daily_intake.len()).map(|day| {
                let x = day as f64;
                Rectangle::new([(x, 0.0), (x + BAR_WIDTH, recommended)], LIGHT_GREEN.filled())
            }))?
            .label("Recommended")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], LIGHT_GREEN.filled()));

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
        root.present()?;
    }

    info!("Saved water intake bar chart to {}", path.display());
    Ok(path)
}

/// Daily intake trend against a flat recommended line.
pub fn water_line_chart(daily_intake: &[f64], recommended: f64, dir: &Path) -> Result<PathBuf> {
    if daily_intake.is_empty() {
        return Err(Error::NoData("no days of water intake"));
    }
    let path = dir.join(LINE_CHART_FILE);
    let labels = day_labels(daily_intake.len());
    let y_max = axis_limit(daily_intake.iter().chain([recommended].iter()));
    let x_max = (daily_intake.len() as f64 - 1.0).max(1.0);

    {
        let root = SVGBackend::new(&path, (1000, 500)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption("Daily Water Intake Trend", (FONT, 24))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.25..(x_max + 0.25), 0.0..y_max)?;

        chart
            .configure_mesh()
            .x_labels(daily_intake.len() + 1)
            .x_label_formatter(&|x| category_label(*x, &labels))
            .y_desc("Water Intake (L)")
            .draw()?;

        let actual: Vec<(f64, f64)> = daily_intake
            .iter()
            .enumerate()
            .map(|(day, intake)| (day as f64, *intake))
            .collect();
        let target: Vec<(f64, f64)> = (0..daily_intake.len())
            .map(|day| (day as f64, recommended))
            .collect();

        chart
            .draw_series(LineSeries::new(actual.clone(), STEEL_BLUE.stroke_width(2)))?
            .label("Actual Intake")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], STEEL_BLUE.stroke_width(2)));
        chart.draw_series(
            actual
                .into_iter()
                .map(|point| Circle::new(point, 4, STEEL_BLUE.filled())),
        )?;

        chart
            .draw_series(LineSeries::new(target.clone(), &ORANGE))?
            .label("Recommended")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &ORANGE));
        chart.draw_series(
            target
                .into_iter()
                .map(|point| Cross::new(point, 4, &ORANGE)),
        )?;

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
        root.present()?;
    }

    info!("Saved water intake line chart to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn renders_both_charts() {
        let dir = tempfile::tempdir().unwrap();
        let intake = [2.0, 2.6, 1.8];

        let bar = water_bar_chart(&intake, 2.45, dir.path()).unwrap();
        let line = water_line_chart(&intake, 2.45, dir.path()).unwrap();

        assert_eq!(bar, dir.path().join(BAR_CHART_FILE));
        assert_eq!(line, dir.path().join(LINE_CHART_FILE));
        for path in [bar, line] {
            let svg = fs::read_to_string(&path).unwrap();
            assert!(svg.contains("<svg"), "{} is not an svg", path.display());
        }
    }

    #[test]
    fn single_day_line_chart() {
        let dir = tempfile::tempdir().unwrap();

        assert!(water_line_chart(&[3.0], 2.0, dir.path()).is_ok());
    }

    #[test]
    fn refuses_empty_log() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            water_bar_chart(&[], 2.0, dir.path()),
            Err(Error::NoData(_))
        ));
    }
}
