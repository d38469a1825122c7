use std::path::{Path, PathBuf};

use healthtrack_model::body::BmiCategory;
use healthtrack_model::food::{ServingIntake, ServingRecommendation};
use itertools::Itertools;
use log::info;
use plotters::prelude::*;
use strum::IntoEnumIterator;

use crate::{axis_limit, category_label, Error, Result, FONT, ORANGE, STEEL_BLUE};

pub const BMI_CHART_FILE: &str = "bmi_chart.svg";
pub const BAR_CHART_FILE: &str = "grouped_bar_chart.svg";
pub const LINE_CHART_FILE: &str = "line_chart.svg";

const BAR_WIDTH: f64 = 0.35;

fn group_labels(servings: &ServingIntake) -> Vec<String> {
    servings.iter().map(|(group, _)| group.to_string()).collect()
}

/// Each weight category drawn out to its upper threshold, with a marker at
/// the user's BMI. Categories read top to bottom from lightest to heaviest.
pub fn bmi_chart(bmi: f64, dir: &Path) -> Result<PathBuf> {
    if !bmi.is_finite() {
        return Err(Error::OutOfRange(bmi));
    }
    let path = dir.join(BMI_CHART_FILE);
    let categories = BmiCategory::iter().collect_vec();
    let names = categories.iter().rev().map(|c| c.to_string()).collect_vec();
    let top = (categories.len() - 1) as f64;
    let x_max = (bmi + 5.0).max(40.0);

    {
        let root = SVGBackend::new(&path, (800, 600)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption("BMI Chart for Adults", (FONT, 24))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(140)
            .build_cartesian_2d(0.0..x_max, -0.5..(top + 0.75))?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(9)
            .y_labels(categories.len() + 1)
            .y_label_formatter(&|y| category_label(*y, &names))
            .x_desc("BMI")
            .y_desc("Weight Category")
            .draw()?;

        chart.draw_series(categories.iter().enumerate().map(|(i, category)| {
            let y = top - i as f64;
            PathElement::new(
                vec![(0.0, y), (category.chart_threshold(), y)],
                BLACK.stroke_width(2),
            )
        }))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(bmi, -0.5), (bmi, top + 0.25)],
            RED.stroke_width(2),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("Your BMI: {:.2}", bmi),
            (bmi, top + 0.6),
            (FONT, 14).into_font().color(&RED),
        )))?;
        root.present()?;
    }

    info!("Saved BMI chart to {}", path.display());
    Ok(path)
}

/// Recommended and actual servings side by side for every food group.
pub fn intake_bar_chart(
    actual: &ServingIntake,
    recommended: &ServingRecommendation,
    dir: &Path,
) -> Result<PathBuf> {
    let path = dir.join(BAR_CHART_FILE);
    let labels = group_labels(actual);
    let values = actual.iter().chain(recommended.iter()).map(|(_, v)| v).collect_vec();
    let y_max = axis_limit(&values);

    {
        let root = SVGBackend::new(&path, (1000, 500)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption("Recommended vs Actual Intake", (FONT, 24))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5..(labels.len() as f64 - 0.5), 0.0..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len() + 1)
            .x_label_formatter(&|x| category_label(*x, &labels))
            .x_desc("Food Group")
            .y_desc("Servings")
            .draw()?;

        chart
            .draw_series(recommended.iter().enumerate().map(|(i, (_, servings))| {
                let x = i as f64;
                Rectangle::new([(x - BAR_WIDTH, 0.0), (x, servings)], STEEL_BLUE.filled())
            }))?
            .label("Recommended")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], STEEL_BLUE.filled()));
        chart
            .draw_series(actual.iter().enumerate().map(|(i, (_, servings))| {
                let x = i as f64;
                Rectangle::new([(x, 0.0), (x + BAR_WIDTH, servings)], ORANGE.filled())
            }))?
            .label("Actual")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], ORANGE.filled()));

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
        root.present()?;
    }

    info!("Saved intake bar chart to {}", path.display());
    Ok(path)
}

pub fn intake_line_chart(
    actual: &ServingIntake,
    recommended: &ServingRecommendation,
    dir: &Path,
) -> Result<PathBuf> {
    let path = dir.join(LINE_CHART_FILE);
    let labels = group_labels(actual);
    let values = actual.iter().chain(recommended.iter()).map(|(_, v)| v).collect_vec();
    let y_max = axis_limit(&values);

    {
        let root = SVGBackend::new(&path, (1000, 500)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption("Line Chart: Food Intake vs Recommendations", (FONT, 24))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.25..(labels.len() as f64 - 0.75), 0.0..y_max)?;

        chart
            .configure_mesh()
            .x_labels(labels.len() + 1)
            .x_label_formatter(&|x| category_label(*x, &labels))
            .x_desc("Food Categories")
            .y_desc("Servings")
            .draw()?;

        let points = |servings: &ServingIntake| {
            servings
                .iter()
                .enumerate()
                .map(|(i, (_, value))| (i as f64, value))
                .collect_vec()
        };

        chart
            .draw_series(LineSeries::new(points(actual), STEEL_BLUE.stroke_width(2)))?
            .label("Actual")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], STEEL_BLUE.stroke_width(2)));
        chart.draw_series(
            points(actual)
                .into_iter()
                .map(|point| Circle::new(point, 4, STEEL_BLUE.filled())),
        )?;
        chart
            .draw_series(LineSeries::new(points(recommended), &ORANGE))?
            .label("Recommended")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &ORANGE));
        chart.draw_series(
            points(recommended)
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

    info!("Saved intake line chart to {}", path.display());
    Ok(path)
}
