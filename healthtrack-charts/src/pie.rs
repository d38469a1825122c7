use std::f64::consts::{FRAC_PI_2, PI};
use std::path::{Path, PathBuf};

use healthtrack_model::food::{ServingIntake, ServingRecommendation};
use itertools::Itertools;
use log::{info, warn};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::{Result, FONT, LIGHT_GREEN, ORANGE, SKY_BLUE, STEEL_BLUE};

pub const PIE_CHART_FILE: &str = "pie_chart.svg";

const SLICE_COLORS: [RGBColor; 5] = [
    LIGHT_GREEN,
    ORANGE,
    SKY_BLUE,
    RGBColor(214, 39, 40),
    STEEL_BLUE,
];

/// Points along the arc between two angles, starting and ending at the centre.
fn wedge(center: (i32, i32), radius: f64, from: f64, to: f64) -> Vec<(i32, i32)> {
    let steps = (((to - from) / (2.0 * PI)) * 90.0).ceil().max(1.0) as usize;
    let arc = (0..=steps).map(|step| {
        let angle = from + (to - from) * step as f64 / steps as f64;
        point_at(center, radius, angle)
    });
    std::iter::once(center).chain(arc).collect()
}

fn point_at(center: (i32, i32), radius: f64, angle: f64) -> (i32, i32) {
    (
        center.0 + (radius * angle.cos()).round() as i32,
        center.1 - (radius * angle.sin()).round() as i32,
    )
}

/// Share of each food group, as percentages summing to 100.
fn shares(servings: &ServingIntake) -> Vec<(String, f64)> {
    let total = servings.total();
    servings
        .iter()
        .map(|(group, value)| {
            let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            (group.to_string(), share)
        })
        .collect()
}

fn draw_pie<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    servings: &ServingIntake,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let area = area.titled(title, (FONT, 20))?;
    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;

    let slices = shares(servings);
    if slices.iter().all(|(_, share)| *share <= 0.0) {
        warn!("{} has no servings, leaving pie empty", title);
        return Ok(());
    }

    // Slices run counter-clockwise from twelve o'clock.
    let mut start = FRAC_PI_2;
    for (i, (label, share)) in slices.iter().enumerate() {
        if *share <= 0.0 {
            continue;
        }
        let sweep = share / 100.0 * 2.0 * PI;
        let color = SLICE_COLORS[i % SLICE_COLORS.len()];
        area.draw(&Polygon::new(
            wedge(center, radius, start, start + sweep),
            color.filled(),
        ))?;

        let middle = start + sweep / 2.0;
        area.draw(&Text::new(
            format!("{:.1}%", share),
            point_at(center, radius * 0.6, middle),
            (FONT, 13).into_font().color(&BLACK),
        ))?;
        area.draw(&Text::new(
            label.clone(),
            point_at(center, radius * 1.12, middle),
            (FONT, 14).into_font().color(&BLACK),
        ))?;
        start += sweep;
    }
    Ok(())
}

/// Two pies side by side: the user's intake and the recommended intake.
pub fn intake_pie_charts(
    actual: &ServingIntake,
    recommended: &ServingRecommendation,
    dir: &Path,
) -> Result<PathBuf> {
    let path = dir.join(PIE_CHART_FILE);

    {
        let root = SVGBackend::new(&path, (1200, 600)).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled("Daily Serving Intake", (FONT, 26))?;
        let (width, _) = root.dim_in_pixel();
        let (left, right) = root.split_horizontally((width / 2) as i32);

        draw_pie(&left, "User Intake", actual)?;
        draw_pie(&right, "Recommended Intake", recommended)?;
        root.present()?;
    }

    info!(
        "Saved pie charts to {} ({})",
        path.display(),
        shares(actual)
            .iter()
            .map(|(label, share)| format!("{} {:.1}%", label, share))
            .join(", ")
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use healthtrack_model::body::REFERENCE_INTAKE;
    use healthtrack_model::food::Servings;

    use super::*;

    #[test]
    fn shares_sum_to_hundred() {
        let shares = shares(&Servings::new(2.0, 2.0, 4.0, 1.0, 1.0));

        assert_eq!(
            shares.iter().map(|(_, share)| *share).collect_vec(),
            vec![20.0, 20.0, 40.0, 10.0, 10.0]
        );
        assert_eq!(shares[0].0, "Vegetables");
    }

    #[test]
    fn shares_of_nothing_are_zero() {
        let shares = shares(&Servings::new(0.0, 0.0, 0.0, 0.0, 0.0));

        assert!(shares.iter().all(|(_, share)| *share == 0.0));
    }

    #[test]
    fn wedge_starts_and_ends_on_arc() {
        let points = wedge((100, 100), 50.0, FRAC_PI_2, PI);

        assert_eq!(points[0], (100, 100));
        assert_eq!(points[1], (100, 50));
        assert_eq!(*points.last().unwrap(), (50, 100));
    }

    #[test]
    fn renders_pies() {
        let dir = tempfile::tempdir().unwrap();
        let actual = Servings::new(3.0, 1.0, 4.5, 2.0, 0.0);

        let path = intake_pie_charts(&actual, &REFERENCE_INTAKE, dir.path()).unwrap();

        let svg = fs::read_to_string(path).unwrap();
        assert!(svg.contains("User Intake"));
        assert!(svg.contains("Recommended Intake"));
    }

    #[test]
    fn renders_empty_intake() {
        let dir = tempfile::tempdir().unwrap();
        let nothing = Servings::new(0.0, 0.0, 0.0, 0.0, 0.0);

        assert!(intake_pie_charts(&nothing, &REFERENCE_INTAKE, dir.path()).is_ok());
    }
}
