//! Chart images for the health tracking tools. Every function renders one
//! SVG file into the given directory and returns its path.

mod nutrition;
mod pie;
mod water;

use plotters::drawing::DrawingAreaErrorKind;
use plotters::style::RGBColor;

pub use nutrition::{bmi_chart, intake_bar_chart, intake_line_chart};
pub use pie::intake_pie_charts;
pub use water::{water_bar_chart, water_line_chart};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to draw chart: {0}")]
    Drawing(String),
    #[error("nothing to draw: {0}")]
    NoData(&'static str),
    #[error("{0} cannot be placed on a chart axis")]
    OutOfRange(f64),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for Error {
    fn from(error: DrawingAreaErrorKind<E>) -> Self {
        Error::Drawing(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

const FONT: &str = "sans-serif";

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);
const ORANGE: RGBColor = RGBColor(255, 165, 0);
const STEEL_BLUE: RGBColor = RGBColor(31, 119, 180);

/// Upper bound of the value axis, leaving headroom above the tallest point.
fn axis_limit<'a>(values: impl IntoIterator<Item = &'a f64>) -> f64 {
    let max = values.into_iter().copied().fold(0.0, f64::max);
    if max > 0.0 {
        max * 1.2
    } else {
        1.0
    }
}

/// Tick label for categorical axes drawn on a continuous range: only whole
/// positions inside `labels` get text.
fn category_label(position: f64, labels: &[String]) -> String {
    let rounded = position.round();
    if (position - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_limit_leaves_headroom() {
        let test_data = [
            (vec![1.0, 2.5, 2.0], 3.0),
            (vec![], 1.0),
            (vec![0.0, 0.0], 1.0),
        ];

        for (i, (values, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(axis_limit(&values), expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn category_label_only_at_whole_positions() {
        let labels = vec!["Day 1".to_owned(), "Day 2".to_owned()];

        assert_eq!(category_label(0.0, &labels), "Day 1");
        assert_eq!(category_label(1.0000001, &labels), "Day 2");
        assert_eq!(category_label(0.5, &labels), "");
        assert_eq!(category_label(-1.0, &labels), "");
        assert_eq!(category_label(2.0, &labels), "");
    }
}
