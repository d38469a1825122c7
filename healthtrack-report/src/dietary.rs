use healthtrack_model::food::{FoodGroupDetail, ServingRecommendation};
use itertools::Itertools;

/// File name used when the user does not pick one.
pub const DEFAULT_FILE_NAME: &str = "DietaryRecommendations.txt";

const SERVINGS_HEADER: &str = "Based on your inputs, the minimum recommended servings are:";
const DETAILS_HEADER: &str =
    "Additionally, each food category single serving recommendations are detailed as shown as follows:";

fn detail_blocks(details: &[FoodGroupDetail], heading_suffix: &str) -> String {
    details
        .iter()
        .map(|detail| {
            format!(
                "\n{}{}\n{}\n",
                detail.group.heading(),
                heading_suffix,
                detail.lines.iter().map(|line| format!("  {}", line)).join("\n")
            )
        })
        .collect()
}

/// Console rendering, servings shown with one decimal place.
pub fn render_display(
    recommendation: &ServingRecommendation,
    details: &[FoodGroupDetail],
) -> String {
    let servings = recommendation
        .iter()
        .map(|(group, servings)| format!("{}: {:.1} servings per day\n", group, servings))
        .collect::<String>();

    format!(
        "\n{}\n{}\n{}\n{}",
        SERVINGS_HEADER,
        servings,
        DETAILS_HEADER,
        detail_blocks(details, "")
    )
}

pub fn render_export(
    recommendation: &ServingRecommendation,
    details: &[FoodGroupDetail],
) -> String {
    let servings = recommendation
        .iter()
        .map(|(group, servings)| format!("{}: {} serves per day\n", group, servings))
        .collect::<String>();

    format!(
        "{}\n{}\n{}\n{}",
        SERVINGS_HEADER,
        servings,
        DETAILS_HEADER,
        detail_blocks(details, ":")
    )
}
