use healthtrack_model::hydration::{HydrationProfile, WaterLog};

pub fn file_name(profile: &HydrationProfile) -> String {
    format!("{}_water_log.txt", profile.name)
}

pub fn render_summary(profile: &HydrationProfile, log: &WaterLog) -> String {
    format!(
        "\nRecommended Daily Intake: {:?} L\nTotal Intake: {:?} L\nAverage Intake: {:?} L",
        profile.recommended_intake(),
        log.total(),
        log.average()
    )
}

pub fn render_export(profile: &HydrationProfile, log: &WaterLog) -> String {
    let days = log
        .days()
        .iter()
        .enumerate()
        .map(|(day, intake)| format!("Day {}: {:?} L\n", day + 1, intake))
        .collect::<String>();

    format!(
        "User: {}\n\
         Weight: {:?} kg\n\
         Activity Level: {}\n\
         Recommended Daily Intake: {:?} L\n\
         \n\
         Daily Water Intake:\n\
         {}\
         \n\
         Total Intake: {:?} L\n\
         Average Intake: {:?} L\n",
        profile.name,
        profile.weight_kg,
        profile.activity_level,
        profile.recommended_intake(),
        days,
        log.total(),
        log.average()
    )
}
