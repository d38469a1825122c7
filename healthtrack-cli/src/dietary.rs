use healthtrack_diet::{food_group_details, recommend};
use healthtrack_model::profile::{Gender, UserProfile};
use healthtrack_report::{dietary, ReportStore};
use log::info;

use crate::console::{ask_integer, ask_text, ask_yes_no, Console};
use crate::Result;

pub const INPUT_HINT: &str = "Please check your input and try again. Ensure all inputs are valid, \
     such as age being a number and gender being 'male' or 'female'.";

/// Asks the questions that apply to the entered age. The answers are not
/// validated here.
pub fn read_profile(console: &mut dyn Console) -> Result<UserProfile> {
    let age = ask_integer(console, "Enter your age: ")?;

    if age <= 18 {
        let child_gender = ask_text(console, "Are you a boy or girl? ")?.parse().ok();
        return Ok(UserProfile {
            age,
            child_gender,
            ..Default::default()
        });
    }

    let gender = ask_text(console, "Enter your gender (male/female): ")?
        .parse()
        .unwrap_or_default();
    let mut profile = UserProfile::adult(age, gender);
    if gender == Gender::Female {
        profile = profile
            .pregnant(ask_yes_no(console, "Are you pregnant? (yes/no): ")?)
            .breastfeeding(ask_yes_no(console, "Are you breastfeeding? (yes/no): ")?);
    }
    Ok(profile)
}

pub fn run(console: &mut dyn Console, store: &dyn ReportStore) -> Result<()> {
    let profile = read_profile(console)?;
    let recommendation = recommend(&profile)?;
    info!("Prepared recommendation for a {} year old", profile.age);

    let details = food_group_details();
    console.print(dietary::render_display(&recommendation, details).trim_end())?;

    if !ask_yes_no(
        console,
        "\nWould you like to export these recommendations to a text file? (yes/no): ",
    )? {
        return Ok(());
    }

    let file_name = ask_text(
        console,
        "Enter a filename for the export (leave blank for 'DietaryRecommendations.txt'): ",
    )?;
    let file_name = if file_name.is_empty() {
        dietary::DEFAULT_FILE_NAME.to_owned()
    } else {
        file_name
    };
    let path = store.save(
        &file_name,
        &dietary::render_export(&recommendation, details),
    )?;
    console.print(&format!(
        "Recommendations and serving sizes have been exported to {}",
        path.display()
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use healthtrack_model::profile::ChildGender;

    use super::*;
    use crate::console::MockConsole;

    fn answering(replies: &[&str]) -> MockConsole {
        let mut replies: VecDeque<String> = replies.iter().map(|r| r.to_string()).collect();
        let mut console = MockConsole::new();
        console
            .expect_prompt()
            .returning(move |_| Ok(replies.pop_front().unwrap_or_default()));
        console
    }

    #[test]
    fn reads_profiles() {
        let test_data = [
            (vec!["10", "Girl"], UserProfile::child(10, ChildGender::Girl)),
            (
                vec!["7", "robot"],
                UserProfile {
                    age: 7,
                    ..Default::default()
                },
            ),
            (vec!["40", "MALE"], UserProfile::adult(40, Gender::Male)),
            (
                vec!["30", "female", "yes", "no"],
                UserProfile::adult(30, Gender::Female).pregnant(true),
            ),
            (
                vec!["45", "other"],
                UserProfile::adult(45, Gender::Unspecified),
            ),
        ];

        for (i, (replies, expected_output)) in test_data.into_iter().enumerate() {
            let mut console = answering(&replies);
            assert_eq!(
                read_profile(&mut console).unwrap(),
                expected_output,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn non_numeric_age_is_an_input_error() {
        let mut console = answering(&["twenty"]);

        let error = read_profile(&mut console).unwrap_err();

        assert!(error.is_input_error());
    }
}
