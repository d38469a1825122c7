use healthtrack_model::food::{FoodGroup, ServingRecommendation, Servings};
use healthtrack_model::profile::{ChildGender, Gender, UserProfile};
use log::debug;

/// Youngest age at which pregnancy and breastfeeding are taken into account.
const ADULT_AGE: i32 = 19;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Age cannot be negative.")]
    NegativeAge,
    #[error("Pregnancy and breastfeeding are not valid for minors (age < 19).")]
    PregnancyForMinor,
    #[error("For children under 18, you must specify whether the child is a boy or a girl.")]
    MissingChildGender,
    #[error("Gender must be 'male' or 'female'.")]
    InvalidGender,
}

pub fn validate(profile: &UserProfile) -> Result<(), ValidationError> {
    if profile.age < 0 {
        return Err(ValidationError::NegativeAge);
    }
    if profile.gender == Gender::Female
        && (profile.pregnant || profile.breastfeeding)
        && profile.age < ADULT_AGE
    {
        return Err(ValidationError::PregnancyForMinor);
    }
    if profile.is_child() && profile.child_gender.is_none() {
        return Err(ValidationError::MissingChildGender);
    }
    if !profile.is_child() && profile.gender == Gender::Unspecified {
        return Err(ValidationError::InvalidGender);
    }
    Ok(())
}

/// Minimum daily servings per food group for a profile.
pub fn recommend(profile: &UserProfile) -> Result<ServingRecommendation, ValidationError> {
    validate(profile)?;

    let servings = match (profile.child_gender, profile.gender) {
        (Some(child_gender), _) if profile.is_child() => child_servings(child_gender, profile.age),
        (_, Gender::Male) => male_servings(profile.age),
        (_, _) => female_servings(profile),
    };
    debug!("Recommended {:?} for {:?}", servings, profile);

    Ok(servings)
}

fn male_servings(age: i32) -> Servings {
    let mut servings = Servings::new(6.0, 2.0, 6.0, 3.0, 2.5);
    if age > 50 {
        servings = servings
            .with(FoodGroup::Vegetables, 5.5)
            .with(FoodGroup::Meat, 2.5);
    }
    if age > 70 {
        servings = servings
            .with(FoodGroup::Vegetables, 5.0)
            .with(FoodGroup::Grains, 4.5)
            .with(FoodGroup::Dairy, 3.5);
    }
    servings
}

fn female_servings(profile: &UserProfile) -> Servings {
    let mut servings = Servings::new(5.0, 2.0, 6.0, 2.5, 2.5);
    if profile.age > 50 {
        servings = servings
            .with(FoodGroup::Grains, 4.0)
            .with(FoodGroup::Meat, 2.0)
            .with(FoodGroup::Dairy, 4.0);
    }
    if profile.age > 70 {
        servings = servings.with(FoodGroup::Grains, 3.0);
    }

    // Breastfeeding is applied last and takes precedence for grains.
    if profile.pregnant {
        servings = servings
            .with(FoodGroup::Grains, 8.5)
            .with(FoodGroup::Meat, 3.5);
    }
    if profile.breastfeeding {
        servings = servings
            .with(FoodGroup::Vegetables, 7.5)
            .with(FoodGroup::Grains, 9.0);
    }
    servings
}

fn child_servings(child_gender: ChildGender, age: i32) -> Servings {
    match (child_gender, age) {
        (_, ..=3) => Servings::new(2.5, 1.0, 4.0, 1.0, 1.5),
        (ChildGender::Boy, 4..=8) => Servings::new(4.5, 1.5, 4.0, 1.5, 2.0),
        (ChildGender::Boy, 9..=11) => Servings::new(5.0, 2.0, 5.0, 2.5, 2.5),
        (ChildGender::Boy, 12..=13) => Servings::new(5.5, 2.0, 6.0, 2.5, 3.5),
        (ChildGender::Boy, _) => Servings::new(5.5, 2.0, 7.0, 2.5, 3.5),
        (ChildGender::Girl, 4..=8) => Servings::new(4.5, 1.5, 4.0, 1.5, 1.5),
        (ChildGender::Girl, 9..=11) => Servings::new(5.0, 2.0, 4.0, 2.5, 3.0),
        (ChildGender::Girl, 12..=13) => Servings::new(5.0, 2.0, 5.0, 2.5, 3.5),
        (ChildGender::Girl, _) => Servings::new(5.0, 2.0, 7.0, 2.5, 3.5),
    }
}
