use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum FoodGroup {
    Vegetables,
    Fruits,
    Grains,
    Meat,
    Dairy,
}

impl FoodGroup {
    pub fn heading(&self) -> String {
        self.to_string().to_uppercase()
    }
}

/// Daily servings per food group. Iteration always follows the
/// declaration order of [`FoodGroup`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Servings([f64; 5]);

/// Minimum daily servings derived from a user profile.
pub type ServingRecommendation = Servings;

/// Servings a user actually reported eating.
pub type ServingIntake = Servings;

impl Servings {
    pub const fn new(vegetables: f64, fruits: f64, grains: f64, meat: f64, dairy: f64) -> Self {
        Self([vegetables, fruits, grains, meat, dairy])
    }

    pub fn get(&self, group: FoodGroup) -> f64 {
        self.0[group as usize]
    }

    /// Returns a copy with the servings of `group` replaced.
    pub fn with(mut self, group: FoodGroup, servings: f64) -> Self {
        self.0[group as usize] = servings;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (FoodGroup, f64)> + '_ {
        FoodGroup::iter().map(move |group| (group, self.get(group)))
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Single-serve size descriptions for one food group.
#[derive(Debug, PartialEq)]
pub struct FoodGroupDetail {
    pub group: FoodGroup,
    pub lines: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_table_order() {
        let servings = Servings::new(6.0, 2.0, 6.0, 3.0, 2.5);
        let groups: Vec<_> = servings.iter().collect();

        assert_eq!(
            groups,
            vec![
                (FoodGroup::Vegetables, 6.0),
                (FoodGroup::Fruits, 2.0),
                (FoodGroup::Grains, 6.0),
                (FoodGroup::Meat, 3.0),
                (FoodGroup::Dairy, 2.5),
            ]
        );
    }

    #[test]
    fn with_replaces_single_group() {
        let base = Servings::new(5.0, 2.0, 6.0, 2.5, 2.5);
        let changed = base.with(FoodGroup::Grains, 8.5);

        assert_eq!(changed.get(FoodGroup::Grains), 8.5);
        assert_eq!(changed.get(FoodGroup::Vegetables), 5.0);
        assert_eq!(base.get(FoodGroup::Grains), 6.0);
    }

    #[test]
    fn heading_is_upper_case() {
        assert_eq!(FoodGroup::Vegetables.heading(), "VEGETABLES");
        assert_eq!(FoodGroup::Dairy.to_string(), "Dairy");
    }

    #[test]
    fn total_sums_all_groups() {
        assert_eq!(Servings::new(1.0, 2.0, 3.0, 4.0, 0.5).total(), 10.5);
    }
}
