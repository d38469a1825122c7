use strum::{Display, EnumString};

#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ChildGender {
    Boy,
    Girl,
}

/// Inputs for a dietary recommendation. Adults are described by `gender`
/// and the pregnancy flags, children (18 and under) by `child_gender`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserProfile {
    pub age: i32,
    pub gender: Gender,
    pub child_gender: Option<ChildGender>,
    pub pregnant: bool,
    pub breastfeeding: bool,
}

impl UserProfile {
    pub fn adult(age: i32, gender: Gender) -> Self {
        Self {
            age,
            gender,
            ..Default::default()
        }
    }

    pub fn child(age: i32, child_gender: ChildGender) -> Self {
        Self {
            age,
            child_gender: Some(child_gender),
            ..Default::default()
        }
    }

    pub fn pregnant(self, pregnant: bool) -> Self {
        Self { pregnant, ..self }
    }

    pub fn breastfeeding(self, breastfeeding: bool) -> Self {
        Self {
            breastfeeding,
            ..self
        }
    }

    pub fn is_child(&self) -> bool {
        self.age <= 18
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_gender_case_insensitively() {
        let test_data = [
            ("male", Ok(Gender::Male)),
            ("Female", Ok(Gender::Female)),
            ("FEMALE", Ok(Gender::Female)),
            ("other", Err(strum::ParseError::VariantNotFound)),
        ];

        for (i, (input, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(Gender::from_str(input), expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn parses_child_gender() {
        assert_eq!(ChildGender::from_str("Boy"), Ok(ChildGender::Boy));
        assert_eq!(ChildGender::from_str("girl"), Ok(ChildGender::Girl));
        assert!(ChildGender::from_str("kid").is_err());
    }

    #[test]
    fn builders_set_flags() {
        let profile = UserProfile::adult(30, Gender::Female)
            .pregnant(true)
            .breastfeeding(true);

        assert!(profile.pregnant);
        assert!(profile.breastfeeding);
        assert_eq!(profile.child_gender, None);
        assert!(!profile.is_child());
        assert!(UserProfile::child(18, ChildGender::Boy).is_child());
    }
}
