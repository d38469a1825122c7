mod details;
mod engine;

pub use details::food_group_details;
pub use engine::{recommend, validate, ValidationError};
