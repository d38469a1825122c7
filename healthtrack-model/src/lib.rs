pub mod body;
pub mod food;
pub mod hydration;
pub mod meal;
pub mod profile;

/// Round to two decimal places, the precision every summary is reported in.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
