pub mod bmi;
pub mod sleep;

pub use bmi::{bmi, body_type, classify_bmi, BmiCategory, BodyType};
pub use sleep::{classify_sleep, sleep_duration, SleepQuality};
