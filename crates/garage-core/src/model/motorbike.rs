//! オートバイの固有属性

use serde::{Deserialize, Serialize};

/// オートバイ (Motorbike) 固有の属性
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotorbikeSpec {
    pub transmission: String,
    pub seating_capacity: u32,
    pub storage: String,
    pub engine: String,
}

impl MotorbikeSpec {
    pub const HORN: &'static str = "Motorbike vroom!";
    pub const HEADLIGHT: &'static str = "Motorbike headlights are on.";

    pub(crate) fn description_lines(&self) -> Vec<String> {
        vec![
            format!("Trans: {}", self.transmission),
            format!("Seats: {}", self.seating_capacity),
            format!("Storage: {}", self.storage),
            format!("Engine: {}", self.engine),
        ]
    }

    // サマリーには storage / engine を含めない
    pub(crate) fn extra_details(&self) -> String {
        format!(
            ", Trans: {}, Seats: {}",
            self.transmission, self.seating_capacity
        )
    }
}
