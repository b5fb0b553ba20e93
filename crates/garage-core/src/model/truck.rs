//! トラックの固有属性

use serde::{Deserialize, Serialize};

/// トラック (Truck) 固有の属性
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TruckSpec {
    /// 積載量（トン）
    pub cargo_capacity: f64,
    pub drivetrain: String,
    pub bed_length: String,
    #[serde(default)]
    pub is_electric: bool,
}

impl TruckSpec {
    pub const HORN: &'static str = "Truck honk honk!";
    pub const HEADLIGHT: &'static str = "Truck headlights are on.";

    pub(crate) fn description_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Cargo: {}t", self.cargo_capacity),
            format!("Drivetrain: {}", self.drivetrain),
            format!("Bed Length: {}", self.bed_length),
        ];
        if self.is_electric {
            lines.push("Electric".to_string());
        }
        lines
    }

    pub(crate) fn extra_details(&self) -> String {
        let mut details = format!(", Cargo: {}t", self.cargo_capacity);
        if self.is_electric {
            details.push_str(", Electric");
        }
        details
    }
}
