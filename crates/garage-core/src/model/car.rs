//! 乗用車の固有属性

use serde::{Deserialize, Serialize};

/// 乗用車 (Car) 固有の属性
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarSpec {
    pub doors: u32,
    pub door_style: String,
    pub finish: String,
}

impl CarSpec {
    pub const HORN: &'static str = "Car beep beep!";
    pub const HEADLIGHT: &'static str = "Car headlights are on.";

    /// 詳細表示の固有行
    pub(crate) fn description_lines(&self) -> Vec<String> {
        vec![
            format!("Doors: {}", self.doors),
            format!("Door Style: {}", self.door_style),
            format!("Finish: {}", self.finish),
        ]
    }

    /// 1行サマリー末尾の固有部分
    pub(crate) fn extra_details(&self) -> String {
        format!(
            ", Doors: {}, Door Style: {}, Finish: {}",
            self.doors, self.door_style, self.finish
        )
    }
}
