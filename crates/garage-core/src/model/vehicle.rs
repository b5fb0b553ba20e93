//! 車両定義

use super::car::CarSpec;
use super::motorbike::MotorbikeSpec;
use super::truck::TruckSpec;
use super::variant::Variant;
use serde::{Deserialize, Serialize};

/// 車種ごとの固有属性
///
/// JSON では `variant` フィールドで車種を判別する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum VehicleKind {
    Car(CarSpec),
    Motorbike(MotorbikeSpec),
    Truck(TruckSpec),
}

impl VehicleKind {
    pub fn variant(&self) -> Variant {
        match self {
            Self::Car(_) => Variant::Car,
            Self::Motorbike(_) => Variant::Motorbike,
            Self::Truck(_) => Variant::Truck,
        }
    }
}

/// 車両定義
///
/// 生成後に属性が変わることはない。ガレージに入れた車両は
/// [`crate::Garage`] が所有し、参照でのみ公開される。
///
/// KDL形式：
/// ```kdl
/// car 1 {
///     make "Rolls-Royce"
///     model "Phantom Serenity"
///     year 2023
///     mileage 20000
///     fuel "Petrol"
///     doors 4
///     door_style "coach doors"
///     finish "Mother-of-Pearl"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// 識別子（ガレージ内での一意性は保証しない）
    pub id: u32,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// 走行距離（単位は規定しない、非負）
    pub mileage: f64,
    pub fuel_type: String,
    #[serde(flatten)]
    pub kind: VehicleKind,
}

impl Vehicle {
    pub fn variant(&self) -> Variant {
        self.kind.variant()
    }

    pub fn horn_sound(&self) -> &'static str {
        match &self.kind {
            VehicleKind::Car(_) => CarSpec::HORN,
            VehicleKind::Motorbike(_) => MotorbikeSpec::HORN,
            VehicleKind::Truck(_) => TruckSpec::HORN,
        }
    }

    pub fn headlight_message(&self) -> &'static str {
        match &self.kind {
            VehicleKind::Car(_) => CarSpec::HEADLIGHT,
            VehicleKind::Motorbike(_) => MotorbikeSpec::HEADLIGHT,
            VehicleKind::Truck(_) => TruckSpec::HEADLIGHT,
        }
    }

    /// "{year} {make} {model}"
    pub fn basic_info(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    /// "{Variant}(ID: {id}, {basic_info})"
    pub fn brief_line(&self) -> String {
        format!(
            "{}(ID: {}, {})",
            self.variant().label(),
            self.id,
            self.basic_info()
        )
    }

    /// サマリー末尾に付く詳細（共通属性 + 車種固有属性）
    pub fn extra_details(&self) -> String {
        let specific = match &self.kind {
            VehicleKind::Car(spec) => spec.extra_details(),
            VehicleKind::Motorbike(spec) => spec.extra_details(),
            VehicleKind::Truck(spec) => spec.extra_details(),
        };
        format!(
            ", Mileage: {}, Fuel: {}{}",
            self.mileage, self.fuel_type, specific
        )
    }

    /// 1行サマリー
    pub fn summary_line(&self) -> String {
        format!("{}{}", self.brief_line(), self.extra_details())
    }

    /// 追加時に表示する複数行の詳細
    pub fn long_description(&self) -> String {
        let specific = match &self.kind {
            VehicleKind::Car(spec) => spec.description_lines(),
            VehicleKind::Motorbike(spec) => spec.description_lines(),
            VehicleKind::Truck(spec) => spec.description_lines(),
        };

        let mut lines = vec![
            format!("Added: {}", self.brief_line()),
            format!("Mileage: {}", self.mileage),
            format!("Fuel: {}", self.fuel_type),
        ];
        lines.extend(specific);
        lines.join("\n")
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary_line())
    }
}
