//! 車両ノードのパース

use crate::error::{GarageError, Result};
use crate::model::{CarSpec, MotorbikeSpec, TruckSpec, Variant, Vehicle, VehicleKind};
use kdl::{KdlNode, KdlValue};

/// 車両ノードをパース
///
/// サポートされる形式:
/// ```kdl
/// truck 4 electric=#true {
///     make "Chevrolet"
///     model "Silverado EV"
///     year 2025
///     mileage 1012
///     fuel "Electric"
///     cargo 1.8
///     drivetrain "AWD"
///     bed_length "5ft 11in"
/// }
/// ```
/// 属性は子ノード・プロパティのどちらでも指定できる（子ノードが優先）。
pub fn parse_vehicle(variant: Variant, node: &KdlNode) -> Result<Vehicle> {
    let id_value = node
        .entries()
        .iter()
        .find(|e| e.name().is_none())
        .map(|e| e.value())
        .ok_or_else(|| GarageError::InvalidVehicle {
            id: "?".to_string(),
            message: format!("{} requires an id", variant.as_str()),
        })?;
    let id = id_value
        .as_integer()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| GarageError::InvalidVehicle {
            id: id_value.to_string(),
            message: "id must be a non-negative integer".to_string(),
        })?;

    let attrs = Attributes { node, id };

    let mileage = attrs.required_number("mileage")?;
    // 非負の有限値のみ (NaN・無限大は不可)
    if !mileage.is_finite() || mileage < 0.0 {
        return Err(GarageError::InvalidVehicle {
            id: id.to_string(),
            message: format!("mileage must be a non-negative finite number (got {})", mileage),
        });
    }

    let kind = match variant {
        Variant::Car => VehicleKind::Car(CarSpec {
            doors: attrs.required_count("doors")?,
            door_style: attrs.required_string("door_style")?,
            finish: attrs.required_string("finish")?,
        }),
        Variant::Motorbike => VehicleKind::Motorbike(MotorbikeSpec {
            transmission: attrs.required_string("transmission")?,
            seating_capacity: attrs.required_count("seats")?,
            storage: attrs.required_string("storage")?,
            engine: attrs.required_string("engine")?,
        }),
        Variant::Truck => VehicleKind::Truck(TruckSpec {
            cargo_capacity: attrs.required_number("cargo")?,
            drivetrain: attrs.required_string("drivetrain")?,
            bed_length: attrs.required_string("bed_length")?,
            is_electric: attrs.get("electric").and_then(|v| v.as_bool()).unwrap_or(false),
        }),
    };

    Ok(Vehicle {
        id,
        make: attrs.required_string("make")?,
        model: attrs.required_string("model")?,
        year: attrs
            .required_integer("year")?
            .try_into()
            .map_err(|_| attrs.invalid("year", "out of range"))?,
        mileage,
        fuel_type: attrs.required_string("fuel")?,
        kind,
    })
}

/// 車両ノードの属性アクセサ
struct Attributes<'a> {
    node: &'a KdlNode,
    id: u32,
}

impl<'a> Attributes<'a> {
    /// 子ノード `name value` またはプロパティ `name=value` の値
    fn get(&self, name: &str) -> Option<&'a KdlValue> {
        let child = self
            .node
            .children()
            .and_then(|children| children.get(name))
            .and_then(|child| child.entries().first())
            .map(|e| e.value());
        child.or_else(|| self.node.get(name))
    }

    fn missing(&self, field: &'static str) -> GarageError {
        GarageError::MissingField {
            id: self.id.to_string(),
            field,
        }
    }

    fn invalid(&self, field: &str, reason: &str) -> GarageError {
        GarageError::InvalidVehicle {
            id: self.id.to_string(),
            message: format!("{}: {}", field, reason),
        }
    }

    fn required_string(&self, field: &'static str) -> Result<String> {
        let value = self.get(field).ok_or_else(|| self.missing(field))?;
        value
            .as_string()
            .map(|s| s.to_string())
            .ok_or_else(|| self.invalid(field, "expected a string"))
    }

    fn required_integer(&self, field: &'static str) -> Result<i128> {
        let value = self.get(field).ok_or_else(|| self.missing(field))?;
        value
            .as_integer()
            .ok_or_else(|| self.invalid(field, "expected an integer"))
    }

    fn required_count(&self, field: &'static str) -> Result<u32> {
        u32::try_from(self.required_integer(field)?)
            .map_err(|_| self.invalid(field, "expected a non-negative integer"))
    }

    /// 整数でも小数でも受け付ける
    fn required_number(&self, field: &'static str) -> Result<f64> {
        let value = self.get(field).ok_or_else(|| self.missing(field))?;
        if let Some(value) = value.as_float() {
            Ok(value)
        } else if let Some(value) = value.as_integer() {
            Ok(value as f64)
        } else {
            Err(self.invalid(field, "expected a number"))
        }
    }
}
