//! 修理費の計算
//!
//! 車種ごとに「基本料金 + 走行距離 × 単価」で算出する。
//! レートは固定値で、設定からは変更できない。

use crate::model::{Variant, Vehicle};
use serde::{Deserialize, Serialize};

/// 修理費レート
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepairRate {
    pub base_fee: f64,
    pub per_mileage: f64,
}

impl RepairRate {
    /// 対応表にない車種に適用するレート
    pub const FALLBACK: RepairRate = RepairRate::new(80.0, 0.04);

    pub const fn new(base_fee: f64, per_mileage: f64) -> Self {
        Self {
            base_fee,
            per_mileage,
        }
    }

    pub fn bill(&self, mileage: f64) -> f64 {
        self.base_fee + mileage * self.per_mileage
    }

    /// 車種のレートを対応表から引く
    pub fn for_variant(variant: Variant) -> Self {
        REPAIR_RATES
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, rate)| *rate)
            .unwrap_or(Self::FALLBACK)
    }
}

const REPAIR_RATES: &[(Variant, RepairRate)] = &[
    (Variant::Car, RepairRate::new(100.0, 0.05)),
    (Variant::Motorbike, RepairRate::new(50.0, 0.03)),
    (Variant::Truck, RepairRate::new(150.0, 0.07)),
];

/// 1台分の修理費レポート
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixBill {
    pub id: u32,
    pub variant: Variant,
    pub basic_info: String,
    pub amount: f64,
}

impl FixBill {
    pub fn for_vehicle(vehicle: &Vehicle) -> Self {
        let rate = RepairRate::for_variant(vehicle.variant());
        Self {
            id: vehicle.id,
            variant: vehicle.variant(),
            basic_info: vehicle.basic_info(),
            amount: rate.bill(vehicle.mileage),
        }
    }

    /// 小数点以下2桁に丸めた金額
    pub fn rounded(&self) -> f64 {
        (self.amount * 100.0).round() / 100.0
    }

    pub fn report_line(&self) -> String {
        format!(
            "Fix bill for Vehicle ID {}: £{:.2} - {}: {}",
            self.id,
            self.amount,
            self.variant.label(),
            self.basic_info
        )
    }
}
