//! 車種タグ

use crate::error::ParseVariantError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 車種 (閉じた集合)
///
/// 表示用ラベルは型名ではなく [`Variant::label`] の対応表から取得する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Car,
    Motorbike,
    Truck,
}

impl Variant {
    /// レポートに表示するラベル
    pub fn label(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Motorbike => "Motorbike",
            Self::Truck => "Truck",
        }
    }

    /// KDLノード名・CLI引数で使う小文字表記
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Motorbike => "motorbike",
            Self::Truck => "truck",
        }
    }

    /// 文字列からパース
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "car" => Some(Self::Car),
            "motorbike" | "motorcycle" | "bike" => Some(Self::Motorbike),
            "truck" => Some(Self::Truck),
            _ => None,
        }
    }

    /// 全車種（定義順）
    pub fn all() -> &'static [Variant] {
        &[Self::Car, Self::Motorbike, Self::Truck]
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseVariantError(s.to_string()))
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
