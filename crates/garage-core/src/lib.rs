//! Garage Core
//!
//! 車両モデル、修理費の計算、ガレージ在庫の管理を提供します。
//!
//! - [`model`]: 車両 (Car / Motorbike / Truck) の定義と表示
//! - [`billing`]: 車種ごとの修理費レート
//! - [`garage`]: 挿入順を保つ車両コレクションと削除ポリシー
//! - [`report`]: ガレージ操作の報告先 (ReportSink)
//! - [`parser`] / [`loader`]: KDL フリートファイルの読み込み

pub mod billing;
pub mod error;
pub mod garage;
pub mod loader;
pub mod model;
pub mod parser;
pub mod report;

pub use billing::{FixBill, RepairRate};
pub use error::{GarageError, ParseVariantError, Result};
pub use garage::Garage;
pub use loader::{load_fleet, stock_garage};
pub use model::{CarSpec, Fleet, MotorbikeSpec, TruckSpec, Variant, Vehicle, VehicleKind};
pub use parser::{parse_fleet_file, parse_fleet_string};
pub use report::{MemorySink, ReportSink, StdoutSink, TracingSink};
