//! フリートローダー
//!
//! フリートファイルの読み込みとガレージへの在庫投入を統合

use crate::error::{GarageError, Result};
use crate::garage::Garage;
use crate::model::Fleet;
use crate::parser::parse_fleet_file;
use crate::report::ReportSink;
use std::path::Path;
use tracing::{debug, info, instrument};

/// フリートファイルを読み込む
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_fleet(path: &Path) -> Result<Fleet> {
    if !path.is_file() {
        return Err(GarageError::FleetFileNotFound(path.to_path_buf()));
    }

    debug!("Parsing fleet file");
    let fleet = parse_fleet_file(path)?;
    info!(
        garage = %fleet.name,
        vehicles = fleet.vehicles.len(),
        "Fleet loaded successfully"
    );
    Ok(fleet)
}

/// フリートの車両を報告なしでガレージに格納する
pub fn stock_garage<S: ReportSink>(fleet: Fleet, sink: S) -> Garage<S> {
    let mut garage = Garage::with_sink(sink);
    garage.restock(fleet.vehicles);
    garage
}
