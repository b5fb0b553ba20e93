//! KDLパーサー
//!
//! フリートファイル (fleet.kdl) をパースします。
//! 車両ノードのパース処理はモジュールに分離されています。

mod vehicle;

pub use vehicle::parse_vehicle;

use crate::error::{GarageError, Result};
use crate::model::{Fleet, Variant};
use kdl::KdlDocument;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// KDLファイルをパースしてFleetを生成
pub fn parse_fleet_file<P: AsRef<Path>>(path: P) -> Result<Fleet> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| GarageError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let name = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed")
        .to_string();
    parse_fleet_string(&content, name)
}

/// KDL文字列をパース
///
/// ノード名が車種 (car / motorbike / truck) のノードを車両として、
/// `garage "name"` ノードをガレージ名として読む。その他のノードは無視する。
pub fn parse_fleet_string(content: &str, default_name: String) -> Result<Fleet> {
    let doc: KdlDocument = content.parse()?;

    let mut fleet = Fleet {
        name: default_name,
        vehicles: Vec::new(),
    };

    let mut seen_ids = HashSet::new();
    for node in doc.nodes() {
        let node_name = node.name().value();
        if node_name == "garage" {
            if let Some(name) = node.entries().first().and_then(|e| e.value().as_string()) {
                fleet.name = name.to_string();
            }
        } else if let Some(variant) = Variant::parse(node_name) {
            let vehicle = parse_vehicle(variant, node)?;
            if !seen_ids.insert(vehicle.id) {
                // 重複IDは許可するが、ID指定の操作は先頭の車両にしか効かない
                warn!(id = vehicle.id, "Duplicate vehicle id in fleet file");
            }
            fleet.vehicles.push(vehicle);
        } else {
            // 不明なノードはスキップ
            debug!(node = node_name, "Skipping unknown node");
        }
    }

    Ok(fleet)
}

#[cfg(test)]
mod tests;
