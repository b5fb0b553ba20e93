//! フリート定義

use super::vehicle::Vehicle;
use serde::{Deserialize, Serialize};

/// フリートファイル1つ分の内容
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fleet {
    /// ガレージ名 (`garage "name"` ノード、未指定ならファイルのディレクトリ名)
    pub name: String,
    /// 定義順の車両リスト
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}
