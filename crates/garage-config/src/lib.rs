pub mod error;

pub use error::*;

use std::path::{Path, PathBuf};
use tracing::debug;

/// フリートファイルのパスを直接指定する環境変数
pub const FLEET_PATH_ENV: &str = "GARAGE_FLEET_PATH";

/// カレントディレクトリ・.garage/ 内で探すファイル名（優先順）
const CANDIDATES: [&str; 4] = ["fleet.local.kdl", ".fleet.local.kdl", "fleet.kdl", ".fleet.kdl"];

/// Garageの設定ディレクトリ (~/.config/garage)
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("garage");
    Ok(config_dir)
}

/// フリートファイルを探す
///
/// 以下の優先順位で検索:
/// 1. 明示的な指定 (--fleet)、なければ環境変数 GARAGE_FLEET_PATH
/// 2. カレントディレクトリ: fleet.local.kdl, .fleet.local.kdl, fleet.kdl, .fleet.kdl
/// 3. ./.garage/ ディレクトリ内: 同様の順序
/// 4. ~/.config/garage/fleet.kdl (グローバル設定)
pub fn find_fleet_file(explicit: Option<&Path>) -> Result<PathBuf> {
    // 1. 直接指定（存在しなければフォールバックせずエラー）
    let explicit = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(FLEET_PATH_ENV).map(PathBuf::from));
    if let Some(path) = explicit {
        debug!(path = %path.display(), "Using explicit fleet file");
        return if path.is_file() {
            Ok(path)
        } else {
            Err(ConfigError::ExplicitPathNotFound(path))
        };
    }

    // 2, 3. カレントディレクトリと ./.garage/
    let current_dir = std::env::current_dir()?;
    if let Some(path) = find_fleet_file_in(&current_dir) {
        return Ok(path);
    }

    // 4. グローバル設定ファイル
    if let Ok(config_dir) = get_config_dir() {
        let global = config_dir.join("fleet.kdl");
        if global.is_file() {
            debug!(path = %global.display(), "Using global fleet file");
            return Ok(global);
        }
    }

    // どのフリートファイルも見つからなかった
    Err(ConfigError::FleetFileNotFound)
}

/// 指定ディレクトリとその .garage/ からフリートファイルを探す
pub fn find_fleet_file_in(dir: &Path) -> Option<PathBuf> {
    let garage_dir = dir.join(".garage");
    [dir.to_path_buf(), garage_dir]
        .iter()
        .flat_map(|base| CANDIDATES.iter().map(move |name| base.join(name)))
        .find(|path| path.is_file())
        .inspect(|path| debug!(path = %path.display(), "Found fleet file"))
}
