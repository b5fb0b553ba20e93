use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GarageError {
    #[error("KDLパースエラー: {0}")]
    KdlParse(#[from] kdl::KdlError),

    #[error("IO エラー: {path}\n理由: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("無効な車両定義 (ID: {id}): {message}")]
    InvalidVehicle { id: String, message: String },

    #[error("車両 (ID: {id}) に {field} が指定されていません")]
    MissingField { id: String, field: &'static str },

    #[error(transparent)]
    UnknownVariant(#[from] ParseVariantError),

    #[error(
        "フリートファイルが見つかりません: {0}\nヒント: fleet.kdl を含むディレクトリで実行するか --fleet で指定してください"
    )]
    FleetFileNotFound(PathBuf),
}

/// 車種名のパースエラー
///
/// clap の value parser としても使えるよう `GarageError` とは分けている。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("不明な車種です: '{0}' (car, motorbike, truck のいずれかを指定してください)")]
pub struct ParseVariantError(pub String);

pub type Result<T> = std::result::Result<T, GarageError>;
