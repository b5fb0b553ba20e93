use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("設定ディレクトリが見つかりません")]
    ConfigDirNotFound,

    #[error(
        "フリートファイルが見つかりません。以下の場所を確認してください:\n\
        - カレントディレクトリ: fleet.local.kdl, .fleet.local.kdl, fleet.kdl, .fleet.kdl\n\
        - ./.garage/ ディレクトリ\n\
        - ~/.config/garage/fleet.kdl\n\
        または --fleet オプション / GARAGE_FLEET_PATH 環境変数で直接指定できます"
    )]
    FleetFileNotFound,

    #[error("指定されたフリートファイルが存在しません: {0}")]
    ExplicitPathNotFound(std::path::PathBuf),

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
