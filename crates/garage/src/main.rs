mod commands;
mod utils;

use clap::{Parser, Subcommand};
use garage_core::Variant;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "garage")]
#[command(about = "車両フリートの在庫・修理費・削除をまとめて扱うガレージ管理ツール", long_about = None)]
struct Cli {
    /// フリートファイルのパス (GARAGE_FLEET_PATH 環境変数でも指定可)
    #[arg(short, long, global = true, env = "GARAGE_FLEET_PATH")]
    fleet: Option<PathBuf>,

    /// ガレージの報告を標準出力ではなく tracing (target: garage::report) に流す
    #[arg(long, global = true)]
    log_reports: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 組み込みの車両でガレージ操作を一通り実演
    Demo,
    /// フリートファイルの車両を1台ずつガレージに追加
    Load {
        /// 追加時に詳細を表示
        #[arg(short, long)]
        verbose: bool,
    },
    /// 車両の一覧を表示
    List {
        /// JSON形式で出力
        #[arg(long)]
        json: bool,
    },
    /// 車両の詳細・ホーン・ヘッドライトを表示
    Inspect {
        /// 車両ID
        id: u32,
    },
    /// 修理費を計算
    Fix {
        /// 車両ID
        id: Option<u32>,
        /// 全車両の修理費を計算
        #[arg(short, long, conflicts_with = "id")]
        all: bool,
    },
    /// 車両を削除
    #[command(subcommand)]
    Remove(RemoveCommands),
    /// ガレージを空にする
    Empty,
    /// フリートファイルを検証
    Validate,
    /// バージョン情報を表示
    Version,
}

/// 削除のサブコマンド
#[derive(Subcommand)]
enum RemoveCommands {
    /// IDで1台削除（重複IDは先頭のみ）
    Id {
        /// 車両ID
        id: u32,
    },
    /// 指定車種をすべて削除
    Variant {
        /// 車種 (car, motorbike, truck)
        variant: Variant,
    },
    /// 複数車種をまとめて削除
    Variants {
        /// 車種 (car, motorbike, truck)
        variants: Vec<Variant>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ログはstderrへ（stdoutはレポート専用）
    let mut filter = EnvFilter::from_default_env();
    if cli.log_reports {
        filter = filter.add_directive("garage::report=info".parse()?);
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let fleet = cli.fleet.as_deref();
    let log_reports = cli.log_reports;

    // コマンドディスパッチ
    match cli.command {
        Commands::Version => {
            println!("garage {}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Demo => commands::demo::handle(log_reports),
        Commands::Load { verbose } => {
            commands::load::handle(fleet, verbose, log_reports)?;
        }
        Commands::List { json } => commands::list::handle(fleet, json)?,
        Commands::Inspect { id } => commands::inspect::handle(fleet, id)?,
        Commands::Fix { id, all } => commands::fix::handle(fleet, id, all, log_reports)?,
        Commands::Remove(remove_cmd) => match remove_cmd {
            RemoveCommands::Id { id } => {
                commands::remove::handle_id(fleet, id, log_reports)?;
            }
            RemoveCommands::Variant { variant } => {
                commands::remove::handle_variant(fleet, variant, log_reports)?;
            }
            RemoveCommands::Variants { variants } => {
                commands::remove::handle_variants(fleet, &variants, log_reports)?;
            }
        },
        Commands::Empty => commands::empty::handle(fleet, log_reports)?,
        Commands::Validate => commands::validate::handle(fleet),
    }

    Ok(())
}
