use colored::Colorize;
use garage_core::{Fleet, Garage, ReportSink, StdoutSink, TracingSink, Vehicle};
use std::path::{Path, PathBuf};

/// フリートファイルを探して読み込む（共通ロジック）
pub fn open_fleet(fleet_arg: Option<&Path>) -> anyhow::Result<(PathBuf, Fleet)> {
    let path = garage_config::find_fleet_file(fleet_arg)?;
    let fleet = garage_core::load_fleet(&path)?;
    Ok((path, fleet))
}

/// CLI で使うガレージ（報告先は --log-reports で切り替え）
pub type ReportGarage = Garage<Box<dyn ReportSink>>;

/// 報告先を選ぶ
pub fn report_sink(log_reports: bool) -> Box<dyn ReportSink> {
    if log_reports {
        Box::new(TracingSink)
    } else {
        Box::new(StdoutSink)
    }
}

/// フリートファイルの車両を格納したガレージを用意する
pub fn open_garage(
    fleet_arg: Option<&Path>,
    log_reports: bool,
) -> anyhow::Result<ReportGarage> {
    let (path, fleet) = open_fleet(fleet_arg)?;
    print_loaded_fleet_file(&path, &fleet);
    Ok(garage_core::stock_garage(fleet, report_sink(log_reports)))
}

/// 読み込んだフリートファイル情報を表示
pub fn print_loaded_fleet_file(path: &Path, fleet: &Fleet) {
    println!(
        "📄 {} ({}): {}台",
        path.display().to_string().cyan(),
        fleet.name.bold(),
        fleet.vehicles.len()
    );
    println!();
}

/// 見出し付きで1行サマリーを一覧表示
pub fn print_summary<S: ReportSink>(heading: &str, garage: &Garage<S>) {
    print_lines(heading, garage.vehicles(), Vehicle::summary_line);
}

/// 見出し付きで簡易表示（詳細なし）
pub fn print_brief<S: ReportSink>(heading: &str, garage: &Garage<S>) {
    print_lines(heading, garage.vehicles(), Vehicle::brief_line);
}

fn print_lines(heading: &str, vehicles: &[Vehicle], render: fn(&Vehicle) -> String) {
    println!("{}", heading.bold());
    if vehicles.is_empty() {
        println!("{}", "(ガレージは空です)".dimmed());
    }
    for vehicle in vehicles {
        println!("{}", render(vehicle));
    }
    println!();
}

/// 金額表示（小数点以下2桁）
pub fn format_amount(amount: f64) -> String {
    format!("£{:.2}", amount)
}
