use crate::utils;
use colored::Colorize;
use std::path::Path;

/// フリートファイルの車両を add_vehicle で1台ずつ追加する
pub fn handle(fleet: Option<&Path>, verbose: bool, log_reports: bool) -> anyhow::Result<()> {
    let (path, fleet) = utils::open_fleet(fleet)?;
    utils::print_loaded_fleet_file(&path, &fleet);

    let mut garage = utils::ReportGarage::with_sink(utils::report_sink(log_reports));
    for vehicle in fleet.vehicles {
        garage.add_vehicle(vehicle, verbose);
        if verbose {
            println!();
        }
    }

    if !verbose {
        println!();
    }
    println!(
        "{}",
        format!("✓ {}台をガレージに追加しました", garage.len())
            .green()
            .bold()
    );
    println!();
    utils::print_summary("Garage Summary:", &garage);
    Ok(())
}
