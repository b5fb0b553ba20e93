use crate::utils;
use colored::Colorize;
use std::path::Path;

pub fn handle(fleet: Option<&Path>, log_reports: bool) -> anyhow::Result<()> {
    let mut garage = utils::open_garage(fleet, log_reports)?;

    println!("{}", "Emptying Garage:".bold());
    garage.empty_garage();
    println!();

    utils::print_summary("Final Garage State:", &garage);
    Ok(())
}
