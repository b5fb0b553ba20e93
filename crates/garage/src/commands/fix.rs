use crate::utils;
use colored::Colorize;
use std::path::Path;

pub fn handle(
    fleet: Option<&Path>,
    id: Option<u32>,
    all: bool,
    log_reports: bool,
) -> anyhow::Result<()> {
    if id.is_none() && !all {
        anyhow::bail!("車両IDまたは --all を指定してください: garage fix <ID> / garage fix --all");
    }

    let mut garage = utils::open_garage(fleet, log_reports)?;
    println!("{}", "Billing Calculation:".bold());

    if let Some(id) = id {
        // 該当なしの場合ガレージは何も報告しない
        if garage.fix_vehicle(id).is_none() {
            eprintln!("{}", format!("ID {} の車両はありません", id).dimmed());
        }
        return Ok(());
    }

    let bills = garage.fix_all_vehicles();
    let total: f64 = bills.iter().map(|b| b.amount).sum();
    println!();
    println!(
        "{} {} ({}台)",
        "合計:".bold(),
        utils::format_amount(total).green(),
        bills.len()
    );
    Ok(())
}
