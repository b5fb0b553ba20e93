use crate::utils;
use garage_core::Variant;
use std::path::Path;

pub fn handle_id(fleet: Option<&Path>, id: u32, log_reports: bool) -> anyhow::Result<()> {
    let mut garage = utils::open_garage(fleet, log_reports)?;
    garage.remove_vehicle_by_id(id);
    println!();
    utils::print_brief("Garage Summary after removal by ID:", &garage);
    Ok(())
}

pub fn handle_variant(
    fleet: Option<&Path>,
    variant: Variant,
    log_reports: bool,
) -> anyhow::Result<()> {
    let mut garage = utils::open_garage(fleet, log_reports)?;
    garage.remove_vehicles_by_variant(variant);
    println!();
    utils::print_brief("Garage Summary after removal by type:", &garage);
    Ok(())
}

pub fn handle_variants(
    fleet: Option<&Path>,
    variants: &[Variant],
    log_reports: bool,
) -> anyhow::Result<()> {
    let mut garage = utils::open_garage(fleet, log_reports)?;
    garage.remove_vehicles_by_variants(variants);
    println!();
    utils::print_brief("Garage Summary after bulk removal:", &garage);
    Ok(())
}
