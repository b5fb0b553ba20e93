use crate::utils;
use colored::Colorize;
use std::path::Path;

pub fn handle(fleet: Option<&Path>, id: u32) -> anyhow::Result<()> {
    let garage = utils::open_garage(fleet, false)?;

    let vehicle = garage
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("車両が見つかりません: ID {}", id))?;

    println!("{}", vehicle.long_description());
    println!();
    println!("  🔊 {}", vehicle.horn_sound().cyan());
    println!("  💡 {}", vehicle.headlight_message().cyan());
    Ok(())
}
