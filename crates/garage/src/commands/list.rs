use crate::utils;
use std::path::Path;

pub fn handle(fleet: Option<&Path>, json: bool) -> anyhow::Result<()> {
    if json {
        // JSON出力時はヘッダーを出さない
        let (_, fleet) = utils::open_fleet(fleet)?;
        println!("{}", serde_json::to_string_pretty(&fleet.vehicles)?);
        return Ok(());
    }

    let garage = utils::open_garage(fleet, false)?;
    utils::print_summary("Garage Summary:", &garage);
    Ok(())
}
