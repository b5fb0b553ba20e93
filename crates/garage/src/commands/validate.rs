use colored::Colorize;
use garage_core::Variant;
use std::path::Path;

pub fn handle(fleet: Option<&Path>) {
    println!("{}", "フリートファイルを検証中...".blue());

    // フリートファイルを検出
    let path = match garage_config::find_fleet_file(fleet) {
        Ok(path) => path,
        Err(e) => {
            eprintln!();
            eprintln!("{}", "✗ フリートファイルが見つかりません".red().bold());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };
    println!("フリートファイル: {}", path.display().to_string().cyan());

    match garage_core::load_fleet(&path) {
        Ok(fleet) => {
            println!("{}", "✓ フリートファイルは正常です！".green().bold());
            println!();
            println!("サマリー:");
            println!("  ガレージ: {}", fleet.name.cyan());
            println!("  車両: {}台", fleet.vehicles.len());
            for variant in Variant::all() {
                let count = fleet
                    .vehicles
                    .iter()
                    .filter(|v| v.variant() == *variant)
                    .count();
                println!("    - {}: {}台", variant.label().cyan(), count);
            }

            // 重複IDは許可されるが、ID指定の操作は先頭の車両にしか効かない
            let mut seen = std::collections::HashSet::new();
            let duplicates: Vec<u32> = fleet
                .vehicles
                .iter()
                .filter(|v| !seen.insert(v.id))
                .map(|v| v.id)
                .collect();
            if !duplicates.is_empty() {
                println!();
                println!(
                    "  {} 重複ID: {:?} (ID指定の操作は先頭の車両のみ対象)",
                    "⚠".yellow(),
                    duplicates
                );
            }
        }
        Err(e) => {
            eprintln!();
            eprintln!("{}", "✗ フリートファイルのエラー".red().bold());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
