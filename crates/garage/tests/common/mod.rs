use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 基本シナリオのフリート: Car×2, Motorbike, Truck
#[allow(dead_code)]
pub const SAMPLE_FLEET: &str = r#"
garage "Main Street"

car 1 {
    make "Rolls-Royce"
    model "Phantom Serenity"
    year 2023
    mileage 20000
    fuel "Petrol"
    doors 4
    door_style "coach doors"
    finish "Mother-of-Pearl"
}

car 2 {
    make "DeLorean"
    model "DMC-12"
    year 1981
    mileage 70480
    fuel "Petrol"
    doors 2
    door_style "gull-wing doors"
    finish "Brushed Stainless Steel"
}

motorbike 3 {
    make "Honda"
    model "Gold Wing Tour"
    year 2024
    mileage 12840
    fuel "Petrol"
    transmission "Automatic DCT"
    seats 2
    storage "61-liter trunk"
    engine "1,833cc six-cylinder"
}

truck 4 electric=#true {
    make "Chevrolet"
    model "Silverado EV"
    year 2025
    mileage 1012
    fuel "Electric"
    cargo 1.8
    drivetrain "AWD"
    bed_length "5ft 11in"
}
"#;

pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    /// SAMPLE_FLEET を書き込んだプロジェクト
    #[allow(dead_code)]
    pub fn with_sample_fleet() -> Self {
        let project = Self::new();
        project.write_fleet_kdl(SAMPLE_FLEET);
        project
    }

    pub fn write_fleet_kdl(&self, content: &str) {
        fs::write(self.fleet_path(), content).unwrap();
    }

    pub fn fleet_path(&self) -> PathBuf {
        self.root.path().join("fleet.kdl")
    }

    #[allow(dead_code)]
    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }
}
