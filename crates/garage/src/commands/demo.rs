//! 組み込み車両によるガレージ操作の実演
//!
//! フリートファイルは使わない。

use crate::utils;
use colored::Colorize;
use garage_core::{CarSpec, MotorbikeSpec, TruckSpec, Variant, Vehicle, VehicleKind};

pub fn handle(log_reports: bool) {
    let vehicles = demo_vehicles();
    let mut garage = utils::ReportGarage::with_sink(utils::report_sink(log_reports));

    // 詳細表示で追加
    for vehicle in &vehicles {
        garage.add_vehicle(vehicle.clone(), true);
        println!();
    }

    utils::print_summary("Garage Summary:", &garage);

    println!("{}", "Billing Calculation:".bold());
    garage.fix_all_vehicles();
    println!();

    garage.remove_vehicle_by_id(2);
    utils::print_brief("Garage Summary after removal by ID:", &garage);

    garage.remove_vehicles_by_variant(Variant::Car);
    utils::print_brief("Garage Summary after removal by type:", &garage);

    garage.remove_vehicles_by_variants(&[Variant::Motorbike, Variant::Truck]);
    utils::print_brief("Garage Summary after bulk removal:", &garage);

    // 簡易表示で再追加
    println!("{}", "Re-adding vehicles for final test:".bold());
    for vehicle in vehicles {
        garage.add_vehicle(vehicle, false);
    }
    println!();

    utils::print_brief("Final Garage State before emptying:", &garage);

    println!("{}", "Emptying Garage:".bold());
    garage.empty_garage();
    println!(
        "{} {}台",
        "Final Garage State:".bold(),
        garage.len()
    );
}

fn demo_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: 1,
            make: "Rolls-Royce".to_string(),
            model: "Phantom Serenity".to_string(),
            year: 2023,
            mileage: 20000.0,
            fuel_type: "Petrol".to_string(),
            kind: VehicleKind::Car(CarSpec {
                doors: 4,
                door_style: "coach doors".to_string(),
                finish: "Mother-of-Pearl".to_string(),
            }),
        },
        Vehicle {
            id: 2,
            make: "DeLorean".to_string(),
            model: "DMC-12".to_string(),
            year: 1981,
            mileage: 70480.0,
            fuel_type: "Petrol".to_string(),
            kind: VehicleKind::Car(CarSpec {
                doors: 2,
                door_style: "gull-wing doors".to_string(),
                finish: "Brushed Stainless Steel".to_string(),
            }),
        },
        Vehicle {
            id: 3,
            make: "Honda".to_string(),
            model: "Gold Wing Tour".to_string(),
            year: 2024,
            mileage: 12840.0,
            fuel_type: "Petrol".to_string(),
            kind: VehicleKind::Motorbike(MotorbikeSpec {
                transmission: "Automatic DCT".to_string(),
                seating_capacity: 2,
                storage: "61-liter trunk".to_string(),
                engine: "1,833cc six-cylinder".to_string(),
            }),
        },
        Vehicle {
            id: 4,
            make: "Chevrolet".to_string(),
            model: "Silverado EV".to_string(),
            year: 2025,
            mileage: 1012.0,
            fuel_type: "Electric".to_string(),
            kind: VehicleKind::Truck(TruckSpec {
                cargo_capacity: 1.8,
                drivetrain: "AWD".to_string(),
                bed_length: "5ft 11in".to_string(),
                is_electric: true,
            }),
        },
    ]
}
