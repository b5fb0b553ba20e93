use super::*;
use crate::error::GarageError;
use crate::model::{Variant, VehicleKind};

const SAMPLE_FLEET: &str = r#"
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

#[test]
fn test_parse_sample_fleet() {
    let fleet = parse_fleet_string(SAMPLE_FLEET, "test".to_string()).unwrap();
    assert_eq!(fleet.name, "Main Street");
    assert_eq!(fleet.vehicles.len(), 3);

    let variants: Vec<Variant> = fleet.vehicles.iter().map(|v| v.variant()).collect();
    assert_eq!(
        variants,
        vec![Variant::Car, Variant::Motorbike, Variant::Truck]
    );
}

#[test]
fn test_parse_car_attributes() {
    let fleet = parse_fleet_string(SAMPLE_FLEET, "test".to_string()).unwrap();
    let car = &fleet.vehicles[0];

    assert_eq!(car.id, 1);
    assert_eq!(car.make, "Rolls-Royce");
    assert_eq!(car.model, "Phantom Serenity");
    assert_eq!(car.year, 2023);
    assert_eq!(car.mileage, 20000.0);
    assert_eq!(car.fuel_type, "Petrol");
    match &car.kind {
        VehicleKind::Car(spec) => {
            assert_eq!(spec.doors, 4);
            assert_eq!(spec.door_style, "coach doors");
            assert_eq!(spec.finish, "Mother-of-Pearl");
        }
        other => panic!("expected a car, got {:?}", other),
    }
}

#[test]
fn test_parse_truck_property_flag() {
    let fleet = parse_fleet_string(SAMPLE_FLEET, "test".to_string()).unwrap();
    match &fleet.vehicles[2].kind {
        VehicleKind::Truck(spec) => {
            assert!(spec.is_electric);
            assert_eq!(spec.cargo_capacity, 1.8);
            assert_eq!(spec.bed_length, "5ft 11in");
        }
        other => panic!("expected a truck, got {:?}", other),
    }
}

#[test]
fn test_parse_truck_electric_defaults_to_false() {
    let kdl = r#"
        truck 10 {
            make "Ford"
            model "F-150"
            year 2020
            mileage 50000.5
            fuel "Diesel"
            cargo 1
            drivetrain "4WD"
            bed_length "6ft"
        }
    "#;

    let fleet = parse_fleet_string(kdl, "test".to_string()).unwrap();
    let truck = &fleet.vehicles[0];
    assert_eq!(truck.mileage, 50000.5);
    match &truck.kind {
        VehicleKind::Truck(spec) => {
            assert!(!spec.is_electric);
            // 整数でも積載量として読める
            assert_eq!(spec.cargo_capacity, 1.0);
        }
        other => panic!("expected a truck, got {:?}", other),
    }
}

#[test]
fn test_parse_motorbike_aliases() {
    let kdl = r#"
        motorcycle 5 make="Ducati" model="Monster" year=2022 mileage=300 fuel="Petrol" transmission="Manual" seats=1 storage="none" engine="937cc"
        bike 6 make="Vespa" model="GTS" year=2021 mileage=900 fuel="Petrol" transmission="CVT" seats=2 storage="underseat" engine="300cc"
    "#;

    let fleet = parse_fleet_string(kdl, "test".to_string()).unwrap();
    assert_eq!(fleet.vehicles.len(), 2);
    assert!(
        fleet
            .vehicles
            .iter()
            .all(|v| v.variant() == Variant::Motorbike)
    );
}

#[test]
fn test_child_node_overrides_property() {
    let kdl = r#"
        car 1 make="Fiat" model="Panda" year=2010 mileage=1 fuel="Petrol" doors=3 door_style="hinged" finish="matte" {
            doors 5
        }
    "#;

    let fleet = parse_fleet_string(kdl, "test".to_string()).unwrap();
    match &fleet.vehicles[0].kind {
        VehicleKind::Car(spec) => assert_eq!(spec.doors, 5),
        other => panic!("expected a car, got {:?}", other),
    }
}

#[test]
fn test_parse_keeps_duplicate_ids_in_order() {
    let kdl = r#"
        car 7 make="A" model="One" year=2000 mileage=1 fuel="Petrol" doors=2 door_style="hinged" finish="gloss"
        car 7 make="B" model="Two" year=2001 mileage=2 fuel="Petrol" doors=4 door_style="hinged" finish="gloss"
    "#;

    let fleet = parse_fleet_string(kdl, "test".to_string()).unwrap();
    let makes: Vec<&str> = fleet.vehicles.iter().map(|v| v.make.as_str()).collect();
    assert_eq!(makes, vec!["A", "B"]);
}

#[test]
fn test_unknown_nodes_are_skipped() {
    let kdl = r#"
        boat 1 make="Riva"
        notes "fleet refreshed yearly"
    "#;

    let fleet = parse_fleet_string(kdl, "fallback".to_string()).unwrap();
    assert_eq!(fleet.name, "fallback");
    assert!(fleet.vehicles.is_empty());
}

#[test]
fn test_missing_field_error() {
    let kdl = r#"
        car 1 {
            make "Rolls-Royce"
            model "Phantom"
            year 2023
            mileage 10
            fuel "Petrol"
            doors 4
            finish "gloss"
        }
    "#;

    let err = parse_fleet_string(kdl, "test".to_string()).unwrap_err();
    match err {
        GarageError::MissingField { id, field } => {
            assert_eq!(id, "1");
            assert_eq!(field, "door_style");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_negative_mileage_error() {
    let kdl = r#"
        car 2 make="A" model="B" year=2000 mileage=-5 fuel="Petrol" doors=2 door_style="hinged" finish="gloss"
    "#;

    let err = parse_fleet_string(kdl, "test".to_string()).unwrap_err();
    assert!(matches!(err, GarageError::InvalidVehicle { .. }));
    assert!(err.to_string().contains("mileage"));
}

#[test]
fn test_non_finite_mileage_error() {
    for mileage in ["#nan", "#inf"] {
        let kdl = format!(
            r#"car 2 make="A" model="B" year=2000 mileage={} fuel="Petrol" doors=2 door_style="hinged" finish="gloss""#,
            mileage
        );

        let err = parse_fleet_string(&kdl, "test".to_string()).unwrap_err();
        assert!(matches!(err, GarageError::InvalidVehicle { .. }));
        assert!(err.to_string().contains("mileage"));
    }
}

#[test]
fn test_negative_id_error() {
    let kdl = r#"
        car -1 make="A" model="B" year=2000 mileage=0 fuel="Petrol" doors=2 door_style="hinged" finish="gloss"
    "#;

    let err = parse_fleet_string(kdl, "test".to_string()).unwrap_err();
    assert!(matches!(err, GarageError::InvalidVehicle { .. }));
    assert!(err.to_string().contains("non-negative integer"));
}

#[test]
fn test_missing_id_error() {
    let kdl = r#"
        truck make="A"
    "#;

    let err = parse_fleet_string(kdl, "test".to_string()).unwrap_err();
    assert!(matches!(err, GarageError::InvalidVehicle { .. }));
}

#[test]
fn test_wrong_type_error() {
    let kdl = r#"
        car 3 make="A" model="B" year="old" mileage=1 fuel="Petrol" doors=2 door_style="hinged" finish="gloss"
    "#;

    let err = parse_fleet_string(kdl, "test".to_string()).unwrap_err();
    assert!(err.to_string().contains("year"));
}

#[test]
fn test_invalid_kdl_syntax() {
    let err = parse_fleet_string("car 1 {", "test".to_string()).unwrap_err();
    assert!(matches!(err, GarageError::KdlParse(_)));
}

#[test]
fn test_parse_fleet_file_uses_directory_name() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("depot");
    std::fs::create_dir(&project).unwrap();
    let path = project.join("fleet.kdl");
    std::fs::write(&path, "// empty fleet\n").unwrap();

    let fleet = parse_fleet_file(&path).unwrap();
    assert_eq!(fleet.name, "depot");
    assert!(fleet.vehicles.is_empty());
}

#[test]
fn test_parse_fleet_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_fleet_file(dir.path().join("nope.kdl")).unwrap_err();
    assert!(matches!(err, GarageError::IoError { .. }));
}
