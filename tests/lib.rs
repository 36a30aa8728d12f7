// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use building_info::*;

mod location_hierarchy_tests;

#[test]
fn test_core_id_type() {
    let id = LocationId::new(41);
    assert_eq!(id.value(), 41);
    assert_eq!(id.to_string(), "41");
    assert_eq!("  7 ".parse::<LocationId>().unwrap(), LocationId(7));
}

#[test]
fn test_enum_types() {
    for kind in MetricKind::ALL {
        assert!(!kind.to_string().is_empty());
        assert_eq!(kind.to_string().replace(' ', "-").parse::<MetricKind>().unwrap(), kind);
    }
    assert_eq!(LocationKind::Room.child_kind(), None);
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
}

#[test]
fn test_public_api_end_to_end() {
    let mut registry = BuildingRegistry::new();
    let mut generator = FacilityGenerator::with_seed(3);
    registry.add_building(generator.generate_building(1, "Generated", 2, 3)).unwrap();
    registry.add_building(Building::new(2, "Empty")).unwrap();

    let path = LocationPath::building(1);
    let area = registry.metric_at(&path, MetricKind::Area).unwrap();
    let report = registry.report_at(&path, CostSettings::default()).unwrap();
    assert_eq!(report.area, area);
    assert_eq!(report.room_count, 6);

    let empty = registry.report_at(&LocationPath::building(2), CostSettings::default()).unwrap();
    assert_eq!(empty.area, 0.0);
    assert!(empty.exceeding_rooms.is_empty());
}
