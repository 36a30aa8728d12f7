//! Tests for the location hierarchy
//!
//! These tests cover the type-checked add/remove contract, the id lookups and
//! the JSON shape of the tree.

use building_info::facility::{find_child_by_id, remove_child_by_id};
use building_info::{Building, Level, Location, LocationError, LocationId, LocationKind, Room};

fn room(id: i64) -> Room {
    Room::new(id, format!("Room {}", id), 20.0, 60.0, 6.0, 10.0)
}

#[test]
fn test_building_accepts_levels_in_order() {
    let mut building = Location::from(Building::new(1, "B"));
    building.add(Level::new(3, "third").into()).unwrap();
    building.add(Level::new(1, "first").into()).unwrap();

    let ids: Vec<i64> = building
        .as_building()
        .unwrap()
        .levels()
        .iter()
        .map(|level| level.id().value())
        .collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn test_rejected_add_leaves_tree_unchanged() {
    let mut building = Location::from(Building::with_levels(1, "B", vec![Level::new(1, "L")]));
    let before = building.clone();

    let err = building.add(room(1).into()).unwrap_err();
    assert_eq!(
        err,
        LocationError::InvalidChildType {
            parent: LocationKind::Building,
            expected: LocationKind::Level,
            child: LocationKind::Room,
        }
    );
    assert!(building.add(Building::new(2, "other").into()).is_err());
    assert_eq!(building, before);

    let mut level = Location::from(Level::new(1, "L"));
    assert!(matches!(
        level.add(Level::new(2, "nested").into()),
        Err(LocationError::InvalidChildType { .. })
    ));
    assert_eq!(level.child_count(), 0);
}

#[test]
fn test_room_rejects_every_mutation() {
    let mut leaf = Location::from(room(1));

    for child in [Location::from(room(2)), Level::new(1, "L").into(), Building::new(1, "B").into()] {
        assert!(matches!(
            leaf.add(child.clone()),
            Err(LocationError::UnsupportedOperation { kind: LocationKind::Room, .. })
        ));
        assert!(matches!(
            leaf.remove(&child),
            Err(LocationError::UnsupportedOperation { kind: LocationKind::Room, .. })
        ));
    }
    assert_eq!(leaf, Location::from(room(1)));
}

#[test]
fn test_remove_detaches_matching_child() {
    let mut level = Location::from(Level::with_rooms(1, "L", vec![room(1), room(2), room(3)]));

    let removed = level.remove(&room(2).into()).unwrap();
    assert_eq!(removed, Location::from(room(2)));
    assert_eq!(level.child_count(), 2);

    let err = level.remove(&room(2).into()).unwrap_err();
    assert!(matches!(err, LocationError::NotFound { kind: LocationKind::Room, id: LocationId(2) }));
    assert_eq!(level.child_count(), 2);
}

#[test]
fn test_remove_unattached_child_is_not_found() {
    let mut level = Location::from(Level::new(1, "L"));
    let err = level.remove(&room(1).into()).unwrap_err();
    assert_eq!(err, LocationError::not_found(LocationKind::Room, LocationId(1)));
}

#[test]
fn test_remove_room_with_nan_measurement() {
    let mut unmetered = room(4);
    unmetered.set_heating(f64::NAN);
    let mut level = Location::from(Level::with_rooms(1, "L", vec![room(1), unmetered.clone()]));

    let removed = level.remove(&unmetered.into()).unwrap();
    assert!(matches!(removed, Location::Room(ref r) if r.heating().is_nan()));
    assert_eq!(level.child_count(), 1);
}

#[test]
fn test_remove_level_holding_nan_room() {
    let mut odd = room(2);
    odd.set_cube(f64::NAN);
    let level = Level::with_rooms(2, "L2", vec![odd]);
    let mut building = Location::from(Building::with_levels(1, "B", vec![Level::new(1, "L1"), level.clone()]));

    building.remove(&level.into()).unwrap();
    assert_eq!(building.child_count(), 1);
}

#[test]
fn test_lookup_by_id_is_shallow() {
    let building = Building::with_levels(
        1,
        "B",
        vec![Level::with_rooms(1, "L1", vec![room(1), room(2)]), Level::with_rooms(2, "L2", vec![room(3)])],
    );

    let level = building.level(LocationId(2)).unwrap();
    assert_eq!(level.name(), "L2");
    assert_eq!(level.room(LocationId(3)).unwrap().name(), "Room 3");

    // Room 3 lives on level 2 only
    let err = building.level(LocationId(1)).unwrap().room(LocationId(3)).unwrap_err();
    assert_eq!(err, LocationError::not_found(LocationKind::Room, LocationId(3)));

    assert!(find_child_by_id(building.levels(), LocationId(9)).is_err());
}

#[test]
fn test_remove_by_id_and_duplicates() {
    let mut rooms = vec![room(1), Room::new(1, "twin", 1.0, 1.0, 1.0, 1.0), room(2)];

    let removed = remove_child_by_id(&mut rooms, LocationId(1)).unwrap();
    assert_eq!(removed.name(), "Room 1");
    assert_eq!(rooms[0].name(), "twin");

    assert!(remove_child_by_id(&mut rooms, LocationId(5)).unwrap_err().is_not_found());
}

#[test]
fn test_mutable_lookup_updates_in_place() {
    let mut building = Building::with_levels(1, "B", vec![Level::with_rooms(1, "L", vec![room(1)])]);

    building
        .level_mut(LocationId(1))
        .unwrap()
        .room_mut(LocationId(1))
        .unwrap()
        .set_heating(12.0);

    assert_eq!(building.all_rooms().next().unwrap().heating(), 12.0);
}

#[test]
fn test_json_wire_names_and_order() {
    let building = Building::with_levels(
        7,
        "Wire",
        vec![Level::with_rooms(2, "b", vec![room(5), room(4)]), Level::new(1, "a")],
    );

    let json = serde_json::to_value(&building).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["levelsInBuilding"][0]["id"], 2);
    assert_eq!(json["levelsInBuilding"][0]["roomsOnLevel"][1]["id"], 4);
    assert_eq!(json["levelsInBuilding"][0]["roomsOnLevel"][0]["heating"], 6.0);

    let back: Building = serde_json::from_value(json).unwrap();
    assert_eq!(back, building);
}

#[test]
fn test_missing_child_arrays_deserialize_empty() {
    let building: Building =
        serde_json::from_str(r#"{ "id": 1, "name": "Bare", "levelsInBuilding": [{ "id": 1, "name": "L" }] }"#)
            .unwrap();
    assert_eq!(building.level_count(), 1);
    assert_eq!(building.room_count(), 0);

    let bare: Building = serde_json::from_str(r#"{ "id": 2, "name": "Barer" }"#).unwrap();
    assert_eq!(bare.level_count(), 0);
}
