//! Battlefield generation integration tests
//!
//! Every profile must produce a gapless grid, keep every structure
//! reachable through at least one door, and stay reproducible under a
//! fixed seed.

use aegis_tactics::battlefield::{generate, generate_random, MapProfile, Terrain};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_profiles_paint_complete_grids() {
    for profile in MapProfile::all() {
        let map = generate(profile);
        let (w, h) = profile.dimensions();
        assert_eq!((map.width, map.height), (w, h));

        let mut count = 0u32;
        for y in 0..h {
            for x in 0..w {
                assert!(
                    map.terrain(x, y).is_some(),
                    "{}: missing tile at ({}, {})",
                    profile.name(),
                    x,
                    y
                );
                count += 1;
            }
        }
        assert_eq!(count, w * h);
    }
}

#[test]
fn test_profiles_contain_doors_and_cover() {
    for profile in MapProfile::all() {
        let map = generate(profile);
        let doors = map.tiles().filter(|t| t.terrain.is_door()).count();
        let cover = map
            .tiles()
            .filter(|t| t.terrain == Terrain::LowWall)
            .count();
        let walls = map.tiles().filter(|t| t.terrain == Terrain::Wall).count();

        assert!(doors >= 3, "{}: too few doors ({})", profile.name(), doors);
        assert!(cover >= 4, "{}: too little cover ({})", profile.name(), cover);
        assert!(walls > 0, "{}: no walls", profile.name());
    }
}

#[test]
fn test_door_tiles_sit_in_wall_runs() {
    // A door that is not flanked by wall (or low-wall) along one axis
    // would be a door to nowhere.
    for profile in MapProfile::all() {
        let map = generate(profile);
        for tile in map.tiles().filter(|t| t.terrain.is_door()) {
            let (x, y) = (tile.x, tile.y);
            let horizontal_neighbors = [
                x.checked_sub(1).and_then(|nx| map.terrain(nx, y)),
                map.terrain(x + 1, y),
            ];
            let vertical_neighbors = [
                y.checked_sub(1).and_then(|ny| map.terrain(x, ny)),
                map.terrain(x, y + 1),
            ];
            let framed = |pair: &[Option<Terrain>; 2]| {
                pair.iter().all(|t| {
                    matches!(t, Some(Terrain::Wall) | Some(Terrain::LowWall))
                })
            };
            assert!(
                framed(&horizontal_neighbors) || framed(&vertical_neighbors),
                "{}: door at ({}, {}) is not set into a wall",
                profile.name(),
                x,
                y
            );
        }
    }
}

#[test]
fn test_warehouse_interior_reachable_from_exterior() {
    // The warehouse perimeter carries three doors; walking the
    // perimeter must find them and nothing else passable.
    let map = generate(MapProfile::UrbanWarehouse);
    let mut openings = 0;
    for x in 8..=22 {
        for y in [10u32, 20u32] {
            let terrain = map.terrain(x, y).unwrap();
            if terrain.is_door() {
                openings += 1;
            } else {
                assert_eq!(terrain, Terrain::Wall);
            }
        }
    }
    for y in 11..=19 {
        for x in [8u32, 22u32] {
            let terrain = map.terrain(x, y).unwrap();
            if terrain.is_door() {
                openings += 1;
            } else {
                assert_eq!(terrain, Terrain::Wall);
            }
        }
    }
    assert_eq!(openings, 3);
}

#[test]
fn test_deployments_oppose_each_other() {
    for profile in MapProfile::all() {
        let map = generate(profile);
        for blue in map.blue_deployment.iter() {
            for red in map.red_deployment.iter() {
                assert!(
                    blue.distance(red) >= 20,
                    "{}: deployments too close",
                    profile.name()
                );
            }
        }
    }
}

#[test]
fn test_seeded_generation_is_identical() {
    let mut a = ChaCha8Rng::seed_from_u64(2024);
    let mut b = ChaCha8Rng::seed_from_u64(2024);
    let first = generate_random(&mut a);
    let second = generate_random(&mut b);

    assert_eq!(first.profile, second.profile);
    let pairs = first.tiles().zip(second.tiles());
    for (left, right) in pairs {
        assert_eq!((left.x, left.y, left.terrain), (right.x, right.y, right.terrain));
    }
}

#[test]
fn test_water_hazards_where_designed() {
    let warehouse = generate(MapProfile::UrbanWarehouse);
    assert!(warehouse.tiles().any(|t| t.terrain == Terrain::Water));

    let streets = generate(MapProfile::CityStreets);
    let fountain = streets
        .tiles()
        .filter(|t| t.terrain == Terrain::Water)
        .count();
    assert_eq!(fountain, 4);

    // The compound is deliberately dry
    let compound = generate(MapProfile::MilitaryCompound);
    assert!(compound.tiles().all(|t| t.terrain != Terrain::Water));
}
