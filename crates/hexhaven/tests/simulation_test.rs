//! End-to-end test: build a world from config, run the systems, and verify
//! the simulation holds its invariants across the crate boundaries.

use hexhaven::core::{AgeStage, Calendar, HexVector, OBJECT_LAYER, TERRAIN_LAYER};
use hexhaven::{SimConfig, Simulation};

fn test_config() -> SimConfig {
    SimConfig::from_toml_str(
        r#"
        map_size_x = 24
        map_size_y = 24
        seed = 1337
        tick_seconds = 0.1
        starting_population = 10
        tree_attempts = 80
        "#,
    )
    .expect("config should parse")
}

#[test]
fn world_is_fully_materialized() {
    let simulation = Simulation::from_config(&test_config()).expect("world should build");
    let world = &simulation.world;

    // 576 tiles, plus trees, camera and agents.
    assert!(world.entity_count() > 24 * 24);

    // Every terrain tile carries a height inside the noise range.
    for x in 0..24 {
        for y in 0..24 {
            let tile = world.grid.entity_at(x, y, TERRAIN_LAYER).unwrap();
            let attributes = world.tile_attributes.get(tile).unwrap();
            assert!((-1.5..=1.5).contains(&attributes.height));
        }
    }

    // Grid bounds still hold after generation.
    assert!(world.grid.entity_at(24, 0, TERRAIN_LAYER).is_err());
    assert!(world.grid.entity_at(0, -1, TERRAIN_LAYER).is_err());

    // At least one tree landed on the object layer.
    let mut trees = 0;
    for x in 0..24 {
        for y in 0..24 {
            if !world.grid.entity_at(x, y, OBJECT_LAYER).unwrap().is_null() {
                trees += 1;
            }
        }
    }
    assert!(trees > 0);
}

#[test]
fn agents_age_through_stages() {
    let mut simulation = Simulation::from_config(&test_config()).expect("world should build");

    // Run one real tick so stages are computed: everyone starts at 20.
    simulation.update(0.1);
    for (_, lifecycle) in simulation.world.lifecycles.iter() {
        assert_eq!(lifecycle.stage, AgeStage::Adult);
    }

    // Fast-forward sixty in-game years.
    let now = simulation.world.calendar.total_years();
    simulation.world.calendar = Calendar::from_years(now + 60);
    simulation.update(0.1);
    for (_, lifecycle) in simulation.world.lifecycles.iter() {
        assert_eq!(lifecycle.stage, AgeStage::Elder);
    }
}

#[test]
fn hex_addressing_matches_grid_lookup() {
    let simulation = Simulation::from_config(&test_config()).expect("world should build");
    let world = &simulation.world;

    let hex = HexVector::from_offset(5, 9);
    assert_eq!(
        world.grid.entity_at_hex(hex, TERRAIN_LAYER).unwrap(),
        world.grid.entity_at(5, 9, TERRAIN_LAYER).unwrap()
    );

    // Mouse-style hit-testing: world position back to the tile under it.
    let (wx, wy) = world.grid.tile_to_world(5, 9);
    let (tx, ty) = world.grid.world_to_tile(wx, wy);
    assert_eq!((tx, ty), (5, 9));
}

#[test]
fn same_config_reproduces_the_same_world() {
    let a = Simulation::from_config(&test_config()).expect("world should build");
    let b = Simulation::from_config(&test_config()).expect("world should build");

    assert_eq!(a.world.entity_count(), b.world.entity_count());
    for x in 0..24 {
        for y in 0..24 {
            let ta = a.world.grid.entity_at(x, y, TERRAIN_LAYER).unwrap();
            let tb = b.world.grid.entity_at(x, y, TERRAIN_LAYER).unwrap();
            assert_eq!(
                a.world.tile_attributes.get(ta).unwrap().height,
                b.world.tile_attributes.get(tb).unwrap().height,
            );
            assert_eq!(
                a.world.grid.entity_at(x, y, OBJECT_LAYER).unwrap(),
                b.world.grid.entity_at(x, y, OBJECT_LAYER).unwrap(),
            );
        }
    }
}
