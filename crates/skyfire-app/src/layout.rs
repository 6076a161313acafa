//! Demo obstacle layout.
//!
//! Stands in for the external world generator: a block of buildings laid
//! out ahead of the spawn point and fed to the engine through the same
//! register/unregister calls a streaming generator would use.

use glam::Vec3;

use skyfire_sim::SimulationEngine;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Building {
    pub id: u32,
    pub position: Vec3,
    pub half_extents: Vec3,
}

/// A `rows × cols` grid of buildings starting `start_distance` ahead of the
/// origin (along -Z), each resting on the ground.
///
/// Heights follow a fixed pattern between 20 and 100 m so the layout is the
/// same on every run.
pub fn city_grid(rows: u32, cols: u32, spacing: f32, start_distance: f32) -> Vec<Building> {
    let mut buildings = Vec::with_capacity((rows * cols) as usize);
    let half_width = (cols.saturating_sub(1)) as f32 * spacing * 0.5;

    for row in 0..rows {
        for col in 0..cols {
            let height = 20.0 + ((row * 7 + col * 13) % 5) as f32 * 20.0;
            let footprint = spacing * 0.3;
            buildings.push(Building {
                id: row * cols + col,
                position: Vec3::new(
                    col as f32 * spacing - half_width,
                    height * 0.5,
                    -(start_distance + row as f32 * spacing),
                ),
                half_extents: Vec3::new(footprint, height * 0.5, footprint),
            });
        }
    }
    buildings
}

pub fn register_all(engine: &mut SimulationEngine, buildings: &[Building]) {
    for b in buildings {
        engine.register_obstacle(b.id, b.position, b.half_extents);
    }
}

/// Returns how many of the buildings were still registered.
pub fn unregister_all(engine: &mut SimulationEngine, buildings: &[Building]) -> usize {
    buildings
        .iter()
        .filter(|b| engine.unregister_obstacle(b.id))
        .count()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    use skyfire_core::config::SimConfig;

    #[test]
    fn test_grid_shape() {
        let grid = city_grid(4, 5, 80.0, 200.0);
        assert_eq!(grid.len(), 20);
        for b in &grid {
            assert!((b.position.y - b.half_extents.y).abs() < 1e-4, "building rests on the ground");
            assert!(b.position.z <= -200.0);
            assert!(b.half_extents.y >= 10.0 && b.half_extents.y <= 50.0);
        }
        let ids: HashSet<u32> = grid.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), 20, "unique ids");
    }

    #[test]
    fn test_register_and_stream_out() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let grid = city_grid(3, 3, 60.0, 150.0);
        register_all(&mut engine, &grid);
        assert_eq!(engine.statics().len(), 9);

        let inside = grid[4].position;
        assert!(engine.statics().query(inside, 1.0));

        assert_eq!(unregister_all(&mut engine, &grid[..4]), 4);
        assert_eq!(engine.statics().len(), 5);
        assert_eq!(unregister_all(&mut engine, &grid), 5);
        assert!(!engine.statics().query(inside, 1.0));
    }
}
