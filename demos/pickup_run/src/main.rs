//! pickup_run — smallest end-to-end demo of the nav toolkit.
//!
//! One agent collects three pickups on a 12x9 grid with a few walls while a
//! threat patrols the middle corridor, then heads for the exit.  Run with
//! `RUST_LOG=debug` to watch the controller's replan/blocked/retry decisions.

use anyhow::Result;
use log::info;

use nav_agent::{AgentConfig, AgentController, AgentObserver};
use nav_core::{EntityKind, Tick, TileCoord, WorldPoint};
use nav_grid::{FixedSensor, OccupancyConfig, TileGridBuilder};
use nav_path::AstarPathfinder;

const MAX_TICKS: u64 = 200;

/// Prints decision callbacks as they happen.
struct EventPrinter;

impl AgentObserver for EventPrinter {
    fn on_replan(&mut self, now: Tick, from: TileCoord, goal: TileCoord) {
        info!("{now}: replanned {from} -> {goal}");
    }
    fn on_goal_blocked(&mut self, now: Tick, goal: TileCoord) {
        info!("{now}: goal {goal} unreachable, blocked");
    }
    fn on_goal_collected(&mut self, now: Tick, goal: TileCoord) {
        info!("{now}: collected {goal}");
    }
    fn on_retry(&mut self, now: Tick) {
        info!("{now}: retry round, re-attempting blocked goals");
    }
}

/// The patrolling threat's world position at tick `t`: bounces vertically
/// along column 6.
fn threat_pos(t: u64) -> WorldPoint {
    let phase = (t % 12) as f32;
    let y = if phase < 6.0 { phase } else { 12.0 - phase };
    WorldPoint { x: 6.5, y: y + 1.5 }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut grid = TileGridBuilder::new(12, 9)
        .wall(TileCoord::new(3, 3))
        .wall(TileCoord::new(3, 4))
        .wall(TileCoord::new(3, 5))
        .wall(TileCoord::new(9, 2))
        .wall(TileCoord::new(9, 3))
        .build()?;

    let mut sensor = FixedSensor::new();
    sensor.insert(EntityKind::Pickup, grid.world_pos(TileCoord::new(2, 7)));
    sensor.insert(EntityKind::Pickup, grid.world_pos(TileCoord::new(8, 1)));
    sensor.insert(EntityKind::Pickup, grid.world_pos(TileCoord::new(11, 8)));
    sensor.insert(EntityKind::Exit, grid.world_pos(TileCoord::new(0, 8)));
    sensor.insert(EntityKind::Threat, threat_pos(0));

    let mut ctrl = AgentController::new(
        AgentConfig { retry_interval_ticks: 10, ..Default::default() },
        OccupancyConfig::default(),
        AstarPathfinder::new(),
        TileCoord::new(0, 0),
    )?;
    ctrl.discover_goals(&grid, &sensor);
    info!(
        "starting: {} pickups, exit at {:?}",
        ctrl.remaining_goals().len(),
        ctrl.terminal_goal()
    );

    let mut printer = EventPrinter;
    for t in 0..MAX_TICKS {
        // Move the threat, then let the agent think and take one step.
        sensor.retain(|(kind, _)| *kind != EntityKind::Threat);
        sensor.insert(EntityKind::Threat, threat_pos(t));

        let state = ctrl.tick(Tick(t), &mut grid, &sensor, &mut printer);
        if let Some(next) = ctrl.next_waypoint() {
            ctrl.report_tile_reached(&grid, next, &mut printer);
        }

        if ctrl.is_finished() {
            println!("done in {t} ticks, final state {state}, at {}", ctrl.position());
            return Ok(());
        }
    }

    anyhow::bail!("agent did not finish within {MAX_TICKS} ticks")
}
