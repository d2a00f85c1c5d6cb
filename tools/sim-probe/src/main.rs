//! sim-probe: headless driver for a seeded STARWAKE run.
//!
//! Flies an autopilot ship from planet to planet, hands out scan rewards,
//! opens the wormhole once enough planets are scanned, and reports the
//! resulting state.
//!
//! Usage:
//!   sim-probe --seed 7 --frames 3600
//!   sim-probe --galaxy ANDROMEDA --json > view.json

use std::process;

use glam::{DVec2, DVec3};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use starwake_core::commands::RunCommand;
use starwake_core::constants::{MAX_BOON_SLOTS, MAX_WEAPON_SLOTS};
use starwake_core::enums::{BoonId, GalaxyId, ItemRef, Rarity, WeaponId, WormholeState};
use starwake_core::events::ScanStatus;
use starwake_core::types::yaw_of;
use starwake_sim::{FrameInput, SimConfig, SimulationWorld};

/// Autopilot cruise speed before the speed multiplier, units per second.
const CRUISE_SPEED: f64 = 18.0;
/// Seconds the wormhole charges before the probe jumps.
const WORMHOLE_CHARGE_SECS: f64 = 3.0;

struct ProbeArgs {
    seed: u64,
    frames: u32,
    galaxy: GalaxyId,
    json: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| matches!(a.as_str(), "help" | "--help" | "-h")) {
        print_usage();
        return;
    }
    let probe = match parse_args(&args) {
        Ok(probe) => probe,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(1);
        }
    };

    let mut world = SimulationWorld::new(
        SimConfig::default()
            .with_seed(probe.seed)
            .with_galaxy(probe.galaxy),
    );
    let mut position = DVec3::ZERO;
    let mut rotation = 0.0;
    let mut rewards_granted = 0usize;

    for _ in 0..probe.frames {
        let heading = steer(&world, position);
        if let Some(direction) = heading {
            rotation = yaw_of(direction);
        }
        let input = FrameInput {
            player_position: position,
            player_rotation: rotation,
            ..Default::default()
        };
        let report = world.frame(&input);
        world.cleanup_projectiles();

        if let Some(direction) = heading {
            let speed = CRUISE_SPEED * world.modifiers().speed_multiplier;
            let step = direction * speed * input.delta;
            position += DVec3::new(step.x, 0.0, step.y);
        }

        if let ScanStatus::Completed { tier, .. } = report.scan {
            grant_reward(&mut world, tier, rewards_granted);
            rewards_granted += 1;
        }
        drive_wormhole(&mut world, position);
    }

    if probe.json {
        match serde_json::to_string_pretty(&world.view()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize view: {e}");
                process::exit(1);
            }
        }
        return;
    }

    let view = world.view();
    println!("seed            {}", probe.seed);
    println!("frames          {}", view.time.frame);
    println!("galaxy          {}", view.progress.galaxy.as_str());
    println!("system          {}", view.progress.current_system);
    println!(
        "system name     {}",
        view.progress.system_name.as_deref().unwrap_or("-")
    );
    println!(
        "scanned         {}/{}",
        view.progress.scanned_count, view.progress.required_scans
    );
    println!("wormhole        {:?}", view.wormhole.state);
    println!("rewards         {rewards_granted}");
    for weapon in &view.weapons {
        println!(
            "weapon          {} L{} ({:?})",
            weapon.weapon_id.as_str(),
            weapon.level,
            weapon.rarity
        );
    }
    for boon in &view.boons {
        println!(
            "boon            {} L{} ({:?})",
            boon.boon_id.as_str(),
            boon.level,
            boon.rarity
        );
    }
    println!("projectiles     {}", view.projectiles.len());
    println!("hp              {:.1}/{:.1}", view.vitals.hp, view.vitals.max_hp);
}

fn print_usage() {
    eprintln!(
        "sim-probe: headless STARWAKE run driver\n\
         \n\
         Options:\n\
         \n\
           --seed <N>       RNG seed (default: 42)\n\
           --frames <N>     Frames to simulate at 60 Hz (default: 3600)\n\
           --galaxy <ID>    ORION, CYGNUS or ANDROMEDA (default: ORION)\n\
           --json           Print the final world view as JSON\n\
         \n\
         Logging is controlled by RUST_LOG (default: info).\n"
    );
}

fn parse_args(args: &[String]) -> Result<ProbeArgs, String> {
    let mut probe = ProbeArgs {
        seed: SimConfig::default().seed,
        frames: 3600,
        galaxy: GalaxyId::default(),
        json: false,
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => probe.json = true,
            flag @ ("--seed" | "--frames" | "--galaxy") => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| format!("Missing value for {flag}"))?;
                match flag {
                    "--seed" => {
                        probe.seed = value.parse().map_err(|e| format!("Bad seed: {e}"))?;
                    }
                    "--frames" => {
                        probe.frames = value
                            .parse()
                            .map_err(|e| format!("Bad frame count: {e}"))?;
                    }
                    _ => {
                        probe.galaxy = value.parse().map_err(|e| format!("{e}"))?;
                    }
                }
                i += 1;
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(probe)
}

/// Planar heading toward the nearest unscanned planet, or toward the wormhole
/// once it is open.
fn steer(world: &SimulationWorld, position: DVec3) -> Option<DVec2> {
    let here = DVec2::new(position.x, position.z);
    let progression = world.progression();
    let target = match progression.wormhole_position() {
        Some((x, z)) => Some(DVec2::new(x, z)),
        None => progression
            .planets()
            .iter()
            .filter(|p| !p.scanned)
            .map(|p| DVec2::new(p.x, p.z))
            .min_by(|a, b| a.distance_squared(here).total_cmp(&b.distance_squared(here))),
    }?;
    let offset = target - here;
    // Park once inside the innermost scan radius.
    (offset.length() > 2.0).then(|| offset.normalize())
}

/// Alternate weapon and boon rewards, skipping banished or already-owned
/// picks. Higher tiers roll higher rarities.
fn grant_reward(world: &mut SimulationWorld, tier: u32, granted: usize) {
    let rarity = match tier {
        0 | 1 => Rarity::Common,
        2 => Rarity::Rare,
        _ => Rarity::Epic,
    };
    let progression = world.progression();

    let command = if granted % 2 == 0 {
        let owned = world.weapons().active_weapons();
        let upgrade = owned.iter().min_by_key(|w| w.level).map(|w| w.weapon_id);
        let fresh = WeaponId::ALL.into_iter().find(|id| {
            !progression.is_banished(ItemRef::Weapon(*id))
                && !owned.iter().any(|w| w.weapon_id == *id)
        });
        match (fresh, upgrade) {
            (Some(weapon_id), _) if owned.len() < MAX_WEAPON_SLOTS => {
                RunCommand::AddWeapon { weapon_id, rarity }
            }
            (_, Some(weapon_id)) => RunCommand::UpgradeWeapon { weapon_id, rarity },
            _ => return,
        }
    } else {
        let owned = world.boons().boons();
        let fresh = BoonId::ALL.into_iter().find(|id| {
            !progression.is_banished(ItemRef::Boon(*id))
                && !owned.iter().any(|b| b.boon_id == *id)
        });
        match fresh {
            Some(boon_id) if owned.len() < MAX_BOON_SLOTS => {
                RunCommand::AddBoon { boon_id, rarity }
            }
            _ => match owned.iter().min_by_key(|b| b.level) {
                Some(boon) => RunCommand::UpgradeBoon {
                    boon_id: boon.boon_id,
                    rarity,
                },
                None => return,
            },
        }
    };
    info!(?command, tier, "reward granted");
    world.queue_command(command);
}

/// Open the wormhole once the threshold is met, charge it, then jump.
fn drive_wormhole(world: &mut SimulationWorld, position: DVec3) {
    let progression = world.progression();
    match progression.wormhole_state() {
        WormholeState::Hidden if progression.wormhole_threshold_met() => {
            world.queue_command(RunCommand::SpawnWormhole {
                x: position.x + 25.0,
                z: position.z,
            });
        }
        WormholeState::Visible => {
            if let Some((x, z)) = progression.wormhole_position() {
                if DVec2::new(x - position.x, z - position.z).length() <= 2.0 {
                    world.queue_command(RunCommand::SetWormholeState {
                        state: WormholeState::Activating,
                    });
                }
            }
        }
        WormholeState::Activating if progression.wormhole_timer() >= WORMHOLE_CHARGE_SECS => {
            world.queue_command(RunCommand::AdvanceSystem);
        }
        _ => {}
    }
}
