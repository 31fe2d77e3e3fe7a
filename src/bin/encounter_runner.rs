//! Headless Encounter Runner
//!
//! Runs a scripted squad-vs-squad encounter and prints the outcome.
//! Seeded runs are fully reproducible: same seed, same map, same
//! injury rolls, same result.

use aegis_tactics::combat::{
    AttackOutcome, AttackRequest, BodyPart, Encounter, EncounterOutcome, LethalDecision, UnitSpec,
};
use aegis_tactics::battlefield::MapProfile;
use aegis_tactics::core::types::Team;
use aegis_tactics::core::EncounterConfig;
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Headless Encounter Runner - scripted squad battles
#[derive(Parser, Debug)]
#[command(name = "encounter_runner")]
#[command(about = "Run a scripted encounter and print the result")]
struct Args {
    /// Battlefield profile: warehouse, compound, or streets
    /// (random when omitted)
    #[arg(long)]
    profile: Option<String>,

    /// Units per blue squad
    #[arg(long, default_value_t = 3)]
    blue_units: u32,

    /// Units per red squad
    #[arg(long, default_value_t = 3)]
    red_units: u32,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Enable verbose combat logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunReport {
    outcome: String,
    rounds: u32,
    seed: u64,
    profile: String,
    actions: u32,
    blue_survivors: u32,
    red_survivors: u32,
}

fn parse_profile(name: &str) -> Option<MapProfile> {
    match name {
        "warehouse" | "urban-warehouse" => Some(MapProfile::UrbanWarehouse),
        "compound" | "military-compound" => Some(MapProfile::MilitaryCompound),
        "streets" | "city-streets" => Some(MapProfile::CityStreets),
        _ => None,
    }
}

fn make_squad(team: Team, count: u32) -> Vec<UnitSpec> {
    (1..=count)
        .map(|i| match team {
            Team::Blue => UnitSpec {
                name: format!("Blue-{}", i),
                team,
                max_hit_points: 20,
                max_shield: 5,
                shield_regen: 2,
            },
            Team::Red => UnitSpec {
                name: format!("Red-{}", i),
                team,
                max_hit_points: 18,
                max_shield: 3,
                shield_regen: 1,
            },
        })
        .collect()
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let map_profile = match args.profile.as_deref() {
        Some(name) => match parse_profile(name) {
            Some(profile) => Some(profile),
            None => {
                eprintln!("unknown profile: {}", name);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let config = EncounterConfig {
        map_profile,
        ..Default::default()
    };

    let mut specs = make_squad(Team::Blue, args.blue_units);
    specs.extend(make_squad(Team::Red, args.red_units));

    let mut encounter = match Encounter::new(config, specs, &mut rng) {
        Ok(encounter) => encounter,
        Err(e) => {
            eprintln!("failed to start encounter: {}", e);
            std::process::exit(1);
        }
    };

    let mut actions = 0u32;
    while !encounter.round_state().is_concluded() && actions < 1000 {
        let active = encounter.round_state().active_team;

        let Some(attacker) = encounter
            .units()
            .iter()
            .find(|u| u.team == active && u.can_act())
            .map(|u| u.id)
        else {
            // Whole team stunned or spent: hand the turn over
            if encounter.end_turn().is_err() {
                break;
            }
            continue;
        };

        let enemies = encounter.living_units(active.opponent());
        if enemies.is_empty() {
            break;
        }
        let target = enemies[rng.gen_range(0..enemies.len())].id;

        let body_part = match rng.gen_range(0..5) {
            0 => Some(BodyPart::Head),
            1 => Some(BodyPart::Arm),
            2 => Some(BodyPart::Leg),
            3 => Some(BodyPart::Torso),
            _ => None,
        };

        let request = AttackRequest {
            attacker,
            defender: target,
            raw_damage: rng.gen_range(4..=9),
            body_part,
        };

        match encounter.request_attack(request, &mut rng) {
            Ok(AttackOutcome::PendingLethalDecision) => {
                // No one is watching: always confirm
                if let Err(e) =
                    encounter.resolve_lethal_decision(LethalDecision::ConfirmKill, &mut rng)
                {
                    eprintln!("decision failed: {}", e);
                    break;
                }
            }
            Ok(AttackOutcome::Resolved(_)) => {}
            Err(e) => {
                eprintln!("attack failed: {}", e);
                break;
            }
        }
        actions += 1;
    }

    let summary = encounter.summary();
    let outcome = match summary.outcome {
        Some(EncounterOutcome::Victory(team)) => format!("victory:{}", team.label()),
        Some(EncounterOutcome::Fled(team)) => format!("fled:{}", team.label()),
        Some(EncounterOutcome::Aborted) => "aborted".to_string(),
        None => "undecided".to_string(),
    };

    let report = RunReport {
        outcome,
        rounds: summary.rounds,
        seed,
        profile: encounter.battlefield().profile.name().to_string(),
        actions,
        blue_survivors: summary
            .units
            .iter()
            .filter(|u| u.team == Team::Blue && u.alive)
            .count() as u32,
        red_survivors: summary
            .units
            .iter()
            .filter(|u| u.team == Team::Red && u.alive)
            .count() as u32,
    };

    if args.format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serializes")
        );
    } else {
        for event in encounter.events() {
            println!("[R{}] {}", event.round, event.message);
        }
        println!(
            "{} after {} rounds ({} actions, seed {})",
            report.outcome, report.rounds, report.actions, report.seed
        );
    }
}
