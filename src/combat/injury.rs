//! Injury and medical outcome table
//!
//! A body-part hit consumes one d6 roll and maps to a catalog injury
//! or nothing. The head table has three outcomes where the others have
//! two; that asymmetry is the balance design, keep it. The legal and
//! financial half of this module is a deterministic classifier with no
//! randomness at all.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Severity tier of a catalog injury
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InjurySeverity {
    Minor,
    Major,
    Critical,
}

/// Hit location supplied by the acting collaborator. `Other` covers
/// any location the table has no entry for: never an injury, never an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyPart {
    Head,
    Arm,
    Leg,
    Torso,
    Other,
}

/// Catalog of injury types. Entries are shared definitions, not
/// per-unit instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InjuryKind {
    ArmBlow,
    LegWound,
    HeadTrauma,
    BrokenRibs,
    Concussion,
}

impl InjuryKind {
    pub fn all() -> [InjuryKind; 5] {
        [
            InjuryKind::ArmBlow,
            InjuryKind::LegWound,
            InjuryKind::HeadTrauma,
            InjuryKind::BrokenRibs,
            InjuryKind::Concussion,
        ]
    }

    pub fn severity(&self) -> InjurySeverity {
        match self {
            InjuryKind::Concussion => InjurySeverity::Minor,
            InjuryKind::ArmBlow | InjuryKind::LegWound | InjuryKind::BrokenRibs => {
                InjurySeverity::Major
            }
            InjuryKind::HeadTrauma => InjurySeverity::Critical,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InjuryKind::ArmBlow => "Weapon arm injured - reduced combat effectiveness",
            InjuryKind::LegWound => "Leg injury reduces movement speed",
            InjuryKind::HeadTrauma => "Head injury affects mental capabilities",
            InjuryKind::BrokenRibs => "Broken ribs cause pain and reduced stamina",
            InjuryKind::Concussion => "Head concussion causes temporary confusion",
        }
    }

    /// Narrative healing window shown to the player
    pub fn healing_time(&self) -> &'static str {
        match self {
            InjuryKind::ArmBlow => "6-8 weeks",
            InjuryKind::LegWound => "4-6 weeks",
            InjuryKind::HeadTrauma => "8-12 weeks",
            InjuryKind::BrokenRibs => "6-8 weeks",
            InjuryKind::Concussion => "2-3 weeks",
        }
    }

    /// Treatment cost in dollars
    pub fn medical_cost(&self) -> u32 {
        match self {
            InjuryKind::ArmBlow => 15_000,
            InjuryKind::LegWound => 12_000,
            InjuryKind::HeadTrauma => 25_000,
            InjuryKind::BrokenRibs => 18_000,
            InjuryKind::Concussion => 8_000,
        }
    }

    pub fn game_effect(&self) -> &'static str {
        match self {
            InjuryKind::ArmBlow => "-1CS weapon attacks until healed",
            InjuryKind::LegWound => "Movement reduced by 50% until healed",
            InjuryKind::HeadTrauma => "-2 INT and -1 INS until healed",
            InjuryKind::BrokenRibs => "-1CS all physical actions until healed",
            InjuryKind::Concussion => "Stunned for 1d4 rounds",
        }
    }

    pub fn recovery_days(&self) -> u32 {
        match self {
            InjuryKind::ArmBlow => 45,
            InjuryKind::LegWound => 35,
            InjuryKind::HeadTrauma => 70,
            InjuryKind::BrokenRibs => 50,
            InjuryKind::Concussion => 18,
        }
    }
}

/// An injury carried by a unit, referencing one catalog entry.
/// Recovery days count down on an external clock; the instance is
/// removed at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryInstance {
    pub kind: InjuryKind,
    pub days_remaining: u32,
}

impl InjuryInstance {
    pub fn new(kind: InjuryKind) -> Self {
        Self {
            kind,
            days_remaining: kind.recovery_days(),
        }
    }

    pub fn healed(&self) -> bool {
        self.days_remaining == 0
    }
}

/// Roll one d6 against the body-part table.
///
/// head:  1-2 concussion, 3-4 nothing, 5-6 head trauma
/// arm:   1-3 arm blow,   4-6 nothing
/// leg:   1-3 leg wound,  4-6 nothing
/// torso: 1-2 broken ribs, 3-6 nothing
pub fn roll_for_injury(body_part: BodyPart, rng: &mut ChaCha8Rng) -> Option<InjuryKind> {
    let roll: u8 = rng.gen_range(1..=6);

    match body_part {
        BodyPart::Head => match roll {
            1..=2 => Some(InjuryKind::Concussion),
            3..=4 => None,
            _ => Some(InjuryKind::HeadTrauma),
        },
        BodyPart::Arm => (roll <= 3).then_some(InjuryKind::ArmBlow),
        BodyPart::Leg => (roll <= 3).then_some(InjuryKind::LegWound),
        BodyPart::Torso => (roll <= 2).then_some(InjuryKind::BrokenRibs),
        BodyPart::Other => None,
    }
}

/// Total treatment cost for a set of injuries
pub fn medical_costs(injuries: &[InjuryKind]) -> u32 {
    injuries.iter().map(|i| i.medical_cost()).sum()
}

/// Recovery time for a set of injuries: the maximum of the individual
/// recovery windows, because injuries heal in parallel. Zero for an
/// empty set.
pub fn recovery_time(injuries: &[InjuryKind]) -> u32 {
    injuries.iter().map(|i| i.recovery_days()).max().unwrap_or(0)
}

/// Classify the legal fallout of an engagement from cumulative
/// property damage and the injuries inflicted.
pub fn legal_consequences(property_damage: u32, injuries: &[InjuryKind]) -> Vec<String> {
    let mut consequences = Vec::new();

    if property_damage > 0 {
        let line = if property_damage < 5_000 {
            "Minor property damage - Civil lawsuit likely"
        } else if property_damage < 50_000 {
            "Significant property damage - Civil + criminal charges"
        } else if property_damage < 500_000 {
            "Major destruction - Federal investigation required"
        } else {
            "Mass destruction - Federal charges + International attention"
        };
        consequences.push(line.to_string());
    }

    if !injuries.is_empty() {
        let critical = injuries
            .iter()
            .filter(|i| i.severity() == InjurySeverity::Critical)
            .count();

        if critical > 0 {
            consequences.push(format!(
                "{} critical injury lawsuit(s) - Attempted murder charges",
                critical
            ));
        } else {
            consequences.push(format!(
                "{} injury lawsuit(s) - Assault charges",
                injuries.len()
            ));
        }

        consequences.push(format!(
            "Medical liability: ${}",
            format_dollars(medical_costs(injuries))
        ));
    }

    consequences
}

/// Group digits with commas: 25000 -> "25,000"
fn format_dollars(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
