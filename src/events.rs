//! Game event system for decoupled communication between systems.
//!
//! Systems push events while resolving a turn; the front end drains them,
//! prints their messages, and optionally appends them to a JSON-lines log.

use serde::Serialize;

/// Why a player move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    Wall,
    Enemy,
}

/// Flavor of an enemy's hit on the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrikeKind {
    Slash,
    Smash,
    Claw,
    FireBreath,
}

/// Game events that systems can emit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Unrecognized command character
    InvalidInput { input: char },
    /// The player's move was refused
    MoveBlocked { reason: BlockReason },
    /// The player hit an enemy in melee
    PlayerAttack { target: &'static str, damage: i32 },
    /// Melee attack with nothing adjacent
    NoEnemyInRange,
    /// An enemy died and paid out experience
    EnemyDefeated { name: &'static str, xp: u32 },
    /// Player leveled up
    LevelUp { new_level: u32 },
    /// Ability slot out of range
    InvalidAbility { index: usize },
    AbilityOnCooldown { ability: &'static str, turns: u32 },
    NotEnoughMana { ability: &'static str, cost: i32, available: i32 },
    CleavePerformed { hits: usize },
    Healed { amount: i32 },
    FireBlastPerformed { hits: usize },
    /// An enemy hit the player
    EnemyAttack {
        attacker: &'static str,
        strike: StrikeKind,
        damage: i32,
    },
    /// Every enemy on the floor is dead
    FloorCleared { floor: u32 },
    /// Player health reached zero
    PlayerDied { floor: u32, level: u32 },
    /// Player asked to leave
    Quit { floor: u32, level: u32 },
}

impl GameEvent {
    /// Human-readable line for the message log
    pub fn message(&self) -> String {
        match self {
            GameEvent::InvalidInput { .. } => "Invalid input!".to_string(),
            GameEvent::MoveBlocked { reason: BlockReason::Wall } => {
                "You can't walk through walls!".to_string()
            }
            GameEvent::MoveBlocked { reason: BlockReason::Enemy } => {
                "An enemy blocks your path!".to_string()
            }
            GameEvent::PlayerAttack { target, damage } => {
                format!("You attack {target} for {damage} damage!")
            }
            GameEvent::NoEnemyInRange => "No enemy in range!".to_string(),
            GameEvent::EnemyDefeated { name, xp } => {
                format!("{name} has been defeated! (+{xp} XP)")
            }
            GameEvent::LevelUp { new_level } => {
                format!("*** LEVEL UP! You are now level {new_level} ***")
            }
            GameEvent::InvalidAbility { .. } => "Invalid ability!".to_string(),
            GameEvent::AbilityOnCooldown { ability, turns } => {
                format!("{ability} is on cooldown ({turns} turns)")
            }
            GameEvent::NotEnoughMana { .. } => "Not enough mana!".to_string(),
            GameEvent::CleavePerformed { hits } => format!("You cleave through {hits} enemies!"),
            GameEvent::Healed { amount } => format!("You heal for {amount} HP!"),
            GameEvent::FireBlastPerformed { .. } => "Fire engulfs the area!".to_string(),
            GameEvent::EnemyAttack {
                attacker,
                strike,
                damage,
            } => match strike {
                StrikeKind::Slash => format!("{attacker} attacks for {damage} damage!"),
                StrikeKind::Smash => format!("{attacker} smashes for {damage} damage!"),
                StrikeKind::Claw => format!("{attacker} claws you for {damage} damage!"),
                StrikeKind::FireBreath => {
                    format!("{attacker} breathes fire for {damage} damage!")
                }
            },
            GameEvent::FloorCleared { floor } => format!("*** Floor {floor} cleared! ***"),
            GameEvent::PlayerDied { floor, level } => format!(
                "*** GAME OVER ***\nYou reached floor {floor} at level {level}"
            ),
            GameEvent::Quit { floor, level } => {
                format!("You flee the dungeon on floor {floor} at level {level}.")
            }
        }
    }
}

/// Simple event queue - events are pushed during a turn, drained after it
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Pending events, oldest first
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }
}
