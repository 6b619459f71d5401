use crate::abilities::Ability;

/// Position component - world coordinates (grid-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// |dx| + |dy|, used for AI engagement ranges
    pub fn manhattan(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// max(|dx|, |dy|), used for melee reach and area effects
    pub fn chebyshev(&self, other: &Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// Map glyph component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph(pub char);

/// Display name component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Name(pub &'static str);

/// Player marker component
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Health component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    #[cfg(test)]
    pub fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount).min(self.max);
    }

    /// Apply an incoming hit reduced by `defense`. Every hit lands for at
    /// least `MIN_DAMAGE`. Returns the damage actually dealt.
    pub fn take_damage(&mut self, incoming: i32, defense: i32) -> i32 {
        let actual = (incoming - defense).max(crate::constants::MIN_DAMAGE);
        self.lose(actual);
        actual
    }

    /// Remove health directly, bypassing defense.
    pub fn lose(&mut self, amount: i32) {
        self.current = (self.current - amount).max(0);
    }

    /// Raise the cap and refill.
    pub fn raise_max(&mut self, amount: i32) {
        self.max += amount;
        self.current = self.max;
    }
}

/// Attack and defense ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatStats {
    pub attack: i32,
    pub defense: i32,
}

impl CombatStats {
    pub fn new(attack: i32, defense: i32) -> Self {
        Self { attack, defense }
    }
}

/// Mana pool component (player only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mana {
    pub current: i32,
    pub max: i32,
}

impl Mana {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Spend mana if enough is available. Leaves the pool untouched otherwise.
    pub fn spend(&mut self, amount: i32) -> bool {
        if self.current >= amount {
            self.current -= amount;
            true
        } else {
            false
        }
    }

    pub fn restore(&mut self, amount: i32) {
        self.current = (self.current + amount).min(self.max);
    }

    pub fn raise_max(&mut self, amount: i32) {
        self.max += amount;
        self.current = self.max;
    }
}

/// Experience component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub current: u32,
    pub level: u32,
}

impl Experience {
    pub fn new() -> Self {
        Self { current: 0, level: 1 }
    }
}

impl Default for Experience {
    fn default() -> Self {
        Self::new()
    }
}

/// The player's ordered ability slots
#[derive(Debug, Clone)]
pub struct AbilitySet {
    pub abilities: Vec<Ability>,
}

impl AbilitySet {
    pub fn new(abilities: Vec<Ability>) -> Self {
        Self { abilities }
    }

    /// Advance every cooldown by one turn
    pub fn tick_all(&mut self) {
        for ability in &mut self.abilities {
            ability.tick();
        }
    }
}

/// Monster variant with its private AI state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Goblin,
    Orc,
    Dragon { breath_cooldown: u32 },
}

/// Monster component: what it is and what it's worth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monster {
    pub kind: EnemyKind,
    pub xp_reward: u32,
}
