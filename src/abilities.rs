//! Ability catalog: cooldown-gated special actions with a mana cost.

use crate::constants::*;

/// Effect an ability applies when triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityType {
    /// Placeholder slot; triggering it does nothing
    None,
    /// Heavy hit on every enemy within `CLEAVE_RADIUS`
    Cleave,
    /// Restore `HEAL_AMOUNT` health
    Heal,
    /// Fixed fire damage on every enemy within `FIRE_BLAST_RADIUS`
    FireBlast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub name: &'static str,
    pub ability_type: AbilityType,
    /// Turns the ability is locked after use
    pub cooldown: u32,
    /// Turns left before it can be used again; 0 means ready
    pub current_cooldown: u32,
    pub mana_cost: i32,
}

impl Ability {
    pub fn new(name: &'static str, ability_type: AbilityType, cooldown: u32, mana_cost: i32) -> Self {
        Self {
            name,
            ability_type,
            cooldown,
            current_cooldown: 0,
            mana_cost,
        }
    }

    pub fn cleave() -> Self {
        Self::new("Cleave", AbilityType::Cleave, CLEAVE_COOLDOWN, CLEAVE_MANA_COST)
    }

    pub fn heal() -> Self {
        Self::new("Heal", AbilityType::Heal, HEAL_COOLDOWN, HEAL_MANA_COST)
    }

    pub fn fire_blast() -> Self {
        Self::new(
            "Fire Blast",
            AbilityType::FireBlast,
            FIRE_BLAST_COOLDOWN,
            FIRE_BLAST_MANA_COST,
        )
    }

    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }

    /// Start the cooldown
    pub fn trigger(&mut self) {
        self.current_cooldown = self.cooldown;
    }

    pub fn tick(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }
}

/// The three slots every new player starts with
pub fn default_loadout() -> Vec<Ability> {
    vec![Ability::cleave(), Ability::heal(), Ability::fire_blast()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ability_is_ready() {
        assert!(Ability::cleave().is_ready());
    }

    #[test]
    fn test_trigger_then_tick_back_to_ready() {
        for mut ability in default_loadout() {
            ability.trigger();
            assert!(!ability.is_ready());
            for _ in 0..ability.cooldown {
                assert!(!ability.is_ready());
                ability.tick();
            }
            assert!(ability.is_ready());
        }
    }

    #[test]
    fn test_tick_never_negative() {
        let mut ability = Ability::heal();
        ability.tick();
        ability.tick();
        assert_eq!(ability.current_cooldown, 0);
    }

    #[test]
    fn test_zero_cooldown_stays_ready() {
        let mut ability = Ability::new("Nothing", AbilityType::None, 0, 0);
        ability.trigger();
        assert!(ability.is_ready());
    }

    #[test]
    fn test_default_loadout_order() {
        let names: Vec<_> = default_loadout().iter().map(|a| a.name).collect();
        assert_eq!(names, ["Cleave", "Heal", "Fire Blast"]);
    }
}
