//! Ability resolution: slot lookup, cooldown and mana gating, effects.

use hecs::{Entity, World};

use crate::abilities::AbilityType;
use crate::components::{AbilitySet, Health, Mana};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::queries;
use crate::systems::combat::{attack_of, strike_area};

/// What happened when the player tried to use an ability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityOutcome {
    /// Slot index out of range
    InvalidSlot,
    OnCooldown,
    NotEnoughMana,
    Used(AbilityType),
}

/// Use the ability in `index`. Gating failures leave mana and cooldowns
/// untouched and only emit a message.
pub fn use_ability(
    world: &mut World,
    player: Entity,
    roster: &[Entity],
    index: usize,
    events: &mut EventQueue,
) -> AbilityOutcome {
    puffin::profile_function!();

    let Ok((abilities, mana)) = world.query_one_mut::<(&mut AbilitySet, &mut Mana)>(player) else {
        events.push(GameEvent::InvalidAbility { index });
        return AbilityOutcome::InvalidSlot;
    };

    let Some(ability) = abilities.abilities.get_mut(index) else {
        events.push(GameEvent::InvalidAbility { index });
        return AbilityOutcome::InvalidSlot;
    };

    if !ability.is_ready() {
        events.push(GameEvent::AbilityOnCooldown {
            ability: ability.name,
            turns: ability.current_cooldown,
        });
        return AbilityOutcome::OnCooldown;
    }

    if !mana.spend(ability.mana_cost) {
        events.push(GameEvent::NotEnoughMana {
            ability: ability.name,
            cost: ability.mana_cost,
            available: mana.current,
        });
        return AbilityOutcome::NotEnoughMana;
    }

    ability.trigger();
    let ability_type = ability.ability_type;
    log::debug!("player used {}", ability.name);

    match ability_type {
        AbilityType::Cleave => cleave(world, player, roster, events),
        AbilityType::Heal => heal(world, player, events),
        AbilityType::FireBlast => fire_blast(world, player, roster, events),
        AbilityType::None => {}
    }

    AbilityOutcome::Used(ability_type)
}

/// Double-attack hit on every living enemy within `CLEAVE_RADIUS`
fn cleave(world: &mut World, player: Entity, roster: &[Entity], events: &mut EventQueue) {
    let Some(center) = queries::get_entity_position(world, player) else {
        return;
    };
    let damage = attack_of(world, player) * CLEAVE_ATTACK_MULTIPLIER;
    let hits = strike_area(world, player, roster, center, CLEAVE_RADIUS, damage, events);
    events.push(GameEvent::CleavePerformed { hits });
}

fn heal(world: &mut World, player: Entity, events: &mut EventQueue) {
    if let Ok(mut health) = world.get::<&mut Health>(player) {
        health.heal(HEAL_AMOUNT);
    }
    events.push(GameEvent::Healed {
        amount: HEAL_AMOUNT,
    });
}

/// Fixed fire damage on every living enemy within `FIRE_BLAST_RADIUS`
fn fire_blast(world: &mut World, player: Entity, roster: &[Entity], events: &mut EventQueue) {
    let Some(center) = queries::get_entity_position(world, player) else {
        return;
    };
    let hits = strike_area(
        world,
        player,
        roster,
        center,
        FIRE_BLAST_RADIUS,
        FIRE_BLAST_DAMAGE,
        events,
    );
    events.push(GameEvent::FireBlastPerformed { hits });
}
