//! Timed effect ledger: temporary gameplay modifiers on the player.
//!
//! Stored in `SimulationEngine`, NOT in the entity set.

use serde::{Deserialize, Serialize};

use shooter_core::constants::*;
use shooter_core::enums::{EffectTag, ProjectileKind};
use shooter_core::state::EffectView;

use crate::entity::Entity;

/// How long an effect lasts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EffectDuration {
    /// Applied on the tick it is first processed, then removed that same tick.
    Instant,
    /// Applied every tick until cumulative elapsed time reaches the duration.
    Timed(f32),
}

impl EffectDuration {
    /// Zero or negative seconds means `Instant`.
    pub fn from_secs(secs: f32) -> Self {
        if secs > 0.0 {
            EffectDuration::Timed(secs)
        } else {
            EffectDuration::Instant
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EffectKind {
    Heal { amount: i32 },
    /// Multiplies the player's fire cooldown.
    RapidFire { multiplier: f32 },
    /// Player fires lock-on projectiles.
    AutoAim,
}

/// An active modifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    kind: EffectKind,
    duration: EffectDuration,
    elapsed: f32,
}

impl Effect {
    pub fn new(kind: EffectKind, duration: EffectDuration) -> Self {
        let duration = match duration {
            EffectDuration::Timed(secs) => EffectDuration::from_secs(secs),
            instant => instant,
        };
        Self {
            kind,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn heal() -> Self {
        Self::new(
            EffectKind::Heal {
                amount: HEAL_AMOUNT,
            },
            EffectDuration::Instant,
        )
    }

    pub fn rapid_fire() -> Self {
        Self::new(
            EffectKind::RapidFire {
                multiplier: RAPID_FIRE_MULTIPLIER,
            },
            EffectDuration::Timed(RAPID_FIRE_DURATION),
        )
    }

    pub fn auto_aim() -> Self {
        Self::new(EffectKind::AutoAim, EffectDuration::Timed(AUTO_AIM_DURATION))
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    pub fn duration(&self) -> EffectDuration {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_expired(&self) -> bool {
        match self.duration {
            EffectDuration::Instant => true,
            EffectDuration::Timed(secs) => self.elapsed >= secs,
        }
    }

    pub fn remaining_secs(&self) -> f32 {
        match self.duration {
            EffectDuration::Instant => 0.0,
            EffectDuration::Timed(secs) => (secs - self.elapsed).max(0.0),
        }
    }

    pub fn tag(&self) -> EffectTag {
        match self.kind {
            EffectKind::Heal { .. } => EffectTag::Heal,
            EffectKind::RapidFire { .. } => EffectTag::RapidFire,
            EffectKind::AutoAim => EffectTag::AutoAim,
        }
    }

    /// Per-tick hook.
    fn apply(&self, player: &mut Entity) {
        match self.kind {
            EffectKind::Heal { amount } => {
                player.heal(amount);
            }
            EffectKind::RapidFire { multiplier } => {
                if let Some(ship) = player.as_player_mut() {
                    ship.set_fire_rate_multiplier(multiplier);
                }
            }
            EffectKind::AutoAim => {
                if let Some(ship) = player.as_player_mut() {
                    ship.set_weapon(ProjectileKind::LockOn);
                }
            }
        }
    }

    /// Called once, when the effect is removed.
    fn end(&self, player: &mut Entity) {
        match self.kind {
            EffectKind::Heal { .. } => {}
            EffectKind::RapidFire { .. } => {
                if let Some(ship) = player.as_player_mut() {
                    ship.set_fire_rate_multiplier(1.0);
                }
            }
            EffectKind::AutoAim => {
                if let Some(ship) = player.as_player_mut() {
                    ship.set_weapon(ProjectileKind::Standard);
                }
            }
        }
    }
}

/// All effects currently in force, in registration order.
#[derive(Debug, Clone, Default)]
pub struct EffectLedger {
    active: Vec<Effect>,
}

impl EffectLedger {
    pub fn register(&mut self, effect: Effect) {
        self.active.push(effect);
    }

    /// Advance every effect, run its hook on the player, and drop the ones
    /// that expired. Returns the kinds that ended this tick.
    ///
    /// Without a player, hooks are skipped but effects still expire.
    pub fn tick(&mut self, delta_secs: f32, mut player: Option<&mut Entity>) -> Vec<EffectKind> {
        let mut ended = Vec::new();
        self.active.retain_mut(|effect| {
            effect.elapsed += delta_secs;
            if let Some(p) = player.as_deref_mut() {
                effect.apply(p);
            }
            if !effect.is_expired() {
                return true;
            }
            if let Some(p) = player.as_deref_mut() {
                effect.end(p);
            }
            ended.push(effect.kind);
            false
        });
        ended
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.active.iter()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn views(&self) -> Vec<EffectView> {
        self.active
            .iter()
            .map(|e| EffectView {
                kind: e.tag(),
                remaining_secs: e.remaining_secs(),
            })
            .collect()
    }
}
