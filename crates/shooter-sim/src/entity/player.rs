//! The player's ship.

use glam::Vec2;

use shooter_core::constants::*;
use shooter_core::enums::{EntityKind, Faction, ProjectileKind};
use shooter_core::events::AudioEvent;

use super::{Behavior, Body, Contact, Health, SimContext, SpawnRequest, UpdateContext};
use crate::animation::Animation;

/// Player-controlled ship state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerShip {
    /// World-space point the ship turns to face.
    aim: Option<Vec2>,
    /// Normalised movement intent (zero when idle).
    movement: Vec2,
    /// Seconds until the weapon can fire again.
    cooldown: f32,
    weapon: ProjectileKind,
    /// Scales the base fire cooldown. Below 1.0 fires faster.
    fire_rate_multiplier: f32,
}

impl Default for PlayerShip {
    fn default() -> Self {
        Self {
            aim: None,
            movement: Vec2::ZERO,
            cooldown: 0.0,
            weapon: ProjectileKind::Standard,
            fire_rate_multiplier: 1.0,
        }
    }
}

impl PlayerShip {
    pub fn aim(&self) -> Option<Vec2> {
        self.aim
    }

    pub fn set_aim(&mut self, point: Vec2) {
        self.aim = Some(point);
    }

    pub fn movement(&self) -> Vec2 {
        self.movement
    }

    pub fn set_movement(&mut self, direction: Vec2) {
        self.movement = direction.normalize_or_zero();
    }

    pub fn weapon(&self) -> ProjectileKind {
        self.weapon
    }

    pub fn set_weapon(&mut self, weapon: ProjectileKind) {
        self.weapon = weapon;
    }

    pub fn fire_rate_multiplier(&self) -> f32 {
        self.fire_rate_multiplier
    }

    pub fn set_fire_rate_multiplier(&mut self, multiplier: f32) {
        self.fire_rate_multiplier = multiplier.max(0.0);
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    /// Fire from the ship's center along its facing, if the weapon is ready.
    pub fn try_fire(&mut self, body: &Body) -> Option<SpawnRequest> {
        if self.cooldown > 0.0 {
            return None;
        }
        self.cooldown = PLAYER_FIRE_COOLDOWN * self.fire_rate_multiplier;
        Some(SpawnRequest {
            kind: self.weapon,
            faction: Faction::Player,
            origin: body.position,
            rotation: body.rotation,
        })
    }
}

impl Behavior for PlayerShip {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn max_health(&self) -> Option<i32> {
        Some(PLAYER_MAX_HEALTH)
    }

    fn update(
        &mut self,
        body: &mut Body,
        delta_secs: f32,
        ctx: &UpdateContext,
    ) -> Option<SpawnRequest> {
        self.cooldown = (self.cooldown - delta_secs).max(0.0);

        body.position += self.movement * body.speed * delta_secs;
        body.position = ctx.world.clamp_center(body.position, body.size);

        if let Some(aim) = self.aim {
            body.rotate_towards(aim);
        }
        None
    }

    fn on_collision(
        &mut self,
        _body: &Body,
        health: Option<&mut Health>,
        other: &Contact,
        ctx: &mut SimContext<'_>,
    ) -> bool {
        let hurts = other.kind.is_enemy() || other.kind.is_projectile_from(Faction::Enemy);
        if !hurts {
            return false;
        }
        let Some(health) = health else {
            return false;
        };
        if health.is_depleted() {
            return true;
        }

        let taken = health.damage(other.damage);
        if taken > 0 {
            ctx.audio_events.push(AudioEvent::PlayerHit { damage: taken });
        }
        health.is_depleted()
    }

    fn on_destroy(&mut self, body: &Body, ctx: &mut SimContext<'_>) {
        ctx.animations
            .register(Animation::explosion(body.position, body.size));
        ctx.audio_events.push(AudioEvent::PlayerDestroyed {
            position: body.position,
        });
    }
}
