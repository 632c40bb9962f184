//! Hostile entities: runners, asteroids and gunners.

use shooter_core::constants::*;
use shooter_core::enums::{EnemyKind, EntityKind, Faction, ProjectileKind};
use shooter_core::events::AudioEvent;

use super::{Behavior, Body, Contact, Health, SimContext, SpawnRequest, UpdateContext};
use crate::animation::Animation;

/// Enemy state. Point value and contact damage are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    kind: EnemyKind,
    points: u32,
    contact_damage: i32,
    max_health: i32,
    /// Seconds since the last shot (gunners only).
    fire_timer: f32,
}

impl Enemy {
    pub fn new(kind: EnemyKind, points: u32, contact_damage: i32, max_health: i32) -> Self {
        Self {
            kind,
            points,
            contact_damage,
            max_health,
            fire_timer: 0.0,
        }
    }

    pub fn enemy_kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn contact_damage(&self) -> i32 {
        self.contact_damage
    }

    /// Apply a player projectile's damage. Credits the point value once,
    /// at the moment the hit depletes the enemy.
    fn take_projectile_damage(
        &self,
        health: Option<&mut Health>,
        other: &Contact,
        ctx: &mut SimContext<'_>,
    ) -> bool {
        if !other.kind.is_projectile_from(Faction::Player) {
            return false;
        }
        let Some(health) = health else {
            return false;
        };
        // Already killed earlier in this scan and awaiting removal.
        if health.is_depleted() {
            return true;
        }

        health.damage(other.damage);
        if health.is_depleted() {
            ctx.score.credit_kill(self.points);
            return true;
        }
        false
    }

    /// Whether contact with `other` destroys this enemy outright (no points).
    fn destroyed_on_contact(&self, other: &EntityKind) -> bool {
        match self.kind {
            EnemyKind::Runner | EnemyKind::Gunner => matches!(
                other,
                EntityKind::Player | EntityKind::Enemy(EnemyKind::Asteroid) | EntityKind::Obstacle
            ),
            EnemyKind::Asteroid => matches!(other, EntityKind::Player),
        }
    }

    fn update_gunner(
        &mut self,
        body: &mut Body,
        delta_secs: f32,
        ctx: &UpdateContext,
    ) -> Option<SpawnRequest> {
        let player = ctx.player_position?;
        body.rotate_towards(player);
        let range = body.distance_to(player);
        if range > GUNNER_PREFERRED_RANGE {
            body.move_forward(body.speed * delta_secs);
        }

        self.fire_timer += delta_secs;
        if self.fire_timer >= GUNNER_FIRE_INTERVAL && range <= GUNNER_FIRE_RANGE {
            self.fire_timer = 0.0;
            return Some(SpawnRequest {
                kind: ProjectileKind::Standard,
                faction: Faction::Enemy,
                origin: body.position,
                rotation: body.rotation,
            });
        }
        None
    }
}

impl Behavior for Enemy {
    fn kind(&self) -> EntityKind {
        EntityKind::Enemy(self.kind)
    }

    fn max_health(&self) -> Option<i32> {
        Some(self.max_health)
    }

    fn damage(&self) -> i32 {
        self.contact_damage
    }

    fn update(
        &mut self,
        body: &mut Body,
        delta_secs: f32,
        ctx: &UpdateContext,
    ) -> Option<SpawnRequest> {
        match self.kind {
            EnemyKind::Runner => {
                if let Some(player) = ctx.player_position {
                    body.move_towards(player, delta_secs);
                }
                None
            }
            EnemyKind::Asteroid => {
                body.move_forward(body.speed * delta_secs);
                None
            }
            EnemyKind::Gunner => self.update_gunner(body, delta_secs, ctx),
        }
    }

    fn on_collision(
        &mut self,
        _body: &Body,
        health: Option<&mut Health>,
        other: &Contact,
        ctx: &mut SimContext<'_>,
    ) -> bool {
        if self.destroyed_on_contact(&other.kind) {
            return true;
        }
        self.take_projectile_damage(health, other, ctx)
    }

    fn on_destroy(&mut self, body: &Body, ctx: &mut SimContext<'_>) {
        ctx.animations
            .register(Animation::explosion(body.position, body.size));
        ctx.audio_events.push(AudioEvent::EnemyDestroyed {
            kind: self.kind,
            position: body.position,
        });
    }
}
