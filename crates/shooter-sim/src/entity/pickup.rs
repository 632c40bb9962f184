//! Power-ups the player can collect.

use shooter_core::enums::{EntityKind, PickupKind};
use shooter_core::events::AudioEvent;

use super::{Behavior, Body, Contact, Health, SimContext, SpawnRequest, UpdateContext};
use crate::effects::Effect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pickup {
    kind: PickupKind,
}

impl Pickup {
    pub fn new(kind: PickupKind) -> Self {
        Self { kind }
    }

    pub fn pickup_kind(&self) -> PickupKind {
        self.kind
    }

    /// The effect granted on collection.
    pub fn effect(&self) -> Effect {
        match self.kind {
            PickupKind::Heal => Effect::heal(),
            PickupKind::RapidFire => Effect::rapid_fire(),
            PickupKind::AutoAim => Effect::auto_aim(),
        }
    }
}

impl Behavior for Pickup {
    fn kind(&self) -> EntityKind {
        EntityKind::Pickup(self.kind)
    }

    fn update(&mut self, _body: &mut Body, _delta_secs: f32, _ctx: &UpdateContext) -> Option<SpawnRequest> {
        None
    }

    fn on_collision(
        &mut self,
        _body: &Body,
        _health: Option<&mut Health>,
        other: &Contact,
        _ctx: &mut SimContext<'_>,
    ) -> bool {
        other.kind == EntityKind::Player
    }

    /// Only the player removes pickups, so destruction means collection.
    fn on_destroy(&mut self, _body: &Body, ctx: &mut SimContext<'_>) {
        ctx.effects.register(self.effect());
        ctx.audio_events
            .push(AudioEvent::PickupCollected { kind: self.kind });
    }
}
