use crate::constants::BATCH_SIZE;
use crate::core::color::{batch_color, PALETTE};
use crate::core::effect::{Bloom, Effect, Ring, SlowRing};
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;
use std::collections::VecDeque;

/// Live effects, one ordered collection per variant. Newest effects sit at the front.
#[derive(Default)]
pub struct Registry {
    rings: VecDeque<Ring>,
    blooms: VecDeque<Bloom>,
    slow_rings: VecDeque<SlowRing>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn one batch at `position`: for each slot a random palette base is
    /// blended toward its successor, and that color is shared by the three
    /// variants spawned in the slot. Returns the number of effects added.
    pub fn spawn_batch<R: Rng + ?Sized>(&mut self, position: Vec2, speed: f32, rng: &mut R) -> usize {
        for i in 0..BATCH_SIZE {
            let base = rng.gen_range(0..PALETTE.len());
            let color = batch_color(base, i, BATCH_SIZE);
            self.rings.push_front(Ring::new(position, speed, color));
            self.blooms.push_front(Bloom::new(position, speed, color));
            self.slow_rings.push_front(SlowRing::new(position, speed, color));
        }
        log::debug!(
            "spawned batch at ({:.1},{:.1}) speed={:.3} live={}",
            position.x,
            position.y,
            speed,
            self.len()
        );
        BATCH_SIZE * 3
    }

    /// Update and draw every live effect, then drop the ones that retired this frame.
    /// With no surface the effects still advance and retire on schedule.
    /// Returns the number of effects removed.
    pub fn tick(&mut self, mut surface: Option<&mut dyn Surface>) -> usize {
        tick_effects(&mut self.rings, &mut surface)
            + tick_effects(&mut self.blooms, &mut surface)
            + tick_effects(&mut self.slow_rings, &mut surface)
    }

    pub fn clear(&mut self) {
        self.rings.clear();
        self.blooms.clear();
        self.slow_rings.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rings.len() + self.blooms.len() + self.slow_rings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.rings.iter()
    }

    pub fn blooms(&self) -> impl Iterator<Item = &Bloom> {
        self.blooms.iter()
    }

    pub fn slow_rings(&self) -> impl Iterator<Item = &SlowRing> {
        self.slow_rings.iter()
    }
}

// Single stable filter pass: update, draw, keep survivors in order.
fn tick_effects<E: Effect>(effects: &mut VecDeque<E>, surface: &mut Option<&mut dyn Surface>) -> usize {
    let before = effects.len();
    effects.retain_mut(|e| {
        e.update();
        if let Some(s) = surface.as_deref_mut() {
            e.draw(s);
        }
        !e.is_retired()
    });
    before - effects.len()
}
