use crate::constants::MIN_POINTER_ELAPSED_MS;
use crate::core::Registry;
use glam::Vec2;
use instant::Instant;
use rand::Rng;
use std::time::Duration;

/// Result of one pointer-move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Pointer position scaled into surface pixels.
    pub position: Vec2,
    /// Distance covered since the previous event, in surface px per ms.
    pub speed: f32,
    pub elapsed_ms: f32,
}

/// Turns raw pointer moves into surface positions and speeds.
pub struct PointerTracker {
    ratio: f32,
    last_position: Vec2,
    last_instant: Instant,
}

impl PointerTracker {
    pub fn new(ratio: f64, now: Instant) -> Self {
        Self {
            ratio: ratio as f32,
            last_position: Vec2::ZERO,
            last_instant: now,
        }
    }

    #[inline]
    pub fn normalize(&self, client: Vec2) -> Vec2 {
        client * self.ratio
    }

    #[inline]
    pub fn last_position(&self) -> Vec2 {
        self.last_position
    }

    pub fn sample(&mut self, client: Vec2, now: Instant) -> PointerSample {
        let position = self.normalize(client);
        let elapsed = if now > self.last_instant {
            now - self.last_instant
        } else {
            Duration::ZERO
        };
        let elapsed_ms = elapsed.as_secs_f32() * 1000.0;
        let speed = pointer_speed(self.last_position, position, elapsed_ms);

        self.last_position = position;
        self.last_instant = now;
        PointerSample {
            position,
            speed,
            elapsed_ms,
        }
    }

    /// Sample the move and spawn a batch of effects at the new position.
    pub fn on_move<R: Rng + ?Sized>(
        &mut self,
        client: Vec2,
        now: Instant,
        registry: &mut Registry,
        rng: &mut R,
    ) -> PointerSample {
        let sample = self.sample(client, now);
        registry.spawn_batch(sample.position, sample.speed, rng);
        sample
    }
}

/// Euclidean displacement over elapsed time; the elapsed time is floored so
/// back-to-back events never divide by zero.
#[inline]
pub fn pointer_speed(from: Vec2, to: Vec2, elapsed_ms: f32) -> f32 {
    let speed = from.distance(to) / elapsed_ms.max(MIN_POINTER_ELAPSED_MS);
    if speed.is_finite() {
        speed
    } else {
        0.0
    }
}
