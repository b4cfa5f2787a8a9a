//! Pointer-spawned effects and their growth/fade laws.
//!
//! Every variant shares one spawn-time derivation ([`EffectState::spawn`])
//! driven by a per-variant [`Profile`]; variants differ only in how `update`
//! moves the size and how `draw` renders it.

use crate::constants::{
    INSTANT_FADE_STEP, MIN_FADE_SPAN, RING_LINE_WIDTH_DIVISOR, SLOW_RING_LINE_WIDTH,
};
use crate::core::color::Hsl;
use crate::surface::Surface;
use glam::Vec2;

/// A spawn-time quantity either fixed or proportional to pointer speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scaling {
    Fixed(f32),
    PerSpeed(f32),
}

impl Scaling {
    #[inline]
    pub fn at(self, speed: f32) -> f32 {
        match self {
            Scaling::Fixed(v) => v,
            Scaling::PerSpeed(k) => speed * k,
        }
    }
}

/// Which size range the opacity fade is spread over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeSpan {
    /// `size - min_size`
    TowardMin,
    /// `max_size - size`
    TowardMax,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Profile {
    pub size: Scaling,
    pub min_size: Scaling,
    pub max_size: Scaling,
    pub animation_speed: Scaling,
    pub fade_span: FadeSpan,
    pub fade_divisor: f32,
}

/// Fields common to every effect variant.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectState {
    pub position: Vec2,
    pub size: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub opacity: f32,
    pub animation_speed: f32,
    pub opacity_step: f32,
    pub color: Hsl,
}

impl EffectState {
    pub fn spawn(position: Vec2, speed: f32, color: Hsl, profile: &Profile) -> Self {
        let speed = if speed.is_finite() { speed.max(0.0) } else { 0.0 };
        let size = profile.size.at(speed);
        let min_size = profile.min_size.at(speed);
        let max_size = profile.max_size.at(speed);
        let animation_speed = profile.animation_speed.at(speed);
        let span = match profile.fade_span {
            FadeSpan::TowardMin => size - min_size,
            FadeSpan::TowardMax => max_size - size,
        };
        Self {
            position,
            size,
            min_size,
            max_size,
            opacity: 1.0,
            animation_speed,
            opacity_step: fade_step(animation_speed, span, profile.fade_divisor),
            color,
        }
    }

    #[inline]
    fn fade(&mut self) {
        self.opacity -= self.opacity_step;
    }

    /// Retired once opacity reaches zero; a non-finite opacity counts as retired too.
    #[inline]
    pub fn is_retired(&self) -> bool {
        self.opacity.is_nan() || self.opacity <= 0.0
    }

    #[inline]
    fn style(&self) -> String {
        self.color.to_css(self.opacity)
    }
}

/// Opacity lost per update so the fade completes over `span`.
///
/// Degenerate spans (and anything that would yield a non-finite or
/// non-positive step) fade out in a single update instead.
pub fn fade_step(animation_speed: f32, span: f32, divisor: f32) -> f32 {
    if span.abs() < MIN_FADE_SPAN {
        log::trace!("degenerate fade span {span}, fading instantly");
        return INSTANT_FADE_STEP;
    }
    let step = animation_speed / span / divisor;
    if step.is_finite() && step > 0.0 {
        step
    } else {
        log::trace!("unusable fade step {step}, fading instantly");
        INSTANT_FADE_STEP
    }
}

/// Per-frame behaviour shared by all effect variants.
pub trait Effect {
    fn state(&self) -> &EffectState;
    fn update(&mut self);
    fn draw(&self, surface: &mut dyn Surface);

    #[inline]
    fn is_retired(&self) -> bool {
        self.state().is_retired()
    }
}

/// Stroked circle that shrinks toward its minimum size.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring(EffectState);

impl Ring {
    pub const PROFILE: Profile = Profile {
        size: Scaling::PerSpeed(2.0),
        min_size: Scaling::PerSpeed(0.9),
        max_size: Scaling::Fixed(35.0),
        animation_speed: Scaling::PerSpeed(0.1),
        fade_span: FadeSpan::TowardMin,
        fade_divisor: 1.0,
    };

    pub fn new(position: Vec2, speed: f32, color: Hsl) -> Self {
        Self(EffectState::spawn(position, speed, color, &Self::PROFILE))
    }
}

impl Effect for Ring {
    fn state(&self) -> &EffectState {
        &self.0
    }

    fn update(&mut self) {
        let s = &mut self.0;
        s.size -= s.animation_speed;
        if s.size < s.min_size {
            s.size = s.min_size;
        }
        s.fade();
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let s = &self.0;
        if s.is_retired() {
            return;
        }
        surface.stroke_circle(
            s.position,
            s.size,
            &s.style(),
            s.size / RING_LINE_WIDTH_DIVISOR,
        );
    }
}

/// Filled disc that keeps growing while it fades.
#[derive(Clone, Debug, PartialEq)]
pub struct Bloom(EffectState);

impl Bloom {
    pub const PROFILE: Profile = Profile {
        size: Scaling::PerSpeed(2.5),
        min_size: Scaling::PerSpeed(0.9),
        max_size: Scaling::PerSpeed(4.0),
        animation_speed: Scaling::PerSpeed(0.2),
        fade_span: FadeSpan::TowardMax,
        fade_divisor: 2.0,
    };

    pub fn new(position: Vec2, speed: f32, color: Hsl) -> Self {
        Self(EffectState::spawn(position, speed, color, &Self::PROFILE))
    }
}

impl Effect for Bloom {
    fn state(&self) -> &EffectState {
        &self.0
    }

    fn update(&mut self) {
        let s = &mut self.0;
        s.size += s.animation_speed;
        s.fade();
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let s = &self.0;
        if s.is_retired() {
            return;
        }
        surface.fill_circle(s.position, s.size, &s.style());
    }
}

/// Thin stroked circle growing at a fixed rate regardless of pointer speed.
#[derive(Clone, Debug, PartialEq)]
pub struct SlowRing(EffectState);

impl SlowRing {
    pub const PROFILE: Profile = Profile {
        size: Scaling::PerSpeed(2.0),
        min_size: Scaling::PerSpeed(0.9),
        max_size: Scaling::PerSpeed(20.0),
        animation_speed: Scaling::Fixed(0.33),
        fade_span: FadeSpan::TowardMax,
        fade_divisor: 1.5,
    };

    pub fn new(position: Vec2, speed: f32, color: Hsl) -> Self {
        Self(EffectState::spawn(position, speed, color, &Self::PROFILE))
    }
}

impl Effect for SlowRing {
    fn state(&self) -> &EffectState {
        &self.0
    }

    fn update(&mut self) {
        let s = &mut self.0;
        s.size += s.animation_speed;
        s.fade();
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let s = &self.0;
        if s.is_retired() {
            return;
        }
        surface.stroke_circle(s.position, s.size, &s.style(), SLOW_RING_LINE_WIDTH);
    }
}
