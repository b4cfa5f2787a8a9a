use crate::constants::{
    SWEEP_ANGLE_DEG, SWEEP_DASH, SWEEP_LINE_WIDTH, SWEEP_SPEED, SWEEP_STYLE,
};
use crate::surface::Surface;
use glam::Vec2;

/// Long diagonal highlight line that slides across the buffer and wraps around.
#[derive(Clone, Debug, PartialEq)]
pub struct Sweep {
    angle_deg: f32,
    speed: f32,
    offset: f32,
    width: f32,
    height: f32,
}

impl Sweep {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_speed(width, height, SWEEP_SPEED)
    }

    pub fn with_speed(width: u32, height: u32, speed: f32) -> Self {
        Self {
            angle_deg: SWEEP_ANGLE_DEG,
            speed,
            offset: 0.0,
            width: width as f32,
            height: height as f32,
        }
    }

    #[inline]
    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[inline]
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
    }

    pub fn update(&mut self) {
        self.offset += self.speed;
        if self.offset > self.width + self.height {
            self.offset = -self.width;
        }
    }

    /// Line endpoints for the current offset; starts off-surface so the sweep looks seamless.
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(-self.offset, self.height),
            Vec2::new(self.width - self.offset, -self.height),
        )
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let (from, to) = self.endpoints();
        surface.save();
        surface.stroke_line(from, to, SWEEP_STYLE, SWEEP_LINE_WIDTH, &SWEEP_DASH);
        surface.restore();
    }
}
