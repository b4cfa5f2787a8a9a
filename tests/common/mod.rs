// Recording surface shared by the host-side tests.

#![allow(dead_code)]
use cursor_fx::surface::Surface;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Save,
    Restore,
    Filter(String),
    StrokeCircle {
        center: Vec2,
        radius: f32,
        style: String,
        line_width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        style: String,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        style: String,
        line_width: f32,
        dash: Vec<f32>,
    },
    Composite {
        source: &'static str,
        origin: Vec2,
    },
}

pub struct Recorder {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn new(name: &'static str, width: u32, height: u32) -> Self {
        Self {
            name,
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::StrokeCircle { .. } | Op::FillCircle { .. }))
            .count()
    }
}

impl Surface for Recorder {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn save(&mut self) {
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }

    fn set_filter(&mut self, filter: &str) {
        self.ops.push(Op::Filter(filter.to_string()));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, style: &str, line_width: f32) {
        self.ops.push(Op::StrokeCircle {
            center,
            radius,
            style: style.to_string(),
            line_width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &str) {
        self.ops.push(Op::FillCircle {
            center,
            radius,
            style: style.to_string(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, style: &str, line_width: f32, dash: &[f32]) {
        self.ops.push(Op::StrokeLine {
            from,
            to,
            style: style.to_string(),
            line_width,
            dash: dash.to_vec(),
        });
    }

    fn composite(&mut self, source: &Self, origin: Vec2) {
        self.ops.push(Op::Composite {
            source: source.name,
            origin,
        });
    }
}
