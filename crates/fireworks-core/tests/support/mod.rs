// Test doubles shared by the simulation tests.

#![allow(dead_code)]

use fireworks_core::{AudioCue, DVec2, Hsla, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Fade(f64),
    Additive,
    Stroke { from: DVec2, to: DVec2, color: Hsla },
}

/// Surface that remembers every call.
pub struct RecordingSurface {
    pub size: DVec2,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
            ops: Vec::new(),
        }
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&DVec2, &DVec2, &Hsla)> {
        self.ops.iter().filter_map(|op| match op {
            Op::Stroke { from, to, color } => Some((from, to, color)),
            _ => None,
        })
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes().count()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> DVec2 {
        self.size
    }

    fn fade(&mut self, opacity: f64) {
        self.ops.push(Op::Fade(opacity));
    }

    fn begin_additive(&mut self) {
        self.ops.push(Op::Additive);
    }

    fn stroke_segment(&mut self, from: DVec2, to: DVec2, color: Hsla) {
        self.ops.push(Op::Stroke { from, to, color });
    }
}

#[derive(Default)]
pub struct CountingCue {
    pub plays: usize,
}

impl AudioCue for CountingCue {
    fn play_explosion(&mut self) {
        self.plays += 1;
    }
}
