//! Drawing-surface collaborator
//!
//! The engine issues draw commands against a 2D raster surface; the
//! surface owns no game state. Game canvases use the 800x600 logical
//! playfield, the confetti overlay uses the full viewport. Colors are
//! packed `0xRRGGBB`.

use glam::Vec2;

pub trait DrawSurface {
    fn clear(&mut self);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: u32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: u32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: u32);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: u32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: u32,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: u32,
    },
}

/// Surface double that records the command stream, for tests and headless
/// hosts.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: u32) {
        self.commands.push(DrawCommand::FillRect { pos, size, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: u32) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: u32) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            width,
            color,
        });
    }
}
