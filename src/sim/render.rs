//! Render pass: map session state to drawing-surface commands
//!
//! Pure state-to-commands mapping; no game state lives here and nothing
//! here mutates the session.

use glam::Vec2;

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::surface::DrawSurface;

use super::batting::{self, BattingState};
use super::bowling::BowlingState;
use super::catching::CatchingState;
use super::memory::{self, MemoryState};
use super::session::{GameSession, ModeState};

/// Scene palette, 0xRRGGBB
mod palette {
    pub const FIELD: u32 = 0x27ae60;
    pub const OUTFIELD: u32 = 0x1e8449;
    pub const PITCH: u32 = 0xd4a373;
    pub const STUMPS: u32 = 0x8b4513;
    pub const BAILS: u32 = 0xf39c12;
    pub const BAT: u32 = 0x964b00;
    pub const BALL: u32 = 0xe74c3c;
    pub const CARD_BACK: u32 = 0x2c3e50;
    pub const CARD_FACE: u32 = 0xecf0f1;
    pub const CARD_MATCHED: u32 = 0x2ecc71;
}

/// Draw the current frame of a session
pub fn draw(session: &GameSession, surface: &mut dyn DrawSurface) {
    surface.clear();
    match session.state() {
        ModeState::Batting(s) => draw_batting(s, surface),
        ModeState::Catching(s) => draw_catching(s, surface),
        ModeState::Bowling(s) => draw_bowling(s, surface),
        ModeState::Memory(s) => draw_memory(s, surface),
        // The trivia sprint is a text screen; no playfield to draw
        ModeState::Trivia(_) => {}
    }
}

fn draw_field(surface: &mut dyn DrawSurface) {
    surface.fill_rect(
        Vec2::ZERO,
        Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
        palette::FIELD,
    );
    // Pitch strip down the middle
    surface.fill_rect(
        Vec2::new(300.0, 0.0),
        Vec2::new(200.0, PLAYFIELD_HEIGHT),
        palette::PITCH,
    );
}

fn draw_batting(state: &BattingState, surface: &mut dyn DrawSurface) {
    draw_field(surface);

    // Stumps behind the batsman
    for x in [385.0, 395.0, 405.0] {
        surface.fill_rect(Vec2::new(x, 480.0), Vec2::new(10.0, 80.0), palette::STUMPS);
    }

    surface.fill_rect(
        state.bat - Vec2::new(40.0, 0.0),
        Vec2::new(80.0, 15.0),
        palette::BAT,
    );

    if let Some(ball) = state.ball {
        surface.fill_circle(ball.pos, batting::BALL_RADIUS, palette::BALL);
    }
}

fn draw_catching(state: &CatchingState, surface: &mut dyn DrawSurface) {
    surface.fill_rect(
        Vec2::ZERO,
        Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
        palette::OUTFIELD,
    );
    for obj in &state.objects {
        surface.fill_circle(obj.pos, obj.radius, obj.color);
    }
}

fn draw_bowling(state: &BowlingState, surface: &mut dyn DrawSurface) {
    draw_field(surface);

    let top = state.stumps.min.y;
    let height = state.stumps.max.y - state.stumps.min.y;
    let center_x = state.stumps.center().x;
    for dx in [-25.0, 0.0, 25.0] {
        surface.fill_rect(
            Vec2::new(center_x + dx - 5.0, top),
            Vec2::new(10.0, height),
            palette::STUMPS,
        );
    }
    // Bails across the top
    surface.fill_rect(
        Vec2::new(center_x - 30.0, top - 5.0),
        Vec2::new(60.0, 5.0),
        palette::BAILS,
    );

    if let Some(hit) = state.last_hit {
        surface.fill_circle(hit, 30.0, palette::BAILS);
    }
}

/// Square card grid centered on the playfield
fn draw_memory(state: &MemoryState, surface: &mut dyn DrawSurface) {
    const CARD: f32 = 110.0;
    const GAP: f32 = 14.0;
    let side = memory::GRID_SIZE as f32;
    let span = side * CARD + (side - 1.0) * GAP;
    let origin = Vec2::new(
        (PLAYFIELD_WIDTH - span) / 2.0,
        (PLAYFIELD_HEIGHT - span * 0.75) / 2.0,
    );

    for (i, card) in state.cards.iter().enumerate() {
        let col = (i % memory::GRID_SIZE) as f32;
        let row = (i / memory::GRID_SIZE) as f32;
        let pos = origin + Vec2::new(col * (CARD + GAP), row * (CARD * 0.75 + GAP));
        let color = if card.matched {
            palette::CARD_MATCHED
        } else if card.flipped {
            palette::CARD_FACE
        } else {
            palette::CARD_BACK
        };
        surface.fill_rect(pos, Vec2::new(CARD, CARD * 0.75), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::GameMode;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn test_frame_starts_with_clear_then_backdrop() {
        let session = GameSession::start(GameMode::Batting, 1);
        let mut surface = RecordingSurface::default();
        draw(&session, &mut surface);

        assert_eq!(surface.commands[0], DrawCommand::Clear);
        assert!(matches!(
            surface.commands[1],
            DrawCommand::FillRect { color, .. } if color == palette::FIELD
        ));
    }

    #[test]
    fn test_memory_grid_draws_sixteen_cards() {
        let session = GameSession::start(GameMode::Memory, 1);
        let mut surface = RecordingSurface::default();
        draw(&session, &mut surface);

        let rects = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count();
        assert_eq!(rects, 16);
    }

    #[test]
    fn test_catching_draws_one_circle_per_object() {
        let mut session = GameSession::start(GameMode::Catching, 7);
        for _ in 0..150 {
            session.tick(1.0 / 60.0);
        }
        let objects = match session.state() {
            ModeState::Catching(s) => s.objects.len(),
            _ => unreachable!(),
        };

        let mut surface = RecordingSurface::default();
        draw(&session, &mut surface);
        let circles = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count();
        assert_eq!(circles, objects);
    }
}
