//! Frame drawing
//!
//! The simulation never draws. Each frame the driver hands the world to
//! [`draw_frame`], which issues draw commands to a [`RenderSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::sim::{ObstacleKind, Rect, World};

/// Images the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Avatar,
    TopPipe,
    BottomPipe,
}

impl Sprite {
    pub const ALL: [Sprite; 3] = [Sprite::Avatar, Sprite::TopPipe, Sprite::BottomPipe];

    pub fn for_obstacle(kind: ObstacleKind) -> Self {
        match kind {
            ObstacleKind::Top => Sprite::TopPipe,
            ObstacleKind::Bottom => Sprite::BottomPipe,
        }
    }

    /// Image path relative to the page
    pub fn asset_path(&self) -> &'static str {
        match self {
            Sprite::Avatar => "./flappybird.gif",
            Sprite::TopPipe => "./toppipe.png",
            Sprite::BottomPipe => "./bottompipe.png",
        }
    }
}

/// Fill colour and CSS font for text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub fill: &'static str,
    pub font: &'static str,
}

/// Score and game-over text
pub const HUD_TEXT: TextStyle = TextStyle {
    fill: "white",
    font: "45px sans-serif",
};

/// Baseline-left anchor of the score
pub const SCORE_POS: (f32, f32) = (5.0, 45.0);
/// Baseline-left anchor of the game-over banner
pub const GAME_OVER_POS: (f32, f32) = (6.0, 90.0);
pub const GAME_OVER_TEXT: &str = "GAME OVER";

/// A surface that accepts draw commands
pub trait RenderSurface {
    /// Wipe the whole surface
    fn clear(&mut self);
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
}

/// Score as shown on screen: whole numbers without a decimal, halves as `x.5`
pub fn format_score(score: f32) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as u64)
    } else {
        format!("{:.1}", score)
    }
}

/// Draw one full frame: pipes, then the bird, then the HUD on top
pub fn draw_frame(world: &World, surface: &mut impl RenderSurface) {
    surface.clear();

    for obstacle in &world.obstacles {
        surface.draw_sprite(Sprite::for_obstacle(obstacle.kind), obstacle.rect());
    }

    surface.draw_sprite(Sprite::Avatar, world.avatar.rect());

    let (x, y) = SCORE_POS;
    surface.draw_text(&format_score(world.score()), x, y, &HUD_TEXT);

    if world.is_over() {
        let (x, y) = GAME_OVER_POS;
        surface.draw_text(GAME_OVER_TEXT, x, y, &HUD_TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::spawn_pair;
    use crate::sim::spawn::tests::FixedDraws;
    use crate::sim::{GamePhase, tick};

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Clear,
        Sprite(Sprite, Rect),
        Text(String, f32, f32),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<DrawCall>,
    }

    impl RenderSurface for RecordingSurface {
        fn clear(&mut self) {
            self.calls.push(DrawCall::Clear);
        }

        fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
            self.calls.push(DrawCall::Sprite(sprite, rect));
        }

        fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
            assert_eq!(style, &HUD_TEXT);
            self.calls.push(DrawCall::Text(text.to_string(), x, y));
        }
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(0.5), "0.5");
        assert_eq!(format_score(12.0), "12");
        assert_eq!(format_score(12.5), "12.5");
    }

    #[test]
    fn test_draw_order() {
        let mut world = World::default();
        spawn_pair(&mut world, &mut FixedDraws::new(&[0.5]));
        tick(&mut world);

        let mut surface = RecordingSurface::default();
        draw_frame(&world, &mut surface);

        assert_eq!(surface.calls.len(), 5);
        assert_eq!(surface.calls[0], DrawCall::Clear);
        assert!(matches!(surface.calls[1], DrawCall::Sprite(Sprite::TopPipe, r) if r.x == 358.0));
        assert!(matches!(surface.calls[2], DrawCall::Sprite(Sprite::BottomPipe, r) if r.y == 341.0));
        assert_eq!(
            surface.calls[3],
            DrawCall::Sprite(Sprite::Avatar, world.avatar.rect())
        );
        assert_eq!(surface.calls[4], DrawCall::Text("0".to_string(), 5.0, 45.0));
    }

    #[test]
    fn test_game_over_banner() {
        let mut world = World::default();
        world.phase = GamePhase::Over;

        let mut surface = RecordingSurface::default();
        draw_frame(&world, &mut surface);

        assert_eq!(
            surface.calls.last(),
            Some(&DrawCall::Text(GAME_OVER_TEXT.to_string(), 6.0, 90.0))
        );
    }

    #[test]
    fn test_sprite_assets() {
        assert_eq!(Sprite::for_obstacle(ObstacleKind::Top), Sprite::TopPipe);
        assert_eq!(Sprite::for_obstacle(ObstacleKind::Bottom), Sprite::BottomPipe);
        assert!(Sprite::ALL.iter().all(|s| s.asset_path().starts_with("./")));
    }
}
