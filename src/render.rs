use crate::arena::Arena;
use crate::config::UI_PANEL_WIDTH;
use crate::game::Stats;
use crate::geometry::BoundingBox;
use crate::robot::Robot;
use macroquad::prelude::*;

// Add a helper to brighten a color
fn brighten_color(color: Color, amount: f32) -> Color {
    Color::new(
        (color.r + amount).min(1.0),
        (color.g + amount).min(1.0),
        (color.b + amount).min(1.0),
        color.a,
    )
}

// Screen rectangle (x, y, w, h) for a box; inverted boxes are normalised
fn box_to_rect(bbox: &BoundingBox) -> (f32, f32, f32, f32) {
    let x = bbox.x1.min(bbox.x2) as f32;
    let y = bbox.y1.min(bbox.y2) as f32;
    let w = (bbox.x2 - bbox.x1).abs() as f32;
    let h = (bbox.y2 - bbox.y1).abs() as f32;
    (x, y, w, h)
}

// Handles drawing the arena, the robot and the status panel using macroquad
pub struct Renderer {
    body_color: Color,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            body_color: Color::from_rgba(128, 128, 128, 255),
        }
    }

    pub fn draw_frame(&self, arena: &Arena, robot: &Robot, stats: &Stats) {
        clear_background(Color::from_rgba(20, 20, 50, 255));

        Self::draw_arena(arena);
        self.draw_robot(robot);
        Self::draw_ui_panel(arena, robot, stats);
    }

    fn draw_arena(arena: &Arena) {
        draw_rectangle(0.0, 0.0, arena.width as f32, arena.height as f32, WHITE);
        draw_rectangle_lines(
            0.0,
            0.0,
            arena.width as f32,
            arena.height as f32,
            2.0,
            GRAY,
        );
    }

    fn draw_robot(&self, robot: &Robot) {
        let (x, y, w, h) = box_to_rect(&robot.bbox());
        draw_rectangle(x, y, w, h, self.body_color);
        draw_rectangle_lines(x, y, w, h, 1.0, brighten_color(self.body_color, 0.2));

        // Heading marker on the leading edge
        let (ux, uy) = robot.orientation().unit_delta();
        let center = Vec2::new(x + w / 2.0, y + h / 2.0);
        let tip = center + Vec2::new(ux as f32 * w / 2.0, uy as f32 * h / 2.0);
        draw_line(center.x, center.y, tip.x, tip.y, 3.0, DARKGRAY);
    }

    fn draw_ui_panel(arena: &Arena, robot: &Robot, stats: &Stats) {
        let panel_x = arena.width as f32;
        let panel_width = UI_PANEL_WIDTH as f32;
        let padding = 10.0;
        let line_height = 20.0;
        let mut y = 24.0;

        draw_rectangle(
            panel_x,
            0.0,
            panel_width,
            screen_height(),
            Color::from_rgba(20, 20, 50, 255),
        );

        let title_params = TextParams {
            font_size: 22,
            color: GOLD,
            ..Default::default()
        };
        draw_text_ex("ROBOT", panel_x + padding, y, title_params);
        y += line_height * 1.5;

        let bbox = robot.bbox();
        let prior = robot
            .prior_orientation()
            .map_or_else(|| "-".to_string(), |o| o.to_string());
        let lines = [
            format!("Facing: {}", robot.orientation()),
            format!("Previous: {}", prior),
            format!("x1: {:.0}  y1: {:.0}", bbox.x1, bbox.y1),
            format!("x2: {:.0}  y2: {:.0}", bbox.x2, bbox.y2),
            String::new(),
            format!("Turns: {}", stats.turns),
            format!("Steps: {}", stats.steps_moved),
            format!("Blocked: {}", stats.steps_blocked),
        ];

        let text_params = TextParams {
            font_size: 16,
            color: WHITE,
            ..Default::default()
        };
        for line in &lines {
            draw_text_ex(line, panel_x + padding, y, text_params.clone());
            y += line_height;
        }

        let hint_params = TextParams {
            font_size: 14,
            color: LIGHTGRAY,
            ..Default::default()
        };
        let hint_y = screen_height() - padding;
        draw_text_ex("Left/Right: turn", panel_x + padding, hint_y - 2.0 * line_height, hint_params.clone());
        draw_text_ex("Space: forward", panel_x + padding, hint_y - line_height, hint_params.clone());
        draw_text_ex("Esc: quit", panel_x + padding, hint_y, hint_params);
    }

    pub fn window_should_close() -> bool {
        is_key_down(KeyCode::Escape) || is_quit_requested()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_to_rect() {
        let bbox = BoundingBox::new(50.0, 0.0, 100.0, 100.0).unwrap();
        assert_eq!(box_to_rect(&bbox), (50.0, 0.0, 50.0, 100.0));
    }

    #[test]
    fn test_box_to_rect_inverted() {
        let bbox = BoundingBox {
            x1: 70.0,
            y1: 250.0,
            x2: 170.0,
            y2: 200.0,
        };
        assert_eq!(box_to_rect(&bbox), (70.0, 200.0, 100.0, 50.0));
    }

    #[test]
    fn test_brighten_color_saturates() {
        let c = brighten_color(Color::new(0.9, 0.5, 0.0, 1.0), 0.2);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 0.7).abs() < 1e-6);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }
}
