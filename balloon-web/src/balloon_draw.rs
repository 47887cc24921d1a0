use macroquad::prelude::*;

#[derive(Debug, Clone)]
pub struct BalloonDrawConfig {
    pub radius_px: f32,
    pub stroke_px: f32,
    pub string_length_ratio: f32, // tether length as a multiple of radius
    pub basket_size_ratio: f32,   // basket edge as a fraction of radius
    pub stroke_color: Color,
    pub basket_color: Color,
    pub red: Color,
    pub blue: Color,
    pub green: Color,
    pub unknown: Color,
}

impl Default for BalloonDrawConfig {
    fn default() -> Self {
        Self {
            radius_px: 36.0,
            stroke_px: 3.0,
            string_length_ratio: 1.2,
            basket_size_ratio: 0.45,
            stroke_color: BLACK,
            basket_color: BROWN,
            red: Color::from_rgba(214, 40, 40, 255),
            blue: Color::from_rgba(30, 90, 200, 255),
            green: Color::from_rgba(40, 160, 70, 255),
            unknown: GRAY,
        }
    }
}

/// Picks the fill for a sprite resource name; unknown resources get the placeholder.
pub fn fill_color_for(resource: Option<&str>, config: &BalloonDrawConfig) -> Color {
    match resource {
        Some("balloon_red") => config.red,
        Some("balloon_blue") => config.blue,
        Some("balloon_green") => config.green,
        _ => config.unknown,
    }
}

/// Maps `altitude` in `[0, max_altitude]` linearly onto the band between
/// `ground_y` and `top_y`. Values outside the range are pinned to the edges.
pub fn altitude_to_screen_y(altitude: i32, max_altitude: i32, ground_y: f32, top_y: f32) -> f32 {
    if max_altitude <= 0 {
        return ground_y;
    }
    let fraction = (altitude as f32 / max_altitude as f32).clamp(0.0, 1.0);
    ground_y + (top_y - ground_y) * fraction
}

pub fn draw_balloon(center: Vec2, fill: Color, config: &BalloonDrawConfig) {
    let radius = config.radius_px;
    let tether_top = center + vec2(0.0, radius);
    let basket_top = tether_top + vec2(0.0, radius * config.string_length_ratio);
    let basket_size = (radius * config.basket_size_ratio).max(2.0);

    draw_line(
        tether_top.x - radius * 0.3,
        tether_top.y - config.stroke_px,
        basket_top.x - basket_size * 0.5,
        basket_top.y,
        config.stroke_px * 0.5,
        config.stroke_color,
    );
    draw_line(
        tether_top.x + radius * 0.3,
        tether_top.y - config.stroke_px,
        basket_top.x + basket_size * 0.5,
        basket_top.y,
        config.stroke_px * 0.5,
        config.stroke_color,
    );
    draw_rectangle(
        basket_top.x - basket_size * 0.5,
        basket_top.y,
        basket_size,
        basket_size * 0.8,
        config.basket_color,
    );

    // Stroke + fill, same trick as a stroked circle.
    draw_circle(center.x, center.y, radius + config.stroke_px, config.stroke_color);
    draw_circle(center.x, center.y, radius, fill);
}
