use balloon_core::Balloon;
use macroquad::prelude::*;

pub mod balloon_draw;
pub mod config;

use crate::balloon_draw::{BalloonDrawConfig, altitude_to_screen_y, draw_balloon, fill_color_for};
pub use crate::config::SceneConfig;

const SKY_TOP_MARGIN_PX: f32 = 80.0;
const GROUND_HEIGHT_PX: f32 = 60.0;
const STATUS_FONT_SIZE: f32 = 24.0;
const STATUS_LINE_HEIGHT: f32 = 26.0;
const REJECTED_DEMO_COLOR: &str = "purple";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneCommand {
    Ascend,
    Descend,
    SetColor(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Moved,
    Recolored,
    ColorRejected,
    Unchanged,
}

/// Maps a key press to the command it triggers, if any.
pub fn command_for_key(key: KeyCode) -> Option<SceneCommand> {
    match key {
        KeyCode::Up | KeyCode::W => Some(SceneCommand::Ascend),
        KeyCode::Down | KeyCode::S => Some(SceneCommand::Descend),
        KeyCode::R => Some(SceneCommand::SetColor("red".to_string())),
        KeyCode::B => Some(SceneCommand::SetColor("blue".to_string())),
        KeyCode::G => Some(SceneCommand::SetColor("green".to_string())),
        KeyCode::P => Some(SceneCommand::SetColor(REJECTED_DEMO_COLOR.to_string())),
        _ => None,
    }
}

const BOUND_KEYS: [KeyCode; 8] = [
    KeyCode::Up,
    KeyCode::W,
    KeyCode::Down,
    KeyCode::S,
    KeyCode::R,
    KeyCode::B,
    KeyCode::G,
    KeyCode::P,
];

pub struct BalloonScene {
    balloon: Balloon,
    config: SceneConfig,
    notice: Option<String>,
}

impl BalloonScene {
    pub fn new(config: SceneConfig) -> Self {
        let balloon = Balloon::new(
            config.initial_color.clone(),
            config.initial_direction.clone(),
            config.initial_altitude,
        );
        Self {
            balloon,
            config,
            notice: None,
        }
    }

    pub fn balloon(&self) -> &Balloon {
        &self.balloon
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn apply(&mut self, command: SceneCommand) -> CommandOutcome {
        let before = self.balloon.clone();
        let outcome = match command {
            SceneCommand::Ascend => {
                self.balloon.ascend(self.config.climb_step, self.config.max_altitude);
                Self::movement_outcome(&before, &self.balloon)
            }
            SceneCommand::Descend => {
                self.balloon.descend(self.config.descend_step);
                Self::movement_outcome(&before, &self.balloon)
            }
            SceneCommand::SetColor(color) => {
                if self.balloon.set_color(&color) {
                    CommandOutcome::Recolored
                } else {
                    self.notice = Some(format!("\"{color}\" is not a balloon color"));
                    return CommandOutcome::ColorRejected;
                }
            }
        };
        self.notice = None;
        outcome
    }

    fn movement_outcome(before: &Balloon, after: &Balloon) -> CommandOutcome {
        if before == after {
            CommandOutcome::Unchanged
        } else {
            CommandOutcome::Moved
        }
    }

    fn handle_keys(&mut self) {
        for key in BOUND_KEYS {
            if !is_key_pressed(key) {
                continue;
            }
            if let Some(command) = command_for_key(key) {
                let outcome = self.apply(command);
                tracing::debug!(?key, ?outcome, "key handled");
            }
        }
    }

    fn render(&self, draw_config: &BalloonDrawConfig) {
        clear_background(SKYBLUE);

        let ground_top = screen_height() - GROUND_HEIGHT_PX;
        draw_rectangle(0.0, ground_top, screen_width(), GROUND_HEIGHT_PX, DARKGREEN);

        // Keep the basket above the ground line at altitude zero.
        let lowest_center =
            ground_top - draw_config.radius_px * (2.0 + draw_config.string_length_ratio);
        let highest_center = SKY_TOP_MARGIN_PX + draw_config.radius_px;
        let center_y = altitude_to_screen_y(
            self.balloon.altitude(),
            self.config.max_altitude,
            lowest_center,
            highest_center,
        );
        let fill = fill_color_for(self.balloon.image_resource_name(), draw_config);
        draw_balloon(vec2(screen_width() * 0.5, center_y), fill, draw_config);

        let mut y = 32.0;
        for line in self.balloon.status().lines() {
            draw_text(line, 20.0, y, STATUS_FONT_SIZE, BLACK);
            y += STATUS_LINE_HEIGHT;
        }
        if let Some(notice) = self.notice() {
            draw_text(notice, 20.0, y, STATUS_FONT_SIZE, MAROON);
        }
        draw_text(
            "Up/W climb  Down/S descend  R/B/G recolor  P try purple",
            20.0,
            screen_height() - 20.0,
            20.0,
            WHITE,
        );
    }
}

pub async fn run() {
    install_panic_hook();
    let mut scene = BalloonScene::new(SceneConfig::load());
    let draw_config = BalloonDrawConfig::default();
    tracing::info!(status = %scene.balloon(), "balloon scene started");

    loop {
        scene.handle_keys();
        scene.render(&draw_config);

        next_frame().await;
    }
}

#[cfg(target_arch = "wasm32")]
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if let Some(location) = info.location() {
            macroquad::miniquad::error!(
                "panic at {}:{}: {}",
                location.file(),
                location.line(),
                msg
            );
        } else {
            macroquad::miniquad::error!("panic: {}", msg);
        }
    }));
}

#[cfg(not(target_arch = "wasm32"))]
fn install_panic_hook() {}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with(max_altitude: i32, initial_altitude: i32) -> BalloonScene {
        BalloonScene::new(SceneConfig {
            max_altitude,
            initial_altitude,
            ..SceneConfig::default()
        })
    }

    #[test]
    fn scene_starts_from_config() {
        let scene = BalloonScene::new(SceneConfig::default());
        assert_eq!(scene.balloon().color(), "red");
        assert_eq!(scene.balloon().direction(), "North");
        assert_eq!(scene.balloon().altitude(), 0);
        assert_eq!(scene.notice(), None);
    }

    #[test]
    fn climbing_stops_at_ceiling() {
        let mut scene = scene_with(25, 0);

        assert_eq!(scene.apply(SceneCommand::Ascend), CommandOutcome::Moved);
        assert_eq!(scene.apply(SceneCommand::Ascend), CommandOutcome::Moved);
        assert_eq!(scene.apply(SceneCommand::Ascend), CommandOutcome::Moved);
        assert_eq!(scene.balloon().altitude(), 25);
        assert_eq!(scene.apply(SceneCommand::Ascend), CommandOutcome::Unchanged);
    }

    #[test]
    fn descending_on_ground_reports_direction_change_once() {
        let mut scene = scene_with(300, 0);

        // Direction flips to South even though altitude stays at zero.
        assert_eq!(scene.apply(SceneCommand::Descend), CommandOutcome::Moved);
        assert_eq!(scene.balloon().direction(), "South");
        assert_eq!(scene.apply(SceneCommand::Descend), CommandOutcome::Unchanged);
    }

    #[test]
    fn rejected_color_sets_notice_until_next_success() {
        let mut scene = scene_with(300, 50);

        let outcome = scene.apply(SceneCommand::SetColor("purple".to_string()));
        assert_eq!(outcome, CommandOutcome::ColorRejected);
        assert_eq!(scene.balloon().color(), "red");
        assert_eq!(scene.notice(), Some("\"purple\" is not a balloon color"));

        let outcome = scene.apply(SceneCommand::SetColor("GREEN".to_string()));
        assert_eq!(outcome, CommandOutcome::Recolored);
        assert_eq!(scene.balloon().color(), "green");
        assert_eq!(scene.notice(), None);
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(command_for_key(KeyCode::W), Some(SceneCommand::Ascend));
        assert_eq!(command_for_key(KeyCode::Down), Some(SceneCommand::Descend));
        assert_eq!(
            command_for_key(KeyCode::B),
            Some(SceneCommand::SetColor("blue".to_string()))
        );
        assert_eq!(command_for_key(KeyCode::Space), None);

        for key in BOUND_KEYS {
            assert!(command_for_key(key).is_some(), "{key:?} is not bound");
        }
    }
}
