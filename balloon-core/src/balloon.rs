use crate::color::BalloonColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

pub const NORTH: &str = "North";
pub const SOUTH: &str = "South";

/// Observable state of a single balloon.
///
/// `color` and `direction` are free-form when set through [`Balloon::new`] or
/// the raw setters; only [`Balloon::set_color`] checks the color against
/// [`BalloonColor`]. Altitude never drops below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BalloonRecord")]
pub struct Balloon {
    color: String,
    direction: String,
    altitude: i32,
}

#[derive(Deserialize)]
struct BalloonRecord {
    color: String,
    direction: String,
    altitude: i32,
}

impl From<BalloonRecord> for Balloon {
    fn from(record: BalloonRecord) -> Self {
        Self::new(record.color, record.direction, record.altitude)
    }
}

impl Balloon {
    pub fn new(color: impl Into<String>, direction: impl Into<String>, altitude: i32) -> Self {
        Self {
            color: color.into(),
            direction: direction.into(),
            altitude: altitude.max(0),
        }
    }

    pub fn with_color(color: BalloonColor, direction: impl Into<String>, altitude: i32) -> Self {
        Self::new(color.as_str(), direction, altitude)
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn direction(&self) -> &str {
        &self.direction
    }

    pub fn altitude(&self) -> i32 {
        self.altitude
    }

    /// Stores `color` verbatim, without checking it against [`BalloonColor`].
    pub fn set_raw_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_direction(&mut self, direction: impl Into<String>) {
        self.direction = direction.into();
    }

    pub fn set_altitude(&mut self, altitude: i32) {
        self.altitude = altitude.max(0);
    }

    /// Accepts `red`, `blue` or `green` in any case and stores the lower-case
    /// name. Anything else leaves the current color untouched and returns `false`.
    pub fn set_color(&mut self, color: &str) -> bool {
        match color.parse::<BalloonColor>() {
            Ok(parsed) => {
                self.color = parsed.as_str().to_string();
                debug!(color = %parsed, "balloon recolored");
                true
            }
            Err(err) => {
                debug!(%err, current = %self.color, "color change rejected");
                false
            }
        }
    }

    pub fn recognized_color(&self) -> Option<BalloonColor> {
        self.color.parse().ok()
    }

    pub fn image_resource_name(&self) -> Option<&'static str> {
        self.recognized_color().map(BalloonColor::image_resource_name)
    }

    /// Climbs by `meters`, never past `max_altitude`, and heads north.
    /// Non-positive `meters` is ignored. A negative ceiling is treated as zero.
    pub fn ascend(&mut self, meters: i32, max_altitude: i32) {
        if meters <= 0 {
            return;
        }

        let ceiling = if max_altitude < 0 {
            warn!(max_altitude, "negative altitude ceiling clamped to zero");
            0
        } else {
            max_altitude
        };

        self.altitude = self.altitude.saturating_add(meters).min(ceiling);
        self.direction = NORTH.to_string();
        debug!(meters, altitude = self.altitude, "balloon ascended");
    }

    /// Drops by `meters`, stopping at the ground, and heads south.
    /// Non-positive `meters` is ignored.
    pub fn descend(&mut self, meters: i32) {
        if meters <= 0 {
            return;
        }

        self.altitude = self.altitude.saturating_sub(meters).max(0);
        self.direction = SOUTH.to_string();
        debug!(meters, altitude = self.altitude, "balloon descended");
    }

    pub fn status(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Balloon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color: {}\nDirection: {}\nAltitude: {} meters",
            self.color, self.direction, self.altitude
        )
    }
}
