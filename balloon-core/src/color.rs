use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalloonColor {
    Red,
    Blue,
    Green,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown balloon color: {input:?}")]
pub struct UnknownColor {
    pub input: String,
}

impl BalloonColor {
    pub const ALL: [BalloonColor; 3] = [
        BalloonColor::Red,
        BalloonColor::Blue,
        BalloonColor::Green,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BalloonColor::Red => "red",
            BalloonColor::Blue => "blue",
            BalloonColor::Green => "green",
        }
    }

    /// Name of the sprite resource drawn for this color.
    pub fn image_resource_name(self) -> &'static str {
        match self {
            BalloonColor::Red => "balloon_red",
            BalloonColor::Blue => "balloon_blue",
            BalloonColor::Green => "balloon_green",
        }
    }
}

impl FromStr for BalloonColor {
    type Err = UnknownColor;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "red" => Ok(BalloonColor::Red),
            "blue" => Ok(BalloonColor::Blue),
            "green" => Ok(BalloonColor::Green),
            _ => Err(UnknownColor {
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for BalloonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_in_any_case() {
        assert_eq!("RED".parse::<BalloonColor>(), Ok(BalloonColor::Red));
        assert_eq!("Blue".parse::<BalloonColor>(), Ok(BalloonColor::Blue));
        assert_eq!("green".parse::<BalloonColor>(), Ok(BalloonColor::Green));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "purple".parse::<BalloonColor>().unwrap_err();
        assert_eq!(err.input, "purple");
        assert_eq!(err.to_string(), "unknown balloon color: \"purple\"");

        // Surrounding whitespace is not trimmed.
        assert!(" red".parse::<BalloonColor>().is_err());
    }

    #[test]
    fn resource_names_follow_color() {
        let names: Vec<_> = BalloonColor::ALL
            .iter()
            .map(|color| color.image_resource_name())
            .collect();
        assert_eq!(names, ["balloon_red", "balloon_blue", "balloon_green"]);
    }

    #[test]
    fn serializes_as_lowercase_name() {
        assert_eq!(
            serde_json::to_string(&BalloonColor::Green).unwrap(),
            "\"green\""
        );
        assert_eq!(
            serde_json::from_str::<BalloonColor>("\"blue\"").unwrap(),
            BalloonColor::Blue
        );
    }
}
