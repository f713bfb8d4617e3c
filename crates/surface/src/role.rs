//! Surface roles and the per-role export identity (name prefix, XFLR5 type, colour).

use std::fmt;
use std::str::FromStr;

use crate::SurfaceError;

/// What a lifting surface is used for on the aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceRole {
    #[default]
    MainWing,
    HorizontalStabilizer,
    VerticalStabilizer,
}

/// RGBA display colour written into the explane document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl SurfaceRole {
    /// Prefix of the surface name and output file stem (`wing3`, `horiz1`, `vert0`).
    pub fn name_prefix(self) -> &'static str {
        match self {
            SurfaceRole::MainWing => "wing",
            SurfaceRole::HorizontalStabilizer => "horiz",
            SurfaceRole::VerticalStabilizer => "vert",
        }
    }

    /// Wing type keyword understood by XFLR5.
    pub fn xflr_type(self) -> &'static str {
        match self {
            SurfaceRole::MainWing => "MAINWING",
            SurfaceRole::HorizontalStabilizer => "ELEVATOR",
            SurfaceRole::VerticalStabilizer => "FIN",
        }
    }

    pub fn color(self) -> Rgba {
        let (red, green, blue) = match self {
            SurfaceRole::MainWing => (153, 254, 227),
            SurfaceRole::HorizontalStabilizer => (20, 254, 227),
            SurfaceRole::VerticalStabilizer => (254, 220, 20),
        };
        Rgba {
            red,
            green,
            blue,
            alpha: 255,
        }
    }

    pub fn is_fin(self) -> bool {
        matches!(self, SurfaceRole::VerticalStabilizer)
    }

    pub fn label(self) -> &'static str {
        match self {
            SurfaceRole::MainWing => "mainwing",
            SurfaceRole::HorizontalStabilizer => "horizontal stabiliser",
            SurfaceRole::VerticalStabilizer => "vertical stabiliser",
        }
    }
}

impl fmt::Display for SurfaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SurfaceRole {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | '-' => ' ',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        match normalized.as_str() {
            "mainwing" | "main wing" | "wing" => Ok(SurfaceRole::MainWing),
            "horizontal stabiliser" | "horizontal stabilizer" | "horiz" | "elevator" => {
                Ok(SurfaceRole::HorizontalStabilizer)
            }
            "vertical stabiliser" | "vertical stabilizer" | "vert" | "fin" => {
                Ok(SurfaceRole::VerticalStabilizer)
            }
            _ => Err(SurfaceError::UnknownRole(s.to_string())),
        }
    }
}

/// Mirroring flags for vertical fins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FinMirroring {
    /// Reflected about the vertical axis.
    pub symmetric: bool,
    /// Doubled about the longitudinal axis.
    pub double: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_parse_from_legacy_and_snake_case_labels() {
        assert_eq!(
            "horizontal stabiliser".parse::<SurfaceRole>().unwrap(),
            SurfaceRole::HorizontalStabilizer
        );
        assert_eq!(
            "vertical_stabilizer".parse::<SurfaceRole>().unwrap(),
            SurfaceRole::VerticalStabilizer
        );
        assert_eq!("MainWing".parse::<SurfaceRole>().unwrap(), SurfaceRole::MainWing);
        assert!("canard".parse::<SurfaceRole>().is_err());
    }

    #[test]
    fn palette_is_fixed_per_role() {
        assert_eq!(
            SurfaceRole::VerticalStabilizer.color(),
            Rgba {
                red: 254,
                green: 220,
                blue: 20,
                alpha: 255
            }
        );
        assert_eq!(SurfaceRole::HorizontalStabilizer.xflr_type(), "ELEVATOR");
    }
}
