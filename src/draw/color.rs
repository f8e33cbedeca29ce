//! RGBA color type, predefined constants, and name mapping.

use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use inkboard::draw::Color;
/// let red = Color::new(1.0, 0.0, 0.0, 1.0);
/// let translucent_blue = Color::new(0.0, 0.0, 1.0, 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0 to 1.0 range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a copy of this color with the given alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Looks up a predefined color by name (case-insensitive).
    ///
    /// Used by the configuration layer to resolve named colors from the
    /// config file. Returns `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "red" => Some(RED),
            "green" => Some(GREEN),
            "blue" => Some(BLUE),
            "yellow" => Some(YELLOW),
            "orange" => Some(ORANGE),
            "pink" => Some(PINK),
            "white" => Some(WHITE),
            "black" => Some(BLACK),
            _ => None,
        }
    }

    /// Returns the human-readable name of this color, or "Custom".
    ///
    /// Matches approximately (0.1 tolerance per channel) so values that went
    /// through float round-trips still map back to their names.
    pub fn name(&self) -> &'static str {
        if self.r > 0.9 && self.g < 0.1 && self.b < 0.1 {
            "Red"
        } else if self.r < 0.1 && self.g > 0.9 && self.b < 0.1 {
            "Green"
        } else if self.r < 0.1 && self.g < 0.1 && self.b > 0.9 {
            "Blue"
        } else if self.r > 0.9 && self.g > 0.9 && self.b < 0.1 {
            "Yellow"
        } else if self.r > 0.9 && (0.4..=0.6).contains(&self.g) && self.b < 0.1 {
            "Orange"
        } else if self.r > 0.9 && self.g < 0.1 && self.b > 0.9 {
            "Pink"
        } else if self.r > 0.9 && self.g > 0.9 && self.b > 0.9 {
            "White"
        } else if self.r < 0.1 && self.g < 0.1 && self.b < 0.1 {
            "Black"
        } else {
            "Custom"
        }
    }
}

impl Default for Color {
    /// Strokes default to opaque black.
    fn default() -> Self {
        BLACK
    }
}

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent color, used for see-through export backgrounds.
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};
