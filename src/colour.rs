// Named RGBA colours
//
// Colours are plain `Vector4`s in `[0, 1]` with alpha last.

use crate::math::Vector4;

/// Builds a colour from its channels.
#[must_use]
pub const fn custom(r: f32, g: f32, b: f32, a: f32) -> Vector4 {
    Vector4::new(r, g, b, a)
}

// basic colours
pub const WHITE: Vector4 = Vector4::new(1.0, 1.0, 1.0, 1.0);
pub const BLACK: Vector4 = Vector4::new(0.0, 0.0, 0.0, 1.0);
pub const TRANSPARENT: Vector4 = Vector4::new(0.0, 0.0, 0.0, 0.0);

// grayscale
pub const GRAY: Vector4 = Vector4::new(0.5, 0.5, 0.5, 1.0);
pub const LIGHT_GRAY: Vector4 = Vector4::new(0.75, 0.75, 0.75, 1.0);
pub const DARK_GRAY: Vector4 = Vector4::new(0.25, 0.25, 0.25, 1.0);

// primary and secondary
pub const RED: Vector4 = Vector4::new(1.0, 0.0, 0.0, 1.0);
pub const GREEN: Vector4 = Vector4::new(0.0, 1.0, 0.0, 1.0);
pub const BLUE: Vector4 = Vector4::new(0.0, 0.0, 1.0, 1.0);
pub const YELLOW: Vector4 = Vector4::new(1.0, 1.0, 0.0, 1.0);
pub const MAGENTA: Vector4 = Vector4::new(1.0, 0.0, 1.0, 1.0);
pub const CYAN: Vector4 = Vector4::new(0.0, 1.0, 1.0, 1.0);

// extended palette
pub const ORANGE: Vector4 = Vector4::new(1.0, 0.5, 0.0, 1.0);
pub const PINK: Vector4 = Vector4::new(1.0, 0.41, 0.71, 1.0);
pub const PURPLE: Vector4 = Vector4::new(0.5, 0.0, 0.5, 1.0);
pub const VIOLET: Vector4 = Vector4::new(0.56, 0.0, 1.0, 1.0);
pub const INDIGO: Vector4 = Vector4::new(0.29, 0.0, 0.51, 1.0);
pub const LIME: Vector4 = Vector4::new(0.75, 1.0, 0.0, 1.0);
pub const OLIVE: Vector4 = Vector4::new(0.5, 0.5, 0.0, 1.0);
pub const TEAL: Vector4 = Vector4::new(0.0, 0.5, 0.5, 1.0);
pub const AQUA: Vector4 = Vector4::new(0.0, 1.0, 1.0, 1.0);
pub const NAVY: Vector4 = Vector4::new(0.0, 0.0, 0.5, 1.0);
pub const MAROON: Vector4 = Vector4::new(0.5, 0.0, 0.0, 1.0);
pub const BROWN: Vector4 = Vector4::new(0.6, 0.3, 0.0, 1.0);
pub const TAN: Vector4 = Vector4::new(0.82, 0.71, 0.55, 1.0);
pub const GOLD: Vector4 = Vector4::new(1.0, 0.84, 0.0, 1.0);
pub const SILVER: Vector4 = Vector4::new(0.75, 0.75, 0.75, 1.0);
pub const BRONZE: Vector4 = Vector4::new(0.8, 0.5, 0.2, 1.0);

// nature-inspired
pub const SKY_BLUE: Vector4 = Vector4::new(0.53, 0.81, 0.92, 1.0);
pub const ROYAL_BLUE: Vector4 = Vector4::new(0.25, 0.41, 0.88, 1.0);
pub const FOREST_GREEN: Vector4 = Vector4::new(0.13, 0.55, 0.13, 1.0);
pub const SEA_GREEN: Vector4 = Vector4::new(0.18, 0.55, 0.34, 1.0);
pub const DARK_GREEN: Vector4 = Vector4::new(0.0, 0.39, 0.0, 1.0);
pub const LIGHT_GREEN: Vector4 = Vector4::new(0.56, 0.93, 0.56, 1.0);
pub const CORAL: Vector4 = Vector4::new(1.0, 0.5, 0.31, 1.0);
pub const SALMON: Vector4 = Vector4::new(0.98, 0.5, 0.45, 1.0);
pub const DEEP_PINK: Vector4 = Vector4::new(1.0, 0.08, 0.58, 1.0);
pub const HOT_PINK: Vector4 = Vector4::new(1.0, 0.41, 0.71, 1.0);
pub const CRIMSON: Vector4 = Vector4::new(0.86, 0.08, 0.24, 1.0);
pub const FIRE_BRICK: Vector4 = Vector4::new(0.7, 0.13, 0.13, 1.0);
pub const CHOCOLATE: Vector4 = Vector4::new(0.82, 0.41, 0.12, 1.0);
pub const SANDY_BROWN: Vector4 = Vector4::new(0.96, 0.64, 0.38, 1.0);
pub const BEIGE: Vector4 = Vector4::new(0.96, 0.96, 0.86, 1.0);
pub const MINT: Vector4 = Vector4::new(0.6, 1.0, 0.6, 1.0);

// cool tones
pub const MIDNIGHT_BLUE: Vector4 = Vector4::new(0.1, 0.1, 0.44, 1.0);
pub const SLATE_BLUE: Vector4 = Vector4::new(0.42, 0.35, 0.8, 1.0);
pub const TURQUOISE: Vector4 = Vector4::new(0.25, 0.88, 0.82, 1.0);
pub const LIGHT_CYAN: Vector4 = Vector4::new(0.88, 1.0, 1.0, 1.0);
pub const PALE_BLUE: Vector4 = Vector4::new(0.69, 0.93, 0.93, 1.0);
pub const STEEL_BLUE: Vector4 = Vector4::new(0.27, 0.51, 0.71, 1.0);

// warm tones
pub const PEACH: Vector4 = Vector4::new(1.0, 0.89, 0.71, 1.0);
pub const ROSE: Vector4 = Vector4::new(1.0, 0.0, 0.5, 1.0);
pub const PLUM: Vector4 = Vector4::new(0.87, 0.63, 0.87, 1.0);
pub const LAVENDER: Vector4 = Vector4::new(0.9, 0.9, 0.98, 1.0);
pub const KHAKI: Vector4 = Vector4::new(0.76, 0.69, 0.57, 1.0);
pub const WHEAT: Vector4 = Vector4::new(0.96, 0.87, 0.7, 1.0);
pub const AMBER: Vector4 = Vector4::new(1.0, 0.75, 0.0, 1.0);
pub const BRICK: Vector4 = Vector4::new(0.8, 0.25, 0.33, 1.0);
