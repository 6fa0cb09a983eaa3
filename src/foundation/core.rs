use crate::foundation::math::{clamp01, lerp, lerp_u8};

pub use kurbo::{Point, Vec2};

/// Viewport width below which the mobile breakpoint applies, in logical pixels.
pub const MOBILE_BREAKPOINT_PX: f64 = 1000.0;

/// Normalized scroll progress for a scene's scroll range.
///
/// Supplied externally each update tick. Not guaranteed monotonic (the user
/// can scroll backward); values outside `[0, 1]` are tolerated and clamped
/// at the point of use.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Progress(pub f64);

impl Progress {
    /// Progress at the very start of the scroll range.
    pub const START: Self = Self(0.0);
    /// Progress at the very end of the scroll range.
    pub const END: Self = Self(1.0);

    /// Wrap a raw observer value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw value clamped to `[0, 1]`.
    pub fn clamped(self) -> f64 {
        clamp01(self.0)
    }
}

/// 3D position in the host's scene space (z is perspective depth).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec3 {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
    /// Depth offset.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Build a vector from components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise linear interpolation.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        Self {
            x: lerp(a.x, b.x, t),
            y: lerp(a.y, b.y, t),
            z: lerp(a.z, b.z, t),
        }
    }
}

/// Straight (non-premultiplied) RGB color with integer channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Opaque black.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Build a color from channels.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel integer interpolation, rounded and clamped to `0..=255`.
    ///
    /// Callers remap `t` to `[0, 1]` before scaling; this clamps regardless.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }
}

/// Pure mapper output for one element at one progress value.
///
/// Recomputed every tick as a deterministic function of current progress;
/// never persisted between frames.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TargetState {
    /// Target position.
    pub position: Vec3,
    /// Uniform scale factor.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Optional color override; `None` means "leave the element's color".
    pub color: Option<Rgb>,
}

impl TargetState {
    /// Identity state: origin, unit scale, fully opaque, no color override.
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
            opacity: 1.0,
            color: None,
        }
    }

    /// Component-wise interpolation between two states.
    ///
    /// Color interpolates only when both endpoints carry one; otherwise the
    /// defined endpoint (if any) wins.
    pub fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let color = match (a.color, b.color) {
            (Some(ca), Some(cb)) => Some(Rgb::lerp(ca, cb, t)),
            (Some(c), None) | (None, Some(c)) => Some(c),
            (None, None) => None,
        };
        Self {
            position: Vec3::lerp(a.position, b.position, t),
            scale: lerp(a.scale, b.scale, t),
            opacity: lerp(a.opacity, b.opacity, t),
            color,
        }
    }
}

/// Host viewport geometry consumed by scatter multiplier selection.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport from logical-pixel dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the mobile breakpoint applies (`width < 1000`).
    pub fn is_mobile(self) -> bool {
        self.width < MOBILE_BREAKPOINT_PX
    }
}

/// One animated sub-element (character, word, image, card).
///
/// Created once when a scene initializes and immutable thereafter; `index`
/// is stable and determines the stagger offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementSlot {
    /// Stable position in the scene's element collection.
    pub index: usize,
    /// Authored extra delay applied on top of the index-based offset.
    pub base_delay: f64,
}

impl ElementSlot {
    /// Build a slot with no extra authored delay.
    pub fn at(index: usize) -> Self {
        Self {
            index,
            base_delay: 0.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
