use crate::{
    animation::ease::Ease,
    foundation::{
        core::{TargetState, Vec2, Vec3, Viewport},
        error::{ChoreoError, ChoreoResult},
        math::clamp01,
    },
};

/// A single authored interpolation between two terminal states.
///
/// Local progress below 0 clamps to `from`, above 1 clamps to `to`; there is
/// no extrapolation beyond the authored range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// State at local progress 0 and below.
    pub from: TargetState,
    /// State at local progress 1 and above.
    pub to: TargetState,
    /// Easing applied to local progress before interpolation.
    pub ease: Ease,
}

impl Segment {
    /// Sample the segment at a band-local progress value.
    pub fn sample(&self, local: f64) -> TargetState {
        let t = self.ease.apply(clamp01(local));
        TargetState::lerp(&self.from, &self.to, t)
    }
}

/// Authored scatter direction table: one fixed direction per gallery image.
///
/// Values are viewport-relative multipliers, not unit vectors; magnitude is
/// part of the authored look.
pub const SCATTER_DIRECTIONS: [Vec2; 20] = [
    Vec2::new(1.3, 0.7),
    Vec2::new(-1.5, 1.0),
    Vec2::new(1.1, -1.3),
    Vec2::new(-1.7, -0.8),
    Vec2::new(0.8, 1.5),
    Vec2::new(-1.0, -1.4),
    Vec2::new(1.6, 0.3),
    Vec2::new(-0.7, 1.7),
    Vec2::new(1.2, -1.6),
    Vec2::new(-1.4, 0.9),
    Vec2::new(1.8, -0.5),
    Vec2::new(-1.1, -1.8),
    Vec2::new(0.9, 1.8),
    Vec2::new(-1.9, 0.4),
    Vec2::new(1.0, -1.9),
    Vec2::new(-0.8, 1.9),
    Vec2::new(1.7, -1.0),
    Vec2::new(-1.3, -1.2),
    Vec2::new(0.7, 2.0),
    Vec2::new(1.25, -0.2),
];

/// Depth every scattered element starts at.
const SCATTER_START_Z: f64 = -1000.0;
/// Depth every scattered element ends at.
const SCATTER_END_Z: f64 = 2000.0;

/// Fixed per-element scatter targets for one scene.
///
/// Directions and end positions are computed once at setup from the viewport
/// and read-only afterwards; per-element sampling is independent per axis and
/// carries no cross-element dependency.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScatterField {
    ends: Vec<Vec3>,
    scale_multiplier: f64,
}

impl ScatterField {
    /// Build scatter targets for `element_count` elements.
    ///
    /// The position multiplier is 2.5 on mobile and 0.5 on desktop; the scale
    /// ramp multiplier is 4 on mobile and 2 on desktop.
    pub fn new(
        directions: &[Vec2],
        element_count: usize,
        viewport: Viewport,
    ) -> ChoreoResult<Self> {
        if element_count > directions.len() {
            return Err(ChoreoError::validation(format!(
                "scatter needs {element_count} directions but only {} are authored",
                directions.len()
            )));
        }
        let position_multiplier = if viewport.is_mobile() { 2.5 } else { 0.5 };
        let scale_multiplier = if viewport.is_mobile() { 4.0 } else { 2.0 };
        let ends = directions[..element_count]
            .iter()
            .map(|dir| {
                Vec3::new(
                    dir.x * viewport.width * position_multiplier,
                    dir.y * viewport.height * position_multiplier,
                    SCATTER_END_Z,
                )
            })
            .collect();
        Ok(Self {
            ends,
            scale_multiplier,
        })
    }

    /// Number of elements this field was set up for.
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Whether the field holds no elements.
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// The fixed start state shared by every element.
    pub fn start_state() -> TargetState {
        TargetState {
            position: Vec3::new(0.0, 0.0, SCATTER_START_Z),
            scale: 0.0,
            opacity: 1.0,
            color: None,
        }
    }

    /// The fixed end state of element `index`.
    pub fn end_state(&self, index: usize) -> TargetState {
        TargetState {
            position: self.ends[index],
            scale: 1.0,
            opacity: 1.0,
            color: None,
        }
    }

    /// Target of element `index` at a (possibly unclamped) element progress.
    ///
    /// Position interpolates on clamped progress; scale runs on a steeper
    /// ramp (`progress * scale_multiplier`, clamped) so elements pop to full
    /// size early in their flight.
    pub fn target(&self, index: usize, element_progress: f64) -> TargetState {
        let t = clamp01(element_progress);
        TargetState {
            position: Vec3::lerp(Self::start_state().position, self.ends[index], t),
            scale: clamp01(element_progress * self.scale_multiplier),
            opacity: 1.0,
            color: None,
        }
    }
}

/// The spotlight cover element's zoom-in mapping.
///
/// Dormant until `trigger`, then ramps at `ramp` times global progress. The
/// depth ramp deliberately overshoots 0 at full progress (authored look);
/// scale saturates at 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CoverZoom {
    /// Global progress at which the cover starts moving.
    pub trigger: f64,
    /// Slope applied to progress past the trigger.
    pub ramp: f64,
}

impl Default for CoverZoom {
    fn default() -> Self {
        Self {
            trigger: 0.7,
            ramp: 4.0,
        }
    }
}

impl CoverZoom {
    /// Target of the cover element at global progress `progress`.
    pub fn target(&self, progress: f64) -> TargetState {
        let c = ((progress - self.trigger) * self.ramp).max(0.0);
        TargetState {
            position: Vec3::new(0.0, 0.0, SCATTER_START_Z + 1000.0 * c),
            scale: (c * 2.0).min(1.0),
            opacity: 1.0,
            color: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/mapper.rs"]
mod tests;
