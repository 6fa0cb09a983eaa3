use crate::{
    animation::ease::Ease,
    foundation::{core::Progress, error::ChoreoResult, math::lerp},
    progress::band::Band,
};

/// A single opacity fade over one band of a scroll range.
///
/// Models persistent chrome (site logo, contact button) that fades in over
/// one section and out over another; each such element holds one `Fade` per
/// scroll trigger, evaluated independently.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Fade {
    band: Band<()>,
    from: f64,
    to: f64,
    ease: Ease,
}

impl Fade {
    /// Fade from `from` to `to` across `start..end` of the trigger's range.
    pub fn new(start: f64, end: f64, from: f64, to: f64, ease: Ease) -> ChoreoResult<Self> {
        Ok(Self {
            band: Band::new(start, end, ())?,
            from,
            to,
            ease,
        })
    }

    /// Fade-in (0 to 1) convenience constructor.
    pub fn fade_in(start: f64, end: f64, ease: Ease) -> ChoreoResult<Self> {
        Self::new(start, end, 0.0, 1.0, ease)
    }

    /// Fade-out (1 to 0) convenience constructor.
    pub fn fade_out(start: f64, end: f64, ease: Ease) -> ChoreoResult<Self> {
        Self::new(start, end, 1.0, 0.0, ease)
    }

    /// Opacity at `progress`: terminal values outside the band, eased
    /// interpolation within.
    pub fn opacity(&self, progress: Progress) -> f64 {
        let p = progress.clamped();
        if p < self.band.start {
            self.from
        } else if p >= self.band.end {
            self.to
        } else {
            lerp(self.from, self.to, self.ease.apply(self.band.local(p)))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/fade.rs"]
mod tests;
