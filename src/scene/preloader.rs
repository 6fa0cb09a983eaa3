use crate::{
    animation::ease::Ease,
    foundation::{
        core::Progress,
        error::ChoreoResult,
        math::{Rng64, lerp},
    },
    progress::{band::Band, stagger::windowed_local},
};

/// Number of visible jumps the progress bar makes while loading.
const BAR_STEPS: usize = 5;
/// Bar targets before the final step are capped here.
const BAR_CAP: f64 = 0.9;

/// Setup inputs for [`Preloader`].
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct PreloaderConfig {
    /// Number of characters in the preloader logo after splitting.
    pub logo_char_count: usize,
    /// Number of footer lines after splitting.
    pub footer_line_count: usize,
    /// Seed for the sampled-once progress-bar step targets.
    pub seed: u64,
}

/// Everything the preloader wants on screen at one timeline position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PreloaderFrame {
    /// Per-character horizontal offsets in percent (100 offscreen right,
    /// 0 resting, -100 offscreen left).
    pub logo_chars: Vec<f64>,
    /// Per-line vertical offsets in percent.
    pub footer_lines: Vec<f64>,
    /// Progress bar horizontal scale in `[0, 1]`.
    pub bar_scale: f64,
    /// Progress bar opacity.
    pub bar_opacity: f64,
    /// Reveal mask scale (1 closed, 6 fully open).
    pub mask_scale: f64,
    /// Hero image scale settling toward 1.
    pub hero_scale: f64,
}

/// The load-time preloader choreography on a normalized `[0, 1]` timeline.
///
/// The host drives `timeline` from its clock instead of scroll position; the
/// same band machinery applies. The only randomness, the intermediate
/// progress-bar targets, is sampled once at setup from a seeded generator so
/// a given seed replays identically.
#[derive(Clone, Debug)]
pub struct Preloader {
    logo_char_count: usize,
    footer_line_count: usize,
    bar_targets: [f64; BAR_STEPS],
    logo_in: Band<()>,
    footer_in: Band<()>,
    bar_fill: Band<()>,
    logo_out: Band<()>,
    footer_out: Band<()>,
    bar_fade: Band<()>,
    mask_zoom: Band<()>,
    hero_settle: Band<()>,
}

impl Preloader {
    /// Assemble the preloader, or `None` when the splits produced nothing.
    pub fn build(config: PreloaderConfig) -> ChoreoResult<Option<Self>> {
        if config.logo_char_count == 0 || config.footer_line_count == 0 {
            tracing::warn!(
                logo_chars = config.logo_char_count,
                footer_lines = config.footer_line_count,
                "preloader skipped: split produced no elements"
            );
            return Ok(None);
        }

        let mut rng = Rng64::new(config.seed);
        let mut bar_targets = [0.0; BAR_STEPS];
        let mut current = 0.0;
        for (i, target) in bar_targets.iter_mut().enumerate() {
            *target = if i == BAR_STEPS - 1 {
                1.0
            } else {
                (current + rng.next_f64_01() * 0.3 + 0.1).min(BAR_CAP)
            };
            current = *target;
        }

        Ok(Some(Self {
            logo_char_count: config.logo_char_count,
            footer_line_count: config.footer_line_count,
            bar_targets,
            logo_in: Band::new(0.00, 0.18, ())?,
            footer_in: Band::new(0.04, 0.22, ())?,
            bar_fill: Band::new(0.05, 0.70, ())?,
            logo_out: Band::new(0.62, 0.80, ())?,
            footer_out: Band::new(0.62, 0.80, ())?,
            bar_fade: Band::new(0.76, 0.84, ())?,
            mask_zoom: Band::new(0.76, 1.00, ())?,
            hero_settle: Band::new(0.76, 1.00, ())?,
        }))
    }

    /// The sampled progress-bar step targets (nondecreasing, final step 1).
    pub fn bar_targets(&self) -> &[f64] {
        &self.bar_targets
    }

    /// Compute the full frame at a normalized timeline position.
    #[tracing::instrument(skip(self))]
    pub fn frame(&self, timeline: Progress) -> PreloaderFrame {
        let t = timeline.clamped();

        let logo_chars = (0..self.logo_char_count)
            .map(|i| {
                let t_in = Ease::InOutQuint.apply(windowed_local(
                    self.logo_in.local(t),
                    i,
                    0.05,
                    self.logo_char_count,
                ));
                let t_out = Ease::InOutQuint.apply(windowed_local(
                    self.logo_out.local(t),
                    i,
                    0.05,
                    self.logo_char_count,
                ));
                100.0 * (1.0 - t_in) - 100.0 * t_out
            })
            .collect();

        let footer_lines = (0..self.footer_line_count)
            .map(|i| {
                let t_in = Ease::InOutQuint.apply(windowed_local(
                    self.footer_in.local(t),
                    i,
                    0.1,
                    self.footer_line_count,
                ));
                let t_out = Ease::InOutQuint.apply(windowed_local(
                    self.footer_out.local(t),
                    i,
                    0.1,
                    self.footer_line_count,
                ));
                100.0 * (1.0 - t_in) - 100.0 * t_out
            })
            .collect();

        PreloaderFrame {
            logo_chars,
            footer_lines,
            bar_scale: self.bar_scale(self.bar_fill.local(t)),
            bar_opacity: 1.0 - Ease::OutCubic.apply(self.bar_fade.local(t)),
            mask_scale: lerp(1.0, 6.0, Ease::OutQuart.apply(self.mask_zoom.local(t))),
            hero_scale: lerp(1.5, 1.0, Ease::OutQuart.apply(self.hero_settle.local(t))),
        }
    }

    /// Bar scale at fill-band-local progress: five eased jumps toward the
    /// sampled targets.
    fn bar_scale(&self, local: f64) -> f64 {
        let scaled = local * BAR_STEPS as f64;
        let step = (scaled.floor() as usize).min(BAR_STEPS - 1);
        let step_local = scaled - step as f64;
        let from = if step == 0 {
            0.0
        } else {
            self.bar_targets[step - 1]
        };
        lerp(from, self.bar_targets[step], Ease::OutCubic.apply(step_local))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/preloader.rs"]
mod tests;
