use crate::foundation::{
    core::ElementSlot,
    error::{ChoreoError, ChoreoResult},
    math::clamp01,
};

/// Per-element progress under an index-based delay.
///
/// `max(0, (global - index * step_delay) * range_multiplier)`; the result is
/// deliberately unclamped above 1 so the consuming mapper decides the
/// terminal policy.
pub fn per_element_progress(
    global: f64,
    index: usize,
    step_delay: f64,
    range_multiplier: f64,
) -> f64 {
    ((global - index as f64 * step_delay) * range_multiplier).max(0.0)
}

/// Authored stagger parameters for an element collection.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaggerSpec {
    /// Delay between consecutive element indices, in global-progress units.
    pub step_delay: f64,
    /// Multiplier stretching the per-element window back toward `[0, 1]`.
    pub range_multiplier: f64,
}

impl StaggerSpec {
    /// Build a spec, validating both parameters are non-negative.
    pub fn new(step_delay: f64, range_multiplier: f64) -> ChoreoResult<Self> {
        if step_delay < 0.0 || range_multiplier < 0.0 {
            return Err(ChoreoError::validation(
                "StaggerSpec parameters must be non-negative",
            ));
        }
        Ok(Self {
            step_delay,
            range_multiplier,
        })
    }

    /// This spec's per-element progress for `index` at `global`.
    pub fn per_element(&self, global: f64, index: usize) -> f64 {
        per_element_progress(global, index, self.step_delay, self.range_multiplier)
    }

    /// Per-element progress for a slot, honoring its authored extra delay.
    pub fn for_slot(&self, global: f64, slot: ElementSlot) -> f64 {
        let delayed = global - slot.base_delay;
        per_element_progress(delayed, slot.index, self.step_delay, self.range_multiplier)
    }

    /// Lazy per-element progress for indices `0..count`.
    pub fn iter(&self, global: f64, count: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..count).map(move |i| (i, self.per_element(global, i)))
    }
}

/// Staggered local progress where every element shares a window width and the
/// last element still finishes exactly at `global = 1`.
///
/// Requires `step_delay * (count - 1) < 1`; the result is clamped to `[0, 1]`.
pub fn windowed_local(global: f64, index: usize, step_delay: f64, count: usize) -> f64 {
    let span = 1.0 - step_delay * count.saturating_sub(1) as f64;
    if span <= 0.0 {
        // Degenerate authoring: everything snaps at its start offset.
        return if global >= index as f64 * step_delay {
            1.0
        } else {
            0.0
        };
    }
    clamp01((global - index as f64 * step_delay) / span)
}

/// Word-by-word reveal with a pause reserved after each word.
///
/// Each word owns a sub-interval of the band-local `[0, 1]` range of width
/// `(word_duration + pause_duration) / total_duration`; a word is untouched
/// before its sub-interval, fades linearly within the word portion, and is
/// done once local progress passes the word portion's end.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WordCascade {
    /// Number of words in the collection.
    pub word_count: usize,
    /// Fade duration per word, in band-relative units.
    pub word_duration: f64,
    /// Pause after each word, in band-relative units.
    pub pause_duration: f64,
}

impl WordCascade {
    /// Build a cascade, validating the counts and durations.
    pub fn new(word_count: usize, word_duration: f64, pause_duration: f64) -> ChoreoResult<Self> {
        if word_count == 0 {
            return Err(ChoreoError::validation("WordCascade needs at least 1 word"));
        }
        if word_duration <= 0.0 || pause_duration < 0.0 {
            return Err(ChoreoError::validation(
                "WordCascade durations must be positive (pause may be 0)",
            ));
        }
        Ok(Self {
            word_count,
            word_duration,
            pause_duration,
        })
    }

    fn total_duration(&self) -> f64 {
        self.word_count as f64 * (self.word_duration + self.pause_duration)
    }

    /// Opacity of word `index` at band-local progress `local`.
    pub fn opacity(&self, local: f64, index: usize) -> f64 {
        let slot = self.word_duration + self.pause_duration;
        let total = self.total_duration();
        let start = (index as f64 * slot) / total;
        let width = self.word_duration / total;
        let end = start + width;
        if local >= end {
            1.0
        } else if local <= start {
            0.0
        } else {
            (local - start) / width
        }
    }

    /// Lazy opacities for all words at `local`.
    pub fn opacities(&self, local: f64) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.word_count).map(move |i| (i, self.opacity(local, i)))
    }
}

/// Word-by-word fade-out where word `index`'s threshold is `index / count`.
///
/// A word is fully visible until band-local progress reaches its threshold,
/// then fades linearly over `fade_range`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WordFadeOut {
    /// Number of words in the collection.
    pub word_count: usize,
    /// Width of each word's fade window in band-relative units.
    pub fade_range: f64,
}

impl WordFadeOut {
    /// Build a fade-out, validating the counts and range.
    pub fn new(word_count: usize, fade_range: f64) -> ChoreoResult<Self> {
        if word_count == 0 {
            return Err(ChoreoError::validation(
                "WordFadeOut needs at least 1 word",
            ));
        }
        if fade_range <= 0.0 {
            return Err(ChoreoError::validation(
                "WordFadeOut fade_range must be positive",
            ));
        }
        Ok(Self {
            word_count,
            fade_range,
        })
    }

    /// Opacity of word `index` at band-local progress `local`.
    pub fn opacity(&self, local: f64, index: usize) -> f64 {
        let threshold = index as f64 / self.word_count as f64;
        if local >= threshold + self.fade_range {
            0.0
        } else if local <= threshold {
            1.0
        } else {
            1.0 - (local - threshold) / self.fade_range
        }
    }

    /// Lazy opacities for all words at `local`.
    pub fn opacities(&self, local: f64) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.word_count).map(move |i| (i, self.opacity(local, i)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/stagger.rs"]
mod tests;
