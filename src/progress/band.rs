use crate::foundation::{
    error::{ChoreoError, ChoreoResult},
    math::clamp01,
};

/// A sub-range of progress within which one specific sub-animation is active.
///
/// Bands are half-open: a band owns `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Band<I> {
    /// Inclusive lower bound in `[0, 1]`.
    pub start: f64,
    /// Exclusive upper bound in `(start, 1]`.
    pub end: f64,
    /// Scene-defined identifier for the sub-animation this band drives.
    pub id: I,
}

impl<I: Copy> Band<I> {
    /// Build a band, validating `0 <= start < end <= 1`.
    pub fn new(start: f64, end: f64, id: I) -> ChoreoResult<Self> {
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) {
            return Err(ChoreoError::validation(
                "Band bounds must lie within [0, 1]",
            ));
        }
        if start >= end {
            return Err(ChoreoError::validation("Band start must be < end"));
        }
        Ok(Self { start, end, id })
    }

    /// Whether `progress` falls inside `[start, end)`.
    pub fn contains(&self, progress: f64) -> bool {
        self.start <= progress && progress < self.end
    }

    /// Band-local progress `(p - start) / (end - start)`, clamped to `[0, 1]`.
    pub fn local(&self, progress: f64) -> f64 {
        clamp01((progress - self.start) / (self.end - self.start))
    }
}

/// Where a progress value landed relative to a [`BandSet`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum BandPosition<I> {
    /// Below the first band's start; the "before" terminal state applies.
    Before,
    /// Inside a band, with that band's local progress.
    Within {
        /// Identifier of the active band.
        id: I,
        /// Band-local progress in `[0, 1]`.
        local: f64,
    },
    /// In a gap between two authored bands.
    Between {
        /// Identifier of the band that ended most recently.
        prev: I,
        /// Identifier of the next band to start.
        next: I,
    },
    /// At or beyond the last band's end; the "after" terminal state applies.
    After,
}

/// An ordered set of bands partitioning (part of) `[0, 1]`.
///
/// Bands are kept sorted by `start`. Overlaps are permitted; resolution picks
/// the first band in ascending start order that contains the progress value.
/// Multiple independent sets may coexist per scene and are never merged.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BandSet<I> {
    bands: Vec<Band<I>>,
}

impl<I: Copy> BandSet<I> {
    /// Build a set from authored bands, validating each and sorting by start.
    pub fn new(mut bands: Vec<Band<I>>) -> ChoreoResult<Self> {
        if bands.is_empty() {
            return Err(ChoreoError::validation(
                "BandSet must contain at least one band",
            ));
        }
        for b in &bands {
            // Re-run the constructor checks so deserialized data is covered.
            Band::new(b.start, b.end, b.id)?;
        }
        bands.sort_by(|a, b| a.start.total_cmp(&b.start));
        Ok(Self { bands })
    }

    /// The authored bands in ascending start order.
    pub fn bands(&self) -> &[Band<I>] {
        &self.bands
    }

    /// Resolve which band (if any) is active at `progress`.
    pub fn resolve(&self, progress: f64) -> BandPosition<I> {
        let first = self.bands[0];
        if progress < first.start {
            return BandPosition::Before;
        }
        // With overlapping bands the latest end is not necessarily the last
        // band's, so take the maximum.
        let max_end = self
            .bands
            .iter()
            .map(|b| b.end)
            .fold(f64::NEG_INFINITY, f64::max);
        if progress >= max_end {
            return BandPosition::After;
        }
        for b in &self.bands {
            if b.contains(progress) {
                return BandPosition::Within {
                    id: b.id,
                    local: b.local(progress),
                };
            }
        }
        // In a gap: find the neighbors. `progress` is past first.start, below
        // max_end, and inside no band, so some band must still start after it
        // (otherwise the band carrying max_end would have contained it).
        let mut prev = first;
        for b in &self.bands {
            if b.end <= progress {
                prev = *b;
            }
        }
        match self.bands.iter().find(|b| b.start > progress) {
            Some(next) => BandPosition::Between {
                prev: prev.id,
                next: next.id,
            },
            None => BandPosition::After,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/band.rs"]
mod tests;
