use crate::{
    foundation::{
        core::{Progress, Rgb, TargetState, Vec2, Viewport},
        error::{ChoreoError, ChoreoResult},
    },
    progress::{
        band::{Band, BandPosition, BandSet},
        mapper::{CoverZoom, SCATTER_DIRECTIONS, ScatterField},
        stagger::{StaggerSpec, WordCascade, WordFadeOut},
    },
    scene::sink::{SlotId, TargetSink},
};

/// Phases of the spotlight's outro chain, in authored scroll order.
///
/// The literal thresholds are authored constants carried over from the page
/// design; gaps between them are intentional (the cover image owns the
/// `0.69..0.85` stretch).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OutroPhase {
    /// Word-by-word reveal of the outro header (`0.50..0.58`).
    Cascade,
    /// Header stays fully visible (`0.58..0.67`).
    Hold,
    /// Header fades out and drifts up (`0.67..0.69`).
    FadeOut,
    /// Nothing but the cover on screen (`0.69..0.85`).
    Blank,
    /// Companies panel slides in (`0.85..0.88`).
    Companies,
}

/// Opacity plus optional color override for one revealed word.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WordState {
    /// Word opacity in `[0, 1]`.
    pub opacity: f64,
    /// Color override once the word has started revealing.
    pub color: Option<Rgb>,
}

/// Pose of the outro header container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeaderPose {
    /// Container opacity in `[0, 1]`.
    pub opacity: f64,
    /// Vertical offset in logical pixels (negative is up).
    pub y: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

/// Pose of the companies panel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelPose {
    /// Panel opacity in `[0, 1]`.
    pub opacity: f64,
    /// Vertical offset in logical pixels.
    pub y: f64,
    /// Whether the panel should accept pointer events.
    pub interactive: bool,
}

impl PanelPose {
    fn hidden() -> Self {
        Self {
            opacity: 0.0,
            y: 50.0,
            interactive: false,
        }
    }

    fn shown() -> Self {
        Self {
            opacity: 1.0,
            y: 0.0,
            interactive: true,
        }
    }
}

/// Everything the spotlight scene wants on screen at one progress value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpotlightFrame {
    /// Section background color.
    pub background: Rgb,
    /// Scattered gallery images, in slot order.
    pub images: Vec<TargetState>,
    /// The cover image.
    pub cover: TargetState,
    /// Intro header word opacities.
    pub intro_words: Vec<f64>,
    /// Outro header word states.
    pub outro_words: Vec<WordState>,
    /// Outro header container pose.
    pub outro_header: HeaderPose,
    /// Companies panel pose.
    pub companies: PanelPose,
}

/// Setup inputs for [`Spotlight`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SpotlightConfig {
    /// Number of scattered gallery images.
    pub image_count: usize,
    /// Number of words in the intro header.
    pub intro_word_count: usize,
    /// Number of words in the outro header.
    pub outro_word_count: usize,
    /// Host viewport at setup time.
    pub viewport: Viewport,
    /// Per-image scatter directions; defaults to the authored table.
    pub directions: Vec<Vec2>,
}

impl SpotlightConfig {
    /// Config with the authored direction table.
    pub fn new(
        image_count: usize,
        intro_word_count: usize,
        outro_word_count: usize,
        viewport: Viewport,
    ) -> Self {
        Self {
            image_count,
            intro_word_count,
            outro_word_count,
            viewport,
            directions: SCATTER_DIRECTIONS.to_vec(),
        }
    }

    /// Serialize the config to JSON.
    pub fn to_json(&self) -> ChoreoResult<String> {
        serde_json::to_string(self).map_err(|e| ChoreoError::serde(e.to_string()))
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> ChoreoResult<Self> {
        serde_json::from_str(json).map_err(|e| ChoreoError::serde(e.to_string()))
    }
}

/// The pinned 3D gallery spotlight scene.
///
/// All constants are fixed at setup; `frame` is a pure function of progress.
#[derive(Clone, Debug)]
pub struct Spotlight {
    scatter: ScatterField,
    image_stagger: StaggerSpec,
    cover: CoverZoom,
    intro_band: Band<()>,
    intro_fade: WordFadeOut,
    outro_cascade: WordCascade,
    outro_bands: BandSet<OutroPhase>,
}

impl Spotlight {
    /// Assemble the scene, or `None` when required elements are missing.
    ///
    /// A missing collection (no images, no header words) skips the scene
    /// rather than running a partial animation.
    pub fn build(config: SpotlightConfig) -> ChoreoResult<Option<Self>> {
        if config.image_count == 0
            || config.intro_word_count == 0
            || config.outro_word_count == 0
        {
            tracing::warn!(
                images = config.image_count,
                intro_words = config.intro_word_count,
                outro_words = config.outro_word_count,
                "spotlight scene skipped: required elements missing"
            );
            return Ok(None);
        }

        let scatter = ScatterField::new(&config.directions, config.image_count, config.viewport)?;
        let outro_bands = BandSet::new(vec![
            Band::new(0.50, 0.58, OutroPhase::Cascade)?,
            Band::new(0.58, 0.67, OutroPhase::Hold)?,
            Band::new(0.67, 0.69, OutroPhase::FadeOut)?,
            Band::new(0.69, 0.85, OutroPhase::Blank)?,
            Band::new(0.85, 0.88, OutroPhase::Companies)?,
        ])?;

        Ok(Some(Self {
            scatter,
            image_stagger: StaggerSpec::new(0.03, 4.0)?,
            cover: CoverZoom::default(),
            intro_band: Band::new(0.38, 0.47, ())?,
            intro_fade: WordFadeOut::new(config.intro_word_count, 0.1)?,
            outro_cascade: WordCascade::new(config.outro_word_count, 0.02, 0.025)?,
            outro_bands,
        }))
    }

    /// Number of scattered images.
    pub fn image_count(&self) -> usize {
        self.scatter.len()
    }

    /// Slot of gallery image `index` in the scene's slot layout.
    pub fn image_slot(&self, index: usize) -> SlotId {
        SlotId(index)
    }

    /// Slot of the cover image in the scene's slot layout.
    pub fn cover_slot(&self) -> SlotId {
        SlotId(self.scatter.len())
    }

    /// Compute the full frame at `progress`.
    #[tracing::instrument(skip(self))]
    pub fn frame(&self, progress: Progress) -> SpotlightFrame {
        let p = progress.clamped();

        let images = self
            .image_stagger
            .iter(p, self.scatter.len())
            .map(|(i, element_progress)| self.scatter.target(i, element_progress))
            .collect();
        let cover = self.cover.target(p);

        let intro_words = if self.intro_band.contains(p) {
            let local = self.intro_band.local(p);
            self.intro_fade.opacities(local).map(|(_, o)| o).collect()
        } else if p < self.intro_band.start {
            vec![1.0; self.intro_fade.word_count]
        } else {
            vec![0.0; self.intro_fade.word_count]
        };

        let (background, outro_words, outro_header, companies) = self.outro(p);

        SpotlightFrame {
            background,
            images,
            cover,
            intro_words,
            outro_words,
            outro_header,
            companies,
        }
    }

    /// Push image and cover targets into the host sink.
    ///
    /// Slot layout: `0..image_count` are gallery images, `image_count` is the
    /// cover. Header words and panel poses go through [`Self::frame`].
    pub fn apply_images(&self, progress: Progress, sink: &mut dyn TargetSink) {
        let p = progress.clamped();
        for (i, element_progress) in self.image_stagger.iter(p, self.scatter.len()) {
            sink.apply(self.image_slot(i), &self.scatter.target(i, element_progress));
        }
        sink.apply(self.cover_slot(), &self.cover.target(p));
    }

    fn outro(&self, p: f64) -> (Rgb, Vec<WordState>, HeaderPose, PanelPose) {
        let words_done = || {
            vec![
                WordState {
                    opacity: 1.0,
                    color: Some(Rgb::BLACK),
                };
                self.outro_cascade.word_count
            ]
        };
        let header_resting = HeaderPose {
            opacity: 1.0,
            y: 0.0,
            scale: 1.0,
        };

        match self.outro_bands.resolve(p) {
            BandPosition::Before => (
                Rgb::BLACK,
                vec![
                    WordState {
                        opacity: 0.0,
                        color: None,
                    };
                    self.outro_cascade.word_count
                ],
                header_resting,
                PanelPose::hidden(),
            ),
            BandPosition::Within {
                id: OutroPhase::Cascade,
                local,
            } => {
                // Background sweeps to white across the first half of the band.
                let background = Rgb::lerp(Rgb::BLACK, Rgb::WHITE, (local * 2.0).min(1.0));
                let words = self
                    .outro_cascade
                    .opacities(local)
                    .map(|(_, opacity)| WordState {
                        opacity,
                        color: (opacity > 0.0).then_some(Rgb::BLACK),
                    })
                    .collect();
                (background, words, header_resting, PanelPose::hidden())
            }
            BandPosition::Within {
                id: OutroPhase::Hold,
                ..
            } => (Rgb::WHITE, words_done(), header_resting, PanelPose::hidden()),
            BandPosition::Within {
                id: OutroPhase::FadeOut,
                local,
            } => (
                Rgb::WHITE,
                words_done(),
                HeaderPose {
                    opacity: 1.0 - local,
                    y: local * -30.0,
                    scale: 1.0,
                },
                PanelPose::hidden(),
            ),
            BandPosition::Within {
                id: OutroPhase::Blank,
                ..
            }
            | BandPosition::Between { .. } => (
                Rgb::WHITE,
                words_done(),
                HeaderPose {
                    opacity: 0.0,
                    y: -30.0,
                    scale: 1.0,
                },
                PanelPose::hidden(),
            ),
            BandPosition::Within {
                id: OutroPhase::Companies,
                local,
            } => (
                Rgb::WHITE,
                words_done(),
                HeaderPose {
                    opacity: 0.0,
                    y: -100.0,
                    scale: 1.0,
                },
                PanelPose {
                    opacity: local,
                    y: (1.0 - local) * 50.0,
                    interactive: local > 0.5,
                },
            ),
            BandPosition::After => (
                Rgb::WHITE,
                words_done(),
                HeaderPose {
                    opacity: 0.0,
                    y: -100.0,
                    scale: 0.9,
                },
                PanelPose::shown(),
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/spotlight.rs"]
mod tests;
