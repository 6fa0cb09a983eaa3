//! Choreo is a deterministic scroll-choreography core.
//!
//! Choreo turns a normalized scroll progress value into target visual
//! properties (position, scale, opacity, color) for collections of animated
//! elements. It is the pure middle of a scroll-animation stack: a host scroll
//! observer supplies progress, choreo computes per-element [`TargetState`]s,
//! and a host render-target setter applies them.
//!
//! # Pipeline overview
//!
//! 1. **Band scheduling**: a [`BandSet`] partitions `[0, 1]` into authored
//!    sub-ranges and resolves which sub-animation is active.
//! 2. **Stagger sequencing**: [`StaggerSpec`], [`WordCascade`], and
//!    [`WordFadeOut`] fan a band's local progress out to per-element progress.
//! 3. **Progress mapping**: [`Segment`], [`ScatterField`], and friends turn
//!    per-element progress into final property values.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Stateless per tick**: every frame is a pure function of
//!   `(progress, setup constants)`; replaying a progress value reproduces
//!   identical output.
//! - **Total over its domain**: out-of-range progress clamps, never errors;
//!   the per-tick path cannot fail.
//! - **No IO**: scenes are assembled from counts and viewport geometry the
//!   host already has; nothing is queried or rendered here.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod progress;
mod scene;

pub use animation::ease::Ease;
pub use foundation::core::{
    ElementSlot, MOBILE_BREAKPOINT_PX, Point, Progress, Rgb, TargetState, Vec2, Vec3, Viewport,
};
pub use foundation::error::{ChoreoError, ChoreoResult};
pub use progress::band::{Band, BandPosition, BandSet};
pub use progress::mapper::{CoverZoom, SCATTER_DIRECTIONS, ScatterField, Segment};
pub use progress::stagger::{
    StaggerSpec, WordCascade, WordFadeOut, per_element_progress, windowed_local,
};
pub use scene::fade::Fade;
pub use scene::hero_intro::{HeroIntro, HeroIntroConfig, HeroIntroFrame};
pub use scene::preloader::{Preloader, PreloaderConfig, PreloaderFrame};
pub use scene::reveal::Reveal;
pub use scene::sink::{BufferSink, SlotId, TargetSink};
pub use scene::spotlight::{
    HeaderPose, OutroPhase, PanelPose, Spotlight, SpotlightConfig, SpotlightFrame, WordState,
};
pub use scene::sticky_cards::{CardFrame, StickyCards};
