//! Marionette is a 2.5D articulated puppet: a fixed humanoid figure (head, torso,
//! two arms with fully articulated hands) posed from a flat map of named channels and
//! drawn as thick rounded strokes through a small 2D canvas abstraction.
//!
//! # Frame overview
//!
//! 1. **Channels**: a [`ChannelSet`] (optionally smoothed by an [`Animator`]) names every
//!    pose parameter: hand placement, wrist and finger angles, head turn, mouth shape.
//! 2. **Pose**: every [`model::point::Point`] is reset to rest, then driven through
//!    rotations, shifts, weighted blends and the two-bone elbow solve.
//! 3. **Draw**: shapes are painted back to front by `(layer, depth, creation order)`
//!    onto any [`Canvas2d`], such as the [`RecordingCanvas`] or the `vello_cpu`
//!    backed [`CpuCanvas`].
//!
//! Key properties:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same proportions, channels and canvas size always produce
//!   the same draw commands.
//! - **Scale on demand**: the figure is rebuilt only when the target canvas size changes
//!   the fitted scale.
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod animation;
pub mod features;
pub mod foundation;
pub mod model;
pub mod puppet;
pub mod render;
pub mod rig;
pub mod transform;

pub use animation::{
    animator::Animator,
    channels::{ChannelSet, ChannelValue},
};
pub use foundation::{
    core::{Rgba8, Vec3},
    error::{PuppetError, PuppetResult},
};
pub use puppet::{Puppet, PuppetConfig};
pub use render::{
    cpu::{CpuCanvas, FrameRGBA},
    graphics::{Canvas2d, Graphics},
    record::{DrawCommand, RecordingCanvas},
};
pub use rig::Proportions;
