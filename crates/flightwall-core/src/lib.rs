#![cfg_attr(not(test), no_std)]

//! Board-agnostic flight card rendering for fixed-size LED matrices.
//!
//! Everything here draws through the [`canvas::Canvas`] trait and reads time
//! through [`cycler::Clock`], so the whole card pipeline runs on the host.

extern crate alloc;

pub mod canvas;
pub mod color;
pub mod compositor;
pub mod cycler;
pub mod font;
pub mod layout;
pub mod logo;
pub mod model;
pub mod render;
pub mod source;
pub mod telemetry;
pub mod text_policy;

#[cfg(test)]
mod testing;

pub use canvas::Canvas;
pub use color::Rgb565;
pub use cycler::{CardCycler, Clock, Selection};
pub use layout::{CardLayout, LayoutConstants, LayoutError, LineSpec};
pub use model::{Endpoint, FlightRecord, Telemetry};
pub use render::{CardRenderer, CardStyle, RendererConfig, Shown};
