//! Image transformation: bilevel conversion and target sizing.
//!
//! # Transform Order
//!
//! 1. [`to_bilevel`] dithers the decoded RGB image down to two tones
//! 2. [`resize`] brings the bilevel image to the size derived from the
//!    [`SizeFactor`], either by rescaling or by cropping the top-left corner
//!
//! Dithering before resizing means the resize step only ever sees black and
//! white pixels.

mod bilevel;
mod resize;
mod size;
mod types;

pub use bilevel::{to_bilevel, BilevelImage};
pub use resize::resize;
pub use size::{
    compute_target_size, SizeFactor, DEFAULT_SIZE_FACTOR, HEIGHT_BUDGET, MAX_SIZE_FACTOR,
    WIDTH_PER_FACTOR,
};
pub use types::{ResizeMode, TransformError};
