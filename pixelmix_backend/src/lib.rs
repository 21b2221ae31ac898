pub mod color;
pub mod colors;
pub mod mixer;
pub mod mixer_utils;

#[cfg(test)]
mod tests;

pub use color::{Color, MAX};
pub use mixer::{Mixer, MixerError};
pub use mixer_utils::{
	buffer::{BufferError, ColorBuffer, DenseBuffer, SequenceBuffer},
	buffer_kind::{is_dense, select_math, MathImpl},
	channel_math::{add, add_scaled, clear, copy, ColorBufferOps},
};
