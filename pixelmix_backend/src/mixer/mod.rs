pub mod state;

use std::ops::Deref;

use log::{debug, trace};
use thiserror::Error;

#[cfg(feature = "composite-benchmark")]
use std::time::Instant;

use crate::{
	color::Color,
	mixer_utils::{
		buffer::ColorBuffer,
		buffer_kind::{is_dense, select_math, MathImpl},
		channel_math::ColorBufferOps,
	},
};

use self::state::Levels;

#[derive(Debug, Error, PartialEq, Eq)]
/// An error that could occur while building a mixer
pub enum MixerError {
	#[error("Layer {layer} holds {found} colors, but the base buffer holds {expected}.")]
	LayerLengthMismatch {
		layer: usize,
		expected: usize,
		found: usize,
	},
	#[error("Got {found} levels for {expected} layers.")]
	LevelCountMismatch { expected: usize, found: usize },
}

/// Blends an ordered stack of weighted layers onto a base buffer.
///
/// The mixer owns its buffers. Callers change layer contents through
/// [`Mixer::layer_mut`] and weights through [`Mixer::levels_mut`] between
/// frames, then call [`Mixer::clear`] and [`Mixer::composite`] to render the
/// next one.
///
/// ```rust
/// # use pixelmix_lib::{colors::*, mixer::Mixer, mixer_utils::buffer::ColorBuffer};
/// let base = ColorBuffer::from(vec![BLACK, BLACK]);
/// let layers = vec![
/// 	ColorBuffer::from(vec![RED, RED]),
/// 	ColorBuffer::from(vec![BLUE, GREEN]),
/// ];
/// let mut mixer = Mixer::new(base, layers).unwrap();
/// mixer.levels_mut().copy_from_slice(&[1.0, 1.0]);
/// mixer.composite();
/// assert_eq!(mixer.base(), &ColorBuffer::from(vec![MAGENTA, YELLOW]));
/// ```
pub struct Mixer<const N: usize = 3> {
	base: ColorBuffer<N>,
	layers: Vec<ColorBuffer<N>>,

	levels: Levels,

	/// Selected once for the base buffer, whose representation never changes
	math: MathImpl,
}

impl<const N: usize> Mixer<N> {
	/// Creates a mixer with every level set to 0
	pub fn new(base: ColorBuffer<N>, layers: Vec<ColorBuffer<N>>) -> Result<Self, MixerError> {
		let levels = Levels::zeroed(layers.len());
		return Mixer::with_levels(base, layers, levels);
	}

	pub fn with_levels(
		base: ColorBuffer<N>,
		layers: Vec<ColorBuffer<N>>,
		levels: impl Into<Levels>,
	) -> Result<Self, MixerError> {
		let levels = levels.into();
		if levels.len() != layers.len() {
			return Err(MixerError::LevelCountMismatch {
				expected: layers.len(),
				found: levels.len(),
			});
		}
		for (layer, buffer) in layers.iter().enumerate() {
			if buffer.len() != base.len() {
				return Err(MixerError::LayerLengthMismatch {
					layer,
					expected: base.len(),
					found: buffer.len(),
				});
			}
		}

		let math = select_math(is_dense(&base));
		debug!(
			"Created mixer with {} layers of {} colors ({:?} base)",
			layers.len(),
			base.len(),
			math,
		);

		return Ok(Mixer {
			base,
			layers,
			levels,
			math,
		});
	}

	/// Clears the base buffer. Layers are left alone.
	pub fn clear(&mut self) {
		self.math.clear(&mut self.base);
	}

	/// Adds every layer onto the base buffer at its current level.
	///
	/// This does not clear the base first. Call [`Mixer::clear`] beforehand to
	/// render a fresh frame.
	pub fn composite(&mut self) {
		self.composite_scaled(1.0);
	}

	/// Adds every layer onto the base buffer at its level times `factor`.
	///
	/// Layers are added one at a time in order, and each addition saturates
	/// against the result of the previous one. `factor` applies to this call
	/// only and does not change the levels.
	pub fn composite_scaled(&mut self, factor: f64) {
		#[cfg(feature = "composite-benchmark")]
		let start_bench = Instant::now();

		trace!("Compositing {} layers with factor {}", self.layers.len(), factor);
		for (layer, level) in self.layers.iter().zip(self.levels.iter()) {
			let scale = level * factor;
			if scale == 0.0 { continue } // Skip layers that contribute nothing
			self.math.add(&mut self.base, layer, scale);
		}

		#[cfg(feature = "composite-benchmark")]
		debug!("Composite took {:?}", start_bench.elapsed());
	}

	/// Weight of each layer, in layer order
	pub fn levels(&self) -> &[f64] {
		&self.levels
	}

	/// Weights can be changed freely between frames, but never added or removed
	pub fn levels_mut(&mut self) -> &mut [f64] {
		&mut self.levels
	}

	/// The output buffer
	pub fn base(&self) -> &ColorBuffer<N> {
		&self.base
	}

	pub fn base_mut(&mut self) -> BufferMut<'_, N> {
		BufferMut(&mut self.base)
	}

	pub fn layers(&self) -> &[ColorBuffer<N>] {
		&self.layers
	}

	pub fn layer(&self, index: usize) -> Option<&ColorBuffer<N>> {
		self.layers.get(index)
	}

	/// Gives access to a layer's colors. The layer cannot be replaced or resized.
	pub fn layer_mut(&mut self, index: usize) -> Option<BufferMut<'_, N>> {
		self.layers.get_mut(index).map(BufferMut)
	}

	pub fn layer_count(&self) -> usize {
		self.layers.len()
	}

	/// Takes the mixer apart, returning the base buffer, the layers, and the levels
	pub fn into_parts(self) -> (ColorBuffer<N>, Vec<ColorBuffer<N>>, Levels) {
		return (self.base, self.layers, self.levels);
	}
}

/// Mutable handle to one of a mixer's buffers.
///
/// Colors can be rewritten through it, but the buffer itself can't be swapped
/// out, so its length and representation stay the same.
pub struct BufferMut<'a, const N: usize>(&'a mut ColorBuffer<N>);

impl<'a, const N: usize> BufferMut<'a, N> {
	/// # Panics
	/// Panics if `index` is out of bounds.
	pub fn set(&mut self, index: usize, color: Color<N>) {
		self.0.set(index, color);
	}
}

impl<'a, const N: usize> Deref for BufferMut<'a, N> {
	type Target = ColorBuffer<N>;
	fn deref(&self) -> &ColorBuffer<N> {
		&*self.0
	}
}

impl<'a, const N: usize> ColorBufferOps<N> for BufferMut<'a, N> {
	fn add_scaled(&mut self, source: &ColorBuffer<N>, scale: f64) {
		self.0.add_scaled(source, scale);
	}

	fn clear(&mut self) {
		self.0.clear();
	}

	fn copy_from(&mut self, source: &ColorBuffer<N>) {
		self.0.copy_from(source);
	}
}
