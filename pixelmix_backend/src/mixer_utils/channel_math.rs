//! Saturating per-channel arithmetic over color buffers.
//!
//! Every operation exists twice, once per buffer representation, behind the
//! [`ColorBufferOps`] trait. The free functions in this module pick the right
//! one from the target buffer, so callers never need to know which
//! representation they hold.
//!
//! Buffers passed together must have the same length. This is only checked in
//! debug builds.

use crate::color::{Color, MAX};

use super::{
	buffer::{ColorBuffer, DenseBuffer, SequenceBuffer},
	buffer_kind::{is_dense, select_math},
};

/// In-place operations shared by both buffer representations
pub trait ColorBufferOps<const N: usize> {
	/// Adds `source * scale` to every channel, saturating at 0 and [`MAX`].
	///
	/// A scale of 0 leaves the buffer untouched. Negative scales subtract.
	fn add_scaled(&mut self, source: &ColorBuffer<N>, scale: f64);

	/// Sets every channel to 0
	fn clear(&mut self);

	/// Overwrites every color with the matching color of `source`
	fn copy_from(&mut self, source: &ColorBuffer<N>);
}

/// Adds `source * scale` to a single channel value.
///
/// The scaled source is rounded half-to-even before it is added, and the sum
/// is clamped to `0..=MAX`. A scale that makes the product undefined (NaN, or
/// infinity times a zero channel) leaves the target unchanged.
///
/// ```rust
/// # use pixelmix_lib::mixer_utils::channel_math::scaled_add;
/// assert_eq!(scaled_add(0, 255, 1.0 / 3.0), 85);
/// assert_eq!(scaled_add(200, 100, 1.0), 255);
/// assert_eq!(scaled_add(20, 100, -1.0), 0);
/// ```
#[inline]
pub fn scaled_add(target: u8, source: u8, scale: f64) -> u8 {
	if scale == 1.0 {
		return target.saturating_add(source);
	}
	let faded_value = (f64::from(source) * scale).round_ties_even();
	if faded_value.is_nan() {
		return target;
	}
	let new_value = f64::from(target) + faded_value;
	return new_value.clamp(0f64, f64::from(MAX)) as u8;
}

#[inline]
fn add_row(target: &mut [u8], source: &[u8], scale: f64) {
	for (target, source) in target.iter_mut().zip(source) {
		*target = scaled_add(*target, *source, scale);
	}
}

impl<const N: usize> ColorBufferOps<N> for SequenceBuffer<N> {
	fn add_scaled(&mut self, source: &ColorBuffer<N>, scale: f64) {
		debug_assert_eq!(self.len(), source.len(), "color buffers differ in length");
		if scale == 0.0 {
			return;
		}
		for (color, row) in self.colors_mut().iter_mut().zip(source.rows()) {
			let mut channels = color.0;
			add_row(&mut channels, row, scale);
			*color = Color(channels);
		}
	}

	fn clear(&mut self) {
		self.colors_mut().fill(Color::<N>::BLACK);
	}

	fn copy_from(&mut self, source: &ColorBuffer<N>) {
		debug_assert_eq!(self.len(), source.len(), "color buffers differ in length");
		match source {
			ColorBuffer::Sequence(source) => self.colors_mut().copy_from_slice(source.colors()),
			ColorBuffer::Dense(source) => {
				for (color, row) in self.colors_mut().iter_mut().zip(source.as_bytes().chunks_exact(N)) {
					*color = Color::<N>::from_slice(row);
				}
			}
		}
	}
}

impl<const N: usize> ColorBufferOps<N> for DenseBuffer<N> {
	fn add_scaled(&mut self, source: &ColorBuffer<N>, scale: f64) {
		debug_assert_eq!(self.len(), source.len(), "color buffers differ in length");
		if scale == 0.0 {
			return;
		}
		match source {
			// Same layout on both sides, so channels line up without regard to color boundaries
			ColorBuffer::Dense(source) => add_row(self.as_bytes_mut(), source.as_bytes(), scale),
			ColorBuffer::Sequence(source) => {
				for (target, color) in self.as_bytes_mut().chunks_exact_mut(N).zip(source.colors()) {
					add_row(target, color.as_slice(), scale);
				}
			}
		}
	}

	fn clear(&mut self) {
		self.as_bytes_mut().fill(0);
	}

	fn copy_from(&mut self, source: &ColorBuffer<N>) {
		debug_assert_eq!(self.len(), source.len(), "color buffers differ in length");
		match source {
			ColorBuffer::Dense(source) => self.as_bytes_mut().copy_from_slice(source.as_bytes()),
			ColorBuffer::Sequence(source) => {
				for (target, color) in self.as_bytes_mut().chunks_exact_mut(N).zip(source.colors()) {
					target.copy_from_slice(color.as_slice());
				}
			}
		}
	}
}

impl<const N: usize> ColorBufferOps<N> for ColorBuffer<N> {
	fn add_scaled(&mut self, source: &ColorBuffer<N>, scale: f64) {
		select_math(is_dense(self)).add(self, source, scale);
	}

	fn clear(&mut self) {
		select_math(is_dense(self)).clear(self);
	}

	fn copy_from(&mut self, source: &ColorBuffer<N>) {
		select_math(is_dense(self)).copy(self, source);
	}
}

/// Saturating addition of `source` onto `target`
///
/// ```rust
/// # use pixelmix_lib::{colors::*, mixer_utils::{buffer::ColorBuffer, channel_math}};
/// let mut target = ColorBuffer::from(vec![RED, GREEN]);
/// channel_math::add(&mut target, &ColorBuffer::from(vec![BLUE, BLUE]));
/// assert_eq!(target, ColorBuffer::from(vec![MAGENTA, CYAN]));
/// ```
pub fn add<const N: usize>(target: &mut ColorBuffer<N>, source: &ColorBuffer<N>) {
	add_scaled(target, source, 1.0);
}

/// Saturating addition of `source * scale` onto `target`
pub fn add_scaled<const N: usize>(target: &mut ColorBuffer<N>, source: &ColorBuffer<N>, scale: f64) {
	target.add_scaled(source, scale);
}

pub fn clear<const N: usize>(target: &mut ColorBuffer<N>) {
	target.clear();
}

pub fn copy<const N: usize>(dst: &mut ColorBuffer<N>, src: &ColorBuffer<N>) {
	dst.copy_from(src);
}
