use std::slice;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// A color buffer stored as an ordered list of [`Color`] values.
///
/// Mutation replaces the color at an index rather than editing its channels.
pub struct SequenceBuffer<const N: usize = 3>(Vec<Color<N>>);

impl<const N: usize> SequenceBuffer<N> {
	pub fn new(colors: Vec<Color<N>>) -> Self {
		return SequenceBuffer(colors);
	}

	/// Creates a buffer of `len` copies of `color`
	pub fn filled(len: usize, color: Color<N>) -> Self {
		return SequenceBuffer(vec![color; len]);
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<Color<N>> {
		return self.0.get(index).copied();
	}

	/// Replaces the color at `index`.
	///
	/// # Panics
	/// Panics if `index` is out of bounds.
	pub fn set(&mut self, index: usize, color: Color<N>) {
		self.0[index] = color;
	}

	pub fn colors(&self) -> &[Color<N>] {
		&self.0
	}

	pub(crate) fn colors_mut(&mut self) -> &mut [Color<N>] {
		&mut self.0
	}

	pub fn into_colors(self) -> Vec<Color<N>> {
		self.0
	}

	pub fn to_dense(&self) -> DenseBuffer<N> {
		return DenseBuffer::from_colors(&self.0);
	}
}

impl<const N: usize> From<Vec<Color<N>>> for SequenceBuffer<N> {
	fn from(colors: Vec<Color<N>>) -> Self {
		return SequenceBuffer(colors);
	}
}

impl<const N: usize> FromIterator<Color<N>> for SequenceBuffer<N> {
	fn from_iter<I: IntoIterator<Item = Color<N>>>(iter: I) -> Self {
		return SequenceBuffer(iter.into_iter().collect());
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
/// An error that could occur while building a color buffer from raw channel data
pub enum BufferError {
	#[error("{len} bytes cannot be split into whole colors of {channels} channels.")]
	RaggedData { len: usize, channels: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
/// A color buffer stored as one contiguous block of channel bytes.
///
/// Colors are laid out back to back, so the channels of color `i` live at
/// `i * N .. (i + 1) * N`. Mutation writes channel bytes directly.
pub struct DenseBuffer<const N: usize = 3> {
	data: Vec<u8>,
}

impl<const N: usize> DenseBuffer<N> {
	/// Creates an all-black buffer holding `len` colors
	pub fn new(len: usize) -> Self {
		return DenseBuffer { data: vec![0; len * N] };
	}

	pub fn from_colors(colors: &[Color<N>]) -> Self {
		let mut data = Vec::with_capacity(colors.len() * N);
		for color in colors {
			data.extend_from_slice(color.as_slice());
		}
		return DenseBuffer { data };
	}

	/// Wraps a flat block of channel bytes, checking that it holds whole colors
	pub fn from_bytes(data: Vec<u8>) -> Result<Self, BufferError> {
		if data.len() % N != 0 {
			return Err(BufferError::RaggedData {
				len: data.len(),
				channels: N,
			});
		}
		return Ok(DenseBuffer { data });
	}

	pub fn len(&self) -> usize {
		self.data.len() / N
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<Color<N>> {
		let start = index.checked_mul(N)?;
		let channels = self.data.get(start..start.checked_add(N)?)?;
		return <[u8; N]>::try_from(channels).ok().map(Color);
	}

	/// Overwrites the channels of the color at `index`.
	///
	/// # Panics
	/// Panics if `index` is out of bounds.
	pub fn set(&mut self, index: usize, color: Color<N>) {
		self.data[index * N..(index + 1) * N].copy_from_slice(color.as_slice());
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}

	pub fn as_bytes_mut(&mut self) -> &mut [u8] {
		&mut self.data
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.data
	}

	pub fn to_sequence(&self) -> SequenceBuffer<N> {
		return self
			.data
			.chunks_exact(N)
			.map(Color::<N>::from_slice)
			.collect();
	}
}

impl<const N: usize> TryFrom<Vec<u8>> for DenseBuffer<N> {
	type Error = BufferError;
	fn try_from(data: Vec<u8>) -> Result<Self, BufferError> {
		return DenseBuffer::from_bytes(data);
	}
}

impl<const N: usize> From<DenseBuffer<N>> for Vec<u8> {
	fn from(buffer: DenseBuffer<N>) -> Self {
		return buffer.data;
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// A color buffer in either physical representation.
///
/// Every operation in this crate accepts both variants, and the two can be
/// freely mixed. Equality is logical: a sequence buffer equals a dense buffer
/// holding the same colors.
///
/// ```rust
/// # use pixelmix_lib::{colors, mixer_utils::buffer::{ColorBuffer, DenseBuffer}};
/// let sequence = ColorBuffer::from(vec![colors::RED, colors::BLUE]);
/// let dense = ColorBuffer::from(DenseBuffer::from_colors(&[colors::RED, colors::BLUE]));
/// assert_eq!(sequence, dense);
/// ```
pub enum ColorBuffer<const N: usize = 3> {
	Sequence(SequenceBuffer<N>),
	Dense(DenseBuffer<N>),
}

impl<const N: usize> ColorBuffer<N> {
	pub fn len(&self) -> usize {
		match self {
			ColorBuffer::Sequence(buffer) => buffer.len(),
			ColorBuffer::Dense(buffer) => buffer.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Number of channels in every color of this buffer
	pub const fn channels(&self) -> usize {
		N
	}

	pub fn get(&self, index: usize) -> Option<Color<N>> {
		match self {
			ColorBuffer::Sequence(buffer) => buffer.get(index),
			ColorBuffer::Dense(buffer) => buffer.get(index),
		}
	}

	/// # Panics
	/// Panics if `index` is out of bounds.
	pub fn set(&mut self, index: usize, color: Color<N>) {
		match self {
			ColorBuffer::Sequence(buffer) => buffer.set(index, color),
			ColorBuffer::Dense(buffer) => buffer.set(index, color),
		}
	}

	/// Iterates over the channels of each color, in buffer order
	pub fn rows(&self) -> Rows<'_, N> {
		match self {
			ColorBuffer::Sequence(buffer) => Rows::Sequence(buffer.colors().iter()),
			ColorBuffer::Dense(buffer) => Rows::Dense(buffer.as_bytes().chunks_exact(N)),
		}
	}

	pub fn to_colors(&self) -> Vec<Color<N>> {
		match self {
			ColorBuffer::Sequence(buffer) => buffer.colors().to_vec(),
			ColorBuffer::Dense(buffer) => buffer.to_sequence().into_colors(),
		}
	}

	pub fn to_dense(&self) -> DenseBuffer<N> {
		match self {
			ColorBuffer::Sequence(buffer) => buffer.to_dense(),
			ColorBuffer::Dense(buffer) => buffer.clone(),
		}
	}

	pub fn to_sequence(&self) -> SequenceBuffer<N> {
		match self {
			ColorBuffer::Sequence(buffer) => buffer.clone(),
			ColorBuffer::Dense(buffer) => buffer.to_sequence(),
		}
	}
}

impl<const N: usize> PartialEq for ColorBuffer<N> {
	fn eq(&self, other: &Self) -> bool {
		return self.len() == other.len() && self.rows().eq(other.rows());
	}
}
impl<const N: usize> Eq for ColorBuffer<N> {}

impl<const N: usize> From<SequenceBuffer<N>> for ColorBuffer<N> {
	fn from(buffer: SequenceBuffer<N>) -> Self {
		return ColorBuffer::Sequence(buffer);
	}
}

impl<const N: usize> From<DenseBuffer<N>> for ColorBuffer<N> {
	fn from(buffer: DenseBuffer<N>) -> Self {
		return ColorBuffer::Dense(buffer);
	}
}

impl<const N: usize> From<Vec<Color<N>>> for ColorBuffer<N> {
	fn from(colors: Vec<Color<N>>) -> Self {
		return ColorBuffer::Sequence(SequenceBuffer(colors));
	}
}

/// Channel view over either buffer representation, yielded by [`ColorBuffer::rows`]
pub enum Rows<'a, const N: usize> {
	Sequence(slice::Iter<'a, Color<N>>),
	Dense(slice::ChunksExact<'a, u8>),
}

impl<'a, const N: usize> Iterator for Rows<'a, N> {
	type Item = &'a [u8];

	#[inline]
	fn next(&mut self) -> Option<&'a [u8]> {
		match self {
			Rows::Sequence(iter) => iter.next().map(|color| color.as_slice()),
			Rows::Dense(iter) => iter.next(),
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match self {
			Rows::Sequence(iter) => iter.size_hint(),
			Rows::Dense(iter) => iter.size_hint(),
		}
	}
}

impl<'a, const N: usize> ExactSizeIterator for Rows<'a, N> {}
