use std::{fmt, marker::PhantomData, ops::Index};

use serde::{
	de::{self, SeqAccess, Visitor},
	ser::SerializeTuple,
	Deserialize, Deserializer, Serialize, Serializer,
};

/// Highest value a single channel can hold
pub const MAX: u8 = u8::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A single color made up of `N` channels (red, green, blue for the default of 3).
///
/// Colors are plain values. Buffers replace them wholesale instead of editing
/// channels in place.
///
/// ```rust
/// # use pixelmix_lib::color::Color;
/// let orange = Color::rgb(255, 128, 0);
/// assert_eq!(orange[1], 128);
/// assert_eq!(orange, Color::from((255, 128, 0)));
/// ```
pub struct Color<const N: usize = 3>(pub [u8; N]);

impl<const N: usize> Color<N> {
	/// A color with every channel at zero
	pub const BLACK: Self = Color([0; N]);

	pub const fn new(channels: [u8; N]) -> Self {
		return Color(channels);
	}

	pub fn channels(&self) -> &[u8; N] {
		return &self.0;
	}

	pub fn as_slice(&self) -> &[u8] {
		return &self.0;
	}

	/// Builds a color from a row of exactly `N` channel bytes
	pub(crate) fn from_slice(channels: &[u8]) -> Self {
		let mut color = [0u8; N];
		color.copy_from_slice(channels);
		return Color(color);
	}
}

impl Color<3> {
	pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
		return Color([red, green, blue]);
	}
}

impl<const N: usize> Default for Color<N> {
	fn default() -> Self {
		return Self::BLACK;
	}
}

impl<const N: usize> Index<usize> for Color<N> {
	type Output = u8;
	fn index(&self, channel: usize) -> &u8 {
		return &self.0[channel];
	}
}

impl<const N: usize> From<[u8; N]> for Color<N> {
	fn from(channels: [u8; N]) -> Self {
		return Color(channels);
	}
}

impl From<(u8, u8, u8)> for Color<3> {
	fn from((red, green, blue): (u8, u8, u8)) -> Self {
		return Color([red, green, blue]);
	}
}

impl<const N: usize> From<Color<N>> for [u8; N] {
	fn from(color: Color<N>) -> Self {
		return color.0;
	}
}

// serde only implements arrays up to a fixed size, so colors are written as
// tuples by hand to support any channel count.
impl<const N: usize> Serialize for Color<N> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut tuple = serializer.serialize_tuple(N)?;
		for channel in self.0.iter() {
			tuple.serialize_element(channel)?;
		}
		return tuple.end();
	}
}

struct ColorVisitor<const N: usize>(PhantomData<Color<N>>);

impl<'de, const N: usize> Visitor<'de> for ColorVisitor<N> {
	type Value = Color<N>;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		write!(formatter, "a color with {} channels", N)
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Color<N>, A::Error> {
		let mut channels = [0u8; N];
		for (index, channel) in channels.iter_mut().enumerate() {
			*channel = seq
				.next_element()?
				.ok_or_else(|| de::Error::invalid_length(index, &self))?;
		}
		if seq.next_element::<de::IgnoredAny>()?.is_some() {
			return Err(de::Error::invalid_length(N + 1, &self));
		}
		return Ok(Color(channels));
	}
}

impl<'de, const N: usize> Deserialize<'de> for Color<N> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		return deserializer.deserialize_tuple(N, ColorVisitor(PhantomData));
	}
}
