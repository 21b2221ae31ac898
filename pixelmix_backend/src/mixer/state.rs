use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
/// Per-layer weights used by the mixer, in layer order.
///
/// Weights can be read and written by index, but the number of weights is fixed
/// when the mixer is built and always matches its layer count.
///
/// ```rust
/// # use pixelmix_lib::mixer::state::Levels;
/// let mut levels = Levels::zeroed(3);
/// levels[1] = 0.5;
/// levels.copy_from_slice(&[1.0, 1.0, 1.0]);
/// assert_eq!(&levels[..], &[1.0, 1.0, 1.0]);
/// ```
pub struct Levels(Box<[f64]>);

impl Levels {
	pub fn zeroed(len: usize) -> Self {
		return Levels(vec![0f64; len].into_boxed_slice());
	}

	/// Sets every weight to the same value
	pub fn set_all(&mut self, level: f64) {
		self.0.fill(level);
	}
}

impl From<Vec<f64>> for Levels {
	fn from(levels: Vec<f64>) -> Self {
		return Levels(levels.into_boxed_slice());
	}
}

impl Deref for Levels {
	type Target = [f64];
	fn deref(&self) -> &[f64] {
		&self.0
	}
}

impl DerefMut for Levels {
	fn deref_mut(&mut self) -> &mut [f64] {
		&mut self.0
	}
}
