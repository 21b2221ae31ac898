use crate::{
	colors::*,
	mixer_utils::buffer::{ColorBuffer, DenseBuffer},
	Color,
};

pub const COLORS1: [Color; 4] = [RED, GREEN, BLUE, WHITE];
pub const COLORS2: [Color; 4] = [BLACK, BLUE, RED, BLACK];
pub const SUM12: [Color; 4] = [RED, CYAN, MAGENTA, WHITE];
pub const WHITES: [Color; 4] = [WHITE, WHITE, WHITE, WHITE];
pub const BLACKS: [Color; 4] = [BLACK, BLACK, BLACK, BLACK];

/// Signature shared by [`sequence`] and [`dense`] so scenarios can run against either
pub type MakeBuffer = fn(&[Color]) -> ColorBuffer;

pub fn sequence(colors: &[Color]) -> ColorBuffer {
	return ColorBuffer::from(colors.to_vec());
}

pub fn dense(colors: &[Color]) -> ColorBuffer {
	return ColorBuffer::from(DenseBuffer::from_colors(colors));
}

/// Runs each named scenario once per buffer representation.
///
/// Every scenario is a function in the calling module taking a [`MakeBuffer`].
macro_rules! representation_tests {
	($($scenario:ident),* $(,)?) => {
		mod sequence {
			$(
				#[test_log::test]
				fn $scenario() {
					super::$scenario(crate::tests::sequence);
				}
			)*
		}

		mod dense {
			$(
				#[test_log::test]
				fn $scenario() {
					super::$scenario(crate::tests::dense);
				}
			)*
		}
	};
}

mod mixer;
