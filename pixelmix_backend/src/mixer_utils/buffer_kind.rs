use super::{
	buffer::ColorBuffer,
	channel_math::ColorBufferOps,
};

/// Returns true if `buffer` stores its colors as one dense block of bytes.
///
/// An empty sequence buffer is not dense, but an empty dense buffer is.
pub fn is_dense<const N: usize>(buffer: &ColorBuffer<N>) -> bool {
	return matches!(buffer, ColorBuffer::Dense(_));
}

/// Picks the channel math implementation for a buffer representation
pub fn select_math(is_dense: bool) -> MathImpl {
	return if is_dense {
		MathImpl::Dense
	} else {
		MathImpl::Sequence
	};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Channel math implementation for one buffer representation.
///
/// Both implementations give bit-identical results for the same logical input.
/// The target passed to any method must use the representation this
/// implementation was selected for; the source may use either.
pub enum MathImpl {
	Sequence,
	Dense,
}

impl MathImpl {
	pub fn add<const N: usize>(self, target: &mut ColorBuffer<N>, source: &ColorBuffer<N>, scale: f64) {
		self.check_target(target);
		match target {
			ColorBuffer::Sequence(target) => target.add_scaled(source, scale),
			ColorBuffer::Dense(target) => target.add_scaled(source, scale),
		}
	}

	pub fn clear<const N: usize>(self, target: &mut ColorBuffer<N>) {
		self.check_target(target);
		match target {
			ColorBuffer::Sequence(target) => target.clear(),
			ColorBuffer::Dense(target) => target.clear(),
		}
	}

	pub fn copy<const N: usize>(self, dst: &mut ColorBuffer<N>, src: &ColorBuffer<N>) {
		self.check_target(dst);
		match dst {
			ColorBuffer::Sequence(dst) => dst.copy_from(src),
			ColorBuffer::Dense(dst) => dst.copy_from(src),
		}
	}

	#[inline]
	fn check_target<const N: usize>(self, target: &ColorBuffer<N>) {
		debug_assert_eq!(
			self,
			select_math(is_dense(target)),
			"channel math applied to a buffer of the other representation"
		);
	}
}
