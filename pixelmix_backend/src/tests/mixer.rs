use crate::{
	colors::*,
	mixer::{Mixer, MixerError},
	mixer_utils::{buffer_kind::is_dense, channel_math::ColorBufferOps},
	Color,
};

use super::{MakeBuffer, BLACKS, COLORS1, COLORS2, WHITES};

const THIRDS: [Color; 4] = [
	Color::rgb(85, 85, 85),
	Color::rgb(85, 85, 170),
	Color::rgb(170, 85, 85),
	Color::rgb(85, 85, 85),
];

fn mixer(make: MakeBuffer) -> Mixer {
	return Mixer::new(make(&COLORS1), vec![make(&COLORS2), make(&WHITES), make(&BLACKS)]).unwrap();
}

fn starts_with_zero_levels(make: MakeBuffer) {
	let mut mixer = mixer(make);
	assert_eq!(mixer.levels(), &[0.0, 0.0, 0.0]);
	assert_eq!(mixer.base(), &make(&COLORS1));

	// Nothing is weighted in, and the base isn't cleared for us
	mixer.composite();
	assert_eq!(mixer.base(), &make(&COLORS1));

	mixer.clear();
	mixer.composite();
	assert_eq!(mixer.base(), &make(&BLACKS));
}

fn single_layers(make: MakeBuffer) {
	let mut mixer = mixer(make);
	let cases = [
		([1.0, 0.0, 0.0], COLORS2),
		([0.0, 1.0, 0.0], WHITES),
		([0.0, 0.0, 1.0], BLACKS),
	];
	for (levels, expected) in cases {
		mixer.levels_mut().copy_from_slice(&levels);
		mixer.clear();
		mixer.composite();
		assert_eq!(mixer.base(), &make(&expected));
	}
}

fn thirds(make: MakeBuffer) {
	let mut mixer = mixer(make);
	mixer.levels_mut().copy_from_slice(&[1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]);
	mixer.clear();
	mixer.composite();
	assert_eq!(mixer.base(), &make(&THIRDS));
}

fn thirds_through_factor(make: MakeBuffer) {
	let mut mixer = mixer(make);
	mixer.levels_mut().copy_from_slice(&[1.0, 1.0, 1.0]);
	mixer.clear();
	mixer.composite_scaled(1.0 / 3.0);
	assert_eq!(mixer.base(), &make(&THIRDS));
	assert_eq!(mixer.levels(), &[1.0, 1.0, 1.0]);
}

fn clear_leaves_layers_alone(make: MakeBuffer) {
	let mut mixer = mixer(make);
	mixer.clear();
	assert_eq!(mixer.layer(0), Some(&make(&COLORS2)));
	assert_eq!(mixer.layer(1), Some(&make(&WHITES)));
	assert_eq!(mixer.layer(3), None);
}

fn layers_apply_in_order(make: MakeBuffer) {
	let base = make(&[Color::rgb(200, 200, 200)]);
	let gray = make(&[Color::rgb(100, 100, 100)]);

	// Saturation after the first layer is not undone by the second
	let mut mixer = Mixer::with_levels(base.clone(), vec![gray.clone(), gray.clone()], vec![1.0, -1.0]).unwrap();
	mixer.composite();
	assert_eq!(mixer.base(), &make(&[Color::rgb(155, 155, 155)]));

	let mut mixer = Mixer::with_levels(base, vec![gray.clone(), gray], vec![-1.0, 1.0]).unwrap();
	mixer.composite();
	assert_eq!(mixer.base(), &make(&[Color::rgb(200, 200, 200)]));
}

fn layer_edits_show_up_next_frame(make: MakeBuffer) {
	let mut mixer = mixer(make);
	mixer.levels_mut()[2] = 1.0;
	mixer.clear();
	mixer.composite();
	assert_eq!(mixer.base(), &make(&BLACKS));

	let mut layer = mixer.layer_mut(2).unwrap();
	layer.set(1, GREEN);
	layer.add_scaled(&make(&[RED, BLACK, BLACK, BLACK]), 1.0);

	mixer.clear();
	mixer.composite();
	assert_eq!(mixer.base(), &make(&[RED, GREEN, BLACK, BLACK]));

	mixer.base_mut().copy_from(&make(&WHITES));
	assert_eq!(mixer.base(), &make(&WHITES));
}

representation_tests!(
	starts_with_zero_levels,
	single_layers,
	thirds,
	thirds_through_factor,
	clear_leaves_layers_alone,
	layers_apply_in_order,
	layer_edits_show_up_next_frame,
);

#[test_log::test]
fn mixed_representations() {
	let mut mixer = Mixer::new(
		super::dense(&COLORS1),
		vec![super::sequence(&COLORS2), super::dense(&WHITES), super::sequence(&BLACKS)],
	)
	.unwrap();
	mixer.levels_mut().copy_from_slice(&[1.0 / 3.0; 3]);
	mixer.clear();
	mixer.composite();
	assert_eq!(mixer.base(), &super::sequence(&THIRDS));
	assert!(is_dense(mixer.base()));

	let (base, layers, levels) = mixer.into_parts();
	assert_eq!(base, super::dense(&THIRDS));
	assert_eq!(layers.len(), 3);
	assert_eq!(levels.len(), 3);
}

#[test]
fn rejects_mismatched_layers() {
	let result = Mixer::new(super::sequence(&COLORS1), vec![super::sequence(&COLORS2), super::dense(&COLORS2[..3])]);
	assert_eq!(
		result.err(),
		Some(MixerError::LayerLengthMismatch {
			layer: 1,
			expected: 4,
			found: 3,
		}),
	);
}

#[test]
fn rejects_mismatched_levels() {
	let result = Mixer::with_levels(super::sequence(&COLORS1), vec![super::sequence(&COLORS2)], vec![0.5, 0.5]);
	assert_eq!(
		result.err(),
		Some(MixerError::LevelCountMismatch { expected: 1, found: 2 }),
	);
	assert_eq!(
		MixerError::LevelCountMismatch { expected: 1, found: 2 }.to_string(),
		"Got 2 levels for 1 layers.",
	);
}

#[test]
fn no_layers() {
	let mut mixer = Mixer::new(super::sequence(&COLORS1), Vec::new()).unwrap();
	assert_eq!(mixer.layer_count(), 0);
	mixer.composite();
	assert_eq!(mixer.base(), &super::sequence(&COLORS1));
}
