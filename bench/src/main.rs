use std::{env, time::Instant};

use anyhow::Context;
use log::info;
use pixelmix_lib::{Color, ColorBuffer, DenseBuffer, Mixer};

/// Reads a numeric setting from the environment, falling back to `default`
fn setting(name: &str, default: usize) -> anyhow::Result<usize> {
    return match env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{} must be a whole number, got {:?}", name, value)),
        Err(_) => Ok(default),
    };
}

fn random_colors(pixels: usize) -> Vec<Color> {
    return (0..pixels)
        .map(|_| Color::rgb(fastrand::u8(..), fastrand::u8(..), fastrand::u8(..)))
        .collect();
}

fn run(name: &str, mut mixer: Mixer, frames: usize) {
    println!("Starting {} composite benchmark.", name);
    let start = Instant::now();
    for frame in 0..frames {
        // Sweep the levels the way an animation driver would
        let phase = frame as f64 / frames.max(1) as f64;
        for (layer, level) in mixer.levels_mut().iter_mut().enumerate() {
            *level = (phase + layer as f64 * 0.1).fract();
        }
        mixer.clear();
        mixer.composite();
    }
    let elapsed = start.elapsed();
    println!(
        "{} composite took {:?} ({:?} per frame).",
        name,
        elapsed,
        elapsed.div_f64(frames.max(1) as f64),
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let pixels = setting("PIXELMIX_BENCH_PIXELS", 1024)?;
    let layers = setting("PIXELMIX_BENCH_LAYERS", 8)?;
    let frames = setting("PIXELMIX_BENCH_FRAMES", 1000)?;
    info!("Benchmarking {} layers of {} pixels over {} frames", layers, pixels, frames);

    println!("Creating sample data...");
    let start = Instant::now();
    let sample: Vec<Vec<Color>> = (0..layers).map(|_| random_colors(pixels)).collect();
    println!("Sample data creation took {:?}.", start.elapsed());

    let sequence = Mixer::new(
        ColorBuffer::from(vec![Color::BLACK; pixels]),
        sample.iter().map(|colors| ColorBuffer::from(colors.clone())).collect(),
    )?;
    run("Sequence", sequence, frames);

    let dense = Mixer::new(
        ColorBuffer::from(DenseBuffer::new(pixels)),
        sample.iter().map(|colors| ColorBuffer::from(DenseBuffer::from_colors(colors))).collect(),
    )?;
    run("Dense", dense, frames);

    return Ok(());
}
