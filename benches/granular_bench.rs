use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phidelity::audio::Waveform;
use phidelity::synthesis::{FixedClock, GranularSynthesizer, NoProgress, RandomOffsets};
use phidelity::audio::WavIo;
use phidelity::{GrainConfig, GrainPreset};

fn sine(len: usize, sample_rate: u32) -> Waveform {
    Waveform::from_vec(
        (0..len)
            .map(|i| (i as f32 / sample_rate as f32 * 220.0 * std::f32::consts::TAU).sin())
            .collect(),
        sample_rate,
    )
}

fn bench_synthesize(c: &mut Criterion) {
    let input = sine(44100 * 5, 44100);

    for preset in [GrainPreset::Long, GrainPreset::Short] {
        let synthesizer = GranularSynthesizer::with_parts(
            GrainConfig::from_preset(preset),
            WavIo::default(),
            FixedClock(0),
        )
        .unwrap();

        c.bench_function(&format!("synthesize_{:?}", preset).to_lowercase(), |b| {
            b.iter(|| {
                let mut offsets = RandomOffsets::seeded(42);
                synthesizer
                    .synthesize(black_box(&input), &mut offsets, &mut NoProgress)
                    .unwrap()
            })
        });
    }
}

criterion_group!(benches, bench_synthesize);
criterion_main!(benches);
