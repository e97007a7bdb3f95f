//! Phidelity - Granular Synthesis Tool

use anyhow::Context;
use clap::Parser;
use std::process;
use phidelity::synthesis::LogProgress;
use phidelity::{init_logging, platform, Args, Config, GranularSynthesizer, SynthesisRequest};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if let Some(path) = &args.init_config {
        Config::create_default_config(path)
            .with_context(|| format!("Cannot create config file {}", path.display()))?;
        println!("Wrote default config: {}", path.display());
        return Ok(());
    }

    let config = Config::from_args_and_config(&args).context("Invalid configuration")?;
    init_logging(config.verbose());

    if config.verbose() {
        println!("{}", phidelity::get_library_info());
        println!();
    }

    let synthesizer = GranularSynthesizer::new(&config)?;
    let request = SynthesisRequest::new(
        config.input_path.to_string_lossy(),
        config.output_path.to_string_lossy(),
        config.grains.seed,
    );

    println!("=== Phidelity Granular Synthesis ===");
    println!("Input: {}", config.input_path.display());
    let grains = synthesizer.config();
    println!(
        "Grains: {} x {} samples, overlap {:.0}%, hop {}",
        grains.num_grains,
        grains.grain_size,
        grains.overlap_ratio * 100.0,
        grains.hop_size()
    );
    println!("Please stand by...\n");

    let report = synthesizer
        .run_request(&request, &mut LogProgress::new())
        .with_context(|| format!("Synthesis failed for {}", config.input_path.display()))?;

    println!("=== FINISHED ===");
    println!("Output: {}", report.output_path.display());
    println!("Seed: {}", report.seed);
    println!("Duration: {:.2}s at {} Hz", report.input_duration_seconds(), report.sample_rate);
    println!("Time: {:.3}s", report.processing_time.as_secs_f64());
    if config.verbose() {
        println!("Signature: {}", report.signature);
        println!("Hop size: {}", report.hop_size);
        println!("RTF: {:.4}", report.real_time_factor());
    }

    if args.reveal {
        platform::reveal_in_file_manager(&report.output_path)?;
    }

    Ok(())
}
