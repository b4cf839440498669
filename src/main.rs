use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use fguess::config::{ConfigManager, ConfigSection, SurvivorCount, TrainingConfig};
use fguess::data::discover_samples;
use fguess::engines::generation::BarProgress;
use fguess::engines::RegexMatcher;
use fguess::trainer::Trainer;

#[derive(Parser, Debug)]
#[command(
    name = "fguess",
    about = "Trains regex-set classifiers that guess a file's format"
)]
struct Cli {
    /// Directory with one subdirectory of sample files per format
    samples_dir: PathBuf,

    /// Pool size p
    #[arg(short = 'p', long)]
    pool_size: Option<usize>,

    /// Survivors kept each generation (k); a value below 1 is a proportion of p
    #[arg(short = 'k', long)]
    survivors: Option<f64>,

    /// Survivors kept by the final selection (k0); a value below 1 is a proportion of p
    #[arg(long = "k0")]
    final_survivors: Option<f64>,

    /// Mutation probability
    #[arg(long)]
    epsilon: Option<f64>,

    /// Generation count n
    #[arg(short = 'n', long = "iterations")]
    generations: Option<usize>,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the 40-atom expression length guard
    #[arg(long)]
    no_length_guard: bool,

    /// TOML config file; CLI options override its values
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,

    /// Where to write the generated classifier program
    #[arg(short = 'o', long, default_value = "fguess_classifier.rs")]
    output: PathBuf,

    /// Also write the raw pattern table as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn survivor_count(value: f64) -> SurvivorCount {
    if value < 1.0 {
        SurvivorCount::Proportion(value)
    } else {
        SurvivorCount::Count(value as usize)
    }
}

fn resolve_config(cli: &Cli) -> anyhow::Result<TrainingConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let manager = ConfigManager::new();
            manager
                .load_from_file(path)
                .with_context(|| format!("loading {}", path.display()))?;
            manager.get().training
        }
        None => TrainingConfig::default(),
    };

    if let Some(p) = cli.pool_size {
        config.pool_size = p;
    }
    if let Some(k) = cli.survivors {
        config.survivors = survivor_count(k);
    }
    if let Some(k0) = cli.final_survivors {
        config.final_survivors = survivor_count(k0);
    }
    if let Some(epsilon) = cli.epsilon {
        config.epsilon = epsilon;
    }
    if let Some(n) = cli.generations {
        config.generations = n;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if cli.no_length_guard {
        config.max_expr_len = None;
    }

    config.validate()?;
    Ok(config)
}

fn confirm() -> anyhow::Result<bool> {
    print!("Start training? (y/n) ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = resolve_config(&cli)?;
    let samples = discover_samples(&cli.samples_dir)?;

    println!("Samples found:");
    for (class_name, texts) in &samples {
        println!("  {} [{}]", class_name, texts.len());
    }

    if !cli.yes && !confirm()? {
        return Ok(());
    }
    println!("Starting training:");

    let matcher = RegexMatcher::new();
    let trainer = Trainer::new(config, &matcher)?;
    let mut progress = BarProgress::new();
    let artifact = trainer.run(&samples, &mut progress)?;

    artifact
        .save_program(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    if let Some(json_path) = &cli.json {
        artifact
            .save_json(json_path)
            .with_context(|| format!("writing {}", json_path.display()))?;
    }

    println!("Classifier written to {}", cli.output.display());
    Ok(())
}
