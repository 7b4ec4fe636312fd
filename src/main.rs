mod config;
mod error;
mod industry;
mod output;
mod quiz;

use dotenv::dotenv;

use config::Config;
use quiz::{QuestionGenerator, RngSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional, real environment variables win
    dotenv().ok();
    pretty_env_logger::init();

    let config = Config::from_env()?;
    log::info!("Starting question generation with {:?}", config);

    let size = run(&config)?;
    println!("size {}", size);
    Ok(())
}

/// Loads the table, builds the question bank and writes it out.
/// Returns how many questions were written.
fn run(config: &Config) -> error::Result<usize> {
    let records = industry::load_records(&config.input_path)?;

    let source = match config.seed {
        Some(seed) => {
            log::info!("Using fixed seed {}", seed);
            RngSource::seeded(seed)
        }
        None => RngSource::from_entropy(),
    };
    let mut generator =
        QuestionGenerator::new(source).with_legacy_true_false(config.legacy_true_false);
    let questions = generator.generate(&records);

    output::write_questions(&config.output_path, &questions)?;
    Ok(questions.len())
}
