//! generate-test-polls command implementation

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pollkit_fs::NormalizedPath;
use pollkit_polls::{Catalog, PollSpec, generate_batch};

use crate::cli::GeneratePollsCli;
use crate::error::Result;

/// Generate and print poll requests.
pub fn run_generate(cli: &GeneratePollsCli) -> Result<Vec<String>> {
    let catalog = Catalog::load(&NormalizedPath::new(&cli.data))?;
    let spec = PollSpec {
        category: cli.category.clone(),
        options: cli.options,
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let polls = generate_batch(&catalog, &spec, cli.count, &mut rng)?;

    println!("Generating {} random poll requests:", cli.count);
    println!();
    for (i, poll) in polls.iter().enumerate() {
        println!("{}. {}", i + 1, poll);
    }
    println!();
    println!("{} Generated {} poll requests!", "OK".green().bold(), polls.len());
    println!("Copy any of these to test your poll creation feature!");

    Ok(polls)
}
