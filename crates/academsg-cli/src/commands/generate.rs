//! Message generation command for CLI.

use std::path::PathBuf;

use academsg_core::{Category, CategoryChoice, Config, JsonWriter, MessageGenerator};
use clap::Args;

#[derive(Args)]
pub struct GenerateArgs {
    /// Message kind: whatsapp, correo, zoom, tarea, deadline, or aleatorio
    #[arg(long, visible_alias = "category", value_parser = parse_choice)]
    pub tipo: Option<CategoryChoice>,

    /// Number of messages to generate
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,

    /// Directory where the JSON files are written
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file (default: ~/.config/academsg/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_choice(s: &str) -> Result<CategoryChoice, String> {
    s.parse().map_err(|_| {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        format!(
            "invalid value '{s}' (expected one of: {}, {})",
            names.join(", "),
            CategoryChoice::RANDOM_NAME
        )
    })
}

pub fn run(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let choice = args.tipo.unwrap_or(config.category);
    let count = args.count.unwrap_or(config.count);
    let output = args.output.unwrap_or(config.output_dir);
    let seed = args.seed.or(config.seed);

    tracing::info!(%choice, count, output = %output.display(), ?seed, "generating messages");

    let mut generator = MessageGenerator::from_seed(seed);
    let writer = JsonWriter::new(output);

    for _ in 0..count {
        let category = choice.resolve(&mut generator);
        let record = generator.generate(category);
        let path = writer.write(&record)?;
        println!("Saved: {}", path.display());
    }
    Ok(())
}
