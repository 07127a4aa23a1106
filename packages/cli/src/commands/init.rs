use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_model::seed::default_document;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Seed document file name
    #[arg(short, long, default_value = "seed.json")]
    pub seed: String,

    /// Output directory for exported artifacts
    #[arg(short, long, default_value = "dist")]
    pub out_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Pagecraft project...".bright_blue().bold()
    );

    // Seed the page with the default sections
    let seed_path = PathBuf::from(cwd).join(&args.seed);
    if !seed_path.exists() || args.force {
        let document = default_document();
        let seed_json = serde_json::to_string_pretty(&document)?;
        fs::write(&seed_path, seed_json)?;
        println!("  {} Created {}", "✓".green(), args.seed);
    }

    // Create config
    let config = Config {
        seed: args.seed.clone(),
        out_dir: args.out_dir.clone(),
        title: None,
    };

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", args.seed);
    println!("  2. Run: pagecraft export");
    println!("  3. Check output in {}/", args.out_dir);

    Ok(())
}
