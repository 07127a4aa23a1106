use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_compiler_html::{compile_to_html, CompileOptions};
use pagecraft_editor::EditSession;
use pagecraft_model::Document;
use pagecraft_workspace::{apply_script, write_artifact, EditScript};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Edit script to apply to the seed before compiling
    #[arg(short, long)]
    pub edits: Option<String>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Page title (overrides config)
    #[arg(short, long)]
    pub title: Option<String>,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    println!("{}", "🔨 Exporting landing page...".bright_blue().bold());

    // Load the seed document, falling back to the built-in page
    let seed_path = config.seed_path(cwd);
    let document = if seed_path.exists() {
        let json = fs::read_to_string(&seed_path)?;
        Document::from_seed_json(&json)
            .map_err(|e| anyhow!("invalid seed {}: {}", seed_path.display(), e))?
    } else {
        println!(
            "  {} {} not found, using built-in seed",
            "⚠️".yellow(),
            config.seed
        );
        pagecraft_model::seed::default_document()
    };
    document.validate()?;
    println!("  {} Loaded {} sections", "✓".green(), document.len());

    let mut session = EditSession::new(document);

    // Apply the edit script, if any
    if let Some(ref edits) = args.edits {
        let script_path = PathBuf::from(cwd).join(edits);
        let json = fs::read_to_string(&script_path)?;
        let script = EditScript::from_json(&json)
            .map_err(|e| anyhow!("invalid edit script {}: {}", script_path.display(), e))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(apply_script(&mut session, &script))?;
        println!("  {} Applied {}", "✓".green(), edits);
    }

    // Compile
    let title = args
        .title
        .or(config.title.clone())
        .unwrap_or_else(|| CompileOptions::default().title);
    let options = CompileOptions {
        title,
        ..CompileOptions::default()
    };
    let html = compile_to_html(session.document(), options)?;

    // Output
    if args.stdout {
        println!("{}", html);
        return Ok(());
    }

    let out_dir = match args.out_dir {
        Some(ref out) => PathBuf::from(cwd).join(out),
        None => config.out_dir_path(cwd),
    };
    match write_artifact(&html, &out_dir) {
        Ok(path) => {
            println!("  {} Wrote {}", "✓".green(), path.display());
        }
        Err(e) => {
            eprintln!("  {} {}", "✗".red(), e.to_string().red());
            return Err(e.into());
        }
    }

    println!();
    println!("{}", "✅ Export complete!".green().bold());

    Ok(())
}
