use adaptive_icon_gen::config::Config;
use adaptive_icon_gen::setup::IconSetup;
use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "adaptive-icon-gen")]
#[command(
    about = "Generate Android launcher and adaptive-icon assets from one source image",
    long_about = None
)]
struct Cli {
    /// Android project root (the directory that contains `app/`)
    #[arg(long, default_value = ".")]
    project_root: PathBuf,
    /// YAML config file. Defaults to icongen.yaml in the project root, if present
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the files that would be written and exit
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            println!("\n✗ Unexpected error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) if !path.exists() => bail!("Config file not found: {}", path.display()),
        Some(path) => Config::load_or_default(path)?,
        None => Config::load_or_default(&Config::default_path(&cli.project_root))?,
    };

    let setup = IconSetup::new(&cli.project_root, config);

    if cli.dry_run {
        setup.print_plan();
        return Ok(true);
    }

    Ok(setup.run()?.is_success())
}
