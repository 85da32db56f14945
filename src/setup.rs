use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::colors::{self, ColorCheck};
use crate::config::Config;
use crate::constants::output::{BANNER_WIDTH, FOREGROUND_SUFFIX, IMAGE_EXTENSION, ROUND_SUFFIX};
use crate::density::Density;
use crate::descriptor;
use crate::icon;

/// Absolute locations derived from the project root and the config
#[derive(Debug, Clone, PartialEq)]
pub struct Paths {
    pub res_dir: PathBuf,
    pub source: PathBuf,
    pub anydpi_dir: PathBuf,
    pub colors_file: PathBuf,
}

impl Paths {
    pub fn resolve(project_root: &Path, config: &Config) -> Self {
        let res_dir = project_root.join(&config.layout.res_dir);
        Paths {
            source: res_dir.join(&config.icon.source),
            anydpi_dir: res_dir.join(&config.layout.anydpi_dir),
            colors_file: res_dir.join(&config.layout.colors_file),
            res_dir,
        }
    }

    pub fn mipmap_dir(&self, density: Density) -> PathBuf {
        self.res_dir.join(density.mipmap_dir())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    Icon,
    Round,
    Foreground,
}

impl JobKind {
    fn suffix(self) -> &'static str {
        match self {
            JobKind::Icon => "",
            JobKind::Round => ROUND_SUFFIX,
            JobKind::Foreground => FOREGROUND_SUFFIX,
        }
    }
}

/// One raster file to generate
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub density: Density,
    pub kind: JobKind,
    pub size: u32,
    pub output: PathBuf,
}

/// Every raster output of a run, launcher icons first, then foregrounds
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub jobs: Vec<Job>,
}

impl Plan {
    pub fn new(paths: &Paths, icon_name: &str) -> Self {
        let job = |density: Density, kind: JobKind, size: u32| Job {
            density,
            kind,
            size,
            output: paths.mipmap_dir(density).join(format!(
                "{}{}.{}",
                icon_name,
                kind.suffix(),
                IMAGE_EXTENSION
            )),
        };

        let mut jobs = Vec::new();
        for density in Density::ALL {
            jobs.push(job(density, JobKind::Icon, density.icon_size()));
            jobs.push(job(density, JobKind::Round, density.icon_size()));
        }
        for density in Density::ALL {
            jobs.push(job(density, JobKind::Foreground, density.foreground_size()));
        }

        Plan { jobs }
    }

    pub fn total(&self) -> usize {
        self.jobs.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub succeeded: usize,
    pub total: usize,
}

impl Summary {
    pub fn is_complete(&self) -> bool {
        self.succeeded == self.total
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.succeeded, self.total)
    }
}

/// How a run ended, short of an unexpected error
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Nothing was generated
    SourceMissing(PathBuf),
    /// Nothing was generated
    SourceUnreadable { path: PathBuf, reason: String },
    Finished { summary: Summary, color: ColorCheck },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Finished { summary, .. } if summary.is_complete())
    }
}

pub struct IconSetup {
    config: Config,
    paths: Paths,
}

impl IconSetup {
    pub fn new(project_root: &Path, config: Config) -> Self {
        let paths = Paths::resolve(project_root, &config);
        IconSetup { config, paths }
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    pub fn plan(&self) -> Plan {
        Plan::new(&self.paths, &self.config.icon.name)
    }

    /// Print what a run would write without touching the filesystem
    pub fn print_plan(&self) {
        let name = &self.config.icon.name;
        println!("Source: {}", self.paths.source.display());
        println!();
        for job in &self.plan().jobs {
            println!("  {:>3}x{:<3}  {}", job.size, job.size, job.output.display());
        }
        for path in descriptor::descriptor_paths(&self.paths.anydpi_dir, name) {
            println!("  xml      {}", path.display());
        }
        println!();
        println!(
            "Color check: {} in {}",
            descriptor::background_color_name(name),
            self.paths.colors_file.display()
        );
    }

    pub fn run(&self) -> Result<Outcome> {
        let name = &self.config.icon.name;
        let banner = "=".repeat(BANNER_WIDTH);

        println!("{}", banner);
        println!("ICON SETUP: {}", name);
        println!("{}", banner);

        let source = &self.paths.source;
        if !source.exists() {
            println!("✗ Error: source image not found: {}", source.display());
            return Ok(Outcome::SourceMissing(source.clone()));
        }
        println!("\n✓ Source image found: {}", source.display());

        match icon::load_source(source) {
            Ok(img) => println!("✓ Image dimensions: {}x{}", img.width(), img.height()),
            Err(e) => {
                println!("✗ Error opening source image: {:#}", e);
                return Ok(Outcome::SourceUnreadable {
                    path: source.clone(),
                    reason: format!("{:#}", e),
                });
            }
        }

        let plan = self.plan();
        let mut succeeded = 0;

        println!("\n--- Generating launcher icons ---");
        for job in plan.jobs.iter().filter(|j| j.kind != JobKind::Foreground) {
            if self.generate(job)? {
                succeeded += 1;
            }
        }

        println!("\n--- Generating foreground layers (adaptive) ---");
        for job in plan.jobs.iter().filter(|j| j.kind == JobKind::Foreground) {
            if self.generate(job)? {
                succeeded += 1;
            }
        }

        println!("\n--- Writing adaptive-icon descriptors ---");
        fs::create_dir_all(&self.paths.anydpi_dir)
            .with_context(|| format!("Failed to create {}", self.paths.anydpi_dir.display()))?;
        descriptor::write_adaptive_icon_xml(&self.paths.anydpi_dir, name)?;

        println!("\n--- Checking background color ---");
        let color = self.check_background_color()?;

        let summary = Summary {
            succeeded,
            total: plan.total(),
        };

        println!("\n{}", banner);
        println!("SUMMARY: {} icons created", summary);
        println!("{}", banner);

        if summary.is_complete() {
            println!("\n✓ Icons generated successfully!");
            println!("\nNext steps:");
            let color_name = descriptor::background_color_name(name);
            println!("1. Make sure colors.xml defines '{}'", color_name);
            println!("2. Point AndroidManifest.xml at @mipmap/{}", name);
            println!("3. Clean and rebuild the project");
        } else {
            println!("\n⚠ Some icons could not be created");
        }

        Ok(Outcome::Finished { summary, color })
    }

    /// Directory creation failures abort the run; encoding failures only count
    fn generate(&self, job: &Job) -> Result<bool> {
        if let Some(dir) = job.output.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let source = &self.paths.source;
        Ok(match job.kind {
            JobKind::Icon | JobKind::Round => icon::create_icon(source, &job.output, job.size),
            JobKind::Foreground => icon::create_foreground_icon(
                source,
                &job.output,
                job.size,
                self.config.foreground.safe_area,
            ),
        })
    }

    fn check_background_color(&self) -> Result<ColorCheck> {
        let color_name = descriptor::background_color_name(&self.config.icon.name);
        let colors_file = &self.paths.colors_file;
        let check = colors::check_color(colors_file, &color_name)?;

        match check {
            ColorCheck::Present => {
                println!("✓ Background color already defined in {}", colors_file.display());
            }
            ColorCheck::Missing => {
                println!("⚠ Note: add the color '{}' to {}", color_name, colors_file.display());
                println!(
                    "  Example: <color name=\"{}\">{}</color>",
                    color_name, self.config.icon.background_color_hint
                );
            }
            ColorCheck::NoColorsFile => {
                println!("⚠ Note: {} not found, skipping color check", colors_file.display());
            }
        }

        Ok(check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> IconSetup {
        IconSetup::new(Path::new("/project"), Config::default())
    }

    #[test]
    fn test_paths_follow_default_layout() {
        let paths = setup().paths().clone();
        assert_eq!(paths.source, PathBuf::from("/project/app/src/main/res/drawable/ermotoshd.png"));
        assert_eq!(paths.anydpi_dir, PathBuf::from("/project/app/src/main/res/mipmap-anydpi-v26"));
        assert_eq!(paths.colors_file, PathBuf::from("/project/app/src/main/res/values/colors.xml"));
    }

    #[test]
    fn test_plan_total_comes_from_tables() {
        let plan = setup().plan();
        assert_eq!(plan.total(), Density::ALL.len() * 3);
        assert_eq!(plan.jobs.iter().filter(|j| j.kind == JobKind::Foreground).count(), 5);
    }

    #[test]
    fn test_plan_file_names() {
        let plan = setup().plan();
        let names: Vec<String> = plan
            .jobs
            .iter()
            .filter(|j| j.density == Density::Hdpi)
            .map(|j| j.output.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            ["ic_ermotos.webp", "ic_ermotos_round.webp", "ic_ermotos_foreground.webp"]
        );
    }

    #[test]
    fn test_plan_sizes() {
        let plan = setup().plan();
        let xxxhdpi: Vec<(JobKind, u32)> = plan
            .jobs
            .iter()
            .filter(|j| j.density == Density::Xxxhdpi)
            .map(|j| (j.kind, j.size))
            .collect();
        assert_eq!(
            xxxhdpi,
            [(JobKind::Icon, 192), (JobKind::Round, 192), (JobKind::Foreground, 432)]
        );
        assert!(plan.jobs[0].output.ends_with("mipmap-mdpi/ic_ermotos.webp"));
    }

    #[test]
    fn test_summary_display() {
        assert_eq!(Summary { succeeded: 15, total: 15 }.to_string(), "15/15");
        assert_eq!(Summary { succeeded: 9, total: 15 }.to_string(), "9/15");
    }

    #[test]
    fn test_outcome_success() {
        let done = |succeeded| Outcome::Finished {
            summary: Summary { succeeded, total: 15 },
            color: ColorCheck::Present,
        };
        assert!(done(15).is_success());
        assert!(!done(14).is_success());
        assert!(!Outcome::SourceMissing(PathBuf::from("x")).is_success());
    }
}
