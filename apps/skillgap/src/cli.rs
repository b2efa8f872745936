//! Command-line arguments. Every flag falls back to the environment config.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::report::ReportFormat;

/// skillgap - compare the skills in a resume against a target role.
#[derive(Debug, Parser)]
#[command(name = "skillgap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Resume to analyse (.pdf, .txt or .md)
    #[arg(short, long)]
    pub resume: Option<PathBuf>,

    /// Target role id, e.g. data_scientist. Prompted for when omitted
    #[arg(short = 't', long)]
    pub role: Option<String>,

    /// Role skills catalog (JSON object of role -> [skills])
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Country code for the job search
    #[arg(long)]
    pub country: Option<String>,

    /// Number of job listings to fetch
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub results: Option<u32>,

    /// Do not query the job-search API
    #[arg(long)]
    pub skip_jobs: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl Cli {
    /// Applies flags on top of the environment config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(path) = &self.resume {
            config.resume_path = path.clone();
        }
        if let Some(path) = &self.catalog {
            config.role_skills_file = path.clone();
        }
        if let Some(country) = &self.country {
            config.jobs_country = country.clone();
        }
        if let Some(results) = self.results {
            config.jobs_results_per_page = results;
        }
    }
}
