//! Reporter: renders an `AnalysisReport` for the terminal or as JSON.

use std::collections::BTreeSet;
use std::io::Write;

use anyhow::Context;

use crate::errors::AppError;
use crate::models::analysis::AnalysisReport;
use crate::models::job::JobListing;

#[derive(Debug, Clone, Copy, Default, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Multi-section human-readable report (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

pub fn render(
    report: &AnalysisReport,
    format: ReportFormat,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match format {
        ReportFormat::Text => render_text(report, out)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)
                .context("Failed to serialize report")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// `data_scientist` → `Data Scientist`.
pub fn display_role_name(role: &str) -> String {
    let spaced = role.replace('_', " ");
    let mut titled = String::with_capacity(spaced.len());
    let mut prev_is_letter = false;
    for c in spaced.chars() {
        if prev_is_letter {
            titled.extend(c.to_lowercase());
        } else {
            titled.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    titled
}

fn join_sorted(skills: &BTreeSet<String>) -> String {
    if skills.is_empty() {
        return "(none)".to_string();
    }
    skills.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn or_unspecified(value: Option<&str>) -> &str {
    value.unwrap_or("not specified")
}

pub fn render_text(report: &AnalysisReport, out: &mut impl Write) -> std::io::Result<()> {
    let role = &report.target_role;

    writeln!(out, "\nResume Analysis")?;
    writeln!(
        out,
        "Extracted Skills from Resume: {}",
        join_sorted(&report.extracted_skills)
    )?;

    writeln!(out, "\nSkills Required for the Role '{role}':")?;
    writeln!(out, "{}", join_sorted(&report.required_skills))?;

    if !report.role_known {
        writeln!(
            out,
            "\nNote: '{role}' is not in the role catalog, so there are no required skills to compare against."
        )?;
    }

    if report.missing_skills.is_empty() {
        writeln!(out, "\nYou have all the necessary skills for the role '{role}'!")?;
    } else {
        let missing = join_sorted(&report.missing_skills);
        writeln!(out, "\nMissing Skills for '{role}':")?;
        writeln!(out, "{missing}")?;
        writeln!(
            out,
            "\nRecommendation: To improve your chances, consider working on the following skills:\n-> {missing}"
        )?;
    }

    writeln!(out, "\nJob Recommendations Based on Your Current Skill Set:")?;
    let positive: Vec<_> = report
        .recommendations
        .iter()
        .filter(|m| m.percentage > 0.0)
        .collect();
    if positive.is_empty() {
        writeln!(out, "No catalog role matches any of your skills yet.")?;
    }
    for m in positive {
        writeln!(
            out,
            "• {}: {:.2}% match",
            display_role_name(&m.role),
            m.percentage
        )?;
    }

    match &report.job_listings {
        None => writeln!(out, "\nJob lookup skipped.")?,
        Some(listings) if listings.is_empty() => {
            writeln!(out, "\nNo job listings found for '{role}'.")?;
        }
        Some(listings) => {
            writeln!(
                out,
                "\nFound {} Job Listings for '{role}':\n",
                listings.len()
            )?;
            for job in listings {
                write_listing(job, out)?;
            }
        }
    }

    Ok(())
}

fn write_listing(job: &JobListing, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{} at {}",
        or_unspecified(job.title.as_deref()),
        or_unspecified(job.company_name())
    )?;
    writeln!(out, "  Location: {}", or_unspecified(job.location_name()))?;
    writeln!(out, "  URL: {}\n", or_unspecified(job.redirect_url.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::RoleMatch;
    use crate::models::job::DisplayName;

    fn skills(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn base_report() -> AnalysisReport {
        AnalysisReport {
            target_role: "data_scientist".to_string(),
            role_known: true,
            extracted_skills: skills(&["sql", "python"]),
            required_skills: skills(&["python", "sql", "statistics"]),
            missing_skills: skills(&["statistics"]),
            recommendations: vec![
                RoleMatch {
                    role: "data_scientist".to_string(),
                    percentage: 200.0 / 3.0,
                },
                RoleMatch {
                    role: "web_developer".to_string(),
                    percentage: 0.0,
                },
            ],
            job_listings: Some(vec![]),
        }
    }

    fn render_to_string(report: &AnalysisReport) -> String {
        let mut buf = Vec::new();
        render_text(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_display_role_name() {
        assert_eq!(display_role_name("data_scientist"), "Data Scientist");
        assert_eq!(display_role_name("DEVOPS_engineer"), "Devops Engineer");
        assert_eq!(display_role_name("ml_ops"), "Ml Ops");
    }

    #[test]
    fn test_missing_skills_section() {
        let text = render_to_string(&base_report());
        assert!(text.contains("Extracted Skills from Resume: python, sql"));
        assert!(text.contains("Missing Skills for 'data_scientist':\nstatistics"));
        assert!(!text.contains("all the necessary skills"));
    }

    #[test]
    fn test_all_skills_message_when_no_gap() {
        let mut report = base_report();
        report.missing_skills.clear();
        let text = render_to_string(&report);
        assert!(text.contains("You have all the necessary skills for the role 'data_scientist'!"));
        assert!(!text.contains("Missing Skills"));
    }

    #[test]
    fn test_recommendations_filter_zero_matches() {
        let text = render_to_string(&base_report());
        assert!(text.contains("• Data Scientist: 66.67% match"));
        assert!(!text.contains("Web Developer"));
    }

    #[test]
    fn test_empty_listings_message() {
        let text = render_to_string(&base_report());
        assert!(text.contains("No job listings found for 'data_scientist'."));
    }

    #[test]
    fn test_skipped_lookup_message() {
        let mut report = base_report();
        report.job_listings = None;
        let text = render_to_string(&report);
        assert!(text.contains("Job lookup skipped."));
        assert!(!text.contains("No job listings found"));
    }

    #[test]
    fn test_listing_lines() {
        let mut report = base_report();
        report.job_listings = Some(vec![
            JobListing {
                title: Some("Data Scientist".to_string()),
                company: DisplayName {
                    display_name: Some("Acme".to_string()),
                },
                location: DisplayName {
                    display_name: Some("Pune".to_string()),
                },
                redirect_url: Some("https://example.com/1".to_string()),
                ..JobListing::default()
            },
            JobListing::default(),
        ]);
        let text = render_to_string(&report);
        assert!(text.contains("Found 2 Job Listings for 'data_scientist':"));
        assert!(text.contains("Data Scientist at Acme\n  Location: Pune\n  URL: https://example.com/1"));
        assert!(text.contains("not specified at not specified"));
    }

    #[test]
    fn test_unknown_role_note() {
        let mut report = base_report();
        report.target_role = "astronaut".to_string();
        report.role_known = false;
        report.required_skills.clear();
        report.missing_skills.clear();
        let text = render_to_string(&report);
        assert!(text.contains("'astronaut' is not in the role catalog"));
        assert!(text.contains("You have all the necessary skills"));
    }

    #[test]
    fn test_json_format() {
        let mut buf = Vec::new();
        render(&base_report(), ReportFormat::Json, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["target_role"], "data_scientist");
        assert_eq!(value["missing_skills"][0], "statistics");
        assert_eq!(value["recommendations"][1]["percentage"], 0.0);
    }
}
