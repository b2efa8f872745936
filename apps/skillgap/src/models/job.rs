use serde::{Deserialize, Serialize};

/// `{ "display_name": ... }` wrapper used by Adzuna for company and location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayName {
    pub display_name: Option<String>,
}

/// A single job listing as returned by the job-search API.
/// Every field is optional on the wire; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: Option<String>,
    #[serde(default)]
    pub company: DisplayName,
    #[serde(default)]
    pub location: DisplayName,
    pub redirect_url: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
}

impl JobListing {
    pub fn company_name(&self) -> Option<&str> {
        self.company.display_name.as_deref()
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location.display_name.as_deref()
    }
}

/// Top-level search response body.
#[derive(Debug, Deserialize)]
pub struct JobSearchResponse {
    #[serde(default)]
    pub results: Vec<JobListing>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deserializes_nested_names() {
        let json = r#"{
            "title": "Data Scientist",
            "company": {"display_name": "Acme Analytics", "__CLASS__": "Company"},
            "location": {"display_name": "Bengaluru, Karnataka", "area": ["India"]},
            "redirect_url": "https://example.com/job/1",
            "salary_min": 900000,
            "id": "12345"
        }"#;
        let listing: JobListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.title.as_deref(), Some("Data Scientist"));
        assert_eq!(listing.company_name(), Some("Acme Analytics"));
        assert_eq!(listing.location_name(), Some("Bengaluru, Karnataka"));
        assert_eq!(listing.salary_min, Some(900000.0));
        assert!(listing.salary_max.is_none());
    }

    #[test]
    fn test_listing_tolerates_missing_fields() {
        let listing: JobListing = serde_json::from_str("{}").unwrap();
        assert!(listing.title.is_none());
        assert!(listing.company_name().is_none());
        assert!(listing.redirect_url.is_none());
    }

    #[test]
    fn test_response_without_results_is_empty() {
        let body: JobSearchResponse = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(body.results.is_empty());
    }
}
