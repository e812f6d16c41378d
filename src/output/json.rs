//! JSON document wrapping every report of a run

use chrono::Utc;
use serde::Serialize;

use crate::models::EntityReport;

/// `{"data": [...reports], "meta": {...}}`
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a, R> {
    pub data: &'a [EntityReport<R>],
    pub meta: RunMeta,
}

/// When and by which version the document was produced
#[derive(Debug, Serialize)]
pub struct RunMeta {
    /// RFC 3339 generation time
    pub timestamp: String,
    pub version: &'static str,
    /// Reports in `data`
    pub targets: usize,
}

impl<'a, R> ReportDocument<'a, R> {
    pub fn new(reports: &'a [EntityReport<R>]) -> Self {
        Self {
            data: reports,
            meta: RunMeta {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION"),
                targets: reports.len(),
            },
        }
    }
}

/// Pretty-print all reports as one JSON document.
pub fn format_json<R: Serialize>(reports: &[EntityReport<R>]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ReportDocument::new(reports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sso::{Enterprise, Organization, User};

    fn acme() -> Enterprise {
        Enterprise {
            login: "acme".to_string(),
            name: "Acme Corp".to_string(),
            id: "E_1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_document_meta_counts_reports() {
        let reports = vec![
            EntityReport::<User>::for_enterprise(&acme(), vec![]),
            EntityReport::<User>::for_organization(&Organization::default(), vec![]),
        ];
        let document = ReportDocument::new(&reports);

        assert_eq!(document.meta.targets, 2);
        assert_eq!(document.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!document.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_json_reports() {
        let users = vec![User {
            login: "bob".to_string(),
            name: None,
            saml_name_id: Some("bob@x".to_string()),
        }];
        let reports = vec![EntityReport::for_enterprise(&acme(), users)];

        let result = format_json(&reports).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["data"][0]["kind"], "enterprise");
        assert_eq!(value["data"][0]["id"], "E_1");
        assert_eq!(value["data"][0]["items"][0]["login"], "bob");
        assert_eq!(value["data"][0]["items"][0]["saml_name_id"], "bob@x");
        assert!(value["data"][0]["items"][0]["name"].is_null());
        assert_eq!(value["meta"]["targets"], 1);
        assert!(value["meta"]["timestamp"].is_string());
    }

    #[test]
    fn test_format_json_without_reports_is_empty_data() {
        let result = format_json::<User>(&[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["data"], serde_json::json!([]));
        assert_eq!(value["meta"]["targets"], 0);
    }
}
