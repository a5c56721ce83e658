use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::error::FilingError;
use super::report::FilingType;

/// Provenance of a single filing attachment. Field names on the wire
/// follow the sec-api.io query API (https://sec-api.io/docs/query-api).
///
/// Everything is kept as a plain string at this layer: `cik` arrives with
/// leading zeros already stripped, `filing_date` is `yyyy-mm-dd`, and
/// `form_type` is expected to match one of the [`FilingType`] labels, but
/// none of that is validated here. `ticker` may be empty, not every filer
/// has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingMetadata {
    #[serde(rename = "accessionNo")]
    pub accession_number: String,
    pub cik: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub ticker: String,
    pub description: String,
    #[serde(rename = "formType")]
    pub form_type: String,
    #[serde(rename = "filingUrl")]
    pub filing_url: String,
    #[serde(rename = "filingDate")]
    pub filing_date: String,
}

/// A thin wrapper around the processed text of one filing.
///
/// Section data is a map from section key (e.g. "Item 1A" for a 10-K) to
/// extracted text, filled wholesale by [`ingest`](Filing::ingest). The key
/// vocabulary is per form type and owned by the extraction layer, this
/// container treats it as an open namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filing {
    filing_type: FilingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    sections: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<FilingMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra_context: Option<HashMap<String, Value>>,
}

impl Filing {
    pub fn new(filing_type: FilingType) -> Self {
        Filing {
            filing_type,
            sections: None,
            metadata: None,
            extra_context: None,
        }
    }

    /// An empty annual report (10-K) record.
    pub fn annual_report() -> Self {
        Filing::new(FilingType::Form10K)
    }

    /// An empty quarterly report (10-Q) record.
    pub fn quarterly_report() -> Self {
        Filing::new(FilingType::Form10Q)
    }

    /// An empty current report (8-K) record.
    pub fn current_report() -> Self {
        Filing::new(FilingType::Form8K)
    }

    /// The form type this record was created for. Fixed for the record's
    /// lifetime.
    pub fn filing_type(&self) -> FilingType {
        self.filing_type
    }

    /// Attach provenance metadata. Replaces any previously attached
    /// metadata, last write wins. Contents are not validated.
    pub fn set_metadata(&mut self, info: FilingMetadata) {
        debug!(
            "attaching metadata for accession {} ({})",
            info.accession_number, info.company_name
        );
        self.metadata = Some(info);
    }

    /// Fill the record with processed section text. Replaces the section
    /// map wholesale on every call.
    pub fn ingest(&mut self, sections: HashMap<String, String>) {
        debug!(
            "ingesting {} sections into {} filing",
            sections.len(),
            self.filing_type
        );
        self.sections = Some(sections);
    }

    /// The extracted text stored under `key`, verbatim.
    pub fn section(&self, key: &str) -> Result<&str, FilingError> {
        let sections = self
            .sections
            .as_ref()
            .ok_or(FilingError::SectionsNotIngested)?;

        sections
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| FilingError::UnknownSection {
                key: key.to_string(),
            })
    }

    /// The full section map. Borrowed read view, valid only while the
    /// record is not mutated.
    pub fn sections(&self) -> Result<&HashMap<String, String>, FilingError> {
        self.sections
            .as_ref()
            .ok_or(FilingError::SectionsNotIngested)
    }

    pub fn metadata(&self) -> Result<&FilingMetadata, FilingError> {
        self.metadata.as_ref().ok_or(FilingError::MetadataNotSet)
    }

    /// Attach auxiliary key/value context, e.g. prompt context for an LLM
    /// or filtering fields for a vector store. Shape is collaborator
    /// defined. Replaces any previous context.
    pub fn set_extra_context(&mut self, context: HashMap<String, Value>) {
        self.extra_context = Some(context);
    }

    /// Auxiliary context, if any was attached. Unlike sections and
    /// metadata this is optional by contract, so absence is not an error.
    pub fn extra_context(&self) -> Option<&HashMap<String, Value>> {
        self.extra_context.as_ref()
    }
}
