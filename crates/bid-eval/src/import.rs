//! Batch intake of competing bids from CSV exports.

use crate::evaluation::{BidSubmission, RankEntry, RawNumeric, RawRating};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum BidImportError {
    #[error("failed to read bid export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid bid CSV data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct BidRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    bidder: Option<String>,
    #[serde(rename = "bidAmount", default, deserialize_with = "empty_string_as_none")]
    bid_amount: Option<String>,
    #[serde(rename = "projectBudget", default, deserialize_with = "empty_string_as_none")]
    project_budget: Option<String>,
    #[serde(rename = "ongoingProjects", default, deserialize_with = "empty_string_as_none")]
    ongoing_projects: Option<String>,
    #[serde(
        rename = "conflictingDeadlines",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    conflicting_deadlines: Option<String>,
    #[serde(rename = "employeeCount", default, deserialize_with = "empty_string_as_none")]
    employee_count: Option<String>,
    #[serde(rename = "companyCapacity", default, deserialize_with = "empty_string_as_none")]
    company_capacity: Option<String>,
    #[serde(
        rename = "financialStability",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    financial_stability: Option<String>,
}

impl BidRow {
    fn into_entry(self, line: usize) -> RankEntry {
        let text = |value: Option<String>| value.map(RawNumeric::Text);
        RankEntry {
            bidder: self.bidder.unwrap_or_else(|| format!("row {line}")),
            submission: BidSubmission {
                bid_amount: text(self.bid_amount),
                project_budget: text(self.project_budget),
                ongoing_projects: text(self.ongoing_projects),
                conflicting_deadlines: text(self.conflicting_deadlines),
                employee_count: text(self.employee_count),
                company_capacity: text(self.company_capacity),
                financial_stability: self.financial_stability.map(RawRating::Label),
                timeline: None,
                experience: None,
            },
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

/// Reads bid rows keyed by column name; unknown columns are ignored.
pub struct BidCsvImporter;

impl BidCsvImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<RankEntry>, BidImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RankEntry>, BidImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut entries = Vec::new();
        for (index, row) in csv_reader.deserialize::<BidRow>().enumerate() {
            // header occupies line 1
            entries.push(row?.into_entry(index + 2));
        }
        Ok(entries)
    }
}
