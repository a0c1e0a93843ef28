//! Case record types.
//!
//! The search API returns one deeply nested document per case. Each nested
//! block gets its own struct, owned by the [`Record`] that contains it.
//!
//! Every struct here is decoded leniently: a missing field or an explicit
//! `null` becomes the field's zero value instead of failing the whole page.
//! A field that is present with the wrong shape is still a decode error.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::de::nullable;

/// One case returned by the search API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub name_abbreviation: String,
    /// Decision date as sent, usually `YYYY-MM-DD` but sometimes truncated.
    #[serde(deserialize_with = "nullable")]
    pub decision_date: String,
    #[serde(deserialize_with = "nullable")]
    pub docket_number: String,
    #[serde(deserialize_with = "nullable")]
    pub first_page: String,
    #[serde(deserialize_with = "nullable")]
    pub last_page: String,
    #[serde(deserialize_with = "nullable")]
    pub citations: Vec<Citation>,
    #[serde(deserialize_with = "nullable")]
    pub volume: Volume,
    #[serde(deserialize_with = "nullable")]
    pub reporter: Reporter,
    #[serde(deserialize_with = "nullable")]
    pub court: Court,
    #[serde(deserialize_with = "nullable")]
    pub jurisdiction: Jurisdiction,
    /// Outbound citations. Referenced ids may belong to cases outside the
    /// current page and are not resolved.
    #[serde(deserialize_with = "nullable")]
    pub cites_to: Vec<CitesTo>,
    #[serde(deserialize_with = "nullable")]
    pub frontend_url: String,
    #[serde(deserialize_with = "nullable")]
    pub frontend_pdf_url: String,
    #[serde(deserialize_with = "nullable")]
    pub preview: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub analysis: Analysis,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Record {
    /// Parse [`Record::decision_date`].
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY-MM` and `YYYY`; partial dates resolve to
    /// the first day of the period.
    pub fn decided_on(&self) -> Option<NaiveDate> {
        let raw = self.decision_date.trim();
        let mut parts = raw.splitn(3, '-');

        let year = parts.next()?.parse::<i32>().ok()?;
        let month = match parts.next() {
            Some(m) => m.parse::<u32>().ok()?,
            None => 1,
        };
        let day = match parts.next() {
            Some(d) => d.parse::<u32>().ok()?,
            None => 1,
        };

        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// The official citation if there is one, otherwise the first listed.
    pub fn primary_citation(&self) -> Option<&Citation> {
        self.citations
            .iter()
            .find(|c| c.kind == "official")
            .or_else(|| self.citations.first())
    }
}

/// A citation string for the case, e.g. `("official", "410 U.S. 113")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Citation {
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable")]
    pub cite: String,
}

/// The bound volume the case was published in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub volume_number: String,
    #[serde(deserialize_with = "nullable")]
    pub barcode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reporter {
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub full_name: String,
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Court {
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub name_abbreviation: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Jurisdiction {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name_long: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub whitelisted: bool,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

/// A case cited by this one, with the ids the source matched it to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitesTo {
    #[serde(deserialize_with = "nullable")]
    pub cite: String,
    #[serde(deserialize_with = "nullable")]
    pub case_ids: Vec<u64>,
}

/// Text statistics computed by the source over the case body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analysis {
    #[serde(deserialize_with = "nullable")]
    pub word_count: u64,
    /// Hex SHA-256 of the case text, kept exactly as sent.
    #[serde(deserialize_with = "nullable")]
    pub sha256: String,
    /// OCR confidence, nominally 0.0 to 1.0. Not range checked.
    #[serde(deserialize_with = "nullable")]
    pub ocr_confidence: f64,
    #[serde(deserialize_with = "nullable")]
    pub char_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub pagerank: Pagerank,
    #[serde(deserialize_with = "nullable")]
    pub cardinality: u64,
    #[serde(deserialize_with = "nullable")]
    pub simhash: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagerank {
    #[serde(deserialize_with = "nullable")]
    pub percentile: f64,
    #[serde(deserialize_with = "nullable")]
    pub raw: f64,
}
