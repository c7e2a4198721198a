//! Raw row shapes and their normalization into records

use pathograph_core::Record;
use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// One row as found in static files or query results. Every spelling the
/// upstream data uses is accepted; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptom_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor_label: Option<String>,
}

impl RawRow {
    /// Preferred disease name: `diseaseLabel`, then `label`, then `disease`.
    pub fn subject(&self) -> Option<&str> {
        first_label([&self.disease_label, &self.label, &self.disease])
    }

    pub fn symptom_name(&self) -> Option<&str> {
        first_label([&self.symptom_label, &self.symptom])
    }

    pub fn factor_name(&self) -> Option<&str> {
        first_label([&self.factor_label, &self.factor])
    }

    /// Upstream disease identifier, unless it is already serving as the label.
    pub fn subject_id(&self) -> Option<&str> {
        distinct_id(&self.disease, self.subject())
    }

    pub fn symptom_id(&self) -> Option<&str> {
        distinct_id(&self.symptom, self.symptom_name())
    }

    pub fn factor_id(&self) -> Option<&str> {
        distinct_id(&self.factor, self.factor_name())
    }
}

fn distinct_id<'a>(id: &'a Option<String>, label: Option<&str>) -> Option<&'a str> {
    first_label([id]).filter(|id| Some(*id) != label)
}

fn first_label<const N: usize>(candidates: [&Option<String>; N]) -> Option<&str> {
    candidates
        .into_iter()
        .filter_map(|candidate| candidate.as_deref())
        .map(str::trim)
        .find(|label| !label.is_empty())
}

/// Records produced from a batch of rows plus the rows that were rejected.
#[derive(Debug, Default)]
pub struct Normalized {
    pub records: Vec<Record>,
    pub rejected: Vec<SourceError>,
}

impl Normalized {
    pub fn extend(&mut self, other: Normalized) {
        self.records.extend(other.records);
        self.rejected.extend(other.rejected);
    }

    fn reject(&mut self, index: usize, reason: &str) {
        let err = SourceError::MalformedRow {
            index,
            reason: reason.to_string(),
        };
        tracing::warn!("Skipping row: {}", err);
        self.rejected.push(err);
    }
}

/// Turn association rows into records. A row may carry a symptom, a risk
/// factor, or both; rows with neither, or without a disease, are rejected.
pub fn normalize_rows(rows: &[RawRow]) -> Normalized {
    let mut out = Normalized::default();

    for (i, row) in rows.iter().enumerate() {
        let Some(subject) = row.subject() else {
            out.reject(i, "missing disease label");
            continue;
        };

        let symptom = row.symptom_name();
        let factor = row.factor_name();
        if symptom.is_none() && factor.is_none() {
            out.reject(i, "neither symptom nor risk factor present");
            continue;
        }

        let subject_id = row.subject_id();
        if let Some(symptom) = symptom {
            out.records
                .push(Record::symptom(subject, symptom).with_ids(subject_id, row.symptom_id()));
        }
        if let Some(factor) = factor {
            out.records
                .push(Record::risk_factor(subject, factor).with_ids(subject_id, row.factor_id()));
        }
    }

    tracing::debug!(
        "Normalized {} rows into {} records ({} rejected)",
        rows.len(),
        out.records.len(),
        out.rejected.len()
    );
    out
}

/// Turn a plain disease list (diseases associated with one exposure) into
/// risk-factor records pointing at `exposure`.
pub fn exposure_records(rows: &[RawRow], exposure: &str) -> Normalized {
    let mut out = Normalized::default();
    let exposure = exposure.trim();

    for (i, row) in rows.iter().enumerate() {
        match row.subject() {
            Some(subject) => out
                .records
                .push(Record::risk_factor(subject, exposure).with_ids(row.subject_id(), None)),
            None => out.reject(i, "missing disease label"),
        }
    }
    out
}
