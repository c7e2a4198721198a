//! Lookup tables over normalized records

use std::collections::{HashMap, HashSet};

use crate::error::GraphError;
use crate::model::{Record, RelationKind};

/// Records grouped by entity name, preserving first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    subjects: Vec<String>,
    related: HashMap<String, Vec<(RelationKind, String)>>,
    /// risk factor -> diseases listing it
    affected: HashMap<String, Vec<String>>,
    /// upstream id -> subject label, first one wins
    subject_by_id: HashMap<String, String>,
    /// risk factor label -> upstream ids it was recorded with
    factor_ids: HashMap<String, Vec<String>>,
    len: usize,
}

impl RecordIndex {
    /// Index `records`, skipping malformed or duplicate ones. Malformed records
    /// are logged and returned alongside the index.
    pub fn build(records: &[Record]) -> (Self, Vec<GraphError>) {
        let mut index = RecordIndex::default();
        let mut skipped = Vec::new();
        let mut seen = HashSet::new();

        for (i, raw) in records.iter().enumerate() {
            let record = match raw.normalized(i) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Skipping record: {}", e);
                    skipped.push(e);
                    continue;
                }
            };
            let Record {
                subject,
                object,
                relation,
                subject_id,
                object_id,
            } = record;

            if let Some(id) = subject_id {
                index.subject_by_id.entry(id).or_insert_with(|| subject.clone());
            }
            if let (RelationKind::RiskFactor, Some(id)) = (relation, object_id) {
                let ids = index.factor_ids.entry(object.clone()).or_default();
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            if !seen.insert((subject.clone(), object.clone(), relation)) {
                continue;
            }

            if !index.related.contains_key(&subject) {
                index.subjects.push(subject.clone());
            }
            if relation == RelationKind::RiskFactor {
                index
                    .affected
                    .entry(object.clone())
                    .or_default()
                    .push(subject.clone());
            }
            index
                .related
                .entry(subject)
                .or_default()
                .push((relation, object));
            index.len += 1;
        }

        (index, skipped)
    }

    /// Distinct subjects in first-appearance order.
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Every (relation, object) pair recorded for `subject`, in input order.
    pub fn related(&self, subject: &str) -> &[(RelationKind, String)] {
        self.related.get(subject).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn objects<'a>(
        &'a self,
        subject: &str,
        relation: RelationKind,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.related(subject)
            .iter()
            .filter(move |(kind, _)| *kind == relation)
            .map(|(_, object)| object.as_str())
    }

    /// Relation kinds present for `subject`, in [`RelationKind::ALL`] order.
    pub fn relations_of(&self, subject: &str) -> Vec<RelationKind> {
        let related = self.related(subject);
        RelationKind::ALL
            .into_iter()
            .filter(|relation| related.iter().any(|(kind, _)| kind == relation))
            .collect()
    }

    /// Diseases that list `factor` as a risk factor.
    pub fn diseases_with_risk_factor(&self, factor: &str) -> &[String] {
        self.affected.get(factor).map(Vec::as_slice).unwrap_or_default()
    }

    /// Diseases a risk factor stands for: the disease with the same label,
    /// then diseases sharing one of the factor's upstream ids.
    pub fn diseases_named_by_factor(&self, factor: &str) -> Vec<&str> {
        let mut diseases = Vec::new();
        if let Some((name, _)) = self.related.get_key_value(factor) {
            diseases.push(name.as_str());
        }
        for id in self.factor_ids.get(factor).map(Vec::as_slice).unwrap_or_default() {
            if let Some(subject) = self.subject_by_id.get(id) {
                if !diseases.contains(&subject.as_str()) {
                    diseases.push(subject.as_str());
                }
            }
        }
        diseases
    }

    /// Number of distinct valid records.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
