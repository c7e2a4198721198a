//! Record rollups used by bubble and pie charts

use crate::model::{Record, RelationKind};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Distinct symptoms recorded for one disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseSymptoms {
    pub disease: String,
    pub count: usize,
    pub symptoms: Vec<String>,
}

/// Number of distinct diseases presenting one symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomPrevalence {
    pub symptom: String,
    pub count: usize,
}

/// Group symptom records by disease. Sorted by symptom count, descending;
/// ties keep first-appearance order.
pub fn symptoms_by_disease(records: &[Record]) -> Vec<DiseaseSymptoms> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, (Vec<String>, HashSet<String>)> = HashMap::new();

    for (i, record) in symptom_records(records) {
        let Ok(record) = record.normalized(i) else {
            continue;
        };
        let (symptoms, seen) = groups.entry(record.subject.clone()).or_insert_with(|| {
            order.push(record.subject.clone());
            (Vec::new(), HashSet::new())
        });
        if seen.insert(record.object.clone()) {
            symptoms.push(record.object);
        }
    }

    let mut result: Vec<DiseaseSymptoms> = order
        .into_iter()
        .filter_map(|disease| {
            let (symptoms, _) = groups.remove(&disease)?;
            Some(DiseaseSymptoms {
                disease,
                count: symptoms.len(),
                symptoms,
            })
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}

/// Count distinct diseases per symptom. Sorted by count, descending; ties keep
/// first-appearance order.
pub fn diseases_by_symptom(records: &[Record]) -> Vec<SymptomPrevalence> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, HashSet<String>> = HashMap::new();

    for (i, record) in symptom_records(records) {
        let Ok(record) = record.normalized(i) else {
            continue;
        };
        groups
            .entry(record.object.clone())
            .or_insert_with(|| {
                order.push(record.object.clone());
                HashSet::new()
            })
            .insert(record.subject);
    }

    let mut result: Vec<SymptomPrevalence> = order
        .into_iter()
        .map(|symptom| {
            let count = groups.get(&symptom).map_or(0, HashSet::len);
            SymptomPrevalence { symptom, count }
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}

fn symptom_records(records: &[Record]) -> impl Iterator<Item = (usize, &Record)> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.relation == RelationKind::Symptom)
}
