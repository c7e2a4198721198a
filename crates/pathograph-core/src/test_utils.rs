//! Test fixtures for Pathograph

use crate::model::{NodeId, NodeKind, Record};

/// The smoking example: two diseases, one with symptoms, one with a risk factor.
pub fn smoking_records() -> Vec<Record> {
    vec![
        Record::symptom("Lung Cancer", "Cough"),
        Record::symptom("Lung Cancer", "Weight Loss"),
        Record::risk_factor("Heart Disease", "Hypertension"),
    ]
}

/// Two diseases sharing a symptom and a risk factor, plus a risk factor that
/// is itself a disease.
pub fn shared_records() -> Vec<Record> {
    vec![
        Record::symptom("Lung Cancer", "Cough"),
        Record::symptom("Lung Cancer", "Fatigue"),
        Record::symptom("COPD", "Cough"),
        Record::symptom("COPD", "Wheezing"),
        Record::risk_factor("Heart Disease", "Hypertension"),
        Record::risk_factor("Stroke", "Hypertension"),
        Record::risk_factor("Hypertension", "Obesity"),
        Record::symptom("Hypertension", "Headache"),
    ]
}

pub fn disease(name: &str) -> NodeId {
    NodeId::new(NodeKind::Disease, name)
}

pub fn symptom(name: &str) -> NodeId {
    NodeId::new(NodeKind::Symptom, name)
}

pub fn risk_factor(name: &str) -> NodeId {
    NodeId::new(NodeKind::RiskFactor, name)
}

pub fn root(name: &str) -> NodeId {
    NodeId::new(NodeKind::Root, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_ids() {
        assert_eq!(disease("COPD").as_str(), "disease:COPD");
        assert_eq!(risk_factor("Obesity").as_str(), "riskFactor:Obesity");
        assert_eq!(smoking_records().len(), 3);
    }
}
