//! Builder configuration, loadable from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::RelationKind;

/// How the eager layer under the root is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topology {
    /// Root is an exposure; one disease node per distinct record subject.
    #[default]
    DiseaseFirst,
    /// Root is the focus disease; one category node per relation kind.
    CategoryFirst,
}

/// Which diseases a risk-factor node expands into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskFactorExpansion {
    /// The risk factor is itself a known disease: expand into that disease.
    #[default]
    AsDisease,
    /// Expand into every disease that lists the risk factor.
    AffectedDiseases,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub topology: Topology,
    pub risk_factor_expansion: RiskFactorExpansion,
    /// Label of the symptom category node (category-first only).
    pub symptom_category: String,
    /// Label of the risk-factor category node (category-first only).
    pub risk_factor_category: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            topology: Topology::DiseaseFirst,
            risk_factor_expansion: RiskFactorExpansion::AsDisease,
            symptom_category: "Symptoms".to_string(),
            risk_factor_category: "Risk Factors".to_string(),
        }
    }
}

impl BuilderConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!("Loaded builder config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn category_label(&self, relation: RelationKind) -> &str {
        match relation {
            RelationKind::Symptom => &self.symptom_category,
            RelationKind::RiskFactor => &self.risk_factor_category,
        }
    }
}
