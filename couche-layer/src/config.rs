//! Configuration d'une couche
//!
//! Chargement JSON d'un nom, des SRID et du style, applicable à un
//! [`LayerCore`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use couche_crs::SRID_UNSET;

use crate::core::LayerCore;
use crate::error::LayerError;
use crate::style::Style;

/// Configuration déclarative d'une couche
#[derive(Debug, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Nom de la couche
    pub name: String,

    /// SRID des géométries stockées
    #[serde(default = "default_srid")]
    pub srid: i32,

    /// SRID de présentation explicite (sinon défaut dynamique : le SRID)
    #[serde(default)]
    pub target_srid: Option<i32>,

    /// Style de la couche
    #[serde(default)]
    pub style: Style,
}

fn default_srid() -> i32 {
    SRID_UNSET
}

impl LayerConfig {
    /// Charge une configuration depuis un fichier JSON
    pub fn load(path: &Path) -> Result<Self, LayerError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Parse une configuration depuis une chaîne JSON
    pub fn from_json(json: &str) -> Result<Self, LayerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applique la configuration à un cœur de couche
    pub fn apply(&self, core: &mut LayerCore) {
        core.set_name(self.name.clone());
        core.set_srid(self.srid);
        if let Some(target) = self.target_srid {
            core.set_target_srid(target);
        }
        core.set_style(self.style.clone());
    }
}
