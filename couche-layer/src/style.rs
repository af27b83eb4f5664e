//! Style d'une couche
//!
//! État simple consommé tel quel par le rendu : la couche ne valide rien.

use serde::{Deserialize, Serialize};

/// Unité dans laquelle les seuils de visibilité sont exprimés
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityUnits {
    /// Largeur de la vue en unités carte (zoom)
    ZoomLevel,
    /// Dénominateur d'échelle
    Scale,
}

/// Style d'une couche : activation et plage de visibilité
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// La couche participe-t-elle au rendu
    pub enabled: bool,

    /// Seuil bas de visibilité
    pub min_visible: f64,

    /// Seuil haut de visibilité
    pub max_visible: f64,

    /// Unité des seuils
    pub visibility_units: VisibilityUnits,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            enabled: true,
            min_visible: 0.0,
            max_visible: f64::MAX,
            visibility_units: VisibilityUnits::ZoomLevel,
        }
    }
}

impl Style {
    /// Vrai si la couche doit être dessinée pour ce zoom / cette échelle
    pub fn visible_at(&self, zoom: f64, scale: f64) -> bool {
        if !self.enabled {
            return false;
        }
        let value = match self.visibility_units {
            VisibilityUnits::ZoomLevel => zoom,
            VisibilityUnits::Scale => scale,
        };
        value >= self.min_visible && value <= self.max_visible
    }
}
