//! Couche vectorielle en mémoire
//!
//! Variante concrète de [`Layer`] : des géométries stockées dans le CRS
//! source, reprojetées à la volée vers le CRS de présentation au moment du
//! rendu.

use geo::{Geometry, Rect};
use tracing::debug;

use couche_crs::SridGeometry;

use crate::core::LayerCore;
use crate::error::LayerError;
use crate::layer::{Layer, RenderSurface, Viewport};

/// Couche de géométries en mémoire
pub struct VectorLayer {
    core: LayerCore,
    features: Vec<SridGeometry>,
}

impl VectorLayer {
    /// Crée une couche vide dont les géométries seront stockées dans `srid`
    pub fn new(name: impl Into<String>, srid: i32) -> Self {
        let mut core = LayerCore::new(name);
        core.set_srid(srid);
        Self {
            core,
            features: Vec::new(),
        }
    }

    /// Ajoute une géométrie, étiquetée du SRID source de la couche
    pub fn add_feature(&mut self, geometry: Geometry<f64>) {
        let feature = self.core.source_factory().geometry(geometry);
        self.features.push(feature);
    }

    pub fn features(&self) -> &[SridGeometry] {
        &self.features
    }
}

impl Layer for VectorLayer {
    fn core(&self) -> &LayerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LayerCore {
        &mut self.core
    }

    /// Union des boîtes englobantes des géométries, reprojetée vers le CRS
    /// de présentation ; `None` pour une couche vide
    fn envelope(&mut self) -> Result<Option<Rect<f64>>, LayerError> {
        let mut union: Option<Rect<f64>> = None;

        for feature in &self.features {
            let Some(rect) = feature.bounding_rect() else {
                continue;
            };
            union = Some(match union {
                None => rect,
                Some(acc) => Rect::new(
                    geo::Coord {
                        x: acc.min().x.min(rect.min().x),
                        y: acc.min().y.min(rect.min().y),
                    },
                    geo::Coord {
                        x: acc.max().x.max(rect.max().x),
                        y: acc.max().y.max(rect.max().y),
                    },
                ),
            });
        }

        match union {
            Some(rect) => Ok(Some(self.core.envelope_to_target(rect)?)),
            None => Ok(None),
        }
    }

    fn render(
        &mut self,
        surface: &mut dyn RenderSurface,
        viewport: &Viewport,
    ) -> Result<(), LayerError> {
        if !self.is_visible(viewport) {
            debug!(couche = %self.core.name(), "couche hors plage de visibilité, rendu sauté");
            self.core.notify_render_completed();
            return Ok(());
        }

        let mut drawn = 0usize;
        for feature in self.features.clone() {
            let projected = self.core.geometry_to_target(feature)?;
            surface.draw(&projected, self.core.style());
            drawn += 1;
        }

        debug!(couche = %self.core.name(), geometries = drawn, "rendu terminé");
        self.core.notify_render_completed();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coord, Point};

    #[test]
    fn test_enveloppe_vide() {
        let mut layer = VectorLayer::new("vide", 4326);
        assert!(layer.envelope().unwrap().is_none());
    }

    #[test]
    fn test_enveloppe_union() {
        let mut layer = VectorLayer::new("points", 4326);
        layer.add_feature(Geometry::Point(Point::new(-1.0, -1.0)));
        layer.add_feature(Geometry::Point(Point::new(1.0, 1.0)));

        // Pas de reprojection : cible = source
        let rect = layer.envelope().unwrap().unwrap();
        assert_eq!(rect.min(), Coord { x: -1.0, y: -1.0 });
        assert_eq!(rect.max(), Coord { x: 1.0, y: 1.0 });
    }

    #[test]
    fn test_etiquetage_des_geometries() {
        let mut layer = VectorLayer::new("points", 2154);
        layer.add_feature(Geometry::Point(Point::new(652381.0, 6862047.0)));

        assert_eq!(layer.features()[0].srid, 2154);
    }
}
