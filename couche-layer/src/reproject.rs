//! Reprojection d'enveloppes et de géométries
//!
//! Fonctions pures vis-à-vis de leurs entrées : elles consomment les
//! transformations mémorisées du [`LayerCore`] (en déclenchant au besoin
//! leur résolution paresseuse) mais ne modifient jamais l'état CRS.
//!
//! Quand aucune transformation n'est nécessaire, toutes ces opérations sont
//! des identités. Le repli cible → source passe par une inversion **pure**
//! de la transformation directe : la transformation mémorisée reste dans sa
//! direction déclarée, même si la projection d'un point échoue ensuite.

use geo::Rect;

use couche_crs::{transform_geometry, transform_rect, CrsError, MathTransform, SridGeometry};

use crate::core::LayerCore;
use crate::error::LayerError;

/// Reprojette une enveloppe avec une transformation explicite
///
/// Identité quand `transform` est `None` ; sinon les quatre coins sont
/// projetés et la boîte englobante des points obtenus est retournée.
pub fn envelope_with(
    envelope: Rect<f64>,
    transform: Option<&dyn MathTransform>,
) -> Result<Rect<f64>, CrsError> {
    match transform {
        Some(t) => transform_rect(t, envelope),
        None => Ok(envelope),
    }
}

impl LayerCore {
    /// Reprojette une enveloppe du CRS source vers le CRS de présentation
    pub fn envelope_to_target(&mut self, envelope: Rect<f64>) -> Result<Rect<f64>, LayerError> {
        let transform = self.forward_transformation()?;
        Ok(envelope_with(envelope, transform.as_deref())?)
    }

    /// Reprojette une enveloppe du CRS de présentation vers le CRS source
    ///
    /// Applique la transformation inverse si elle est résolvable, sinon se
    /// replie sur l'inversion de la transformation directe, sinon identité.
    pub fn envelope_to_source(&mut self, envelope: Rect<f64>) -> Result<Rect<f64>, LayerError> {
        if let Some(t) = self.reverse_transformation()? {
            return Ok(transform_rect(t.as_ref(), envelope)?);
        }
        if let Some(t) = self.forward_transformation()? {
            let inverse = t.inverted()?;
            return Ok(transform_rect(inverse.as_ref(), envelope)?);
        }
        Ok(envelope)
    }

    /// Reprojette une géométrie vers le CRS de présentation
    ///
    /// Court-circuit : une géométrie déjà étiquetée du SRID cible est
    /// retournée telle quelle, sans passer par le service.
    pub fn geometry_to_target(
        &mut self,
        geometry: SridGeometry,
    ) -> Result<SridGeometry, LayerError> {
        if geometry.srid == self.target_srid() {
            return Ok(geometry);
        }
        match self.forward_transformation()? {
            Some(t) => {
                let transformed = transform_geometry(t.as_ref(), &geometry.geometry)?;
                Ok(self.target_factory().geometry(transformed))
            }
            None => Ok(geometry),
        }
    }

    /// Reprojette une géométrie vers le CRS source
    ///
    /// Symétrique de [`geometry_to_target`](Self::geometry_to_target) :
    /// transformation inverse directe, ou inversion de la transformation
    /// directe en repli, contre la fabrique source.
    pub fn geometry_to_source(
        &mut self,
        geometry: SridGeometry,
    ) -> Result<SridGeometry, LayerError> {
        if geometry.srid == self.srid() {
            return Ok(geometry);
        }
        if let Some(t) = self.reverse_transformation()? {
            let transformed = transform_geometry(t.as_ref(), &geometry.geometry)?;
            return Ok(self.source_factory().geometry(transformed));
        }
        if let Some(t) = self.forward_transformation()? {
            let inverse = t.inverted()?;
            let transformed = transform_geometry(inverse.as_ref(), &geometry.geometry)?;
            return Ok(self.source_factory().geometry(transformed));
        }
        Ok(geometry)
    }
}
