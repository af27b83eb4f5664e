//! Registre des CRS supportés
//!
//! La couverture native (Rust pur) correspond aux besoins cartographiques
//! courants : WGS84, Web Mercator, Lambert 93 et toutes les zones UTM.
//! Avec le feature `reproject`, tout autre code EPSG est délégué à PROJ.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::CrsError;
use crate::service::CrsService;
use crate::transform::{ArcTransform, ChainTransform};

/// SRID "non défini" (valeur initiale d'une couche)
pub const SRID_UNSET: i32 = -1;

/// SRID sentinelle "pas de CRS" : exclu des tests de transformation
pub const SRID_NONE: i32 = 0;

/// Famille de projection d'un CRS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrsKind {
    /// Coordonnées géographiques en degrés (EPSG:4326)
    Geographic,
    /// Web Mercator sphérique (EPSG:3857)
    WebMercator,
    /// Lambert 93 (EPSG:2154)
    Lambert93,
    /// Zone UTM nord ou sud (EPSG:326xx / 327xx)
    Utm { zone: u8, south: bool },
    /// CRS résolu par PROJ uniquement
    #[cfg(feature = "reproject")]
    External,
}

/// Un système de référence de coordonnées identifié par son code d'autorité
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crs {
    srid: i32,
    kind: CrsKind,
}

impl Crs {
    pub(crate) fn new(srid: i32, kind: CrsKind) -> Self {
        Self { srid, kind }
    }

    /// Code d'autorité (EPSG)
    pub fn srid(&self) -> i32 {
        self.srid
    }

    pub fn kind(&self) -> CrsKind {
        self.kind
    }

    /// Vrai pour un CRS en coordonnées géographiques (degrés)
    pub fn is_geographic(&self) -> bool {
        matches!(self.kind, CrsKind::Geographic)
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.srid)
    }
}

/// Registre par défaut : résolution de codes EPSG et création de
/// transformations natives (avec fallback PROJ sous feature `reproject`)
#[derive(Debug, Default)]
pub struct CrsRegistry;

impl CrsRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl CrsService for CrsRegistry {
    fn coordinate_system(&self, srid: i32) -> Result<Crs, CrsError> {
        let kind = match srid {
            4326 => CrsKind::Geographic,
            3857 => CrsKind::WebMercator,
            2154 => CrsKind::Lambert93,
            32601..=32660 => CrsKind::Utm {
                zone: (srid - 32600) as u8,
                south: false,
            },
            32701..=32760 => CrsKind::Utm {
                zone: (srid - 32700) as u8,
                south: true,
            },
            #[cfg(feature = "reproject")]
            _ if srid > 0 => CrsKind::External,
            _ => return Err(CrsError::UnknownSrid(srid)),
        };

        Ok(Crs::new(srid, kind))
    }

    fn create_transformation(&self, source: &Crs, target: &Crs) -> Result<ArcTransform, CrsError> {
        debug!(source = %source, target = %target, "création de la transformation");

        #[cfg(feature = "reproject")]
        if matches!(source.kind(), CrsKind::External) || matches!(target.kind(), CrsKind::External)
        {
            use crate::transform::ProjTransform;
            return Ok(Arc::new(ProjTransform::new(source.srid(), target.srid())?));
        }

        let chain = ChainTransform::for_pair(*source, *target)
            .map_err(|_| CrsError::no_path(source.srid(), target.srid()))?;
        Ok(Arc::new(chain))
    }
}
