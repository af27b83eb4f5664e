//! # couche-crs
//!
//! Primitives CRS pour la pile cartographique `couche` : résolution de codes
//! d'autorité, transformations de coordonnées et géométries étiquetées par
//! leur SRID.
//!
//! ## Features
//!
//! - Registre EPSG natif (WGS84, Web Mercator, Lambert 93, zones UTM) en
//!   Rust pur
//! - Transformations à inversion pure (pas de mutation en place)
//! - Application aux coordonnées, enveloppes et géométries `geo`
//! - Fallback PROJ pour tout autre code EPSG avec le feature `reproject`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use couche_crs::{CrsRegistry, CrsService};
//! use geo::Coord;
//!
//! let registry = CrsRegistry::new();
//! let source = registry.coordinate_system(4326)?;
//! let target = registry.coordinate_system(3857)?;
//! let t = registry.create_transformation(&source, &target)?;
//!
//! let c = t.apply(Coord { x: 2.35, y: 48.85 })?;
//! ```

pub mod error;
pub mod geometry;
pub mod registry;
pub mod service;
pub mod transform;

pub use error::CrsError;
pub use geometry::{GeometryFactory, SridGeometry};
pub use registry::{Crs, CrsKind, CrsRegistry, SRID_NONE, SRID_UNSET};
pub use service::CrsService;
pub use transform::{
    transform_geometry, transform_rect, ArcTransform, ChainTransform, Geographic, MathTransform,
};
#[cfg(feature = "reproject")]
pub use transform::ProjTransform;
