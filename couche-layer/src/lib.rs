//! # couche-layer
//!
//! Abstraction de base des couches cartographiques : une couche stocke ses
//! géométries dans un CRS mais peut les présenter dans un autre.
//!
//! Le cœur du crate n'implémente pas les mathématiques de projection
//! (déléguées à `couche-crs`) mais la **politique** : quand et comment
//! obtenir, mémoriser, invalider et appliquer une transformation.
//!
//! ## Features
//!
//! - État CRS (SRID source, SRID cible optionnel à défaut dynamique) avec
//!   invalidation explicite des caches
//! - Résolution paresseuse des transformations directe et inverse via un
//!   service de CRS injectable
//! - Reprojection d'enveloppes et de géométries, identité quand aucune
//!   transformation n'est requise
//! - Notifications synchrones par listes d'observateurs
//! - Couche vectorielle en mémoire comme variante concrète
//!
//! ## Usage
//!
//! ```rust,ignore
//! use couche_layer::LayerCore;
//! use geo::{Coord, Rect};
//!
//! let mut core = LayerCore::new("parcelles");
//! core.set_srid(2154);
//! core.set_target_srid(3857);
//!
//! let envelope = Rect::new(
//!     Coord { x: 652381.0, y: 6862047.0 },
//!     Coord { x: 652481.0, y: 6862147.0 },
//! );
//! let projected = core.envelope_to_target(envelope)?;
//! ```

mod cache;
pub mod config;
pub mod core;
pub mod error;
pub mod events;
pub mod layer;
pub mod reproject;
pub mod style;
pub mod vector;

pub use config::LayerConfig;
pub use crate::core::LayerCore;
pub use error::LayerError;
pub use events::{
    NameChanged, ObserverList, RenderCompleted, SridChanged, StyleChanged, SubscriberId,
    TransformationChanged,
};
pub use layer::{Layer, RenderSurface, Viewport};
pub use reproject::envelope_with;
pub use style::{Style, VisibilityUnits};
pub use vector::VectorLayer;

pub use couche_crs as crs;
