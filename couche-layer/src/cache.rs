//! Emplacements de cache explicites
//!
//! Chaque valeur résolue paresseusement (transformations, fabriques) vit
//! dans un [`Cached`] : non résolu ou résolu, invalidé explicitement par les
//! mutateurs d'état CRS plutôt que par une sentinelle nulle.

/// Un emplacement de cache : non résolu, ou résolu avec une valeur
#[derive(Debug, Clone, Default)]
pub(crate) enum Cached<T> {
    /// Pas encore résolu (ou invalidé)
    #[default]
    Unresolved,
    /// Valeur résolue et mémorisée
    Resolved(T),
}

impl<T> Cached<T> {
    /// Valeur mémorisée, si résolue
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Unresolved => None,
            Self::Resolved(value) => Some(value),
        }
    }

    /// Mémorise une valeur
    pub fn set(&mut self, value: T) {
        *self = Self::Resolved(value);
    }

    /// Repasse l'emplacement à non résolu
    pub fn invalidate(&mut self) {
        *self = Self::Unresolved;
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}
