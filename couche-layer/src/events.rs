//! Protocole de notification de changement
//!
//! Une [`ObserverList`] par type d'évènement : abonnement, désabonnement,
//! déclenchement synchrone dans l'ordre d'inscription, sur le thread
//! appelant. Déclencher sans abonné est un no-op. Les paniques d'un abonné
//! ne sont pas rattrapées ici.

/// Identifiant d'abonnement, pour se désabonner plus tard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Observer<E> = Box<dyn FnMut(&E)>;

/// Liste d'observateurs pour un type d'évènement donné
pub struct ObserverList<E> {
    next_id: u64,
    entries: Vec<(SubscriberId, Observer<E>)>,
}

impl<E> Default for ObserverList<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E> ObserverList<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inscrit un observateur ; il sera appelé dans l'ordre d'inscription
    pub fn subscribe(&mut self, observer: impl FnMut(&E) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Désinscrit un observateur ; retourne vrai s'il était inscrit
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Notifie tous les observateurs, dans l'ordre d'inscription
    pub fn fire(&mut self, event: &E) {
        for (_, observer) in &mut self.entries {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> std::fmt::Debug for ObserverList<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("len", &self.entries.len())
            .finish()
    }
}

/// Le SRID de la couche a changé
#[derive(Debug, Clone, Copy)]
pub struct SridChanged {
    pub previous: i32,
    pub current: i32,
}

/// La transformation directe de la couche a changé
#[derive(Debug, Clone, Copy)]
pub struct TransformationChanged {
    pub source: i32,
    pub target: i32,
}

/// Le style de la couche a changé
#[derive(Debug, Clone, Copy)]
pub struct StyleChanged;

/// Le nom de la couche a changé
#[derive(Debug, Clone)]
pub struct NameChanged {
    pub previous: String,
    pub current: String,
}

/// Le rendu de la couche est terminé
#[derive(Debug, Clone, Copy)]
pub struct RenderCompleted;
