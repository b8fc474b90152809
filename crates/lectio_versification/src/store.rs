//! Named versification systems and the translation aliases that select them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use lectio_foundation::{Error, LtMap, Result};

use crate::data;
use crate::system::VersificationSystem;

/// A translation abbreviation bound to a versification system.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TranslationAlias {
    /// The alias as it is reported in results (`NIV`, `口語訳`).
    pub name: String,
    /// The versification system the translation uses.
    pub system: String,
}

/// Loaded versification systems plus translation aliases.
///
/// Lookups of both systems and aliases ignore case.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TranslationStore {
    systems: LtMap<String, VersificationSystem>,
    aliases: LtMap<String, TranslationAlias>,
}

impl TranslationStore {
    /// Creates a store with no systems and no aliases.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            systems: LtMap::new(),
            aliases: LtMap::new(),
        }
    }

    /// Creates a store with the built-in systems and aliases.
    #[must_use]
    pub fn builtin() -> Self {
        let store = [
            VersificationSystem::default_system(),
            VersificationSystem::kjv(),
            VersificationSystem::nrsv(),
            VersificationSystem::nab(),
            VersificationSystem::vulgate(),
        ]
        .into_iter()
        .fold(Self::empty(), Self::with_system);

        data::BUILTIN_ALIASES
            .iter()
            .fold(store, |store, (alias, system)| store.with_alias(*alias, *system))
    }

    /// Adds or replaces a system, keyed by its name.
    #[must_use]
    pub fn with_system(mut self, system: VersificationSystem) -> Self {
        self.systems = self.systems.insert(key(system.name()), system);
        self
    }

    /// Binds a translation alias to a system name.
    ///
    /// The system does not have to be loaded yet; [`Self::system_for_alias`]
    /// reports the error when the alias is used.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>, system: impl Into<String>) -> Self {
        let name = alias.into();
        let entry = TranslationAlias {
            system: system.into(),
            name: name.clone(),
        };
        self.aliases = self.aliases.insert(key(&name), entry);
        self
    }

    /// Adds or replaces a system in place.
    pub fn add_system(&mut self, system: VersificationSystem) {
        *self = std::mem::replace(self, Self::empty()).with_system(system);
    }

    /// Binds an alias in place.
    pub fn add_alias(&mut self, alias: impl Into<String>, system: impl Into<String>) {
        *self = std::mem::replace(self, Self::empty()).with_alias(alias, system);
    }

    /// Looks up a system by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no system with that name is loaded.
    pub fn system(&self, name: &str) -> Result<&VersificationSystem> {
        self.systems
            .get(&key(name))
            .ok_or_else(|| Error::unknown_versification(name))
    }

    /// Looks up a translation alias.
    #[must_use]
    pub fn alias(&self, alias: &str) -> Option<&TranslationAlias> {
        self.aliases.get(&key(alias))
    }

    /// Returns true if the alias is known.
    #[must_use]
    pub fn is_alias(&self, alias: &str) -> bool {
        self.aliases.contains_key(&key(alias))
    }

    /// Resolves an alias to the system it uses.
    ///
    /// # Errors
    ///
    /// Returns an error if the alias is bound to a system that is not loaded.
    /// Returns `Ok(None)` for an unknown alias.
    pub fn system_for_alias(&self, alias: &str) -> Result<Option<&VersificationSystem>> {
        match self.alias(alias) {
            Some(entry) => self.system(&entry.system).map(Some),
            None => Ok(None),
        }
    }

    /// Names of the loaded systems, sorted.
    #[must_use]
    pub fn system_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.systems.iter().map(|(_, s)| s.name()).collect();
        names.sort_unstable();
        names
    }

    /// Aliases in the store, sorted by name.
    #[must_use]
    pub fn aliases(&self) -> Vec<&TranslationAlias> {
        let mut aliases: Vec<&TranslationAlias> = self.aliases.iter().map(|(_, a)| a).collect();
        aliases.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        aliases
    }
}

impl Default for TranslationStore {
    fn default() -> Self {
        Self::builtin()
    }
}

fn key(name: &str) -> String {
    name.to_uppercase()
}
