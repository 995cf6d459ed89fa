use crate::model::{ColorMode, WalScheme};

/// Anything that can hand out the precomputed light and dark wal schemes.
///
/// The palette generator is a collaborator outside this crate; all the
/// engine needs from it is these two accessors.
pub trait SchemeSource {
    fn wal_light_scheme(&self) -> &WalScheme;

    fn wal_dark_scheme(&self) -> &WalScheme;

    fn scheme_for(&self, mode: ColorMode) -> &WalScheme {
        match mode {
            ColorMode::Light => self.wal_light_scheme(),
            ColorMode::Dark => self.wal_dark_scheme(),
        }
    }
}

/// A light/dark scheme pair held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemePair {
    pub light: WalScheme,
    pub dark: WalScheme,
}

impl SchemePair {
    pub fn new(light: WalScheme, dark: WalScheme) -> Self {
        Self { light, dark }
    }
}

impl SchemeSource for SchemePair {
    fn wal_light_scheme(&self) -> &WalScheme {
        &self.light
    }

    fn wal_dark_scheme(&self) -> &WalScheme {
        &self.dark
    }
}
