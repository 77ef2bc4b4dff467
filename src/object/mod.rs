//! Deferred cross-reference handles.
//!
//! A [`PackageIndex`] is a stable key into a package's import/export space;
//! materializing the referenced object is owned by surrounding tooling. This
//! module only defines the key and the lookup capability the converter uses
//! at resolution time — a handle that resolves to nothing is a valid state,
//! not a fault.

use std::collections::HashMap;

use binrw::binrw;
use serde::Serialize;

/// Stable cross-reference key. Zero is the null reference; positive values
/// index exports, negative values index imports.
#[binrw]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[br(little)]
pub struct PackageIndex(pub i32);

impl PackageIndex {
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// An already-materialized object, as far as this crate cares: a name the
/// interchange model can carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedObject {
    pub name: String,
}

impl ResolvedObject {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Lookup capability against an externally-owned object table.
pub trait ObjectResolver {
    fn resolve(&self, index: PackageIndex) -> Option<ResolvedObject>;
}

/// Resolver with no table behind it; every handle is missing.
pub struct NullResolver;

impl ObjectResolver for NullResolver {
    fn resolve(&self, _index: PackageIndex) -> Option<ResolvedObject> {
        None
    }
}

/// HashMap-backed resolver for tooling and tests.
#[derive(Debug, Default)]
pub struct TableResolver {
    entries: HashMap<PackageIndex, ResolvedObject>,
}

impl TableResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: PackageIndex, object: ResolvedObject) {
        self.entries.insert(index, object);
    }

    pub fn with(mut self, index: i32, name: &str) -> Self {
        self.insert(PackageIndex(index), ResolvedObject::named(name));
        self
    }
}

impl ObjectResolver for TableResolver {
    fn resolve(&self, index: PackageIndex) -> Option<ResolvedObject> {
        if index.is_null() {
            return None;
        }
        self.entries.get(&index).cloned()
    }
}
