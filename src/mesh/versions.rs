//! The two version axes a cooked record is gated on, plus the per-fork
//! feature version derived from the fork identifier.
//!
//! Thresholds live here as named constants so adding a new fork is a
//! localized change, matching how version constants are grouped in the
//! engine headers rather than scattered through the decoder.

use binrw::binrw;
use serde::Serialize;

/// Global engine schema version. Monotonically increasing across releases.
#[binrw]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[br(little)]
pub struct EngineVer(pub u32);

impl EngineVer {
    /// Navigation collision reference stored on the record from here on.
    pub const STORE_NAV_COLLISION: EngineVer = EngineVer(426);

    /// Newest schema this crate has been exercised against.
    pub const LATEST: EngineVer = EngineVer(522);
}

/// Per-game fork identifier: engine generation in the top byte, release
/// minor in the next. A fork can alter or skip fields independently of
/// [`EngineVer`].
#[binrw]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[br(little)]
pub struct Game(pub u32);

impl Game {
    pub const fn ue4(minor: u32) -> Game {
        Game((4 << 24) | (minor << 16))
    }

    /// Speed-tree wind flag appears on cooked records.
    pub const UE4_14: Game = Game::ue4(14);

    /// Occluder geometry appended to cooked records.
    pub const UE4_20: Game = Game::ue4(20);

    pub const UE4_27: Game = Game::ue4(27);
}

/// Per-fork feature version for editor-originated data. Independent of the
/// global schema version; derived from the fork identifier at archive
/// construction (callers never supply it directly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct EditorObjectVer(pub u32);

impl EditorObjectVer {
    pub const BEFORE_CUSTOM_VERSIONS: EditorObjectVer = EditorObjectVer(0);

    /// Material bindings moved from a bare reference array to the slot table.
    pub const REFACTOR_MESH_EDITOR_MATERIALS: EditorObjectVer = EditorObjectVer(8);

    pub const LATEST: EditorObjectVer = EditorObjectVer(40);

    /// Feature version a given fork ships with.
    pub fn for_game(game: Game) -> EditorObjectVer {
        if game >= Game::UE4_20 {
            EditorObjectVer::LATEST
        } else if game >= Game::UE4_14 {
            EditorObjectVer::REFACTOR_MESH_EDITOR_MATERIALS
        } else {
            EditorObjectVer::BEFORE_CUSTOM_VERSIONS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_ordered() {
        assert!(EngineVer::STORE_NAV_COLLISION < EngineVer::LATEST);
        assert!(Game::UE4_14 < Game::UE4_20);
        assert!(Game::UE4_20 < Game::UE4_27);
        assert!(Game::ue4(13) < Game::UE4_14);
    }

    #[test]
    fn fork_feature_version_mapping() {
        assert_eq!(
            EditorObjectVer::for_game(Game::ue4(12)),
            EditorObjectVer::BEFORE_CUSTOM_VERSIONS
        );
        assert_eq!(
            EditorObjectVer::for_game(Game::UE4_14),
            EditorObjectVer::REFACTOR_MESH_EDITOR_MATERIALS
        );
        assert!(
            EditorObjectVer::for_game(Game::UE4_27)
                >= EditorObjectVer::REFACTOR_MESH_EDITOR_MATERIALS
        );
    }
}
