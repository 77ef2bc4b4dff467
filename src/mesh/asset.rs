//! Root asset record and the sequential decoder over the byte stream.
//!
//! Decode order:
//! ```text
//! strip flags(2) — editor data must already be stripped
//! is_cooked(4)
//! body_setup ref(4) [+ nav_collision ref(4) from the nav-collision schema on]
//! lighting guid(16)
//! socket refs: count(4) + count × ref(4)
//! render data (see render_data.rs)
//! [cooked, UE4.20-era forks] occluder flag(4) [+ position array + u16 index array, discarded]
//! [UE4.14-era forks] speed-tree wind flag(4) — when set, seek to end-of-record and stop
//! [post-refactor editor version] material slots: count(4) + count × slot
//! ```
//! The stream is left at the end-of-record offset on every successful exit.

use std::io::{Read, Seek};

use binrw::BinRead;
use serde::Serialize;

use crate::archive::AssetArchive;
use crate::math::{UeGuid, UeVector3};
use crate::mesh::error::{MeshError, Result};
use crate::mesh::render_data::RenderData;
use crate::mesh::strip::StripDataFlags;
use crate::mesh::versions::{EditorObjectVer, EngineVer, Game};
use crate::object::PackageIndex;

/// How far the decoder got. `SpeedTreeSkipped` is a designed early-success
/// path, not an error: render data is populated, materials are absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DecodeStatus {
    Complete,
    SpeedTreeSkipped,
}

/// One material slot from the post-refactor slot table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticMeshSlot {
    pub material: PackageIndex,
    pub slot_name: String,
    pub uv_density: [f32; 4],
}

impl StaticMeshSlot {
    fn read<R: Read + Seek>(ar: &mut AssetArchive<R>) -> Result<Self> {
        let material = PackageIndex::read_le(ar)?;
        let slot_name = ar.read_string()?;
        let uv_density = <[f32; 4]>::read_le(ar)?;
        Ok(Self {
            material,
            slot_name,
            uv_density,
        })
    }
}

/// Decoded static-mesh record. Immutable once constructed; material handles
/// stay deferred until the converter resolves them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticMeshAsset {
    pub is_cooked: bool,
    pub body_setup: PackageIndex,
    pub nav_collision: Option<PackageIndex>,
    pub lighting_guid: UeGuid,
    pub sockets: Vec<PackageIndex>,
    pub render_data: Option<RenderData>,
    pub material_slots: Option<Vec<StaticMeshSlot>>,
    pub material_refs: Option<Vec<PackageIndex>>,
    pub status: DecodeStatus,
}

impl StaticMeshAsset {
    pub fn deserialize<R: Read + Seek>(ar: &mut AssetArchive<R>) -> Result<Self> {
        let strip_flags = StripDataFlags::read_le(ar)?;
        if !strip_flags.is_editor_data_stripped() {
            // Editor block has no stored length; it cannot be skipped.
            return Err(MeshError::NotSupported(
                "record carries editor-only data".into(),
            ));
        }

        let is_cooked = ar.read_bool()?;
        let body_setup = PackageIndex::read_le(ar)?;
        let nav_collision = if ar.ver() >= EngineVer::STORE_NAV_COLLISION {
            Some(PackageIndex::read_le(ar)?)
        } else {
            None
        };

        let lighting_guid = UeGuid::read_le(ar)?;
        let sockets = ar.read_array::<PackageIndex>()?;

        let render_data = RenderData::read(ar)?;

        if is_cooked && ar.game() >= Game::UE4_20 {
            let has_occluder_data = ar.read_bool()?;
            if has_occluder_data {
                // Occluder geometry is not part of the interchange model;
                // the bytes still have to be consumed to keep the stream
                // aligned with the next field.
                let _occluder_verts: Vec<UeVector3> = ar.read_array()?;
                let _occluder_indices: Vec<u16> = ar.read_array()?;
            }
        }

        let mut material_slots = None;
        let mut status = DecodeStatus::Complete;
        if ar.game() >= Game::UE4_14 {
            let has_speed_tree_wind = ar.read_bool()?;
            if has_speed_tree_wind {
                // Recognized variant this crate does not model. Jump to the
                // record boundary and hand back what was decoded so far.
                ar.seek_to_end()?;
                status = DecodeStatus::SpeedTreeSkipped;
            } else if ar.editor_ver() >= EditorObjectVer::REFACTOR_MESH_EDITOR_MATERIALS {
                material_slots = Some(ar.read_array_with(StaticMeshSlot::read)?);
            }
        }

        let material_refs = match &material_slots {
            Some(slots) if !slots.is_empty() => {
                Some(slots.iter().map(|s| s.material).collect())
            }
            _ => None,
        };

        if status == DecodeStatus::Complete {
            // Trailing record bytes (tail metadata this crate does not
            // model) are skipped so callers reading a sequence of records
            // stay aligned.
            ar.seek_to_end()?;
        }

        Ok(Self {
            is_cooked,
            body_setup,
            nav_collision,
            lighting_guid,
            sockets,
            render_data: Some(render_data),
            material_slots,
            material_refs,
            status,
        })
    }
}
