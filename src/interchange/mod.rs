//! Engine-agnostic interchange mesh — the converter's output model.
//!
//! Owned independently of the decoded record; downstream export/inspection
//! tooling consumes these values directly, no wire format is defined here.

use serde::Serialize;

use crate::geometry::{bounding_box, ritter_bounding_sphere};
use crate::math::{UeColor, UeVector2, UeVector3};
use crate::mesh::render_data::IndexBuffer;
use crate::object::ResolvedObject;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct InterchangeVertex {
    pub position: UeVector3,
    pub normal: UeVector3,
    pub tangent: UeVector3,
    pub uv: UeVector2,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterchangeSection {
    /// Resolved material, or absent when the slot index was out of range,
    /// the slot table was never decoded, or the handle resolved to nothing.
    pub material: Option<ResolvedObject>,
    pub first_index: u32,
    pub num_faces: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InterchangeLod {
    pub num_texcoords: usize,
    pub has_normals: bool,
    pub has_tangents: bool,
    pub verts: Vec<InterchangeVertex>,
    /// UV channels 1..K; channel 0 lives on the vertex itself.
    pub extra_uvs: Vec<Vec<UeVector2>>,
    pub vertex_colors: Option<Vec<UeColor>>,
    pub sections: Vec<InterchangeSection>,
    /// Source index buffer, attached byte-for-byte.
    pub indices: IndexBuffer,
}

impl InterchangeLod {
    pub fn num_verts(&self) -> usize {
        self.verts.len()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MeshBounds {
    pub center: UeVector3,
    pub radius: f32,
    pub min: UeVector3,
    pub max: UeVector3,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InterchangeMesh {
    pub lods: Vec<InterchangeLod>,
    pub bounds: Option<MeshBounds>,
}

impl InterchangeMesh {
    /// Derives overall bounds from every produced LOD's vertices. Called
    /// once after the last LOD is converted.
    pub fn finalize(&mut self) {
        let points: Vec<_> = self
            .lods
            .iter()
            .flat_map(|lod| lod.verts.iter().map(|v| v.position.0))
            .collect();
        if points.is_empty() {
            self.bounds = None;
            return;
        }

        let (center, radius) = ritter_bounding_sphere(&points);
        let (min, max) = bounding_box(&points);
        self.bounds = Some(MeshBounds {
            center: UeVector3(center),
            radius,
            min: UeVector3(min),
            max: UeVector3(max),
        });
    }
}
