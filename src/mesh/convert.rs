//! Geometry converter: decoded render data → interchange mesh.
//!
//! Walks LODs in detail order, reconstructs vertices from the quantized
//! attribute buffer, resolves section material handles through the caller's
//! resolver, and attaches the index buffer unchanged.

use crate::interchange::{InterchangeLod, InterchangeMesh, InterchangeSection, InterchangeVertex};
use crate::mesh::asset::StaticMeshAsset;
use crate::mesh::error::{MeshError, Result};
use crate::mesh::MAX_MESH_UV_SETS;
use crate::object::{ObjectResolver, ResolvedObject};

/// Converts a decoded record into an interchange mesh. Returns `Ok(None)`
/// when the record carries no render data (a decode abort state the current
/// decoder never produces, handled defensively).
pub fn convert(
    asset: &StaticMeshAsset,
    resolver: &dyn ObjectResolver,
) -> Result<Option<InterchangeMesh>> {
    let Some(render_data) = &asset.render_data else {
        return Ok(None);
    };

    let num_lods = render_data.lods.len();
    let mut mesh = InterchangeMesh::default();

    for (i, src) in render_data.lods.iter().enumerate() {
        // Structurally incomplete LODs come from partially-aborted decodes;
        // drop them rather than guessing at the missing buffers.
        let (Some(positions), Some(vertex_buffer), Some(colors), Some(indices)) = (
            src.positions.as_ref(),
            src.vertex_buffer.as_ref(),
            src.colors.as_ref(),
            src.indices.as_ref(),
        ) else {
            continue;
        };

        let num_texcoords = vertex_buffer.num_texcoords as usize;
        let num_verts = positions.verts.len();

        // Trailing stripped LODs (cooked-out low-detail placeholders) are
        // dropped; a zero-vertex LOD in last position is kept so callers
        // indexing by detail level see the expected LOD count.
        if num_verts == 0 && num_texcoords == 0 && i < num_lods - 1 {
            eprintln!("LOD {} is stripped, skipping", i);
            continue;
        }

        if num_texcoords > MAX_MESH_UV_SETS {
            return Err(MeshError::malformed(format!(
                "LOD {} has too many UV sets ({})",
                i, num_texcoords
            )));
        }

        if vertex_buffer.attrs.len() != num_verts {
            return Err(MeshError::malformed(format!(
                "LOD {} attribute count {} != vertex count {}",
                i,
                vertex_buffer.attrs.len(),
                num_verts
            )));
        }

        let mut lod = InterchangeLod {
            num_texcoords,
            has_normals: true,
            has_tangents: true,
            verts: Vec::with_capacity(num_verts),
            extra_uvs: vec![Vec::with_capacity(num_verts); num_texcoords.saturating_sub(1)],
            vertex_colors: None,
            sections: Vec::with_capacity(src.sections.len()),
            indices: indices.clone(),
        };

        for (j, section) in src.sections.iter().enumerate() {
            lod.sections.push(InterchangeSection {
                material: resolve_section_material(asset, resolver, i, j, section.material_index),
                first_index: section.first_index,
                num_faces: section.num_triangles,
            });
        }

        let has_colors = colors.is_present();
        if has_colors && colors.colors.len() != num_verts {
            return Err(MeshError::malformed(format!(
                "LOD {} color count {} != vertex count {}",
                i,
                colors.colors.len(),
                num_verts
            )));
        }

        for j in 0..num_verts {
            let attr = &vertex_buffer.attrs[j];
            if !attr.legacy_basis().is_zero() {
                return Err(MeshError::NotSupported(
                    "legacy three-vector tangent basis".into(),
                ));
            }

            lod.verts.push(InterchangeVertex {
                position: positions.verts[j],
                normal: attr.normal().unpack(),
                tangent: attr.tangent().unpack(),
                uv: attr.uvs.first().copied().unwrap_or_default(),
            });

            for k in 1..num_texcoords {
                lod.extra_uvs[k - 1].push(attr.uvs.get(k).copied().unwrap_or_default());
            }
        }

        if has_colors {
            lod.vertex_colors = Some(colors.colors.clone());
        }

        mesh.lods.push(lod);
    }

    mesh.finalize();
    Ok(Some(mesh))
}

/// Tolerant slot resolution: an out-of-range slot index, an undecoded slot
/// table, or a handle that resolves to nothing all yield "no material".
/// Out-of-range indices are reported so batch tooling can count them.
fn resolve_section_material(
    asset: &StaticMeshAsset,
    resolver: &dyn ObjectResolver,
    lod: usize,
    section: usize,
    slot_index: i32,
) -> Option<ResolvedObject> {
    let refs = asset.material_refs.as_ref()?;
    let idx = usize::try_from(slot_index).ok();
    match idx.and_then(|i| refs.get(i)) {
        Some(handle) => resolver.resolve(*handle),
        None => {
            eprintln!(
                "LOD {} section {}: material slot {} out of range ({} slots), section left unbound",
                lod,
                section,
                slot_index,
                refs.len()
            );
            None
        }
    }
}
