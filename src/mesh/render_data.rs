//! Decoded, version-independent render model: one or more LOD records, each
//! holding a position buffer, a packed attribute buffer, an optional color
//! buffer, an opaque index buffer and a section list.
//!
//! Wire layout per LOD (little-endian):
//! ```text
//! sections:   count(4) + count × { material_index(4) first_index(4) num_triangles(4) }
//! positions:  stride(4) + num_verts(4) + num_verts × float3
//! attributes: num_texcoords(4) + num_verts(4) +
//!             num_verts × { packed tangent(4) legacy(4) normal(4) + num_texcoords × float2 }
//! colors:     stride(4) + num_verts(4) [+ num_verts × bgra(4) when num_verts > 0]
//! indices:    use_32bit(4) + byte_count(4) + bytes
//! ```

use std::io::{Read, Seek};

use binrw::{binrw, BinRead};
use serde::Serialize;

use crate::archive::AssetArchive;
use crate::math::{PackedNormal, UeColor, UeVector2, UeVector3};
use crate::mesh::error::{MeshError, Result};
use crate::mesh::MAX_MESH_UV_SETS;

/// Index range rendered with one material slot.
#[binrw]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[br(little)]
pub struct MeshSection {
    pub material_index: i32,
    pub first_index: u32,
    pub num_triangles: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PositionBuffer {
    pub stride: u32,
    pub verts: Vec<UeVector3>,
}

impl PositionBuffer {
    fn read<R: Read + Seek>(ar: &mut AssetArchive<R>) -> Result<Self> {
        let stride = u32::read_le(ar)?;
        let num_verts = u32::read_le(ar)?;
        let mut verts = Vec::with_capacity((num_verts as usize).min(4096));
        for _ in 0..num_verts {
            verts.push(UeVector3::read_le(ar)?);
        }
        Ok(Self { stride, verts })
    }
}

/// Per-vertex packed attributes: a three-slot quantized basis plus UV pairs.
/// Slot 0 is the tangent, slot 2 the normal; slot 1 is a legacy third basis
/// vector the current format never populates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VertexAttrs {
    pub basis: [PackedNormal; 3],
    pub uvs: Vec<UeVector2>,
}

impl VertexAttrs {
    pub const TANGENT_SLOT: usize = 0;
    pub const LEGACY_SLOT: usize = 1;
    pub const NORMAL_SLOT: usize = 2;

    pub fn tangent(&self) -> PackedNormal {
        self.basis[Self::TANGENT_SLOT]
    }

    pub fn legacy_basis(&self) -> PackedNormal {
        self.basis[Self::LEGACY_SLOT]
    }

    pub fn normal(&self) -> PackedNormal {
        self.basis[Self::NORMAL_SLOT]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VertexBuffer {
    pub num_texcoords: u32,
    pub attrs: Vec<VertexAttrs>,
}

impl VertexBuffer {
    fn read<R: Read + Seek>(ar: &mut AssetArchive<R>) -> Result<Self> {
        let pos = ar.position()?;
        let num_texcoords = u32::read_le(ar)?;
        let num_verts = u32::read_le(ar)?;
        if num_texcoords as usize > MAX_MESH_UV_SETS {
            return Err(MeshError::malformed_at(
                pos,
                format!("too many UV sets ({})", num_texcoords),
            ));
        }

        let mut attrs = Vec::with_capacity((num_verts as usize).min(4096));
        for _ in 0..num_verts {
            let basis = [
                PackedNormal::read_le(ar)?,
                PackedNormal::read_le(ar)?,
                PackedNormal::read_le(ar)?,
            ];
            let mut uvs = Vec::with_capacity(num_texcoords as usize);
            for _ in 0..num_texcoords {
                uvs.push(UeVector2::read_le(ar)?);
            }
            attrs.push(VertexAttrs { basis, uvs });
        }
        Ok(Self {
            num_texcoords,
            attrs,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColorBuffer {
    pub stride: u32,
    pub num_verts: u32,
    pub colors: Vec<UeColor>,
}

impl ColorBuffer {
    fn read<R: Read + Seek>(ar: &mut AssetArchive<R>) -> Result<Self> {
        let stride = u32::read_le(ar)?;
        let num_verts = u32::read_le(ar)?;
        let mut colors = Vec::new();
        if num_verts > 0 {
            colors.reserve((num_verts as usize).min(4096));
            for _ in 0..num_verts {
                colors.push(UeColor::read_le(ar)?);
            }
        }
        Ok(Self {
            stride,
            num_verts,
            colors,
        })
    }

    pub fn is_present(&self) -> bool {
        self.num_verts != 0
    }
}

/// Index data is carried byte-for-byte; the converter never interprets it.
/// Typed views are offered for downstream tooling that wants real indices.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndexBuffer {
    pub use_32bit: bool,
    pub data: Vec<u8>,
}

impl IndexBuffer {
    fn read<R: Read + Seek>(ar: &mut AssetArchive<R>) -> Result<Self> {
        let use_32bit = ar.read_bool()?;
        let data: Vec<u8> = ar.read_array()?;
        Ok(Self { use_32bit, data })
    }

    pub fn element_size(&self) -> usize {
        if self.use_32bit {
            4
        } else {
            2
        }
    }

    pub fn index_count(&self) -> usize {
        self.data.len() / self.element_size()
    }

    pub fn as_u16(&self) -> Option<&[u16]> {
        if self.use_32bit {
            return None;
        }
        bytemuck::try_cast_slice(&self.data).ok()
    }

    pub fn as_u32(&self) -> Option<&[u32]> {
        if !self.use_32bit {
            return None;
        }
        bytemuck::try_cast_slice(&self.data).ok()
    }
}

/// One level-of-detail record. Buffers are optional so a partially aborted
/// decode stays representable; the decoder itself always fills them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LodResources {
    pub sections: Vec<MeshSection>,
    pub positions: Option<PositionBuffer>,
    pub vertex_buffer: Option<VertexBuffer>,
    pub colors: Option<ColorBuffer>,
    pub indices: Option<IndexBuffer>,
}

impl LodResources {
    pub fn read<R: Read + Seek>(ar: &mut AssetArchive<R>) -> Result<Self> {
        let sections = ar.read_array::<MeshSection>()?;
        let positions = PositionBuffer::read(ar)?;
        let vertex_buffer = VertexBuffer::read(ar)?;
        let colors = ColorBuffer::read(ar)?;
        let indices = IndexBuffer::read(ar)?;
        Ok(Self {
            sections,
            positions: Some(positions),
            vertex_buffer: Some(vertex_buffer),
            colors: Some(colors),
            indices: Some(indices),
        })
    }

    pub fn num_verts(&self) -> usize {
        self.positions.as_ref().map_or(0, |p| p.verts.len())
    }

    pub fn num_texcoords(&self) -> usize {
        self.vertex_buffer.as_ref().map_or(0, |v| v.num_texcoords as usize)
    }
}

/// Ordered LOD records, index = detail level (0 = highest detail).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderData {
    pub lods: Vec<LodResources>,
}

impl RenderData {
    pub fn read<R: Read + Seek>(ar: &mut AssetArchive<R>) -> Result<Self> {
        let lods = ar.read_array_with(LodResources::read)?;
        Ok(Self { lods })
    }
}
