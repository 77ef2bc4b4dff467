// Shared helpers: compose cooked static-mesh record byte streams for the
// decode/convert suites.

use uasset_mesh::math::{PackedNormal, UeVector3};
use uasset_mesh::mesh::versions::{EditorObjectVer, EngineVer, Game};

/// Little-endian byte composer mirroring the record wire layout.
#[derive(Default)]
pub struct StreamWriter {
    pub buf: Vec<u8>,
}

impl StreamWriter {
    pub fn u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn i32(&mut self, v: i32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn f32(&mut self, v: f32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// 4-byte boolean, as the record serializes them.
    pub fn flag(&mut self, v: bool) {
        self.u32(u32::from(v));
    }

    pub fn string(&mut self, s: &str) {
        self.i32(s.len() as i32);
        self.buf.extend_from_slice(s.as_bytes());
    }
}

/// One LOD to synthesize. Vertex data is generated deterministically from
/// the vertex index so assertions can recompute expected values.
pub struct LodSpec {
    /// (material slot index, first index, triangle count)
    pub sections: Vec<(i32, u32, u32)>,
    pub num_verts: u32,
    pub num_texcoords: u32,
    pub with_colors: bool,
    /// Vertex index whose legacy basis slot gets a nonzero word.
    pub legacy_nonzero_at: Option<usize>,
    pub indices: Vec<u16>,
}

impl LodSpec {
    pub fn simple(num_verts: u32, num_texcoords: u32) -> Self {
        Self {
            sections: vec![(0, 0, num_verts.saturating_sub(2))],
            num_verts,
            num_texcoords,
            with_colors: false,
            legacy_nonzero_at: None,
            indices: (0..num_verts.saturating_mul(3))
                .map(|i| (i % num_verts.max(1)) as u16)
                .collect(),
        }
    }

    /// A cooked-out placeholder: no vertices, no UV channels.
    pub fn stripped() -> Self {
        Self {
            sections: vec![],
            num_verts: 0,
            num_texcoords: 0,
            with_colors: false,
            legacy_nonzero_at: None,
            indices: vec![],
        }
    }
}

pub fn expected_position(j: u32) -> UeVector3 {
    UeVector3::new(j as f32, j as f32 * 2.0, j as f32 * 3.0)
}

pub fn expected_uv(j: u32, channel: u32) -> [f32; 2] {
    [j as f32 * 0.01, j as f32 * 0.02 + channel as f32]
}

pub fn expected_color(j: u32) -> u32 {
    0xFF00_0000 | j
}

pub fn packed_tangent() -> PackedNormal {
    PackedNormal::pack(UeVector3::new(1.0, 0.0, 0.0))
}

pub fn packed_normal() -> PackedNormal {
    PackedNormal::pack(UeVector3::new(0.0, 0.0, 1.0))
}

/// Everything needed to synthesize one record. The version axes drive which
/// blocks get written, mirroring the decoder's gating.
pub struct RecordSpec {
    pub ver: EngineVer,
    pub game: Game,
    pub editor_data_stripped: bool,
    pub is_cooked: bool,
    pub body_setup: i32,
    pub sockets: Vec<i32>,
    pub lods: Vec<LodSpec>,
    /// (occluder vertex count, occluder index count); only written for
    /// cooked records on UE4.20-era forks.
    pub occluder: Option<(u32, u32)>,
    pub speed_tree_wind: bool,
    /// (material handle, slot name); only written when the fork's feature
    /// version has the slot table.
    pub material_slots: Vec<(i32, &'static str)>,
    /// Unmodeled tail bytes after the record body.
    pub trailing_bytes: usize,
}

impl Default for RecordSpec {
    fn default() -> Self {
        Self {
            ver: EngineVer::LATEST,
            game: Game::UE4_27,
            editor_data_stripped: true,
            is_cooked: true,
            body_setup: 11,
            sockets: vec![21, 22],
            lods: vec![LodSpec::simple(4, 1)],
            occluder: None,
            speed_tree_wind: false,
            material_slots: vec![(101, "slot_0")],
            trailing_bytes: 0,
        }
    }
}

impl RecordSpec {
    pub fn build(&self) -> Vec<u8> {
        let mut w = StreamWriter::default();

        // strip flags
        w.u8(if self.editor_data_stripped { 1 } else { 0 });
        w.u8(0);

        w.flag(self.is_cooked);
        w.i32(self.body_setup);
        if self.ver >= EngineVer::STORE_NAV_COLLISION {
            w.i32(self.body_setup + 1);
        }

        // lighting guid
        for word in [0xAAAA_0001u32, 0xAAAA_0002, 0xAAAA_0003, 0xAAAA_0004] {
            w.u32(word);
        }

        w.i32(self.sockets.len() as i32);
        for s in &self.sockets {
            w.i32(*s);
        }

        w.i32(self.lods.len() as i32);
        for lod in &self.lods {
            write_lod(&mut w, lod);
        }

        if self.is_cooked && self.game >= Game::UE4_20 {
            w.flag(self.occluder.is_some());
            if let Some((verts, indices)) = self.occluder {
                w.i32(verts as i32);
                for j in 0..verts {
                    let p = expected_position(j);
                    w.f32(p.0.x);
                    w.f32(p.0.y);
                    w.f32(p.0.z);
                }
                w.i32(indices as i32);
                for j in 0..indices {
                    w.u16(j as u16);
                }
            }
        }

        if self.game >= Game::UE4_14 {
            w.flag(self.speed_tree_wind);
            if !self.speed_tree_wind
                && EditorObjectVer::for_game(self.game)
                    >= EditorObjectVer::REFACTOR_MESH_EDITOR_MATERIALS
            {
                w.i32(self.material_slots.len() as i32);
                for (material, name) in &self.material_slots {
                    w.i32(*material);
                    w.string(name);
                    for d in [1.0f32, 0.0, 0.0, 0.0] {
                        w.f32(d);
                    }
                }
            }
        }

        w.buf.extend(std::iter::repeat(0xEE).take(self.trailing_bytes));
        w.buf
    }
}

fn write_lod(w: &mut StreamWriter, lod: &LodSpec) {
    w.i32(lod.sections.len() as i32);
    for (material_index, first_index, num_triangles) in &lod.sections {
        w.i32(*material_index);
        w.u32(*first_index);
        w.u32(*num_triangles);
    }

    // position buffer
    w.u32(12);
    w.u32(lod.num_verts);
    for j in 0..lod.num_verts {
        let p = expected_position(j);
        w.f32(p.0.x);
        w.f32(p.0.y);
        w.f32(p.0.z);
    }

    // attribute buffer
    w.u32(lod.num_texcoords);
    w.u32(lod.num_verts);
    for j in 0..lod.num_verts {
        w.u32(packed_tangent().0);
        let legacy = match lod.legacy_nonzero_at {
            Some(at) if at == j as usize => 0x7F7F_7F00,
            _ => 0,
        };
        w.u32(legacy);
        w.u32(packed_normal().0);
        for channel in 0..lod.num_texcoords {
            let uv = expected_uv(j, channel);
            w.f32(uv[0]);
            w.f32(uv[1]);
        }
    }

    // color buffer
    w.u32(4);
    w.u32(if lod.with_colors { lod.num_verts } else { 0 });
    if lod.with_colors {
        for j in 0..lod.num_verts {
            w.u32(expected_color(j));
        }
    }

    // index buffer (16-bit)
    w.flag(false);
    w.i32((lod.indices.len() * 2) as i32);
    for idx in &lod.indices {
        w.u16(*idx);
    }
}
