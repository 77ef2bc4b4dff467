use binrw::binrw;
use cgmath::{Vector2, Vector3};
use serde::Serialize;

#[binrw]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[br(little)]
pub struct UeVector3(
    #[br(map = |raw: [f32; 3]| Vector3::new(raw[0], raw[1], raw[2]))]
    #[bw(map = |v: &Vector3<f32>| [v.x, v.y, v.z])]
    pub Vector3<f32>,
);

impl UeVector3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn to_slice(&self) -> [f32; 3] {
        let v = &self.0;
        [v.x, v.y, v.z]
    }
}

impl Default for UeVector3 {
    fn default() -> Self {
        Self(Vector3::new(0.0, 0.0, 0.0))
    }
}

#[binrw]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[br(little)]
pub struct UeVector2(
    #[br(map = |raw: [f32; 2]| Vector2::new(raw[0], raw[1]))]
    #[bw(map = |v: &Vector2<f32>| [v.x, v.y])]
    pub Vector2<f32>,
);

impl UeVector2 {
    pub fn new(u: f32, v: f32) -> Self {
        Self(Vector2::new(u, v))
    }
}

impl Default for UeVector2 {
    fn default() -> Self {
        Self(Vector2::new(0.0, 0.0))
    }
}

/// 128-bit identifier, four little-endian words on the wire.
/// Opaque — callers only ever use it as a cache key.
#[binrw]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[br(little)]
pub struct UeGuid {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
}

impl UeGuid {
    pub fn is_zero(&self) -> bool {
        self.a == 0 && self.b == 0 && self.c == 0 && self.d == 0
    }
}

/// Vertex color stored as a packed BGRA dword on the wire.
#[binrw]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[br(little)]
pub struct UeColor(pub u32);

impl UeColor {
    pub fn to_rgba(self) -> [u8; 4] {
        let v = self.0;
        [
            ((v >> 16) & 0xFF) as u8,
            ((v >> 8) & 0xFF) as u8,
            (v & 0xFF) as u8,
            ((v >> 24) & 0xFF) as u8,
        ]
    }

    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        Self(
            ((rgba[3] as u32) << 24)
                | ((rgba[0] as u32) << 16)
                | ((rgba[1] as u32) << 8)
                | (rgba[2] as u32),
        )
    }
}

/// Quantized unit vector: one byte per component, low byte = X.
/// The fourth byte carries basis handedness and is not part of the unpack.
#[binrw]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[br(little)]
pub struct PackedNormal(pub u32);

impl PackedNormal {
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Dequantize: byte / 127.5 - 1 per component.
    pub fn unpack(self) -> UeVector3 {
        let v = self.0;
        UeVector3::new(
            (v & 0xFF) as f32 / 127.5 - 1.0,
            ((v >> 8) & 0xFF) as f32 / 127.5 - 1.0,
            ((v >> 16) & 0xFF) as f32 / 127.5 - 1.0,
        )
    }

    /// Quantize a direction vector, components clamped to [-1, 1].
    pub fn pack(v: UeVector3) -> Self {
        let q = |c: f32| ((c.clamp(-1.0, 1.0) + 1.0) * 127.5).round() as u32;
        Self(q(v.0.x) | (q(v.0.y) << 8) | (q(v.0.z) << 16))
    }
}
