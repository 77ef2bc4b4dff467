//! Decoder for cooked static-mesh asset records and converter to an
//! engine-agnostic interchange mesh, for offline extraction/inspection
//! tooling. The record layout is version-evolving: decoding is gated on the
//! engine schema version, a per-game fork identifier and cook-time strip
//! flags; see `mesh::versions` for the threshold constants.

pub mod archive;
pub mod geometry;
pub mod interchange;
pub mod math;
pub mod mesh;
pub mod object;
