use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::archive::AssetArchive;
use crate::mesh::asset::StaticMeshAsset;
use crate::mesh::versions::{EngineVer, Game};

/// Decode a single cooked static-mesh record stored as its own file.
/// The end-of-record boundary is the file length.
pub fn load_static_mesh(path: &Path, ver: EngineVer, game: Game) -> Result<StaticMeshAsset> {
    let file =
        File::open(path).with_context(|| format!("opening mesh record {}", path.display()))?;
    let end_offset = file
        .metadata()
        .with_context(|| format!("sizing mesh record {}", path.display()))?
        .len();

    let mut ar = AssetArchive::new(BufReader::new(file), ver, game, end_offset);
    StaticMeshAsset::deserialize(&mut ar)
        .with_context(|| format!("decoding mesh record {}", path.display()))
}
