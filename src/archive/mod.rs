//! Byte-stream reader for one cooked asset record.
//!
//! [`AssetArchive`] wraps any `Read + Seek` source and carries the context
//! the record layout depends on: the global engine schema version, the
//! per-game fork identifier (with its derived editor feature version), and
//! the end-of-record offset used by the one defined early exit. It forwards
//! `Read`/`Seek` so `binrw` primitives work on it directly.
//!
//! The archive owns the stream position for the duration of a decode call;
//! concurrent decodes need independent archives.

use std::io::{Read, Seek, SeekFrom};

use binrw::BinRead;

use crate::mesh::error::{MeshError, Result};
use crate::mesh::versions::{EditorObjectVer, EngineVer, Game};

/// Upper bound on a serialized array count. Counts beyond this are treated
/// as corruption rather than attempted as allocations.
const MAX_ARRAY_LEN: i32 = 0x0800_0000;

pub struct AssetArchive<R> {
    inner: R,
    ver: EngineVer,
    game: Game,
    editor_ver: EditorObjectVer,
    end_offset: u64,
}

impl<R: Read + Seek> AssetArchive<R> {
    /// `end_offset` is the absolute offset of the first byte past this
    /// record; the decoder leaves the stream there on every successful exit.
    pub fn new(inner: R, ver: EngineVer, game: Game, end_offset: u64) -> Self {
        Self {
            inner,
            ver,
            game,
            editor_ver: EditorObjectVer::for_game(game),
            end_offset,
        }
    }

    pub fn ver(&self) -> EngineVer {
        self.ver
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn editor_ver(&self) -> EditorObjectVer {
        self.editor_ver
    }

    pub fn end_offset(&self) -> u64 {
        self.end_offset
    }

    pub fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }

    pub fn seek_to(&mut self, offset: u64) -> Result<()> {
        self.inner.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    pub fn seek_to_end(&mut self) -> Result<()> {
        let end = self.end_offset;
        self.seek_to(end)
    }

    /// Booleans are serialized as a 4-byte integer, nonzero = true.
    pub fn read_bool(&mut self) -> Result<bool> {
        let raw = u32::read_le(&mut self.inner)?;
        Ok(raw != 0)
    }

    /// Reads an `i32`-count-prefixed element count, rejecting counts that
    /// cannot describe a well-formed array.
    fn read_array_len(&mut self) -> Result<usize> {
        let pos = self.position()?;
        let count = i32::read_le(&mut self.inner)?;
        if !(0..=MAX_ARRAY_LEN).contains(&count) {
            return Err(MeshError::malformed_at(
                pos,
                format!("invalid array count {}", count),
            ));
        }
        Ok(count as usize)
    }

    /// Length-prefixed array of fixed-layout elements.
    pub fn read_array<T>(&mut self) -> Result<Vec<T>>
    where
        T: for<'a> BinRead<Args<'a> = ()>,
    {
        let count = self.read_array_len()?;
        let mut out = Vec::with_capacity(count.min(4096));
        for _ in 0..count {
            out.push(T::read_le(&mut self.inner)?);
        }
        Ok(out)
    }

    /// Length-prefixed array where each element needs the archive context.
    pub fn read_array_with<T, F>(&mut self, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        let count = self.read_array_len()?;
        let mut out = Vec::with_capacity(count.min(4096));
        for _ in 0..count {
            out.push(f(self)?);
        }
        Ok(out)
    }

    /// Length-prefixed UTF-8 string. Invalid bytes are replaced rather than
    /// rejected; names are diagnostic, not structural.
    pub fn read_string(&mut self) -> Result<String> {
        let bytes: Vec<u8> = self.read_array()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl<R: Read> Read for AssetArchive<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Seek> Seek for AssetArchive<R> {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.inner.seek(pos)
    }
}
