//! Chunked stream encoding.
//!
//! Input is read in fixed-size chunks through [`ChunkReader`]; each chunk is
//! encoded with a frozen [`SubstitutionMap`] and written out before the next
//! read. Nothing is buffered across chunks.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{ErrorKind, Read, Write};
use tracing::debug;

use crate::models::SubstitutionMap;

/// Lazy sequence of byte chunks read from a source.
///
/// Yields at most `chunk_size` bytes per item. The sequence ends on the first
/// zero-byte read, or right after yielding a read error. It cannot be
/// restarted.
pub struct ChunkReader<R> {
    reader: R,
    chunk_size: usize,
    done: bool,
}

impl<R: Read> ChunkReader<R> {
    /// Wraps `reader`. A `chunk_size` of zero is treated as one byte.
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size: chunk_size.max(1),
            done: false,
        }
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = std::io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = vec![0u8; self.chunk_size];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(n) => {
                    buf.truncate(n);
                    return Some(Ok(buf));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Counters from one encoding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EncodeStats {
    /// Chunks read from the source
    pub chunks: usize,
    /// Total bytes read and written
    pub bytes: usize,
    /// Bytes replaced through the map
    pub substituted: usize,
}

/// Streams input through a substitution map.
pub struct StreamEncoder<'a> {
    mapping: &'a SubstitutionMap,
    chunk_size: usize,
}

impl<'a> StreamEncoder<'a> {
    /// Creates an encoder that reads `chunk_size` bytes at a time.
    pub const fn new(mapping: &'a SubstitutionMap, chunk_size: usize) -> Self {
        Self {
            mapping,
            chunk_size,
        }
    }

    /// Encodes a single chunk into a new buffer.
    pub fn encode_chunk(&self, chunk: &[u8]) -> Vec<u8> {
        let mut out = chunk.to_vec();
        self.mapping.encode_in_place(&mut out);
        out
    }

    /// Reads `reader` to the end, writing each encoded chunk to `writer`.
    ///
    /// The writer is flushed after every chunk, so output keeps pace with
    /// input that arrives slowly. Read and write errors stop the run and are
    /// returned with context.
    pub fn encode<R: Read, W: Write>(&self, reader: R, mut writer: W) -> Result<EncodeStats> {
        let mut stats = EncodeStats::default();

        for chunk in ChunkReader::new(reader, self.chunk_size) {
            let mut chunk = chunk.context("Failed to read input text")?;
            stats.chunks += 1;
            stats.bytes += chunk.len();
            stats.substituted += self.mapping.encode_in_place(&mut chunk);
            writer
                .write_all(&chunk)
                .context("Failed to write encoded output")?;
            writer.flush().context("Failed to flush encoded output")?;
        }

        debug!(
            chunks = stats.chunks,
            bytes = stats.bytes,
            substituted = stats.substituted,
            "encoding finished"
        );
        Ok(stats)
    }
}
