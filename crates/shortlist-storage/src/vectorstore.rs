//! Vector-store persistence: the index file and its row→id mapping.
//!
//! Index format: `SLIX` magic, dims u32 LE, rows u32 LE, then rows×dims
//! f32 LE values. The mapping lives in a JSON document alongside. Both
//! are produced offline and consumed read-only; the pair is validated
//! against each other at load time, failing fast on mismatch.

use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::info;

use shortlist_core::errors::{IndexError, ShortlistResult};

use crate::index::FlatIpIndex;
use crate::mapping::RowMapping;

const MAGIC: &[u8; 4] = b"SLIX";

/// Serialize an index to its binary file format.
pub fn save_index(index: &FlatIpIndex, path: &Path) -> ShortlistResult<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(MAGIC)?;
    writer.write_all(&(index.dims() as u32).to_le_bytes())?;
    writer.write_all(&(index.rows() as u32).to_le_bytes())?;
    for value in index.data() {
        writer.write_all(&value.to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Deserialize an index from its binary file format.
pub fn load_index(path: &Path) -> ShortlistResult<FlatIpIndex> {
    let file = std::fs::File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic).map_err(|_| truncated())?;
    if &magic != MAGIC {
        return Err(IndexError::MalformedFile {
            reason: "bad magic".to_string(),
        }
        .into());
    }

    let dims = read_u32(&mut reader)? as usize;
    let rows = read_u32(&mut reader)? as usize;
    if dims == 0 {
        return Err(IndexError::MalformedFile {
            reason: "zero dimensions".to_string(),
        }
        .into());
    }

    let mut data = Vec::with_capacity(rows * dims);
    let mut buf = [0u8; 4];
    for _ in 0..rows * dims {
        reader.read_exact(&mut buf).map_err(|_| truncated())?;
        data.push(f32::from_le_bytes(buf));
    }
    if reader.read(&mut buf)? != 0 {
        return Err(IndexError::MalformedFile {
            reason: "trailing bytes".to_string(),
        }
        .into());
    }

    FlatIpIndex::from_parts(dims, data)
}

/// Load the index/mapping pair, enforcing the row-count invariant.
pub fn load_store(index_path: &Path, mapping_path: &Path) -> ShortlistResult<(FlatIpIndex, RowMapping)> {
    let index = load_index(index_path)?;
    let mapping = RowMapping::load(mapping_path)?;
    mapping.validate_against(&index)?;
    info!(
        rows = index.rows(),
        dims = index.dims(),
        "vector store loaded"
    );
    Ok((index, mapping))
}

fn read_u32(reader: &mut impl Read) -> ShortlistResult<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf).map_err(|_| truncated())?;
    Ok(u32::from_le_bytes(buf))
}

fn truncated() -> shortlist_core::errors::ShortlistError {
    IndexError::MalformedFile {
        reason: "truncated file".to_string(),
    }
    .into()
}
