//! JSON export and import of the catalogue tree.
//!
//! Documents are pretty-printed with two-space indentation. Floats use shortest
//! round-trip formatting, so values read back bit-identical.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::info;

use crate::catalogue::{FrequencyCatalogue, FrequencyNode};
use crate::error::FrequencyError;
use crate::Result;

/// Write `node` as pretty JSON to any writer.
pub fn write_json<W: Write>(node: &FrequencyNode, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, node)?;
    Ok(())
}

/// Parse a catalogue document. The top level must be an object.
pub fn read_json<R: Read>(reader: R) -> Result<FrequencyNode> {
    let node: FrequencyNode = serde_json::from_reader(reader)?;
    if !node.is_table() {
        return Err(FrequencyError::invalid_document(
            "top level must be an object of frequency tables",
        ));
    }
    Ok(node)
}

/// Save the catalogue tree to `path` and return the number of bytes written.
pub fn save_json(catalogue: &FrequencyCatalogue, path: impl AsRef<Path>) -> Result<u64> {
    save_node(&catalogue.to_node(), path)
}

/// Save any frequency tree to `path` and return the number of bytes written.
pub fn save_node(node: &FrequencyNode, path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| FrequencyError::io(path, e))?;

    let mut writer = BufWriter::new(file);
    write_json(node, &mut writer)?;
    writer.flush().map_err(|e| FrequencyError::io(path, e))?;

    let size = std::fs::metadata(path)
        .map_err(|e| FrequencyError::io(path, e))?
        .len();
    info!("Saved frequency catalogue to '{}' ({} bytes)", path.display(), size);
    Ok(size)
}

/// Load a frequency tree previously written by [`save_json`].
pub fn load_json(path: impl AsRef<Path>) -> Result<FrequencyNode> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FrequencyError::io(path, e))?;

    let node = read_json(BufReader::new(file))?;
    info!("Loaded {} frequency leaves from '{}'", node.leaves().len(), path.display());
    Ok(node)
}
