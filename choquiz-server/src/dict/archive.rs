//! Streaming access to the zipped dictionary export
//!
//! Exactly one entry is decoded into memory per step, so peak memory is
//! bounded by the largest single entry rather than the whole archive.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use choquiz_common::{Error, Result};
use tracing::debug;

use crate::dict::record::{DictDocument, RawItem};

/// Visit every parseable `.json` entry in the archive, one at a time.
///
/// Entries that are not JSON files, fail to decompress, or fail to parse
/// as a dictionary document are skipped; only a container that cannot be
/// opened aborts the pass.
pub fn for_each_json_entry<F>(archive_path: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&[RawItem]),
{
    let file = File::open(archive_path).map_err(|e| {
        Error::Archive(format!("cannot open {}: {}", archive_path.display(), e))
    })?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| {
        Error::Archive(format!("cannot read {}: {}", archive_path.display(), e))
    })?;

    for index in 0..archive.len() {
        let mut entry = match archive.by_index(index) {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable archive entry #{}: {}", index, e);
                continue;
            }
        };

        if !entry.name().to_ascii_lowercase().ends_with(".json") {
            continue;
        }

        let mut content = Vec::with_capacity(entry.size() as usize);
        if let Err(e) = entry.read_to_end(&mut content) {
            debug!("Skipping entry {}: read failed: {}", entry.name(), e);
            continue;
        }

        let document: DictDocument = match serde_json::from_slice(&content) {
            Ok(document) => document,
            Err(e) => {
                debug!("Skipping entry {}: not a dictionary document: {}", entry.name(), e);
                continue;
            }
        };

        let Some(channel) = document.channel else {
            continue;
        };
        visit(&channel.item);
    }

    Ok(())
}
