use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::loader::LoadError;

/// Reads one candidate per line, verbatim apart from the line terminator.
pub fn read_candidates<R: Read>(reader: R) -> Result<Vec<String>, LoadError> {
    let candidates = BufReader::new(reader)
        .lines()
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("read {} candidates", candidates.len());
    Ok(candidates)
}

pub fn read_candidates_from_path(path: &Path) -> Result<Vec<String>, LoadError> {
    let file = fs::File::open(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    read_candidates(file)
}
