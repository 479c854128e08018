use crate::utils::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Buffered writer to `path`, or to stdout when no path is given
pub fn create_writer(path: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>> {
    let sink: Box<dyn Write> = match path {
        Some(path) => Box::new(
            File::create(path)
                .map_err(|e| format!("Unable to create {}: {}", path.display(), e))?,
        ),
        None => Box::new(io::stdout()),
    };
    Ok(BufWriter::new(sink))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hits.tsv");
        {
            let mut writer = create_writer(Some(&path)).unwrap();
            writeln!(writer, "gene1\tYGCY\t0\t4").unwrap();
        }
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "gene1\tYGCY\t0\t4\n");
    }

    #[test]
    fn writer_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("hits.tsv");
        assert!(create_writer(Some(&path)).is_err());
    }
}
