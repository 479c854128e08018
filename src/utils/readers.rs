use super::Result;
use crate::gene::Sequence;
use bio::io::fasta;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read as ioRead};
use std::path::Path;

pub fn open_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    fn is_gzipped(path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.ends_with(".gz") || path_str.ends_with(".gzip")
    }
    let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(format!("Invalid gzip header: {}", path.to_string_lossy()))
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

pub fn open_fasta_reader(path: &Path) -> Result<fasta::Reader<BufReader<Box<dyn ioRead>>>> {
    Ok(fasta::Reader::from_bufread(open_reader(path)?))
}

/// Reads all records in file order; multi-line sequences are joined into one string
pub fn read_fasta_records(path: &Path) -> Result<Vec<Sequence>> {
    let reader = open_fasta_reader(path)?;
    let mut sequences = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| format!("Invalid FASTA {}: {}", path.display(), e))?;
        record
            .check()
            .map_err(|e| format!("Invalid FASTA record in {}: {}", path.display(), e))?;

        let header = match record.desc() {
            Some(desc) => format!("{} {}", record.id(), desc),
            None => record.id().to_string(),
        };
        let bases = String::from_utf8(record.seq().to_vec())
            .map_err(|e| format!("Invalid sequence for {}: {}", header, e))?;
        sequences.push(Sequence::new(header, bases));
    }
    log::debug!("Read {} records from {}", sequences.len(), path.display());
    Ok(sequences)
}

/// One motif per line; blank lines and lines starting with '#' are skipped
pub fn read_motif_lines(path: &Path) -> Result<Vec<String>> {
    let reader = open_reader(path)?;
    let mut motifs = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| format!("{}: {}", path.display(), e))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        motifs.push(line.to_string());
    }
    Ok(motifs)
}
