use crate::sequence::Sequence;
use bio::io::fasta;
use readmap_core::{ReadmapError, ReadmapResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

/// Read every record of a FASTA file
pub fn read_fasta(path: &Path) -> ReadmapResult<Vec<Sequence>> {
    let file = File::open(path)?;
    parse_fasta(BufReader::new(file))
        .map_err(|e| ReadmapError::Parse(format!("{}: {}", path.display(), e)))
}

/// Parse FASTA records from any buffered reader
pub fn parse_fasta<R: BufRead>(reader: R) -> ReadmapResult<Vec<Sequence>> {
    let mut sequences = Vec::new();

    for record in fasta::Reader::from_bufread(reader).records() {
        let record = record?;
        let mut seq = Sequence::new(record.id(), record.seq().to_vec());
        if let Some(desc) = record.desc() {
            seq = seq.with_description(desc);
        }
        sequences.push(seq);
    }

    tracing::debug!("Parsed {} FASTA records", sequences.len());
    Ok(sequences)
}

/// Write records to a FASTA file, one sequence line per record
pub fn write_fasta(path: &Path, sequences: &[Sequence]) -> ReadmapResult<()> {
    let file = File::create(path)?;
    let mut writer = fasta::Writer::new(BufWriter::new(file));

    for seq in sequences {
        writer.write(&seq.id, seq.description.as_deref(), &seq.sequence)?;
    }
    writer.flush()?;
    Ok(())
}
