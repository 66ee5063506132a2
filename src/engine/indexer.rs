//! Index construction: the [`IndexBuilder`] seam and the default BAI builder.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;
use noodles::bam::{self, bai};
use noodles::core::Position;
use noodles::csi::binning_index::{Indexer, index::reference_sequence::bin::Chunk};
use noodles::sam;
use noodles::sam::alignment::RecordBuf;

use crate::engine::container::BamReader;
use crate::engine::progress::RecordCounter;
use crate::pipeline::ResolvedInput;
use crate::utils::{discard_temp, rename_temp_to_final, temp_path_for};

/// Builds an index from an opened, validated, coordinate-sorted stream and writes it to `output`.
///
/// Implementations do not close the input; the pipeline releases it after the call returns.
pub trait IndexBuilder {
    fn build(&self, input: &mut ResolvedInput, output: &Path) -> io::Result<()>;
}

/// `(reference sequence id, alignment start, alignment end, is mapped)`
type AlignmentContext = (usize, Position, Position, bool);

/// Default builder: bins every record with the noodles BAI indexer and writes the index
/// through a scratch file that is renamed into place on success.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaiIndexBuilder {
    /// Show a record counter on stderr.
    pub show_progress: bool,
}

impl BaiIndexBuilder {
    pub fn new(show_progress: bool) -> Self {
        BaiIndexBuilder { show_progress }
    }
}

impl IndexBuilder for BaiIndexBuilder {
    fn build(&self, input: &mut ResolvedInput, output: &Path) -> io::Result<()> {
        let source = input
            .source()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "<untracked>".to_string());
        let record = if input.options().eager_decode {
            debug!("Decoding records eagerly");
            Record::Eager(RecordBuf::default())
        } else {
            Record::Lazy(bam::Record::default())
        };
        debug!(
            "Indexing {} ({} sorted, {} reference sequences)",
            source,
            input.sort_order(),
            input.header().reference_sequences().len()
        );
        let mut counter = self.show_progress.then(|| RecordCounter::new("Indexing"));

        let (index, record_count) = index_records(input, record, counter.as_mut())?;

        if let Some(counter) = counter {
            counter.finish();
        }
        debug!("Binned {} records from {}", record_count, source);
        write_index(&index, output)
    }
}

/// Reusable record buffer: lazily decoded BAM record or a fully decoded owned record.
enum Record {
    Lazy(bam::Record),
    Eager(RecordBuf),
}

impl Record {
    /// Read the next record. Returns false at end of stream.
    fn read_next(&mut self, reader: &mut BamReader, header: &sam::Header) -> io::Result<bool> {
        let n = match self {
            Record::Lazy(record) => reader.read_record(record)?,
            Record::Eager(record) => reader.read_record_buf(header, record)?,
        };
        Ok(n != 0)
    }

    /// Placement used for binning. None for records without reference, start, or end.
    fn alignment_context(&self) -> io::Result<Option<AlignmentContext>> {
        use noodles::sam::alignment::Record as _;

        match self {
            Record::Lazy(record) => {
                let placement = (
                    record.reference_sequence_id().transpose()?,
                    record.alignment_start().transpose()?,
                    record.alignment_end().transpose()?,
                );
                Ok(match placement {
                    (Some(id), Some(start), Some(end)) => {
                        Some((id, start, end, !record.flags().is_unmapped()))
                    }
                    _ => None,
                })
            }
            Record::Eager(record) => Ok(
                match (
                    record.reference_sequence_id(),
                    record.alignment_start(),
                    record.alignment_end(),
                ) {
                    (Some(id), Some(start), Some(end)) => {
                        Some((id, start, end, !record.flags().is_unmapped()))
                    }
                    _ => None,
                },
            ),
        }
    }
}

/// Walk all records after the header, adding each record's chunk to the binning indexer.
fn index_records(
    input: &mut ResolvedInput,
    mut record: Record,
    mut counter: Option<&mut RecordCounter>,
) -> io::Result<(bai::Index, usize)> {
    let (reader, header) = input.parts_mut();
    let mut indexer = Indexer::default();
    let mut record_count = 0_usize;

    let mut start_position = reader.get_ref().virtual_position();
    while record.read_next(reader, header)? {
        let end_position = reader.get_ref().virtual_position();
        let chunk = Chunk::new(start_position, end_position);
        indexer.add_record(record.alignment_context()?, chunk)?;
        start_position = end_position;

        record_count += 1;
        if let Some(counter) = counter.as_deref_mut() {
            counter.tick();
        }
    }

    let reference_sequence_count = header.reference_sequences().len();
    Ok((indexer.build(reference_sequence_count), record_count))
}

/// Write to `<output>.tmp`, then rename over `output`. The scratch file is removed on failure.
fn write_index(index: &bai::Index, output: &Path) -> io::Result<()> {
    let temp_path = temp_path_for(output);
    let written = File::create(&temp_path).and_then(|file| {
        let mut buf = BufWriter::new(file);
        bai::io::Writer::new(&mut buf).write_index(index)?;
        buf.flush()
    });
    match written {
        Ok(()) => rename_temp_to_final(&temp_path, output),
        Err(e) => {
            discard_temp(&temp_path);
            Err(e)
        }
    }
}
