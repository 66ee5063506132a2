//! Shared fixtures: in-memory BAM/SAM bytes, a counting opener and a recording builder.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bamidx::engine::{IndexBuilder, InputStream, StreamOpener};
use bamidx::pipeline::ResolvedInput;
use bamidx::{InputSpec, PipelineError, ReaderOptions, SortOrder};
use noodles::core::Position;
use noodles::sam::alignment::RecordBuf;
use noodles::sam::alignment::io::Write as _;
use noodles::sam::alignment::record::Flags;
use noodles::sam::alignment::record::cigar::{Op, op::Kind};
use noodles::sam::alignment::record_buf::{Cigar, Sequence};
use noodles::{bam, bgzf, sam};

pub fn header_text(sort_order: Option<&str>) -> String {
    let mut text = String::new();
    match sort_order {
        Some(so) => text.push_str(&format!("@HD\tVN:1.6\tSO:{so}\n")),
        None => text.push_str("@HD\tVN:1.6\n"),
    }
    text.push_str("@SQ\tSN:sq0\tLN:1000\n@SQ\tSN:sq1\tLN:500\n");
    text
}

pub fn header(sort_order: Option<&str>) -> sam::Header {
    header_text(sort_order).parse().unwrap()
}

fn mapped_record(reference_sequence_id: usize, start: usize) -> RecordBuf {
    RecordBuf::builder()
        .set_flags(Flags::empty())
        .set_reference_sequence_id(reference_sequence_id)
        .set_alignment_start(Position::try_from(start).unwrap())
        .set_cigar([Op::new(Kind::Match, 4)].into_iter().collect::<Cigar>())
        .set_sequence(Sequence::from(b"ACGT".to_vec()))
        .build()
}

/// Two placed records on sq0, one on sq1, one unplaced unmapped record.
pub fn sample_records() -> Vec<RecordBuf> {
    vec![
        mapped_record(0, 8),
        mapped_record(0, 13),
        mapped_record(1, 21),
        RecordBuf::default(),
    ]
}

/// A BAM stream with the given `@HD SO:` value. Returns `(bytes, header_block_len)`: the header
/// sits alone in the first BGZF block so the record block can be damaged independently.
pub fn bam_bytes_with_split(sort_order: Option<&str>) -> (Vec<u8>, usize) {
    let header = header(sort_order);
    let mut writer = bam::io::Writer::new(Vec::new());
    writer.write_header(&header).unwrap();
    writer.get_mut().flush().unwrap();
    let header_block_len = writer.get_ref().get_ref().len();

    for record in sample_records() {
        writer.write_alignment_record(&header, &record).unwrap();
    }
    let bytes = writer.into_inner().finish().unwrap();
    (bytes, header_block_len)
}

pub fn bam_bytes(sort_order: Option<&str>) -> Vec<u8> {
    bam_bytes_with_split(sort_order).0
}

/// Coordinate-sorted header, but the deflate payload of the record block is invalid
/// (reserved block type), so decoding fails after validation has passed.
pub fn corrupt_bam_bytes() -> Vec<u8> {
    const BGZF_HEADER_LEN: usize = 18;
    let (mut bytes, header_block_len) = bam_bytes_with_split(Some("coordinate"));
    bytes[header_block_len + BGZF_HEADER_LEN] = 0xff;
    bytes
}

/// Writes a coordinate-sorted `sample.bam` into `dir`.
pub fn sorted_bam(dir: &Path) -> PathBuf {
    write_file(dir, "sample.bam", &bam_bytes(Some("coordinate")))
}

pub fn sam_bytes(sort_order: &str) -> Vec<u8> {
    let mut text = header_text(Some(sort_order));
    text.push_str("r0\t0\tsq0\t8\t60\t4M\t*\t0\t0\tACGT\t*\n");
    text.into_bytes()
}

/// SAM text wrapped in BGZF: compressed, but not the binary container.
pub fn bgzf_sam_bytes() -> Vec<u8> {
    let mut writer = bgzf::Writer::new(Vec::new());
    writer.write_all(&sam_bytes("coordinate")).unwrap();
    writer.finish().unwrap()
}

pub fn cram_bytes() -> Vec<u8> {
    let mut bytes = b"CRAM\x03\x00".to_vec();
    bytes.resize(26, 0);
    bytes
}

/// A lone empty BGZF block (the end-of-file marker).
pub const BGZF_EMPTY_BLOCK: [u8; 28] = [
    0x1f, 0x8b, 0x08, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0x06, 0x00, 0x42, 0x43, 0x02, 0x00,
    0x1b, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// A sorted BAM stream preceded by an empty BGZF block.
pub fn bam_bytes_after_empty_block() -> Vec<u8> {
    let mut bytes = BGZF_EMPTY_BLOCK.to_vec();
    bytes.extend(bam_bytes(Some("coordinate")));
    bytes
}

pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Stream that counts how many times it has been released.
struct CountingStream {
    inner: Box<dyn Read + Send>,
    closed: Arc<AtomicUsize>,
}

impl Read for CountingStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Drop for CountingStream {
    fn drop(&mut self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Opens local paths from disk and serves `remote` bytes for any URL. Counts opens and closes.
#[derive(Default)]
pub struct CountingOpener {
    pub remote: Vec<u8>,
    pub opened: Arc<AtomicUsize>,
    pub closed: Arc<AtomicUsize>,
    pub calls: RefCell<Vec<(InputSpec, ReaderOptions)>>,
}

impl CountingOpener {
    pub fn with_remote(remote: Vec<u8>) -> Self {
        CountingOpener {
            remote,
            ..Default::default()
        }
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

impl StreamOpener for CountingOpener {
    fn open(
        &self,
        input: &InputSpec,
        options: &ReaderOptions,
    ) -> Result<InputStream, PipelineError> {
        self.calls
            .borrow_mut()
            .push((input.clone(), options.clone()));
        let inner: Box<dyn Read + Send> = match input {
            InputSpec::Local(path) => Box::new(File::open(path).unwrap()),
            InputSpec::Remote(_) => Box::new(Cursor::new(self.remote.clone())),
        };
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(CountingStream {
            inner,
            closed: Arc::clone(&self.closed),
        }))
    }
}

/// Records each build call; writes a stub index or fails with an injected error.
#[derive(Default)]
pub struct RecordingBuilder {
    pub fail_with: Option<io::ErrorKind>,
    /// Close counter of the opener, sampled while the build runs.
    pub closed: Arc<AtomicUsize>,
    pub calls: RefCell<Vec<BuildCall>>,
}

#[derive(Clone, Debug)]
pub struct BuildCall {
    pub output: PathBuf,
    pub source: Option<String>,
    pub sort_order: SortOrder,
    pub reference_sequence_count: usize,
    pub closed_during_build: usize,
}

impl RecordingBuilder {
    pub fn new(closed: &Arc<AtomicUsize>) -> Self {
        RecordingBuilder {
            closed: Arc::clone(closed),
            ..Default::default()
        }
    }

    pub fn failing(closed: &Arc<AtomicUsize>, kind: io::ErrorKind) -> Self {
        RecordingBuilder {
            fail_with: Some(kind),
            ..Self::new(closed)
        }
    }
}

pub const INJECTED_FAILURE: &str = "injected build failure";

impl IndexBuilder for RecordingBuilder {
    fn build(&self, input: &mut ResolvedInput, output: &Path) -> io::Result<()> {
        self.calls.borrow_mut().push(BuildCall {
            output: output.to_path_buf(),
            source: input.source().map(|s| s.to_string()),
            sort_order: input.sort_order().clone(),
            reference_sequence_count: input.header().reference_sequences().len(),
            closed_during_build: self.closed.load(Ordering::SeqCst),
        });
        if let Some(kind) = self.fail_with {
            return Err(io::Error::new(kind, INJECTED_FAILURE));
        }
        std::fs::write(output, b"BAI\x01")
    }
}
