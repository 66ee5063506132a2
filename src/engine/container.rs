//! Container detection and header inspection.
//!
//! The first bytes of the stream decide the container type: BGZF whose decompressed data
//! starts with the BAM magic is the binary container, `CRAM` magic is CRAM, and anything
//! else (plain text, plain gzip, BGZF-wrapped text) counts as the SAM text format.

use std::io::{self, BufRead, Cursor, Read};

use noodles::{bam, bgzf, sam};

use crate::engine::source::InputStream;
use crate::types::{ContainerType, SortOrder};

/// Raw prefix re-attached in front of the stream after sniffing.
pub type SniffedStream = io::Chain<Cursor<Vec<u8>>, InputStream>;

/// BAM reader over the opened input. Positioned after the header once validated.
pub type BamReader = bam::io::Reader<bgzf::Reader<SniffedStream>>;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const CRAM_MAGIC: &[u8] = b"CRAM";
const BAM_MAGIC: &[u8] = b"BAM\x01";

/// Fixed BGZF block header: gzip header with FEXTRA, XLEN = 6, subfield `BC`.
const BGZF_HEADER_LEN: usize = 18;
const GZIP_FLG_FEXTRA: u8 = 0x04;

/// Empty BGZF blocks tolerated before the first decompressed byte.
const MAX_LEADING_EMPTY_BLOCKS: usize = 16;

/// Outcome of sniffing an opened stream.
pub enum Detected {
    /// Binary container; the reader has not consumed the magic yet.
    Bam(Box<BamReader>),
    Other(ContainerType),
}

/// Read up to `n` bytes without failing on a short stream.
fn read_prefix<R: Read>(reader: &mut R, n: usize) -> io::Result<Vec<u8>> {
    let mut prefix = Vec::with_capacity(n);
    reader.take(n as u64).read_to_end(&mut prefix)?;
    Ok(prefix)
}

/// True if `prefix` is a gzip member header carrying the BGZF `BC` extra subfield.
pub fn is_bgzf_header(prefix: &[u8]) -> bool {
    prefix.len() >= BGZF_HEADER_LEN
        && prefix[..2] == GZIP_MAGIC
        && prefix[3] & GZIP_FLG_FEXTRA != 0
        && prefix[12] == b'B'
        && prefix[13] == b'C'
}

fn empty_input() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "empty input")
}

/// Sniff `stream` and, for the binary container, hand back a reader over the whole stream.
///
/// Fails with `UnexpectedEof` when there is no data to sniff at all.
pub fn detect_container(mut stream: InputStream) -> io::Result<Detected> {
    let prefix = read_prefix(&mut stream, BGZF_HEADER_LEN)?;
    if prefix.is_empty() {
        return Err(empty_input());
    }
    if prefix.starts_with(CRAM_MAGIC) {
        return Ok(Detected::Other(ContainerType::Cram));
    }
    if !is_bgzf_header(&prefix) {
        return Ok(Detected::Other(ContainerType::Sam));
    }

    let mut decoder = bgzf::Reader::new(Cursor::new(prefix).chain(stream));
    let mut is_bam = None;
    for _ in 0..MAX_LEADING_EMPTY_BLOCKS {
        let buf = decoder.fill_buf()?;
        if !buf.is_empty() {
            is_bam = Some(buf.starts_with(BAM_MAGIC));
            break;
        }
    }
    match is_bam {
        Some(true) => Ok(Detected::Bam(Box::new(bam::io::Reader::from(decoder)))),
        Some(false) => Ok(Detected::Other(ContainerType::Sam)),
        None => Err(empty_input()),
    }
}

/// Declared sort order (`@HD SO:`). Missing header line or field is `unknown`.
pub fn sort_order(header: &sam::Header) -> SortOrder {
    use noodles::sam::header::record::value::map::header::tag::SORT_ORDER;

    header
        .header()
        .and_then(|hd| hd.other_fields().get(&SORT_ORDER))
        .map(|value| SortOrder::from(String::from_utf8_lossy(value).as_ref()))
        .unwrap_or(SortOrder::Unknown)
}
