//! Netpbm header reading
//!
//! Parses the magic number, dimensions and maxval of a Netpbm stream,
//! leaving the reader positioned at the first raster byte.
//!
//! Header tokens are separated by whitespace and may be interleaved with
//! `#` comments running to the end of the line. Raw formats end the
//! header with exactly one whitespace byte after the last token.

use crate::format::{PnmFormat, detect_format_from_bytes};
use crate::{IoError, IoResult};
use std::io::BufRead;

/// Largest maxval a Netpbm graymap may declare.
pub const PNM_MAX_MAXVAL: u32 = 65535;

/// Image metadata read from a Netpbm header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PnmHeader {
    /// Detected variant
    pub format: PnmFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Largest sample value (always 1 for bitmaps)
    pub max_value: u32,
}

impl PnmHeader {
    /// Number of samples in the raster.
    pub fn sample_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Byte-level tokenizer over a buffered reader.
#[derive(Debug)]
pub(crate) struct Tokenizer<R> {
    reader: R,
}

impl<R: BufRead> Tokenizer<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self { reader }
    }

    fn peek_byte(&mut self) -> IoResult<Option<u8>> {
        let buf = self.reader.fill_buf()?;
        Ok(buf.first().copied())
    }

    pub(crate) fn next_byte(&mut self) -> IoResult<Option<u8>> {
        let b = self.peek_byte()?;
        if b.is_some() {
            self.reader.consume(1);
        }
        Ok(b)
    }

    /// Read one raster byte, failing on end of input.
    pub(crate) fn raw_byte(&mut self) -> IoResult<u8> {
        self.next_byte()?
            .ok_or_else(|| IoError::InvalidData("truncated raster data".to_string()))
    }

    fn skip_whitespace_and_comments(&mut self) -> IoResult<()> {
        while let Some(b) = self.peek_byte()? {
            if b == b'#' {
                while let Some(c) = self.next_byte()? {
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                }
            } else if b.is_ascii_whitespace() {
                self.reader.consume(1);
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Read an unsigned decimal token.
    pub(crate) fn read_uint(&mut self, what: &str) -> IoResult<u32> {
        self.skip_whitespace_and_comments()?;
        let mut value: u64 = 0;
        let mut digits = 0;
        while let Some(b) = self.peek_byte()? {
            if !b.is_ascii_digit() {
                break;
            }
            value = value * 10 + u64::from(b - b'0');
            if value > u64::from(u32::MAX) {
                return Err(IoError::InvalidData(format!("{what} is too large")));
            }
            self.reader.consume(1);
            digits += 1;
        }
        if digits == 0 {
            return Err(match self.peek_byte()? {
                Some(b) => IoError::InvalidData(format!(
                    "expected {what}, found byte 0x{b:02x}"
                )),
                None => IoError::InvalidData(format!("expected {what}, found end of input")),
            });
        }
        Ok(value as u32)
    }

    /// Read one plain-PBM pixel: a single `0` or `1`, whitespace optional.
    pub(crate) fn read_plain_bit(&mut self) -> IoResult<u32> {
        self.skip_whitespace_and_comments()?;
        match self.next_byte()? {
            Some(b'0') => Ok(0),
            Some(b'1') => Ok(1),
            Some(b) => Err(IoError::InvalidData(format!(
                "invalid bitmap sample byte 0x{b:02x}"
            ))),
            None => Err(IoError::InvalidData("truncated raster data".to_string())),
        }
    }

    /// Consume the single whitespace byte ending a raw header.
    fn end_raw_header(&mut self) -> IoResult<()> {
        match self.next_byte()? {
            Some(b) if b.is_ascii_whitespace() => Ok(()),
            Some(b) => Err(IoError::InvalidData(format!(
                "expected whitespace after header, found byte 0x{b:02x}"
            ))),
            None => Err(IoError::InvalidData("missing raster data".to_string())),
        }
    }
}

/// Parse a Netpbm header from the front of `tokens`.
pub(crate) fn read_header<R: BufRead>(tokens: &mut Tokenizer<R>) -> IoResult<PnmHeader> {
    let mut magic = [0u8; 2];
    for byte in &mut magic {
        *byte = tokens
            .next_byte()?
            .ok_or_else(|| IoError::InvalidData("not enough data to detect format".to_string()))?;
    }
    let format = detect_format_from_bytes(&magic)?;

    let width = tokens.read_uint("width")?;
    let height = tokens.read_uint("height")?;
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "invalid dimensions {width}x{height}"
        )));
    }

    let max_value = if format.is_bitmap() {
        1
    } else {
        let maxval = tokens.read_uint("maxval")?;
        if maxval == 0 || maxval > PNM_MAX_MAXVAL {
            return Err(IoError::InvalidData(format!("invalid maxval {maxval}")));
        }
        maxval
    };

    if !format.is_plain() {
        tokens.end_raw_header()?;
    }

    Ok(PnmHeader {
        format,
        width,
        height,
        max_value,
    })
}

/// Read a Netpbm header from bytes without decoding the raster
pub fn read_header_mem(data: &[u8]) -> IoResult<PnmHeader> {
    read_header(&mut Tokenizer::new(data))
}
