//! Netpbm format detection
//!
//! Detects the Netpbm variant by examining the two-byte magic number.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for Netpbm variants
mod magic {
    pub const PBM_ASCII: &[u8] = b"P1";
    pub const PGM_ASCII: &[u8] = b"P2";
    pub const PPM_ASCII: &[u8] = b"P3";
    pub const PBM_BINARY: &[u8] = b"P4";
    pub const PGM_BINARY: &[u8] = b"P5";
    pub const PPM_BINARY: &[u8] = b"P6";
    pub const PAM: &[u8] = b"P7";
}

/// Netpbm variant carrying one sample per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PnmFormat {
    /// `P1`: ASCII bitmap, one `0`/`1` character per pixel
    #[default]
    PlainPbm,
    /// `P2`: ASCII graymap, whitespace-separated decimal samples
    PlainPgm,
    /// `P4`: binary bitmap, 8 pixels per byte, rows padded to a byte
    RawPbm,
    /// `P5`: binary graymap, 1 or 2 bytes per sample
    RawPgm,
}

impl PnmFormat {
    /// Get the two-byte magic number.
    pub fn magic(self) -> &'static str {
        match self {
            Self::PlainPbm => "P1",
            Self::PlainPgm => "P2",
            Self::RawPbm => "P4",
            Self::RawPgm => "P5",
        }
    }

    /// Whether the raster is ASCII text.
    pub fn is_plain(self) -> bool {
        matches!(self, Self::PlainPbm | Self::PlainPgm)
    }

    /// Whether this is a bitmap (PBM) variant with implicit maxval 1.
    pub fn is_bitmap(self) -> bool {
        matches!(self, Self::PlainPbm | Self::RawPbm)
    }

    /// Get the conventional file extension.
    pub fn extension(self) -> &'static str {
        if self.is_bitmap() { "pbm" } else { "pgm" }
    }
}

/// Detect the Netpbm format of a file
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<PnmFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 2];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect the Netpbm format from leading bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<PnmFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    match &data[..2] {
        magic::PBM_ASCII => Ok(PnmFormat::PlainPbm),
        magic::PGM_ASCII => Ok(PnmFormat::PlainPgm),
        magic::PBM_BINARY => Ok(PnmFormat::RawPbm),
        magic::PGM_BINARY => Ok(PnmFormat::RawPgm),
        magic::PPM_ASCII | magic::PPM_BINARY => Err(IoError::UnsupportedFormat(
            "color PPM images are not supported".to_string(),
        )),
        magic::PAM => Err(IoError::UnsupportedFormat(
            "PAM (P7) images are not supported".to_string(),
        )),
        _ => Err(IoError::UnsupportedFormat(format!(
            "unknown magic number: {:02x} {:02x}",
            data[0], data[1]
        ))),
    }
}
