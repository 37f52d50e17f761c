//! PNM (Portable Any Map) format support
//!
//! Reads PBM (`P1` plain, `P4` raw) and single-channel PGM (`P2` plain,
//! `P5` raw) images, and writes bit grids in any of those four variants.
//! Color PPM and PAM are not supported.
//!
//! Samples are always delivered and written in row-major order: row 0
//! left to right, then row 1, and so on.

use crate::header::{PnmHeader, Tokenizer, read_header};
use crate::{IoError, IoResult, PnmFormat};
use pixgrid_core::{BitGrid2D, Grid2D};
use std::io::{BufRead, Write};

/// Longest line written in plain formats.
pub const PLAIN_LINE_LIMIT: usize = 70;

/// Streaming Netpbm sample decoder
///
/// Parses the header on construction, then yields one sample per call to
/// [`PnmReader::next_sample`] (or per iteration) until `width * height`
/// samples have been produced.
///
/// # Examples
///
/// ```
/// use pixgrid_io::PnmReader;
///
/// let rdr = PnmReader::new(&b"P1\n3 1\n101\n"[..]).unwrap();
/// assert_eq!(rdr.header().width, 3);
/// let samples: Vec<u32> = rdr.collect::<Result<_, _>>().unwrap();
/// assert_eq!(samples, vec![1, 0, 1]);
/// ```
#[derive(Debug)]
pub struct PnmReader<R> {
    tokens: Tokenizer<R>,
    header: PnmHeader,
    /// Samples not yet produced
    remaining: u64,
    /// Column of the next sample
    col: u32,
    /// Current raw PBM byte and how many of its bits are still unread
    byte: u8,
    bits_left: u8,
}

impl<R: BufRead> PnmReader<R> {
    /// Parse the header and prepare to read samples.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidData`] for a malformed header and
    /// [`IoError::UnsupportedFormat`] for color or PAM input.
    pub fn new(reader: R) -> IoResult<Self> {
        let mut tokens = Tokenizer::new(reader);
        let header = read_header(&mut tokens)?;
        Ok(Self {
            tokens,
            remaining: header.sample_count(),
            header,
            col: 0,
            byte: 0,
            bits_left: 0,
        })
    }

    /// Get the decoded header.
    pub fn header(&self) -> &PnmHeader {
        &self.header
    }

    /// Read the next sample, or `None` once the raster is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidData`] on truncated input or a sample
    /// larger than the header's maxval.
    pub fn next_sample(&mut self) -> IoResult<Option<u32>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        let value = match self.decode_sample() {
            Ok(v) => v,
            Err(e) => {
                self.remaining = 0;
                return Err(e);
            }
        };
        if value > self.header.max_value {
            self.remaining = 0;
            return Err(IoError::InvalidData(format!(
                "sample {value} exceeds maxval {}",
                self.header.max_value
            )));
        }

        self.remaining -= 1;
        self.col += 1;
        if self.col == self.header.width {
            // Raw PBM rows are padded to a whole byte
            self.col = 0;
            self.bits_left = 0;
        }
        Ok(Some(value))
    }

    fn decode_sample(&mut self) -> IoResult<u32> {
        match self.header.format {
            PnmFormat::PlainPbm => self.tokens.read_plain_bit(),
            PnmFormat::PlainPgm => self.tokens.read_uint("sample"),
            PnmFormat::RawPbm => {
                if self.bits_left == 0 {
                    self.byte = self.tokens.raw_byte()?;
                    self.bits_left = 8;
                }
                self.bits_left -= 1;
                Ok(u32::from((self.byte >> self.bits_left) & 1))
            }
            PnmFormat::RawPgm => {
                let hi = u32::from(self.tokens.raw_byte()?);
                if self.header.max_value < 256 {
                    Ok(hi)
                } else {
                    let lo = u32::from(self.tokens.raw_byte()?);
                    Ok((hi << 8) | lo)
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for PnmReader<R> {
    type Item = IoResult<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_sample().transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (0, Some(n))
    }
}

/// Decode every sample of a PBM or PGM image into a generic grid.
///
/// The raster is decoded in full before the grid is allocated, so a
/// header declaring more samples than the input holds fails as truncated
/// data instead of reserving storage for them.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the magic number
///
/// # Returns
/// The header and a `Grid2D<u16>` holding the raw sample values.
pub fn read_sample_grid<R: BufRead>(reader: R) -> IoResult<(PnmHeader, Grid2D<u16>)> {
    let rdr = PnmReader::new(reader)?;
    let header = *rdr.header();

    // maxval <= 65535, so every sample fits in u16
    let samples = rdr
        .map(|s| s.map(|v| v as u16))
        .collect::<IoResult<Vec<u16>>>()?;

    let mut grid: Grid2D<u16> =
        Grid2D::new(header.width, header.height).map_err(allocation_error)?;
    let mut samples = samples.into_iter();
    grid.map_row_major(|_, _, cell| {
        if let Some(v) = samples.next() {
            *cell = v;
        }
    });
    Ok((header, grid))
}

/// Read a binary image into a [`BitGrid2D`].
///
/// Accepts any PBM, or a PGM whose maxval is 1. As with
/// [`read_sample_grid`], the whole raster is validated before the grid
/// is allocated.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if the maxval is not 1, any sample is
/// not 0 or 1, or the raster is truncated.
pub fn read_bitgrid<R: BufRead>(reader: R) -> IoResult<BitGrid2D> {
    let mut rdr = PnmReader::new(reader)?;
    let header = *rdr.header();
    if header.max_value != 1 {
        return Err(IoError::InvalidData(format!(
            "expected maxval 1 for a binary image, found {}",
            header.max_value
        )));
    }
    let width = u64::from(header.width);

    // Row-major bits, MSB first, grown only as samples arrive
    let mut bits: Vec<u32> = Vec::new();
    let mut n: u64 = 0;
    while let Some(v) = rdr.next_sample()? {
        if n % 32 == 0 {
            bits.push(0);
        }
        match v {
            0 => {}
            1 => bits[(n / 32) as usize] |= 0x8000_0000 >> (n % 32),
            v => {
                return Err(IoError::InvalidData(format!(
                    "non-binary sample {v} at ({}, {})",
                    n % width,
                    n / width
                )));
            }
        }
        n += 1;
    }

    let mut grid = BitGrid2D::new(header.width, header.height).map_err(allocation_error)?;
    for (i, &word) in bits.iter().enumerate() {
        let mut word = word;
        while word != 0 {
            let bit = word.leading_zeros();
            word &= !(0x8000_0000 >> bit);
            let n = i as u64 * 32 + u64::from(bit);
            grid.put((n % width) as u32, (n / width) as u32, 1)?;
        }
    }
    Ok(grid)
}

/// Report a grid that cannot be allocated as unusable input.
fn allocation_error(err: pixgrid_core::Error) -> IoError {
    match err {
        pixgrid_core::Error::AllocationFailed { .. } => IoError::InvalidData(err.to_string()),
        other => IoError::Core(other),
    }
}

/// Write a [`BitGrid2D`] as a Netpbm image.
///
/// PBM headers carry only magic and dimensions: a bitmap's maxval is
/// implicitly 1, and a `1` line after the dimensions would be read as a
/// pixel.
/// PGM headers declare maxval 1. Plain output never exceeds [`PLAIN_LINE_LIMIT`] characters
/// per line and starts every image row on a new line.
///
/// # Arguments
/// * `grid`   - The image to encode
/// * `writer` - Destination writer
/// * `format` - Netpbm variant to emit
pub fn write_bitgrid<W: Write>(
    grid: &BitGrid2D,
    mut writer: W,
    format: PnmFormat,
) -> IoResult<()> {
    let width = grid.width();
    let height = grid.height();

    writeln!(writer, "{}", format.magic())?;
    writeln!(writer, "{width} {height}")?;
    if !format.is_bitmap() {
        writeln!(writer, "1")?;
    }

    match format {
        PnmFormat::PlainPbm => write_plain_rows(grid, &mut writer, 1)?,
        PnmFormat::PlainPgm => write_plain_rows(grid, &mut writer, 2)?,
        PnmFormat::RawPbm => {
            let mut line = vec![0u8; width.div_ceil(8) as usize];
            for row in 0..height {
                line.fill(0);
                for col in 0..width {
                    if grid.get(col, row)? == 1 {
                        line[(col / 8) as usize] |= 0x80 >> (col % 8);
                    }
                }
                writer.write_all(&line)?;
            }
        }
        PnmFormat::RawPgm => {
            let mut line = vec![0u8; width as usize];
            for row in 0..height {
                for col in 0..width {
                    line[col as usize] = grid.get(col, row)? as u8;
                }
                writer.write_all(&line)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write ASCII rows where each sample takes `cell` characters
/// (1 for packed PBM digits, 2 for space-separated PGM samples).
fn write_plain_rows<W: Write>(grid: &BitGrid2D, writer: &mut W, cell: usize) -> IoResult<()> {
    let per_line = PLAIN_LINE_LIMIT / cell;
    let mut line = String::with_capacity(PLAIN_LINE_LIMIT + 1);
    for row in 0..grid.height() {
        let mut on_line = 0;
        for col in 0..grid.width() {
            if on_line == per_line {
                line.push('\n');
                writer.write_all(line.as_bytes())?;
                line.clear();
                on_line = 0;
            }
            if cell == 2 && on_line > 0 {
                line.push(' ');
            }
            line.push(if grid.get(col, row)? == 1 { '1' } else { '0' });
            on_line += 1;
        }
        line.push('\n');
        writer.write_all(line.as_bytes())?;
        line.clear();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from_rows(rows: &[&str]) -> BitGrid2D {
        let mut grid = BitGrid2D::new(rows[0].len() as u32, rows.len() as u32).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                if c == '1' {
                    grid.put(col as u32, row as u32, 1).unwrap();
                }
            }
        }
        grid
    }

    #[test]
    fn test_reader_samples() {
        let data = b"P1\n# comment\n3 2\n1 0 1\n0 1 0\n";
        let rdr = PnmReader::new(&data[..]).unwrap();
        let samples: Vec<u32> = rdr.collect::<IoResult<_>>().unwrap();
        assert_eq!(samples, vec![1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_reader_stops_after_raster() {
        let mut rdr = PnmReader::new(&b"P1 2 1 01 trailing"[..]).unwrap();
        assert_eq!(rdr.next_sample().unwrap(), Some(0));
        assert_eq!(rdr.next_sample().unwrap(), Some(1));
        assert_eq!(rdr.next_sample().unwrap(), None);
    }

    #[test]
    fn test_reader_rejects_large_sample() {
        let mut rdr = PnmReader::new(&b"P2\n2 1\n3\n1 4\n"[..]).unwrap();
        assert_eq!(rdr.next_sample().unwrap(), Some(1));
        assert!(matches!(rdr.next_sample(), Err(IoError::InvalidData(_))));
        assert_eq!(rdr.next_sample().unwrap(), None);
    }

    #[test]
    fn test_read_plain_pbm_packed_digits() {
        let grid = read_bitgrid(&b"P1\n4 2\n0110\n1001\n"[..]).unwrap();
        assert_eq!(grid, grid_from_rows(&["0110", "1001"]));
    }

    #[test]
    fn test_read_raw_pbm_row_padding() {
        // 10 pixels per row -> 2 bytes per row
        let mut data = b"P4\n10 2\n".to_vec();
        data.extend_from_slice(&[0b1000_0000, 0b0100_0000, 0b0000_0001, 0b1000_0000]);
        let grid = read_bitgrid(&data[..]).unwrap();
        assert_eq!(grid, grid_from_rows(&["1000000001", "0000000110"]));
    }

    #[test]
    fn test_read_pgm_maxval_one() {
        let grid = read_bitgrid(&b"P2\n2 2\n1\n0 1\n1 0\n"[..]).unwrap();
        assert_eq!(grid, grid_from_rows(&["01", "10"]));
        let grid = read_bitgrid(&b"P5\n2 1\n1\n\x01\x00"[..]).unwrap();
        assert_eq!(grid, grid_from_rows(&["10"]));
    }

    #[test]
    fn test_read_bitgrid_rejects_maxval() {
        assert!(matches!(
            read_bitgrid(&b"P2\n2 1\n255\n0 255\n"[..]),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_read_bitgrid_rejects_bad_sample() {
        assert!(matches!(
            read_bitgrid(&b"P1\n2 1\n02\n"[..]),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_read_truncated() {
        assert!(matches!(
            read_bitgrid(&b"P1\n3 3\n010\n01"[..]),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_bitgrid(&b"P4\n9 2\n\xff"[..]),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_read_huge_declared_size() {
        // Header promises 2^64 samples, raster is empty
        for data in [
            &b"P1\n4294967295 4294967295\n"[..],
            &b"P4\n4294967295 4294967295\n"[..],
            &b"P5\n4294967295 4294967295\n1\n\x01"[..],
        ] {
            assert!(matches!(read_bitgrid(data), Err(IoError::InvalidData(_))));
            assert!(matches!(read_sample_grid(data), Err(IoError::InvalidData(_))));
        }
    }

    #[test]
    fn test_read_sample_grid() {
        let (header, grid) = read_sample_grid(&b"P2\n3 2\n9\n1 2 3\n4 5 6\n"[..]).unwrap();
        assert_eq!(header.max_value, 9);
        assert_eq!(grid.at(0, 0), Ok(&1));
        assert_eq!(grid.at(2, 0), Ok(&3));
        assert_eq!(grid.at(0, 1), Ok(&4));
        assert_eq!(grid.at(2, 1), Ok(&6));
    }

    #[test]
    fn test_read_sample_grid_16bit() {
        let (header, grid) = read_sample_grid(&b"P5\n2 1\n1000\n\x03\xe8\x00\x07"[..]).unwrap();
        assert_eq!(header.max_value, 1000);
        assert_eq!(grid.at(0, 0), Ok(&1000));
        assert_eq!(grid.at(1, 0), Ok(&7));
    }

    #[test]
    fn test_write_plain_pbm() {
        let grid = grid_from_rows(&["010", "111"]);
        let mut out = Vec::new();
        write_bitgrid(&grid, &mut out, PnmFormat::PlainPbm).unwrap();
        assert_eq!(out, b"P1\n3 2\n010\n111\n");
    }

    #[test]
    fn test_write_plain_pgm() {
        let grid = grid_from_rows(&["010", "111"]);
        let mut out = Vec::new();
        write_bitgrid(&grid, &mut out, PnmFormat::PlainPgm).unwrap();
        assert_eq!(out, b"P2\n3 2\n1\n0 1 0\n1 1 1\n");
    }

    #[test]
    fn test_write_raw_pbm() {
        let grid = grid_from_rows(&["1000000001"]);
        let mut out = Vec::new();
        write_bitgrid(&grid, &mut out, PnmFormat::RawPbm).unwrap();
        assert_eq!(out, b"P4\n10 1\n\x80\x40");
    }

    #[test]
    fn test_plain_pbm_wraps_at_70() {
        let mut grid = BitGrid2D::new(140, 1).unwrap();
        grid.put(139, 0, 1).unwrap();
        let mut out = Vec::new();
        write_bitgrid(&grid, &mut out, PnmFormat::PlainPbm).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2].len(), 70);
        assert_eq!(lines[3].len(), 70);
        assert!(lines[3].ends_with('1'));
        assert!(text.lines().all(|l| !l.is_empty()));
    }

    #[test]
    fn test_roundtrip_all_formats() {
        let grid = grid_from_rows(&["10110", "01001", "11111"]);
        for format in [
            PnmFormat::PlainPbm,
            PnmFormat::PlainPgm,
            PnmFormat::RawPbm,
            PnmFormat::RawPgm,
        ] {
            let mut out = Vec::new();
            write_bitgrid(&grid, &mut out, format).unwrap();
            let back = read_bitgrid(&out[..]).unwrap();
            assert_eq!(back, grid, "roundtrip failed for {format:?}");
        }
    }
}
