//! Netpbm I/O regression test
//!
//! Reads the PBM/PGM fixtures, then writes bit grids back out in each of
//! the four formats and reads them again.

use pixgrid_io::{
    IoError, PLAIN_LINE_LIMIT, PnmFormat, detect_format, read_bitgrid_file, read_bitgrid_mem,
    read_sample_grid_file, write_bitgrid_file, write_bitgrid_mem,
};
use pixgrid_test::{RegParams, grid_from_rows, random_grid, test_data_path};

#[test]
fn pnmio_reg() {
    let mut rp = RegParams::new("pnmio");

    // --- Test 1: Plain and raw fixtures decode identically ---
    eprintln!("=== Fixtures ===");
    let plain = read_bitgrid_file(test_data_path("frame.pbm")).expect("read frame.pbm");
    let raw = read_bitgrid_file(test_data_path("frame_raw.pbm")).expect("read frame_raw.pbm");
    rp.compare_values(8.0, plain.width() as f64, 0.0);
    rp.compare_values(6.0, plain.height() as f64, 0.0);
    rp.compare_values(28.0, plain.count_ones() as f64, 0.0);
    rp.compare_grids(&plain, &raw);

    let expected = grid_from_rows(&[
        "11111111", "10000001", "10011001", "10011001", "10000001", "11111111",
    ])
    .unwrap();
    rp.compare_grids(&expected, &plain);

    let fmt = detect_format(test_data_path("frame_raw.pbm")).expect("detect format");
    rp.compare_values(
        1.0,
        if fmt == PnmFormat::RawPbm { 1.0 } else { 0.0 },
        0.0,
    );

    // --- Test 2: Graymap samples ---
    eprintln!("=== Graymap ===");
    let (header, samples) =
        read_sample_grid_file(test_data_path("ramp.pgm")).expect("read ramp.pgm");
    rp.compare_values(15.0, header.max_value as f64, 0.0);
    let values: Vec<u16> = samples.iter_row_major().map(|(_, _, &v)| v).collect();
    rp.compare_strings(
        format!("{values:?}").as_bytes(),
        b"[0, 5, 10, 15, 15, 10, 5, 0]",
    );
    // A graymap is not a bitmap, even with small samples
    let not_bitmap = pixgrid_io::read_bitgrid_file(test_data_path("ramp.pgm"));
    rp.compare_values(
        1.0,
        if matches!(not_bitmap, Err(IoError::InvalidData(_))) { 1.0 } else { 0.0 },
        0.0,
    );

    // --- Test 3: Exact plain output ---
    eprintln!("=== Plain output ===");
    let bytes = write_bitgrid_mem(&expected, PnmFormat::PlainPbm).unwrap();
    rp.compare_strings(
        &bytes,
        b"P1\n8 6\n11111111\n10000001\n10011001\n10011001\n10000001\n11111111\n",
    );
    let small = grid_from_rows(&["01", "10"]).unwrap();
    let bytes = write_bitgrid_mem(&small, PnmFormat::PlainPgm).unwrap();
    rp.compare_strings(&bytes, b"P2\n2 2\n1\n0 1\n1 0\n");

    // --- Test 4: Round trip through every format ---
    eprintln!("=== Round trip ===");
    let random = random_grid(75, 41, 0.4, 2024).unwrap();
    for format in [
        PnmFormat::PlainPbm,
        PnmFormat::PlainPgm,
        PnmFormat::RawPbm,
        PnmFormat::RawPgm,
    ] {
        let bytes = write_bitgrid_mem(&random, format).unwrap();
        rp.compare_strings(&bytes[..2], format.magic().as_bytes());
        let back = read_bitgrid_mem(&bytes).unwrap();
        rp.compare_grids(&random, &back);
        eprintln!("  {:?}: {} bytes", format, bytes.len());
    }

    // --- Test 5: Plain line length ---
    eprintln!("=== Line length ===");
    let wide = random_grid(150, 3, 0.5, 5).unwrap();
    for format in [PnmFormat::PlainPbm, PnmFormat::PlainPgm] {
        let bytes = write_bitgrid_mem(&wide, format).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let longest = text.lines().map(str::len).max().unwrap_or(0);
        rp.compare_values(
            1.0,
            if longest <= PLAIN_LINE_LIMIT { 1.0 } else { 0.0 },
            0.0,
        );
        let no_blank = text.lines().all(|l| !l.is_empty());
        rp.compare_values(1.0, if no_blank { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 6: File output ---
    eprintln!("=== File output ===");
    let path = std::env::temp_dir().join(format!("pnmio_reg_{}.pbm", std::process::id()));
    write_bitgrid_file(&plain, &path, PnmFormat::RawPbm).expect("write temp file");
    let reread = read_bitgrid_file(&path).expect("reread temp file");
    rp.compare_grids(&plain, &reread);
    let on_disk = std::fs::read(&path).unwrap();
    let fixture = std::fs::read(test_data_path("frame_raw.pbm")).unwrap();
    rp.compare_strings(&fixture, &on_disk);
    let _ = std::fs::remove_file(&path);

    // --- Test 7: Rejected input ---
    eprintln!("=== Rejected input ===");
    let cases: [&[u8]; 4] = [b"P1\n2 2\n0 1 1\n", b"P1\n2 1\n0 2\n", b"P4\n9 1\n\xff", b""];
    for data in cases {
        let ok = read_bitgrid_mem(data).is_err();
        rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
    }

    // A tiny input declaring an enormous image is rejected, not allocated
    let huge: [&[u8]; 3] = [
        b"P1\n4294967295 4294967295\n",
        b"P4\n65536 65536\n\xff\x00",
        b"P2\n100000 100000\n1\n0 1 1 0\n",
    ];
    for data in huge {
        let rejected = matches!(read_bitgrid_mem(data), Err(IoError::InvalidData(_)));
        rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);
        let rejected = matches!(
            pixgrid_io::read_sample_grid(data),
            Err(IoError::InvalidData(_))
        );
        rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);
    }

    let missing = read_bitgrid_file(test_data_path("no_such_file.pbm"));
    rp.compare_values(
        1.0,
        if matches!(missing, Err(IoError::Io(_))) { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "pnmio regression test failed");
}
