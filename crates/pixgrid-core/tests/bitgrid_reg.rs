//! Bit grid regression test
//!
//! Packing across word boundaries, bit access, and traversal of `BitGrid2D`.

use pixgrid_core::{BitGrid2D, Error, ErrorKind};
use pixgrid_test::{RegParams, grid_from_rows, random_grid};

#[test]
fn bitgrid_reg() {
    let mut rp = RegParams::new("bitgrid");

    // --- Test 1: Construction ---
    eprintln!("=== Construction ===");
    let grid = BitGrid2D::new(5, 70).unwrap();
    rp.compare_values(5.0, grid.width() as f64, 0.0);
    rp.compare_values(70.0, grid.height() as f64, 0.0);
    // 70 bits per column need three 32-bit words
    rp.compare_values(3.0, grid.wpc() as f64, 0.0);
    rp.compare_values(15.0, grid.data().len() as f64, 0.0);
    rp.compare_values(1.0, if grid.is_zero() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 2: Bits across word boundaries ---
    eprintln!("=== Word boundaries ===");
    let mut grid = grid;
    for row in [0, 31, 32, 63, 64, 69] {
        grid.put(2, row, 1).unwrap();
    }
    rp.compare_values(6.0, grid.count_ones() as f64, 0.0);
    for row in [0, 31, 32, 63, 64, 69] {
        rp.compare_values(1.0, grid.get(2, row).unwrap() as f64, 0.0);
    }
    rp.compare_values(0.0, grid.get(2, 30).unwrap() as f64, 0.0);
    rp.compare_values(0.0, grid.get(1, 31).unwrap() as f64, 0.0);
    rp.compare_values(0.0, grid.get(3, 0).unwrap() as f64, 0.0);
    let old = grid.put(2, 32, 0).unwrap();
    rp.compare_values(1.0, old as f64, 0.0);
    rp.compare_values(5.0, grid.count_ones() as f64, 0.0);

    // --- Test 3: Invalid access ---
    eprintln!("=== Invalid access ===");
    let bad_value = grid.put(0, 0, 2);
    rp.compare_values(
        1.0,
        if bad_value == Err(Error::InvalidBitValue(2)) { 1.0 } else { 0.0 },
        0.0,
    );
    for (col, row) in [(5, 0), (0, 70), (0u32.wrapping_sub(1), 0)] {
        let kind = grid.get(col, row).err().map(|e| e.kind());
        rp.compare_values(
            1.0,
            if kind == Some(ErrorKind::OutOfBounds) { 1.0 } else { 0.0 },
            0.0,
        );
    }
    rp.compare_values(5.0, grid.count_ones() as f64, 0.0);

    // --- Test 4: Fill and padding ---
    eprintln!("=== Fill ===");
    let mut full = BitGrid2D::new(33, 33).unwrap();
    full.set_all(1).unwrap();
    rp.compare_values((33 * 33) as f64, full.count_ones() as f64, 0.0);
    full.set_all(0).unwrap();
    rp.compare_values(1.0, if full.is_zero() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 5: Traversal orders ---
    eprintln!("=== Traversal orders ===");
    let pattern = grid_from_rows(&["100", "011"]).unwrap();
    let mut row_major = String::new();
    pattern.map_row_major(|_, _, bit| row_major.push_str(&bit.to_string()));
    rp.compare_strings(row_major.as_bytes(), b"100011");
    let mut col_major = String::new();
    pattern.map_col_major(|_, _, bit| col_major.push_str(&bit.to_string()));
    rp.compare_strings(col_major.as_bytes(), b"100101");

    // --- Test 6: Template ---
    eprintln!("=== Template ===");
    let random = random_grid(40, 37, 0.5, 9).unwrap();
    let template = random.create_template();
    rp.compare_values(1.0, if template.sizes_equal(&random) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if template.is_zero() { 1.0 } else { 0.0 }, 0.0);

    let mut ones = 0u64;
    random.map_col_major(|_, _, bit| ones += u64::from(bit));
    rp.compare_values(random.count_ones() as f64, ones as f64, 0.0);

    assert!(rp.cleanup(), "bitgrid regression test failed");
}
