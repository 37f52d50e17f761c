//! Pixel connectivity
//!
//! Defines which cells count as neighbors when growing a region.

/// Connectivity type for region growing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

impl ConnectivityType {
    /// Neighbor offsets as `(dcol, drow)`, edge-sharing neighbors first.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        const FOUR: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        const EIGHT: [(i32, i32); 8] = [
            (0, -1),
            (1, 0),
            (0, 1),
            (-1, 0),
            (1, -1),
            (1, 1),
            (-1, 1),
            (-1, -1),
        ];
        match self {
            ConnectivityType::FourWay => &FOUR,
            ConnectivityType::EightWay => &EIGHT,
        }
    }

    /// Parse the conventional neighbor count (4 or 8).
    pub fn from_neighbors(n: u32) -> Option<Self> {
        match n {
            4 => Some(ConnectivityType::FourWay),
            8 => Some(ConnectivityType::EightWay),
            _ => None,
        }
    }

    /// Get the neighbor count (4 or 8).
    pub fn neighbors(self) -> u32 {
        self.offsets().len() as u32
    }
}

/// Neighbor of `(col, row)` at offset `(dc, dr)`, if it lies inside
/// a `width` x `height` grid.
#[inline]
pub fn neighbor(
    col: u32,
    row: u32,
    (dc, dr): (i32, i32),
    width: u32,
    height: u32,
) -> Option<(u32, u32)> {
    let c = col.checked_add_signed(dc)?;
    let r = row.checked_add_signed(dr)?;
    (c < width && r < height).then_some((c, r))
}
