//! Border component clearing
//!
//! Removes every foreground region that touches the image border. A
//! foreground pixel is cleared if a path of adjacent foreground pixels
//! connects it to any pixel in the first or last row or column; regions
//! that never reach the border are left untouched.
//!
//! # Algorithm
//!
//! The four edges are scanned (top row, right column, bottom row, left
//! column). Every border pixel that is still 1 when it is reached seeds
//! a flood fill with its own queue. A second bit grid records which pixels
//! have been enqueued, so each pixel enters a queue at most once over the
//! whole run: the work is bounded by `width * height` enqueues. Pixels are
//! cleared when they leave the queue, and neighbors are tested against the
//! live image, so seeds found later skip regions earlier seeds already
//! removed.
//!
//! The visiting order (breadth- or depth-first) does not change which
//! pixels are cleared.

use crate::conncomp::{ConnectivityType, neighbor};
use crate::error::RegionResult;
use pixgrid_core::BitGrid2D;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Order in which a seed's queue is drained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// First in, first out
    #[default]
    BreadthFirst,
    /// Last in, first out
    DepthFirst,
}

/// Options for border component clearing
#[derive(Debug, Clone, Default)]
pub struct BorderClearOptions {
    /// Which neighbors connect foreground pixels
    pub connectivity: ConnectivityType,
    /// How each seed's queue is drained
    pub order: TraversalOrder,
}

impl BorderClearOptions {
    /// Create new options with the specified connectivity
    pub fn new(connectivity: ConnectivityType) -> Self {
        Self {
            connectivity,
            order: TraversalOrder::default(),
        }
    }

    /// Set the traversal order
    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }
}

/// Work done by one clearing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearStats {
    /// Number of seed traversals started from border pixels
    pub seeds: u32,
    /// Number of pixels cleared
    pub cleared: u64,
}

/// Clear every foreground component that touches the border, in place.
///
/// # Arguments
///
/// * `image` - Binary image, modified in place
/// * `options` - Connectivity and traversal order
///
/// # Returns
///
/// How many seeds were started and how many pixels were cleared. An image
/// whose border is all 0 returns `ClearStats::default()` untouched.
///
/// # Examples
///
/// ```
/// use pixgrid_core::BitGrid2D;
/// use pixgrid_region::{BorderClearOptions, clear_border_components};
///
/// let mut image = BitGrid2D::new(5, 5).unwrap();
/// image.put(0, 2, 1).unwrap();
/// image.put(1, 2, 1).unwrap();
/// image.put(3, 3, 1).unwrap();
///
/// let stats = clear_border_components(&mut image, &BorderClearOptions::default()).unwrap();
/// assert_eq!(stats.cleared, 2);
/// assert_eq!(image.get(1, 2), Ok(0));
/// assert_eq!(image.get(3, 3), Ok(1));
/// ```
pub fn clear_border_components(
    image: &mut BitGrid2D,
    options: &BorderClearOptions,
) -> RegionResult<ClearStats> {
    let width = image.width();
    let height = image.height();

    let mut visited = image.create_template();
    let mut stats = ClearStats::default();

    let top = (0..width).map(|col| (col, 0));
    let right = (0..height).map(|row| (width - 1, row));
    let bottom = (0..width).map(|col| (col, height - 1));
    let left = (0..height).map(|row| (0, row));

    for (col, row) in top.chain(right).chain(bottom).chain(left) {
        // A finished seed leaves nothing enqueued-but-set, so a set
        // border pixel here has never been visited
        if image.get(col, row)? == 1 {
            let cleared = clear_component(image, &mut visited, col, row, options)?;
            trace!(col, row, cleared, "seed traversal finished");
            stats.seeds += 1;
            stats.cleared += cleared;
        }
    }

    debug!(
        width,
        height,
        seeds = stats.seeds,
        cleared = stats.cleared,
        "cleared border components"
    );
    Ok(stats)
}

/// Clear border components on a copy of `image`.
///
/// The input is left unchanged.
pub fn clear_border(image: &BitGrid2D, options: &BorderClearOptions) -> RegionResult<BitGrid2D> {
    let mut result = image.clone();
    clear_border_components(&mut result, options)?;
    Ok(result)
}

/// Flood fill from one seed, clearing pixels as they leave the queue.
///
/// Returns the number of pixels cleared.
fn clear_component(
    image: &mut BitGrid2D,
    visited: &mut BitGrid2D,
    seed_col: u32,
    seed_row: u32,
    options: &BorderClearOptions,
) -> RegionResult<u64> {
    let width = image.width();
    let height = image.height();

    let mut queue = VecDeque::new();
    visited.put(seed_col, seed_row, 1)?;
    queue.push_back((seed_col, seed_row));

    let mut cleared = 0u64;
    loop {
        let next = match options.order {
            TraversalOrder::BreadthFirst => queue.pop_front(),
            TraversalOrder::DepthFirst => queue.pop_back(),
        };
        let Some((col, row)) = next else {
            break;
        };

        image.put(col, row, 0)?;
        cleared += 1;

        for &offset in options.connectivity.offsets() {
            if let Some((c, r)) = neighbor(col, row, offset, width, height) {
                if image.get(c, r)? == 1 && visited.get(c, r)? == 0 {
                    visited.put(c, r, 1)?;
                    queue.push_back((c, r));
                }
            }
        }
    }

    Ok(cleared)
}
