//! pixgrid-region - Region processing for pixgrid
//!
//! This crate provides region processing on binary [`BitGrid2D`] images:
//!
//! - **Connectivity** - 4-way and 8-way neighbor definitions
//! - **Border component clearing** - Removing every foreground region
//!   connected to the image border
//!
//! # Examples
//!
//! ```
//! use pixgrid_core::BitGrid2D;
//! use pixgrid_region::{BorderClearOptions, ConnectivityType, clear_border};
//!
//! // A 5x5 image with one pixel on the border and one in the interior
//! let mut image = BitGrid2D::new(5, 5).unwrap();
//! image.put(0, 0, 1).unwrap();
//! image.put(2, 2, 1).unwrap();
//!
//! let options = BorderClearOptions::new(ConnectivityType::FourWay);
//! let cleared = clear_border(&image, &options).unwrap();
//! assert_eq!(cleared.get(0, 0), Ok(0));
//! assert_eq!(cleared.get(2, 2), Ok(1));
//! ```
//!
//! [`BitGrid2D`]: pixgrid_core::BitGrid2D

pub mod border;
pub mod conncomp;
pub mod error;

// Re-export core types
pub use pixgrid_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use conncomp::ConnectivityType;

pub use border::{
    BorderClearOptions, ClearStats, TraversalOrder, clear_border, clear_border_components,
};
