// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Routing Module
//!
//! Shape resolution, dispatch and result assembly for binary operations.

pub mod binary_map;
pub mod broadcast;
pub mod builder;
pub mod evaluate;

pub use binary_map::{PARALLEL_THRESHOLD, map_views};
pub use broadcast::broadcast_len;
pub use builder::ResultBuilder;
pub use evaluate::evaluate;
