//! # mediancut
//!
//! `mediancut` is a Rust library for the median-cut algorithm, designed to be used in Rust
//! as well as compiled to WebAssembly (WASM). It partitions a set of n-dimensional points into
//! a requested number of clusters and reduces each cluster to one representative point, which
//! is the core of color quantization and similar "many samples to K representatives" problems.
//!
//! ## Features
//!
//! - **Generic points**: Works on any type implementing [`DataPoint`]; [`Point`] covers fixed
//!   dimensionalities over `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `f32` and `f64`.
//! - **In-place partitioning**: Clusters are disjoint windows of the caller's buffer, no point data is copied.
//! - **Deterministic**: Identical input and level count always produce identical clusters.
//! - **WASM-first**: RGB palette and scalar quantization are exported with `wasm-bindgen`.
//!
//! ## Main Interface
//!
//! The primary entry point is the [`MedianCut`] struct, with [`median_cut`] as a shortcut for the
//! default configuration and [`median_cut_values`] for plain lists of floats.

mod cluster;
mod error;
mod factory;
mod median_cut;
mod point;
mod scalar;
mod scalar_cut;
pub mod wasm;

pub use cluster::Cluster;
pub use cluster::ClusterSummary;
pub use error::Error;
pub use error::Result;
pub use factory::DefaultFactory;
pub use factory::PointFactory;
pub use median_cut::median_cut;
pub use median_cut::MedianCut;
pub use median_cut::SplitPolicy;
pub use point::DataPoint;
pub use point::Point;
pub use point::Point1F;
pub use point::Point3I8;
pub use point::PointRgb;
pub use scalar::Scalar;
pub use scalar_cut::median_cut_values;
