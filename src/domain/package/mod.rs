//! Package module - Fixed travel package tiers.

mod registry;

pub use registry::{Package, PackageRegistry};
