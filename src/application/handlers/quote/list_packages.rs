//! ListPackagesHandler - Query handler for the package registry.

use crate::domain::package::{Package, PackageRegistry};

/// Handler returning every package tier in registry order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListPackagesHandler {
    registry: PackageRegistry,
}

impl ListPackagesHandler {
    pub fn new(registry: PackageRegistry) -> Self {
        Self { registry }
    }

    pub fn handle(&self) -> &'static [Package] {
        self.registry.list_all()
    }
}
