//! Static registry of travel package tiers.
//!
//! The tiers are master data compiled into the binary. The table is built
//! once on first access and never mutated afterwards, so it is shared across
//! request tasks without synchronization.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::foundation::{Money, PackageId};

/// A travel-duration tier with a flat base price and a list of perks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: PackageId,
    pub name: String,
    pub nights: u32,
    pub base_price: Money,
    pub included: Vec<String>,
}

struct PackageSpec {
    id: &'static str,
    name: &'static str,
    nights: u32,
    base_price: i64,
    included: &'static [&'static str],
}

const PACKAGE_SPECS: &[PackageSpec] = &[
    PackageSpec {
        id: "pkg_1night",
        name: "Wish 1-Night Package",
        nights: 1,
        base_price: 249_900,
        included: &[
            "Personalized trip planning",
            "Accommodation + breakfast",
            "1 leisure activity of your choice",
            "Dinner",
        ],
    },
    PackageSpec {
        id: "pkg_2night",
        name: "Wish 2-Night Package",
        nights: 2,
        base_price: 449_900,
        included: &[
            "Personalized trip planning",
            "Accommodation + breakfast for 2 days",
            "2 leisure activities of your choice",
            "1 lunch, 2 dinners",
        ],
    },
    PackageSpec {
        id: "pkg_3night",
        name: "Wish 3-Night Package",
        nights: 3,
        base_price: 649_900,
        included: &[
            "Personalized trip planning",
            "Accommodation + breakfast for 3 days",
            "3 leisure activities of your choice",
            "All meals included",
        ],
    },
];

static PACKAGES: Lazy<Vec<Package>> = Lazy::new(|| {
    PACKAGE_SPECS
        .iter()
        .filter_map(|spec| {
            Some(Package {
                id: PackageId::new(spec.id).ok()?,
                name: spec.name.to_string(),
                nights: spec.nights,
                base_price: Money::new(spec.base_price),
                included: spec.included.iter().map(|s| s.to_string()).collect(),
            })
        })
        .collect()
});

/// Read-only access to the package tiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageRegistry;

impl PackageRegistry {
    /// Finds a package by id.
    pub fn lookup(&self, id: &str) -> Option<&'static Package> {
        PACKAGES.iter().find(|p| p.id.as_str() == id)
    }

    /// All packages in definition order.
    pub fn list_all(&self) -> &'static [Package] {
        PACKAGES.as_slice()
    }
}
