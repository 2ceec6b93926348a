//! Client-side filtering and sorting of the package catalog.
//!
//! Category and search filters compose as a logical AND, and sorting is
//! applied last. The transformation is pure: the same catalog and filter
//! always produce the same list.

use std::cmp::Ordering;

use crate::{Package, PackageCategory};

/// Category selector. `All` disables category filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(PackageCategory),
}

impl CategoryFilter {
    /// Every selectable option, in display order.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(Self::All)
            .chain(PackageCategory::ALL.into_iter().map(Self::Only))
            .collect()
    }

    pub fn value(&self) -> String {
        match self {
            Self::All => "all".into(),
            Self::Only(category) => category.to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All packages",
            Self::Only(category) => category.label(),
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(Self::All);
        }
        PackageCategory::from_value(value).map(Self::Only)
    }

    pub fn matches(&self, package: &Package) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => package.category == *category,
        }
    }
}

/// Sort key for the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    PriceAsc,
    PriceDesc,
    QuotaDesc,
    QuotaAsc,
    ValidityDesc,
    ValidityAsc,
}

impl SortBy {
    pub const ALL: [SortBy; 6] = [
        Self::PriceAsc,
        Self::PriceDesc,
        Self::QuotaDesc,
        Self::QuotaAsc,
        Self::ValidityDesc,
        Self::ValidityAsc,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::QuotaDesc => "quota-desc",
            Self::QuotaAsc => "quota-asc",
            Self::ValidityDesc => "validity-desc",
            Self::ValidityAsc => "validity-asc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PriceAsc => "Price: lowest first",
            Self::PriceDesc => "Price: highest first",
            Self::QuotaDesc => "Data: most first",
            Self::QuotaAsc => "Data: least first",
            Self::ValidityDesc => "Validity: longest first",
            Self::ValidityAsc => "Validity: shortest first",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }

    /// Compare two packages under this key. Unlimited quota counts as 0.
    /// Ties fall back to the package id so the order is total.
    pub fn compare(&self, a: &Package, b: &Package) -> Ordering {
        let quota = |p: &Package| p.data_quota.unwrap_or(0);
        let primary = match self {
            Self::PriceAsc => a.price.cmp(&b.price),
            Self::PriceDesc => b.price.cmp(&a.price),
            Self::QuotaDesc => quota(b).cmp(&quota(a)),
            Self::QuotaAsc => quota(a).cmp(&quota(b)),
            Self::ValidityDesc => b.validity_days.cmp(&a.validity_days),
            Self::ValidityAsc => a.validity_days.cmp(&b.validity_days),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// The complete filter state of the catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageFilter {
    pub category: CategoryFilter,
    pub search: String,
    pub sort_by: SortBy,
}

impl PackageFilter {
    /// Case-insensitive substring match on name or description. A blank
    /// query matches everything; otherwise the query is used as typed,
    /// surrounding whitespace included.
    pub fn matches_search(&self, package: &Package) -> bool {
        if self.search.trim().is_empty() {
            return true;
        }
        let query = self.search.to_lowercase();
        package.name.to_lowercase().contains(&query)
            || package.description.to_lowercase().contains(&query)
    }

    pub fn matches(&self, package: &Package) -> bool {
        self.category.matches(package) && self.matches_search(package)
    }

    /// Filter then sort a catalog.
    pub fn apply(&self, catalog: &[Package]) -> Vec<Package> {
        let mut result: Vec<Package> =
            catalog.iter().filter(|p| self.matches(p)).cloned().collect();
        result.sort_by(|a, b| self.sort_by.compare(a, b));
        result
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PackageId;

    fn package(
        id: u64,
        name: &str,
        category: PackageCategory,
        price: u64,
        data_quota: Option<u32>,
        validity_days: u32,
    ) -> Package {
        Package {
            id: PackageId(id),
            name: name.into(),
            description: format!("{name} description"),
            category,
            price,
            data_quota,
            validity_days,
            features: vec![],
        }
    }

    fn ids(packages: &[Package]) -> Vec<u64> {
        packages.iter().map(|p| p.id.0).collect()
    }

    fn catalog() -> Vec<Package> {
        use PackageCategory::*;
        vec![
            package(1, "Starter Mini", Starter, 15_000, Some(2), 7),
            package(2, "Regular Plus", Regular, 50_000, Some(15), 30),
            package(3, "Unlimited Max", Unlimited, 150_000, None, 30),
            package(4, "Premium Night", Premium, 75_000, Some(25), 14),
            package(5, "Special Weekend", Special, 20_000, Some(5), 3),
        ]
    }

    #[test]
    fn price_ascending_over_all_categories() {
        use PackageCategory::*;
        let catalog = vec![
            package(1, "A", Starter, 50_000, Some(10), 30),
            package(2, "B", Premium, 20_000, Some(10), 30),
        ];
        let filter = PackageFilter {
            category: CategoryFilter::All,
            sort_by: SortBy::PriceAsc,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog)), vec![2, 1]);
    }

    #[test]
    fn every_sort_key() {
        let catalog = catalog();
        let sorted = |sort_by| {
            ids(&PackageFilter {
                sort_by,
                ..Default::default()
            }
            .apply(&catalog))
        };
        assert_eq!(sorted(SortBy::PriceAsc), vec![1, 5, 2, 4, 3]);
        assert_eq!(sorted(SortBy::PriceDesc), vec![3, 4, 2, 5, 1]);
        // unlimited counts as zero
        assert_eq!(sorted(SortBy::QuotaDesc), vec![4, 2, 5, 1, 3]);
        assert_eq!(sorted(SortBy::QuotaAsc), vec![3, 1, 5, 2, 4]);
        // 2 and 3 tie on 30 days and fall back to id
        assert_eq!(sorted(SortBy::ValidityDesc), vec![2, 3, 4, 1, 5]);
        assert_eq!(sorted(SortBy::ValidityAsc), vec![5, 1, 4, 2, 3]);
    }

    #[test]
    fn category_and_search_compose() {
        let catalog = catalog();
        let mut filter = PackageFilter {
            category: CategoryFilter::Only(PackageCategory::Premium),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog)), vec![4]);

        filter.search = "WEEKEND".into();
        assert!(filter.apply(&catalog).is_empty());

        filter.category = CategoryFilter::All;
        assert_eq!(ids(&filter.apply(&catalog)), vec![5]);
    }

    #[test]
    fn search_checks_description_too() {
        let mut catalog = catalog();
        catalog[1].description = "Great for streaming video".into();
        let filter = PackageFilter {
            search: "Streaming".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&catalog)), vec![2]);
    }

    #[test]
    fn query_whitespace_is_kept_unless_blank() {
        let catalog = catalog();
        let mut filter = PackageFilter {
            search: "   ".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&catalog).len(), catalog.len());

        // "starter mini description" has "mini " but nothing has "mini  "
        filter.search = "Mini ".into();
        assert_eq!(ids(&filter.apply(&catalog)), vec![1]);
        filter.search = "mini  ".into();
        assert!(filter.apply(&catalog).is_empty());
    }

    #[test]
    fn result_is_a_sorted_subset_and_stable_under_reapplication() {
        let catalog = catalog();
        for category in CategoryFilter::options() {
            for sort_by in SortBy::ALL {
                for search in ["", "plus", "a", "zzz"] {
                    let filter = PackageFilter {
                        category,
                        search: search.into(),
                        sort_by,
                    };
                    let once = filter.apply(&catalog);
                    assert_eq!(once, filter.apply(&catalog));
                    assert_eq!(once, filter.apply(&once));
                    for p in &once {
                        assert!(catalog.contains(p));
                        assert!(filter.matches(p));
                    }
                    let excluded = catalog
                        .iter()
                        .filter(|p| !once.contains(p))
                        .all(|p| !filter.matches(p));
                    assert!(excluded);
                    for pair in once.windows(2) {
                        assert_ne!(
                            sort_by.compare(&pair[0], &pair[1]),
                            Ordering::Greater
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn option_values_round_trip() {
        for option in CategoryFilter::options() {
            assert_eq!(CategoryFilter::from_value(&option.value()), Some(option));
        }
        for sort_by in SortBy::ALL {
            assert_eq!(SortBy::from_value(sort_by.value()), Some(sort_by));
        }
        assert_eq!(SortBy::from_value("name"), None);
        assert_eq!(CategoryFilter::options().len(), 6);
    }
}
