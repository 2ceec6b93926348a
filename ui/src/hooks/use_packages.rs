use std::rc::Rc;

use payloads::catalog::PackageFilter;
use payloads::{Package, PackageId};
use yew::prelude::*;

use super::{FetchHookReturn, FetchState, Refetch, use_fetch};
use crate::get_api_client;

/// The catalog plus the filter state of the catalog page.
#[derive(Clone, PartialEq)]
pub struct PackagesHandle {
    /// The whole catalog, unfiltered.
    pub catalog: FetchState<Vec<Package>>,
    /// The catalog after `filter`.
    pub packages: Rc<Vec<Package>>,
    pub filter: PackageFilter,
    pub set_filter: Callback<PackageFilter>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Refetch,
}

impl PackagesHandle {
    pub fn find(&self, package_id: PackageId) -> Option<&Package> {
        self.catalog.as_ref()?.iter().find(|p| p.id == package_id)
    }
}

/// Fetch the catalog once; filtering and sorting happen locally and are
/// recomputed only when the catalog or the filter changes.
#[hook]
pub fn use_packages() -> PackagesHandle {
    let catalog = use_fetch((), || async {
        get_api_client()
            .get_packages()
            .await
            .map_err(|e| e.to_string())
    });
    let filter = use_state(PackageFilter::default);

    let packages = use_memo(
        (catalog.data.clone(), (*filter).clone()),
        |(catalog, filter)| match catalog.as_ref() {
            Some(catalog) => filter.apply(catalog),
            None => Vec::new(),
        },
    );

    let set_filter = {
        let filter = filter.clone();
        Callback::from(move |next: PackageFilter| filter.set(next))
    };

    PackagesHandle {
        catalog: catalog.data,
        packages,
        filter: (*filter).clone(),
        set_filter,
        is_loading: catalog.is_loading,
        error: catalog.error,
        refetch: catalog.refetch,
    }
}

#[hook]
pub fn use_package(package_id: PackageId) -> FetchHookReturn<Package> {
    use_fetch(package_id, move || async move {
        get_api_client()
            .get_package(package_id)
            .await
            .map_err(|e| e.to_string())
    })
}
