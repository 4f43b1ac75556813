use catalog_core::layout::CatalogLayout;
use catalog_core::model::{Language, Partition};
use catalog_core::version;

#[test]
fn version_is_non_empty() {
    let v = version();
    assert!(!v.is_empty());
}

#[test]
fn layout_places_partitions_and_languages() {
    let layout = CatalogLayout::new("/repo");

    assert_eq!(
        layout.function_path(Partition::Curated, Language::Go, "foo"),
        std::path::Path::new("/repo/functions/go/foo")
    );
    assert_eq!(
        layout.function_path(Partition::Contrib, Language::Ts, "foo"),
        std::path::Path::new("/repo/contrib/functions/ts/foo")
    );
    assert_eq!(
        layout.example_path(Partition::Curated, "foo-basic"),
        std::path::Path::new("/repo/examples/foo-basic")
    );
    assert_eq!(
        layout.example_path(Partition::Contrib, "foo-basic"),
        std::path::Path::new("/repo/contrib/examples/foo-basic")
    );
}

#[test]
fn relative_paths_use_forward_slashes() {
    let layout = CatalogLayout::new("/repo");

    assert_eq!(layout.function_rel(Partition::Curated, Language::Go, "foo"), "functions/go/foo");
    assert_eq!(
        layout.function_rel(Partition::Contrib, Language::Ts, "foo"),
        "contrib/functions/ts/foo"
    );
    assert_eq!(layout.example_rel(Partition::Curated, "foo-basic"), "examples/foo-basic");
    assert_eq!(
        layout.example_rel(Partition::Contrib, "foo-basic"),
        "contrib/examples/foo-basic"
    );
}

#[test]
fn registry_prefixes_differ_by_partition() {
    assert_eq!(Partition::Curated.registry_prefix(), "gcr.io/kpt-fn/");
    assert_eq!(Partition::Contrib.registry_prefix(), "gcr.io/kpt-fn-contrib/");
}
