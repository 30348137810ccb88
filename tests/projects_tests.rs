// Host-side tests for project lookup and routing.

use folio_core::{lookup, static_paths, ProjectLookup, Route};

#[test]
fn project_one_resolves() {
    let ProjectLookup::Found(p) = lookup("project-one") else {
        panic!("project-one missing");
    };
    assert_eq!(p.title, "E-Commerce Platform");
    assert_eq!(p.features.len(), 5);
    assert_eq!(p.href(), "/projects/project-one");
}

#[test]
fn unknown_slug_is_not_found() {
    assert_eq!(
        lookup("does-not-exist"),
        ProjectLookup::NotFound {
            slug: "does-not-exist".to_string()
        }
    );
}

#[test]
fn every_static_path_routes_to_a_known_project() {
    for path in static_paths().into_iter().skip(1) {
        match Route::parse(&path) {
            Route::Project { slug } => assert!(lookup(&slug).found().is_some(), "{}", slug),
            other => panic!("{} parsed as {:?}", path, other),
        }
    }
}

#[test]
fn every_project_has_full_detail() {
    for slug in ["project-one", "project-two", "project-three", "project-four", "project-five", "project-six"] {
        let p = lookup(slug).found().expect("known slug");
        assert_eq!(p.features.len(), 5);
        assert_eq!(p.gallery.len(), 3);
        assert!(!p.links.is_empty());
    }
}
