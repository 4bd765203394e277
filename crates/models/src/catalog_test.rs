use crate::catalog::{catalog, ModelCatalog};
use crate::config::GridType;
use crate::error::CatalogError;
use crate::model::Model;
use crate::presets::Cube;

#[test]
fn every_builtin_name_creates() {
    let catalog = ModelCatalog::with_builtin();

    for name in catalog.names() {
        let model = catalog.create(name).unwrap();
        assert_eq!(model.name(), name);
    }
}

#[test]
fn builtin_names_are_complete() {
    let catalog = ModelCatalog::with_builtin();
    let names: Vec<_> = catalog.names().collect();

    assert_eq!(
        names,
        vec![
            "cube",
            "custom",
            "filament",
            "galaxy",
            "gg_cs_disk",
            "gg_tau_disk",
            "hd97048",
            "mhd_bastian",
            "mhd_binary",
            "multi_disk",
            "pp_disk",
            "test",
        ]
    );
}

#[test]
fn every_builtin_declares_a_known_grid() {
    let catalog = ModelCatalog::with_builtin();

    for name in catalog.names() {
        let model = catalog.create(name).unwrap();
        let grid = model.parameters().grid;
        assert!(
            matches!(
                grid,
                GridType::Spherical | GridType::Cylindrical | GridType::Octree
            ),
            "model '{name}' declares no known grid type"
        );
    }
}

#[test]
fn unknown_name_is_an_error() {
    let result = catalog().create("no_such_model");
    assert!(matches!(
        result,
        Err(CatalogError::UnknownModel(name)) if name == "no_such_model"
    ));
}

#[test]
fn create_with_applies_extra_parameters() {
    let extra = vec!["1".to_string(), "0.5".to_string()];
    let model = catalog().create_with("hd97048", &extra).unwrap();

    // Three composition rows only exist in the continuum variant
    assert_eq!(model.parameters().gas_mass.num_compositions(), 3);
}

#[test]
fn later_registration_shadows_earlier() {
    let mut catalog = ModelCatalog::with_builtin();
    let before = catalog.len();

    catalog.register("test", || Box::new(Cube::new()));

    assert_eq!(catalog.len(), before);
    let model = catalog.create("test").unwrap();
    assert_eq!(model.name(), "cube");
}

#[test]
fn process_wide_catalog_is_populated() {
    assert!(!catalog().is_empty());
    assert_eq!(catalog().len(), 12);
}
