//! Name → factory registry of the model presets.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::CatalogError;
use crate::model::Model;
use crate::presets::{
    Cube, CustomModel, Filament, Galaxy, GGTauCircumstellarDisk, GGTauDisk, Hd97048, MhdBastian,
    MhdFlock, MultiDisk, ProtoplanetaryDisk, TestGrid,
};

/// Constructor for a boxed model preset.
pub type ModelFactory = fn() -> Box<dyn Model>;

/// Registry mapping preset names to constructors.
///
/// The process-wide table is built once at startup (see [`catalog`]) and
/// never mutated afterwards; creation only reads it. User-defined presets can
/// be added to an owned registry via [`register`](ModelCatalog::register)
/// before it is handed out.
pub struct ModelCatalog {
    entries: BTreeMap<&'static str, ModelFactory>,
}

impl ModelCatalog {
    /// An empty registry.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// A registry holding every built-in preset.
    pub fn with_builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.register("cube", || Box::new(Cube::new()));
        catalog.register("filament", || Box::new(Filament::new()));
        catalog.register("galaxy", || Box::new(Galaxy::new()));
        catalog.register("mhd_bastian", || Box::new(MhdBastian::new()));
        catalog.register("mhd_binary", || Box::new(MhdFlock::new()));
        catalog.register("gg_tau_disk", || Box::new(GGTauDisk::new()));
        catalog.register("gg_cs_disk", || Box::new(GGTauCircumstellarDisk::new()));
        catalog.register("hd97048", || Box::new(Hd97048::new()));
        catalog.register("pp_disk", || Box::new(ProtoplanetaryDisk::new()));
        catalog.register("test", || Box::new(TestGrid::new()));
        catalog.register("multi_disk", || Box::new(MultiDisk::new()));
        catalog.register("custom", || Box::new(CustomModel::new()));
        catalog
    }

    /// Registers a preset. A later registration under the same name replaces
    /// the earlier one, so user catalogs can shadow built-ins.
    pub fn register(&mut self, name: &'static str, factory: ModelFactory) {
        self.entries.insert(name, factory);
    }

    /// Instantiates a preset by name.
    pub fn create(&self, name: &str) -> Result<Box<dyn Model>, CatalogError> {
        let factory = self
            .entries
            .get(name)
            .ok_or_else(|| CatalogError::UnknownModel(name.to_string()))?;
        log::debug!("instantiating model '{name}'");
        Ok(factory())
    }

    /// Instantiates a preset and applies its extra parameters.
    pub fn create_with(
        &self,
        name: &str,
        extra: &[String],
    ) -> Result<Box<dyn Model>, CatalogError> {
        let mut model = self.create(name)?;
        model.use_extra_parameter(extra)?;
        Ok(model)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of registered presets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::with_builtin()
    }
}

/// The process-wide catalog of built-in presets, built on first use.
pub fn catalog() -> &'static ModelCatalog {
    static CATALOG: OnceLock<ModelCatalog> = OnceLock::new();
    CATALOG.get_or_init(ModelCatalog::with_builtin)
}
