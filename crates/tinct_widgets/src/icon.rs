//! Icon registry
//!
//! Process-wide icon-pack registration with explicit default selection and
//! synchronous lookup by name. Widgets store icon names; hosts register the
//! packs that supply the artwork. The first registered pack becomes the
//! default until `set_default_pack` says otherwise.

use std::sync::{Arc, OnceLock, RwLock};

use rustc_hash::FxHashMap;

/// Renderable icon artwork
#[derive(Clone, Debug, PartialEq)]
pub enum IconData {
    /// A glyph from an icon font
    Glyph(char),
    /// SVG path data
    SvgPath(String),
}

/// One icon resolved from a pack
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    pub pack: String,
    pub name: String,
    pub data: IconData,
}

/// A named collection of icons
#[derive(Clone, Debug, Default)]
pub struct IconPack {
    name: String,
    icons: FxHashMap<String, IconData>,
}

impl IconPack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icons: FxHashMap::default(),
        }
    }

    /// Add an icon (builder form)
    #[must_use]
    pub fn icon(mut self, name: impl Into<String>, data: IconData) -> Self {
        self.icons.insert(name.into(), data);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

struct IconRegistryInner {
    packs: RwLock<FxHashMap<String, IconPack>>,
    default_pack: RwLock<Option<String>>,
}

/// Process-wide icon pack registry
#[derive(Clone)]
pub struct IconRegistry {
    inner: Arc<IconRegistryInner>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IconRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(IconRegistryInner {
                packs: RwLock::new(FxHashMap::default()),
                default_pack: RwLock::new(None),
            }),
        }
    }

    /// The process-wide default registry
    pub fn global() -> IconRegistry {
        static GLOBAL: OnceLock<IconRegistry> = OnceLock::new();
        GLOBAL.get_or_init(IconRegistry::new).clone()
    }

    /// Register a pack. The first registered pack becomes the default.
    pub fn register_pack(&self, pack: IconPack) {
        let name = pack.name.clone();
        self.inner.packs.write().unwrap().insert(name.clone(), pack);
        let mut default = self.inner.default_pack.write().unwrap();
        if default.is_none() {
            *default = Some(name);
        }
    }

    /// Select the default pack. Returns false when no pack with that name is
    /// registered.
    pub fn set_default_pack(&self, name: &str) -> bool {
        if !self.inner.packs.read().unwrap().contains_key(name) {
            return false;
        }
        *self.inner.default_pack.write().unwrap() = Some(name.to_owned());
        true
    }

    pub fn default_pack(&self) -> Option<String> {
        self.inner.default_pack.read().unwrap().clone()
    }

    /// Look an icon up in the default pack
    pub fn icon(&self, name: &str) -> Option<Icon> {
        let default = self.inner.default_pack.read().unwrap().clone()?;
        self.icon_from(&default, name)
    }

    /// Look an icon up in a specific pack
    pub fn icon_from(&self, pack: &str, name: &str) -> Option<Icon> {
        let packs = self.inner.packs.read().unwrap();
        let data = packs.get(pack)?.icons.get(name)?.clone();
        Some(Icon {
            pack: pack.to_owned(),
            name: name.to_owned(),
            data,
        })
    }
}
