//! Process-wide module registry.
//!
//! Modules publish their typed clients under their own module name during
//! `init`. Consumers locate a module by name and then ask its provider for a
//! client by *interface type* (trait object), without knowing the implementation:
//!
//! ```ignore
//! let dao = registry.find("storage")?.get::<dyn MetadataQueryDao>()?;
//! ```
//!
//! Implementation details:
//! - Module key = module name. Service key = `type_name::<T>()`, which works for `T = dyn Trait`.
//! - Value = `Arc<T>` stored as `Box<dyn Any + Send + Sync>` (downcast on read).
//! - Lookups are sync, side-effect free and safe to call concurrently.
//!
//! Notes:
//! - Re-registering overwrites the previous client; `Arc`s already handed out remain valid.
//! - A provider entry is created on the first registration for its module and is never removed.

use parking_lot::RwLock;
use std::{any::Any, collections::HashMap, fmt, sync::Arc};

/// Stable type key for trait objects, uses fully-qualified `type_name::<T>()`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct TypeKey(&'static str);

impl TypeKey {
    #[inline]
    fn of<T: ?Sized + 'static>() -> Self {
        TypeKey(std::any::type_name::<T>())
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("module not registered: {module}")]
    ModuleNotFound { module: String },

    #[error("module '{module}' provides no service of type {type_key:?}")]
    ServiceNotFound { module: String, type_key: TypeKey },

    #[error("type mismatch in module '{module}' for type {type_key:?}")]
    TypeMismatch { module: String, type_key: TypeKey },
}

type Boxed = Box<dyn Any + Send + Sync>;

/// Services published by a single module, keyed by interface type.
pub struct ModuleProvider {
    name: Arc<str>,
    services: RwLock<HashMap<TypeKey, Boxed>>,
}

impl ModuleProvider {
    fn new(name: Arc<str>) -> Self {
        Self {
            name,
            services: RwLock::new(HashMap::new()),
        }
    }

    /// Name of the module this provider belongs to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fetch a service by interface type `T`.
    ///
    /// # Errors
    /// `ServiceNotFound` if the module never published `T`.
    pub fn get<T>(&self) -> Result<Arc<T>, RegistryError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let type_key = TypeKey::of::<T>();
        let r = self.services.read();

        let boxed = r
            .get(&type_key)
            .ok_or_else(|| RegistryError::ServiceNotFound {
                module: self.name.to_string(),
                type_key: type_key.clone(),
            })?;

        // Stored value is exactly `Arc<T>`; downcast is safe and cheap.
        if let Some(arc_t) = boxed.downcast_ref::<Arc<T>>() {
            return Ok(arc_t.clone());
        }
        Err(RegistryError::TypeMismatch {
            module: self.name.to_string(),
            type_key,
        })
    }

    /// Number of services published by this module.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.read().is_empty()
    }

    fn insert<T>(&self, client: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.services
            .write()
            .insert(TypeKey::of::<T>(), Box::new(client));
    }
}

impl fmt::Debug for ModuleProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let services: Vec<TypeKey> = self.services.read().keys().cloned().collect();
        f.debug_struct("ModuleProvider")
            .field("name", &self.name)
            .field("services", &services)
            .finish()
    }
}

/// Directory of module providers keyed by module name.
pub struct ModuleRegistry {
    modules: RwLock<HashMap<Arc<str>, Arc<ModuleProvider>>>,
}

impl ModuleRegistry {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            modules: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleRegistry {
    /// Publish `client` under `module` as interface type `T`.
    /// `T` can be a trait object like `dyn topology_sdk::MetadataQueryDao`.
    pub fn register<T>(&self, module: &str, client: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let provider = {
            let mut w = self.modules.write();
            w.entry(Arc::<str>::from(module))
                .or_insert_with_key(|name| Arc::new(ModuleProvider::new(name.clone())))
                .clone()
        };
        provider.insert::<T>(client);
    }

    /// Locate the provider of a module by name.
    ///
    /// # Errors
    /// `ModuleNotFound` if nothing was ever registered under `module`.
    pub fn find(&self, module: &str) -> Result<Arc<ModuleProvider>, RegistryError> {
        self.modules
            .read()
            .get(module)
            .cloned()
            .ok_or_else(|| RegistryError::ModuleNotFound {
                module: module.to_owned(),
            })
    }

    /// Shortcut for `find(module)?.get::<T>()`.
    ///
    /// # Errors
    /// See [`ModuleRegistry::find`] and [`ModuleProvider::get`].
    pub fn get<T>(&self, module: &str) -> Result<Arc<T>, RegistryError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.find(module)?.get::<T>()
    }

    /// Number of registered modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.read().is_empty()
    }
}
