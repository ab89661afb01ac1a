//! Raw access to the department hierarchy definition
//!
//! A resource identifier is first tried as a filesystem path. When no such
//! file exists, the identifier is looked up among the resources compiled into
//! the binary.

use std::path::{Path, PathBuf};

use crate::error::HierarchyError;

/// Resources bundled into the binary, keyed by logical name
const BUNDLED_RESOURCES: &[(&str, &str)] = &[(
    "departments.json",
    include_str!("../../resources/departments.json"),
)];

/// Where a hierarchy definition was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// A file on disk
    External(PathBuf),
    /// A resource compiled into the binary
    Bundled(&'static str),
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLocation::External(path) => write!(f, "{}", path.display()),
            SourceLocation::Bundled(name) => write!(f, "bundled:{}", name),
        }
    }
}

/// A department hierarchy resource identified by path or logical name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchySource {
    identifier: String,
}

impl HierarchySource {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// The identifier as configured
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Find the resource, preferring an existing file over a bundled one.
    pub fn locate(&self) -> Option<SourceLocation> {
        let path = Path::new(&self.identifier);
        if path.is_file() {
            return Some(SourceLocation::External(path.to_path_buf()));
        }

        BUNDLED_RESOURCES
            .iter()
            .find(|(name, _)| *name == self.identifier)
            .map(|(name, _)| SourceLocation::Bundled(name))
    }

    /// Read the full text of the resource.
    pub fn read(&self) -> Result<String, HierarchyError> {
        match self.locate() {
            Some(SourceLocation::External(path)) => {
                log::info!("Reading external file: {}", path.display());
                std::fs::read_to_string(&path).map_err(|e| HierarchyError::Read {
                    resource: self.identifier.clone(),
                    cause: e.to_string(),
                })
            }
            Some(SourceLocation::Bundled(name)) => {
                log::info!("Reading bundled resource: {}", name);
                bundled(name)
                    .map(str::to_string)
                    .ok_or_else(|| HierarchyError::NotFound {
                        resource: self.identifier.clone(),
                    })
            }
            None => Err(HierarchyError::NotFound {
                resource: self.identifier.clone(),
            }),
        }
    }
}

/// Look up a bundled resource by logical name.
pub fn bundled(name: &str) -> Option<&'static str> {
    BUNDLED_RESOURCES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, contents)| *contents)
}
