//! Department hierarchy: federal ministries and their subordinate agencies
//!
//! The hierarchy is read once at startup. A failed load is kept as a value
//! inside [`DepartmentResolver`]; lookups then behave as if no departments
//! were known, and [`DepartmentResolver::check`] hands the failure to callers.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::HierarchyError;

pub mod source;

pub use source::HierarchySource;

/// A top-level department (federal ministry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Department name, unique within the hierarchy
    pub name: String,

    /// Subordinate organizations; missing or `null` decodes as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subordinates: Vec<Subordinate>,
}

/// An organization belonging to exactly one department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subordinate {
    pub name: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a hierarchy document.
///
/// The top-level value must be an object whose `departments` key holds an
/// array of departments.
pub fn parse_departments(resource: &str, text: &str) -> Result<Vec<Department>, HierarchyError> {
    let mut tree: serde_json::Value =
        serde_json::from_str(text).map_err(|e| HierarchyError::Parse {
            resource: resource.to_string(),
            cause: e.to_string(),
        })?;

    let departments = match tree.get_mut("departments") {
        Some(node) if node.is_array() => node.take(),
        _ => {
            return Err(HierarchyError::InvalidFormat {
                resource: resource.to_string(),
            });
        }
    };

    serde_json::from_value(departments).map_err(|e| HierarchyError::Parse {
        resource: resource.to_string(),
        cause: e.to_string(),
    })
}

/// Immutable lookup tables derived from a list of departments
#[derive(Debug, Clone, Default)]
pub struct HierarchyIndex {
    department_names: Vec<String>,
    subordinate_to_department: HashMap<String, String>,
}

impl HierarchyIndex {
    /// Build the index. A subordinate listed under several departments maps to
    /// the last one.
    pub fn build(departments: &[Department]) -> Self {
        let department_names = departments.iter().map(|d| d.name.clone()).collect();

        let mut subordinate_to_department = HashMap::new();
        for department in departments {
            for subordinate in &department.subordinates {
                subordinate_to_department.insert(subordinate.name.clone(), department.name.clone());
            }
        }

        Self {
            department_names,
            subordinate_to_department,
        }
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.department_names.iter().any(|d| d == name)
            || self.subordinate_to_department.contains_key(name)
    }

    /// Owning department of a subordinate, or `name` itself otherwise.
    pub fn resolve_department<'a>(&'a self, name: &'a str) -> &'a str {
        self.subordinate_to_department
            .get(name)
            .map(String::as_str)
            .unwrap_or(name)
    }

    pub fn department_names(&self) -> &[String] {
        &self.department_names
    }

    pub fn subordinate_count(&self) -> usize {
        self.subordinate_to_department.len()
    }
}

/// Resolves organization names to their owning department.
///
/// Read-only after construction, so one instance can be shared across
/// concurrent dashboard computations.
#[derive(Debug, Clone)]
pub struct DepartmentResolver {
    resource: String,
    loaded: Result<Vec<Department>, HierarchyError>,
    index: HierarchyIndex,
}

impl DepartmentResolver {
    /// Load the hierarchy from `source`.
    ///
    /// Never fails: a load error is recorded and reported by [`Self::failure`].
    pub fn initialize(source: &HierarchySource) -> Self {
        let loaded = source
            .read()
            .and_then(|text| parse_departments(source.identifier(), &text));

        match &loaded {
            Ok(departments) => log::info!("Loaded {} departments", departments.len()),
            // Reported once by `check` callers and by `status`.
            Err(e) => log::debug!("Hierarchy load failed: {}", e),
        }

        Self::from_result(source.identifier(), loaded)
    }

    /// Build a resolver from already decoded departments.
    #[cfg(test)]
    pub fn from_departments(resource: impl Into<String>, departments: Vec<Department>) -> Self {
        Self::from_result(resource, Ok(departments))
    }

    /// Build a resolver that records a load failure.
    #[cfg(test)]
    pub fn failed(resource: impl Into<String>, error: HierarchyError) -> Self {
        Self::from_result(resource, Err(error))
    }

    fn from_result(
        resource: impl Into<String>,
        loaded: Result<Vec<Department>, HierarchyError>,
    ) -> Self {
        let index = match &loaded {
            Ok(departments) => HierarchyIndex::build(departments),
            Err(_) => HierarchyIndex::default(),
        };

        Self {
            resource: resource.into(),
            loaded,
            index,
        }
    }

    /// Identifier of the resource the hierarchy was loaded from
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// True for every department name and every subordinate name.
    pub fn is_known(&self, name: &str) -> bool {
        self.index.is_known(name)
    }

    /// Map a subordinate to its department; any other name maps to itself.
    pub fn resolve_department<'a>(&'a self, name: &'a str) -> &'a str {
        self.index.resolve_department(name)
    }

    /// All department names in source order
    pub fn department_names(&self) -> &[String] {
        self.index.department_names()
    }

    /// Decoded departments, empty when loading failed
    pub fn departments(&self) -> &[Department] {
        self.loaded.as_deref().unwrap_or(&[])
    }

    pub fn subordinate_count(&self) -> usize {
        self.index.subordinate_count()
    }

    /// The recorded load failure, if any
    pub fn failure(&self) -> Option<&HierarchyError> {
        self.loaded.as_ref().err()
    }

    /// Return the load failure as an error so callers can stop early with `?`.
    pub fn check(&self) -> Result<(), HierarchyError> {
        match &self.loaded {
            Ok(_) => Ok(()),
            Err(e) => Err(e.clone()),
        }
    }
}
