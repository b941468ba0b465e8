//! Manifest metadata
//!
//! Only the fields the packager looks at. Everything else in the manifest
//! passes through to the archives untouched, and nothing here is validated.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub manifest_version: Option<u8>,
}
