//! Configuration types for the gategraph pipeline.
//!
//! This module provides configuration structures controlling where input
//! identifiers resolve on disk, where exports land, and how the optional
//! image render is invoked. All types implement [`serde::Deserialize`] for
//! loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining path and render settings.
//! - [`PathConfig`] - Data/output directory conventions.
//! - [`RenderConfig`] - External renderer engine and image format.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level application configuration combining path and render settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Path-convention section.
    #[serde(default)]
    paths: PathConfig,

    /// Render section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified path and render
    /// configurations.
    pub fn new(paths: PathConfig, render: RenderConfig) -> Self {
        Self { paths, render }
    }

    /// Returns the path configuration.
    pub fn paths(&self) -> &PathConfig {
        &self.paths
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// On-disk conventions for resolving input identifiers and placing outputs.
///
/// A library identifier `ID` resolves to `<data_dir>/ID/ID.lib`, a graph
/// identifier to `<data_dir>/ID/ID.dot`. All exports are written under
/// `out_dir`.
#[derive(Debug, Clone, Deserialize)]
pub struct PathConfig {
    /// Root directory for input artifacts.
    #[serde(default = "PathConfig::default_data_dir")]
    data_dir: PathBuf,

    /// Directory receiving every export.
    #[serde(default = "PathConfig::default_out_dir")]
    out_dir: PathBuf,
}

impl PathConfig {
    /// Creates a new [`PathConfig`] with the specified directories.
    pub fn new(data_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            out_dir: out_dir.into(),
        }
    }

    fn default_data_dir() -> PathBuf {
        PathBuf::from("data")
    }

    fn default_out_dir() -> PathBuf {
        PathBuf::from("out")
    }

    /// Root directory for input artifacts.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory receiving every export.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Resolves a library identifier to its `.lib` file path.
    pub fn library_path(&self, id: &str) -> PathBuf {
        self.data_dir.join(id).join(format!("{id}.lib"))
    }

    /// Resolves a graph identifier to its `.dot` file path.
    pub fn netgraph_path(&self, id: &str) -> PathBuf {
        self.data_dir.join(id).join(format!("{id}.dot"))
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::new(Self::default_data_dir(), Self::default_out_dir())
    }
}

/// External renderer settings for the optional image export.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Renderer executable, looked up on `PATH`.
    #[serde(default = "RenderConfig::default_engine")]
    engine: String,

    /// Output image format, passed as `-T<format>`.
    #[serde(default = "RenderConfig::default_format")]
    format: String,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`] with the specified engine and format.
    pub fn new(engine: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            format: format.into(),
        }
    }

    fn default_engine() -> String {
        "dot".to_string()
    }

    fn default_format() -> String {
        "pdf".to_string()
    }

    /// Renderer executable name.
    pub fn engine(&self) -> &str {
        &self.engine
    }

    /// Output image format.
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(Self::default_engine(), Self::default_format())
    }
}
