//! Serialized exports of the semantic graph.
//!
//! Three primary artifacts per run: a node table, an edge table, and a
//! redrawable DOT description. The DOT file can optionally be handed to an
//! external Graphviz engine for an image; that step is best-effort and never
//! fails the run.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{info, warn};

use gategraph_core::semantic::NodeKind;

use crate::config::RenderConfig;
use crate::structure::SemanticGraph;

/// Paths of the three primary exports of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub nodes_csv: PathBuf,
    pub edges_csv: PathBuf,
    pub dot: PathBuf,
}

/// Writes the node and edge tables and the DOT description under `out_dir`.
///
/// File names follow the `{prefix}_nodes.csv` / `{prefix}_edges.csv` /
/// `{prefix}_sem_graph.dot` convention. The output directory is created if
/// missing.
pub fn write_exports(
    graph: &SemanticGraph,
    out_dir: &Path,
    prefix: &str,
) -> io::Result<ExportPaths> {
    fs::create_dir_all(out_dir)?;

    let paths = ExportPaths {
        nodes_csv: out_dir.join(format!("{prefix}_nodes.csv")),
        edges_csv: out_dir.join(format!("{prefix}_edges.csv")),
        dot: out_dir.join(format!("{prefix}_sem_graph.dot")),
    };

    fs::write(&paths.nodes_csv, nodes_table(graph))?;
    fs::write(&paths.edges_csv, edges_table(graph))?;
    fs::write(&paths.dot, dot_description(graph))?;

    Ok(paths)
}

/// Node table: header `name,kind,cell,inst`, rows sorted by (kind, name).
fn nodes_table(graph: &SemanticGraph) -> String {
    let mut nodes: Vec<_> = graph.nodes().collect();
    nodes.sort_by_key(|meta| (meta.kind.as_str(), meta.name.as_str()));

    let mut out = String::from("name,kind,cell,inst\n");
    for meta in nodes {
        let _ = writeln!(out, "{},{},{},{}", meta.name, meta.kind, meta.cell, meta.inst);
    }
    out
}

/// Edge table: header `source,target`, rows in resolver-output order.
fn edges_table(graph: &SemanticGraph) -> String {
    let mut out = String::from("source,target\n");
    for (source, target) in graph.edges() {
        let _ = writeln!(out, "{source},{target}");
    }
    out
}

/// DOT description: variables as ellipses, gates as boxes, edges in order.
fn dot_description(graph: &SemanticGraph) -> String {
    let mut out = String::from("digraph G {\nrankdir=LR;\n");
    for meta in graph.nodes() {
        let shape = match meta.kind {
            NodeKind::Variable => "ellipse",
            NodeKind::Gate => "box",
        };
        let _ = writeln!(out, "\"{}\" [shape={shape}];", meta.name);
    }
    for (source, target) in graph.edges() {
        let _ = writeln!(out, "\"{source}\" -> \"{target}\";");
    }
    out.push_str("}\n");
    out
}

/// Renders the DOT description to `{prefix}_sem_graph.{format}` with the
/// configured engine.
///
/// Best-effort by design: a missing engine degrades to a warning and `None`,
/// and an engine that runs but fails is logged without failing the run.
pub fn render_image(
    dot_path: &Path,
    out_dir: &Path,
    prefix: &str,
    render: &RenderConfig,
) -> Option<PathBuf> {
    let image = out_dir.join(format!("{prefix}_sem_graph.{}", render.format()));

    let status = Command::new(render.engine())
        .arg(format!("-T{}", render.format()))
        .arg(dot_path)
        .arg("-o")
        .arg(&image)
        .status();

    match status {
        Ok(status) if status.success() => {
            let image_path = image.display().to_string();
            info!(image_path; "Rendered semantic graph");
            Some(image)
        }
        Ok(status) => {
            let engine = render.engine();
            warn!(engine, status:?; "Renderer exited with failure; image skipped");
            None
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let engine = render.engine();
            warn!(engine; "Renderer not found; image export skipped");
            None
        }
        Err(err) => {
            let engine = render.engine();
            warn!(engine, err:?; "Renderer could not be invoked; image skipped");
            None
        }
    }
}
