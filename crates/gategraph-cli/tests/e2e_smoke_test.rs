use std::fs;
use std::path::Path;

use tempfile::tempdir;

use gategraph_cli::{Args, run};

const LIBRARY_SRC: &str = r#"
library(cmos) {
  cell(NOR2) {
    pin(A) { direction: input; }
    pin(B) { direction: input; }
    pin(Y) { direction: output; }
  }
}
"#;

const GRAPH_SRC: &str = r#"
digraph "counter" {
rankdir="LR";
n1 [ shape=octagon, label="a" ];
n2 [ shape=octagon, label="b" ];
n3 [ shape=octagon, label="y" ];
c4 [ shape=record, label="{{<p0> A|<p1> B}|U1\nNOR2|{<p2> Y}}" ];
n1:e -> c4:p0:w;
n2:e -> c4:p1:w;
c4:p2:e -> n3:w;
}
"#;

/// Lays out <root>/data/<id>/<id>.<ext> the way the path conventions expect.
fn write_input(root: &Path, id: &str, ext: &str, content: &str) {
    let dir = root.join("data").join(id);
    fs::create_dir_all(&dir).expect("create input dir");
    fs::write(dir.join(format!("{id}.{ext}")), content).expect("write input");
}

/// Writes a config file pointing both directories into the temp root.
fn write_config(root: &Path) -> String {
    let config_path = root.join("config.toml");
    let content = format!(
        "[paths]\ndata_dir = \"{}\"\nout_dir = \"{}\"\n",
        root.join("data").display(),
        root.join("out").display(),
    );
    fs::write(&config_path, content).expect("write config");
    config_path.to_string_lossy().to_string()
}

fn args(root: &Path, lib: &str, dot: &str) -> Args {
    Args {
        lib: lib.to_string(),
        dot: dot.to_string(),
        out_prefix: dot.to_string(),
        render: false,
        config: Some(write_config(root)),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_full_run() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path();

    write_input(root, "cmos", "lib", LIBRARY_SRC);
    write_input(root, "counter", "dot", GRAPH_SRC);

    run(&args(root, "cmos", "counter")).expect("run succeeds");

    let out = root.join("out");
    let nodes_csv =
        fs::read_to_string(out.join("counter_nodes.csv")).expect("nodes table written");
    let edges_csv =
        fs::read_to_string(out.join("counter_edges.csv")).expect("edge table written");
    let dot = fs::read_to_string(out.join("counter_sem_graph.dot")).expect("dot written");

    assert!(nodes_csv.contains("U1 nor2,gate,NOR2,U1"));
    assert!(edges_csv.contains("a,U1 nor2"));
    assert!(edges_csv.contains("U1 nor2,y"));
    assert!(dot.contains("\"U1 nor2\" [shape=box];"));
}

#[test]
fn e2e_smoke_test_empty_library_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path();

    write_input(root, "cmos", "lib", "library(cmos) {\n}\n");
    write_input(root, "counter", "dot", GRAPH_SRC);

    let err = run(&args(root, "cmos", "counter")).expect_err("run must fail");
    assert!(
        err.to_string().contains("cmos.lib"),
        "error names the failing input: {err}"
    );
    assert!(
        !root.join("out").exists(),
        "no output is written on a fatal input error"
    );
}

#[test]
fn e2e_smoke_test_gateless_graph_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path();

    write_input(root, "cmos", "lib", LIBRARY_SRC);
    write_input(
        root,
        "counter",
        "dot",
        "digraph \"counter\" {\nn1 [ shape=octagon, label=\"a\" ];\n}\n",
    );

    let err = run(&args(root, "cmos", "counter")).expect_err("run must fail");
    assert!(
        err.to_string().contains("counter.dot"),
        "error names the failing input: {err}"
    );
}

#[test]
fn e2e_smoke_test_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path();

    write_input(root, "cmos", "lib", LIBRARY_SRC);
    // No graph input written.

    assert!(run(&args(root, "cmos", "counter")).is_err());
}
