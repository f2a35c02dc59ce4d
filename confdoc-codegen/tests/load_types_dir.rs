//! End-to-end loading from a config file and a directory of type files.

use std::{fs, path::Path};

use confdoc_codegen::{PageTree, load};
use confdoc_ir::{Primitive, Shape};
use confdoc_manifest::Error;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write fixture");
}

/// Lay out `config.yaml` and a `types/` directory in a temp dir.
fn workspace(config: &str, types: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write(temp.path(), "config.yaml", config);
    let types_dir = temp.path().join("types");
    fs::create_dir(&types_dir).expect("Failed to create types dir");
    for (name, content) in types {
        write(&types_dir, name, content);
    }
    temp
}

#[test]
fn test_types_spread_over_files() {
    let temp = workspace(
        r#"
name: nats
description: NATS server configuration
sections:
  - name: Clustering
    properties:
      cluster:
        type: cluster
      gateways:
        type: map(gateway)
"#,
        &[
            (
                "cluster.yaml",
                r#"
types:
  cluster:
    type: object
    description: Cluster settings.
    properties:
      routes:
        type: array(string)
      tls:
        type: tls
"#,
            ),
            (
                "gateway.yaml",
                r#"
types:
  gateway:
    type: object
    properties:
      url:
        type: string
"#,
            ),
            (
                "tls.yaml",
                r#"
types:
  tls:
    type: object
    properties:
      cert_file:
        type: string
"#,
            ),
            (".swap.yaml", "not: [valid"),
        ],
    );

    let config = load(temp.path().join("config.yaml"), temp.path().join("types")).unwrap();
    assert_eq!(config.name, "nats");

    let cluster = &config.sections[0].properties[0];
    assert_eq!(cluster.description, "Cluster settings.");
    let children: Vec<_> = cluster.children().map(|p| p.name.as_str()).collect();
    assert_eq!(children, vec!["routes", "tls"]);
    assert_eq!(cluster.children().next().unwrap().types[0].shape, Shape::Array);

    let gateways = &config.sections[0].properties[1];
    assert_eq!(gateways.types[0].primitive, Primitive::Object);
    assert_eq!(gateways.types[0].shape, Shape::Map);
    assert_eq!(gateways.children().next().unwrap().name, "url");

    let tree = PageTree::new(&config);
    assert_eq!(tree.page_count(), 7);
}

#[test]
fn test_duplicate_type_names_both_files() {
    let temp = workspace(
        "name: nats\n",
        &[
            ("a.yaml", "types:\n  tls:\n    type: object\n"),
            ("b.yaml", "types:\n  tls:\n    type: string\n"),
        ],
    );

    let err = load(temp.path().join("config.yaml"), temp.path().join("types")).unwrap_err();
    match *err {
        Error::DuplicateType { name, first, second } => {
            assert_eq!(name, "tls");
            assert!(first.ends_with("a.yaml"));
            assert!(second.ends_with("b.yaml"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_syntax_error_names_file() {
    let temp = workspace("name: nats\n", &[("broken.yaml", "types:\n  tls: [unclosed\n")]);

    let err = load(temp.path().join("config.yaml"), temp.path().join("types")).unwrap_err();
    match *err {
        Error::Parse { filename, .. } => assert!(filename.ends_with("broken.yaml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unknown_type_fails_whole_load() {
    let temp = workspace(
        r#"
name: nats
sections:
  - properties:
      port:
        type: integer
      auth:
        type: nonexistent-type
"#,
        &[],
    );

    let err = load(temp.path().join("config.yaml"), temp.path().join("types")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown type 'nonexistent-type' referenced by 'auth'"
    );
}
