use heatorder::cluster::{Clusterer, UpgmaClusterer};
use heatorder::metric::Euclidean;
use heatorder::model::cluster_element::elements_from_rows;
use heatorder::model::{ClusterElement, Dendrogram};
use heatorder::newick::{NewickStyle, escape_label, to_newick, write_newick_file};
use std::fs::{self, File};

/// (2, (0, 1)) with heights 0.5 and 0.75
fn line_tree() -> Dendrogram {
    UpgmaClusterer::new(Euclidean)
        .cluster(elements_from_rows(&[vec![0.0], vec![1.0], vec![2.0]]))
        .unwrap()
}

#[test]
fn test_styles() {
    let tree = line_tree();
    assert_eq!(
        to_newick(&NewickStyle::ZeroIndexed, &tree, None),
        "(2:0.75,(0:0.5,1:0.5):0.25);"
    );
    assert_eq!(
        to_newick(&NewickStyle::OneIndexed, &tree, None),
        "(3:0.75,(1:0.5,2:0.5):0.25);"
    );

    let labels = vec!["Takahe".to_string(), "Weka".to_string(), "South Island Kokako".to_string()];
    assert_eq!(
        to_newick(&NewickStyle::Label, &tree, Some(labels.as_slice())),
        "(South_Island_Kokako:0.75,(Takahe:0.5,Weka:0.5):0.25);"
    );
}

#[test]
fn test_label_fallbacks() {
    let tree = line_tree();
    // Label style without labels gives nothing
    assert_eq!(to_newick(&NewickStyle::Label, &tree, None), "");

    // Missing labels fall back to ids, empty and special labels are quoted
    let labels = vec![String::new(), "a:b".to_string()];
    assert_eq!(
        to_newick(&NewickStyle::Label, &tree, Some(labels.as_slice())),
        "(2:0.75,('':0.5,'a:b':0.5):0.25);"
    );
}

#[test]
fn test_single_leaf_and_unrooted() {
    let mut tree = Dendrogram::new(1);
    let leaf = tree.add_leaf(ClusterElement::new(vec![1.0], 0));
    assert_eq!(to_newick(&NewickStyle::ZeroIndexed, &tree, None), "");

    tree.set_root(leaf);
    assert_eq!(to_newick(&NewickStyle::ZeroIndexed, &tree, None), "0;");
}

#[test]
fn test_escape_label() {
    assert_eq!(escape_label("Kakapo"), "Kakapo");
    assert_eq!(escape_label("Blue Duck"), "Blue_Duck");
    assert_eq!(escape_label("x,y"), "'x,y'");
    assert_eq!(escape_label("it's"), "'it''s'");
    assert_eq!(escape_label("'quoted label'"), "'quoted label'");
    assert_eq!(escape_label(""), "''");
}

#[test]
fn test_write_newick_file() {
    let path = std::env::temp_dir().join(format!("heatorder-test-{}.nwk", std::process::id()));
    let file = File::create(&path).unwrap();
    let trees = vec![line_tree(), line_tree()];
    write_newick_file(file, &trees, &NewickStyle::ZeroIndexed, None).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["(2:0.75,(0:0.5,1:0.5):0.25);"; 2]);
}
