use heatorder::cluster::{Clusterer, UpgmaClusterer};
use heatorder::metric::{Euclidean, MetricKind};
use heatorder::model::cluster_element::{elements_from_columns, elements_from_rows};
use heatorder::model::{ClusterElement, extract_order};
use heatorder::reorder::{MoloReorderer, Reorderer};
use heatorder::{HeatmapError, cluster_columns, cluster_rows};

fn fixture_matrix() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 1.0],
        vec![1.0, 1.2],
        vec![2.5, 0.75],
        vec![3.0, 2.0],
        vec![3.0, 2.5],
    ]
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_fixture_topology_and_heights() {
    let tree = UpgmaClusterer::new(Euclidean)
        .cluster(elements_from_rows(&fixture_matrix()))
        .unwrap();

    // Counts
    assert_eq!(tree.num_leaves(), 5);
    assert_eq!(tree.num_internal(), 4);
    assert_eq!(tree.num_nodes(), 9);
    assert!(tree.is_valid());
    assert!(tree.has_monotone_heights());

    // (a, b) and (d, e) merge first
    let ab = tree.node(5);
    assert_eq!(ab.children(), Some((0, 1)));
    assert_close(ab.height(), 0.1);
    let de = tree.node(6);
    assert_eq!(de.children(), Some((3, 4)));
    assert_close(de.height(), 0.25);

    // c joins (a, b), c created earlier so it goes left
    let cab = tree.node(7);
    assert_eq!(cab.children(), Some((2, 5)));
    assert_close(cab.height(), 0.77);

    // Root
    assert_eq!(tree.root_index(), 8);
    assert_eq!(tree.root().children(), Some((6, 7)));
    assert_close(tree.height(), 1.036);
    assert_eq!(tree.root().num_leaves(), 5);

    assert_eq!(extract_order(&tree), vec![3, 4, 2, 0, 1]);
}

#[test]
fn test_fixture_molo_keeps_order() {
    let tree = UpgmaClusterer::new(Euclidean)
        .cluster(elements_from_rows(&fixture_matrix()))
        .unwrap();
    let tree = MoloReorderer::new(Euclidean).reorder(tree).unwrap();
    assert_eq!(tree.leaf_order(), vec![3, 4, 2, 0, 1]);

    assert_eq!(cluster_rows(&fixture_matrix()).unwrap(), vec![3, 4, 2, 0, 1]);
}

#[test]
fn test_single_element() {
    let tree = UpgmaClusterer::new(Euclidean)
        .cluster(vec![ClusterElement::new(vec![0.3, 0.4], 0)])
        .unwrap();
    assert_eq!(tree.num_leaves(), 1);
    assert_eq!(tree.num_internal(), 0);
    assert!(tree.root().is_leaf());
    assert_eq!(tree.height(), 0.0);
    assert_eq!(extract_order(&tree), vec![0]);
}

#[test]
fn test_identical_elements_merge_at_zero() {
    let elements = elements_from_rows(&[vec![0.5, 0.5], vec![0.5, 0.5], vec![0.5, 0.5]]);
    let tree = UpgmaClusterer::new(Euclidean).cluster(elements).unwrap();
    assert!(tree.is_valid());
    assert_eq!(tree.height(), 0.0);
    // Ties resolve by slot, no reordering applies on equal distances
    assert_eq!(tree.leaf_order(), vec![2, 0, 1]);
}

#[test]
fn test_element_ids_are_kept() {
    let elements = vec![
        ClusterElement::new(vec![0.0], 10),
        ClusterElement::new(vec![5.0], 20),
        ClusterElement::new(vec![0.5], 30),
    ];
    let tree = UpgmaClusterer::new(Euclidean).cluster(elements).unwrap();
    let mut ids = tree.leaf_order();
    ids.sort();
    assert_eq!(ids, vec![10, 20, 30]);
}

#[test]
fn test_errors() {
    let clusterer = UpgmaClusterer::new(Euclidean);
    assert_eq!(clusterer.cluster(vec![]).unwrap_err(), HeatmapError::EmptyInput);

    let elements = vec![
        ClusterElement::new(vec![0.0, 1.0], 0),
        ClusterElement::new(vec![0.0, 1.0], 1),
        ClusterElement::new(vec![0.0], 2),
    ];
    assert_eq!(
        clusterer.cluster(elements).unwrap_err(),
        HeatmapError::DimensionMismatch {
            expected: 2,
            found: 1
        }
    );

    assert_eq!(cluster_rows(&[]).unwrap_err(), HeatmapError::EmptyInput);
    assert_eq!(
        cluster_rows(&[vec![0.0, 1.0], vec![1.0]]).unwrap_err(),
        HeatmapError::IrregularMatrix {
            row: 1,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn test_columns_are_transposed_rows() {
    let matrix = fixture_matrix();
    let transposed: Vec<Vec<f64>> = (0..2)
        .map(|column| matrix.iter().map(|row| row[column]).collect())
        .collect();

    assert_eq!(cluster_columns(&transposed).unwrap(), vec![3, 4, 2, 0, 1]);
    assert_eq!(
        elements_from_columns(&transposed)[2].values(),
        elements_from_rows(&matrix)[2].values()
    );
    assert_eq!(cluster_columns(&matrix).unwrap().len(), 2);
}

#[test]
fn test_metric_kind_changes_clustering() {
    // By magnitude rows 0 and 1 are close, by direction rows 0 and 2 are
    let elements = || {
        elements_from_rows(&[vec![1.0, 0.0], vec![1.0, 1.0], vec![10.0, 0.5]])
    };

    let euclidean = UpgmaClusterer::new(MetricKind::Euclidean)
        .cluster(elements())
        .unwrap();
    assert_eq!(euclidean.node(3).children(), Some((0, 1)));

    let cosine = UpgmaClusterer::new(MetricKind::Cosine)
        .cluster(elements())
        .unwrap();
    assert_eq!(cosine.node(3).children(), Some((0, 2)));
}
