use heatorder::HeatmapError;
use heatorder::heatmap::{
    ClusterTarget, DomainPolicy, Heatmap, HeatmapOrder, HeatmapSettings, ValueDomain,
};
use heatorder::metric::MetricKind;
use heatorder::model::Permutation;
use heatorder::reorder::ReorderKind;

fn values() -> Vec<Vec<f64>> {
    vec![
        vec![0.9, 0.1, 0.8, 0.2],
        vec![0.1, 0.9, 0.2, 0.8],
        vec![0.8, 0.2, 0.9, 0.1],
        vec![0.2, 0.8, 0.1, 0.9],
    ]
}

fn heatmap(settings: HeatmapSettings) -> Heatmap {
    Heatmap::new(
        values(),
        &["r0", "r1", "r2", "r3"],
        &["c0", "c1", "c2", "c3"],
        settings,
    )
    .unwrap()
}

fn is_adjacent(order: &Permutation, a: usize, b: usize) -> bool {
    let inverse = order.inverse();
    match (inverse.get(a), inverse.get(b)) {
        (Some(pa), Some(pb)) => pa.abs_diff(pb) == 1,
        _ => false,
    }
}

#[test]
fn test_starts_in_original_order() {
    let heatmap = heatmap(HeatmapSettings::default());
    assert_eq!(heatmap.num_rows(), 4);
    assert_eq!(heatmap.num_columns(), 4);
    assert!(heatmap.order().rows.is_identity());
    assert!(heatmap.order().columns.is_identity());
    assert_eq!(heatmap.ordered_grid(), heatmap.cells());
    assert_eq!(heatmap.bucket_index().num_positions(), 16);
    assert!(heatmap.row_dendrogram().is_none());
}

#[test]
fn test_cluster_all() {
    let mut heatmap = heatmap(HeatmapSettings::default());
    let order = heatmap.cluster(ClusterTarget::All).unwrap().clone();

    assert!(is_adjacent(&order.rows, 0, 2));
    assert!(is_adjacent(&order.rows, 1, 3));
    assert!(is_adjacent(&order.columns, 0, 2));
    assert!(is_adjacent(&order.columns, 1, 3));

    let rows = heatmap.row_dendrogram().unwrap();
    assert_eq!(rows.leaf_order(), order.rows.as_slice());
    assert!(heatmap.column_dendrogram().is_some());

    // Ordered grid and labels follow the permutation
    let first_row = order.rows.as_slice()[0];
    let first_column = order.columns.as_slice()[0];
    let cell = heatmap.ordered_grid()[0][0];
    assert_eq!((cell.row_index, cell.column_index), (first_row, first_column));
    assert_eq!(heatmap.ordered_rows()[0].index, first_row);
    assert_eq!(heatmap.ordered_columns()[0].name, format!("c{first_column}"));

    // Bucket index refers to display positions
    for (bucket, positions) in heatmap.bucket_index().iter() {
        for &(row, column) in positions {
            assert_eq!(heatmap.ordered_grid()[row][column].bucket, bucket);
        }
    }
}

#[test]
fn test_cluster_single_axis() {
    let mut heatmap = heatmap(HeatmapSettings::default());
    let order = heatmap.cluster(ClusterTarget::Rows).unwrap();
    assert!(order.columns.is_identity());
    assert!(!order.rows.is_identity());
    assert!(heatmap.column_dendrogram().is_none());

    let order = heatmap.cluster(ClusterTarget::Columns).unwrap();
    assert!(order.rows.is_identity());
    assert!(!order.columns.is_identity());
    assert!(heatmap.row_dendrogram().is_none());
}

#[test]
fn test_cluster_none_is_identity() {
    let mut heatmap = heatmap(HeatmapSettings::default());
    heatmap.cluster(ClusterTarget::All).unwrap();
    let order = heatmap.cluster(ClusterTarget::None).unwrap();
    assert_eq!(*order, HeatmapOrder::identity(4, 4));
    assert_eq!(heatmap.ordered_grid(), heatmap.cells());
}

#[test]
fn test_set_order_and_reset() {
    let mut heatmap = heatmap(HeatmapSettings::default());
    let rows = Permutation::from_order(vec![3, 2, 1, 0]).unwrap();
    let order = HeatmapOrder {
        rows,
        columns: Permutation::identity(4),
    };
    heatmap.set_order(order.clone()).unwrap();
    assert_eq!(heatmap.order(), &order);
    assert_eq!(heatmap.ordered_grid()[0][0].row_index, 3);
    assert_eq!(heatmap.ordered_rows()[0].name, "r3");

    let wrong = HeatmapOrder::identity(3, 4);
    assert_eq!(
        heatmap.set_order(wrong).unwrap_err(),
        HeatmapError::DimensionMismatch {
            expected: 4,
            found: 3
        }
    );
    // Failed call keeps the previous order
    assert_eq!(heatmap.order(), &order);

    heatmap.reset();
    assert_eq!(heatmap.order(), &HeatmapOrder::identity(4, 4));
    assert_eq!(heatmap.ordered_grid(), heatmap.cells());
}

#[test]
fn test_single_row_and_empty_matrix() {
    let mut heatmap = Heatmap::new(vec![vec![0.3, 0.6]], &["only"], &["a", "b"], HeatmapSettings::default()).unwrap();
    let order = heatmap.cluster(ClusterTarget::All).unwrap();
    assert_eq!(order.rows.as_slice(), &[0]);
    assert_eq!(order.columns.len(), 2);

    let no_labels: [&str; 0] = [];
    let mut empty = Heatmap::new(Vec::new(), &no_labels, &no_labels, HeatmapSettings::default()).unwrap();
    let order = empty.cluster(ClusterTarget::All).unwrap();
    assert!(order.rows.is_empty());
    assert!(order.columns.is_empty());
    assert!(empty.bucket_index().is_empty());
}

#[test]
fn test_columns_without_rows_keep_identity() {
    let no_rows: [&str; 0] = [];
    let mut heatmap = Heatmap::new(Vec::new(), &no_rows, &["x", "y", "z"], HeatmapSettings::default()).unwrap();
    assert_eq!(heatmap.num_columns(), 3);

    for target in [ClusterTarget::All, ClusterTarget::Columns] {
        let order = heatmap.cluster(target).unwrap();
        assert!(order.rows.is_empty());
        assert_eq!(order.columns, Permutation::identity(3));
        assert!(heatmap.column_dendrogram().is_none());
    }
    assert!(heatmap.ordered_grid().is_empty());
}

#[test]
fn test_infinite_values_are_rejected() {
    let values = vec![vec![f64::INFINITY], vec![f64::INFINITY], vec![0.5]];
    let err = Heatmap::new(values, &["a", "b", "c"], &["x"], HeatmapSettings::default()).unwrap_err();
    assert!(matches!(
        err,
        HeatmapError::OutOfDomain { row: 0, column: 0, value, .. } if value == f64::INFINITY
    ));
}

#[test]
fn test_construction_errors() {
    let err = Heatmap::new(values(), &["r0", "r1"], &["c0", "c1", "c2", "c3"], HeatmapSettings::default())
        .unwrap_err();
    assert_eq!(
        err,
        HeatmapError::LabelCountMismatch {
            axis: "row",
            expected: 4,
            found: 2
        }
    );

    let strict = HeatmapSettings::default()
        .with_domain(ValueDomain::new(0.0, 0.5).unwrap())
        .with_domain_policy(DomainPolicy::Strict);
    let err = Heatmap::new(values(), &["r0", "r1", "r2", "r3"], &["c0", "c1", "c2", "c3"], strict)
        .unwrap_err();
    assert!(matches!(err, HeatmapError::OutOfDomain { value, .. } if value == 0.9));
}

#[test]
fn test_reordering_off() {
    let settings = HeatmapSettings::default()
        .with_metric(MetricKind::Manhattan)
        .with_reordering(ReorderKind::None);
    let mut heatmap = heatmap(settings);
    let order = heatmap.cluster(ClusterTarget::Rows).unwrap().clone();
    assert!(is_adjacent(&order.rows, 0, 2));
    assert_eq!(heatmap.settings().reordering, ReorderKind::None);
}

#[test]
fn test_settings_serde() {
    let settings: HeatmapSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, HeatmapSettings::default());
    assert_eq!(settings.bucket_count, 50);
    assert_eq!(settings.domain, ValueDomain { min: 0.0, max: 1.0 });
    assert_eq!(settings.domain_policy, DomainPolicy::Clamp);
    assert_eq!(settings.metric, MetricKind::Euclidean);
    assert_eq!(settings.reordering, ReorderKind::Molo);

    let json = r#"{"bucket_count": 8, "metric": "correlation", "domain_policy": "strict", "reordering": "none"}"#;
    let settings: HeatmapSettings = serde_json::from_str(json).unwrap();
    assert_eq!(settings.bucket_count, 8);
    assert_eq!(settings.metric, MetricKind::Correlation);
    assert_eq!(settings.domain_policy, DomainPolicy::Strict);
    assert_eq!(settings.reordering, ReorderKind::None);

    let round_trip: HeatmapSettings =
        serde_json::from_str(&serde_json::to_string(&settings).unwrap()).unwrap();
    assert_eq!(round_trip, settings);
}

#[test]
fn test_order_serde() {
    let order = HeatmapOrder {
        rows: Permutation::from_order(vec![2, 0, 1]).unwrap(),
        columns: Permutation::identity(2),
    };
    let json = serde_json::to_string(&order).unwrap();
    assert_eq!(json, r#"{"rows":[2,0,1],"columns":[0,1]}"#);

    let broken = r#"{"rows":[0,0,1],"columns":[0,1]}"#;
    assert!(serde_json::from_str::<HeatmapOrder>(broken).is_err());
}
