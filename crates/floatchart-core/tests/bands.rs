// File: crates/floatchart-core/tests/bands.rs
// Purpose: Band groups partition [0, height] with no gaps or overlap.

use floatchart_core::primitive::{ChartTree, Group, Primitive};
use floatchart_core::{build_chart, ChartConfig, ChartGeometry, YearRecord};

fn records(n: usize) -> Vec<YearRecord> {
    (0..n)
        .map(|i| YearRecord::new(1967 + i as i32, 100.0 + i as f64, -0.02, 0.05, ""))
        .collect()
}

fn band_groups(tree: &ChartTree) -> Vec<&Group> {
    tree.groups.iter().filter(|g| g.class == "bar").collect()
}

fn band_height(g: &Group) -> f32 {
    // first node is the background rect spanning the full band
    match &g.nodes[0] {
        Primitive::Rect(r) => r.height,
        other => panic!("expected background rect, got {other:?}"),
    }
}

#[test]
fn band_count_matches_record_count() {
    let tree = build_chart(&ChartConfig::default(), &records(7));
    assert_eq!(band_groups(&tree).len(), 7);
}

#[test]
fn bands_partition_chart_height() {
    let config = ChartConfig::default();
    let geom = ChartGeometry::new(&config);
    for n in [1usize, 2, 7, 46, 100] {
        let tree = build_chart(&config, &records(n));
        let groups = band_groups(&tree);
        assert_eq!(groups.len(), n);

        let mut cursor = geom.margin.top;
        let mut total = 0.0f32;
        for g in &groups {
            assert!(
                (g.ty - cursor).abs() < 1e-3,
                "n={n}: band starts at {}, expected {}",
                g.ty,
                cursor
            );
            let h = band_height(g);
            assert!(h > 0.0, "n={n}: zero-height band");
            cursor += h;
            total += h;
        }
        assert!(
            (total - geom.height).abs() < 1e-3,
            "n={n}: heights sum to {total}, want {}",
            geom.height
        );
    }
}

#[test]
fn empty_input_yields_zero_bands() {
    let tree = build_chart(&ChartConfig::default(), &[]);
    assert!(band_groups(&tree).is_empty());
    // key and the two axis blocks are still emitted
    assert_eq!(tree.groups.len(), 3);
}
