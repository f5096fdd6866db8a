// File: crates/floatchart-core/tests/layout.rs
// Purpose: End-to-end layout over a small dataset, plus rebuild idempotency.

use floatchart_core::primitive::{ChartTree, Group, Primitive};
use floatchart_core::{build_chart, ChartConfig, ChartGeometry, YearRecord};

fn two_years() -> Vec<YearRecord> {
    // deliberately out of order; the engine sorts ascending by year
    vec![
        YearRecord::new(1968, 19.9, -0.0302, 0.0564, ""),
        YearRecord::new(1967, 17.3, -0.0231, 0.0507, "National Indemnity acquisition"),
    ]
}

fn groups_with_class<'a>(tree: &'a ChartTree, class: &str) -> Vec<&'a Group> {
    tree.groups.iter().filter(|g| g.class == class).collect()
}

fn text_content<'a>(g: &'a Group, class: &str) -> &'a str {
    g.nodes
        .iter()
        .find_map(|n| match n {
            Primitive::Text(t) if t.class == class => Some(t.content.as_str()),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no '{class}' text in group"))
}

#[test]
fn two_record_end_to_end() {
    let config = ChartConfig::default();
    let tree = build_chart(&config, &two_years());

    // key + two axes + two bands + two notes
    assert_eq!(tree.groups.len(), 7);

    let bands = groups_with_class(&tree, "bar");
    assert_eq!(bands.len(), 2);
    assert_eq!(text_content(bands[0], "y label"), "1967");
    assert_eq!(text_content(bands[1], "y label"), "1968");
    assert!(bands[0].ty < bands[1].ty, "1967 sits above 1968");

    // 1967's cost is negative: its bar hangs left of the zero baseline
    let zero = ChartGeometry::new(&config).zero_x();
    let cost = bands[0]
        .nodes
        .iter()
        .find_map(|n| match n {
            Primitive::Rect(r) if r.class == "cost" => Some(r),
            _ => None,
        })
        .expect("cost bar");
    assert!(cost.x < zero);
    assert!((cost.x + cost.width - zero).abs() < 1e-3);

    let notes = groups_with_class(&tree, "note");
    assert_eq!(notes.len(), 2);
    assert_eq!(text_content(notes[0], "notes"), "National Indemnity acquisition");
    assert_eq!(text_content(notes[1], "notes"), "");
}

#[test]
fn surface_size_includes_margins() {
    let config = ChartConfig::default();
    let tree = build_chart(&config, &two_years());
    assert!((tree.surface_width - (820.0 + 40.0 + 40.0)).abs() < 1e-3);
    assert!((tree.surface_height - 1080.0).abs() < 1e-3);
}

#[test]
fn equal_floats_collapse_float_bars() {
    let recs: Vec<YearRecord> = (0..5)
        .map(|i| YearRecord::new(2000 + i, 100.0, -0.02, 0.05, ""))
        .collect();
    let tree = build_chart(&ChartConfig::default(), &recs);
    for band in groups_with_class(&tree, "bar") {
        let float_bar = band
            .nodes
            .iter()
            .find_map(|n| match n {
                Primitive::Rect(r) if r.class == "float" => Some(r),
                _ => None,
            })
            .expect("float bar");
        assert_eq!(float_bar.width, 0.0);
    }
}

#[test]
fn rebuild_is_idempotent() {
    let config = ChartConfig::default();
    let recs = two_years();
    assert_eq!(build_chart(&config, &recs), build_chart(&config, &recs));

    // a different width is a full, independent recompute
    let wide = ChartConfig { width: 1200.0, ..ChartConfig::default() };
    let tree = build_chart(&wide, &recs);
    assert!((tree.surface_width - 1280.0).abs() < 1e-3);
    assert_eq!(build_chart(&wide, &recs), tree);
}

#[test]
fn sorting_leaves_caller_records_untouched() {
    let recs = two_years();
    let before = recs.clone();
    let _ = build_chart(&ChartConfig::default(), &recs);
    assert_eq!(recs, before);
}
