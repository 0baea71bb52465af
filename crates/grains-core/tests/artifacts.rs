// File: crates/grains-core/tests/artifacts.rs
// Purpose: Snapshot assembly: charts, board, text panel, and input rejection.

use grains_core::{BoardSnapshot, GrainsError, ScaleKind, SeriesKind};

#[test]
fn snapshot_midway() {
    let snap = BoardSnapshot::at(10).unwrap();
    assert_eq!(snap.square.get(), 10);
    assert_eq!(snap.grains_on_square, 512);
    assert_eq!(snap.total_grains, 1_023);
    assert_eq!(snap.board.len(), 64);

    let growth = &snap.growth_chart;
    assert_eq!(growth.series.len(), 1);
    assert_eq!(growth.series[0].kind, SeriesKind::Line);
    assert_eq!(growth.series[0].data_xy.len(), 10);
    assert_eq!(*growth.series[0].data_xy.last().unwrap(), (10.0, 512.0));
    assert_eq!(growth.y_axis.kind, ScaleKind::Log10);

    let cumulative = &snap.cumulative_chart;
    assert_eq!(cumulative.series.len(), 1);
    assert_eq!(cumulative.series[0].kind, SeriesKind::Area);
    assert_eq!(cumulative.series[0].baseline_value(), 0.0);
    assert_eq!(*cumulative.series[0].data_xy.last().unwrap(), (10.0, 1_023.0));
    assert_eq!(cumulative.y_axis.kind, ScaleKind::Log10);

    assert_eq!(snap.stats.square_label, "10/64");
    assert_eq!(snap.stats.grains_compact, "512");
    assert_eq!(snap.stats.total_exact, "1,023");
    assert!(snap.stats.milestone.is_none());
}

#[test]
fn first_square_snapshot() {
    let snap = BoardSnapshot::at(1).unwrap();
    assert_eq!(snap.grains_on_square, 1);
    assert_eq!(snap.total_grains, 1);
    assert_eq!(snap.growth_chart.series[0].data_xy, vec![(1.0, 1.0)]);
    assert_eq!(snap.stats.square_label, "1/64");
}

#[test]
fn narrative_tiers() {
    assert!(BoardSnapshot::at(5).unwrap().stats.context.contains("manageable"));
    assert!(BoardSnapshot::at(15).unwrap().stats.context.contains("significant"));
    assert!(BoardSnapshot::at(25).unwrap().stats.context.contains("metric tons"));
    assert!(BoardSnapshot::at(40).unwrap().stats.context.contains("astronomical"));
}

#[test]
fn full_board_milestone() {
    let snap = BoardSnapshot::at(64).unwrap();
    assert_eq!(snap.stats.total_exact, "18,446,744,073,709,551,615");
    let milestone = snap.stats.milestone.expect("milestone on the last square");
    assert!(milestone.contains("18,446,744,073,709,551,615"));
}

#[test]
fn rejects_out_of_range_input() {
    assert!(matches!(
        BoardSnapshot::at(0),
        Err(GrainsError::SquareOutOfRange { square: 0 })
    ));
    assert!(matches!(
        BoardSnapshot::at(65),
        Err(GrainsError::SquareOutOfRange { square: 65 })
    ));
}
