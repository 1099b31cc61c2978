use crate::band::{merge_adjacent, DustBand};

#[test]
fn test_merge_adjacent_folds_identical_neighbors() {
    let mut bands = vec![
        DustBand::new(0.0, 1.0, true, true),
        DustBand::new(1.0, 2.0, true, true),
        DustBand::new(2.0, 3.0, false, true),
        DustBand::new(3.0, 4.0, false, true),
        DustBand::new(4.0, 5.0, true, false),
    ];

    merge_adjacent(&mut bands);

    assert_eq!(
        bands,
        vec![
            DustBand::new(0.0, 2.0, true, true),
            DustBand::new(2.0, 4.0, false, true),
            DustBand::new(4.0, 5.0, true, false),
        ]
    );
}

#[test]
fn test_merge_adjacent_collapses_runs_longer_than_two() {
    let mut bands = vec![
        DustBand::new(0.0, 1.0, false, false),
        DustBand::new(1.0, 2.0, false, false),
        DustBand::new(2.0, 3.0, false, false),
    ];

    merge_adjacent(&mut bands);

    assert_eq!(bands, vec![DustBand::new(0.0, 3.0, false, false)]);
}

#[test]
fn test_width() {
    let band = DustBand::new(0.5, 2.25, true, true);
    assert_eq!(band.width(), 1.75);
}
