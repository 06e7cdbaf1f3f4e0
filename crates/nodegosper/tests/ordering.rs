//! Ordering properties of constructed curves.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use nodegosper::{BoundingBox, NodeGosperCurve, Pattern, Point, PointCloud, error, sort};
use proptest::prelude::*;

fn points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 2..200)
        .prop_map(|v| v.into_iter().map(Point::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Parallel sorting keeps each code paired with its payload.
    #[test]
    fn sort_keeps_pairs(codes in prop::collection::vec(0u64..1000, 0..300)) {
        let original = codes.clone();
        let mut sorted = codes;
        let mut idx: Vec<u32> = (0..sorted.len() as u32).collect();
        sort::sort_by_code(&mut sorted, &mut idx);

        prop_assert!(sort::is_sorted(&sorted));
        for (code, i) in sorted.iter().zip(&idx) {
            prop_assert_eq!(*code, original[*i as usize]);
        }
        let mut seen = idx.clone();
        seen.sort_unstable();
        prop_assert!(seen.iter().copied().eq(0..original.len() as u32));
    }

    /// A constructed curve is a permutation of the input ordered by code.
    #[test]
    fn construct_is_sorted_permutation(pts in points(), level in 0u32..=12, pi in 0usize..5) {
        let cloud = PointCloud::from_points(pts.clone());
        prop_assume!(cloud.is_ok());
        let cloud = cloud.expect("checked");
        let pattern = Pattern::ALL[pi];
        let curve = NodeGosperCurve::new(level, pattern, cloud.bbox()).expect("curve");
        let sorted = curve.construct(cloud.points()).expect("construct");

        prop_assert_eq!(sorted.len(), pts.len());
        prop_assert!(sort::is_sorted(sorted.codes()));

        let ranks = sorted.ranks();
        let by_index = sorted.codes_by_index();
        for (i, p) in cloud.points().iter().enumerate() {
            prop_assert_eq!(by_index[i], curve.hash(p));
            prop_assert_eq!(sorted.indices()[ranks[i] as usize] as usize, i);
        }
    }

    /// Normalisation keeps every point inside the box and recoverable.
    #[test]
    fn normalised_points_inside_box(pts in points()) {
        let cloud = PointCloud::from_points(pts.clone());
        prop_assume!(cloud.is_ok());
        let cloud = cloud.expect("checked");
        let bbox = cloud.bbox();
        prop_assert!((bbox.width() - bbox.height()).abs() <= 1e-9 * bbox.width());
        for (i, p) in cloud.points().iter().enumerate() {
            prop_assert!(bbox.contains(p));
            let back = cloud.original(i).expect("in range");
            prop_assert!(back.distance(&pts[i]) <= 1e-9 * (1.0 + pts[i].distance(&Point::origin())));
        }
    }
}

#[test]
fn coarse_levels_group_points() -> error::Result<()> {
    // At level 0 only seven codes exist, so dense input collides.
    let bbox = BoundingBox::centered(1.0);
    let curve = NodeGosperCurve::new(0, Pattern::Precise, &bbox)?;
    let pts: Vec<Point> = (0..100)
        .map(|i| Point::new(f64::from(i % 10) * 0.05, f64::from(i / 10) * 0.05))
        .collect();
    let sorted = curve.construct(&pts)?;
    assert!(sorted.codes().iter().all(|&c| c <= 6));
    assert!(sort::is_sorted(sorted.codes()));
    Ok(())
}
