//! Domain-critical regression tests for lab-kdtree.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards
//! against.

#[cfg(test)]
mod domain_tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::color::{CieLab, Srgb};
    use crate::tree::{KdTree, LabPoint};

    fn random_catalog(rng: &mut StdRng, n: usize) -> Vec<LabPoint> {
        (0..n)
            .map(|i| {
                let lab = CieLab::new(
                    rng.gen_range(0.0..=100.0),
                    rng.gen_range(-128.0..=127.0),
                    rng.gen_range(-128.0..=127.0),
                );
                LabPoint::new(lab, format!("p{i:04}"))
            })
            .collect()
    }

    fn random_query(rng: &mut StdRng) -> CieLab {
        CieLab::new(
            rng.gen_range(0.0..=100.0),
            rng.gen_range(-128.0..=127.0),
            rng.gen_range(-128.0..=127.0),
        )
    }

    /// Reference answer: strict-less linear scan, same tie-break rule as
    /// the tree (first point at the minimum distance wins).
    fn brute_force(points: &[LabPoint], query: CieLab) -> f64 {
        points
            .iter()
            .map(|p| p.lab.distance(query))
            .fold(f64::INFINITY, f64::min)
    }

    // ========================================================================
    // GAP 1: Pruning soundness -- the far half-space must be visited
    // whenever it could hold a closer point
    // ========================================================================

    /// If this breaks, it means: the hyperplane pruning bound (or the
    /// near/far child selection feeding it) is wrong, and the search is
    /// discarding subtrees that contain the true nearest neighbor. The
    /// brute-force scan uses the identical distance function, so the two
    /// minima must agree to the last bit.
    #[test]
    fn test_nearest_matches_brute_force_on_random_catalogs() {
        let mut rng = StdRng::seed_from_u64(0x1ab);
        let catalog = random_catalog(&mut rng, 1000);
        let tree = KdTree::build(catalog.clone()).unwrap();

        for i in 0..100 {
            let query = random_query(&mut rng);
            let tree_dist = tree.nearest(query).unwrap().lab.distance(query);
            let scan_dist = brute_force(&catalog, query);
            assert_eq!(
                tree_dist, scan_dist,
                "query {} ({:?}): tree found distance {}, linear scan found {}",
                i, query, tree_dist, scan_dist
            );
        }
    }

    /// If this breaks, it means: pruning misbehaves on degenerate axis
    /// distributions. Heavy coordinate duplication collapses many median
    /// splits onto the same plane value, which is where an off-by-one in
    /// the <= / >= split convention shows up.
    #[test]
    fn test_brute_force_equivalence_with_duplicate_heavy_catalog() {
        let mut rng = StdRng::seed_from_u64(77);
        // Quantize coordinates to a handful of values per axis
        let catalog: Vec<LabPoint> = (0..500)
            .map(|i| {
                let lab = CieLab::new(
                    rng.gen_range(0..=4) as f64 * 25.0,
                    rng.gen_range(-2..=2) as f64 * 50.0,
                    rng.gen_range(-2..=2) as f64 * 50.0,
                );
                LabPoint::new(lab, format!("q{i:03}"))
            })
            .collect();
        let tree = KdTree::build(catalog.clone()).unwrap();

        for _ in 0..100 {
            let query = random_query(&mut rng);
            let tree_dist = tree.nearest(query).unwrap().lab.distance(query);
            let scan_dist = brute_force(&catalog, query);
            assert_eq!(tree_dist, scan_dist);
        }
    }

    // ========================================================================
    // GAP 2: End-to-end catalog scenario through the sRGB conversion
    // ========================================================================

    /// If this breaks, it means: either the sRGB -> CIELAB conversion or
    /// the search is wrong enough to misclassify an unambiguous query. A
    /// near-white input must resolve to the white catalog entry, not to
    /// black or red.
    #[test]
    fn test_black_white_red_scenario() {
        let hexes = ["#000000", "#FFFFFF", "#FF0000"];
        let catalog: Vec<LabPoint> = hexes
            .iter()
            .map(|hex| LabPoint::new(CieLab::from(hex.parse::<Srgb>().unwrap()), *hex))
            .collect();
        let tree = KdTree::build(catalog).unwrap();

        let query = CieLab::from("#FAFAFA".parse::<Srgb>().unwrap());
        assert_eq!(tree.nearest(query).unwrap().label, "#FFFFFF");

        let query = CieLab::from("#1A0005".parse::<Srgb>().unwrap());
        assert_eq!(tree.nearest(query).unwrap().label, "#000000");

        let query = CieLab::from("#E01010".parse::<Srgb>().unwrap());
        assert_eq!(tree.nearest(query).unwrap().label, "#FF0000");
    }

    // ========================================================================
    // GAP 3: Export/rebuild round-trip preserves query results
    // ========================================================================

    /// If this breaks, it means: rebuilding from the exported point buffer
    /// (the persistence path) changes answers. For coordinate-distinct
    /// catalogs the rebuilt tree must agree with the original on every
    /// query.
    #[test]
    fn test_export_rebuild_round_trip() {
        let mut rng = StdRng::seed_from_u64(2026);
        let catalog = random_catalog(&mut rng, 300);
        let tree = KdTree::build(catalog).unwrap();
        let rebuilt = KdTree::build(tree.points().to_vec()).unwrap();

        assert_eq!(rebuilt.len(), tree.len());
        for _ in 0..50 {
            let query = random_query(&mut rng);
            assert_eq!(
                tree.nearest(query).unwrap().label,
                rebuilt.nearest(query).unwrap().label
            );
        }
    }
}
