//! Property tests for the ring and topology compilation invariants.

use bubble_mesh::compile::{compile_topology, CompileOptions};
use bubble_mesh::geometry::shapes::Circle;
use bubble_mesh::geometry::Polygon;
use bubble_mesh::topology::Topology;
use proptest::prelude::*;

proptest! {
    /// Any valid N-gon ring produces exactly N points, N lines and one
    /// curve loop whose line sequence is a single closed traversal.
    #[test]
    fn ngon_compiles_to_n_points_n_lines_one_loop(
        n in 3usize..48,
        cx in -50.0f64..50.0,
        cy in -50.0f64..50.0,
        radius in 0.01f64..10.0,
    ) {
        let ring = Circle::new((cx, cy), radius).discretize(n);
        let topology = Topology::new(Polygon::from(ring), []);
        let entities = compile_topology(&topology, &CompileOptions::default()).unwrap();

        prop_assert_eq!(entities.points.len(), n);
        prop_assert_eq!(entities.lines.len(), n);
        prop_assert_eq!(entities.curve_loops.len(), 1);

        // Contiguous tags from 1, in creation order.
        for (index, point) in entities.points.iter().enumerate() {
            prop_assert_eq!(point.tag.get(), index as u64 + 1);
        }
        for (index, line) in entities.lines.iter().enumerate() {
            prop_assert_eq!(line.tag.get(), index as u64 + 1);
        }

        // The loop lists the lines in order and chains them into one cycle
        // visiting every point exactly once.
        let lines = &entities.lines;
        prop_assert_eq!(
            &entities.curve_loops[0].line_tags,
            &lines.iter().map(|l| l.tag).collect::<Vec<_>>()
        );
        for i in 0..n {
            prop_assert_eq!(lines[i].end_tag, lines[(i + 1) % n].start_tag);
        }
        let mut visited: Vec<u64> = lines.iter().map(|l| l.start_tag.get()).collect();
        visited.sort_unstable();
        visited.dedup();
        prop_assert_eq!(visited.len(), n);
    }

    /// Tag ranges stay contiguous across any number of regions of any size.
    #[test]
    fn tags_are_gap_free_across_regions(
        sizes in proptest::collection::vec(3usize..24, 1..6),
    ) {
        let mut topology = Topology::new(
            Polygon::from(Circle::new((0.0, 0.0), 100.0).discretize(sizes[0])),
            [],
        );
        for (index, &n) in sizes.iter().enumerate().skip(1) {
            let ring = Circle::new((index as f64 * 3.0, 0.0), 1.0).discretize(n);
            topology.add(Polygon::from(ring), index as u32);
        }
        let entities = compile_topology(&topology, &CompileOptions::default()).unwrap();

        let total: usize = sizes.iter().sum();
        prop_assert_eq!(entities.points.len(), total);
        prop_assert_eq!(entities.lines.len(), total);
        prop_assert_eq!(entities.curve_loops.len(), sizes.len());
        prop_assert_eq!(entities.plane_surfaces.len(), sizes.len());

        let point_tags: Vec<u64> = entities.points.iter().map(|p| p.tag.get()).collect();
        prop_assert_eq!(point_tags, (1..=total as u64).collect::<Vec<_>>());
        let loop_tags: Vec<u64> = entities.curve_loops.iter().map(|c| c.tag.get()).collect();
        prop_assert_eq!(loop_tags, (1..=sizes.len() as u64).collect::<Vec<_>>());
        let surface_tags: Vec<u64> =
            entities.plane_surfaces.iter().map(|s| s.tag.get()).collect();
        prop_assert_eq!(surface_tags, (1..=sizes.len() as u64).collect::<Vec<_>>());
    }
}
