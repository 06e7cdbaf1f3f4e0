//! Curve properties over complete Gosper islands: every island cell gets a
//! distinct code, and the precise pattern steps between adjacent cells only.
#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use nodegosper::{
        BoundingBox, CubeCoord, NodeGosperCurve, Pattern, Point, error, registry,
    };

    /// Centres of every finest-level cell of the island at `level`, and the
    /// cells themselves.
    fn island(curve: &NodeGosperCurve) -> (Vec<CubeCoord>, Vec<Point>) {
        let grid = curve.grid();
        // Islands grow by sqrt(7) per level, comfortably inside 3^depth.
        let reach = 3 * 3i64.pow(grid.depth()) + 3;
        let mut cells = Vec::new();
        for x in -reach..=reach {
            for z in -reach..=reach {
                let cell = CubeCoord::new(x, z);
                if grid.walk(cell).in_island() {
                    cells.push(cell);
                }
            }
        }
        let centres = cells.iter().map(|&c| grid.cell_center(c)).collect();
        (cells, centres)
    }

    fn codes_unique(name: &str, curve: &NodeGosperCurve) -> error::Result<()> {
        let (cells, centres) = island(curve);
        assert_eq!(cells.len(), 7usize.pow(curve.grid().depth()), "{name}");
        let sorted = curve.construct(&centres)?;
        let distinct: HashSet<_> = sorted.codes().iter().collect();
        assert_eq!(distinct.len(), cells.len(), "{name}: codes collide inside the island");
        Ok(())
    }

    fn curve_continuous(name: &str, curve: &NodeGosperCurve) -> error::Result<()> {
        let (cells, centres) = island(curve);
        let sorted = curve.construct(&centres)?;
        let order = sorted.indices();
        for (rank, pair) in order.windows(2).enumerate() {
            let (a, b) = (cells[pair[0] as usize], cells[pair[1] as usize]);
            assert_eq!(
                a.distance(&b),
                1,
                "{name} is discontinuous at rank {rank}: {a:?} -> {b:?}"
            );
        }
        Ok(())
    }

    macro_rules! island_tests {
        ($(($pattern:ident, $level:expr, $continuous:expr)),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<$pattern:lower _unique_level $level>]() -> error::Result<()> {
                        let curve = NodeGosperCurve::new($level, Pattern::$pattern, &BoundingBox::centered(1.0))?;
                        codes_unique(&format!("{}({})", Pattern::$pattern, $level), &curve)
                    }

                    #[test]
                    fn [<$pattern:lower _continuous_level $level>]() -> error::Result<()> {
                        if $continuous {
                            let curve = NodeGosperCurve::new($level, Pattern::$pattern, &BoundingBox::centered(1.0))?;
                            curve_continuous(&format!("{}({})", Pattern::$pattern, $level), &curve)?;
                        }
                        Ok(())
                    }
                }
            )*
        };
    }

    island_tests! {
        (Precise, 0, true),
        (Precise, 1, true),
        (Precise, 2, true),
        (Precise, 3, true),
        (Precise, 4, true),
        (Center, 2, false),
        (Simple, 0, true),
        (Simple, 2, false),
        (Linear, 2, false),
        (Snake, 0, true),
        (Snake, 2, false),
    }

    #[test]
    fn only_registered_continuous_patterns_are_continuous() -> error::Result<()> {
        for entry in registry::REGISTRY {
            let curve = NodeGosperCurve::new(2, entry.pattern, &BoundingBox::centered(1.0))?;
            let (cells, centres) = island(&curve);
            let sorted = curve.construct(&centres)?;
            let jumps = sorted
                .indices()
                .windows(2)
                .filter(|w| cells[w[0] as usize].distance(&cells[w[1] as usize]) != 1)
                .count();
            assert_eq!(jumps == 0, entry.continuous, "{}: {jumps} jumps", entry.key);
        }
        Ok(())
    }

    #[test]
    fn precise_spans_all_base7_codes() -> error::Result<()> {
        // Inside the island the precise codes are exactly the base-7 strings.
        let curve = NodeGosperCurve::new(2, Pattern::Precise, &BoundingBox::centered(1.0))?;
        let (_, centres) = island(&curve);
        let sorted = curve.construct(&centres)?;
        assert_eq!(sorted.codes().first(), Some(&0));
        assert_eq!(sorted.codes().last(), Some(&0o666));
        Ok(())
    }
}
