//! Property-based tests for tabulation and comparison.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tabula_core::Expr;
    use tabula_eval::build_evaluator;
    use tabula_eval::modes::{big_int, int};

    use crate::compare::compare_tables;
    use crate::range::{CoordBox, InclusiveRange};
    use crate::table::{count_absent, shape, tabulate, tabulate_with_config, TabulateConfig};

    fn small_range() -> impl Strategy<Value = InclusiveRange> {
        (any::<i32>(), 0i32..6).prop_map(|(from, span)| {
            let from = from.min(i32::MAX - span);
            InclusiveRange::new(from, from + span).unwrap()
        })
    }

    fn small_box() -> impl Strategy<Value = CoordBox> {
        (small_range(), small_range(), small_range()).prop_map(|(x, y, z)| CoordBox::new(x, y, z))
    }

    fn constant_expr() -> impl Strategy<Value = Expr> {
        let leaf = any::<i32>().prop_map(Expr::constant);
        leaf.prop_recursive(4, 16, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(|arg| Expr::unary("-", arg)),
                (prop::sample::select(vec!["+", "-", "*", "/"]), inner.clone(), inner)
                    .prop_map(|(op, left, right)| Expr::binary(op, left, right)),
            ]
        })
    }

    proptest! {
        #[test]
        fn shape_matches_box(expr in constant_expr(), bounds in small_box()) {
            let mode = int();
            let evaluator = build_evaluator(&expr, &mode).unwrap();
            let table = tabulate(&evaluator, &mode, &bounds);
            prop_assert_eq!(shape(&table), bounds.shape());
            prop_assert!(table.iter().flatten().all(|row| row.len() == bounds.z.len()));
        }

        // Dividing by (y - k) faults exactly on the plane y == k

        #[test]
        fn division_by_zero_is_local(bounds in small_box(), pick in 0usize..6) {
            let k = bounds.y.iter().nth(pick % bounds.y.len()).unwrap();
            let expr = Expr::binary(
                "/",
                Expr::binary("+", Expr::variable("x"), Expr::variable("z")),
                Expr::binary("-", Expr::variable("y"), Expr::constant(k)),
            );
            let mode = big_int();
            let evaluator = build_evaluator(&expr, &mode).unwrap();
            let table = tabulate(&evaluator, &mode, &bounds);

            for (i, plane) in table.iter().enumerate() {
                for (j, row) in plane.iter().enumerate() {
                    for (l, cell) in row.iter().enumerate() {
                        let (x, y, z) = bounds.coordinate((i, j, l));
                        if y == i64::from(k) {
                            prop_assert!(cell.is_none());
                        } else {
                            let want = (x + z) / (y - i64::from(k));
                            prop_assert_eq!(cell.as_ref().and_then(tabula_integers::Integer::to_i64), Some(want));
                        }
                    }
                }
            }
            prop_assert_eq!(count_absent(&table), bounds.x.len() * bounds.z.len());
        }

        #[test]
        fn parallel_tabulation_is_sequential(expr in constant_expr(), bounds in small_box()) {
            let expr = Expr::binary("*", expr, Expr::variable("y"));
            let mode = int();
            let evaluator = build_evaluator(&expr, &mode).unwrap();
            let parallel = tabulate_with_config(&evaluator, &mode, &bounds, &TabulateConfig { parallel_threshold: 0 });
            let sequential = tabulate_with_config(&evaluator, &mode, &bounds, &TabulateConfig::sequential());
            prop_assert_eq!(compare_tables(&sequential, &parallel), Ok(()));
        }
    }
}
