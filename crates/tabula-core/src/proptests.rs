//! Property-based tests for expression folds and rendering.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{render, Expr};

    // Strategy for generating small trees over x, y, z
    fn expr() -> impl Strategy<Value = Expr> {
        let leaf = prop_oneof![
            any::<i32>().prop_map(Expr::constant),
            prop::sample::select(vec!["x", "y", "z"]).prop_map(Expr::variable),
        ];
        leaf.prop_recursive(6, 48, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(|arg| Expr::unary("-", arg)),
                (prop::sample::select(vec!["+", "-", "*", "/"]), inner.clone(), inner)
                    .prop_map(|(op, left, right)| Expr::binary(op, left, right)),
            ]
        })
    }

    proptest! {
        #[test]
        fn rendering_is_balanced(e in expr()) {
            let text = render(&e);
            let open = text.chars().filter(|&c| c == '(').count();
            let close = text.chars().filter(|&c| c == ')').count();
            prop_assert_eq!(open, close);
            // One pair of parentheses per operation node
            let leaves = e.fold(|_| 1usize, |_| 1, |_, a| a, |_, l, r| l + r);
            prop_assert_eq!(open, e.size() - leaves);
        }

        #[test]
        fn depth_bounded_by_size(e in expr()) {
            prop_assert!(e.depth() <= e.size());
            prop_assert!(e.depth() >= 1);
        }

        #[test]
        fn shallow_and_recursive_folds_agree_on_size(e in expr()) {
            let via_visit = e.visit(
                |_| 1,
                |_| 1,
                |_, arg| arg.size() + 1,
                |_, left, right| left.size() + right.size() + 1,
            );
            prop_assert_eq!(via_visit, e.size());
        }

        #[test]
        fn clone_is_structurally_equal(e in expr()) {
            let copy = e.clone();
            prop_assert_eq!(render(&copy), render(&e));
            prop_assert_eq!(copy, e);
        }
    }
}
