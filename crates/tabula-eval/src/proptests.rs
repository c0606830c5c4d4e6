//! Property-based tests for the standard modes and evaluator folding.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tabula_core::Expr;
    use tabula_integers::Integer;

    use crate::modes::{big_int, int};
    use crate::{build_evaluator, evaluate, ArithmeticError, EvalError};

    fn operator() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["+", "-", "*", "/"])
    }

    proptest! {
        // Where the exact result fits in 32 bits, both modes agree

        #[test]
        fn modes_agree_without_overflow(op in operator(), a in any::<i32>(), b in any::<i32>()) {
            let expr = Expr::binary(op, Expr::variable("x"), Expr::variable("y"));
            let wide = evaluate(&expr, &big_int(), a, b, 0);
            let narrow = evaluate(&expr, &int(), a, b, 0);
            match wide {
                Ok(exact) => match exact.to_i32() {
                    Some(fits) => prop_assert_eq!(narrow, Ok(fits)),
                    None => prop_assert!(narrow.is_ok()),
                },
                Err(error) => prop_assert_eq!(narrow, Err(error)),
            }
        }

        // Wraparound is the exact result reduced modulo 2^32

        #[test]
        fn int_mode_wraps_modulo_2_32(op in operator(), a in any::<i32>(), b in any::<i32>()) {
            let expr = Expr::binary(op, Expr::constant(a), Expr::constant(b));
            if let Ok(exact) = evaluate(&expr, &big_int(), 0, 0, 0) {
                let exact = exact.to_i64().expect("product of two i32 fits in i64");
                #[allow(clippy::cast_possible_truncation)]
                let wrapped = exact as i32;
                prop_assert_eq!(evaluate(&expr, &int(), 0, 0, 0), Ok(wrapped));
            }
        }

        #[test]
        fn swapping_subtraction_negates(a in any::<i32>(), b in any::<i32>()) {
            let mode = big_int();
            let xy = build_evaluator(&Expr::binary("-", Expr::variable("x"), Expr::variable("y")), &mode).unwrap();
            let yx = build_evaluator(&Expr::binary("-", Expr::variable("y"), Expr::variable("x")), &mode).unwrap();
            let (x, y, z) = (Integer::from(a), Integer::from(b), Integer::from(0));
            let forward = xy.apply(&x, &y, &z).unwrap();
            let backward = yx.apply(&x, &y, &z).unwrap();
            prop_assert_eq!(forward, -backward);
        }

        #[test]
        fn division_faults_only_on_zero(a in any::<i32>(), b in any::<i32>()) {
            let expr = Expr::binary("/", Expr::variable("x"), Expr::variable("y"));
            let result = evaluate(&expr, &int(), a, b, 0);
            if b == 0 {
                prop_assert_eq!(result, Err(EvalError::from(ArithmeticError::DivisionByZero)));
            } else {
                prop_assert!(result.is_ok());
            }
        }
    }
}
