use super::*;
use crate::params::{MapParams, NoParams};
use crate::random::RandomSource;
use rexpr_value::{EvalErrorKind, ValueKind};

fn eval(expr: &Expr) -> EvalResult {
    expr.eval(&EvalEnv::empty())
}

fn eval_with(expr: &Expr, params: &MapParams) -> EvalResult {
    expr.eval(&EvalEnv::with_params(params))
}

fn c(value: impl Into<Value>) -> Expr {
    Expr::constant(value)
}

mod construction {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn binary_resolves_symbols() {
        let expr = Expr::binary("=", c(1_u64), c(2_u64)).unwrap();
        let Expr::Binary(binary) = &expr else {
            panic!("expected a binary node, got {expr:?}");
        };
        assert_eq!(binary.op(), BinaryOp::Eq);
        assert_eq!(binary.coercion(), Coercion::Strict);
        assert_eq!(binary.left().render(), "1");
        assert_eq!(binary.right().render(), "2");
    }

    #[test]
    fn binary_rejects_unknown_symbols() {
        let err = Expr::binary("bogus", c(1_u64), c(2_u64)).unwrap_err();
        assert_eq!(err.symbol, "bogus");
        assert_eq!(err.to_string(), "unsupported operator `bogus`");
    }

    #[test]
    fn binary_symbols_are_case_sensitive() {
        assert!(Expr::binary("like", c("a"), c("a")).is_err());
        assert!(Expr::binary("LIKE", c("a"), c("a")).is_ok());
    }

    #[test]
    fn binary_with_keeps_policy() {
        let expr = Expr::binary_with("+", Coercion::Numeric, c(1_u64), c(1_i64)).unwrap();
        let Expr::Binary(binary) = &expr else {
            panic!("expected a binary node, got {expr:?}");
        };
        assert_eq!(binary.coercion(), Coercion::Numeric);
    }

    #[test]
    fn concat_all_takes_delimiter_first() {
        let expr = Expr::concat_all([c("-"), c("a"), c("b")]).unwrap();
        let Expr::Concat(concat) = &expr else {
            panic!("expected a concat node, got {expr:?}");
        };
        assert_eq!(concat.delimiter().render(), "-");
        assert_eq!(concat.items().len(), 2);
    }

    #[test]
    fn concat_all_requires_delimiter() {
        assert_eq!(Expr::concat_all([]).unwrap_err(), MissingDelimiter);
    }

    #[test]
    fn not_operator_overload() {
        assert_eq!((!c(true)).render(), Expr::not(c(true)).render());
    }

    #[test]
    fn clone_and_debug_keep_structure() {
        let expr = Expr::binary("LIKE", Expr::param("p"), !c("x")).unwrap();
        let copy = expr.clone();
        assert_eq!(copy.render(), expr.render());
        assert_eq!(
            format!("{copy:?}"),
            format!("{expr:?}"),
        );
        assert!(format!("{expr:?}").starts_with("Binary(BinaryExpr { op: Like"));
    }

    #[test]
    fn deep_chains_drop_on_a_test_thread() {
        let mut expr = c(false);
        for _ in 0..100_000 {
            expr = Expr::not(expr);
        }
        drop(expr.clone());
        drop(expr);
    }

    #[test]
    fn trees_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expr>();
    }
}

mod evaluation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn constants_evaluate_to_themselves() {
        assert_eq!(eval(&c(7_u64)).unwrap(), Value::UInt(7));
        assert_eq!(eval(&c(())).unwrap(), Value::Null);
    }

    #[test]
    fn params_resolve_or_null() {
        let params = MapParams::new().with("name", "ada");
        assert_eq!(
            eval_with(&Expr::param("name"), &params).unwrap(),
            Value::string("ada")
        );
        assert_eq!(
            eval_with(&Expr::param("other"), &params).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn double_negation() {
        let expr = Expr::not(Expr::not(c(true)));
        assert_eq!(eval(&expr).unwrap(), Value::Bool(true));
    }

    #[test]
    fn not_over_non_bool_is_an_error() {
        let err = eval(&Expr::not(c(1_u64))).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                op: "NOT",
                expected: ValueKind::Bool,
                got: ValueKind::UInt,
            }
        );
        assert_eq!(err.notes, vec![EvalNote::new("in `NOT 1`")]);
    }

    #[test]
    fn not_over_unbound_param_is_an_error() {
        let err = eval(&Expr::not(Expr::param("flag"))).unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(err.notes, vec![EvalNote::new("in `NOT flag`")]);
    }

    #[test]
    fn errors_propagate_through_binary_nodes() {
        let expr = Expr::binary("==", c(true), Expr::not(c("x"))).unwrap();
        let err = eval(&expr).unwrap_err();
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn binary_null_equality() {
        let expr = Expr::binary("=", c(()), c(())).unwrap();
        assert_eq!(eval(&expr).unwrap(), Value::Bool(true));
    }

    #[test]
    fn binary_mismatch_uses_default() {
        let expr = Expr::binary("+", c("x"), c(1_u64)).unwrap();
        assert_eq!(eval(&expr).unwrap(), Value::Null);
        let expr = Expr::binary("==", c(1_u64), c(1_i64)).unwrap();
        assert_eq!(eval(&expr).unwrap(), Value::Bool(false));
    }

    #[test]
    fn binary_with_coercion() {
        let expr = Expr::binary_with("+", Coercion::Numeric, c(2_u64), c(-3_i64)).unwrap();
        assert_eq!(eval(&expr).unwrap(), Value::Int(-1));

        let strict = Expr::binary(">", c("10"), c(9_u64)).unwrap();
        let lenient = Expr::binary_with(">", Coercion::Lenient, c("10"), c(9_u64)).unwrap();
        assert_eq!(eval(&strict).unwrap(), Value::Bool(false));
        assert_eq!(eval(&lenient).unwrap(), Value::Bool(true));
    }

    #[test]
    fn coercion_does_not_touch_nulls() {
        let expr = Expr::binary_with("==", Coercion::Lenient, c(()), c("")).unwrap();
        assert_eq!(eval(&expr).unwrap(), Value::Bool(false));
    }

    #[test]
    fn concat_joins_rendered_items() {
        let expr = Expr::concat(c("-"), [c("a"), c("b")]);
        assert_eq!(eval(&expr).unwrap(), Value::string("a-b"));
    }

    #[test]
    fn concat_without_items_is_empty() {
        assert_eq!(eval(&Expr::concat(c("-"), [])).unwrap(), Value::string(""));
    }

    #[test]
    fn concat_renders_every_kind() {
        let expr = Expr::concat(
            c(", "),
            [c(true), c(1_u64), c(-2_i64), c(1.5), c(()), c("s")],
        );
        assert_eq!(
            eval(&expr).unwrap(),
            Value::string("true, 1, -2, 1.5, <nil>, s")
        );
    }

    #[test]
    fn concat_delimiter_may_be_any_expression() {
        let params = MapParams::new().with("sep", 0_u64);
        let expr = Expr::concat(Expr::param("sep"), [c("a"), c("b"), c("c")]);
        assert_eq!(eval_with(&expr, &params).unwrap(), Value::string("a0b0c"));
    }

    #[test]
    fn rand_is_in_unit_interval() {
        let expr = Expr::rand();
        for _ in 0..500 {
            let x = eval(&expr).unwrap().as_float().unwrap();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn rand_follows_the_environment_seed() {
        let expr = Expr::concat(c(" "), [Expr::rand(), Expr::rand()]);
        let a = RandomSource::seeded(3);
        let b = RandomSource::seeded(3);
        let env_a = EvalEnv::new(&NoParams, &a);
        let env_b = EvalEnv::new(&NoParams, &b);
        assert_eq!(expr.eval(&env_a).unwrap(), expr.eval(&env_b).unwrap());
    }
}

mod rendering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn binary_is_parenthesized() {
        let expr = Expr::binary("<>", Expr::param("a"), c(1_i64)).unwrap();
        assert_eq!(expr.render(), "(a != 1)");
    }

    #[test]
    fn nested_tree() {
        let expr = Expr::not(
            Expr::binary(
                "LIKE",
                Expr::concat(c("/"), [Expr::param("dir"), c("file")]),
                c("%file"),
            )
            .unwrap(),
        );
        assert_eq!(expr.render(), "NOT (CONCAT(/, dir, file) LIKE %file)");
    }

    #[test]
    fn leaves() {
        assert_eq!(c(()).render(), "<nil>");
        assert_eq!(c(2.0).render(), "2");
        assert_eq!(Expr::rand().render(), "RAND");
        assert_eq!(Expr::concat(c(","), []).render(), "CONCAT(,)");
    }

    #[test]
    fn display_matches_render() {
        let expr = Expr::binary("*", c(2_u64), Expr::rand()).unwrap();
        assert_eq!(format!("{expr}"), expr.render());
    }
}
