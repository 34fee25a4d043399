// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! Engine-wide properties: null propagation, broadcast equivalence,
//! transcendental accuracy against exactly known values, determinism and
//! pre-flight errors.

mod common;

use rand::Rng;

use colbinop::utils::{ulp_distance_f32, ulp_distance_f64};
use colbinop::{
    BinaryOperator, BinopError, Bitmask, Column, DataType, OperandShape, OperatorClass, Scalar,
    TimeUnit, evaluate,
};
use common::{random_column, random_column_in, random_timestamps, rng};

/// Operators applicable to two `Int32` columns, with an output type each accepts.
fn int_operators() -> Vec<(BinaryOperator, DataType)> {
    BinaryOperator::ALL
        .iter()
        .map(|&op| (op, DataType::Int64))
        .collect()
}

#[test]
fn null_propagation_every_operator() {
    let mut rng = rng(100);
    let lhs = random_column::<i32>(&mut rng, 500);
    let rhs = random_column::<i32>(&mut rng, 500);
    for (op, out_type) in int_operators() {
        let out = evaluate(&lhs, &rhs, op, out_type).unwrap();
        assert_eq!(out.len(), 500);
        for i in 0..500 {
            assert_eq!(
                out.is_valid(i),
                lhs.is_valid(i) && rhs.is_valid(i),
                "{op} index {i}"
            );
        }
    }
}

#[test]
fn null_propagation_with_null_scalar() {
    let mut rng = rng(101);
    let lhs = random_column::<f64>(&mut rng, 64);
    let rhs = Scalar::null(DataType::Float64);
    for op in [BinaryOperator::Add, BinaryOperator::Pow, BinaryOperator::Less] {
        let out = evaluate(&lhs, &rhs, op, DataType::Float64).unwrap();
        assert_eq!(out.null_count(), 64);
    }
}

#[test]
fn null_divisor_never_surfaces() {
    // Null slots hold 0, which must not leak into valid outputs.
    let lhs = Column::from_slice(&[10i32, 20, 30]);
    let rhs = Column::from_options([Some(2i32), None, Some(3)]);
    let out = evaluate(&lhs, &rhs, BinaryOperator::Div, DataType::Int32).unwrap();
    assert_eq!(out.to_vec::<i32>(), vec![Some(5), None, Some(10)]);
}

#[test]
fn broadcast_equivalence() {
    let mut rng = rng(102);
    let col = random_column_in::<f32>(&mut rng, 1_000, -100.0, 100.0);
    let value = 7.25f32;
    let scalar = Scalar::from(value);
    let materialised = Column::from_slice(&vec![value; col.len()]);

    let out_type = DataType::Float64;
    for op in BinaryOperator::ALL {
        // Bit-pattern operators are undefined on floats.
        if matches!(op.class(), OperatorClass::Bitwise | OperatorClass::Shift) {
            continue;
        }
        let a = evaluate(&scalar, &col, op, out_type).unwrap();
        let b = evaluate(&materialised, &col, op, out_type).unwrap();
        assert_eq!(a.to_vec::<f64>().len(), b.to_vec::<f64>().len());
        for (x, y) in a.to_vec::<f64>().into_iter().zip(b.to_vec::<f64>()) {
            match (x, y) {
                (Some(x), Some(y)) => assert!(x == y || (x.is_nan() && y.is_nan()), "{op}"),
                (None, None) => {}
                _ => panic!("{op}: validity differs"),
            }
        }

        let c = evaluate(&col, &scalar, op, out_type).unwrap();
        let d = evaluate(&col, &materialised, op, out_type).unwrap();
        assert_eq!(c.null_mask, d.null_mask);
    }
}

#[test]
fn broadcast_equivalence_shifts() {
    let mut rng = rng(103);
    let col = random_column_in::<i64>(&mut rng, 1_000, -1_000_000, 1_000_000);
    let scalar = Scalar::from(5i8);
    let materialised = Column::from_slice(&[5i8; 1_000]);
    for op in [
        BinaryOperator::ShiftLeft,
        BinaryOperator::ShiftRight,
        BinaryOperator::ShiftRightUnsigned,
        BinaryOperator::BitwiseXor,
    ] {
        let a = evaluate(&col, &scalar, op, DataType::Int64).unwrap();
        let b = evaluate(&col, &materialised, op, DataType::Int64).unwrap();
        assert_eq!(a, b, "{op}");
    }
}

/// Evaluates `op` over a column and a broadcast scalar into `Float64`.
fn eval_f64(lhs: &Column, rhs: f64, op: BinaryOperator) -> Vec<f64> {
    let out = evaluate(lhs, &Scalar::from(rhs), op, DataType::Float64).unwrap();
    (0..out.len()).map(|i| out.get::<f64>(i).unwrap()).collect()
}

#[test]
fn pow_of_two_is_exact() {
    let exps: Vec<f64> = (-1022..=1023).map(|k| k as f64).collect();
    let out = evaluate(
        &Scalar::from(2.0f64),
        &Column::from_slice(&exps),
        BinaryOperator::Pow,
        DataType::Float64,
    )
    .unwrap();
    for (i, k) in (-1022i64..=1023).enumerate() {
        let want = f64::from_bits(((k + 1023) as u64) << 52);
        let got = out.get::<f64>(i).unwrap();
        assert!(ulp_distance_f64(got, want) <= 2, "2^{k}: got {got}");
    }
}

#[test]
fn pow_within_two_ulp_of_rounded_identities() {
    let mut rng = rng(104);
    let base: Vec<f64> = (0..10_000).map(|_| rng.gen_range(1.0e-3..1.0e3)).collect();
    let col = Column::from_slice(&base);

    let identities: [(f64, fn(f64) -> f64); 4] = [
        (2.0, |x| x * x),
        (0.5, f64::sqrt),
        (-1.0, |x| 1.0 / x),
        (1.0, |x| x),
    ];
    for (exp, reference) in identities {
        let out = eval_f64(&col, exp, BinaryOperator::Pow);
        for (x, got) in base.iter().zip(out) {
            let want = reference(*x);
            assert!(ulp_distance_f64(got, want) <= 2, "pow({x}, {exp}) = {got}, want {want}");
        }
    }
}

#[test]
fn atan2_within_two_ulp_of_exact_angles() {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    let mut rng = rng(105);
    let r: Vec<f64> = (0..10_000).map(|_| rng.gen_range(1.0e-3..1.0e3)).collect();
    let neg: Vec<f64> = r.iter().map(|v| -v).collect();
    let zeros = vec![0.0f64; r.len()];
    let (r, neg, zeros) = (
        Column::from_slice(&r),
        Column::from_slice(&neg),
        Column::from_slice(&zeros),
    );

    let cases = [
        (&r, &r, FRAC_PI_4),
        (&r, &neg, 3.0 * FRAC_PI_4),
        (&neg, &neg, -3.0 * FRAC_PI_4),
        (&neg, &r, -FRAC_PI_4),
        (&r, &zeros, FRAC_PI_2),
        (&zeros, &neg, PI),
        (&zeros, &r, 0.0),
    ];
    for (y, x, want) in cases {
        let out64 = evaluate(y, x, BinaryOperator::ATan2, DataType::Float64).unwrap();
        let out32 = evaluate(y, x, BinaryOperator::ATan2, DataType::Float32).unwrap();
        for i in 0..out64.len() {
            let got = out64.get::<f64>(i).unwrap();
            assert!(ulp_distance_f64(got, want) <= 2, "index {i}: {got}, want {want}");
            let got = out32.get::<f32>(i).unwrap();
            assert!(ulp_distance_f32(got, want as f32) <= 2, "index {i}: {got}, want {want}");
        }
    }
}

#[test]
fn atan2_is_odd_in_y() {
    let mut rng = rng(108);
    let y: Vec<f64> = (0..10_000).map(|_| rng.gen_range(-1.0e3..1.0e3)).collect();
    let x: Vec<f64> = (0..10_000).map(|_| rng.gen_range(-1.0e3..1.0e3)).collect();
    let neg_y: Vec<f64> = y.iter().map(|v| -v).collect();
    let x = Column::from_slice(&x);
    let pos = evaluate(&Column::from_slice(&y), &x, BinaryOperator::ATan2, DataType::Float64).unwrap();
    let neg = evaluate(&Column::from_slice(&neg_y), &x, BinaryOperator::ATan2, DataType::Float64).unwrap();
    for i in 0..pos.len() {
        let (p, n) = (pos.get::<f64>(i).unwrap(), neg.get::<f64>(i).unwrap());
        assert!(ulp_distance_f64(p, -n) <= 2, "index {i}: {p} vs {n}");
    }
}

#[test]
fn timestamp_resolution_is_normalised() {
    let mut rng = rng(106);
    let ms = random_timestamps(&mut rng, 200, TimeUnit::Milliseconds, 500);
    let s = random_timestamps(&mut rng, 200, TimeUnit::Seconds, 1);

    // Same ordering as converting the seconds column to milliseconds first.
    let s_as_ms = Column::new(
        colbinop::ColumnData::Timestamp(
            (0..s.len()).map(|i| s.get_timestamp(i).unwrap_or(0) * 1_000).collect(),
            TimeUnit::Milliseconds,
        ),
        s.null_mask.clone(),
    )
    .unwrap();
    for op in [
        BinaryOperator::Less,
        BinaryOperator::Greater,
        BinaryOperator::LessEqual,
        BinaryOperator::GreaterEqual,
        BinaryOperator::Equal,
    ] {
        // Values under null slots differ between the two sides and are not compared.
        let a = evaluate(&ms, &s, op, DataType::Boolean).unwrap();
        let b = evaluate(&ms, &s_as_ms, op, DataType::Boolean).unwrap();
        assert_eq!(a.null_mask, b.null_mask, "{op}");
        assert_eq!(a.to_vec::<bool>(), b.to_vec::<bool>(), "{op}");
        let c = evaluate(&s, &ms, op, DataType::Boolean).unwrap();
        let d = evaluate(&s_as_ms, &ms, op, DataType::Boolean).unwrap();
        assert_eq!(c.null_mask, d.null_mask, "{op}");
        assert_eq!(c.to_vec::<bool>(), d.to_vec::<bool>(), "{op}");
    }
}

#[test]
fn evaluation_is_deterministic() {
    let mut rng = rng(107);
    let lhs = random_column::<u16>(&mut rng, 2_000);
    let rhs = random_column::<i64>(&mut rng, 2_000);
    for op in BinaryOperator::ALL {
        let first = evaluate(&lhs, &rhs, op, DataType::Int32).unwrap();
        let second = evaluate(&lhs, &rhs, op, DataType::Int32).unwrap();
        assert_eq!(first, second, "{op}");
    }
}

#[test]
fn large_outputs_match_small_chunks() {
    let n = colbinop::PARALLEL_THRESHOLD * 2 + 3;
    let values: Vec<i32> = (0..n as i32).collect();
    let col = Column::from_slice(&values);
    let out = evaluate(&col, &Scalar::from(3i32), BinaryOperator::Mod, DataType::Int32).unwrap();
    assert_eq!(out.len(), n);
    assert!((0..n).all(|i| out.get::<i32>(i) == Some(values[i] % 3)));
}

#[test]
fn empty_column_against_scalar() {
    let col = Column::from_slice::<f64>(&[]);
    let out = evaluate(&col, &Scalar::from(1.0f64), BinaryOperator::Add, DataType::Float64).unwrap();
    assert_eq!(out.len(), 0);
    assert_eq!(out.data_type(), DataType::Float64);
}

#[test]
fn shape_mismatch_errors() {
    let a = Column::from_slice(&[1i32, 2, 3]);
    let b = Column::from_slice(&[1i32, 2]);
    assert_eq!(
        evaluate(&a, &b, BinaryOperator::Add, DataType::Int32),
        Err(BinopError::ShapeMismatch {
            lhs: OperandShape::Column(3),
            rhs: OperandShape::Column(2)
        })
    );
    let s = Scalar::from(1i32);
    assert_eq!(
        evaluate(&s, &s, BinaryOperator::Add, DataType::Int32),
        Err(BinopError::ShapeMismatch {
            lhs: OperandShape::Scalar,
            rhs: OperandShape::Scalar
        })
    );
}

#[test]
fn unsupported_operand_errors() {
    let strs = Column::from_strs(&["a", "b"]);
    let ints = Column::from_slice(&[1i32, 2]);
    let ts = Column::from_timestamps(&[1, 2], TimeUnit::Seconds);
    let cases = [
        (&strs, &ints, BinaryOperator::Less),
        (&strs, &strs, BinaryOperator::Add),
        (&ts, &ints, BinaryOperator::Equal),
        (&ts, &ts, BinaryOperator::Sub),
        (&ints, &strs, BinaryOperator::ShiftLeft),
    ];
    for (l, r, op) in cases {
        assert!(
            matches!(
                evaluate(l, r, op, DataType::Boolean),
                Err(BinopError::UnsupportedOperandTypes { .. })
            ),
            "{op} {} {}",
            l.data_type(),
            r.data_type()
        );
    }
}

#[test]
fn invalid_output_errors() {
    let a = Column::from_slice(&[1i32, 2]);
    for out in [
        DataType::String,
        DataType::Timestamp(TimeUnit::Nanoseconds),
    ] {
        assert_eq!(
            evaluate(&a, &a, BinaryOperator::Add, out),
            Err(BinopError::InvalidOutputType { op: BinaryOperator::Add, out })
        );
    }
    assert!(matches!(
        evaluate(&a, &a, BinaryOperator::ShiftLeft, DataType::Float64),
        Err(BinopError::InvalidOutputType { .. })
    ));
}

#[test]
fn null_mask_length_is_checked_at_evaluation() {
    let mut a = Column::from_slice(&[1u8, 2, 3]);
    a.null_mask = Some(Bitmask::new_set_all(2, true));
    let b = Column::from_slice(&[1u8, 2, 3]);
    assert_eq!(
        evaluate(&a, &b, BinaryOperator::Add, DataType::UInt8),
        Err(BinopError::NullMaskLengthMismatch { expected: 3, found: 2 })
    );
}

#[test]
fn errors_render_readably() {
    let err = BinopError::UnsupportedOperandTypes {
        op: BinaryOperator::BitwiseAnd,
        lhs: DataType::Float32,
        rhs: DataType::Int8,
    };
    assert_eq!(
        err.to_string(),
        "Unsupported operand types: BITWISE_AND is not defined between 'float32' and 'int8'."
    );
}
