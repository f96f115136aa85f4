//! Chunk Int \
//! This crate provides:
//! - [`BigInt`]: Arbitrary-precision signed integers over little-endian 64-bit chunks, with exact
//!   addition, subtraction, multiplication, truncating division, left shift, comparison and
//!   decimal/hexadecimal conversion.
//! - [`BigIntError`]: the contract violations those operations can report.

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;

pub use big_int::BigInt;
pub use error::{BigIntError, BigIntResult};

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{BigInt, BigIntError};

    fn big_int() -> impl Strategy<Value = BigInt> {
        (any::<bool>(), prop::collection::vec(any::<u64>(), 0..4))
            .prop_map(|(negative, chunks)| BigInt::from_chunks(chunks, negative))
    }

    fn small_big_int() -> impl Strategy<Value = BigInt> {
        (any::<bool>(), prop::collection::vec(any::<u64>(), 0..3))
            .prop_map(|(negative, chunks)| BigInt::from_chunks(chunks, negative))
    }

    fn non_zero_divisor() -> impl Strategy<Value = BigInt> {
        (any::<bool>(), prop::collection::vec(any::<u64>(), 1..3))
            .prop_map(|(negative, chunks)| BigInt::from_chunks(chunks, negative))
            .prop_filter("divisor must be non-zero", |b| !b.is_zero())
    }

    fn to_i128(v: &BigInt) -> i128 {
        let mag = v.get_bits(0) as i128 | ((v.get_bits(1) as i128) << 64);
        if v.is_negative() { -mag } else { mag }
    }

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!((&a << 10).to_string(), "10240000000000000");
        assert_eq!(a.divide(&BigInt::zero()), Err(BigIntError::DivideByZero));
    }

    proptest! {
        #[test]
        fn negation_laws(a in big_int()) {
            prop_assert!((&a + &(-&a)).is_zero());
            prop_assert_eq!(-(-&a), a.clone());
            prop_assert!(!(-BigInt::zero()).is_negative());
        }

        #[test]
        fn compare_is_antisymmetric(a in big_int(), b in big_int()) {
            prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
            prop_assert_eq!(a.compare(&a), std::cmp::Ordering::Equal);
        }

        #[test]
        fn addition_is_associative_and_commutative(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&(&a - &b) + &b, a.clone());
        }

        #[test]
        fn multiplication_is_commutative(a in big_int(), b in big_int()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn shift_matches_power_of_two(a in small_big_int(), n in 0u32..200) {
            let a = a.abs();
            let power = BigInt::from(1).shift_left(n).unwrap();
            prop_assert_eq!(a.shift_left(n).unwrap(), &a * &power);
        }

        #[test]
        fn negative_shift_is_rejected(a in big_int(), n in 0u32..200) {
            prop_assume!(a.is_negative());
            let rejected = matches!(a.shift_left(n), Err(BigIntError::InvalidOperation { .. }));
            prop_assert!(rejected);
        }

        #[test]
        fn arithmetic_matches_i128(x in any::<i64>(), y in any::<i64>()) {
            let (a, b) = (BigInt::from(x), BigInt::from(y));
            let (x, y) = (x as i128, y as i128);
            prop_assert_eq!(to_i128(&(&a + &b)), x + y);
            prop_assert_eq!(to_i128(&(&a - &b)), x - y);
            prop_assert_eq!(to_i128(&(&a * &b)), x * y);
            prop_assert_eq!((&a * &b).to_dec(), (x * y).to_string());
            if y != 0 {
                prop_assert_eq!(to_i128(&(&a / &b)), x / y);
                prop_assert_eq!(to_i128(&(&a % &b)), x % y);
            }
        }

        #[test]
        fn formatting_matches_i128(x in any::<i128>()) {
            prop_assume!(x != i128::MIN);
            let a: BigInt = x.to_string().parse().unwrap();
            prop_assert_eq!(to_i128(&a), x);
            prop_assert_eq!(a.to_dec(), x.to_string());
            let hex = if x < 0 {
                format!("-{:x}", x.unsigned_abs())
            } else {
                format!("{:x}", x)
            };
            prop_assert_eq!(a.to_hex(), hex.clone());
            prop_assert_eq!(BigInt::from_str_radix(&hex, 16).unwrap(), a);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn division_is_truncating(a in small_big_int(), b in non_zero_divisor()) {
            let q = a.divide(&b).unwrap();
            prop_assert!((&q * &b).compare_magnitudes(&a).is_le());
            if !q.is_zero() {
                prop_assert_eq!(q.is_negative(), a.is_negative() != b.is_negative());
            }

            let (q2, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&q2, &q);
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
            prop_assert!(r.compare_magnitudes(&b).is_lt());
            prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        }
    }
}
