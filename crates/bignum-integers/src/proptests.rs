//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use dashu::integer::IBig;
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{BigInteger, Sign};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -100_000i64..100_000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-100_000i64..=-1i64), (1i64..=100_000i64)]
    }

    // Decimal strings well beyond 64 bits, with an optional sign
    fn wide_decimal() -> impl Strategy<Value = String> {
        (any::<bool>(), "[1-9][0-9]{0,45}")
            .prop_map(|(negative, digits)| if negative { format!("-{digits}") } else { digits })
    }

    fn oracle(n: &BigInteger) -> IBig {
        n.to_string().parse().unwrap()
    }

    proptest! {
        #[test]
        fn native_round_trip_i64(n in any::<i64>()) {
            prop_assert_eq!(BigInteger::new(n).value::<i64>(), Ok(n));
        }

        #[test]
        fn native_round_trip_u128(n in any::<u128>()) {
            prop_assert_eq!(BigInteger::from(n).value::<u128>(), Ok(n));
        }

        #[test]
        fn native_round_trip_i16(n in any::<i16>()) {
            prop_assert_eq!(BigInteger::from(n).value::<i16>(), Ok(n));
        }

        #[test]
        fn string_round_trip(s in wide_decimal()) {
            prop_assert_eq!(s.parse::<BigInteger>().unwrap().to_string(), s);
        }

        #[test]
        fn ordering_is_total(a in any::<i64>(), b in any::<i64>()) {
            let (x, y) = (BigInteger::new(a), BigInteger::new(b));
            let relations = [x < y, x == y, x > y];
            prop_assert_eq!(relations.iter().filter(|&&r| r).count(), 1);
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }

        #[test]
        fn add_matches_native(a in any::<i64>(), b in any::<i64>()) {
            let sum = BigInteger::new(a) + BigInteger::new(b);
            prop_assert_eq!(sum.value::<i128>(), Ok(i128::from(a) + i128::from(b)));
        }

        #[test]
        fn sub_matches_native(a in any::<i64>(), b in any::<i64>()) {
            let diff = BigInteger::new(a) - BigInteger::new(b);
            prop_assert_eq!(diff.value::<i128>(), Ok(i128::from(a) - i128::from(b)));
        }

        #[test]
        fn mul_matches_native(a in small_int(), b in small_int()) {
            prop_assert_eq!(BigInteger::new(a) * BigInteger::new(b), a * b);
        }

        #[test]
        fn div_rem_match_native(a in (i64::MIN + 1)..=i64::MAX, b in non_zero_int()) {
            let (x, y) = (BigInteger::new(a), BigInteger::new(b));
            prop_assert_eq!(&x / &y, a / b);
            prop_assert_eq!(&x % &y, a % b);
        }

        #[test]
        fn additive_identity_and_inverse(s in wide_decimal()) {
            let a: BigInteger = s.parse().unwrap();
            prop_assert_eq!(&a + BigInteger::zero(), a.clone());
            let cancelled = &a + (-&a);
            prop_assert!(cancelled.is_zero());
            prop_assert_eq!(cancelled.sign(), Sign::Positive);
        }

        #[test]
        fn product_sign(a in wide_decimal(), b in wide_decimal()) {
            let (x, y): (BigInteger, BigInteger) = (a.parse().unwrap(), b.parse().unwrap());
            prop_assert_eq!((&x * &y).signum(), x.signum() * y.signum());
        }

        #[test]
        fn wide_arithmetic_matches_oracle(a in wide_decimal(), b in wide_decimal()) {
            let (x, y): (BigInteger, BigInteger) = (a.parse().unwrap(), b.parse().unwrap());
            let (ox, oy) = (oracle(&x), oracle(&y));
            prop_assert_eq!(oracle(&(&x + &y)), &ox + &oy);
            prop_assert_eq!(oracle(&(&x - &y)), &ox - &oy);
            prop_assert_eq!(oracle(&(&x * &y)), &ox * &oy);
        }

        #[test]
        fn wide_division_identity(a in wide_decimal(), b in wide_decimal()) {
            let (x, y): (BigInteger, BigInteger) = (a.parse().unwrap(), b.parse().unwrap());
            let q = &x / &y;
            let r = &x % &y;
            prop_assert_eq!(&y * &q + &r, x.clone());
            prop_assert!(r.abs() < y.abs());
            if !r.is_zero() {
                prop_assert_eq!(r.sign(), x.sign());
            }
            prop_assert_eq!(oracle(&q), oracle(&x) / oracle(&y));
        }
    }
}
