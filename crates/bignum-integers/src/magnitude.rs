//! Unsigned digit-vector arithmetic.
//!
//! A magnitude is a slice of decimal digits stored least significant first.
//! Every function here expects its inputs without most-significant zero digits
//! and returns its output in the same form, so the empty slice is zero.

use std::cmp::Ordering;

/// Strips most-significant zero digits.
pub(crate) fn trim(digits: &mut Vec<u8>) {
    while digits.last() == Some(&0) {
        digits.pop();
    }
}

/// Compares two magnitudes: longer is larger, equal lengths compare from the top digit.
pub(crate) fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Column-wise addition with carry.
pub(crate) fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let max_len = a.len().max(b.len());
    let mut result = Vec::with_capacity(max_len + 1);
    let mut carry = 0u8;

    for i in 0..max_len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        let sum = x + y + carry;
        result.push(sum % 10);
        carry = sum / 10;
    }

    if carry > 0 {
        result.push(carry);
    }

    result
}

/// Column-wise subtraction with borrow.
///
/// `larger` must not be smaller than `smaller`.
pub(crate) fn sub(larger: &[u8], smaller: &[u8]) -> Vec<u8> {
    debug_assert_ne!(cmp(larger, smaller), Ordering::Less);

    let mut result = Vec::with_capacity(larger.len());
    let mut borrow = 0u8;

    for (i, &digit) in larger.iter().enumerate() {
        let take = smaller.get(i).copied().unwrap_or(0) + borrow;
        if digit >= take {
            result.push(digit - take);
            borrow = 0;
        } else {
            result.push(digit + 10 - take);
            borrow = 1;
        }
    }

    trim(&mut result);
    result
}

/// Multiplies by `10^places`.
pub(crate) fn shift(digits: &[u8], places: usize) -> Vec<u8> {
    if digits.is_empty() {
        return Vec::new();
    }
    let mut shifted = vec![0; places];
    shifted.extend_from_slice(digits);
    shifted
}

/// Divides by two, discarding the remainder.
pub(crate) fn halve(digits: &[u8]) -> Vec<u8> {
    let mut result = vec![0; digits.len()];
    let mut remainder = 0u8;

    for i in (0..digits.len()).rev() {
        let current = remainder * 10 + digits[i];
        result[i] = current / 2;
        remainder = current % 2;
    }

    trim(&mut result);
    result
}

/// Schoolbook multiplication by repeated addition.
///
/// For the digit `d` of `b` at position `i`, `a` is added to itself `d` times
/// and the partial product is shifted by `i` places before accumulating.
pub(crate) fn mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut product = Vec::new();

    for (place, &digit) in b.iter().enumerate() {
        let mut partial = Vec::new();
        for _ in 0..digit {
            partial = add(&partial, a);
        }
        product = add(&product, &shift(&partial, place));
    }

    product
}

/// Truncated quotient found by binary search between powers of ten.
///
/// `divisor` must be nonzero.
pub(crate) fn div(dividend: &[u8], divisor: &[u8]) -> Vec<u8> {
    debug_assert!(!divisor.is_empty());

    if cmp(dividend, divisor) == Ordering::Less {
        return Vec::new();
    }

    // Smallest k with divisor * 10^k > dividend; the quotient lies in [10^(k-1), 10^k).
    let mut scaled = divisor.to_vec();
    let mut exponent = 0usize;
    while cmp(&scaled, dividend) != Ordering::Greater {
        scaled = shift(&scaled, 1);
        exponent += 1;
    }

    let one = [1u8];
    let mut lower = shift(&one, exponent - 1);
    let mut upper = shift(&one, exponent);
    log::trace!(
        "dividing {} by {} digits, quotient bracket 10^{}..10^{}",
        dividend.len(),
        divisor.len(),
        exponent - 1,
        exponent
    );

    while cmp(&sub(&upper, &lower), &one) == Ordering::Greater {
        let middle = halve(&add(&lower, &upper));
        if cmp(&mul(divisor, &middle), dividend) == Ordering::Greater {
            upper = middle;
        } else {
            lower = middle;
        }
    }

    lower
}

/// Remainder `dividend - divisor * (dividend / divisor)`.
///
/// `divisor` must be nonzero.
pub(crate) fn rem(dividend: &[u8], divisor: &[u8]) -> Vec<u8> {
    let quotient = div(dividend, divisor);
    sub(dividend, &mul(divisor, &quotient))
}
