//! # BigInt
//! Arbitrary-precision signed integers stored as a sign flag and a little-endian
//! vector of 64-bit chunks. Every operation returns a fresh value.
//! # Example
//! ```
//! use chunk_int::BigInt;
//!
//! let a: BigInt = "10000000000000000000000".parse().unwrap();
//! let b = BigInt::from(900000000000_u64);
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {:#x}", &a << 10);
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display, LowerHex, UpperHex};
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem,
    Shl,
    Neg,
};
use std::str::FromStr;

use log::{debug, trace};

use crate::big_int_cache::*;
use crate::big_int_constants::*;
use crate::error::{BigIntError, BigIntResult};

#[derive(Debug, Clone)]
pub struct BigInt {
    negative: bool,
    // little-endian, len >= 1, no trailing zero chunks except a lone zero
    mag: Vec<u64>,
}

// normalization helpers
impl BigInt {
    fn trim(mag: &mut Vec<u64>) {
        while mag.len() > 1 && mag.last() == Some(&0) {
            mag.pop();
        }
        if mag.is_empty() {
            mag.push(0);
        }
    }

    #[inline(always)]
    fn chunk_at(mag: &[u64], index: usize) -> u64 {
        mag.get(index).copied().unwrap_or(0)
    }
}

// construction
impl BigInt {
    /// Builds a value without normalizing, `mag` must already be canonical.
    pub(crate) fn from_raw(mag: Vec<u64>, negative: bool) -> Self {
        BigInt { negative, mag }
    }

    fn new(mut mag: Vec<u64>, negative: bool) -> Self {
        BigInt::trim(&mut mag);
        let negative = negative && !(mag.len() == 1 && mag[0] == 0);
        BigInt { negative, mag }
    }

    pub fn zero() -> Self {
        POS_CACHE[0].clone()
    }

    /// Single-chunk value with the given sign. A zero `value` is never negative.
    pub fn from_u64(value: u64, negative: bool) -> Self {
        BigInt::value_of(value, negative)
    }

    /// Injects a little-endian chunk sequence directly as the magnitude.
    ///
    /// Trailing zero chunks are stripped and an empty sequence is read as zero.
    pub fn from_chunks(chunks: Vec<u64>, negative: bool) -> Self {
        BigInt::new(chunks, negative)
    }

    fn value_of(val: u64, negative: bool) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            if negative {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            }
        } else {
            BigInt::from_raw(vec![val], negative)
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u64, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

// accessors
impl BigInt {
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.mag.len() == 1 && self.mag[0] == 0
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// The magnitude, least significant chunk first.
    pub fn chunks(&self) -> &[u64] {
        &self.mag
    }

    /// Returns the chunk at `index`, or 0 past the end of the magnitude.
    pub fn get_bits(&self, index: usize) -> u64 {
        BigInt::chunk_at(&self.mag, index)
    }

    /// Tests bit `n` of the magnitude; the sign is ignored.
    pub fn is_bit_set(&self, n: usize) -> bool {
        let chunk = self.get_bits(n / CHUNK_BITS as usize);
        (chunk >> (n % CHUNK_BITS as usize)) & 1 == 1
    }

    /// Number of significant bits in the magnitude, 0 for zero.
    pub fn bit_len(&self) -> usize {
        let top = self.mag[self.mag.len() - 1];
        (self.mag.len() - 1) * CHUNK_BITS as usize + (CHUNK_BITS - top.leading_zeros()) as usize
    }

    pub fn abs(&self) -> BigInt {
        BigInt::from_raw(self.mag.clone(), false)
    }
}

// comparison
impl BigInt {
    fn compare_mag(x: &[u64], y: &[u64]) -> Ordering {
        if x.len() != y.len() {
            return x.len().cmp(&y.len());
        }
        for (a, b) in x.iter().rev().zip(y.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }

    /// Compares magnitudes only, ignoring both signs.
    pub fn compare_magnitudes(&self, rhs: &BigInt) -> Ordering {
        BigInt::compare_mag(&self.mag, &rhs.mag)
    }

    pub fn compare(&self, rhs: &BigInt) -> Ordering {
        match (self.negative, rhs.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.compare_magnitudes(rhs),
            // the larger negative magnitude is the smaller value
            (true, true) => self.compare_magnitudes(rhs).reverse(),
        }
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.mag.hash(state);
    }
}

macro_rules! forward_binop {
    ($imp: ident, $method: ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

macro_rules! forward_assign {
    ($imp: ident, $method: ident, $op: ident) => {
        impl $imp<BigInt> for BigInt {
            fn $method(&mut self, rhs: BigInt) {
                *self = (&*self).$op(&rhs);
            }
        }

        impl $imp<&BigInt> for BigInt {
            fn $method(&mut self, rhs: &BigInt) {
                *self = (&*self).$op(rhs);
            }
        }
    };
}

// addition
impl BigInt {
    /// Grade-school addition, the result has one more chunk than the longer operand when the last carry is set.
    fn add_mag(x: &[u64], y: &[u64]) -> Vec<u64> {
        let len = x.len().max(y.len());
        let mut result = Vec::with_capacity(len + 1);
        let mut carry: u128 = 0;
        let mut i = 0;
        while i < len || carry != 0 {
            let sum = BigInt::chunk_at(x, i) as u128 +
                      BigInt::chunk_at(y, i) as u128 +
                      carry;
            result.push(sum as u64);
            carry = sum >> CHUNK_BITS;
            i += 1;
        }
        result
    }

    /// `|self| + |rhs|`, always non-negative.
    pub fn add_magnitudes(&self, rhs: &BigInt) -> BigInt {
        BigInt::new(BigInt::add_mag(&self.mag, &rhs.mag), false)
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> Self::Output {
        if self.negative == rhs.negative {
            return BigInt::new(BigInt::add_mag(&self.mag, &rhs.mag), self.negative);
        }

        // equal magnitudes cancel and `new` clears the sign of the zero
        match self.compare_magnitudes(rhs) {
            Ordering::Less => BigInt::new(BigInt::sub_mag(&rhs.mag, &self.mag), rhs.negative),
            _ => BigInt::new(BigInt::sub_mag(&self.mag, &rhs.mag), self.negative),
        }
    }
}
forward_binop!(Add, add);
forward_assign!(AddAssign, add_assign, add);

// negation
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// subtraction
impl BigInt {
    /// Chunk-wise subtraction with borrow, requires `|big| >= |little|`.
    fn sub_mag(big: &[u64], little: &[u64]) -> Vec<u64> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = false;
        for (i, &chunk) in big.iter().enumerate() {
            let (diff, under) = chunk.overflowing_sub(BigInt::chunk_at(little, i));
            let (diff, borrowed) = diff.overflowing_sub(borrow as u64);
            result.push(diff);
            borrow = under || borrowed;
        }
        debug_assert!(!borrow, "subtrahend magnitude exceeds minuend");
        BigInt::trim(&mut result);
        result
    }

    /// `|self| - |rhs|`, fails when `|rhs| > |self|`.
    pub fn subtract_magnitudes(&self, rhs: &BigInt) -> BigIntResult<BigInt> {
        if self.compare_magnitudes(rhs).is_lt() {
            debug!("rejected magnitude subtraction with a larger subtrahend");
            return Err(BigIntError::InvalidOperation {
                operation: "subtract_magnitudes",
                reason: "subtrahend magnitude exceeds minuend",
            });
        }
        Ok(BigInt::new(BigInt::sub_mag(&self.mag, &rhs.mag), false))
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        self + &(-rhs)
    }
}
forward_binop!(Sub, sub);
forward_assign!(SubAssign, sub_assign, sub);

// left shift
impl BigInt {
    fn shl_mag(mag: &[u64], n: u32) -> Vec<u64> {
        let n_chunks = (n / CHUNK_BITS) as usize;
        let n_bits = n % CHUNK_BITS;
        let mut result = vec![0u64; mag.len() + n_chunks + usize::from(n_bits > 0)];
        for (i, &chunk) in mag.iter().enumerate() {
            if n_bits > 0 {
                result[i + n_chunks + 1] |= chunk >> (CHUNK_BITS - n_bits);
            }
            result[i + n_chunks] |= chunk << n_bits;
        }
        result
    }

    /// Shifts the magnitude left by `n` bits. Only defined for non-negative values.
    pub fn shift_left(&self, n: u32) -> BigIntResult<BigInt> {
        if self.negative {
            debug!("rejected left shift of a negative value by {} bits", n);
            return Err(BigIntError::InvalidOperation {
                operation: "shift_left",
                reason: "cannot left shift a negative BigInt",
            });
        }
        Ok(BigInt::new(BigInt::shl_mag(&self.mag, n), false))
    }
}

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        match self.shift_left(n) {
            Ok(shifted) => shifted,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        (&self).shl(n)
    }
}

// multiplication
impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Shift-and-add over the set bits of `rhs`.
    fn mul(self, rhs: &BigInt) -> Self::Output {
        let mut product = vec![0u64];
        for i in 0..rhs.bit_len() {
            if rhs.is_bit_set(i) {
                product = BigInt::add_mag(&product, &BigInt::shl_mag(&self.mag, i as u32));
            }
        }
        BigInt::new(product, self.negative != rhs.negative)
    }
}
forward_binop!(Mul, mul);
forward_assign!(MulAssign, mul_assign, mul);

// division
impl BigInt {
    /// Shifts the magnitude right by one bit, keeping the sign.
    ///
    /// Odd negative values round toward zero.
    pub fn divide_by_two(&self) -> BigInt {
        let mut mag = vec![0u64; self.mag.len()];
        let mut carry = 0u64;
        for i in (0..self.mag.len()).rev() {
            let chunk = self.mag[i];
            mag[i] = (chunk >> 1) | (carry << (CHUNK_BITS - 1));
            carry = chunk & 1;
        }
        BigInt::new(mag, self.negative)
    }

    /// Truncating division, the quotient rounds toward zero.
    ///
    /// Binary searches `[0, |self|]` for the largest `q` with `q * |rhs| <= |self|`.
    pub fn divide(&self, rhs: &BigInt) -> BigIntResult<BigInt> {
        if rhs.is_zero() {
            debug!("rejected division of {} by zero", self);
            return Err(BigIntError::DivideByZero);
        }

        if rhs.compare_magnitudes(self).is_gt() {
            return Ok(BigInt::zero());
        }

        let dividend = self.abs();
        let divisor = rhs.abs();

        let mut low = BigInt::zero();
        let mut high = dividend.clone();
        let mut iterations = 0usize;
        while low < high {
            iterations += 1;
            // round up so that `low = mid` always makes progress
            let mid = (&(&low + &high) + &*ONE).divide_by_two();
            match (&mid * &divisor).compare_magnitudes(&dividend) {
                Ordering::Equal => {
                    low = mid;
                    break;
                }
                Ordering::Less => low = mid,
                Ordering::Greater => high = &mid - &*ONE,
            }
        }
        trace!("binary search division finished after {} iterations", iterations);

        Ok(BigInt::new(low.mag, self.negative != rhs.negative))
    }

    /// Quotient and remainder of truncating division.
    ///
    /// The remainder takes the sign of `self`, so `self == q * rhs + r` and `|r| < |rhs|`.
    pub fn div_rem(&self, rhs: &BigInt) -> BigIntResult<(BigInt, BigInt)> {
        let quotient = self.divide(rhs)?;
        let remainder = self - &(&quotient * rhs);
        Ok((quotient, remainder))
    }

    pub fn remainder(&self, rhs: &BigInt) -> BigIntResult<BigInt> {
        self.div_rem(rhs).map(|(_, r)| r)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> Self::Output {
        match self.divide(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}
forward_binop!(Div, div);
forward_assign!(DivAssign, div_assign, div);

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> Self::Output {
        match self.remainder(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}
forward_binop!(Rem, rem);

// printing
impl BigInt {
    fn mag_to_hex(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        let mut s = String::with_capacity(self.mag.len() * HEX_DIGITS_PER_CHUNK);
        for chunk in self.mag.iter().rev() {
            for nibble in (0..HEX_DIGITS_PER_CHUNK).rev() {
                s.push(DIGITS[((chunk >> (nibble * 4)) & 0xf) as usize]);
            }
        }

        let digits = s.trim_start_matches('0');
        if digits.is_empty() {
            String::from("0")
        } else {
            digits.to_string()
        }
    }

    fn mag_to_dec(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        let mut current = self.mag.clone();
        let mut digits: Vec<char> = Vec::new();
        let radix = DEC_RADIX as u128;
        while !current.is_empty() {
            let mut remainder: u128 = 0;
            for chunk in current.iter_mut().rev() {
                let combined = (remainder << CHUNK_BITS) | *chunk as u128;
                *chunk = (combined / radix) as u64;
                remainder = combined % radix;
            }
            digits.push(DIGITS[remainder as usize]);

            while current.last() == Some(&0) {
                current.pop();
            }
        }
        trace!("rendered {} decimal digits from {} chunks", digits.len(), self.mag.len());

        digits.iter().rev().collect()
    }

    /// Lower-case hexadecimal with an optional leading `-`.
    pub fn to_hex(&self) -> String {
        let digits = self.mag_to_hex();
        if self.negative {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    /// Decimal with an optional leading `-`.
    pub fn to_dec(&self) -> String {
        let digits = self.mag_to_dec();
        if self.negative {
            format!("-{}", digits)
        } else {
            digits
        }
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.mag_to_dec())
    }
}

impl LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &self.mag_to_hex())
    }
}

impl UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &self.mag_to_hex().to_uppercase())
    }
}

// parsing
impl BigInt {
    fn split_sign(val: &str) -> (bool, &str) {
        if let Some(rest) = val.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = val.strip_prefix('+') {
            (false, rest)
        } else {
            (false, val)
        }
    }

    // mag = mag * radix + digit
    #[inline(always)]
    fn destructive_mul_add(mag: &mut Vec<u64>, radix: u64, digit: u64) {
        let mut carry = digit as u128;
        for x in mag.iter_mut() {
            let product = (*x as u128) * (radix as u128) + carry;
            *x = product as u64;
            carry = product >> CHUNK_BITS;
        }
        if carry != 0 {
            mag.push(carry as u64);
        }
    }

    fn parse_mag(digits: &str, radix: u32) -> BigIntResult<Vec<u64>> {
        if digits.is_empty() {
            debug!("rejected empty digit string");
            return Err(BigIntError::Empty);
        }

        let mut mag = vec![0u64];
        for c in digits.chars() {
            match c.to_digit(radix) {
                Some(d) => BigInt::destructive_mul_add(&mut mag, radix as u64, d as u64),
                None => {
                    debug!("rejected digit {:?} for radix {}", c, radix);
                    return Err(BigIntError::InvalidDigit { digit: c, radix });
                }
            }
        }
        Ok(mag)
    }

    /// Parses an optionally signed string of decimal or hexadecimal digits.
    pub fn from_str_radix(val: &str, radix: u32) -> BigIntResult<BigInt> {
        if radix != DEC_RADIX && radix != HEX_RADIX {
            debug!("rejected unsupported radix {}", radix);
            return Err(BigIntError::UnsupportedRadix(radix));
        }

        let (negative, digits) = BigInt::split_sign(val);
        Ok(BigInt::new(BigInt::parse_mag(digits, radix)?, negative))
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    /// Decimal, or hexadecimal when the digits carry a `0x` prefix.
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        let (negative, rest) = BigInt::split_sign(val);
        let mag = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            Some(hex) => BigInt::parse_mag(hex, HEX_RADIX)?,
            None => BigInt::parse_mag(rest, DEC_RADIX)?,
        };
        Ok(BigInt::new(mag, negative))
    }
}

#[test]
fn test_from() {
    let big = BigInt::from(12_i8);
    assert_eq!(big.mag, vec![12]);
    assert!(!big.negative);

    let big = BigInt::from(-100_i16);
    assert_eq!(big.mag, vec![100]);
    assert!(big.negative);

    let big = BigInt::from(u64::MAX);
    assert_eq!(big.mag, vec![u64::MAX]);

    let big = BigInt::from(i64::MIN);
    assert_eq!(big.mag, vec![1 << 63]);
    assert!(big.negative);

    let big = BigInt::from(-3_isize);
    assert_eq!(big, BigInt::from_u64(3, true));

    // zero never keeps a sign
    let big = BigInt::from_u64(0, true);
    assert!(!big.is_negative());
    assert_eq!(big, BigInt::default());
}

#[test]
fn test_from_chunks_normalizes() {
    let empty = BigInt::from_chunks(vec![], true);
    let single = BigInt::from_chunks(vec![0], false);
    let padded = BigInt::from_chunks(vec![0, 0, 0], true);
    assert_eq!(empty.chunks(), &[0]);
    assert_eq!(empty, single);
    assert_eq!(padded, single);
    assert!(!empty.is_negative());
    assert!(!padded.is_negative());
    assert!(empty.is_zero());

    let five = BigInt::from_chunks(vec![5, 0, 0], true);
    assert_eq!(five.chunks(), &[5]);
    assert_eq!(five, BigInt::from(-5));
}

#[test]
fn test_clone_is_independent() {
    let a = BigInt::from_chunks(vec![1, 2], false);
    let mut b = a.clone();
    b += BigInt::from(1);
    assert_eq!(a.chunks(), &[1, 2]);
    assert_eq!(b.chunks(), &[2, 2]);
}

#[test]
fn test_get_bits() {
    let a = BigInt::from_chunks(vec![7, 9], true);
    assert_eq!(a.get_bits(0), 7);
    assert_eq!(a.get_bits(1), 9);
    assert_eq!(a.get_bits(2), 0);
    assert_eq!(a.get_bits(usize::MAX), 0);
}

#[test]
fn test_is_bit_set() {
    let a = BigInt::from_chunks(vec![0b101, 1 << 63], true);
    assert!(a.is_bit_set(0));
    assert!(!a.is_bit_set(1));
    assert!(a.is_bit_set(2));
    assert!(a.is_bit_set(127));
    assert!(!a.is_bit_set(126));
    assert!(!a.is_bit_set(128));
    assert!(!a.is_bit_set(10_000));
    assert!(!BigInt::zero().is_bit_set(0));
}

#[test]
fn test_bit_len() {
    assert_eq!(BigInt::zero().bit_len(), 0);
    assert_eq!(BigInt::from(1).bit_len(), 1);
    assert_eq!(BigInt::from(-255).bit_len(), 8);
    assert_eq!(BigInt::from_chunks(vec![0, 1], false).bit_len(), 65);
}

#[test]
fn test_signum_and_abs() {
    assert_eq!(BigInt::from(-9).signum(), -1);
    assert_eq!(BigInt::from(9).signum(), 1);
    assert_eq!(BigInt::zero().signum(), 0);
    assert_eq!(BigInt::from(-9).abs(), BigInt::from(9));
}

#[test]
fn test_add() {
    let sum = BigInt::from(5) + BigInt::from(3);
    assert_eq!(sum, BigInt::from(8));
    assert_eq!(sum.to_dec(), "8");

    let sum = BigInt::from(u64::MAX) + BigInt::from(1);
    assert_eq!(sum.chunks(), &[0, 1]);
    assert_eq!(sum.to_hex(), "10000000000000000");

    // carry runs through every chunk
    let a = BigInt::from_chunks(vec![u64::MAX, u64::MAX, u64::MAX], false);
    assert_eq!((&a + &BigInt::from(1)).chunks(), &[0, 0, 0, 1]);

    assert_eq!(BigInt::from(-5) + BigInt::from(3), BigInt::from(-2));
    assert_eq!(BigInt::from(5) + BigInt::from(-3), BigInt::from(2));
    assert_eq!(BigInt::from(-5) + BigInt::from(-3), BigInt::from(-8));

    let zero = BigInt::from(-5) + BigInt::from(5);
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
}

#[test]
fn test_add_magnitudes() {
    let a = BigInt::from(-5);
    let b = BigInt::from(3);
    assert_eq!(a.add_magnitudes(&b), BigInt::from(8));
}

#[test]
fn test_sub() {
    let diff = BigInt::from(5) - BigInt::from(8);
    assert_eq!(diff, BigInt::from_u64(3, true));
    assert_eq!(diff.to_dec(), "-3");

    // borrow runs across zero chunks
    let a = BigInt::from_chunks(vec![0, 0, 1], false);
    let diff = &a - &BigInt::from(1);
    assert_eq!(diff.chunks(), &[u64::MAX, u64::MAX]);

    let a = BigInt::from_chunks(vec![3, 1], false);
    let b = BigInt::from_chunks(vec![5], false);
    assert_eq!((&a - &b).chunks(), &[u64::MAX - 1]);

    assert_eq!(BigInt::from(-5) - BigInt::from(-8), BigInt::from(3));
    assert_eq!(BigInt::from(-5) - BigInt::from(8), BigInt::from(-13));

    let zero = BigInt::from(7) - BigInt::from(7);
    assert_eq!(zero.chunks(), &[0]);
    assert!(!zero.is_negative());
}

#[test]
fn test_subtract_magnitudes() {
    let a = BigInt::from_chunks(vec![0, 1], true);
    let b = BigInt::from(1);
    assert_eq!(a.subtract_magnitudes(&b).unwrap().chunks(), &[u64::MAX]);
    assert!(matches!(
        b.subtract_magnitudes(&a),
        Err(BigIntError::InvalidOperation { .. })
    ));
}

#[test]
fn test_neg() {
    let zero = -BigInt::zero();
    assert!(!zero.is_negative());
    assert_eq!(zero, BigInt::zero());

    let a = BigInt::from(42);
    assert_eq!(-(-&a), a);
    assert_eq!((-&a).to_dec(), "-42");
}

#[test]
fn test_shl() {
    assert_eq!(BigInt::from(0) << 5, BigInt::from(0));
    assert_eq!((BigInt::from(0) << 200).chunks(), &[0]);
    assert_eq!(BigInt::from(5) << 0, BigInt::from(5));
    assert_eq!((BigInt::from(1) << 64).chunks(), &[0, 1]);
    assert_eq!((BigInt::from(u64::MAX) << 1).chunks(), &[u64::MAX - 1, 1]);
    assert_eq!((BigInt::from(3) << 127).chunks(), &[0, 1 << 63, 1]);

    let a = BigInt::from_chunks(vec![1 << 63, 1 << 63], false);
    assert_eq!((&a << 1).chunks(), &[0, 1, 1]);
}

#[test]
fn test_shl_negative() {
    assert_eq!(
        BigInt::from(-1).shift_left(3),
        Err(BigIntError::InvalidOperation {
            operation: "shift_left",
            reason: "cannot left shift a negative BigInt",
        })
    );
}

#[test]
#[should_panic(expected = "cannot left shift a negative BigInt")]
fn test_shl_operator_panics_on_negative() {
    let _ = BigInt::from(-1) << 3;
}

#[test]
fn test_mul() {
    let product = BigInt::from(7) * BigInt::from(0);
    assert_eq!(product, BigInt::from(0));
    assert_eq!(product.to_dec(), "0");
    assert!(!(BigInt::from(-7) * BigInt::from(0)).is_negative());

    assert_eq!(BigInt::from(-6) * BigInt::from(7), BigInt::from(-42));
    assert_eq!(BigInt::from(-6) * BigInt::from(-7), BigInt::from(42));

    // (2^64 - 1)^2 = 2^128 - 2^65 + 1
    let max = BigInt::from(u64::MAX);
    assert_eq!((&max * &max).chunks(), &[1, u64::MAX - 1]);

    let a: BigInt = "10000000000000000".parse().unwrap();
    let b: BigInt = "3001".parse().unwrap();
    let result: BigInt = "30010000000000000000".parse().unwrap();
    assert_eq!(result, &a * &b);
    assert_eq!(result, b * a);

    let mut c = BigInt::from(3);
    c *= BigInt::from(-4);
    assert_eq!(c, BigInt::from(-12));
}

#[test]
fn test_divide_by_two() {
    assert_eq!(BigInt::from_chunks(vec![0, 1], false).divide_by_two().chunks(), &[1 << 63]);
    assert_eq!(BigInt::from(1).divide_by_two().chunks(), &[0]);
    assert_eq!(BigInt::from(-5).divide_by_two(), BigInt::from(-2));
    assert!(!BigInt::from(-1).divide_by_two().is_negative());
    assert_eq!(
        BigInt::from_chunks(vec![3, 3], false).divide_by_two().chunks(),
        &[(1 << 63) | 1, 1]
    );
}

#[test]
fn test_div() {
    assert_eq!(BigInt::from(20) / BigInt::from(7), BigInt::from(2));
    assert_eq!(BigInt::from(-20) / BigInt::from(7), BigInt::from(-2));
    assert_eq!(BigInt::from(20) / BigInt::from(-7), BigInt::from(-2));
    assert_eq!(BigInt::from(-20) / BigInt::from(-7), BigInt::from(2));
    assert_eq!(BigInt::from(7) / BigInt::from(20), BigInt::from(0));
    assert_eq!(BigInt::from(21) / BigInt::from(7), BigInt::from(3));
    assert_eq!(BigInt::from(0) / BigInt::from(7), BigInt::from(0));

    let q = BigInt::from(-6) / BigInt::from(7);
    assert!(q.is_zero());
    assert!(!q.is_negative());

    let a = BigInt::from(1) << 128;
    let b = BigInt::from(1) << 64;
    assert_eq!((&a / &b).chunks(), &[0, 1]);

    let square = BigInt::from_chunks(vec![1, u64::MAX - 1], false);
    assert_eq!((&square / &BigInt::from(u64::MAX)).chunks(), &[u64::MAX]);

    let a: BigInt = "120".parse().unwrap();
    let b: BigInt = "13".parse().unwrap();
    assert_eq!(a / b, BigInt::from(9));

    let a: BigInt = "10000000000000000000000000000000000".parse().unwrap();
    let b: BigInt = "1000".parse().unwrap();
    let c: BigInt = "10000000000000000000000000000000".parse().unwrap();
    assert_eq!(a / b, c);

    let mut d = BigInt::from(100);
    d /= BigInt::from(9);
    assert_eq!(d, BigInt::from(11));
}

#[test]
fn test_div_by_zero() {
    assert_eq!(
        BigInt::from(100).divide(&BigInt::from(0)),
        Err(BigIntError::DivideByZero)
    );
    assert_eq!(
        BigInt::from(100).div_rem(&BigInt::from_chunks(vec![], false)),
        Err(BigIntError::DivideByZero)
    );
}

#[test]
#[should_panic(expected = "Divide by 0")]
fn test_div_operator_panics_on_zero() {
    let _ = BigInt::from(100) / BigInt::from(0);
}

#[test]
fn test_div_rem() {
    let (q, r) = BigInt::from(-20).div_rem(&BigInt::from(7)).unwrap();
    assert_eq!(q, BigInt::from(-2));
    assert_eq!(r, BigInt::from(-6));

    assert_eq!(BigInt::from(20) % BigInt::from(-7), BigInt::from(6));
    assert_eq!(BigInt::from(21) % BigInt::from(7), BigInt::from(0));

    let a: BigInt = "12".parse().unwrap();
    let b: BigInt = "8".parse().unwrap();
    assert_eq!(a % b, BigInt::from(4));
}

#[test]
fn test_compare() {
    assert_eq!(BigInt::from(-1).compare(&BigInt::from(1)), Ordering::Less);
    assert_eq!(BigInt::from(1).compare(&BigInt::from(-1)), Ordering::Greater);
    assert_eq!(BigInt::from(-10).compare(&BigInt::from(-3)), Ordering::Less);
    assert_eq!(BigInt::from(10).compare(&BigInt::from(3)), Ordering::Greater);
    assert_eq!(BigInt::from(3).compare(&BigInt::from(3)), Ordering::Equal);

    let wide = BigInt::from_chunks(vec![0, 1], false);
    assert!(wide > BigInt::from(u64::MAX));
    assert!(-&wide < BigInt::from_u64(u64::MAX, true));
    assert_eq!(
        BigInt::from(-5).compare_magnitudes(&BigInt::from(3)),
        Ordering::Greater
    );
    assert_eq!(
        BigInt::from_chunks(vec![], false).compare(&BigInt::from_chunks(vec![0], true)),
        Ordering::Equal
    );
}

#[test]
fn test_to_hex() {
    assert_eq!(BigInt::zero().to_hex(), "0");
    assert_eq!(BigInt::from_chunks(vec![], false).to_hex(), "0");
    assert_eq!(BigInt::from_chunks(vec![0], false).to_hex(), "0");
    assert_eq!(BigInt::from(255).to_hex(), "ff");
    assert_eq!(BigInt::from(-255).to_hex(), "-ff");
    assert_eq!(BigInt::from_chunks(vec![1, 1], false).to_hex(), "10000000000000001");
    assert_eq!(
        BigInt::from_chunks(vec![0xdead_beef, 0xabc], true).to_hex(),
        "-abc00000000deadbeef"
    );
}

#[test]
fn test_to_dec() {
    assert_eq!(BigInt::zero().to_dec(), "0");
    assert_eq!(BigInt::from_chunks(vec![], true).to_dec(), "0");
    assert_eq!(BigInt::from(-3).to_dec(), "-3");
    assert_eq!(BigInt::from(u64::MAX).to_dec(), "18446744073709551615");
    assert_eq!(
        BigInt::from_chunks(vec![0, 1], false).to_dec(),
        "18446744073709551616"
    );
    assert_eq!(
        BigInt::from_chunks(vec![0, 0, 1], true).to_dec(),
        "-340282366920938463463374607431768211456"
    );
}

#[test]
fn test_parse() {
    assert_eq!("-0".parse::<BigInt>().unwrap(), BigInt::zero());
    assert!(!"-0".parse::<BigInt>().unwrap().is_negative());
    assert_eq!("+0042".parse::<BigInt>().unwrap(), BigInt::from(42));
    assert_eq!("0x1f".parse::<BigInt>().unwrap(), BigInt::from(31));
    assert_eq!("-0XFF".parse::<BigInt>().unwrap(), BigInt::from(-255));
    assert_eq!(
        BigInt::from_str_radix("10000000000000000", 16).unwrap().chunks(),
        &[0, 1]
    );
    assert_eq!(
        BigInt::from_str_radix("-340282366920938463463374607431768211456", 10).unwrap(),
        BigInt::from_chunks(vec![0, 0, 1], true)
    );

    assert_eq!("".parse::<BigInt>(), Err(BigIntError::Empty));
    assert_eq!("-".parse::<BigInt>(), Err(BigIntError::Empty));
    assert_eq!("0x".parse::<BigInt>(), Err(BigIntError::Empty));
    assert_eq!(
        "12a".parse::<BigInt>(),
        Err(BigIntError::InvalidDigit { digit: 'a', radix: 10 })
    );
    assert_eq!(
        "--1".parse::<BigInt>(),
        Err(BigIntError::InvalidDigit { digit: '-', radix: 10 })
    );
    assert_eq!(BigInt::from_str_radix("17", 8), Err(BigIntError::UnsupportedRadix(8)));
}

#[test]
fn test_fmt() {
    let a = BigInt::from(-255);
    assert_eq!(format!("{}", a), "-255");
    assert_eq!(format!("{:x}", a), "-ff");
    assert_eq!(format!("{:#x}", a), "-0xff");
    assert_eq!(format!("{:X}", a), "-FF");
    assert_eq!(format!("{:>6}", a), "  -255");
    assert_eq!(format!("{:+}", BigInt::from(7)), "+7");
    assert_eq!(format!("{}", BigInt::zero()), "0");
}

#[test]
fn test_hash_matches_eq() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(BigInt::from_chunks(vec![], true));
    set.insert(BigInt::from_chunks(vec![0, 0], false));
    set.insert(BigInt::from(-0));
    assert_eq!(set.len(), 1);
}
