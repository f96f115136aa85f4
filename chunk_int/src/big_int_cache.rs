use lazy_static::*;

use crate::BigInt;
use crate::big_int_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInt::from_raw(vec![i as u64], false));
    // NEG_CACHE[0] is canonical zero, zero never carries a sign
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInt::from_raw(vec![i as u64], i != 0));
    pub static ref ONE: BigInt = POS_CACHE[1].clone();
}
