pub const DIGITS: [char; 16] = [
    '0' , '1' , '2' , '3' ,
    '4' , '5' , '6' , '7' ,
    '8' , '9' , 'a' , 'b' ,
    'c' , 'd' , 'e' , 'f' ,
];

/// Width of one magnitude chunk in bits.
pub const CHUNK_BITS: u32 = u64::BITS;

pub const HEX_DIGITS_PER_CHUNK: usize = (CHUNK_BITS / 4) as usize;

pub const DEC_RADIX: u32 = 10;

pub const HEX_RADIX: u32 = 16;

/// Largest absolute value served from the small-value cache.
pub const MAX_CONSTANT: usize = 16;
