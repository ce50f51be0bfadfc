pub const F64_SIGN_MASK: u64 = 1 << 63;

// largest counts array a histogram may allocate, in bytes
pub const MAX_COUNTS_BYTES: u64 = 1 << 32;
