/// Number of faces on a die. Everything in this crate assumes fair d6s.
pub const FACES: u32 = 6;

/// Default sweep bounds (the classic 1-to-5-dice report).
pub const DEFAULT_MIN_DICE: u32 = 1;
pub const DEFAULT_MAX_DICE: u32 = 5;

/// Hard upper bound on the dice count. 6^24 still fits in a u64, so
/// outcome counts stay exact; 6^25 does not.
pub const MAX_DICE: u32 = 24;

/// Largest count accepted by the brute-force backend. The enumeration
/// walks 6^n tuples, which stops being practical past this point.
pub const MAX_ENUMERATED_DICE: u32 = 10;

/// `Method::Auto` enumerates up to this count and convolves above it.
pub const AUTO_ENUMERATION_LIMIT: u32 = 6;

/// Sample count for the interpolated probability curve.
pub const CURVE_SAMPLES: usize = 300;
