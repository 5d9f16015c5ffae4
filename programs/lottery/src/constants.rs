use anchor_lang::prelude::*;

#[constant]
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Entry fee target, in micro-USD (50 USD).
#[constant]
pub const DEFAULT_ENTRY_FEE_USD: u64 = 50_000_000;

/// Decimals of `entry_fee_usd`.
pub const USD_DECIMALS: u32 = 6;

/// Lamports per SOL, as a power of ten.
pub const NATIVE_DECIMALS: u32 = 9;

/// Slots in the round account. The account is allocated once, so this caps
/// the number of entries per round.
#[constant]
pub const MAX_ENTRANTS: u32 = 256;
