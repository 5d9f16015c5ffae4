use anchor_lang::prelude::*;

use crate::constants::USD_DECIMALS;
use crate::error::LotteryError;

// Pyth v2 price account layout.
const PYTH_MAGIC: u32 = 0xa1b2c3d4;
const EXPO_OFFSET: usize = 20;
const AGG_PRICE_OFFSET: usize = 208;
const AGG_STATUS_OFFSET: usize = 224;
const MIN_PRICE_ACCOUNT_LEN: usize = AGG_STATUS_OFFSET + 4;
const STATUS_TRADING: u32 = 1;
// Exponents outside this range cannot be priced in u128.
const MIN_EXPO: i32 = -18;
const MAX_EXPO: i32 = 12;

/// Latest aggregate price of the native currency in USD: `price * 10^expo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceReading {
    pub price: i64,
    pub expo: i32,
}

impl PriceReading {
    /// Reads the aggregate price out of a Pyth v2 price account.
    ///
    /// A missing, non-trading or non-positive price, or one with an exponent
    /// out of range, is reported as `OracleUnavailable`; the lottery never
    /// prices entries off it.
    pub fn parse(data: &[u8]) -> Result<Self> {
        require!(
            data.len() >= MIN_PRICE_ACCOUNT_LEN,
            LotteryError::OracleUnavailable
        );

        let magic = read_u32(data, 0);
        require!(magic == PYTH_MAGIC, LotteryError::OracleUnavailable);

        let status = read_u32(data, AGG_STATUS_OFFSET);
        require!(status == STATUS_TRADING, LotteryError::OracleUnavailable);

        let expo = read_u32(data, EXPO_OFFSET) as i32;
        require!(
            (MIN_EXPO..=MAX_EXPO).contains(&expo),
            LotteryError::OracleUnavailable
        );
        let mut price = [0u8; 8];
        price.copy_from_slice(&data[AGG_PRICE_OFFSET..AGG_PRICE_OFFSET + 8]);
        let price = i64::from_le_bytes(price);

        require!(price > 0, LotteryError::OracleUnavailable);

        Ok(Self { price, expo })
    }
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}

/// Converts a USD target (in units of `10^-USD_DECIMALS`) into native base units.
///
/// `fee = entry_fee_usd * 10^native_decimals / (price * 10^expo * 10^USD_DECIMALS)`,
/// floored. The feed exponent and both decimal counts are folded into a single
/// numerator/denominator pair before the one division.
pub fn entrance_fee(entry_fee_usd: u64, reading: PriceReading, native_decimals: u32) -> Result<u64> {
    require!(reading.price > 0, LotteryError::OracleUnavailable);

    let mut numerator = (entry_fee_usd as u128)
        .checked_mul(pow10(native_decimals)?)
        .ok_or(LotteryError::MathOverflow)?;
    let mut denominator = (reading.price as u128)
        .checked_mul(pow10(USD_DECIMALS)?)
        .ok_or(LotteryError::MathOverflow)?;

    if reading.expo < 0 {
        numerator = numerator
            .checked_mul(pow10(reading.expo.unsigned_abs())?)
            .ok_or(LotteryError::MathOverflow)?;
    } else {
        denominator = denominator
            .checked_mul(pow10(reading.expo as u32)?)
            .ok_or(LotteryError::MathOverflow)?;
    }

    let fee = numerator / denominator;
    u64::try_from(fee).map_err(|_| error!(LotteryError::MathOverflow))
}

fn pow10(exp: u32) -> Result<u128> {
    10u128
        .checked_pow(exp)
        .ok_or_else(|| error!(LotteryError::MathOverflow))
}
