use anchor_lang::prelude::*;

use crate::constants::{LOTTERY_SEED, NATIVE_DECIMALS};
use crate::error::LotteryError;
use crate::price_feed::{entrance_fee, PriceReading};
use crate::state::Lottery;

/// Accounts required to quote the entrance fee.
#[derive(Accounts)]
pub struct GetEntranceFee<'info> {
    /// The lottery state account.
    #[account(
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// The configured Pyth price account.
    /// CHECK: Address is pinned to the lottery config, data is parsed in the handler.
    #[account(address = lottery.price_feed @ LotteryError::OracleUnavailable)]
    pub price_feed: UncheckedAccount<'info>,
}

/// Current entrance fee in lamports.
pub fn current_entrance_fee(lottery: &Lottery, price_feed: &AccountInfo) -> Result<u64> {
    let reading = PriceReading::parse(&price_feed.try_borrow_data()?)?;
    entrance_fee(lottery.entry_fee_usd, reading, NATIVE_DECIMALS)
}

pub fn process_get_entrance_fee(ctx: Context<GetEntranceFee>) -> Result<u64> {
    let fee = current_entrance_fee(&ctx.accounts.lottery, &ctx.accounts.price_feed)?;
    msg!("Entrance fee: {} lamports", fee);
    Ok(fee)
}
