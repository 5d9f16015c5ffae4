use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::price_feed::PriceReading;
use crate::state::{Lottery, LotteryState};

/// Accounts required to create the lottery.
/// The oracle addresses recorded here are fixed for the life of the program.
#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    /// The account paying for account creation. Becomes the lottery authority.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The lottery state account.
    #[account(
        init,
        payer = payer,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// Pyth price account for the native currency in USD.
    /// CHECK: Parsed and validated in the handler.
    pub price_feed: UncheckedAccount<'info>,

    /// Program owning the randomness accounts.
    /// CHECK: Only its key is stored; it must be an executable program.
    #[account(executable)]
    pub randomness_oracle: UncheckedAccount<'info>,

    /// Queue randomness must be committed on.
    /// CHECK: Only its key is stored.
    pub randomness_queue: UncheckedAccount<'info>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Creates the lottery in the `Open` state.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeLottery accounts
/// * `entry_fee_usd` - Entry price in micro-USD
pub fn process_initialize(ctx: Context<InitializeLottery>, entry_fee_usd: u64) -> Result<()> {
    require!(entry_fee_usd > 0, LotteryError::InvalidEntryFee);

    // Refuse to deploy against a feed that cannot price an entry.
    let reading = PriceReading::parse(&ctx.accounts.price_feed.try_borrow_data()?)?;
    msg!("Price feed reading: {} x 10^{}", reading.price, reading.expo);

    let lottery = &mut ctx.accounts.lottery;
    lottery.bump = ctx.bumps.lottery;
    lottery.authority = ctx.accounts.payer.key();
    lottery.price_feed = ctx.accounts.price_feed.key();
    lottery.randomness_oracle = ctx.accounts.randomness_oracle.key();
    lottery.randomness_queue = ctx.accounts.randomness_queue.key();
    lottery.entry_fee_usd = entry_fee_usd;
    lottery.state = LotteryState::Open;
    lottery.entrants = Vec::new();
    lottery.pending_request = None;
    lottery.pool_balance = 0;
    lottery.recent_winner = None;
    lottery.round = 0;

    msg!("Lottery initialized, authority {}", lottery.authority);
    Ok(())
}
