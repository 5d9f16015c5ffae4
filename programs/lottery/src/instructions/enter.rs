use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::events::LotteryEntered;
use crate::instructions::entrance_fee::current_entrance_fee;
use crate::state::Lottery;

/// Accounts required to enter the current round.
#[derive(Accounts)]
pub struct Enter<'info> {
    /// The entrant, paying the deposit.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The lottery state account. Also holds the pooled lamports.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// The configured Pyth price account.
    /// CHECK: Address is pinned to the lottery config, data is parsed in the handler.
    #[account(address = lottery.price_feed @ LotteryError::OracleUnavailable)]
    pub price_feed: UncheckedAccount<'info>,

    /// System program for the deposit transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the caller once, depositing `amount` lamports into the pool.
///
/// # Arguments
/// * `ctx` - Context containing Enter accounts
/// * `amount` - Lamports deposited, at least the current entrance fee
pub fn process_enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
    let fee = current_entrance_fee(&ctx.accounts.lottery, &ctx.accounts.price_feed)?;
    let player = ctx.accounts.player.key();

    ctx.accounts.lottery.enter(player, amount, fee)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        amount,
    )?;

    let lottery = &ctx.accounts.lottery;
    let entrant_index = (lottery.entrants.len() - 1) as u32;
    msg!("Entrant {}: {} deposited {} (fee {})", entrant_index, player, amount, fee);

    emit!(LotteryEntered {
        round: lottery.round + 1,
        participant: player,
        deposited: amount,
        entrance_fee: fee,
        entrant_index,
        pool_balance: lottery.pool_balance,
    });
    Ok(())
}
