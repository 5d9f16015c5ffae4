use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::RandomnessRequested;
use crate::randomness::request_randomness;
use crate::state::Lottery;

/// Accounts required to close entry and request randomness.
///
/// The randomness account must have been committed on the configured queue
/// in the previous slot, typically by an earlier instruction in the same
/// transaction.
#[derive(Accounts)]
pub struct EndLottery<'info> {
    /// The lottery authority.
    pub authority: Signer<'info>,

    /// The lottery state account.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_end_lottery(ctx: Context<EndLottery>) -> Result<()> {
    let clock = Clock::get()?;
    let randomness_info = ctx.accounts.randomness_account_data.to_account_info();
    let authority = ctx.accounts.authority.key();
    let lottery = &mut ctx.accounts.lottery;
    let oracle = lottery.randomness_oracle;
    let queue = lottery.randomness_queue;

    let request_id = lottery.begin_draw(&authority, || {
        request_randomness(&randomness_info, &oracle, &queue, &clock)
    })?;

    msg!("Entry closed with {} entrants", lottery.entrants.len());
    msg!("Randomness requested: {}", request_id);

    emit!(RandomnessRequested {
        round: lottery.round + 1,
        request_id,
        entrants: lottery.entrants.len() as u32,
        pool_balance: lottery.pool_balance,
    });
    Ok(())
}
