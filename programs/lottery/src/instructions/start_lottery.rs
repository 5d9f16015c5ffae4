use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::LotteryStarted;
use crate::state::Lottery;

/// Accounts required to open entry for a new round.
#[derive(Accounts)]
pub struct StartLottery<'info> {
    /// The lottery authority.
    pub authority: Signer<'info>,

    /// The lottery state account.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

pub fn process_start_lottery(ctx: Context<StartLottery>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.start(&ctx.accounts.authority.key())?;

    msg!("Round {} open for entries", lottery.round + 1);
    emit!(LotteryStarted {
        round: lottery.round + 1,
        authority: lottery.authority,
    });
    Ok(())
}
