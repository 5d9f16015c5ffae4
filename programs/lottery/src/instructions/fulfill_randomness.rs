use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::WinnerPaid;
use crate::ledger::LamportLedger;
use crate::randomness::revealed_value;
use crate::state::Lottery;

/// Accounts required to settle a round once randomness is revealed.
///
/// Anyone may submit this; the randomness account is only trusted when it is
/// the pending request and is owned by the configured oracle program.
#[derive(Accounts)]
pub struct FulfillRandomness<'info> {
    /// Account paying transaction fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The lottery state account. Holds the pooled lamports.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// The revealed randomness account.
    /// CHECK: Owner and key are checked against the lottery in the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// The drawn entrant, receiving the pool.
    /// CHECK: Must match the entrant picked by the draw; the payout checks it.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Draws the winner from the revealed value, pays out the whole pool and
/// reopens the lottery for the next round.
pub fn process_fulfill_randomness(ctx: Context<FulfillRandomness>) -> Result<()> {
    let clock = Clock::get()?;
    let randomness_info = ctx.accounts.randomness_account_data.to_account_info();
    let oracle = *randomness_info.owner;
    let request_id = randomness_info.key();

    let vault = ctx.accounts.lottery.to_account_info();
    let winner = ctx.accounts.winner.to_account_info();
    let rent_reserve = Rent::get()?.minimum_balance(vault.data_len());

    let lottery = &mut ctx.accounts.lottery;
    // Authenticate before reading anything out of the account.
    lottery.check_callback(&oracle, &request_id)?;
    let random_value = revealed_value(&randomness_info, &clock)?;

    msg!("Randomness result: {}", random_value);
    msg!("Entrant count: {}", lottery.entrants.len());

    let mut ledger = LamportLedger {
        vault: &vault,
        winner: &winner,
        rent_reserve,
    };
    let payout = lottery.fulfill_randomness(&oracle, &request_id, random_value, &mut ledger)?;

    msg!("Winner: {} ({})", payout.winner_index, payout.winner);

    emit!(WinnerPaid {
        round: lottery.round,
        request_id,
        random_value,
        winner_index: payout.winner_index,
        winner: payout.winner,
        amount: payout.amount,
    });
    Ok(())
}
