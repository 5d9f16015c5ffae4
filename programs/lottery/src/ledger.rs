use anchor_lang::prelude::*;

use crate::error::LotteryError;

/// Moves the pooled balance out of the lottery.
pub trait FundsLedger {
    fn payout(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Pays from the program-owned lottery account straight into the winner's
/// account. The lottery account keeps its rent-exempt reserve.
pub struct LamportLedger<'a, 'info> {
    pub vault: &'a AccountInfo<'info>,
    pub winner: &'a AccountInfo<'info>,
    pub rent_reserve: u64,
}

impl<'a, 'info> FundsLedger for LamportLedger<'a, 'info> {
    fn payout(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*to, self.winner.key(), LotteryError::TransferFailed);

        let vault_after = self
            .vault
            .lamports()
            .checked_sub(amount)
            .filter(|left| *left >= self.rent_reserve)
            .ok_or(LotteryError::TransferFailed)?;
        let winner_after = self
            .winner
            .lamports()
            .checked_add(amount)
            .ok_or(LotteryError::TransferFailed)?;

        **self.vault.try_borrow_mut_lamports()? = vault_after;
        **self.winner.try_borrow_mut_lamports()? = winner_after;

        msg!("Paid {} lamports to {}", amount, to);
        Ok(())
    }
}
