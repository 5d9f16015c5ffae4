use anchor_lang::prelude::*;

use crate::constants::MAX_ENTRANTS;
use crate::error::LotteryError;
use crate::ledger::FundsLedger;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum LotteryState {
    /// Idle, waiting for the authority to start a round.
    Open,
    /// Accepting deposits.
    EntryOpen,
    /// Entry closed, randomness requested and not yet delivered.
    AwaitingRandomness,
}

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The operator allowed to start and end rounds.
    pub authority: Pubkey,

    /// Pyth price account quoting the native currency in USD.
    pub price_feed: Pubkey,

    /// Program that owns randomness accounts. Only data it vouches for is
    /// accepted as a randomness callback.
    pub randomness_oracle: Pubkey,

    /// Queue randomness requests must be committed on.
    pub randomness_queue: Pubkey,

    /// Target entry price in micro-USD.
    pub entry_fee_usd: u64,

    pub state: LotteryState,

    /// One slot per entry, in entry order. The same key may appear many times.
    #[max_len(MAX_ENTRANTS)]
    pub entrants: Vec<Pubkey>,

    /// Randomness account committed by `end_lottery`, cleared on payout.
    pub pending_request: Option<Pubkey>,

    /// Lamports deposited in the current round.
    pub pool_balance: u64,

    /// The last paid-out entrant, kept across rounds.
    pub recent_winner: Option<Pubkey>,

    /// Number of rounds paid out so far.
    pub round: u64,
}

/// Result of a successful draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub winner: Pubkey,
    pub winner_index: u32,
    pub amount: u64,
}

impl Lottery {
    pub fn start(&mut self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, LotteryError::NotAuthorized);
        require!(
            self.state == LotteryState::Open,
            LotteryError::InvalidState
        );

        self.state = LotteryState::EntryOpen;
        Ok(())
    }

    /// Records one entry. `fee` is the entrance fee at the time of the call;
    /// anything deposited above it stays in the pool.
    pub fn enter(&mut self, participant: Pubkey, deposited: u64, fee: u64) -> Result<()> {
        require!(
            self.state == LotteryState::EntryOpen,
            LotteryError::InvalidState
        );
        require!(deposited >= fee, LotteryError::InsufficientDeposit);
        require!(
            self.entrants.len() < MAX_ENTRANTS as usize,
            LotteryError::LotteryFull
        );
        let pool_balance = self
            .pool_balance
            .checked_add(deposited)
            .ok_or(LotteryError::MathOverflow)?;

        self.entrants.push(participant);
        self.pool_balance = pool_balance;
        Ok(())
    }

    /// Closes entry. `request` issues the randomness request and returns its
    /// correlation id; it is only called once every precondition holds.
    pub fn begin_draw<F>(&mut self, caller: &Pubkey, request: F) -> Result<Pubkey>
    where
        F: FnOnce() -> Result<Pubkey>,
    {
        require_keys_eq!(*caller, self.authority, LotteryError::NotAuthorized);
        require!(
            self.state == LotteryState::EntryOpen,
            LotteryError::InvalidState
        );
        require!(!self.entrants.is_empty(), LotteryError::EmptyPool);

        let request_id = request()?;

        self.state = LotteryState::AwaitingRandomness;
        self.pending_request = Some(request_id);
        Ok(request_id)
    }

    /// Authenticates a randomness callback against the trusted oracle and the
    /// pending request.
    pub fn check_callback(&self, oracle: &Pubkey, request_id: &Pubkey) -> Result<()> {
        require_keys_eq!(
            *oracle,
            self.randomness_oracle,
            LotteryError::UnauthorizedCallback
        );
        require!(
            self.state == LotteryState::AwaitingRandomness,
            LotteryError::InvalidState
        );
        require!(
            self.pending_request == Some(*request_id),
            LotteryError::UnauthorizedCallback
        );
        Ok(())
    }

    /// Settles the round with the oracle's value.
    ///
    /// `oracle` is the identity vouching for `random_value`. The payout goes
    /// out before any field is touched, so a failed transfer leaves the round
    /// exactly as it was and the callback can be retried.
    pub fn fulfill_randomness<L: FundsLedger>(
        &mut self,
        oracle: &Pubkey,
        request_id: &Pubkey,
        random_value: u64,
        ledger: &mut L,
    ) -> Result<Payout> {
        self.check_callback(oracle, request_id)?;

        let winner_index = winner_index(random_value, self.entrants.len())?;
        let winner = self.entrants[winner_index];
        let amount = self.pool_balance;
        let round = self.round.checked_add(1).ok_or(LotteryError::MathOverflow)?;

        ledger.payout(&winner, amount)?;

        self.recent_winner = Some(winner);
        self.entrants.clear();
        self.pool_balance = 0;
        self.pending_request = None;
        self.state = LotteryState::Open;
        self.round = round;

        Ok(Payout {
            winner,
            winner_index: winner_index as u32,
            amount,
        })
    }
}

/// `random_value mod entrant_count`.
pub fn winner_index(random_value: u64, entrant_count: usize) -> Result<usize> {
    require!(entrant_count > 0, LotteryError::EmptyPool);
    Ok((random_value % entrant_count as u64) as usize)
}
