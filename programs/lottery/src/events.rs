use anchor_lang::prelude::*;

#[event]
pub struct LotteryStarted {
    pub round: u64,
    pub authority: Pubkey,
}

#[event]
pub struct LotteryEntered {
    pub round: u64,
    pub participant: Pubkey,
    pub deposited: u64,
    pub entrance_fee: u64,
    pub entrant_index: u32,
    pub pool_balance: u64,
}

#[event]
pub struct RandomnessRequested {
    pub round: u64,
    pub request_id: Pubkey,
    pub entrants: u32,
    pub pool_balance: u64,
}

#[event]
pub struct WinnerPaid {
    pub round: u64,
    pub request_id: Pubkey,
    pub random_value: u64,
    pub winner_index: u32,
    pub winner: Pubkey,
    pub amount: u64,
}
