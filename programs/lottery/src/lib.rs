use anchor_lang::prelude::*;
use instructions::*;

/// Seeds, decimal conventions and the round size limit.
pub mod constants;

/// Error codes returned when an instruction is rejected.
pub mod error;

/// Events emitted at each round transition.
pub mod events;

/// Instruction handlers and their account contexts.
pub mod instructions;

/// Payout of the pooled balance.
pub mod ledger;

/// Pyth price account parsing and entrance fee conversion.
pub mod price_feed;

/// Switchboard randomness request and reveal.
pub mod randomness;

/// The lottery account and its round state machine.
pub mod state;

declare_id!("2RTh2Y4e2N421EbSnUYTKdGqDHJH7etxZb3VrWDMpNMY");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize(ctx: Context<InitializeLottery>, entry_fee_usd: u64) -> Result<()> {
        process_initialize(ctx, entry_fee_usd)
    }

    pub fn start_lottery(ctx: Context<StartLottery>) -> Result<()> {
        process_start_lottery(ctx)
    }

    pub fn enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
        process_enter(ctx, amount)
    }

    pub fn end_lottery(ctx: Context<EndLottery>) -> Result<()> {
        process_end_lottery(ctx)
    }

    pub fn fulfill_randomness(ctx: Context<FulfillRandomness>) -> Result<()> {
        process_fulfill_randomness(ctx)
    }

    pub fn get_entrance_fee(ctx: Context<GetEntranceFee>) -> Result<u64> {
        process_get_entrance_fee(ctx)
    }
}
