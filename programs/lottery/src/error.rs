use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Operation is not allowed in the current lottery state")]
    InvalidState,
    #[msg("Deposit is below the entrance fee")]
    InsufficientDeposit,
    #[msg("Cannot end a lottery with no entrants")]
    EmptyPool,
    #[msg("Price feed has no usable price")]
    OracleUnavailable,
    #[msg("Randomness callback is not from the trusted oracle or does not match the pending request")]
    UnauthorizedCallback,
    #[msg("Payout to the winner could not be completed")]
    TransferFailed,
    #[msg("Signer is not the lottery authority")]
    NotAuthorized,
    #[msg("No entrant slots left in this round")]
    LotteryFull,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Randomness account was not committed in the previous slot")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness has not been revealed yet")]
    RandomnessNotResolved,
    #[msg("Randomness account could not be parsed or belongs to another queue")]
    InvalidRandomnessAccount,
    #[msg("Entry fee must be greater than 0")]
    InvalidEntryFee,
}
