use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::error::LotteryError;

/// Checks that `randomness_account` is owned by `oracle` and is a fresh
/// commitment on `queue`, and returns its key, which doubles as the request's
/// correlation id.
///
/// The commitment must have been made in the previous slot so that no one,
/// including the operator, can know the revealed value yet.
pub fn request_randomness(
    randomness_account: &AccountInfo,
    oracle: &Pubkey,
    queue: &Pubkey,
    clock: &Clock,
) -> Result<Pubkey> {
    // Only accounts owned by the oracle can ever be fulfilled.
    require_keys_eq!(
        *randomness_account.owner,
        *oracle,
        LotteryError::UnauthorizedCallback
    );

    let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| error!(LotteryError::InvalidRandomnessAccount))?;

    require_keys_eq!(
        randomness_data.queue,
        *queue,
        LotteryError::InvalidRandomnessAccount
    );
    if randomness_data.seed_slot != clock.slot.saturating_sub(1) {
        msg!("Seed slot: {}", randomness_data.seed_slot);
        msg!("Current slot: {}", clock.slot);
        return Err(LotteryError::RandomnessAlreadyRevealed.into());
    }

    Ok(randomness_account.key())
}

/// Reads the revealed value of a randomness account.
pub fn revealed_value(randomness_account: &AccountInfo, clock: &Clock) -> Result<u64> {
    let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| error!(LotteryError::InvalidRandomnessAccount))?;
    let revealed = randomness_data
        .get_value(clock)
        .map_err(|_| LotteryError::RandomnessNotResolved)?;

    Ok(reduce(&revealed))
}

/// Collapses the 32 revealed bytes to the integer handed to the lottery.
pub fn reduce(revealed: &[u8; 32]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&revealed[..8]);
    u64::from_le_bytes(word)
}
