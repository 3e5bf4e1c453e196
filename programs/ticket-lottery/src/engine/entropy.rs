use std::str::FromStr;

use anchor_lang::prelude::*;
use arrayref::array_ref;

use crate::error::LotteryError;

const SLOT_HASHES_SYSVAR: &str = "SysvarS1otHashes111111111111111111111111111";

/// Uniform integers over a closed interval, supplied to the draw.
pub trait RandomSource {
    /// Returns a value in `[low, high]`.
    fn roll(&mut self, low: u64, high: u64) -> Result<u64>;
}

/// Random source seeded from the most recent block hash and the cluster clock.
///
/// Each roll advances an internal counter and remixes it into the state, so a
/// single seed yields the whole sequence needed by a multi-pass draw.
pub struct SlotHashEntropy {
    state: u64,
    counter: u64,
}

impl SlotHashEntropy {
    /// Seeds from the SlotHashes sysvar account after checking its address.
    pub fn from_sysvar(slot_hashes: &AccountInfo, unix_timestamp: i64) -> Result<Self> {
        let pubkey_matches = Pubkey::from_str(SLOT_HASHES_SYSVAR)
            .or(Err(LotteryError::InvalidSlotHashesAccount))?
            .eq(slot_hashes.key);
        require!(pubkey_matches, LotteryError::InvalidSlotHashesAccount);

        let data = slot_hashes.try_borrow_data()?;
        Self::from_slot_hash_data(&data, unix_timestamp)
    }

    /// Seeds from raw SlotHashes data: an 8 byte entry count followed by
    /// (slot, hash) pairs.
    pub fn from_slot_hash_data(data: &[u8], unix_timestamp: i64) -> Result<Self> {
        require!(data.len() >= 20, LotteryError::InvalidSlotHashesAccount);

        // Entropy words from the newest slot entry
        let chunk1 = array_ref![data, 12, 8];
        let chunk2 = if data.len() >= 28 {
            array_ref![data, 20, 8]
        } else {
            chunk1
        };

        let hash_value1 = u64::from_le_bytes(*chunk1);
        let hash_value2 = u64::from_le_bytes(*chunk2);

        let mut seed = mix(hash_value1, unix_timestamp as u64);
        seed = mix(seed, hash_value2);

        Ok(Self::from_seed(seed))
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: seed,
            counter: 0,
        }
    }
}

impl RandomSource for SlotHashEntropy {
    fn roll(&mut self, low: u64, high: u64) -> Result<u64> {
        require!(low <= high, LotteryError::Overflow);
        let range = (high - low)
            .checked_add(1)
            .ok_or(LotteryError::Overflow)?;

        self.counter = self.counter.wrapping_add(1);
        self.state = mix(self.state, self.counter);

        Ok(low + unbiased_range(self.state, range)?)
    }
}

/// splitmix64 finalizer, the same mixing the raffle draw used for its
/// winning ticket: each output bit flips with ~50% probability when any input
/// bit changes.
fn mix(a: u64, b: u64) -> u64 {
    let mut z = a.wrapping_add(b);

    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Maps `x` onto `[0, range)` without modulo bias.
/// Power-of-two ranges use a mask; ranges up to 256 take a plain modulo, whose
/// bias is negligible against a 64-bit input.
fn unbiased_range(x: u64, range: u64) -> Result<u64> {
    if range == 0 {
        return err!(LotteryError::Overflow);
    }

    if range.is_power_of_two() {
        return Ok(x & (range - 1));
    }

    if range <= 256 {
        return Ok(x % range);
    }

    let threshold = u64::MAX - (u64::MAX % range);
    let mut value = x;

    // Rejection sampling, capped so the compute cost stays predictable.
    // Values at or above the threshold occur with probability below
    // range / 2^64, so a remix or two nearly always lands below it and the
    // final modulo fallback carries a negligible bias.
    const MAX_ATTEMPTS: u8 = 3;

    for i in 0..MAX_ATTEMPTS {
        if value < threshold {
            return Ok(value % range);
        }
        value = mix(value, value.wrapping_add(i as u64 + 1));
    }

    // Out of attempts; the bias left after the remixes is negligible
    Ok(value % range)
}
