use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::engine::RandomSource;

pub fn account(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

pub fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(e) => panic!("expected an anchor error, got {:?}", e),
    }
}

/// Replays a fixed list of rolls, cycling once it runs out, and records the
/// bounds of every request.
pub struct ScriptedRolls {
    rolls: Vec<u64>,
    next: usize,
    pub requests: Vec<(u64, u64)>,
}

impl ScriptedRolls {
    pub fn new(rolls: &[u64]) -> Self {
        Self {
            rolls: rolls.to_vec(),
            next: 0,
            requests: Vec::new(),
        }
    }
}

impl RandomSource for ScriptedRolls {
    fn roll(&mut self, low: u64, high: u64) -> Result<u64> {
        self.requests.push((low, high));
        let value = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        Ok(value)
    }
}
