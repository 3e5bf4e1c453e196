use anchor_lang::error_code;

#[error_code]
pub enum LotteryError {
    #[msg("Deposit must be greater than zero")]
    InvalidInput,
    #[msg("No deposit has been made in this round")]
    Uninitialized,
    #[msg("No winner has been drawn")]
    NoWinner,
    #[msg("Draw exhausted its pass limit without selecting a winner")]
    NonTermination,
    Overflow,
    #[msg("Ticket ledger has reached its participant capacity")]
    LedgerFull,
    InsufficientFunds,
    InvalidTreasury,
    #[msg("Treasury transfer failed")]
    TransferFailed,
    #[msg("Winner account does not match the recorded winner")]
    WinnerMismatch,
    #[msg("Treasury cannot be withdrawn while a round holds deposits")]
    RoundInProgress,
    #[msg("Draw pass limit must be greater than zero")]
    InvalidDrawPassLimit,
    #[msg("Invalid SlotHashes account provided")]
    InvalidSlotHashesAccount,
    #[msg("Only the program management authority can manage the lottery")]
    NotProgramManagementAuthority,
    #[msg("Only the payout authority may be used to withdraw from the treasury")]
    NotPayoutAuthority,
}
