use anchor_lang::prelude::*;

#[event]
pub struct EscrowInitialized {
    pub escrow: Pubkey,
    pub initializer: Pubkey,
    pub x_mint: Pubkey,
    pub y_mint: Pubkey,
    pub x_amount: u64,
    pub y_amount: u64,
}

#[event]
pub struct EscrowExecuted {
    pub escrow: Pubkey,
    pub initializer: Pubkey,
    pub taker: Pubkey,
    /// X released from the vault to the taker
    pub x_amount: u64,
    /// Y delivered to the initializer
    pub y_amount: u64,
}

#[event]
pub struct EscrowCancelled {
    pub escrow: Pubkey,
    pub initializer: Pubkey,
    /// X refunded from the vault to the initializer
    pub x_amount: u64,
}
