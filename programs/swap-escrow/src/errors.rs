use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Invalid amount: x_amount and y_amount must be greater than zero")]
    InvalidAmount,
    #[msg("Invalid authority bump: does not reproduce the vault authority address")]
    InvalidAuthorityBump,
    #[msg("Mint mismatch: token account mint does not match the escrow terms")]
    MintMismatch,
    #[msg("Vault mismatch: vault does not match the escrow vault")]
    VaultMismatch,
    #[msg("Destination mismatch: Y destination does not match the recorded account")]
    DestinationMismatch,
    #[msg("Unauthorized: only the initializer can cancel this escrow")]
    Unauthorized,
    #[msg("Initializer mismatch: account does not match the escrow initializer")]
    InitializerMismatch,
    #[msg("Invalid token owner: token account is not owned by the expected party")]
    InvalidTokenOwner,
}
