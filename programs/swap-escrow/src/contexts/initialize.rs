use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::{
    authority,
    constants::{AUTHORITY_SEED, VAULT_SEED},
    errors::EscrowError,
    events::EscrowInitialized,
    Escrow,
};

/// Accounts for `initialize`: the initializer locks `x_amount` of X in a vault
/// controlled by this escrow's vault authority and records the terms
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Depositor of X, pays for the escrow record and the vault
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// Token deposited into the vault
    #[account(mint::token_program = token_program)]
    pub x_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Token the initializer wants in return
    #[account(mint::token_program = token_program)]
    pub y_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Source of the deposit
    #[account(
        mut,
        constraint = initializer_x_tokens.mint == x_mint.key() @ EscrowError::MintMismatch,
        constraint = initializer_x_tokens.owner == initializer.key() @ EscrowError::InvalidTokenOwner,
    )]
    pub initializer_x_tokens: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Where the taker's Y is delivered on execute
    #[account(
        constraint = initializer_y_tokens.mint == y_mint.key() @ EscrowError::MintMismatch,
        constraint = initializer_y_tokens.owner == initializer.key() @ EscrowError::InvalidTokenOwner,
    )]
    pub initializer_y_tokens: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Fresh keypair account holding the terms, signs its own creation
    #[account(
        init,
        payer = initializer,
        space = 8 + Escrow::INIT_SPACE,
    )]
    pub escrow: Box<Account<'info, Escrow>>,

    /// CHECK: data-less PDA signer for the vault, address checked by seeds
    #[account(
        seeds = [AUTHORITY_SEED, escrow.key().as_ref()],
        bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Lockbox for the deposited X, only the vault authority can move it
    #[account(
        init,
        payer = initializer,
        seeds = [VAULT_SEED, escrow.key().as_ref()],
        bump,
        token::mint = x_mint,
        token::authority = vault_authority,
        token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> Initialize<'info> {
    /// Moves `x_amount` of X from the initializer into the vault
    pub fn deposit(&mut self, x_amount: u64) -> Result<()> {
        let transfer_accounts = TransferChecked {
            from: self.initializer_x_tokens.to_account_info(),
            mint: self.x_mint.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.initializer.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);

        transfer_checked(cpi_ctx, x_amount, self.x_mint.decimals)
    }

    /// The caller's bump must reproduce the authority the vault was handed to
    pub fn check_authority_bump(&self, authority_bump: u8) -> Result<()> {
        authority::verify(
            &self.escrow.key(),
            authority_bump,
            &self.vault_authority.key(),
            &crate::ID,
        )
    }

    pub fn save_escrow(&mut self, authority_bump: u8, x_amount: u64, y_amount: u64) -> Result<()> {
        self.escrow.set_inner(Escrow {
            initializer_key: self.initializer.key(),
            x_mint: self.x_mint.key(),
            y_mint: self.y_mint.key(),
            x_tokens_account: self.vault.key(),
            initializer_y_tokens_account: self.initializer_y_tokens.key(),
            x_amount,
            y_amount,
            authority_bump,
        });

        msg!("Escrow {} opened: {} X for {} Y", self.escrow.key(), x_amount, y_amount);
        emit!(EscrowInitialized {
            escrow: self.escrow.key(),
            initializer: self.initializer.key(),
            x_mint: self.x_mint.key(),
            y_mint: self.y_mint.key(),
            x_amount,
            y_amount,
        });

        Ok(())
    }
}
