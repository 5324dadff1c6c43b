use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
    TransferChecked,
};

use crate::{authority, constants::AUTHORITY_SEED, errors::EscrowError, events::EscrowExecuted, Escrow};

/// Accounts for `execute`: the taker pays `y_amount` of Y to the initializer and
/// receives everything in the vault. The vault and the escrow record are closed
/// and their rent goes back to the initializer.
#[derive(Accounts)]
pub struct Execute<'info> {
    /// Counterparty completing the swap, signs for the Y transfer
    pub taker: Signer<'info>,

    /// Original depositor, receives the rent of both closed accounts
    #[account(
        mut,
        constraint = escrow.is_initializer(&initializer.key()) @ EscrowError::InitializerMismatch,
    )]
    pub initializer: SystemAccount<'info>,

    pub x_mint: Box<InterfaceAccount<'info, Mint>>,
    pub y_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        close = initializer,
        has_one = x_mint @ EscrowError::MintMismatch,
        has_one = y_mint @ EscrowError::MintMismatch,
    )]
    pub escrow: Box<Account<'info, Escrow>>,

    /// Vault recorded at initialize
    #[account(
        mut,
        address = escrow.x_tokens_account @ EscrowError::VaultMismatch,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: re-derived from the escrow address and the stored bump
    #[account(
        seeds = [AUTHORITY_SEED, escrow.key().as_ref()],
        bump = escrow.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Initializer's Y account, must be the one recorded at initialize
    #[account(
        mut,
        address = escrow.initializer_y_tokens_account @ EscrowError::DestinationMismatch,
    )]
    pub initializer_y_tokens: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Taker's source of Y
    #[account(
        mut,
        constraint = taker_y_tokens.mint == y_mint.key() @ EscrowError::MintMismatch,
        constraint = taker_y_tokens.owner == taker.key() @ EscrowError::InvalidTokenOwner,
    )]
    pub taker_y_tokens: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Taker's destination for X
    #[account(
        mut,
        constraint = taker_x_tokens.mint == x_mint.key() @ EscrowError::MintMismatch,
    )]
    pub taker_x_tokens: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Execute<'info> {
    /// Pays the initializer the `y_amount` they asked for
    pub fn pay_initializer(&mut self) -> Result<()> {
        let transfer_accounts = TransferChecked {
            from: self.taker_y_tokens.to_account_info(),
            mint: self.y_mint.to_account_info(),
            to: self.initializer_y_tokens.to_account_info(),
            authority: self.taker.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);

        transfer_checked(cpi_ctx, self.escrow.y_amount, self.y_mint.decimals)
    }

    /// Releases the whole vault to the taker, then closes it
    pub fn release_and_close_vault(&mut self) -> Result<()> {
        let escrow_key = self.escrow.key();
        let bump = [self.escrow.authority_bump];
        let seeds = authority::signer_seeds(&escrow_key, &bump);
        let signer_seeds = &[&seeds[..]];

        let released = self.vault.amount;

        let accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.x_mint.to_account_info(),
            to: self.taker_x_tokens.to_account_info(),
            authority: self.vault_authority.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            accounts,
            signer_seeds,
        );
        transfer_checked(ctx, released, self.x_mint.decimals)?;

        let accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.initializer.to_account_info(),
            authority: self.vault_authority.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            accounts,
            signer_seeds,
        );
        close_account(ctx)?;

        msg!(
            "Escrow {} executed: {} X to taker, {} Y to initializer",
            escrow_key,
            released,
            self.escrow.y_amount
        );
        emit!(EscrowExecuted {
            escrow: escrow_key,
            initializer: self.escrow.initializer_key,
            taker: self.taker.key(),
            x_amount: released,
            y_amount: self.escrow.y_amount,
        });

        Ok(())
    }
}
