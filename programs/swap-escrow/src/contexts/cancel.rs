use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
    TransferChecked,
};

use crate::{authority, constants::AUTHORITY_SEED, errors::EscrowError, events::EscrowCancelled, Escrow};

#[derive(Accounts)]
pub struct Cancel<'info> {
    /// The depositor reclaiming X, must sign and match the recorded initializer
    #[account(mut)]
    pub initializer: Signer<'info>,

    pub x_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Closed on success, rent returned to the initializer
    #[account(
        mut,
        close = initializer,
        has_one = x_mint @ EscrowError::MintMismatch,
        constraint = escrow.is_initializer(&initializer.key()) @ EscrowError::Unauthorized,
    )]
    pub escrow: Box<Account<'info, Escrow>>,

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

    /// Refund destination
    #[account(
        mut,
        constraint = initializer_x_tokens.mint == x_mint.key() @ EscrowError::MintMismatch,
        constraint = initializer_x_tokens.owner == initializer.key() @ EscrowError::InvalidTokenOwner,
    )]
    pub initializer_x_tokens: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Cancel<'info> {
    /// Returns the vault balance to the initializer and closes the vault
    pub fn refund_and_close_vault(&mut self) -> Result<()> {
        let escrow_key = self.escrow.key();
        let bump = [self.escrow.authority_bump];
        let seeds = authority::signer_seeds(&escrow_key, &bump);
        let signer_seeds = &[&seeds[..]];

        let refunded = self.vault.amount;

        let xfer_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.x_mint.to_account_info(),
            to: self.initializer_x_tokens.to_account_info(),
            authority: self.vault_authority.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            xfer_accounts,
            signer_seeds,
        );
        transfer_checked(ctx, refunded, self.x_mint.decimals)?;

        let close_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.initializer.to_account_info(),
            authority: self.vault_authority.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            close_accounts,
            signer_seeds,
        );
        close_account(ctx)?;

        msg!("Escrow {} cancelled: {} X refunded", escrow_key, refunded);
        emit!(EscrowCancelled {
            escrow: escrow_key,
            initializer: self.initializer.key(),
            x_amount: refunded,
        });

        Ok(())
    }
}
