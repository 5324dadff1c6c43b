use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod authority;
pub mod constants;
pub mod errors;
pub mod events;
pub mod state;
pub use state::*;
pub mod contexts;
pub use contexts::*;

#[program]
pub mod swap_escrow {
    use super::*;

    /// Opens an escrow: locks `x_amount` of X in a program-controlled vault and
    /// records that the initializer wants `y_amount` of Y in return.
    /// `authority_bump` must be the canonical bump of `["authority", escrow]`.
    pub fn initialize(
        ctx: Context<Initialize>,
        authority_bump: u8,
        x_amount: u64,
        y_amount: u64,
    ) -> Result<()> {
        Escrow::validate_terms(x_amount, y_amount)?;
        ctx.accounts.check_authority_bump(authority_bump)?;
        ctx.accounts.deposit(x_amount)?;
        ctx.accounts.save_escrow(authority_bump, x_amount, y_amount)
    }

    /// Completes the swap atomically: Y goes from the taker to the
    /// initializer, the vault's X goes to the taker, and the escrow closes
    pub fn execute(ctx: Context<Execute>) -> Result<()> {
        ctx.accounts.pay_initializer()?;
        ctx.accounts.release_and_close_vault()
    }

    /// Returns the escrowed X to the initializer and closes the escrow.
    /// Only the recorded initializer, signing, can cancel
    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        ctx.accounts.refund_and_close_vault()
    }
}
