use anchor_lang::prelude::*;

use crate::errors::EscrowError;

/// Terms of a single open swap:
/// - who deposited X and may cancel,
/// - which mints are being exchanged,
/// - where the escrowed X sits and where Y must be delivered,
/// - the amounts on both sides,
/// - and the bump of the vault authority PDA.
///
/// The account exists only while the swap is open. Execute and cancel both
/// close it, so a settled escrow no longer deserializes as this type.
#[account]
#[derive(InitSpace)]
pub struct Escrow {
    pub initializer_key: Pubkey,              // depositor of X, the only party allowed to cancel
    pub x_mint: Pubkey,                       // token held in the vault
    pub y_mint: Pubkey,                       // token the initializer wants back
    pub x_tokens_account: Pubkey,             // vault holding the escrowed X
    pub initializer_y_tokens_account: Pubkey, // where Y is delivered on execute
    pub x_amount: u64,                        // X deposited at initialize
    pub y_amount: u64,                        // Y demanded from the taker
    pub authority_bump: u8,                   // bump of ["authority", escrow]
}

impl Escrow {
    /// Rejects escrows where either side of the trade is zero
    pub fn validate_terms(x_amount: u64, y_amount: u64) -> Result<()> {
        require_gt!(x_amount, 0, EscrowError::InvalidAmount);
        require_gt!(y_amount, 0, EscrowError::InvalidAmount);
        Ok(())
    }

    pub fn is_initializer(&self, key: &Pubkey) -> bool {
        self.initializer_key == *key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::{solana_program::program_error::ProgramError, Discriminator};

    fn sample() -> Escrow {
        Escrow {
            initializer_key: Pubkey::new_unique(),
            x_mint: Pubkey::new_unique(),
            y_mint: Pubkey::new_unique(),
            x_tokens_account: Pubkey::new_unique(),
            initializer_y_tokens_account: Pubkey::new_unique(),
            x_amount: 100,
            y_amount: 200,
            authority_bump: 254,
        }
    }

    fn error_code(err: anchor_lang::error::Error) -> u32 {
        match ProgramError::from(err) {
            ProgramError::Custom(code) => code,
            other => panic!("expected a custom error, got {other:?}"),
        }
    }

    #[test]
    fn space_covers_every_field() {
        assert_eq!(Escrow::INIT_SPACE, 5 * 32 + 2 * 8 + 1);
    }

    #[test]
    fn serialized_record_fills_allocated_space() {
        let mut data = Vec::new();
        sample().try_serialize(&mut data).unwrap();

        assert_eq!(data.len(), 8 + Escrow::INIT_SPACE);
        assert_eq!(&data[..8], &Escrow::DISCRIMINATOR[..]);
    }

    #[test]
    fn stored_terms_read_back_unchanged() {
        let escrow = sample();
        let mut data = Vec::new();
        escrow.try_serialize(&mut data).unwrap();

        let loaded = Escrow::try_deserialize(&mut data.as_slice()).unwrap();
        assert_eq!(loaded.initializer_key, escrow.initializer_key);
        assert_eq!(loaded.x_tokens_account, escrow.x_tokens_account);
        assert_eq!(
            loaded.initializer_y_tokens_account,
            escrow.initializer_y_tokens_account
        );
        assert_eq!(loaded.x_amount, 100);
        assert_eq!(loaded.y_amount, 200);
        assert_eq!(loaded.authority_bump, 254);
    }

    #[test]
    fn closed_account_data_does_not_load() {
        // a closed account has no lamports and no data left for the program
        let zeroed = vec![0u8; 8 + Escrow::INIT_SPACE];
        assert!(Escrow::try_deserialize(&mut zeroed.as_slice()).is_err());
        assert!(Escrow::try_deserialize(&mut &[][..]).is_err());
    }

    #[test]
    fn zero_amounts_are_rejected() {
        let invalid = u32::from(EscrowError::InvalidAmount);
        assert_eq!(error_code(Escrow::validate_terms(0, 200).unwrap_err()), invalid);
        assert_eq!(error_code(Escrow::validate_terms(100, 0).unwrap_err()), invalid);
        assert_eq!(error_code(Escrow::validate_terms(0, 0).unwrap_err()), invalid);
    }

    #[test]
    fn positive_amounts_are_accepted() {
        assert!(Escrow::validate_terms(100, 200).is_ok());
        assert!(Escrow::validate_terms(1, u64::MAX).is_ok());
    }

    #[test]
    fn only_the_recorded_initializer_matches() {
        let escrow = sample();
        assert!(escrow.is_initializer(&escrow.initializer_key));
        assert!(!escrow.is_initializer(&Pubkey::new_unique()));
    }
}
