//! Vault authority derivation.
//!
//! Every escrow gets its own program-derived signer, `["authority", escrow]`.
//! The vault token account names this address as its token authority, so only
//! this program can move or close the vault, and only through the seeds below.

use anchor_lang::prelude::*;

use crate::{constants::AUTHORITY_SEED, errors::EscrowError};

/// Finds the canonical vault authority address and bump for `escrow`
pub fn derive(escrow: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AUTHORITY_SEED, escrow.as_ref()], program_id)
}

/// Checks that `(escrow, bump)` reproduces `expected`.
///
/// A bump that lands on the curve, or lands on a different address, is
/// rejected with `InvalidAuthorityBump`.
pub fn verify(escrow: &Pubkey, bump: u8, expected: &Pubkey, program_id: &Pubkey) -> Result<()> {
    let derived =
        Pubkey::create_program_address(&[AUTHORITY_SEED, escrow.as_ref(), &[bump]], program_id)
            .map_err(|_| error!(EscrowError::InvalidAuthorityBump))?;
    require_keys_eq!(derived, *expected, EscrowError::InvalidAuthorityBump);
    Ok(())
}

/// Signer seeds for CPIs that must be authorized by the vault authority
pub fn signer_seeds<'a>(escrow: &'a Pubkey, bump: &'a [u8; 1]) -> [&'a [u8]; 3] {
    [AUTHORITY_SEED, escrow.as_ref(), bump]
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::solana_program::program_error::ProgramError;

    fn error_code(err: anchor_lang::error::Error) -> u32 {
        match ProgramError::from(err) {
            ProgramError::Custom(code) => code,
            other => panic!("expected a custom error, got {other:?}"),
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let escrow = Pubkey::new_unique();
        assert_eq!(derive(&escrow, &crate::ID), derive(&escrow, &crate::ID));
    }

    #[test]
    fn each_escrow_gets_its_own_authority() {
        let (a, _) = derive(&Pubkey::new_unique(), &crate::ID);
        let (b, _) = derive(&Pubkey::new_unique(), &crate::ID);
        assert_ne!(a, b);
    }

    #[test]
    fn derived_authority_is_off_curve() {
        let (authority, _) = derive(&Pubkey::new_unique(), &crate::ID);
        assert!(!authority.is_on_curve());
    }

    #[test]
    fn authority_depends_on_program_id() {
        let escrow = Pubkey::new_unique();
        let (ours, _) = derive(&escrow, &crate::ID);
        let (theirs, _) = derive(&escrow, &Pubkey::new_unique());
        assert_ne!(ours, theirs);
    }

    #[test]
    fn canonical_bump_verifies() {
        let escrow = Pubkey::new_unique();
        let (authority, bump) = derive(&escrow, &crate::ID);
        assert!(verify(&escrow, bump, &authority, &crate::ID).is_ok());
    }

    #[test]
    fn forged_authority_is_rejected() {
        let escrow = Pubkey::new_unique();
        let (_, bump) = derive(&escrow, &crate::ID);
        let forged = Pubkey::new_unique();

        let err = verify(&escrow, bump, &forged, &crate::ID).unwrap_err();
        assert_eq!(error_code(err), u32::from(EscrowError::InvalidAuthorityBump));
    }

    #[test]
    fn authority_of_another_escrow_is_rejected() {
        let escrow = Pubkey::new_unique();
        let (other_authority, other_bump) = derive(&Pubkey::new_unique(), &crate::ID);

        assert!(verify(&escrow, other_bump, &other_authority, &crate::ID).is_err());
    }

    #[test]
    fn wrong_bump_is_rejected() {
        let escrow = Pubkey::new_unique();
        let (authority, bump) = derive(&escrow, &crate::ID);

        // Any other bump either lands on the curve or on a different address
        for other in (0..=u8::MAX).filter(|b| *b != bump) {
            assert!(verify(&escrow, other, &authority, &crate::ID).is_err());
        }
    }

    #[test]
    fn signer_seeds_recreate_the_authority() {
        let escrow = Pubkey::new_unique();
        let (authority, bump) = derive(&escrow, &crate::ID);
        let bump = [bump];
        let seeds = signer_seeds(&escrow, &bump);

        let recreated = Pubkey::create_program_address(&seeds, &crate::ID).unwrap();
        assert_eq!(recreated, authority);
    }
}
