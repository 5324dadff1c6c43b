/// Seed prefix of the per-escrow vault authority PDA: `["authority", escrow]`
pub const AUTHORITY_SEED: &[u8] = b"authority";

/// Seed prefix of the vault token account PDA: `["vault", escrow]`
pub const VAULT_SEED: &[u8] = b"vault";
