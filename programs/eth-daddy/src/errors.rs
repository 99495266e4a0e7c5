use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Unauthorized (admin only)")]
    Unauthorized,

    #[msg("Registry is at max supply")]
    CapacityExceeded,

    #[msg("Invalid domain id")]
    InvalidId,

    #[msg("Domain already owned")]
    AlreadyOwned,

    #[msg("Payment is below the domain cost")]
    InsufficientPayment,

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Invalid max supply (must be at least 1)")]
    InvalidMaxSupply,

    #[msg("Invalid domain name (must be non-empty)")]
    InvalidName,

    #[msg("Source account cannot cover the transfer")]
    InsufficientFunds,

    #[msg("PDA bump not found")]
    BumpNotFound,
}
