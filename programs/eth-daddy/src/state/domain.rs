use anchor_lang::prelude::*;
use crate::constants::SEED_DOMAIN;

/// One listed name (one PDA per id)
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Domain {
    /// Dense id in 1..=max_supply, assigned in listing order
    pub id: u64,
    /// Domain name (e.g., "jack.eth")
    pub name: String,
    /// Minimum payment in lamports to claim the domain
    pub cost: u64,
    /// Claimant; set exactly once by a successful mint
    pub owner: Option<Pubkey>,
    /// PDA bump
    pub bump: u8,
}

impl Domain {
    pub const SEED: &'static [u8] = SEED_DOMAIN;

    /// Account size (without discriminator) for a name of `name_len` bytes.
    pub fn space(name_len: usize) -> usize {
        8 + (4 + name_len) + 8 + (1 + 32) + 1
    }

    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    pub fn view(&self) -> DomainView {
        DomainView {
            name: self.name.clone(),
            cost: self.cost,
            is_owned: self.is_owned(),
        }
    }
}

/// Public projection of a domain, returned by `get_domain`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DomainView {
    pub name: String,
    pub cost: u64,
    pub is_owned: bool,
}
