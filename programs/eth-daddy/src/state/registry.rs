use anchor_lang::prelude::*;
use crate::constants::SEED_REGISTRY;
use crate::errors::RegistryError;
use super::Domain;

/// Global domain registry account
///
/// Holds the counters and the lamports paid for claims; each listed
/// domain lives in its own `Domain` PDA. `balance` tracks only claim
/// proceeds, never the rent deposit of the account.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct DomainRegistry {
    /// Authority that lists domains and withdraws proceeds
    pub admin: Pubkey,
    /// Collection name (metadata only)
    pub name: String,
    /// Collection symbol (metadata only)
    pub symbol: String,
    /// Fixed ceiling on the number of listed domains
    pub max_supply: u64,
    /// Number of listed domains; the last assigned id
    pub listed_count: u64,
    /// Number of claimed domains
    pub total_supply: u64,
    /// Unwithdrawn claim payments, in lamports
    pub balance: u64,
    /// PDA bump
    pub bump: u8,
}

impl DomainRegistry {
    pub const SEED: &'static [u8] = SEED_REGISTRY;

    /// Account size (without discriminator) for the given metadata.
    pub fn space(name: &str, symbol: &str) -> usize {
        32 + (4 + name.len()) + (4 + symbol.len()) + 8 + 8 + 8 + 8 + 1
    }

    pub fn init(
        &mut self,
        admin: Pubkey,
        name: String,
        symbol: String,
        max_supply: u64,
        bump: u8,
    ) -> Result<()> {
        require!(max_supply >= 1, RegistryError::InvalidMaxSupply);

        self.admin = admin;
        self.name = name;
        self.symbol = symbol;
        self.max_supply = max_supply;
        self.listed_count = 0;
        self.total_supply = 0;
        self.balance = 0;
        self.bump = bump;
        Ok(())
    }

    /// Id the next listing will receive; used to derive its PDA.
    pub fn next_id(&self) -> u64 {
        self.listed_count.saturating_add(1)
    }

    /// Reserve the next id and return the new unowned record.
    pub fn list(&mut self, caller: &Pubkey, name: String, cost: u64, bump: u8) -> Result<Domain> {
        require_keys_eq!(*caller, self.admin, RegistryError::Unauthorized);
        require!(!name.trim().is_empty(), RegistryError::InvalidName);

        let id = self
            .listed_count
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        require!(id <= self.max_supply, RegistryError::CapacityExceeded);

        self.listed_count = id;
        Ok(Domain {
            id,
            name,
            cost,
            owner: None,
            bump,
        })
    }

    /// Fails with `InvalidId` unless `id` is in 1..=max_supply and listed.
    pub fn check_id(&self, id: u64) -> Result<()> {
        require!(
            id >= 1 && id <= self.max_supply && id <= self.listed_count,
            RegistryError::InvalidId
        );
        Ok(())
    }

    /// Claim `domain` for `caller`. Overpayment is kept in full.
    pub fn mint(&mut self, domain: &mut Domain, caller: &Pubkey, payment: u64) -> Result<()> {
        self.check_id(domain.id)?;
        require!(!domain.is_owned(), RegistryError::AlreadyOwned);
        require!(payment >= domain.cost, RegistryError::InsufficientPayment);

        let total_supply = self
            .total_supply
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        let balance = self
            .balance
            .checked_add(payment)
            .ok_or(RegistryError::Overflow)?;

        domain.owner = Some(*caller);
        self.total_supply = total_supply;
        self.balance = balance;
        Ok(())
    }

    /// Zero the balance and return the amount the caller must pay out.
    pub fn withdraw(&mut self, caller: &Pubkey) -> Result<u64> {
        require_keys_eq!(*caller, self.admin, RegistryError::Unauthorized);
        Ok(std::mem::take(&mut self.balance))
    }

    pub fn owner(&self) -> Pubkey {
        self.admin
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn max_supply(&self) -> u64 {
        self.max_supply
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn listed_count(&self) -> u64 {
        self.listed_count
    }
}
