use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
pub use state::{Domain, DomainRegistry, DomainView};

declare_id!("4QMnf1Sa6YvAe7pgYfQAVAvfkp4E2VNczHJuwfT6uUDf");

#[program]
pub mod eth_daddy {
    use super::*;

    /// Create the registry with a fixed capacity (one-time setup)
    pub fn initialize(
        ctx: Context<InitializeRegistry>,
        name: String,
        symbol: String,
        max_supply: u64,
    ) -> Result<()> {
        instructions::initialize_registry(ctx, name, symbol, max_supply)
    }

    /// List the next domain in its own PDA (admin only)
    pub fn list(ctx: Context<ListDomain>, name: String, cost: u64) -> Result<()> {
        instructions::list_domain(ctx, name, cost)
    }

    /// Claim a listed domain, paying `payment` lamports
    pub fn mint(ctx: Context<MintDomain>, id: u64, payment: u64) -> Result<()> {
        instructions::mint_domain(ctx, id, payment)
    }

    /// Sweep the registry balance to the admin (admin only)
    pub fn withdraw(ctx: Context<WithdrawBalance>) -> Result<()> {
        instructions::withdraw_balance(ctx)
    }

    pub fn get_domain(ctx: Context<ReadDomain>, id: u64) -> Result<DomainView> {
        instructions::get_domain(ctx, id)
    }

    pub fn owner_of(ctx: Context<ReadDomain>, id: u64) -> Result<Option<Pubkey>> {
        instructions::owner_of(ctx, id)
    }

    pub fn get_total_supply(ctx: Context<ReadRegistry>) -> Result<u64> {
        instructions::get_total_supply(ctx)
    }

    pub fn get_max_supply(ctx: Context<ReadRegistry>) -> Result<u64> {
        instructions::get_max_supply(ctx)
    }

    pub fn get_balance(ctx: Context<ReadRegistry>) -> Result<u64> {
        instructions::get_balance(ctx)
    }

    pub fn get_owner(ctx: Context<ReadRegistry>) -> Result<Pubkey> {
        instructions::get_owner(ctx)
    }

    pub fn get_name(ctx: Context<ReadRegistry>) -> Result<String> {
        instructions::get_name(ctx)
    }

    pub fn get_symbol(ctx: Context<ReadRegistry>) -> Result<String> {
        instructions::get_symbol(ctx)
    }
}
