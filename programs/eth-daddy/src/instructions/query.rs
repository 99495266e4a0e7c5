use anchor_lang::prelude::*;
use crate::state::*;

// Read-only views. Values reach the caller as instruction return data.

pub fn get_domain(ctx: Context<ReadDomain>, id: u64) -> Result<DomainView> {
    let domain = load_domain(&ctx.accounts.registry, &ctx.accounts.domain, id)?;
    Ok(domain.view())
}

pub fn owner_of(ctx: Context<ReadDomain>, id: u64) -> Result<Option<Pubkey>> {
    let domain = load_domain(&ctx.accounts.registry, &ctx.accounts.domain, id)?;
    Ok(domain.owner)
}

pub fn get_total_supply(ctx: Context<ReadRegistry>) -> Result<u64> {
    Ok(ctx.accounts.registry.total_supply())
}

pub fn get_max_supply(ctx: Context<ReadRegistry>) -> Result<u64> {
    Ok(ctx.accounts.registry.max_supply())
}

pub fn get_balance(ctx: Context<ReadRegistry>) -> Result<u64> {
    Ok(ctx.accounts.registry.balance())
}

pub fn get_owner(ctx: Context<ReadRegistry>) -> Result<Pubkey> {
    Ok(ctx.accounts.registry.owner())
}

pub fn get_name(ctx: Context<ReadRegistry>) -> Result<String> {
    Ok(ctx.accounts.registry.name().to_string())
}

pub fn get_symbol(ctx: Context<ReadRegistry>) -> Result<String> {
    Ok(ctx.accounts.registry.symbol().to_string())
}

/// Validate `id` against the registry, then deserialize its domain PDA.
///
/// Unlisted ids fail with `InvalidId` before the (possibly empty) account
/// is touched.
pub fn load_domain<'info>(
    registry: &DomainRegistry,
    domain: &UncheckedAccount<'info>,
    id: u64,
) -> Result<Account<'info, Domain>> {
    registry.check_id(id)?;
    Account::try_from(&domain.to_account_info())
}

#[derive(Accounts)]
pub struct ReadRegistry<'info> {
    #[account(seeds = [DomainRegistry::SEED], bump = registry.bump)]
    pub registry: Account<'info, DomainRegistry>,
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct ReadDomain<'info> {
    #[account(seeds = [DomainRegistry::SEED], bump = registry.bump)]
    pub registry: Account<'info, DomainRegistry>,

    /// CHECK: deserialized by `load_domain` once `id` is known to be listed
    #[account(seeds = [Domain::SEED, id.to_le_bytes().as_ref()], bump)]
    pub domain: UncheckedAccount<'info>,
}
