use anchor_lang::prelude::*;
use crate::errors::RegistryError;
use crate::state::*;
use crate::utils::transfer_lamports;

/// Create the registry; the signer becomes its admin
pub fn initialize_registry(
    ctx: Context<InitializeRegistry>,
    name: String,
    symbol: String,
    max_supply: u64,
) -> Result<()> {
    let bump = *ctx
        .bumps
        .get("registry")
        .ok_or(RegistryError::BumpNotFound)?;
    let admin = ctx.accounts.admin.key();

    ctx.accounts
        .registry
        .init(admin, name, symbol, max_supply, bump)?;

    msg!(
        "Initialized registry {} ({}) max_supply={} admin={}",
        ctx.accounts.registry.name,
        ctx.accounts.registry.symbol,
        max_supply,
        admin
    );

    Ok(())
}

/// List the next domain for sale in its own PDA
pub fn list_domain(ctx: Context<ListDomain>, name: String, cost: u64) -> Result<()> {
    let bump = *ctx
        .bumps
        .get("domain")
        .ok_or(RegistryError::BumpNotFound)?;
    let admin = ctx.accounts.admin.key();

    let record = ctx.accounts.registry.list(&admin, name, cost, bump)?;
    let id = record.id;
    *ctx.accounts.domain = record;

    msg!("Listed domain {}: {} for {} lamports", id, ctx.accounts.domain.name, cost);

    emit!(DomainListed {
        id,
        name: ctx.accounts.domain.name.clone(),
        cost,
    });

    Ok(())
}

/// Sweep all claim proceeds to the admin
pub fn withdraw_balance(ctx: Context<WithdrawBalance>) -> Result<()> {
    let admin = ctx.accounts.admin.key();

    // Balance is committed to zero before any lamports leave the registry.
    let amount = ctx.accounts.registry.withdraw(&admin)?;

    transfer_lamports(
        &ctx.accounts.registry.to_account_info(),
        &ctx.accounts.admin.to_account_info(),
        amount,
    )?;

    msg!("Withdrew {} lamports to {}", amount, admin);

    emit!(Withdrawn { admin, amount });

    Ok(())
}

#[event]
pub struct DomainListed {
    pub id: u64,
    pub name: String,
    pub cost: u64,
}

#[event]
pub struct Withdrawn {
    pub admin: Pubkey,
    pub amount: u64,
}

#[derive(Accounts)]
#[instruction(name: String, symbol: String)]
pub struct InitializeRegistry<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + DomainRegistry::space(&name, &symbol),
        seeds = [DomainRegistry::SEED],
        bump
    )]
    pub registry: Account<'info, DomainRegistry>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(name: String)]
pub struct ListDomain<'info> {
    #[account(mut, seeds = [DomainRegistry::SEED], bump = registry.bump)]
    pub registry: Account<'info, DomainRegistry>,

    #[account(
        init,
        payer = admin,
        space = 8 + Domain::space(name.len()),
        seeds = [Domain::SEED, registry.next_id().to_le_bytes().as_ref()],
        bump
    )]
    pub domain: Account<'info, Domain>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct WithdrawBalance<'info> {
    #[account(mut, seeds = [DomainRegistry::SEED], bump = registry.bump)]
    pub registry: Account<'info, DomainRegistry>,

    #[account(mut)]
    pub admin: Signer<'info>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
    use std::collections::BTreeMap;

    const RENT_DEPOSIT: u64 = 1_000_000;
    const COST: u64 = 10_000_000_000;

    fn funded_registry(admin: Pubkey) -> DomainRegistry {
        let mut registry = DomainRegistry::default();
        registry
            .init(admin, "ETH Daddy".into(), "ETHD".into(), 1, 254)
            .unwrap();
        let mut domain = registry.list(&admin, "jack.eth".into(), COST, 253).unwrap();
        registry.mint(&mut domain, &Pubkey::new_unique(), COST).unwrap();
        registry
    }

    #[test]
    fn withdraw_balance_zeroes_ledger_and_pays_admin() {
        let program_id = crate::ID;
        let system_id = Pubkey::default();
        let (registry_key, admin_key) = (Pubkey::new_unique(), Pubkey::new_unique());

        let mut registry_data = Vec::new();
        funded_registry(admin_key)
            .try_serialize(&mut registry_data)
            .unwrap();
        let mut registry_lamports: u64 = RENT_DEPOSIT + COST;
        let mut admin_lamports: u64 = 5_000;
        let mut admin_data: Vec<u8> = Vec::new();
        let registry_info = AccountInfo::new(
            &registry_key,
            false,
            true,
            &mut registry_lamports,
            &mut registry_data,
            &program_id,
            false,
            0,
        );
        let admin_info = AccountInfo::new(
            &admin_key,
            true,
            true,
            &mut admin_lamports,
            &mut admin_data,
            &system_id,
            false,
            0,
        );

        let mut accounts = WithdrawBalance {
            registry: Account::try_from(&registry_info).unwrap(),
            admin: Signer::try_from(&admin_info).unwrap(),
        };
        withdraw_balance(Context::new(&program_id, &mut accounts, &[], BTreeMap::new())).unwrap();

        assert_eq!(accounts.registry.balance, 0);
        assert_eq!(registry_info.lamports(), RENT_DEPOSIT);
        assert_eq!(admin_info.lamports(), 5_000 + COST);
    }

    #[test]
    fn withdraw_balance_rejects_non_admin_without_moving_lamports() {
        let program_id = crate::ID;
        let system_id = Pubkey::default();
        let (registry_key, admin_key, intruder_key) =
            (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());

        let mut registry_data = Vec::new();
        funded_registry(admin_key)
            .try_serialize(&mut registry_data)
            .unwrap();
        let mut registry_lamports: u64 = RENT_DEPOSIT + COST;
        let mut intruder_lamports: u64 = 5_000;
        let mut intruder_data: Vec<u8> = Vec::new();
        let registry_info = AccountInfo::new(
            &registry_key,
            false,
            true,
            &mut registry_lamports,
            &mut registry_data,
            &program_id,
            false,
            0,
        );
        let intruder_info = AccountInfo::new(
            &intruder_key,
            true,
            true,
            &mut intruder_lamports,
            &mut intruder_data,
            &system_id,
            false,
            0,
        );

        let mut accounts = WithdrawBalance {
            registry: Account::try_from(&registry_info).unwrap(),
            admin: Signer::try_from(&intruder_info).unwrap(),
        };
        let result =
            withdraw_balance(Context::new(&program_id, &mut accounts, &[], BTreeMap::new()));

        match result {
            Err(Error::AnchorError(e)) => assert_eq!(
                e.error_code_number,
                ERROR_CODE_OFFSET + RegistryError::Unauthorized as u32
            ),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
        assert_eq!(accounts.registry.balance, COST);
        assert_eq!(registry_info.lamports(), RENT_DEPOSIT + COST);
        assert_eq!(intruder_info.lamports(), 5_000);
    }
}
