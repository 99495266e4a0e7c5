use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::state::*;
use super::query::load_domain;

/// Claim a listed domain by paying at least its cost
pub fn mint_domain(ctx: Context<MintDomain>, id: u64, payment: u64) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();

    let mut domain = load_domain(&ctx.accounts.registry, &ctx.accounts.domain, id)?;
    ctx.accounts.registry.mint(&mut domain, &buyer, payment)?;
    domain.exit(ctx.program_id)?;
    let total_supply = ctx.accounts.registry.total_supply;

    // Payment lands in the registry PDA after the claim is recorded; a
    // failed transfer reverts the whole instruction.
    if payment > 0 {
        let cpi_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.registry.to_account_info(),
            },
        );
        system_program::transfer(cpi_ctx, payment)?;
    }

    msg!("Minted domain {} to {} for {} lamports", id, buyer, payment);

    emit!(DomainMinted {
        id,
        owner: buyer,
        payment,
        total_supply,
    });

    Ok(())
}

#[event]
pub struct DomainMinted {
    pub id: u64,
    pub owner: Pubkey,
    pub payment: u64,
    pub total_supply: u64,
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct MintDomain<'info> {
    #[account(mut, seeds = [DomainRegistry::SEED], bump = registry.bump)]
    pub registry: Account<'info, DomainRegistry>,

    /// CHECK: deserialized by `load_domain` once `id` is known to be listed
    #[account(mut, seeds = [Domain::SEED, id.to_le_bytes().as_ref()], bump)]
    pub domain: UncheckedAccount<'info>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
