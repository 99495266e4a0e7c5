use anchor_lang::prelude::*;
use crate::errors::RegistryError;

/// Move lamports directly between two accounts.
///
/// `from` must be owned by this program; the runtime rejects debits from
/// accounts owned by anyone else.
pub fn transfer_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let debited = from
        .lamports()
        .checked_sub(amount)
        .ok_or(RegistryError::InsufficientFunds)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(RegistryError::Overflow)?;

    **from.try_borrow_mut_lamports()? = debited;
    **to.try_borrow_mut_lamports()? = credited;
    Ok(())
}
