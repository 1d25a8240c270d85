// Escrow Helper Functions
//
// Every token movement of the program goes through these CPI helpers.
// Outgoing transfers and position mints are signed by the escrow authority
// PDA of the lbp, see ESCROW_AUTHORITY_SEED.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    program::invoke_signed,
};
use anchor_spl::token_2022::spl_token_2022::instruction::AuthorityType;
use anchor_spl::token_interface::{
    burn, close_account, mint_to, set_authority, transfer_checked, Burn, CloseAccount, MintTo,
    SetAuthority, TransferChecked,
};

use crate::constants::{POOL_OPEN_TIME, POSITION_CLAIM_AMOUNT};

// Anchor instruction discriminator: first 8 bytes of sha256("namespace:name")
pub fn sighash(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{}:{}", namespace, name);
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    discriminator
}

// Instruction data of the pool program `initialize`
pub fn pool_initialize_data(init_amount_0: u64, init_amount_1: u64, open_time: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(32);
    data.extend_from_slice(&sighash("global", "initialize"));
    data.extend_from_slice(&init_amount_0.to_le_bytes());
    data.extend_from_slice(&init_amount_1.to_le_bytes());
    data.extend_from_slice(&open_time.to_le_bytes());
    data
}

// The pool program orders its two tokens by mint address.
// Returns true when the launched token is token 0.
pub fn launched_token_is_token_0(launched_token_mint: &Pubkey, raised_token_mint: &Pubkey) -> bool {
    launched_token_mint < raised_token_mint
}

// Create and seed the destination pool, the escrow authority signs as creator
pub fn create_pool<'info>(
    pool_program: &AccountInfo<'info>,
    accounts: Vec<AccountMeta>,
    account_infos: &[AccountInfo<'info>],
    init_amount_0: u64,
    init_amount_1: u64,
    escrow_authority_seeds: &[&[u8]],
) -> Result<()> {
    let instruction = Instruction {
        program_id: *pool_program.key,
        accounts,
        data: pool_initialize_data(init_amount_0, init_amount_1, POOL_OPEN_TIME),
    };

    let mut infos = account_infos.to_vec();
    infos.push(pool_program.clone());

    invoke_signed(&instruction, &infos, &[escrow_authority_seeds])?;
    Ok(())
}

// Transfer into an escrow, signed by the depositor
pub fn transfer_to_escrow<'info>(
    amount: u64,
    decimals: u8,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    escrow: &AccountInfo<'info>,
    depositor: &AccountInfo<'info>,
) -> Result<()> {
    transfer_checked(
        CpiContext::new(
            token_program.clone(),
            TransferChecked {
                from: from.clone(),
                mint: mint.clone(),
                to: escrow.clone(),
                authority: depositor.clone(),
            },
        ),
        amount,
        decimals,
    )
}

// Transfer out of an escrow, signed by the escrow authority PDA
#[allow(clippy::too_many_arguments)]
pub fn transfer_from_escrow<'info>(
    amount: u64,
    decimals: u8,
    token_program: &AccountInfo<'info>,
    escrow: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    escrow_authority: &AccountInfo<'info>,
    escrow_authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[escrow_authority_seeds];

    transfer_checked(
        CpiContext::new_with_signer(
            token_program.clone(),
            TransferChecked {
                from: escrow.clone(),
                mint: mint.clone(),
                to: to.clone(),
                authority: escrow_authority.clone(),
            },
            signer_seeds,
        ),
        amount,
        decimals,
    )
}

// Mint the single claim unit of a position, then drop the mint authority so
// the supply stays at one forever
pub fn mint_position_claim<'info>(
    token_program: &AccountInfo<'info>,
    position_mint: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    escrow_authority: &AccountInfo<'info>,
    escrow_authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[escrow_authority_seeds];

    mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: position_mint.clone(),
                to: to.clone(),
                authority: escrow_authority.clone(),
            },
            signer_seeds,
        ),
        POSITION_CLAIM_AMOUNT,
    )?;

    set_authority(
        CpiContext::new_with_signer(
            token_program.clone(),
            SetAuthority {
                current_authority: escrow_authority.clone(),
                account_or_mint: position_mint.clone(),
            },
            signer_seeds,
        ),
        AuthorityType::MintTokens,
        None,
    )
}

// Burn the claim unit and close the holder's claim token account,
// rent goes back to the holder
pub fn burn_position_claim<'info>(
    token_program: &AccountInfo<'info>,
    position_mint: &AccountInfo<'info>,
    claim_account: &AccountInfo<'info>,
    holder: &AccountInfo<'info>,
) -> Result<()> {
    burn(
        CpiContext::new(
            token_program.clone(),
            Burn {
                mint: position_mint.clone(),
                from: claim_account.clone(),
                authority: holder.clone(),
            },
        ),
        POSITION_CLAIM_AMOUNT,
    )?;

    close_account(CpiContext::new(
        token_program.clone(),
        CloseAccount {
            account: claim_account.clone(),
            destination: holder.clone(),
            authority: holder.clone(),
        },
    ))
}
