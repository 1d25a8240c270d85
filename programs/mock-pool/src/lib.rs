// Mock Pool Program
//
// Deployed at the CP-swap address in the lbp escrow integration tests.
// `initialize` takes the CP-swap account list and arguments, moves the
// initial amounts from the creator token accounts into the vaults and
// records them in a pool state account paid for by the creator.
//
// The vaults are plain token accounts created by the test beforehand,
// lp tokens and fees are not modelled.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::Token,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

declare_id!("CPMMoo8L3F4NbTegBCKVNunggL7H1ZpdTHKxQB5qKP1C");

pub const POOL_SEED: &[u8] = b"pool";

#[program]
pub mod mock_pool {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        init_amount_0: u64,
        init_amount_1: u64,
        open_time: u64,
    ) -> Result<()> {
        ctx.accounts
            .initialize(init_amount_0, init_amount_1, open_time, &ctx.bumps)
    }
}

#[account]
#[derive(InitSpace)]
pub struct PoolState {
    pub creator: Pubkey,
    pub amm_config: Pubkey,
    pub token_0_mint: Pubkey,
    pub token_1_mint: Pubkey,
    pub token_0_vault: Pubkey,
    pub token_1_vault: Pubkey,
    pub init_amount_0: u64,
    pub init_amount_1: u64,
    pub open_time: u64,
    pub bump: u8,
}

#[error_code]
pub enum MockPoolError {
    #[msg("Token 0 mint must sort before token 1 mint")]
    InvalidTokenOrder,
}

// Same order as the CP-swap initialize accounts
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    /// CHECK: fee configuration, not read
    pub amm_config: UncheckedAccount<'info>,

    /// CHECK: vault authority, not read
    pub authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = creator,
        space = 8 + PoolState::INIT_SPACE,
        seeds = [POOL_SEED, amm_config.key().as_ref(), token_0_mint.key().as_ref(), token_1_mint.key().as_ref()],
        bump
    )]
    pub pool_state: Box<Account<'info, PoolState>>,

    #[account(
        mint::token_program = token_0_program,
        constraint = token_0_mint.key() < token_1_mint.key() @ MockPoolError::InvalidTokenOrder,
    )]
    pub token_0_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mint::token_program = token_1_program)]
    pub token_1_mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: lp tokens are not modelled
    #[account(mut)]
    pub lp_mint: UncheckedAccount<'info>,

    #[account(
        mut,
        token::mint = token_0_mint,
        token::authority = creator,
    )]
    pub creator_token_0: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_1_mint,
        token::authority = creator,
    )]
    pub creator_token_1: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: lp tokens are not modelled
    #[account(mut)]
    pub creator_lp_token: UncheckedAccount<'info>,

    #[account(
        mut,
        token::mint = token_0_mint,
        token::authority = authority,
    )]
    pub token_0_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_1_mint,
        token::authority = authority,
    )]
    pub token_1_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: fees are not modelled
    #[account(mut)]
    pub create_pool_fee: UncheckedAccount<'info>,

    /// CHECK: not modelled
    #[account(mut)]
    pub observation_state: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub token_0_program: Interface<'info, TokenInterface>,
    pub token_1_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        init_amount_0: u64,
        init_amount_1: u64,
        open_time: u64,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        self.deposit(
            init_amount_0,
            &self.token_0_program,
            &self.creator_token_0,
            &self.token_0_mint,
            &self.token_0_vault,
        )?;
        self.deposit(
            init_amount_1,
            &self.token_1_program,
            &self.creator_token_1,
            &self.token_1_mint,
            &self.token_1_vault,
        )?;

        self.pool_state.set_inner(PoolState {
            creator: self.creator.key(),
            amm_config: self.amm_config.key(),
            token_0_mint: self.token_0_mint.key(),
            token_1_mint: self.token_1_mint.key(),
            token_0_vault: self.token_0_vault.key(),
            token_1_vault: self.token_1_vault.key(),
            init_amount_0,
            init_amount_1,
            open_time,
            bump: bumps.pool_state,
        });

        msg!("Pool seeded with {} / {}", init_amount_0, init_amount_1);

        Ok(())
    }

    fn deposit(
        &self,
        amount: u64,
        token_program: &Interface<'info, TokenInterface>,
        from: &InterfaceAccount<'info, TokenAccount>,
        mint: &InterfaceAccount<'info, Mint>,
        vault: &InterfaceAccount<'info, TokenAccount>,
    ) -> Result<()> {
        transfer_checked(
            CpiContext::new(
                token_program.to_account_info(),
                TransferChecked {
                    from: from.to_account_info(),
                    mint: mint.to_account_info(),
                    to: vault.to_account_info(),
                    authority: self.creator.to_account_info(),
                },
            ),
            amount,
            mint.decimals,
        )
    }
}
