// Move To Vesting Phase Instruction
//
// Closes a successful raise: the lbp enters the vesting phase and the
// destination pool is created with
//   launched side: launched_token_cap * lp_distribution / 100
//   raised side:   raised_token_cap
// The rest of the launched token stays in escrow for the reward pool.
//
// The escrow authority is the pool creator. It pays the pool accounts rent
// and creation fee, so it has to be funded with lamports beforehand.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::AccountMeta;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::Token,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::*,
    errors::*,
    events::{PhaseChanged, PoolSeeded},
    helpers::*,
    state::*,
};

#[derive(Accounts)]
pub struct MoveToVestingPhase<'info> {
    pub admin_authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [LBP_SEED, lbp.uid.to_le_bytes().as_ref()],
        bump = lbp.bump,
    )]
    pub lbp: Box<Account<'info, Lbp>>,

    /// CHECK: PDA signer, creator and payer of the pool
    #[account(
        mut,
        seeds = [ESCROW_AUTHORITY_SEED, lbp.key().as_ref()],
        bump = lbp.escrow_authority_bump,
    )]
    pub escrow_authority: UncheckedAccount<'info>,

    #[account(address = lbp.launched_token_mint @ LbpError::InvalidMint)]
    pub launched_token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(address = lbp.raised_token_mint @ LbpError::InvalidMint)]
    pub raised_token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        address = lbp.launched_token_escrow,
    )]
    pub launched_token_escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = lbp.raised_token_escrow,
    )]
    pub raised_token_escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: only the supported pool program is accepted
    #[account(address = POOL_PROGRAM_ID @ LbpError::InvalidPoolProgram)]
    pub pool_program: UncheckedAccount<'info>,

    // Accounts below are validated by the pool program

    /// CHECK: pool fee configuration
    pub amm_config: UncheckedAccount<'info>,

    /// CHECK: pool vault and lp mint authority
    pub pool_authority: UncheckedAccount<'info>,

    /// CHECK: created by the pool program
    #[account(mut)]
    pub pool_state: UncheckedAccount<'info>,

    /// CHECK: created by the pool program
    #[account(mut)]
    pub lp_mint: UncheckedAccount<'info>,

    /// CHECK: escrow authority lp token account, created by the pool program
    #[account(mut)]
    pub creator_lp_token: UncheckedAccount<'info>,

    /// CHECK: created by the pool program
    #[account(mut)]
    pub token_0_vault: UncheckedAccount<'info>,

    /// CHECK: created by the pool program
    #[account(mut)]
    pub token_1_vault: UncheckedAccount<'info>,

    /// CHECK: pool creation fee receiver
    #[account(mut)]
    pub create_pool_fee: UncheckedAccount<'info>,

    /// CHECK: created by the pool program
    #[account(mut)]
    pub observation_state: UncheckedAccount<'info>,

    // Lp mint token program
    pub lp_token_program: Program<'info, Token>,
    // Token program of both lbp mints
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> MoveToVestingPhase<'info> {
    pub fn move_to_vesting_phase(&mut self) -> Result<()> {
        self.config
            .assert_admin_authority(&self.admin_authority.key())?;

        let now = Clock::get()?.unix_timestamp;
        let from = self.lbp.phase;
        self.lbp
            .enter_vesting_phase(now, self.launched_token_escrow.amount)?;

        let launched_token_amount = self.lbp.lp_launched_token_amount()?;
        let raised_token_amount = self.lbp.raised_token_cap;

        self.seed_pool(launched_token_amount, raised_token_amount)?;

        let lbp_key = self.lbp.key();

        emit!(PhaseChanged {
            lbp: lbp_key,
            from,
            to: self.lbp.phase,
            timestamp: now,
        });

        emit!(PoolSeeded {
            lbp: lbp_key,
            pool_state: self.pool_state.key(),
            launched_token_amount,
            raised_token_amount,
        });

        msg!("Lbp {} moved to vesting phase", self.lbp.uid);
        msg!(
            "Pool seeded with {} launched / {} raised tokens, {} launched tokens left in escrow",
            launched_token_amount,
            raised_token_amount,
            self.lbp.reward_launched_token_amount()?
        );

        Ok(())
    }

    fn seed_pool(&self, launched_token_amount: u64, raised_token_amount: u64) -> Result<()> {
        let launched = (
            self.launched_token_mint.to_account_info(),
            self.launched_token_escrow.to_account_info(),
            launched_token_amount,
        );
        let raised = (
            self.raised_token_mint.to_account_info(),
            self.raised_token_escrow.to_account_info(),
            raised_token_amount,
        );

        let ((mint_0, creator_token_0, amount_0), (mint_1, creator_token_1, amount_1)) =
            if launched_token_is_token_0(&self.lbp.launched_token_mint, &self.lbp.raised_token_mint) {
                (launched, raised)
            } else {
                (raised, launched)
            };

        let token_program = self.token_program.to_account_info();

        let account_infos = vec![
            self.escrow_authority.to_account_info(),
            self.amm_config.to_account_info(),
            self.pool_authority.to_account_info(),
            self.pool_state.to_account_info(),
            mint_0,
            mint_1,
            self.lp_mint.to_account_info(),
            creator_token_0,
            creator_token_1,
            self.creator_lp_token.to_account_info(),
            self.token_0_vault.to_account_info(),
            self.token_1_vault.to_account_info(),
            self.create_pool_fee.to_account_info(),
            self.observation_state.to_account_info(),
            self.lp_token_program.to_account_info(),
            token_program.clone(),
            token_program,
            self.associated_token_program.to_account_info(),
            self.system_program.to_account_info(),
            self.rent.to_account_info(),
        ];

        let accounts = vec![
            AccountMeta::new(*account_infos[0].key, true),
            AccountMeta::new_readonly(*account_infos[1].key, false),
            AccountMeta::new_readonly(*account_infos[2].key, false),
            AccountMeta::new(*account_infos[3].key, false),
            AccountMeta::new_readonly(*account_infos[4].key, false),
            AccountMeta::new_readonly(*account_infos[5].key, false),
            AccountMeta::new(*account_infos[6].key, false),
            AccountMeta::new(*account_infos[7].key, false),
            AccountMeta::new(*account_infos[8].key, false),
            AccountMeta::new(*account_infos[9].key, false),
            AccountMeta::new(*account_infos[10].key, false),
            AccountMeta::new(*account_infos[11].key, false),
            AccountMeta::new(*account_infos[12].key, false),
            AccountMeta::new(*account_infos[13].key, false),
            AccountMeta::new_readonly(*account_infos[14].key, false),
            AccountMeta::new_readonly(*account_infos[15].key, false),
            AccountMeta::new_readonly(*account_infos[16].key, false),
            AccountMeta::new_readonly(*account_infos[17].key, false),
            AccountMeta::new_readonly(*account_infos[18].key, false),
            AccountMeta::new_readonly(*account_infos[19].key, false),
        ];

        let lbp_key = self.lbp.key();
        let bump = [self.lbp.escrow_authority_bump];
        let escrow_authority_seeds: &[&[u8]] = &[ESCROW_AUTHORITY_SEED, lbp_key.as_ref(), &bump];

        create_pool(
            &self.pool_program.to_account_info(),
            accounts,
            &account_infos,
            amount_0,
            amount_1,
            escrow_authority_seeds,
        )
    }
}
