// Test utilities for the lbp escrow program

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use borsh::BorshSerialize;
use litesvm::LiteSVM;
use litesvm_token::{CreateAccount, CreateAssociatedTokenAccount, CreateMint, MintTo};
use solana_sdk::{
    account::Account,
    clock::Clock,
    hash::hash,
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id!
pub const LBP_PROGRAM_ID: Pubkey = Pubkey::new_from_array(lbp_escrow::ID.to_bytes());
pub const POOL_PROGRAM_ID: Pubkey =
    Pubkey::new_from_array(lbp_escrow::constants::POOL_PROGRAM_ID.to_bytes());

// Standard program IDs
pub const BPF_LOADER_UPGRADEABLE_ID: Pubkey = Pubkey::new_from_array(
    anchor_lang::solana_program::bpf_loader_upgradeable::ID.to_bytes(),
);
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// PDA Seeds
pub const CONFIG: &[u8] = b"config";
pub const LBP: &[u8] = b"lbp";
pub const ESCROW_AUTHORITY: &[u8] = b"escrow_authority";
pub const POSITION: &[u8] = b"position";

// Token decimals
pub const DECIMALS: u8 = 6;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with the lbp escrow program, deployed upgradeable with the
// given upgrade authority, and the mock pool at the pool program address
pub fn setup_svm(upgrade_authority: Option<&Pubkey>) -> LiteSVM {
    let mut svm = LiteSVM::new();

    let program_bytes = include_bytes!("../../../target/deploy/lbp_escrow.so");
    deploy_upgradeable_program(&mut svm, &LBP_PROGRAM_ID, program_bytes, upgrade_authority);

    let pool_bytes = include_bytes!("../../../target/deploy/mock_pool.so");
    svm.add_program(POOL_PROGRAM_ID, pool_bytes)
        .expect("Failed to add mock pool program");

    svm
}

pub fn derive_program_data_address(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[program_id.as_ref()], &BPF_LOADER_UPGRADEABLE_ID).0
}

// Write the program and program data accounts the way the upgradeable loader
// lays them out (bincode UpgradeableLoaderState)
pub fn deploy_upgradeable_program(
    svm: &mut LiteSVM,
    program_id: &Pubkey,
    program_bytes: &[u8],
    upgrade_authority: Option<&Pubkey>,
) {
    let program_data_address = derive_program_data_address(program_id);

    // ProgramData { slot, upgrade_authority_address }, 45 bytes, then the elf
    let mut program_data = Vec::with_capacity(45 + program_bytes.len());
    program_data.extend_from_slice(&3u32.to_le_bytes());
    program_data.extend_from_slice(&0u64.to_le_bytes());
    match upgrade_authority {
        Some(authority) => {
            program_data.push(1);
            program_data.extend_from_slice(authority.as_ref());
        }
        None => program_data.extend_from_slice(&[0u8; 33]),
    }
    program_data.extend_from_slice(program_bytes);

    // Program { programdata_address }
    let mut program = Vec::with_capacity(36);
    program.extend_from_slice(&2u32.to_le_bytes());
    program.extend_from_slice(program_data_address.as_ref());

    // The program data must exist before the program account is loaded
    let lamports = svm.minimum_balance_for_rent_exemption(program_data.len());
    svm.set_account(
        program_data_address,
        Account {
            lamports,
            data: program_data,
            owner: BPF_LOADER_UPGRADEABLE_ID,
            executable: false,
            rent_epoch: 0,
        },
    )
    .expect("Failed to write program data account");

    let lamports = svm.minimum_balance_for_rent_exemption(program.len());
    svm.set_account(
        *program_id,
        Account {
            lamports,
            data: program,
            owner: BPF_LOADER_UPGRADEABLE_ID,
            executable: true,
            rent_epoch: 0,
        },
    )
    .expect("Failed to write program account");
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn now(svm: &LiteSVM) -> i64 {
    svm.get_sysvar::<Clock>().unix_timestamp
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds * 2) + 5);
}

pub fn send(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> Result<(), String> {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx).map(|_| ()).map_err(|e| format!("{:?}", e));
    svm.expire_blockhash();
    result
}

// Send a transaction that must fail with the given program error
pub fn expect_error(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
    error: lbp_escrow::LbpError,
) {
    let code = u32::from(error);
    let err = send(svm, ix, payer, signers).expect_err("Transaction should have failed");
    assert!(
        err.contains(&format!("Custom({})", code)),
        "expected custom error {}, got {}",
        code,
        err
    );
}

pub fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account: spl_token::state::Account = litesvm_token::get_spl_account(svm, token_account)
        .expect("Token account should exist");
    account.amount
}

pub fn fetch_lbp(svm: &LiteSVM, uid: u64) -> lbp_escrow::Lbp {
    let (lbp, _) = derive_lbp_pda(uid);
    let account = svm.get_account(&lbp).expect("Lbp should exist");
    lbp_escrow::Lbp::try_deserialize(&mut account.data.as_slice()).expect("Lbp should deserialize")
}

pub fn fetch_config(svm: &LiteSVM) -> lbp_escrow::Config {
    let (config, _) = derive_config_pda();
    let account = svm.get_account(&config).expect("Config should exist");
    lbp_escrow::Config::try_deserialize(&mut account.data.as_slice())
        .expect("Config should deserialize")
}

// Anchor and sdk pubkeys are distinct types with the same bytes
pub fn same_key(anchor_key: &anchor_lang::prelude::Pubkey, key: &Pubkey) -> bool {
    anchor_key.to_bytes() == key.to_bytes()
}

// ======================== PDAS ========================

pub fn derive_config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG], &LBP_PROGRAM_ID)
}

pub fn derive_lbp_pda(uid: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LBP, &uid.to_le_bytes()], &LBP_PROGRAM_ID)
}

pub fn derive_escrow_authority_pda(lbp: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ESCROW_AUTHORITY, lbp.as_ref()], &LBP_PROGRAM_ID)
}

pub fn derive_position_pda(lbp: &Pubkey, position_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POSITION, lbp.as_ref(), position_mint.as_ref()],
        &LBP_PROGRAM_ID,
    )
}

pub fn escrow_addresses(uid: u64, mint: &Pubkey) -> (Pubkey, Pubkey, Pubkey) {
    let (lbp, _) = derive_lbp_pda(uid);
    let (escrow_authority, _) = derive_escrow_authority_pda(&lbp);
    let escrow = get_associated_token_address(&escrow_authority, mint);
    (lbp, escrow_authority, escrow)
}

// ======================== INSTRUCTIONS ========================

// Mirrors lbp_escrow::LbpInitializeData with sdk pubkeys
#[derive(Clone, Debug)]
pub struct LbpParams {
    pub uid: u64,
    pub project: Pubkey,
    pub launched_token_mint: Pubkey,
    pub launched_token_lp_distribution: u8,
    pub launched_token_cap: u64,
    pub raised_token_mint: Pubkey,
    pub raised_token_min_cap: u64,
    pub raised_token_max_cap: u64,
    pub fund_collection_start_time: i64,
    pub fund_collection_end_time: i64,
    pub cliff_duration: u64,
    pub vesting_duration: u64,
}

impl LbpParams {
    // Borsh field order of LbpInitializeData
    fn instruction_data(&self) -> Vec<u8> {
        let mut data = Vec::new();
        (
            self.uid,
            self.project.to_bytes(),
            self.launched_token_mint.to_bytes(),
            self.launched_token_lp_distribution,
            self.launched_token_cap,
            self.raised_token_mint.to_bytes(),
            self.raised_token_min_cap,
            self.raised_token_max_cap,
        )
            .serialize(&mut data)
            .expect("Failed to serialize lbp params");
        (
            self.fund_collection_start_time,
            self.fund_collection_end_time,
            self.cliff_duration,
            self.vesting_duration,
        )
            .serialize(&mut data)
            .expect("Failed to serialize lbp params");
        data
    }
}

// Build initialize instruction
pub fn build_initialize_ix(deployer: &Pubkey, admin: &Pubkey, whitelist: &Pubkey) -> Instruction {
    let (config, _) = derive_config_pda();

    let mut data = anchor_discriminator("initialize").to_vec();
    data.extend_from_slice(admin.as_ref());
    data.extend_from_slice(whitelist.as_ref());

    Instruction {
        program_id: LBP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*deployer, true),
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(LBP_PROGRAM_ID, false),
            AccountMeta::new_readonly(derive_program_data_address(&LBP_PROGRAM_ID), false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build nominate_new_admin_authority instruction
pub fn build_nominate_admin_ix(admin: &Pubkey, nominee: &Pubkey) -> Instruction {
    let (config, _) = derive_config_pda();

    let mut data = anchor_discriminator("nominate_new_admin_authority").to_vec();
    data.extend_from_slice(nominee.as_ref());

    Instruction {
        program_id: LBP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(config, false),
        ],
        data,
    }
}

// Build accept_admin_authority instruction
pub fn build_accept_admin_ix(new_admin: &Pubkey) -> Instruction {
    let (config, _) = derive_config_pda();

    Instruction {
        program_id: LBP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*new_admin, true),
            AccountMeta::new(config, false),
        ],
        data: anchor_discriminator("accept_admin_authority").to_vec(),
    }
}

// Build set_whitelist_authority instruction
pub fn build_set_whitelist_ix(admin: &Pubkey, whitelist: &Pubkey) -> Instruction {
    let (config, _) = derive_config_pda();

    let mut data = anchor_discriminator("set_whitelist_authority").to_vec();
    data.extend_from_slice(whitelist.as_ref());

    Instruction {
        program_id: LBP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(config, false),
        ],
        data,
    }
}

// Build initialize_lbp instruction
pub fn build_initialize_lbp_ix(admin: &Pubkey, params: &LbpParams) -> Instruction {
    let (config, _) = derive_config_pda();
    let (lbp, escrow_authority, launched_token_escrow) =
        escrow_addresses(params.uid, &params.launched_token_mint);
    let raised_token_escrow =
        get_associated_token_address(&escrow_authority, &params.raised_token_mint);

    let mut data = anchor_discriminator("initialize_lbp").to_vec();
    data.extend_from_slice(&params.instruction_data());

    Instruction {
        program_id: LBP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(lbp, false),
            AccountMeta::new_readonly(escrow_authority, false),
            AccountMeta::new_readonly(params.launched_token_mint, false),
            AccountMeta::new_readonly(params.raised_token_mint, false),
            AccountMeta::new(launched_token_escrow, false),
            AccountMeta::new(raised_token_escrow, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build project_deposit instruction
pub fn build_project_deposit_ix(
    project: &Pubkey,
    uid: u64,
    launched_token_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (lbp, _, launched_token_escrow) = escrow_addresses(uid, launched_token_mint);
    let project_token_account = get_associated_token_address(project, launched_token_mint);

    let mut data = anchor_discriminator("project_deposit").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: LBP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*project, true),
            AccountMeta::new(lbp, false),
            AccountMeta::new_readonly(*launched_token_mint, false),
            AccountMeta::new(project_token_account, false),
            AccountMeta::new(launched_token_escrow, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

// Build user_deposit instruction
pub fn build_user_deposit_ix(
    whitelist: &Pubkey,
    user: &Pubkey,
    uid: u64,
    raised_token_mint: &Pubkey,
    position_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (config, _) = derive_config_pda();
    let (lbp, escrow_authority, raised_token_escrow) = escrow_addresses(uid, raised_token_mint);
    let (position, _) = derive_position_pda(&lbp, position_mint);
    let user_token_account = get_associated_token_address(user, raised_token_mint);
    let user_position_token_account = get_associated_token_address(user, position_mint);

    let mut data = anchor_discriminator("user_deposit").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: LBP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*whitelist, true),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(lbp, false),
            AccountMeta::new_readonly(escrow_authority, false),
            AccountMeta::new_readonly(*raised_token_mint, false),
            AccountMeta::new(user_token_account, false),
            AccountMeta::new(raised_token_escrow, false),
            AccountMeta::new(*position_mint, true),
            AccountMeta::new(position, false),
            AccountMeta::new(user_position_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build move_to_refund_phase instruction
pub fn build_move_to_refund_ix(admin: &Pubkey, uid: u64) -> Instruction {
    let (config, _) = derive_config_pda();
    let (lbp, _) = derive_lbp_pda(uid);

    Instruction {
        program_id: LBP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(lbp, false),
        ],
        data: anchor_discriminator("move_to_refund_phase").to_vec(),
    }
}

// Build move_to_vesting_phase instruction.
// The pool accounts are placeholders, the pool program is not loaded in the SVM.
// Pool program accounts of move_to_vesting_phase
#[derive(Clone, Debug)]
pub struct PoolAccounts {
    pub amm_config: Pubkey,
    pub pool_authority: Pubkey,
    pub pool_state: Pubkey,
    pub lp_mint: Pubkey,
    pub creator_lp_token: Pubkey,
    pub token_0_vault: Pubkey,
    pub token_1_vault: Pubkey,
    pub create_pool_fee: Pubkey,
    pub observation_state: Pubkey,
}

impl PoolAccounts {
    // For calls rejected before the pool program runs
    pub fn unused() -> Self {
        PoolAccounts {
            amm_config: Pubkey::new_unique(),
            pool_authority: Pubkey::new_unique(),
            pool_state: Pubkey::new_unique(),
            lp_mint: Pubkey::new_unique(),
            creator_lp_token: Pubkey::new_unique(),
            token_0_vault: Pubkey::new_unique(),
            token_1_vault: Pubkey::new_unique(),
            create_pool_fee: Pubkey::new_unique(),
            observation_state: Pubkey::new_unique(),
        }
    }
}

// Mock pool state address, seeds [b"pool", amm config, token 0 mint, token 1 mint]
pub fn derive_pool_state_pda(amm_config: &Pubkey, token_0_mint: &Pubkey, token_1_mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[b"pool", amm_config.as_ref(), token_0_mint.as_ref(), token_1_mint.as_ref()],
        &POOL_PROGRAM_ID,
    )
    .0
}

// Build move_to_vesting_phase instruction
pub fn build_move_to_vesting_ix(
    admin: &Pubkey,
    uid: u64,
    launched_token_mint: &Pubkey,
    raised_token_mint: &Pubkey,
    pool_program: &Pubkey,
    pool: &PoolAccounts,
) -> Instruction {
    let (config, _) = derive_config_pda();
    let (lbp, escrow_authority, launched_token_escrow) =
        escrow_addresses(uid, launched_token_mint);
    let raised_token_escrow = get_associated_token_address(&escrow_authority, raised_token_mint);

    Instruction {
        program_id: LBP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(lbp, false),
            AccountMeta::new(escrow_authority, false),
            AccountMeta::new_readonly(*launched_token_mint, false),
            AccountMeta::new_readonly(*raised_token_mint, false),
            AccountMeta::new(launched_token_escrow, false),
            AccountMeta::new(raised_token_escrow, false),
            AccountMeta::new_readonly(*pool_program, false),
            AccountMeta::new_readonly(pool.amm_config, false),
            AccountMeta::new_readonly(pool.pool_authority, false),
            AccountMeta::new(pool.pool_state, false),
            AccountMeta::new(pool.lp_mint, false),
            AccountMeta::new(pool.creator_lp_token, false),
            AccountMeta::new(pool.token_0_vault, false),
            AccountMeta::new(pool.token_1_vault, false),
            AccountMeta::new(pool.create_pool_fee, false),
            AccountMeta::new(pool.observation_state, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
            AccountMeta::new_readonly(solana_sdk::sysvar::rent::ID, false),
        ],
        data: anchor_discriminator("move_to_vesting_phase").to_vec(),
    }
}

// Build project_refund instruction
pub fn build_project_refund_ix(project: &Pubkey, uid: u64, launched_token_mint: &Pubkey) -> Instruction {
    let (lbp, escrow_authority, launched_token_escrow) =
        escrow_addresses(uid, launched_token_mint);
    let project_token_account = get_associated_token_address(project, launched_token_mint);

    Instruction {
        program_id: LBP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*project, true),
            AccountMeta::new_readonly(lbp, false),
            AccountMeta::new_readonly(escrow_authority, false),
            AccountMeta::new_readonly(*launched_token_mint, false),
            AccountMeta::new(launched_token_escrow, false),
            AccountMeta::new(project_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("project_refund").to_vec(),
    }
}

// Build user_refund instruction.
// `position_lbp_uid` selects the lbp the position was opened on.
pub fn build_user_refund_ix(
    user: &Pubkey,
    uid: u64,
    position_lbp_uid: u64,
    raised_token_mint: &Pubkey,
    position_mint: &Pubkey,
) -> Instruction {
    let (lbp, escrow_authority, raised_token_escrow) = escrow_addresses(uid, raised_token_mint);
    let (position_lbp, _) = derive_lbp_pda(position_lbp_uid);
    let (position, _) = derive_position_pda(&position_lbp, position_mint);
    let user_token_account = get_associated_token_address(user, raised_token_mint);
    let user_position_token_account = get_associated_token_address(user, position_mint);

    Instruction {
        program_id: LBP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(lbp, false),
            AccountMeta::new_readonly(escrow_authority, false),
            AccountMeta::new_readonly(*raised_token_mint, false),
            AccountMeta::new(raised_token_escrow, false),
            AccountMeta::new(user_token_account, false),
            AccountMeta::new(position, false),
            AccountMeta::new(*position_mint, false),
            AccountMeta::new(user_position_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("user_refund").to_vec(),
    }
}

// ======================== FIXTURE ========================

// Config initialized, two mints and a funded project, no lbp yet
pub struct Fixture {
    pub svm: LiteSVM,
    pub admin: Keypair,
    pub whitelist: Keypair,
    pub project: Keypair,
    pub mint_authority: Keypair,
    pub launched_token_mint: Pubkey,
    pub raised_token_mint: Pubkey,
}

pub const LAUNCHED_TOKEN_CAP: u64 = 2_000_000;
pub const PROJECT_SUPPLY: u64 = 5_000_000;

impl Fixture {
    // The admin deploys the program and initializes the config
    pub fn new() -> Self {
        let admin = Keypair::new();
        let mut svm = setup_svm(Some(&admin.pubkey()));
        svm.airdrop(&admin.pubkey(), 10 * LAMPORTS_PER_SOL)
            .expect("Airdrop should succeed");

        let whitelist = create_funded_account(&mut svm, LAMPORTS_PER_SOL);
        let project = create_funded_account(&mut svm, 10 * LAMPORTS_PER_SOL);
        let mint_authority = create_funded_account(&mut svm, 10 * LAMPORTS_PER_SOL);

        let init_ix = build_initialize_ix(&admin.pubkey(), &admin.pubkey(), &whitelist.pubkey());
        send(&mut svm, init_ix, &admin, &[&admin]).expect("Config initialization failed");

        let launched_token_mint = CreateMint::new(&mut svm, &mint_authority)
            .authority(&mint_authority.pubkey())
            .decimals(DECIMALS)
            .send()
            .expect("Failed to create launched mint");

        let raised_token_mint = CreateMint::new(&mut svm, &mint_authority)
            .authority(&mint_authority.pubkey())
            .decimals(DECIMALS)
            .send()
            .expect("Failed to create raised mint");

        let project_ata = CreateAssociatedTokenAccount::new(&mut svm, &project, &launched_token_mint)
            .owner(&project.pubkey())
            .send()
            .expect("Failed to create project ATA");

        MintTo::new(&mut svm, &mint_authority, &launched_token_mint, &project_ata, PROJECT_SUPPLY)
            .owner(&mint_authority)
            .send()
            .expect("Failed to mint launched token");

        Fixture {
            svm,
            admin,
            whitelist,
            project,
            mint_authority,
            launched_token_mint,
            raised_token_mint,
        }
    }

    // Lbp whose deposit window is open for an hour
    pub fn lbp_params(&self, uid: u64, min_cap: u64, max_cap: u64) -> LbpParams {
        let start = now(&self.svm);
        LbpParams {
            uid,
            project: self.project.pubkey(),
            launched_token_mint: self.launched_token_mint,
            launched_token_lp_distribution: 40,
            launched_token_cap: LAUNCHED_TOKEN_CAP,
            raised_token_mint: self.raised_token_mint,
            raised_token_min_cap: min_cap,
            raised_token_max_cap: max_cap,
            fund_collection_start_time: start,
            fund_collection_end_time: start + 3_600,
            cliff_duration: 86_400,
            vesting_duration: 30 * 86_400,
        }
    }

    pub fn create_lbp(&mut self, params: &LbpParams) {
        let ix = build_initialize_lbp_ix(&self.admin.pubkey(), params);
        let admin = self.admin.insecure_clone();
        send(&mut self.svm, ix, &admin, &[&admin]).expect("Lbp initialization failed");
    }

    // Funded user holding `balance` raised tokens
    pub fn create_user(&mut self, balance: u64) -> Keypair {
        let user = create_funded_account(&mut self.svm, 10 * LAMPORTS_PER_SOL);

        let ata = CreateAssociatedTokenAccount::new(&mut self.svm, &user, &self.raised_token_mint)
            .owner(&user.pubkey())
            .send()
            .expect("Failed to create user ATA");

        MintTo::new(&mut self.svm, &self.mint_authority, &self.raised_token_mint, &ata, balance)
            .owner(&self.mint_authority)
            .send()
            .expect("Failed to mint raised token");

        user
    }

    pub fn user_deposit_ix(&self, user: &Keypair, uid: u64, position_mint: &Keypair, amount: u64) -> Instruction {
        build_user_deposit_ix(
            &self.whitelist.pubkey(),
            &user.pubkey(),
            uid,
            &self.raised_token_mint,
            &position_mint.pubkey(),
            amount,
        )
    }

    // Deposit co-signed by the whitelist authority, returns the position mint
    pub fn user_deposit(&mut self, user: &Keypair, uid: u64, amount: u64) -> Result<Keypair, String> {
        let position_mint = Keypair::new();
        let ix = self.user_deposit_ix(user, uid, &position_mint, amount);
        let whitelist = self.whitelist.insecure_clone();
        send(&mut self.svm, ix, user, &[user, &whitelist, &position_mint])?;
        Ok(position_mint)
    }

    pub fn project_deposit(&mut self, uid: u64, amount: u64) -> Result<(), String> {
        let ix = build_project_deposit_ix(&self.project.pubkey(), uid, &self.launched_token_mint, amount);
        let project = self.project.insecure_clone();
        send(&mut self.svm, ix, &project, &[&project])
    }

    pub fn move_to_refund(&mut self, uid: u64) -> Result<(), String> {
        let ix = build_move_to_refund_ix(&self.admin.pubkey(), uid);
        let admin = self.admin.insecure_clone();
        send(&mut self.svm, ix, &admin, &[&admin])
    }

    pub fn user_refund(&mut self, user: &Keypair, uid: u64, position_mint: &Pubkey) -> Result<(), String> {
        let ix = build_user_refund_ix(&user.pubkey(), uid, uid, &self.raised_token_mint, position_mint);
        send(&mut self.svm, ix, user, &[user])
    }

    pub fn user_token_account(&self, user: &Pubkey) -> Pubkey {
        get_associated_token_address(user, &self.raised_token_mint)
    }

    pub fn raised_token_escrow(&self, uid: u64) -> Pubkey {
        escrow_addresses(uid, &self.raised_token_mint).2
    }

    pub fn launched_token_escrow(&self, uid: u64) -> Pubkey {
        escrow_addresses(uid, &self.launched_token_mint).2
    }

    // Mint launched tokens straight into the escrow, outside of project_deposit
    pub fn send_to_launched_token_escrow(&mut self, uid: u64, amount: u64) {
        let escrow = self.launched_token_escrow(uid);
        MintTo::new(&mut self.svm, &self.mint_authority, &self.launched_token_mint, &escrow, amount)
            .owner(&self.mint_authority)
            .send()
            .expect("Failed to mint into the escrow");
    }

    // Mint order as the pool program sees it
    pub fn token_mints_in_pool_order(&self) -> (Pubkey, Pubkey) {
        if self.launched_token_mint < self.raised_token_mint {
            (self.launched_token_mint, self.raised_token_mint)
        } else {
            (self.raised_token_mint, self.launched_token_mint)
        }
    }

    // Vaults owned by the pool authority and a funded escrow authority, which
    // pays for the pool state
    pub fn prepare_pool(&mut self, uid: u64) -> PoolAccounts {
        let (escrow_authority, _) = derive_escrow_authority_pda(&derive_lbp_pda(uid).0);
        self.svm
            .airdrop(&escrow_authority, LAMPORTS_PER_SOL)
            .expect("Airdrop should succeed");

        let (token_0_mint, token_1_mint) = self.token_mints_in_pool_order();
        let amm_config = Pubkey::new_unique();
        let pool_authority = Pubkey::new_unique();
        let payer = self.mint_authority.insecure_clone();

        let token_0_vault = CreateAccount::new(&mut self.svm, &payer, &token_0_mint)
            .owner(&pool_authority)
            .send()
            .expect("Failed to create token 0 vault");
        let token_1_vault = CreateAccount::new(&mut self.svm, &payer, &token_1_mint)
            .owner(&pool_authority)
            .send()
            .expect("Failed to create token 1 vault");

        PoolAccounts {
            amm_config,
            pool_authority,
            pool_state: derive_pool_state_pda(&amm_config, &token_0_mint, &token_1_mint),
            lp_mint: Pubkey::new_unique(),
            creator_lp_token: Pubkey::new_unique(),
            token_0_vault,
            token_1_vault,
            create_pool_fee: Pubkey::new_unique(),
            observation_state: Pubkey::new_unique(),
        }
    }

    pub fn move_to_vesting(&mut self, uid: u64, pool: &PoolAccounts) -> Result<(), String> {
        let ix = build_move_to_vesting_ix(
            &self.admin.pubkey(),
            uid,
            &self.launched_token_mint,
            &self.raised_token_mint,
            &POOL_PROGRAM_ID,
            pool,
        );
        let admin = self.admin.insecure_clone();
        send(&mut self.svm, ix, &admin, &[&admin])
    }
}
