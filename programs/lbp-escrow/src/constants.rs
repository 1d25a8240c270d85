use anchor_lang::prelude::*;

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["config"]
pub const CONFIG_SEED: &[u8] = b"config";

// Seeds for PDA derivation: ["lbp", uid]
pub const LBP_SEED: &[u8] = b"lbp";

// Seeds for PDA derivation: ["escrow_authority", lbp]
// Owns both escrow token accounts and signs every outgoing transfer
pub const ESCROW_AUTHORITY_SEED: &[u8] = b"escrow_authority";

// Seeds for PDA derivation: ["position", lbp, position_mint]
pub const POSITION_SEED: &[u8] = b"position";

// lp distribution is a percentage of the launched token cap
pub const MAX_LP_DISTRIBUTION: u8 = 100;

// Claim tokens are indivisible, one unit per position
pub const POSITION_MINT_DECIMALS: u8 = 0;
pub const POSITION_CLAIM_AMOUNT: u64 = 1;

// Raydium CP-swap, the destination pool program
pub const POOL_PROGRAM_ID: Pubkey = pubkey!("CPMMoo8L3F4NbTegBCKVNunggL7H1ZpdTHKxQB5qKP1C");

// The pool opens for trading as soon as it is created
pub const POOL_OPEN_TIME: u64 = 0;
