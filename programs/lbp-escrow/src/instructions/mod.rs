// Instructions module
// - initialize (deployer, once)
// - nominate_new_admin_authority / accept_admin_authority (two step)
// - set_whitelist_authority (admin only)
// - initialize_lbp (admin only)
// - project_deposit / project_refund (project only)
// - user_deposit (whitelist co-signed) / user_refund (claim holder)
// - move_to_refund_phase / move_to_vesting_phase (admin only)

pub mod accept_admin_authority;
pub mod initialize;
pub mod initialize_lbp;
pub mod move_to_refund_phase;
pub mod move_to_vesting_phase;
pub mod nominate_new_admin_authority;
pub mod project_deposit;
pub mod project_refund;
pub mod set_whitelist_authority;
pub mod user_deposit;
pub mod user_refund;

pub use accept_admin_authority::*;
pub use initialize::*;
pub use initialize_lbp::*;
pub use move_to_refund_phase::*;
pub use move_to_vesting_phase::*;
pub use nominate_new_admin_authority::*;
pub use project_deposit::*;
pub use project_refund::*;
pub use set_whitelist_authority::*;
pub use user_deposit::*;
pub use user_refund::*;
