use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    #[msg("Signer is not the pool authority!")]
    Unauthorized = 0,

    #[msg("The pool is not active!")]
    PoolInactive,

    #[msg("Stake amount must be greater than zero!")]
    ZeroStakeAmount,

    #[msg("Insufficient balance in your token account!")]
    InsufficientFunds,

    #[msg("Amount exceeds the staked balance!")]
    InsufficientStake,

    #[msg("The vault cannot cover the accrued rewards!")]
    InsufficientVaultBalance,

    #[msg("The lockup period has not expired yet!")]
    LockupNotExpired,

    #[msg("Arithmetic overflow!")]
    ArithmeticOverflow,
}
