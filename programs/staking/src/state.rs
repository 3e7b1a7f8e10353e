use anchor_lang::prelude::*;

use crate::error::StakingError;

/// The role a staker fills in the arcade economy. Reward rate and lockup
/// are configured independently per role.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Copy, Clone, Debug, PartialEq, Eq)]
pub enum StakerType {
    MachineOwner,
    GameCreator,
}

/// Per-role staking parameters.
///
/// `reward_rate` is in token base units per second, accrued linearly.
/// `lockup_period` is in seconds from stake creation.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StakingConfig {
    pub reward_rate: u64,
    pub lockup_period: i64,
}

#[account]
#[derive(InitSpace)]
pub struct StakingPool {
    /// Can update the pool configuration and slash stakes.
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub machine_owner_config: StakingConfig,
    pub game_creator_config: StakingConfig,
    /// Sum of `amount_staked` across all live stake accounts.
    pub total_staked: u64,
    /// Inactive pools reject new stakes and reward claims. Unstaking and
    /// slashing stay open so deactivation never traps funds.
    pub is_active: bool,
    pub bump: u8,
}

impl StakingPool {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub fn config_for(&self, staker_type: StakerType) -> StakingConfig {
        match staker_type {
            StakerType::MachineOwner => self.machine_owner_config,
            StakerType::GameCreator => self.game_creator_config,
        }
    }
}

#[account]
#[derive(InitSpace)]
pub struct StakeAccount {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub staker_type: StakerType,
    pub amount_staked: u64,
    pub stake_start_time: i64,
    pub lockup_end_time: i64,
    /// Start of the current accrual interval; reset on every claim.
    pub last_reward_time: i64,
    pub total_rewards_claimed: u64,
    pub bump: u8,
}

impl StakeAccount {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub fn is_locked(&self, current_time: i64) -> bool {
        current_time < self.lockup_end_time
    }

    /// Rewards accrued since `last_reward_time`: elapsed seconds times the
    /// role's reward rate. Zero elapsed time yields zero reward.
    pub fn pending_rewards(&self, pool: &StakingPool, current_time: i64) -> Result<u64> {
        let elapsed = current_time.saturating_sub(self.last_reward_time).max(0) as u64;
        elapsed
            .checked_mul(pool.config_for(self.staker_type).reward_rate)
            .ok_or_else(|| error!(StakingError::ArithmeticOverflow))
    }

    /// Remove `amount` from the staked balance. The caller has already
    /// resolved any "0 means all" convention.
    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.amount_staked, StakingError::InsufficientStake);
        self.amount_staked -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> StakingPool {
        StakingPool {
            authority: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            machine_owner_config: StakingConfig {
                reward_rate: 100,
                lockup_period: 0,
            },
            game_creator_config: StakingConfig {
                reward_rate: 200,
                lockup_period: 604_800,
            },
            total_staked: 0,
            is_active: true,
            bump: 255,
        }
    }

    fn stake(staker_type: StakerType, amount: u64) -> StakeAccount {
        StakeAccount {
            pool: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            staker_type,
            amount_staked: amount,
            stake_start_time: 1_000,
            lockup_end_time: 1_000,
            last_reward_time: 1_000,
            total_rewards_claimed: 0,
            bump: 254,
        }
    }

    #[test]
    fn config_is_selected_by_staker_type() {
        let pool = pool();
        assert_eq!(pool.config_for(StakerType::MachineOwner).reward_rate, 100);
        assert_eq!(pool.config_for(StakerType::GameCreator).reward_rate, 200);
        assert_eq!(pool.config_for(StakerType::GameCreator).lockup_period, 604_800);
    }

    #[test]
    fn zero_elapsed_time_accrues_nothing() {
        let stake = stake(StakerType::MachineOwner, 500);
        assert_eq!(stake.pending_rewards(&pool(), 1_000).unwrap(), 0);
    }

    #[test]
    fn rewards_accrue_linearly_per_second() {
        let stake = stake(StakerType::MachineOwner, 500);
        assert_eq!(stake.pending_rewards(&pool(), 1_010).unwrap(), 1_000);

        let stake = self::stake(StakerType::GameCreator, 500);
        assert_eq!(stake.pending_rewards(&pool(), 1_010).unwrap(), 2_000);
    }

    #[test]
    fn clock_going_backwards_accrues_nothing() {
        let stake = stake(StakerType::MachineOwner, 500);
        assert_eq!(stake.pending_rewards(&pool(), 900).unwrap(), 0);
    }

    #[test]
    fn reward_overflow_is_an_error() {
        let mut pool = pool();
        pool.machine_owner_config.reward_rate = u64::MAX;
        let stake = stake(StakerType::MachineOwner, 500);
        assert!(stake.pending_rewards(&pool, 1_002).is_err());
    }

    #[test]
    fn lockup_boundary() {
        let mut stake = stake(StakerType::MachineOwner, 500);
        stake.lockup_end_time = 2_000;
        assert!(stake.is_locked(1_999));
        assert!(!stake.is_locked(2_000));
        assert!(!stake.is_locked(2_001));
    }

    #[test]
    fn partial_debit_leaves_remainder() {
        let mut stake = stake(StakerType::MachineOwner, 500);
        stake.debit(250).unwrap();
        assert_eq!(stake.amount_staked, 250);
        stake.debit(250).unwrap();
        assert_eq!(stake.amount_staked, 0);
    }

    #[test]
    fn debit_beyond_balance_is_rejected() {
        let mut stake = stake(StakerType::MachineOwner, 500);
        assert!(stake.debit(501).is_err());
        assert_eq!(stake.amount_staked, 500);
    }
}
