use async_trait::async_trait;

use crate::errors::Result;
use crate::investors::investor_model::{Investor, NewInvestor};

/// Trait for investor repository operations.
#[async_trait]
pub trait InvestorRepositoryTrait: Send + Sync {
    fn get_investor(&self, investor_id: &str) -> Result<Investor>;
    fn get_investors(&self) -> Result<Vec<Investor>>;
    /// Roster feeding the daily allocation step; excludes inactive investors.
    fn get_active_investors(&self) -> Result<Vec<Investor>>;
    async fn create_investor(&self, new_investor: NewInvestor) -> Result<Investor>;
    async fn update_investor(&self, investor: Investor) -> Result<Investor>;
    /// Soft deactivation; there is no hard delete while historical payouts
    /// reference the investor.
    async fn deactivate_investor(&self, investor_id: &str) -> Result<Investor>;
}

/// Trait for investor service operations.
#[async_trait]
pub trait InvestorServiceTrait: Send + Sync {
    fn get_investors(&self) -> Result<Vec<Investor>>;
    async fn register_investor(&self, new_investor: NewInvestor) -> Result<Investor>;
    async fn update_investor(&self, investor: Investor) -> Result<Investor>;
    async fn deactivate_investor(&self, investor_id: &str) -> Result<Investor>;
}
