/// Decimal precision for intermediate profit calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of admin principals splitting the residual profit pool
pub const ADMIN_PRINCIPAL_COUNT: usize = 2;

/// Ledger identity of the first admin principal
pub const ADMIN_A_ID: &str = "ADMIN_A";

/// Ledger identity of the second admin principal
pub const ADMIN_B_ID: &str = "ADMIN_B";
