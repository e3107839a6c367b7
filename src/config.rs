/// Carrier-name fragment identifying the home insurer's own layer.
/// Matched case-insensitively as a substring, so "CMAI Specialty" and
/// "cmai" both count.
pub const HOME_CARRIER_TAG: &str = "CMAI";

/// Retention assumed for a primary option when neither the ground layer
/// nor the quote record carries one. Matches the product's long-standing
/// default SIR.
pub const DEFAULT_PRIMARY_RETENTION: f64 = 25_000.0;

/// RPM normalizes premium to a $1M limit unit.
pub const RPM_UNIT: f64 = 1_000_000.0;
