// Central constants and fixed link targets.

/// Discord caps a single autocomplete response at 25 choices.
pub const MAX_SUGGESTIONS: usize = 25;

/// Render provides PORT at deploy time; locally we fall back to this.
pub const DEFAULT_HEALTH_PORT: u16 = 10000;

/// Storefront handling purchases and delivery.
pub const STORE_URL: &str = "https://sellhub.cx/store";

/// Refund terms live on the storefront, not in GitBook.
pub const REFUND_POLICY_URL: &str = "https://sellhub.cx/store/refund-policy";
