pub mod ranking;
pub mod trust_score;

pub use ranking::rank_listings;
pub use trust_score::{calculate_trust_score, TrustSignals};
