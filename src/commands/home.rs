//! Homepage widget output

use crate::home::{pick_quote, render_quote, render_social_links, SOCIAL_LINKS};

/// Print a quote; without a seed one is picked from the clock
pub fn quote(seed: Option<u64>) {
    let seed = seed.unwrap_or_else(|| chrono::Utc::now().timestamp_millis().unsigned_abs());
    let quote = pick_quote(seed);
    tracing::debug!("Picked quote {:?} for seed {}", quote.latin, seed);
    println!("{}", render_quote(quote));
}

/// Print the social links section
pub fn social() {
    println!("{}", render_social_links(SOCIAL_LINKS));
}
