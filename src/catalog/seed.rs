// src/catalog/seed.rs — Built-in coin dataset

use super::types::{CoinRecord, MarketCap};

/// The coins every fresh catalog knows about.
pub fn seed_coins() -> Vec<CoinRecord> {
    vec![
        CoinRecord::new(
            "bitcoin",
            "bullish",
            "The OG cryptocurrency. Digital gold that never tarnishes.",
            "BTC is your crypto foundation. Stack sats and stay humble.",
        )
        .with_market_cap(MarketCap::High)
        .with_sustainability(3.0)
        .with_price_change(2.5)
        .with_tags(["store-of-value", "digital-gold", "layer-1"]),
        CoinRecord::new(
            "ethereum",
            "consolidating",
            "The smart contract pioneer. Still the king of DeFi.",
            "ETH powers the decentralized future. Stake it for the long haul.",
        )
        .with_market_cap(MarketCap::High)
        .with_sustainability(8.0)
        .with_price_change(1.8)
        .with_tags(["smart-contracts", "defi", "layer-1", "pos"]),
        CoinRecord::new(
            "dogecoin",
            "volatile",
            "Much wow, such meme. The people's crypto.",
            "DOGE is fun money. Only invest your meme budget.",
        )
        .with_market_cap(MarketCap::Medium)
        .with_sustainability(4.0)
        .with_price_change(-3.2)
        .with_tags(["meme", "payment", "community"]),
        CoinRecord::new(
            "solana",
            "pump",
            "The Ethereum killer with actual speed. When it works.",
            "SOL moves fast and breaks things. High risk, high reward.",
        )
        .with_market_cap(MarketCap::Medium)
        .with_sustainability(7.0)
        .with_price_change(8.7)
        .with_tags(["layer-1", "fast", "cheap", "defi"]),
        CoinRecord::new(
            "cardano",
            "stable",
            "The academic's blockchain. Slow and steady wins the race?",
            "ADA is a long-term play. Perfect for patient investors.",
        )
        .with_market_cap(MarketCap::Medium)
        .with_sustainability(9.0)
        .with_price_change(0.5)
        .with_tags(["academic", "pos", "sustainable", "layer-1"]),
        CoinRecord::new(
            "chainlink",
            "rising",
            "The oracle that connects blockchains to reality.",
            "LINK is infrastructure. Not sexy, but essential.",
        )
        .with_market_cap(MarketCap::Medium)
        .with_sustainability(7.5)
        .with_price_change(4.2)
        .with_tags(["oracle", "infrastructure", "defi"]),
    ]
}
