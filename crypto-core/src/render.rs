//! Text blocks printed by the console. Each function returns the block without a
//! trailing newline; callers print it with `println!`/`writeln!`.

use crate::{
    FetchError,
    format::format_grouped,
    model::{CryptoQuote, PriceValue, SearchResult, TrendingCoin, known_rank},
};

const RULE_WIDTH: usize = 60;
pub const TRENDING_LIMIT: usize = 7;
pub const SEARCH_LIMIT: usize = 10;
pub const POPULAR_IDS: &str = "bitcoin, ethereum, cardano, solana, dogecoin";

/// Which request failed; selects the wording of status errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Price,
    Trending,
    Search,
}

impl Operation {
    fn failure_phrase(&self) -> &'static str {
        match self {
            Operation::Price => "Unable to fetch data",
            Operation::Trending => "Unable to fetch trending data",
            Operation::Search => "Unable to search",
        }
    }
}

pub fn separator() -> String {
    "=".repeat(RULE_WIDTH)
}

fn header(title: &str) -> String {
    let rule = separator();
    format!("\n{rule}\n{title}\n{rule}")
}

pub fn welcome() -> String {
    format!(
        "{}\n\nThis program uses the CoinGecko API to provide real-time\n\
         cryptocurrency data, market trends, and search functionality.",
        header("   Welcome to the Cryptocurrency Information Program!")
    )
}

pub fn menu() -> String {
    format!(
        "{}\n\nPlease select an option:\n  \
         [1] Get Current Price of a Cryptocurrency\n  \
         [2] View Trending Cryptocurrencies\n  \
         [3] Search for a Cryptocurrency\n  \
         [4] Exit Program\n{}",
        header("       🪙  CRYPTOCURRENCY INFORMATION SYSTEM  🪙"),
        separator()
    )
}

pub fn farewell() -> String {
    format!("{}\n", header("   Thank you for using the Crypto Information System!"))
}

pub fn invalid_choice() -> &'static str {
    "\n❌ Invalid choice. Please enter a number between 1 and 4.\n"
}

pub fn quote(quote: &CryptoQuote) -> String {
    let currency = quote.currency.to_uppercase();
    let mut lines = vec![header(&format!("💰 {} Price Information", quote.id.to_uppercase()))];

    lines.push(match &quote.price {
        PriceValue::Number(price) => {
            format!("Current Price: ${} {currency}", format_grouped(*price, 2))
        }
        PriceValue::Raw(raw) => format!("Current Price: {raw}"),
    });

    if let Some(change) = quote.change_24h {
        lines.push(format!("{} 24h Change: {change:.2}%", trend_marker(change)));
    }

    if let Some(market_cap) = quote.market_cap {
        lines.push(format!("💼 Market Cap: ${} {currency}", format_grouped(market_cap, 0)));
    }

    close_block(lines)
}

/// Zero counts as "up".
pub fn trend_marker(change: f64) -> &'static str {
    if change >= 0.0 { "📈" } else { "📉" }
}

pub fn not_found(id: &str) -> String {
    format!(
        "\n❌ Error: Cryptocurrency '{id}' not found.\n\
         Try using IDs like: bitcoin, ethereum, cardano, dogecoin\n"
    )
}

pub fn trending(coins: &[TrendingCoin]) -> String {
    let mut lines = vec![header("🔥 Top Trending Cryptocurrencies")];

    lines.extend(coins.iter().take(TRENDING_LIMIT).enumerate().map(|(i, coin)| {
        format!(
            "{}. {} ({}) - Market Cap Rank: #{}",
            i + 1,
            coin.name,
            coin.symbol.to_uppercase(),
            rank_or(coin.market_cap_rank, "N/A")
        )
    }));

    close_block(lines)
}

pub fn search_results(term: &str, results: &[SearchResult]) -> String {
    let mut lines = vec![header(&format!("🔍 Search Results for '{term}'"))];

    if results.is_empty() {
        lines.push(format!("No cryptocurrencies found matching '{term}'"));
    }

    lines.extend(results.iter().take(SEARCH_LIMIT).enumerate().map(|(i, result)| {
        format!(
            "{}. {} ({}) - Rank: #{}",
            i + 1,
            result.name,
            result.symbol.to_uppercase(),
            rank_or(result.market_cap_rank, "Unranked")
        )
    }));

    if results.len() > SEARCH_LIMIT {
        lines.push(String::new());
        lines.push(format!("... and {} more results", results.len() - SEARCH_LIMIT));
    }

    close_block(lines)
}

/// Append the closing rule and the trailing blank line.
fn close_block(mut lines: Vec<String>) -> String {
    lines.push(separator());
    lines.push(String::new());
    lines.join("\n")
}

fn rank_or(rank: Option<u64>, missing: &str) -> String {
    known_rank(rank).map_or_else(|| missing.to_string(), |r| r.to_string())
}

pub fn failure(operation: Operation, err: &FetchError) -> String {
    match err {
        FetchError::Status(code) => {
            format!("\n❌ Error: {} (Status code: {code})\n", operation.failure_phrase())
        }
        FetchError::Transport(e) => format!("\n❌ Connection Error: {e}\n"),
        FetchError::Malformed(_) | FetchError::InvalidUrl(_) => format!("\n❌ Error: {err}\n"),
    }
}
