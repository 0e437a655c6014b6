//! One module per subcommand: clap `Args` struct plus a `run` handler
//! taking the topology handle and the shared output options.

pub mod alternatives;
pub mod assign;
pub mod critical;
pub mod flow;
pub mod overview;
pub mod route;
pub mod routes;
pub mod simulate;

use anyhow::{Context, Result};
use spokes_core::topology::Tier;

/// Parse a tier name argument with a friendly error.
pub fn parse_tier(raw: &str) -> Result<Tier> {
    raw.parse::<Tier>()
        .map_err(|msg| anyhow::anyhow!(msg))
        .with_context(|| format!("invalid tier argument `{raw}`"))
}

#[cfg(test)]
mod tests {
    use super::parse_tier;
    use spokes_core::topology::Tier;

    #[test]
    fn tier_names_parse() {
        assert_eq!(parse_tier("supplier").expect("parses"), Tier::Supplier);
        assert_eq!(parse_tier("Store").expect("parses"), Tier::Store);
        assert!(parse_tier("depot").is_err());
    }
}
