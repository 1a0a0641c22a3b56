//! Auction pricing: marginal value to dollars, with keeper inflation.

use anyhow::{Result, ensure};
use tracing::info;

use crate::config::LeagueConfig;

use super::record::PlayerRecord;

/// League-wide pricing constants, fixed once total marginal value is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuctionRates {
    /// Marginal points one discretionary dollar buys.
    pub marginal_points_per_dollar: f64,
    /// Price multiplier reflecting value already absorbed off-market by
    /// keepers.
    pub keeper_inflation: f64,
}

/// Derives the pricing rates from the league configuration and the final
/// total marginal value.
///
/// A zero total marginal value or zero discretionary pool would make every
/// price non-finite, and keepers absorbing the entire league's money makes
/// inflation undefined; each is an internally inconsistent configuration
/// and aborts the run before anything is written.
pub fn compute_rates(config: &LeagueConfig, total_marginal_value: f64) -> Result<AuctionRates> {
    let discretionary = config.discretionary_money();
    ensure!(
        total_marginal_value > 0.0,
        "total marginal value is {total_marginal_value}; no player cleared any tier cut-off"
    );
    ensure!(
        discretionary > 0.0,
        "discretionary money is {discretionary}; budget does not cover roster slots"
    );

    let total_money = config.total_league_money();
    let inflation_pool = total_money - config.keepers.value_absorbed;
    ensure!(
        inflation_pool != 0.0,
        "keepers absorbed the entire league budget (${total_money}); inflation is undefined"
    );

    let rates = AuctionRates {
        marginal_points_per_dollar: total_marginal_value / discretionary,
        keeper_inflation: (total_money - config.keepers.money_spent) / inflation_pool,
    };
    info!(
        total_marginal_value,
        marginal_points_per_dollar = rates.marginal_points_per_dollar,
        keeper_inflation = rates.keeper_inflation,
        "Auction rates computed"
    );
    Ok(rates)
}

impl AuctionRates {
    /// Whole-dollar price for one marginal value. The +1 is the floor-dollar
    /// guarantee: every draftable player prices at one dollar or more.
    pub fn price(&self, marginal_value: f64) -> f64 {
        (marginal_value / self.marginal_points_per_dollar + 1.0).ceil()
    }

    /// Keeper-inflated price, truncated to whole dollars for display.
    pub fn inflated_price(&self, auction_value: f64) -> f64 {
        auction_value * self.keeper_inflation
    }
}

/// Share of one team's budget a price consumes, in percent.
pub fn budget_percentage(auction_value: f64, config: &LeagueConfig) -> f64 {
    auction_value / config.auction_budget * 100.0
}

/// Prices every record. Runs once, after all positions are tiered and the
/// total marginal value is final.
pub fn price_players(players: &mut [PlayerRecord], rates: &AuctionRates) {
    for player in players.iter_mut() {
        player.auction_value = rates.price(player.marginal_value);
    }
}

/// Final output order: marginal value descending, custom points breaking
/// ties.
pub fn sort_by_value(players: &mut [PlayerRecord]) {
    players.sort_by(|a, b| {
        b.marginal_value
            .total_cmp(&a.marginal_value)
            .then(b.custom_points.total_cmp(&a.custom_points))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeeperSettings;
    use crate::valuation::record::{Position, StatLine};

    fn player(points: f64, marginal: f64) -> PlayerRecord {
        let mut p = PlayerRecord::new(
            "p".into(),
            String::new(),
            Position::Qb,
            StatLine::default(),
            String::new(),
        );
        p.custom_points = points;
        p.marginal_value = marginal;
        p
    }

    #[test]
    fn test_rates_from_default_config() {
        let config = LeagueConfig::default();
        let rates = compute_rates(&config, 4872.0).unwrap();
        // 4872 / (12*220 - 12*17) = 4872 / 2436
        assert!((rates.marginal_points_per_dollar - 2.0).abs() < 1e-9);
        // No keepers: inflation is exactly 1.
        assert_eq!(rates.keeper_inflation, 1.0);
    }

    #[test]
    fn test_zero_total_marginal_value_is_fatal() {
        let config = LeagueConfig::default();
        assert!(compute_rates(&config, 0.0).is_err());
    }

    #[test]
    fn test_keeper_inflation() {
        let config = LeagueConfig {
            keepers: KeeperSettings {
                money_spent: 240.0,
                value_absorbed: 1090.0,
            },
            ..LeagueConfig::default()
        };
        let rates = compute_rates(&config, 1000.0).unwrap();
        // (2640 - 240) / (2640 - 1090)
        assert!((rates.keeper_inflation - 2400.0 / 1550.0).abs() < 1e-9);
    }

    #[test]
    fn test_price_floor_is_one_dollar() {
        let rates = AuctionRates {
            marginal_points_per_dollar: 2.0,
            keeper_inflation: 1.0,
        };
        assert_eq!(rates.price(0.0), 1.0);
        assert_eq!(rates.price(3.0), 3.0); // ceil(1.5 + 1)
    }

    #[test]
    fn test_prices_are_whole_and_non_negative() {
        let config = LeagueConfig::default();
        let rates = compute_rates(&config, 500.0).unwrap();
        let mut players = vec![player(100.0, 160.0), player(80.0, 0.0), player(60.0, 12.3)];
        price_players(&mut players, &rates);
        for p in &players {
            assert!(p.auction_value >= 1.0);
            assert_eq!(p.auction_value.fract(), 0.0);
        }
    }

    #[test]
    fn test_sort_by_value_ties_broken_by_points() {
        let mut players = vec![player(50.0, 10.0), player(80.0, 10.0), player(10.0, 90.0)];
        sort_by_value(&mut players);
        assert_eq!(players[0].marginal_value, 90.0);
        assert_eq!(players[1].custom_points, 80.0);
        assert_eq!(players[2].custom_points, 50.0);
    }

    #[test]
    fn test_budget_percentage() {
        let config = LeagueConfig::default();
        assert!((budget_percentage(22.0, &config) - 10.0).abs() < 1e-9);
    }
}
