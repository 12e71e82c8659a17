use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal tax bracket. `base_tax` is the cumulative tax on all income
/// below `lower_bound`; the top bracket of a schedule has no `upper_bound`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub base_tax: Decimal,
    pub rate: Decimal,
}

impl TaxBracket {
    /// Lower bounds are inclusive, upper bounds exclusive.
    pub fn contains(&self, income: Decimal) -> bool {
        income >= self.lower_bound
            && self.upper_bound.map_or(true, |upper_bound| income < upper_bound)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn bracket() -> TaxBracket {
        TaxBracket {
            lower_bound: dec!(9325),
            upper_bound: Some(dec!(37950)),
            base_tax: dec!(932.50),
            rate: dec!(0.15),
        }
    }

    #[test]
    fn contains_includes_the_lower_bound() {
        assert!(bracket().contains(dec!(9325)));
    }

    #[test]
    fn contains_excludes_the_upper_bound() {
        assert!(!bracket().contains(dec!(37950)));
    }

    #[test]
    fn an_unbounded_bracket_contains_everything_above_its_floor() {
        let top = TaxBracket {
            upper_bound: None,
            ..bracket()
        };

        assert!(top.contains(dec!(1000000)));
        assert!(!top.contains(dec!(9000)));
    }
}
