use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Meteorological season attached to each ride record by the data source.
///
/// Declaration order is the display order used by the seasonal summary,
/// so `Ord` sorts Spring, Summer, Fall, Winter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// All seasons in display order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = DashboardError;

    /// Accepts season names in any case, plus the numeric codes 1-4 used by
    /// the raw UCI export (1 = Spring ... 4 = Winter).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" | "1" => Ok(Season::Spring),
            "summer" | "2" => Ok(Season::Summer),
            "fall" | "autumn" | "3" => Ok(Season::Fall),
            "winter" | "4" => Ok(Season::Winter),
            other => Err(DashboardError::DataUnavailable(format!(
                "unknown season '{}'",
                other
            ))),
        }
    }
}

/// Rider category: non-members (`casual`) and members (`registered`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiderType {
    Casual,
    Registered,
}

impl RiderType {
    pub const ALL: [RiderType; 2] = [RiderType::Casual, RiderType::Registered];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiderType::Casual => "casual",
            RiderType::Registered => "registered",
        }
    }
}

impl fmt::Display for RiderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{RiderType, Season};

    #[test]
    fn test_season_order_is_fixed() {
        let mut seasons = vec![Season::Winter, Season::Fall, Season::Spring, Season::Summer];
        seasons.sort();
        assert_eq!(seasons, Season::ALL.to_vec());
    }

    #[test]
    fn test_season_parse() {
        assert_eq!("Spring".parse::<Season>().unwrap(), Season::Spring);
        assert_eq!(" summer ".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!("FALL".parse::<Season>().unwrap(), Season::Fall);
        assert_eq!("Autumn".parse::<Season>().unwrap(), Season::Fall);
        assert_eq!("4".parse::<Season>().unwrap(), Season::Winter);
        assert!("Monsoon".parse::<Season>().is_err());
        assert!("5".parse::<Season>().is_err());
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&Season::Fall).unwrap(), "\"Fall\"");
        assert_eq!(
            serde_json::to_string(&RiderType::Registered).unwrap(),
            "\"registered\""
        );
        assert_eq!(RiderType::Casual.to_string(), "casual");
    }
}
