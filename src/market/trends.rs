//! Market trend segments and trend-adjusted pricing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::estimation::{PriceRange, ProjectType, RateTable};

/// Demand level for a market segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Demand {
    High,
    VeryHigh,
}

/// Snapshot of one market segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentTrend {
    pub demand: Demand,
    pub average_rate: Decimal,
    /// Yearly growth as a fraction (0.15 = 15%).
    pub growth_rate: Decimal,
}

/// Market segments a project type falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Segment {
    WebDevelopment,
    MobileApps,
    Ecommerce,
}

impl Segment {
    pub fn for_project(project: ProjectType) -> Self {
        match project {
            ProjectType::Mobileapp => Segment::MobileApps,
            ProjectType::Ecommerce => Segment::Ecommerce,
            ProjectType::Landing | ProjectType::Website | ProjectType::Webapp => {
                Segment::WebDevelopment
            }
        }
    }
}

/// Fixed market trend figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrends {
    pub web_development: SegmentTrend,
    pub mobile_apps: SegmentTrend,
    pub ecommerce: SegmentTrend,
}

impl MarketTrends {
    pub fn current() -> Self {
        Self {
            web_development: SegmentTrend {
                demand: Demand::High,
                average_rate: dec!(85),
                growth_rate: dec!(0.15),
            },
            mobile_apps: SegmentTrend {
                demand: Demand::VeryHigh,
                average_rate: dec!(120),
                growth_rate: dec!(0.25),
            },
            ecommerce: SegmentTrend {
                demand: Demand::High,
                average_rate: dec!(95),
                growth_rate: dec!(0.20),
            },
        }
    }

    pub fn segment(&self, segment: Segment) -> &SegmentTrend {
        match segment {
            Segment::WebDevelopment => &self.web_development,
            Segment::MobileApps => &self.mobile_apps,
            Segment::Ecommerce => &self.ecommerce,
        }
    }

    pub fn for_project(&self, project: ProjectType) -> &SegmentTrend {
        self.segment(Segment::for_project(project))
    }

    /// Price grown by the segment's growth rate, floored. Informational only.
    pub fn adjust_for_market(&self, price: Decimal, project: ProjectType) -> Decimal {
        let growth = self.for_project(project).growth_rate;
        (price * (Decimal::ONE + growth)).floor()
    }
}

impl Default for MarketTrends {
    fn default() -> Self {
        Self::current()
    }
}

/// Reference range from the rate table.
pub fn market_range(table: &RateTable, project: ProjectType) -> Option<PriceRange> {
    table.market_range(project)
}
