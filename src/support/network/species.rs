use std::fmt;

/// Constituents of a fluid mixture, identified by mass fraction.
///
/// Water appears twice: [`Species::H2O`] is the aggregate water content
/// carried in the gas phase (vapor), while [`Species::Water`] is liquid water.
/// Mass moving between the two, or into a phase-change device as ice, is the
/// transfer that phase-change balances account for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Species {
    /// Nitrogen.
    N2,
    /// Oxygen.
    O2,
    /// Water vapor (aggregate gas-phase water content).
    H2O,
    /// Liquid water.
    Water,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::N2 => "N2",
            Self::O2 => "O2",
            Self::H2O => "H2O",
            Self::Water => "WATER",
        };
        f.write_str(name)
    }
}
