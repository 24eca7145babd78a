use serde::Serialize;
use std::fmt;

/// Physical units reported by the inverters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Units {
    W,
    KWh,
    Wh,
    A,
    V,
    C,
    Hz,
    Percent,
    None,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::W => "W",
            Units::KWh => "kWh",
            Units::Wh => "Wh",
            Units::A => "A",
            Units::V => "V",
            Units::C => "°C",
            Units::Hz => "Hz",
            Units::Percent => "%",
            Units::None => "",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a sensor's readings evolve over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SensorUnit {
    /// Arbitrary instantaneous value.
    Measurement(Units),
    /// Continuously increasing value.
    Total(Units),
    /// Increasing value that resets every day.
    DailyTotal(Units),
}

impl SensorUnit {
    pub fn unit(&self) -> Units {
        match *self {
            SensorUnit::Measurement(u) | SensorUnit::Total(u) | SensorUnit::DailyTotal(u) => u,
        }
    }

    pub fn is_monotonic(&self) -> bool {
        !matches!(self, SensorUnit::Measurement(_))
    }
}
