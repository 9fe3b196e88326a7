use strum::{Display, EnumIter};

/// Common loudness normalization targets, by platform or use case.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum Target {
    Spotify,
    YouTube,
    #[strum(serialize = "Apple Music")]
    AppleMusic,
    Broadcast,
    Mastering,
}

impl Target {
    /// Target level, in LUFS-like units.
    pub fn level(&self) -> f64 {
        match *self {
            Target::Spotify => -14.0,
            Target::YouTube => -13.0,
            Target::AppleMusic => -16.0,
            Target::Broadcast => -23.0,
            Target::Mastering => -9.0,
        }
    }

    pub fn description(&self) -> &'static str {
        match *self {
            Target::Spotify => "Streaming standard",
            Target::YouTube => "Video platform",
            Target::AppleMusic => "Apple streaming",
            Target::Broadcast => "TV/Radio standard",
            Target::Mastering => "High impact",
        }
    }

    /// Distance of a measured loudness from this target. `None` when the
    /// measurement is a non-finite sentinel and there is nothing to compare.
    pub fn deviation(&self, measured: f64) -> Option<Deviation> {
        Deviation::new(measured, self.level())
    }
}

/// How loudly adjustment is called for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Within half a dB of the target; leave it alone.
    OnTarget,
    /// Within 1.5 dB; a small trim suffices.
    Slight,
    /// More than 1.5 dB off.
    Significant,
}

/// Signed distance of a measurement from a target level, in dB. Positive
/// means louder than the target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Deviation {
    db: f64,
}

impl Deviation {
    const ON_TARGET_DB: f64 = 0.5;
    const SLIGHT_DB: f64 = 1.5;

    /// `None` when the measured value is non-finite.
    pub fn new(measured: f64, target: f64) -> Option<Self> {
        if !measured.is_finite() {
            return None;
        }

        Some(Self {
            db: measured - target,
        })
    }

    pub fn db(&self) -> f64 {
        self.db
    }

    pub fn severity(&self) -> Severity {
        let distance = self.db.abs();

        if distance <= Self::ON_TARGET_DB {
            Severity::OnTarget
        } else if distance <= Self::SLIGHT_DB {
            Severity::Slight
        } else {
            Severity::Significant
        }
    }
}
