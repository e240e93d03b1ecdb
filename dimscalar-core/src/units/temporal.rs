//! Temporal kinds: durations, instants and frequencies.

pub mod duration {
    //! Duration (relative time). The standard unit is the second.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for duration.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Duration, standard = SECOND, units = UNITS)]
    pub enum DurationDim {}

    /// A duration.
    pub type Duration = Rel<DurationDim>;
    /// A unit of duration.
    pub type DurationUnit = Unit<DurationDim>;

    define_units! { DurationUnit;
        SECOND = "second", "s", ["sec", "seconds"], 1.0;
        NANOSECOND = "nanosecond", "ns", [], 1e-9;
        MICROSECOND = "microsecond", "μs", ["us"], 1e-6;
        MILLISECOND = "millisecond", "ms", ["msec"], 1e-3;
        MINUTE = "minute", "min", ["minutes"], 60.0;
        HOUR = "hour", "h", ["hr", "hours"], 3600.0;
        DAY = "day", "day", ["d", "days"], 86_400.0;
        WEEK = "week", "wk", ["weeks"], 604_800.0;
    }
}

pub mod time {
    //! Time (absolute): an instant on a time axis. Differences are [`Duration`](super::duration) values.

    use super::duration;
    use crate::macros::define_absolute_units;
    use crate::{Abs, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for time.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Time, standard = BASE_SECOND, units = UNITS, relative = duration::DurationDim)]
    pub enum TimeDim {}

    /// An instant.
    pub type Time = Abs<TimeDim>;
    /// A unit of time.
    pub type TimeUnit = Unit<TimeDim>;

    define_absolute_units! { TimeUnit;
        BASE_SECOND = duration::SECOND, 0.0;
        BASE_MILLISECOND = duration::MILLISECOND, 0.0;
        BASE_MINUTE = duration::MINUTE, 0.0;
        BASE_HOUR = duration::HOUR, 0.0;
        BASE_DAY = duration::DAY, 0.0;
        BASE_WEEK = duration::WEEK, 0.0;
    }
}

pub mod frequency {
    //! Frequency. The standard unit is the hertz.

    use crate::macros::define_units;
    use crate::{Rel, Unit};
    use dimscalar_derive::Dimension;

    /// Dimension tag for frequency.
    #[derive(Clone, Copy, Debug, Dimension)]
    #[dimension(kind = Frequency, standard = HERTZ, units = UNITS)]
    pub enum FrequencyDim {}

    /// A frequency.
    pub type Frequency = Rel<FrequencyDim>;
    /// A unit of frequency.
    pub type FrequencyUnit = Unit<FrequencyDim>;

    define_units! { FrequencyUnit;
        HERTZ = "hertz", "Hz", ["1/s", "/s"], 1.0;
        KILOHERTZ = "kilohertz", "kHz", [], 1e3;
        MEGAHERTZ = "megahertz", "MHz", [], 1e6;
        GIGAHERTZ = "gigahertz", "GHz", [], 1e9;
        PER_MINUTE = "per minute", "/min", ["1/min"], 1.0 / 60.0;
        PER_HOUR = "per hour", "/h", ["1/h"], 1.0 / 3600.0;
        PER_DAY = "per day", "/day", ["1/day"], 1.0 / 86_400.0;
        RPM = "revolutions per minute", "rpm", [], 1.0 / 60.0;
    }
}
