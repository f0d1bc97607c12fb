use std::fmt;
use std::rc::Rc;

use chrono::Timelike;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeComponent {
    Hour,
    Minute,
    Second,
}

impl fmt::Display for TimeComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        };
        f.write_str(name)
    }
}

type DisabledHoursFn = Rc<dyn Fn() -> Vec<u32>>;
type DisabledMinutesFn = Rc<dyn Fn(u32) -> Vec<u32>>;
type DisabledSecondsFn = Rc<dyn Fn(u32, u32) -> Vec<u32>>;

/// Caller-supplied rules for which hours, minutes and seconds cannot be selected
///
/// Minutes are looked up for a given hour and seconds for a given hour and
/// minute. A rule that was never supplied disables nothing. The rules are
/// queried on every check and their results are never cached.
#[derive(Clone, Default)]
pub struct DisabledOptions {
    hours: Option<DisabledHoursFn>,
    minutes: Option<DisabledMinutesFn>,
    seconds: Option<DisabledSecondsFn>,
}

impl DisabledOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_disabled_hours(mut self, f: impl Fn() -> Vec<u32> + 'static) -> Self {
        self.hours = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn with_disabled_minutes(mut self, f: impl Fn(u32) -> Vec<u32> + 'static) -> Self {
        self.minutes = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn with_disabled_seconds(mut self, f: impl Fn(u32, u32) -> Vec<u32> + 'static) -> Self {
        self.seconds = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn disabled_hours(&self) -> Vec<u32> {
        self.hours.as_ref().map_or_else(Vec::new, |f| f())
    }

    #[must_use]
    pub fn disabled_minutes(&self, hour: u32) -> Vec<u32> {
        self.minutes.as_ref().map_or_else(Vec::new, |f| f(hour))
    }

    #[must_use]
    pub fn disabled_seconds(&self, hour: u32, minute: u32) -> Vec<u32> {
        self.seconds.as_ref().map_or_else(Vec::new, |f| f(hour, minute))
    }

    /// The first component of `time` that is disabled, with its value
    ///
    /// All three rules are consulted before anything is compared; hour is
    /// reported before minute, minute before second.
    #[must_use]
    pub fn disabled_component<T: Timelike>(&self, time: &T) -> Option<(TimeComponent, u32)> {
        let (hour, minute, second) = (time.hour(), time.minute(), time.second());

        let hours = self.disabled_hours();
        let minutes = self.disabled_minutes(hour);
        let seconds = self.disabled_seconds(hour, minute);

        if hours.contains(&hour) {
            Some((TimeComponent::Hour, hour))
        } else if minutes.contains(&minute) {
            Some((TimeComponent::Minute, minute))
        } else if seconds.contains(&second) {
            Some((TimeComponent::Second, second))
        } else {
            None
        }
    }
}

impl fmt::Debug for DisabledOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisabledOptions")
            .field("hours", &self.hours.is_some())
            .field("minutes", &self.minutes.is_some())
            .field("seconds", &self.seconds.is_some())
            .finish()
    }
}
