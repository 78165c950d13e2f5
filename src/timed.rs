use std::time::Duration;

use serde::{Serialize, Serializer};

/// A value together with the time it took to produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timed<T> {
    pub value: T,
    #[serde(rename = "seconds", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    pub fn new(value: T, elapsed: Duration) -> Self {
        Self { value, elapsed }
    }

    /// Elapsed time in seconds.
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn into_pair(self) -> (T, f64) {
        let secs = self.secs();
        (self.value, secs)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }

    pub fn by_ref(&self) -> Timed<&T> {
        Timed {
            value: &self.value,
            elapsed: self.elapsed,
        }
    }
}

impl<T, E> Timed<Result<T, E>> {
    /// Drops the timing of a failed call, returning its error as is.
    pub fn transpose(self) -> Result<Timed<T>, E> {
        let Timed { value, elapsed } = self;
        value.map(|value| Timed { value, elapsed })
    }
}

impl<T> From<Timed<T>> for (T, f64) {
    fn from(timed: Timed<T>) -> Self {
        timed.into_pair()
    }
}

fn serialize_secs<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64())
}
