use std::fmt;

use detent_ui::Px;

/// Upper bound on the number of stops a min/max/increment range may produce.
const MAX_STOP_COUNT: usize = 100_000;

/// Fraction of a step forgiven when counting range stops, so that
/// `0.0..=0.3` by `0.1` still ends on `0.3`.
const STEP_TOLERANCE: f64 = 1e-9;

/// A value a slider stop can take.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SliderValue {
    /// A numeric value, produced by min/max/increment ranges.
    Number(f64),
    /// A text value, only available through explicit stop lists.
    Text(String),
}

impl SliderValue {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SliderValue::Number(n) => Some(*n),
            SliderValue::Text(_) => None,
        }
    }

    /// Equality used when locating configured values in a stop table.
    ///
    /// Numbers compare with a relative tolerance so a configured `0.3` finds
    /// the stop computed as `0.1 * 3`.
    pub fn matches(&self, other: &SliderValue) -> bool {
        match (self, other) {
            (SliderValue::Number(a), SliderValue::Number(b)) => {
                let scale = a.abs().max(b.abs()).max(1.0);
                (a - b).abs() <= scale * STEP_TOLERANCE
            }
            (SliderValue::Text(a), SliderValue::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for SliderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            SliderValue::Number(n) => write!(f, "{n}"),
            SliderValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for SliderValue {
    fn from(value: f64) -> Self {
        SliderValue::Number(value)
    }
}

impl From<i32> for SliderValue {
    fn from(value: i32) -> Self {
        SliderValue::Number(value.into())
    }
}

impl From<&str> for SliderValue {
    fn from(value: &str) -> Self {
        SliderValue::Text(value.to_string())
    }
}

impl From<String> for SliderValue {
    fn from(value: String) -> Self {
        SliderValue::Text(value)
    }
}

/// A position on the slider scale that a marker can stop at.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Position of this stop in its table.
    pub index: usize,
    /// The value selected when a marker rests here.
    pub value: SliderValue,
    /// Offset from the track start, used by the lower marker.
    pub px: Px,
    /// Offset from the track end (`px - width`), used by the upper marker.
    pub px_inverse: Px,
}

/// Which edge of the track a marker measures its offset from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopAnchor {
    /// Offsets from the track start ([`Stop::px`]).
    Start,
    /// Offsets from the track end ([`Stop::px_inverse`]).
    End,
}

impl StopAnchor {
    /// The stop's offset relative to this anchor.
    pub fn pixel(self, stop: &Stop) -> Px {
        match self {
            StopAnchor::Start => stop.px,
            StopAnchor::End => stop.px_inverse,
        }
    }
}

/// Where the stops of a slider come from.
#[derive(Debug, Clone, PartialEq)]
pub enum StopSource {
    /// An explicit ordered list of values.
    Values(Vec<SliderValue>),
    /// Evenly spaced numbers from `min` to `max`.
    Range {
        /// First value.
        min: f64,
        /// Last value (inclusive when reachable by whole increments).
        max: f64,
        /// Distance between consecutive values.
        increment: f64,
    },
}

impl StopSource {
    /// Number of stops this source produces, or `None` when it cannot
    /// produce any.
    pub fn stop_count(&self) -> Option<usize> {
        match self {
            StopSource::Values(values) if values.is_empty() => None,
            StopSource::Values(values) => Some(values.len()),
            StopSource::Range {
                min,
                max,
                increment,
            } => range_stop_count(*min, *max, *increment),
        }
    }

    fn value_at(&self, index: usize) -> Option<SliderValue> {
        match self {
            StopSource::Values(values) => values.get(index).cloned(),
            StopSource::Range { min, increment, .. } => {
                Some(SliderValue::Number(min + index as f64 * increment))
            }
        }
    }
}

fn range_stop_count(min: f64, max: f64, increment: f64) -> Option<usize> {
    if !(min.is_finite() && max.is_finite() && increment.is_finite()) {
        return None;
    }
    if increment <= 0.0 || min > max {
        return None;
    }
    let steps = ((max - min) / increment + STEP_TOLERANCE).floor();
    if steps >= MAX_STOP_COUNT as f64 {
        return None;
    }
    Some(steps as usize + 1)
}

/// The ordered stops of a slider for one measured track width.
///
/// Tables are immutable; a relayout or a configuration change builds a new
/// one. `px` is non-decreasing with `index`, which [`StopTable::nearest`]
/// relies on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StopTable {
    stops: Vec<Stop>,
    width: Px,
}

impl StopTable {
    /// A table without stops. Sliders render no markers until a usable
    /// layout arrives.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the stop table for `source` laid out across `width`.
    ///
    /// Degenerate input (non-positive width, empty value list, unusable
    /// range) produces an empty table rather than an error.
    pub fn build(source: &StopSource, width: Px) -> Self {
        if width <= Px::ZERO {
            return Self::empty();
        }
        let Some(count) = source.stop_count() else {
            tracing::debug!(?source, "Slider configuration produces no stops");
            return Self::empty();
        };

        // A lone stop has no span to divide; it stays at the track start.
        let step_width = if count > 1 {
            width.to_f64() / (count - 1) as f64
        } else {
            0.0
        };

        let stops = (0..count)
            .filter_map(|index| {
                let value = source.value_at(index)?;
                let px = Px::round_from_f64(index as f64 * step_width).clamp(Px::ZERO, width);
                Some(Stop {
                    index,
                    value,
                    px,
                    px_inverse: px - width,
                })
            })
            .collect();

        Self { stops, width }
    }

    /// The width this table was laid out for.
    pub fn width(&self) -> Px {
        self.width
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the table has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Index of the last stop.
    pub fn last_index(&self) -> Option<usize> {
        self.stops.len().checked_sub(1)
    }

    /// The stop at `index`.
    pub fn get(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    /// The first stop.
    pub fn first(&self) -> Option<&Stop> {
        self.stops.first()
    }

    /// The last stop.
    pub fn last(&self) -> Option<&Stop> {
        self.stops.last()
    }

    /// Iterates stops in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Stop> {
        self.stops.iter()
    }

    /// Index of the first stop after `start` whose value matches `value`.
    pub fn position_of(&self, value: &SliderValue, start: usize) -> Option<usize> {
        self.stops
            .iter()
            .skip(start)
            .find(|stop| stop.value.matches(value))
            .map(|stop| stop.index)
    }

    /// Finds the stop closest to `px`, measured against `anchor`.
    ///
    /// Distance along a monotonic table first falls then rises, so the scan
    /// stops at the first stop farther away than the best one so far. Equal
    /// distances keep the earlier stop.
    pub fn nearest(&self, px: f64, anchor: StopAnchor) -> Option<&Stop> {
        let mut closest = f64::INFINITY;
        let mut found: Option<&Stop> = None;

        for stop in &self.stops {
            let distance = (anchor.pixel(stop).to_f64() - px).abs();
            if found.is_none() || distance < closest {
                found = Some(stop);
                closest = distance;
            } else if distance > closest {
                break;
            }
        }

        found
    }
}

impl<'a> IntoIterator for &'a StopTable {
    type Item = &'a Stop;
    type IntoIter = std::slice::Iter<'a, Stop>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}
