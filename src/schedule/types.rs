//! Precomputed temperature sequences.

use crate::error::{Result, TspError};

/// A finite, ordered sequence of temperatures, one per annealing step.
///
/// Schedules are generated in full before a run and never change
/// afterwards.
///
/// # Examples
///
/// ```
/// use tsp_anneal::schedule::TemperatureSchedule;
///
/// let linear = TemperatureSchedule::linear(50.0, 4).unwrap();
/// assert_eq!(linear.as_slice(), &[10.0, 7.5, 5.0, 2.5]);
///
/// let ratio = TemperatureSchedule::ratio(8.0, 0.5, 3).unwrap();
/// assert_eq!(ratio.as_slice(), &[8.0, 4.0, 2.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureSchedule {
    temperatures: Vec<f64>,
}

impl TemperatureSchedule {
    /// Divisor applied to `max_distance` to get the linear start temperature.
    pub const LINEAR_START_DIVISOR: f64 = 5.0;

    /// Linear decay from `max_distance / 5` towards zero.
    ///
    /// Produces exactly `num_steps` values, decreasing by a constant
    /// `start / num_steps`. The last value is `start / num_steps`, so every
    /// temperature stays positive.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidSchedule`] if `max_distance` is not positive and
    /// finite or `num_steps` is zero.
    pub fn linear(max_distance: f64, num_steps: usize) -> Result<Self> {
        if !(max_distance.is_finite() && max_distance > 0.0) {
            return Err(TspError::InvalidSchedule(format!(
                "max_distance must be positive and finite, got {max_distance}"
            )));
        }
        if num_steps == 0 {
            return Err(TspError::InvalidSchedule(
                "linear schedule needs at least one step".into(),
            ));
        }

        let start = max_distance / Self::LINEAR_START_DIVISOR;
        let interval = start / num_steps as f64;
        let temperatures = (0..num_steps)
            .map(|k| start - k as f64 * interval)
            .collect();
        Ok(Self { temperatures })
    }

    /// Geometric decay: `start, start·ratio, start·ratio², …` with
    /// `num_steps + 1` terms.
    ///
    /// Each term is the previous one multiplied by `ratio`. Very long
    /// schedules may underflow to `0.0`, which the annealing loop treats as a
    /// frozen temperature.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidSchedule`] if `start` is not positive and finite or
    /// `ratio` is outside `(0, 1)`.
    pub fn ratio(start: f64, ratio: f64, num_steps: usize) -> Result<Self> {
        if !(start.is_finite() && start > 0.0) {
            return Err(TspError::InvalidSchedule(format!(
                "start temperature must be positive and finite, got {start}"
            )));
        }
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(TspError::InvalidSchedule(format!(
                "ratio must be in (0, 1), got {ratio}"
            )));
        }

        let mut temperatures = Vec::with_capacity(num_steps + 1);
        let mut t = start;
        temperatures.push(t);
        for _ in 0..num_steps {
            t *= ratio;
            temperatures.push(t);
        }
        Ok(Self { temperatures })
    }

    /// Wraps caller-supplied temperatures.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidSchedule`] if `temperatures` is empty or holds a
    /// value that is not positive and finite.
    pub fn from_values(temperatures: Vec<f64>) -> Result<Self> {
        if temperatures.is_empty() {
            return Err(TspError::InvalidSchedule("schedule is empty".into()));
        }
        if let Some((i, t)) = temperatures
            .iter()
            .enumerate()
            .find(|(_, t)| !(t.is_finite() && **t > 0.0))
        {
            return Err(TspError::InvalidSchedule(format!(
                "temperature {i} must be positive and finite, got {t}"
            )));
        }
        Ok(Self { temperatures })
    }

    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.temperatures.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.temperatures
    }
}

impl<'a> IntoIterator for &'a TemperatureSchedule {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.temperatures.iter()
    }
}
