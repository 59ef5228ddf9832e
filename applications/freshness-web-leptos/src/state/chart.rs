use std::collections::VecDeque;

/// Number of points kept in the rolling FQI chart. The old JS dashboard
/// shifted only past 20 and so briefly held 21; this window holds 20.
pub const CHART_CAPACITY: usize = 20;

/// One point of the FQI chart. `fqi` is `None` when the backend had no score.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub fqi: Option<f64>,
}

/// Sliding window of the most recent FQI readings
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    points: VecDeque<ChartPoint>,
    capacity: usize,
}

impl ChartSeries {
    pub fn new() -> Self {
        Self::with_capacity(CHART_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Append a point, evicting the oldest when full.
    ///
    /// Returns `false` without touching the series when `label` equals the
    /// last stored label, so overlapping polls never plot the same reading twice.
    pub fn append(&mut self, label: impl Into<String>, fqi: Option<f64>) -> bool {
        let label = label.into();
        if self.last_label() == Some(label.as_str()) {
            return false;
        }

        if self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(ChartPoint { label, fqi });
        true
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }

    pub fn last_label(&self) -> Option<&str> {
        self.points.back().map(|p| p.label.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.label.as_str())
    }

    pub fn points(&self) -> impl Iterator<Item = &ChartPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ChartSeries {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut series = ChartSeries::new();
        assert!(series.append("10:00:01", Some(90.0)));
        assert!(series.append("10:00:04", Some(88.0)));

        assert_eq!(series.labels().collect::<Vec<_>>(), vec!["10:00:01", "10:00:04"]);
        assert_eq!(series.last_label(), Some("10:00:04"));
    }

    #[test]
    fn test_duplicate_last_label_is_noop() {
        let mut series = ChartSeries::new();
        series.append("10:00:01", Some(90.0));

        assert!(!series.append("10:00:01", Some(42.0)));
        assert_eq!(series.len(), 1);
        assert_eq!(series.points().next().unwrap().fqi, Some(90.0));
    }

    #[test]
    fn test_label_equal_to_older_point_is_appended() {
        let mut series = ChartSeries::new();
        series.append("a", Some(1.0));
        series.append("b", Some(2.0));

        assert!(series.append("a", Some(3.0)));
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_evicts_oldest_in_fifo_order() {
        let mut series = ChartSeries::new();
        for i in 0..25 {
            series.append(format!("t{}", i), Some(i as f64));
        }

        let labels: Vec<_> = series.labels().map(str::to_string).collect();
        let expected: Vec<_> = (5..25).map(|i| format!("t{}", i)).collect();
        assert_eq!(series.len(), CHART_CAPACITY);
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut series = ChartSeries::new();
        for i in 0..200 {
            // Every third append repeats the previous label
            let label = format!("t{}", i - (i % 3 == 2) as i32);
            series.append(label, None);
            assert!(series.len() <= CHART_CAPACITY);
        }
    }

    #[test]
    fn test_reset_clears_points() {
        let mut series = ChartSeries::new();
        series.append("10:00:01", Some(90.0));
        series.reset();

        assert!(series.is_empty());
        assert_eq!(series.last_label(), None);
        assert!(series.append("10:00:01", Some(90.0)));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut series = ChartSeries::with_capacity(0);
        series.append("a", None);
        series.append("b", None);

        assert_eq!(series.capacity(), 1);
        assert_eq!(series.labels().collect::<Vec<_>>(), vec!["b"]);
    }
}
