use crate::model::DateInterval;

/// Whether two date intervals share at least one instant. Touching endpoints
/// count as overlapping.
pub fn overlaps(a: &DateInterval, b: &DateInterval) -> bool {
    a.start <= b.end && b.start <= a.end
}

impl DateInterval {
    pub fn overlaps(&self, other: &DateInterval) -> bool {
        overlaps(self, other)
    }

    /// The shared part of two intervals, if any.
    pub fn intersection(&self, other: &DateInterval) -> Option<DateInterval> {
        if !overlaps(self, other) {
            return None;
        }
        Some(DateInterval {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time;

    fn span(from: u32, to: u32) -> DateInterval {
        DateInterval::new(
            time::midnight(2024, 6, from).unwrap(),
            time::midnight(2024, 6, to).unwrap(),
        )
    }

    #[test]
    fn overlap_is_symmetric_and_reflexive() {
        let pairs = [
            (span(1, 5), span(3, 8)),
            (span(1, 5), span(6, 8)),
            (span(1, 10), span(3, 4)),
            (span(2, 2), span(2, 2)),
        ];
        for (a, b) in pairs {
            assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
            assert!(overlaps(&a, &a));
        }
    }

    #[test]
    fn touching_endpoints_overlap() {
        assert!(overlaps(&span(1, 5), &span(5, 9)));
        assert!(!overlaps(&span(1, 5), &span(6, 9)));
    }

    #[test]
    fn intersection_of_nested_and_disjoint() {
        assert_eq!(span(1, 10).intersection(&span(3, 4)), Some(span(3, 4)));
        assert_eq!(span(1, 5).intersection(&span(3, 8)), Some(span(3, 5)));
        assert_eq!(span(1, 2).intersection(&span(3, 8)), None);
    }
}
