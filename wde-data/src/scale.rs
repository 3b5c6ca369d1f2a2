/// Minimal linear scale mapping a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> LinearScale {
        LinearScale { domain, range }
    }

    /// Map a domain value to the range. A degenerate domain maps everything
    /// to the middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_forward_mapping() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(5.0), 50.0);
        assert_eq!(scale.scale(10.0), 100.0);
    }

    #[test]
    fn test_inverted_range() {
        // y axes run top-down in pixels.
        let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0));
        assert_eq!(scale.scale(0.0), 100.0);
        assert_eq!(scale.scale(10.0), 0.0);
    }

    #[test]
    fn test_degenerate_domain() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 80.0));
        assert_eq!(scale.scale(5.0), 40.0);
        assert_eq!(scale.scale(999.0), 40.0);
    }
}
