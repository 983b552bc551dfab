/// Above this multiple of the required years a candidate is overqualified.
const OVERQUALIFIED_RATIO: f64 = 1.5;
/// Below this multiple of the required years a candidate is underqualified.
const UNDERQUALIFIED_RATIO: f64 = 0.7;

/// Years-of-experience comparison against the job's stated requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualificationFlags {
    pub overqualified: bool,
    pub underqualified: bool,
}

/// Flags are only evaluated when both year counts are positive.
/// The band `[0.7×, 1.5×]` sets neither flag.
pub fn assess_qualification(years_experience: u32, job_years_required: u32) -> QualificationFlags {
    if years_experience == 0 || job_years_required == 0 {
        return QualificationFlags::default();
    }

    let years = f64::from(years_experience);
    let required = f64::from(job_years_required);

    QualificationFlags {
        overqualified: years > required * OVERQUALIFIED_RATIO,
        underqualified: years < required * UNDERQUALIFIED_RATIO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overqualified() {
        let flags = assess_qualification(15, 5);
        assert!(flags.overqualified);
        assert!(!flags.underqualified);
    }

    #[test]
    fn test_underqualified() {
        let flags = assess_qualification(2, 5);
        assert!(flags.underqualified);
        assert!(!flags.overqualified);
    }

    #[test]
    fn test_well_matched() {
        assert_eq!(assess_qualification(5, 5), QualificationFlags::default());
    }

    #[test]
    fn test_band_edges_are_well_matched() {
        // 15 is exactly 1.5 × 10 → not over; 7 is exactly 0.7 × 10 → not under
        assert_eq!(assess_qualification(15, 10), QualificationFlags::default());
        assert_eq!(assess_qualification(7, 10), QualificationFlags::default());
        assert!(assess_qualification(16, 10).overqualified);
        assert!(assess_qualification(6, 10).underqualified);
    }

    #[test]
    fn test_zero_years_sets_nothing() {
        assert_eq!(assess_qualification(0, 5), QualificationFlags::default());
        assert_eq!(assess_qualification(12, 0), QualificationFlags::default());
    }
}
