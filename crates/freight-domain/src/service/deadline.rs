//! Delivery deadline calculation

use freight_types::JobType;

/// Average road speed used to derive driving hours
pub const AVERAGE_SPEED_KMH: f64 = 60.0;

/// (minimum hours, padding hours) per range category
pub fn deadline_policy(job_type: JobType) -> (u32, u32) {
    match job_type {
        JobType::Local => (8, 4),
        JobType::State => (16, 8),
        JobType::International => (24, 12),
    }
}

pub fn deadline_hours(distance_km: f64, job_type: JobType) -> u32 {
    let (minimum, padding) = deadline_policy(job_type);
    let base_hours = (distance_km / AVERAGE_SPEED_KMH).ceil().max(0.0) as u32;
    minimum.max(base_hours + padding)
}

/// Deadline label such as "20h"
pub fn deadline_label(distance_km: f64, job_type: JobType) -> String {
    format!("{}h", deadline_hours(distance_km, job_type))
}

/// True when the deadline sits at the category floor
pub fn is_tight(hours: u32, job_type: JobType) -> bool {
    hours == deadline_policy(job_type).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_applies_to_short_hauls() {
        assert_eq!(deadline_hours(35.0, JobType::Local), 8);
        assert_eq!(deadline_hours(201.0, JobType::State), 16);
        assert_eq!(deadline_hours(501.0, JobType::International), 24);
    }

    #[test]
    fn test_padding_applies_to_long_hauls() {
        // ceil(480 / 60) = 8, + 8 = 16
        assert_eq!(deadline_hours(480.0, JobType::State), 16);
        // ceil(500 / 60) = 9, + 8 = 17
        assert_eq!(deadline_hours(500.0, JobType::State), 17);
        // ceil(1830 / 60) = 31, + 12 = 43
        assert_eq!(deadline_hours(1830.0, JobType::International), 43);
    }

    #[test]
    fn test_label_format() {
        assert_eq!(deadline_label(1830.0, JobType::International), "43h");
        assert_eq!(deadline_label(10.0, JobType::Local), "8h");
    }

    #[test]
    fn test_is_tight() {
        assert!(is_tight(8, JobType::Local));
        assert!(!is_tight(9, JobType::Local));
        assert!(is_tight(24, JobType::International));
    }
}
