//! Job value calculation
//!
//! value = round(distance x rate x weight_mult x category_mult x cargo_bonus + weight x 15)

use freight_types::JobType;

/// Base payout per km
pub const BASE_RATE_PER_KM: f64 = 2.5;

/// Flat payout per tonne of cargo
pub const PER_TONNE_SURCHARGE: f64 = 15.0;

pub fn is_temperature_controlled(category: &str) -> bool {
    let c = category.to_lowercase();
    c.contains("frozen") || c.contains("refrigerated")
}

pub fn is_hazardous(category: &str) -> bool {
    category.to_lowercase().contains("hazardous")
}

pub fn is_bulk(category: &str) -> bool {
    category.to_lowercase().contains("bulk")
}

pub fn is_construction(category: &str) -> bool {
    category.to_lowercase().contains("construction")
}

pub fn is_heavy(category: &str) -> bool {
    category.to_lowercase().contains("heavy")
}

/// Cargo bonus checks in evaluation order.
///
/// A later match replaces an earlier one: "Hazardous Bulk" pays the bulk
/// bonus (1.10), not the hazardous one. Product has not confirmed whether
/// that precedence is intended; keep the order until it does.
static CARGO_BONUSES: [(fn(&str) -> bool, f64); 5] = [
    (is_temperature_controlled, 1.25),
    (is_hazardous, 1.35),
    (is_bulk, 1.10),
    (is_construction, 1.15),
    (is_heavy, 1.30),
];

/// Lighter loads pay more per km
pub fn weight_multiplier(weight: u32) -> f64 {
    if weight <= 8 {
        1.4
    } else if weight <= 16 {
        1.0
    } else {
        0.8
    }
}

pub fn category_multiplier(job_type: JobType) -> f64 {
    match job_type {
        JobType::Local => 1.0,
        JobType::State => 1.6,
        JobType::International => 2.2,
    }
}

/// Bonus of the last matching predicate, 1.0 when none match
pub fn cargo_bonus(category: &str) -> f64 {
    CARGO_BONUSES
        .iter()
        .fold(1.0, |bonus, (matches, value)| {
            if matches(category) {
                *value
            } else {
                bonus
            }
        })
}

/// Monetary value of a job in currency units
pub fn calculate_value(distance_km: f64, weight: u32, cargo_category: &str, job_type: JobType) -> u64 {
    let haul = distance_km
        * BASE_RATE_PER_KM
        * weight_multiplier(weight)
        * category_multiplier(job_type)
        * cargo_bonus(cargo_category);
    let value = haul + f64::from(weight) * PER_TONNE_SURCHARGE;
    value.round().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_multiplier_boundaries() {
        assert_eq!(weight_multiplier(2), 1.4);
        assert_eq!(weight_multiplier(8), 1.4);
        assert_eq!(weight_multiplier(10), 1.0);
        assert_eq!(weight_multiplier(16), 1.0);
        assert_eq!(weight_multiplier(18), 0.8);
        assert_eq!(weight_multiplier(24), 0.8);
    }

    #[test]
    fn test_single_predicate_bonuses() {
        assert_eq!(cargo_bonus("Dry Goods"), 1.0);
        assert_eq!(cargo_bonus("Frozen Food"), 1.25);
        assert_eq!(cargo_bonus("Refrigerated Goods"), 1.25);
        assert_eq!(cargo_bonus("Hazardous Materials"), 1.35);
        assert_eq!(cargo_bonus("Bulk Grain"), 1.10);
        assert_eq!(cargo_bonus("Construction Materials"), 1.15);
        assert_eq!(cargo_bonus("Heavy Machinery"), 1.30);
    }

    #[test]
    fn test_last_matching_predicate_wins() {
        // hazardous (1.35) is overwritten by bulk (1.10)
        assert_eq!(cargo_bonus("Hazardous Bulk"), 1.10);
        // construction (1.15) is overwritten by heavy (1.30)
        assert_eq!(cargo_bonus("Heavy Construction Equipment"), 1.30);
        // frozen (1.25) is overwritten by hazardous (1.35)
        assert_eq!(cargo_bonus("Frozen Hazardous Samples"), 1.35);
    }

    #[test]
    fn test_value_local_dry_goods() {
        // 100 x 2.5 x 1.4 x 1.0 x 1.0 + 4 x 15 = 350 + 60
        assert_eq!(calculate_value(100.0, 4, "Dry Goods", JobType::Local), 410);
    }

    #[test]
    fn test_value_international_heavy() {
        // 1000 x 2.5 x 0.8 x 2.2 x 1.3 + 20 x 15 = 5720 + 300
        assert_eq!(
            calculate_value(1000.0, 20, "Heavy Machinery", JobType::International),
            6020
        );
    }

    #[test]
    fn test_value_rounds_to_nearest() {
        // 201 x 2.5 x 1.0 x 1.6 x 1.1 + 10 x 15 = 884.4 + 150 = 1034.4
        assert_eq!(calculate_value(201.0, 10, "Bulk Grain", JobType::State), 1034);
    }

    #[test]
    fn test_value_always_positive() {
        assert!(calculate_value(0.5, 2, "Dry Goods", JobType::Local) > 0);
    }
}
