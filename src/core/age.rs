use crate::models::AgeCategory;

const MONTHS_PER_YEAR: u32 = 12;

/// Upper bounds (inclusive, in months) of the first three life stages
const PUPPY_MAX_MONTHS: u32 = 12;
const YOUNG_MAX_MONTHS: u32 = 36;
const ADULT_MAX_MONTHS: u32 = 84;

/// Bucket an age in months into a life stage
///
/// Upper bounds are inclusive: exactly one year is still a Puppy, exactly
/// three years is Young and exactly seven years is Adult.
pub fn age_category(age_months: u32) -> AgeCategory {
    if age_months <= PUPPY_MAX_MONTHS {
        AgeCategory::Puppy
    } else if age_months <= YOUNG_MAX_MONTHS {
        AgeCategory::Young
    } else if age_months <= ADULT_MAX_MONTHS {
        AgeCategory::Adult
    } else {
        AgeCategory::Senior
    }
}

/// Human-readable age, e.g. "1 year, 3 months"
pub fn format_age(age_months: u32) -> String {
    let years = age_months / MONTHS_PER_YEAR;
    let months = age_months % MONTHS_PER_YEAR;

    if years == 0 {
        plural(months, "month")
    } else if months == 0 {
        plural(years, "year")
    } else {
        format!("{}, {}", plural(years, "year"), plural(months, "month"))
    }
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(age_category(0), AgeCategory::Puppy);
        assert_eq!(age_category(12), AgeCategory::Puppy);
        assert_eq!(age_category(13), AgeCategory::Young);
        assert_eq!(age_category(36), AgeCategory::Young);
        assert_eq!(age_category(37), AgeCategory::Adult);
        assert_eq!(age_category(84), AgeCategory::Adult);
        assert_eq!(age_category(85), AgeCategory::Senior);
        assert_eq!(age_category(180), AgeCategory::Senior);
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(0), "0 months");
        assert_eq!(format_age(1), "1 month");
        assert_eq!(format_age(7), "7 months");
        assert_eq!(format_age(12), "1 year");
        assert_eq!(format_age(24), "2 years");
        assert_eq!(format_age(13), "1 year, 1 month");
        assert_eq!(format_age(29), "2 years, 5 months");
    }
}
