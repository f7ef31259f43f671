use crate::types::observation::Observation;
use chrono::NaiveDate;

const SAMPLE_DATE: (i32, u32, u32) = (2024, 1, 15);

/// The dashboard's built-in readings, used when no dataset path is given.
pub fn observations() -> Vec<Observation> {
    let (year, month, day) = SAMPLE_DATE;
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
    [
        ("Great Barrier Reef", 8.05, 28.5, 45),
        ("California Coast", 7.9, 14.2, 30),
        ("Arctic Ocean", 8.15, 1.5, 15),
        ("Mediterranean Sea", 8.0, 19.8, 25),
        ("Coral Triangle", 8.1, 29.1, 55),
        ("North Atlantic", 7.95, 16.5, 35),
        ("Kelp Forest Zone", 8.08, 15.5, 40),
        ("Hydrothermal Vent", 7.6, 35.0, 10),
    ]
    .into_iter()
    .map(|(location, ph, sst, species)| Observation::new(location, date, ph, sst, species))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_eight_dated_rows() {
        let rows = observations();
        assert_eq!(rows.len(), 8);
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).expect("date should be valid");
        assert!(rows.iter().all(|row| row.date == expected));
        assert_eq!(rows[7].location, "Hydrothermal Vent");
    }
}
