use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One environmental sample. Column aliases accept the dashboard's CSV headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(alias = "Location")]
    pub location: String,
    #[serde(alias = "Date", deserialize_with = "date_format::deserialize")]
    pub date: NaiveDate,
    #[serde(alias = "pH")]
    pub ph: f64,
    #[serde(alias = "SST (°C)", alias = "sst")]
    pub sst_celsius: f64,
    #[serde(alias = "Species Observed", alias = "species")]
    pub species_observed: i64,
}

impl Observation {
    pub fn new(
        location: impl Into<String>,
        date: NaiveDate,
        ph: f64,
        sst_celsius: f64,
        species_observed: i64,
    ) -> Self {
        Self {
            location: location.into(),
            date,
            ph,
            sst_celsius,
            species_observed,
        }
    }
}

/// Document shape shared by the JSON and TOML inputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObservationFile {
    pub observations: Vec<Observation>,
}

/// `YYYY-MM-DD` strings from any format, plus native TOML dates.
mod date_format {
    use chrono::NaiveDate;
    use serde::de::{self, MapAccess, Visitor};
    use serde::{Deserialize, Deserializer};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DateVisitor)
    }

    struct DateVisitor;

    impl<'de> Visitor<'de> for DateVisitor {
        type Value = NaiveDate;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a YYYY-MM-DD date")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<NaiveDate, E> {
            value
                .parse::<NaiveDate>()
                .map_err(|e| E::custom(format!("invalid date `{value}`: {e}")))
        }

        // toml hands native date values over as a single-entry map.
        fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<NaiveDate, A::Error> {
            let datetime =
                toml::value::Datetime::deserialize(de::value::MapAccessDeserializer::new(map))?;
            match (datetime.date, datetime.time) {
                (Some(date), None) => NaiveDate::from_ymd_opt(
                    i32::from(date.year),
                    u32::from(date.month),
                    u32::from(date.day),
                )
                .ok_or_else(|| de::Error::custom(format!("invalid date `{datetime}`"))),
                _ => Err(de::Error::custom(format!(
                    "expected a date without a time of day, found `{datetime}`"
                ))),
            }
        }
    }
}
