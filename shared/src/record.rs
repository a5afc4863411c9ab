use crate::fields::CrashField;
use serde::{Serialize, Serializer};

/// One crash scenario as sent to the prediction service.
///
/// Field order is the payload key order. Whole numbers are written without a
/// fraction. Numeric values that failed to coerce are kept as NaN and
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrashFeatureRecord {
    #[serde(rename = "Crash Speed (km/h)", serialize_with = "serialize_number")]
    pub crash_speed: f64,
    #[serde(rename = "Impact Angle (degrees)", serialize_with = "serialize_number")]
    pub impact_angle: f64,
    #[serde(rename = "Airbag Deployed")]
    pub airbag_deployed: String,
    #[serde(rename = "Seatbelt Used")]
    pub seatbelt_used: String,
    #[serde(rename = "Weather Conditions")]
    pub weather_conditions: String,
    #[serde(rename = "Road Conditions")]
    pub road_conditions: String,
    #[serde(rename = "Crash Type")]
    pub crash_type: String,
    #[serde(rename = "Vehicle Type")]
    pub vehicle_type: String,
    #[serde(rename = "Vehicle Age (years)", serialize_with = "serialize_number")]
    pub vehicle_age: f64,
    #[serde(rename = "Brake Condition")]
    pub brake_condition: String,
    #[serde(rename = "Tire Condition")]
    pub tire_condition: String,
    #[serde(rename = "Driver Age", serialize_with = "serialize_number")]
    pub driver_age: f64,
    #[serde(rename = "Driver Experience (years)", serialize_with = "serialize_number")]
    pub driver_experience: f64,
    #[serde(rename = "Alcohol Level (BAC%)", serialize_with = "serialize_number")]
    pub alcohol_level: f64,
    #[serde(rename = "Time of Day")]
    pub time_of_day: String,
    #[serde(rename = "Traffic Density")]
    pub traffic_density: String,
    #[serde(rename = "Visibility Distance (m)", serialize_with = "serialize_number")]
    pub visibility_distance: f64,
}

impl CrashFeatureRecord {
    /// Builds a record from the raw text of each form input.
    ///
    /// `read` is called once per field in payload order. Numeric fields go
    /// through [`coerce_number`]; categorical fields are taken verbatim.
    pub fn from_lookup<F>(mut read: F) -> Self
    where
        F: FnMut(CrashField) -> String,
    {
        let crash_speed = coerce_number(&read(CrashField::CrashSpeed));
        let impact_angle = coerce_number(&read(CrashField::ImpactAngle));
        let airbag_deployed = read(CrashField::AirbagDeployed);
        let seatbelt_used = read(CrashField::SeatbeltUsed);
        let weather_conditions = read(CrashField::WeatherConditions);
        let road_conditions = read(CrashField::RoadConditions);
        let crash_type = read(CrashField::CrashType);
        let vehicle_type = read(CrashField::VehicleType);
        let vehicle_age = coerce_number(&read(CrashField::VehicleAge));
        let brake_condition = read(CrashField::BrakeCondition);
        let tire_condition = read(CrashField::TireCondition);
        let driver_age = coerce_number(&read(CrashField::DriverAge));
        let driver_experience = coerce_number(&read(CrashField::DriverExperience));
        let alcohol_level = coerce_number(&read(CrashField::AlcoholLevel));
        let time_of_day = read(CrashField::TimeOfDay);
        let traffic_density = read(CrashField::TrafficDensity);
        let visibility_distance = coerce_number(&read(CrashField::VisibilityDistance));

        Self {
            crash_speed,
            impact_angle,
            airbag_deployed,
            seatbelt_used,
            weather_conditions,
            road_conditions,
            crash_type,
            vehicle_type,
            vehicle_age,
            brake_condition,
            tire_condition,
            driver_age,
            driver_experience,
            alcohol_level,
            time_of_day,
            traffic_density,
            visibility_distance,
        }
    }

    #[cfg(test)]
    pub fn numeric(&self, field: CrashField) -> Option<f64> {
        let value = match field {
            CrashField::CrashSpeed => self.crash_speed,
            CrashField::ImpactAngle => self.impact_angle,
            CrashField::VehicleAge => self.vehicle_age,
            CrashField::DriverAge => self.driver_age,
            CrashField::DriverExperience => self.driver_experience,
            CrashField::AlcoholLevel => self.alcohol_level,
            CrashField::VisibilityDistance => self.visibility_distance,
            _ => return None,
        };
        Some(value)
    }

    #[cfg(test)]
    pub fn categorical(&self, field: CrashField) -> Option<&str> {
        let value = match field {
            CrashField::AirbagDeployed => &self.airbag_deployed,
            CrashField::SeatbeltUsed => &self.seatbelt_used,
            CrashField::WeatherConditions => &self.weather_conditions,
            CrashField::RoadConditions => &self.road_conditions,
            CrashField::CrashType => &self.crash_type,
            CrashField::VehicleType => &self.vehicle_type,
            CrashField::BrakeCondition => &self.brake_condition,
            CrashField::TireCondition => &self.tire_condition,
            CrashField::TimeOfDay => &self.time_of_day,
            CrashField::TrafficDensity => &self.traffic_density,
            _ => return None,
        };
        Some(value)
    }
}

/// Writes whole finite values as integers, the way `JSON.stringify` does.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Converts form text to a number the way a browser's `Number()` does.
///
/// Blank input is `0`. Anything that is not a decimal literal, a
/// `0x`/`0o`/`0b` integer or a signed `Infinity` is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let text = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&text[2..], radix);
    }

    // Rust accepts "inf" and "NaN" spellings that the browser rejects.
    let decimal_chars = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal_chars || !text.chars().any(|c| c.is_ascii_digit()) {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        })
        .unwrap_or(f64::NAN)
}
