use strum_macros::EnumIter;

/// How a form value is carried into the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Numeric,
    Categorical,
}

/// The seventeen inputs of the crash scenario form, in payload order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum CrashField {
    CrashSpeed,
    ImpactAngle,
    AirbagDeployed,
    SeatbeltUsed,
    WeatherConditions,
    RoadConditions,
    CrashType,
    VehicleType,
    VehicleAge,
    BrakeCondition,
    TireCondition,
    DriverAge,
    DriverExperience,
    AlcoholLevel,
    TimeOfDay,
    TrafficDensity,
    VisibilityDistance,
}

impl CrashField {
    /// Key used in the JSON payload and as the form label.
    pub fn label(self) -> &'static str {
        match self {
            CrashField::CrashSpeed => "Crash Speed (km/h)",
            CrashField::ImpactAngle => "Impact Angle (degrees)",
            CrashField::AirbagDeployed => "Airbag Deployed",
            CrashField::SeatbeltUsed => "Seatbelt Used",
            CrashField::WeatherConditions => "Weather Conditions",
            CrashField::RoadConditions => "Road Conditions",
            CrashField::CrashType => "Crash Type",
            CrashField::VehicleType => "Vehicle Type",
            CrashField::VehicleAge => "Vehicle Age (years)",
            CrashField::BrakeCondition => "Brake Condition",
            CrashField::TireCondition => "Tire Condition",
            CrashField::DriverAge => "Driver Age",
            CrashField::DriverExperience => "Driver Experience (years)",
            CrashField::AlcoholLevel => "Alcohol Level (BAC%)",
            CrashField::TimeOfDay => "Time of Day",
            CrashField::TrafficDensity => "Traffic Density",
            CrashField::VisibilityDistance => "Visibility Distance (m)",
        }
    }

    /// DOM id of the input bound to this field.
    pub fn element_id(self) -> &'static str {
        match self {
            CrashField::CrashSpeed => "speed",
            CrashField::ImpactAngle => "angle",
            CrashField::AirbagDeployed => "airbag",
            CrashField::SeatbeltUsed => "seatbelt",
            CrashField::WeatherConditions => "weather",
            CrashField::RoadConditions => "road",
            CrashField::CrashType => "crash_type",
            CrashField::VehicleType => "vehicle_type",
            CrashField::VehicleAge => "vehicle_age",
            CrashField::BrakeCondition => "brake",
            CrashField::TireCondition => "tire",
            CrashField::DriverAge => "driver_age",
            CrashField::DriverExperience => "experience",
            CrashField::AlcoholLevel => "alcohol",
            CrashField::TimeOfDay => "time",
            CrashField::TrafficDensity => "traffic",
            CrashField::VisibilityDistance => "visibility",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            CrashField::CrashSpeed
            | CrashField::ImpactAngle
            | CrashField::VehicleAge
            | CrashField::DriverAge
            | CrashField::DriverExperience
            | CrashField::AlcoholLevel
            | CrashField::VisibilityDistance => FieldKind::Numeric,
            _ => FieldKind::Categorical,
        }
    }

    /// Choices offered by the form for categorical fields. The record never
    /// checks values against this list.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            CrashField::AirbagDeployed | CrashField::SeatbeltUsed => &["Yes", "No"],
            CrashField::WeatherConditions => &["Clear", "Rain", "Snow", "Fog"],
            CrashField::RoadConditions => &["Dry", "Wet", "Icy", "Snowy"],
            CrashField::CrashType => &["Head-on", "Rear-end", "Side Impact", "Rollover"],
            CrashField::VehicleType => &["Car", "SUV", "Truck", "Motorcycle"],
            CrashField::BrakeCondition | CrashField::TireCondition => {
                &["Good", "Average", "Poor"]
            }
            CrashField::TimeOfDay => &["Morning", "Afternoon", "Evening", "Night"],
            CrashField::TrafficDensity => &["Low", "Medium", "High"],
            _ => &[],
        }
    }
}
