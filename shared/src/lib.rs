pub mod display;
pub mod fields;
pub mod prediction;
pub mod record;

pub use display::{PredictionDisplay, RenderPolicy, RequestSequencer};
pub use fields::{CrashField, FieldKind};
pub use prediction::{ErrorResponse, PredictionResult, ResponseError, decode_response, display_value};
pub use record::{CrashFeatureRecord, coerce_number};
