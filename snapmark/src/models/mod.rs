mod record;
mod settings;

pub use record::OcrRecord;
pub use settings::{SettingsUpdate, UserSettings};
