mod records;
mod settings;

pub use records::RecordRepository;
pub use settings::SettingsRepository;
