mod assets;
mod audit;
mod bases;
mod reports;
mod settings;
mod transfers;

pub use assets::AssetCommands;
pub use audit::AuditCommands;
pub use bases::BaseCommands;
pub use reports::ReportCommands;
pub use settings::SettingsCommands;
pub use transfers::TransferCommands;
