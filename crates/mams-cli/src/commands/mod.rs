pub mod assets;
pub mod audit;
pub mod auth;
pub mod bases;
pub mod dashboard;
pub mod dispatch;
pub mod menu;
pub mod reports;
pub mod settings;
pub mod shared;
pub mod transfers;

/// Today's date, used as the request, completion, and generation date.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
