pub mod calendar_summary;
pub mod loading_spinner;
pub mod summary_table;
