pub mod wind_report;
