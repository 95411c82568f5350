pub mod dashboards;
pub mod domain;
pub mod reports;
pub mod shared;
