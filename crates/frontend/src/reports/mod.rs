pub mod r001_informes;

pub use r001_informes::ui::ReportsPage;
