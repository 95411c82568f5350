pub mod a001_supplier;
pub mod a002_article;
pub mod a003_client;
pub mod a004_worker;
pub mod a005_model;
pub mod a006_stock;
pub mod a007_purchase_order;
pub mod a008_receiving;
pub mod a009_order;
