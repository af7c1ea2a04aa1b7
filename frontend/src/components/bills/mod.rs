pub mod bills_page;
pub mod bills_table;
pub mod receipt_modal;

pub use bills_page::BillsPage;
