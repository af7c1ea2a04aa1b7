pub mod new_bill_page;

pub use new_bill_page::NewBillPage;
