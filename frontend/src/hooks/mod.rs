pub mod use_bills;
pub mod use_new_bill;
