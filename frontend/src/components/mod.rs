pub mod bills;
pub mod login;
pub mod new_bill;
