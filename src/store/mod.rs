pub mod expenses;
pub mod models;

pub use expenses::ExpenseStore;
pub use models::Expense;
