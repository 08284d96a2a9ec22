use std::sync::{Arc, Mutex};

use crate::store::models::Expense;

/*
This file holds the in-memory expense list and its
CRUD (Create, Read, Update, Delete) logic.
All records live for the process lifetime only.
 */

struct StoreInner {
    expenses: Vec<Expense>,
    next_id: i64,
}

/// Shared handle to the expense list. Cloning is cheap; every clone
/// points at the same mutex-guarded state.
#[derive(Clone)]
pub struct ExpenseStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                expenses: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// The two records every fresh process starts with.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.create("Groceries".to_string(), 50.0);
        store.create("Utilities".to_string(), 100.0);
        store
    }

    // Get all expenses, in insertion order
    pub fn list(&self) -> Vec<Expense> {
        let inner = self.inner.lock().expect("expense store mutex poisoned");
        inner.expenses.clone()
    }

    // Create expense. Ids come from a counter that never reuses a value,
    // even after deletes.
    pub fn create(&self, description: String, amount: f64) -> Expense {
        let mut inner = self.inner.lock().expect("expense store mutex poisoned");
        let expense = Expense {
            id: inner.next_id,
            description,
            amount,
        };
        inner.next_id += 1;
        inner.expenses.push(expense.clone());
        expense
    }

    // Update expense by id. Whole-record replace, not a field merge.
    pub fn update(&self, id: i64, description: String, amount: f64) -> Option<Expense> {
        let mut inner = self.inner.lock().expect("expense store mutex poisoned");
        let slot = inner.expenses.iter_mut().find(|e| e.id == id)?;
        *slot = Expense {
            id,
            description,
            amount,
        };
        Some(slot.clone())
    }

    // Delete expense by id. Removes every match; silent when nothing matches.
    pub fn delete(&self, id: i64) {
        let mut inner = self.inner.lock().expect("expense store mutex poisoned");
        inner.expenses.retain(|e| e.id != id);
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}
