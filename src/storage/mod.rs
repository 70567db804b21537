//! Storage layer for the expense ledger
//!
//! The ledger is loaded and saved as one document. `LedgerStore` is the seam
//! the services depend on; `JsonFileStore` backs it with an atomically
//! rewritten JSON file and `MemoryStore` keeps it in process.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::LedgerResult;
use crate::models::Ledger;

/// Whole-document persistence for a ledger
pub trait LedgerStore {
    /// Read the persisted ledger; an empty ledger if none exists yet
    fn load(&self) -> LedgerResult<Ledger>;

    /// Replace the persisted ledger wholesale
    fn save(&self, ledger: &Ledger) -> LedgerResult<()>;
}

impl<S: LedgerStore + ?Sized> LedgerStore for &S {
    fn load(&self) -> LedgerResult<Ledger> {
        (**self).load()
    }

    fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        (**self).save(ledger)
    }
}

/// Ledger stored as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> LedgerResult<Ledger> {
        let ledger: Ledger = read_json(&self.path)?;
        debug!(
            "Loaded {} expenses from {}",
            ledger.len(),
            self.path.display()
        );
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        write_json_atomic(&self.path, ledger)?;
        debug!("Saved {} expenses to {}", ledger.len(), self.path.display());
        Ok(())
    }
}

/// In-process store, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    ledger: RefCell<Ledger>,
    saves: Cell<usize>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a ledger
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: RefCell::new(ledger),
            saves: Cell::new(0),
        }
    }

    /// Snapshot of the stored ledger
    pub fn snapshot(&self) -> Ledger {
        self.ledger.borrow().clone()
    }

    /// How many times `save` has been called
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> LedgerResult<Ledger> {
        Ok(self.ledger.borrow().clone())
    }

    fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        *self.ledger.borrow_mut() = ledger.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
