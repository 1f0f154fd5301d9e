//! Persistence layer for Fatura.
//!
//! This crate defines the contract the engine needs from a persistence
//! collaborator — lookup by number, insert, version-checked update and a
//! filtered listing, with no physical delete — plus an in-memory
//! reference implementation of that contract.

pub mod memory;
pub mod repository;

pub use memory::MemoryInvoiceStore;
pub use repository::{InvoiceQuery, InvoiceRepository, StoreError, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
