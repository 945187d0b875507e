//! Kani proof harnesses
//!
//! The files are organized by category:
//!
//! - `heap_proofs.rs`: Invariant proofs for a single heap
//! - `stress_proofs.rs`: Heaps of different fanouts fed the same operations

#[cfg(kani)]
#[path = "heap_proofs.rs"]
mod heap_proofs;
#[cfg(kani)]
#[path = "stress_proofs.rs"]
mod stress_proofs;
