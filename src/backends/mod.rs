//! Backend implementations of the `Vfs` contract.

pub mod memory;
