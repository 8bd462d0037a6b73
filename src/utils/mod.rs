//! Small cross-cutting helpers shared by the core modules.

pub mod secure_zero;

pub use secure_zero::secure_zeroize;
