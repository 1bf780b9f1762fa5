// SPDX-License-Identifier: AGPL-3.0
// Linkdir Core - Stores module

mod categories;
mod collection;
mod links;

pub use categories::CategoryStore;
pub use collection::Collection;
pub use links::LinkStore;
