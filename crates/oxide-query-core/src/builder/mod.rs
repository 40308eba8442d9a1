//! Fluent statement builders.
//!
//! Every builder owns one [`SqlStatement`](crate::statement::SqlStatement)
//! and mutates it through `&mut self` chaining. Conditions are added through
//! the [`Filterable`], [`HavingFilterable`] and [`Joinable`] traits, which
//! each builder opts into.

mod conditions;
mod delete;
mod insert;
mod join;
mod query;
mod select;
mod update;

pub use conditions::{
    Filterable, Having, HavingFilterable, HavingGroup, StatementHandle, Where, WhereGroup,
};
pub use delete::DeleteStatement;
pub use insert::InsertStatement;
pub use join::{JoinOn, Joinable};
pub use query::Query;
pub use select::SelectStatement;
pub use update::UpdateStatement;
