//! Declaration nodes: types, members and file-level items.

mod enums;
mod extension;
mod func;
mod property;
mod protocols;
mod structs;
mod typealias;

pub use enums::{AssociatedValue, Enum, EnumCase};
pub use extension::Extension;
pub use func::{Function, Initializer, Param};
pub use property::{Binding, Property};
pub use protocols::{AssociatedType, Protocol};
pub use structs::{Class, Struct};
pub use typealias::{Import, TypeAlias};

use crate::{
    decor::Decor,
    types::{GenericParam, TypeRef, generic_clause, inheritance_clause},
};

/// `[access ]<keyword> Name<G>: A, B {`
pub(crate) fn type_header(
    decor: &Decor,
    keyword: &str,
    name: &str,
    generics: &[GenericParam],
    conformances: &[TypeRef],
) -> String {
    format!(
        "{}{} {}{}{} {{",
        decor.access_prefix(),
        keyword,
        name,
        generic_clause(generics),
        inheritance_clause(conformances)
    )
}
