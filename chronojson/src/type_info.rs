//! Run-time descriptors for the types a converter is asked about.

use std::any::TypeId;
use std::fmt;

/// How a converted type behaves with respect to nulls and subtyping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Plain value; its nullable form is `Option<T>`.
    Value,
    /// Reference-like type that admits no subtypes; nullable as itself.
    Sealed,
    /// Reference-like type that admits declared subtypes; nullable as itself.
    Open,
}

/// A type that converters can be registered for.
pub trait JsonType: Sized + 'static {
    /// Null and subtype behavior of the type.
    const KIND: TypeKind;

    /// Short name used in error messages.
    fn type_name() -> &'static str {
        short_name(std::any::type_name::<Self>())
    }
}

/// Describes a requested type: identity, name and declared ancestors.
#[derive(Clone, PartialEq, Eq)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
    ancestors: Vec<TypeId>,
}

impl TypeInfo {
    /// Describes `T` itself.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: short_name(std::any::type_name::<T>()),
            ancestors: Vec::new(),
        }
    }

    /// Describes the nullable form of `T`: `Option<T>` for value types,
    /// `T` itself otherwise.
    pub fn nullable<T: JsonType>() -> Self {
        match T::KIND {
            TypeKind::Value => Self::of::<Option<T>>(),
            TypeKind::Sealed | TypeKind::Open => Self::of::<T>(),
        }
    }

    /// Declares `B` as an ancestor of the described type.
    pub fn extends<B: ?Sized + 'static>(mut self) -> Self {
        self.ancestors.push(TypeId::of::<B>());
        self
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reports whether the described type is exactly `id`.
    pub fn is(&self, id: TypeId) -> bool {
        self.id == id
    }

    /// Reports whether `id` was declared as an ancestor.
    pub fn derives_from(&self, id: TypeId) -> bool {
        self.ancestors.contains(&id)
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("ancestors", &self.ancestors.len())
            .finish()
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Strips the module path of the outer type only:
/// `core::option::Option<chrono::NaiveDate>` becomes `Option<chrono::NaiveDate>`.
fn short_name(full: &'static str) -> &'static str {
    let head = match full.find('<') {
        Some(open) => &full[..open],
        None => full,
    };
    match head.rfind("::") {
        Some(pos) => &full[pos + 2..],
        None => full,
    }
}

// chrono scalars are all plain values.
impl JsonType for chrono::DateTime<chrono::Utc> {
    const KIND: TypeKind = TypeKind::Value;

    fn type_name() -> &'static str {
        "Instant"
    }
}

impl JsonType for chrono::NaiveDate {
    const KIND: TypeKind = TypeKind::Value;

    fn type_name() -> &'static str {
        "LocalDate"
    }
}

impl JsonType for chrono::NaiveDateTime {
    const KIND: TypeKind = TypeKind::Value;

    fn type_name() -> &'static str {
        "LocalDateTime"
    }
}

impl JsonType for chrono::NaiveTime {
    const KIND: TypeKind = TypeKind::Value;

    fn type_name() -> &'static str {
        "LocalTime"
    }
}

impl JsonType for chrono::FixedOffset {
    const KIND: TypeKind = TypeKind::Value;

    fn type_name() -> &'static str {
        "Offset"
    }
}

impl JsonType for chrono::DateTime<chrono::FixedOffset> {
    const KIND: TypeKind = TypeKind::Value;

    fn type_name() -> &'static str {
        "OffsetDateTime"
    }
}
