//! Declared types of inspected values, as resolved by the host.

use crate::addr::TargetPtr;

/// A value handed over for rendering: an address plus the value's
/// declared type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetValue {
    pub addr: TargetPtr,
    pub ty: TypeDesc,
}

impl TargetValue {
    pub fn new(addr: TargetPtr, ty: TypeDesc) -> Self {
        Self { addr, ty }
    }

    pub fn is_null(&self) -> bool {
        self.addr.is_null()
    }
}

/// Shape of a target type.
///
/// Only the shapes the formatter match cares about are modeled: pointers,
/// qualifier and typedef wrappers, and tagged records. Everything else
/// collapses into `Other`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeDesc {
    /// Pointer to a pointee type.
    Pointer(Box<TypeDesc>),
    /// `const`/`volatile` wrapper around a type.
    Qualified(Box<TypeDesc>),
    /// A typedef name and its resolved target.
    Alias(String, Box<TypeDesc>),
    /// A record type carrying a stable tag, e.g. `str` or `cclass`.
    Record(String),
    /// Any other type (scalars, functions, untagged records).
    Other(String),
}

impl TypeDesc {
    /// Shorthand for a pointer to a tagged record.
    pub fn pointer_to(tag: &str) -> Self {
        Self::Pointer(Box::new(Self::Record(tag.to_string())))
    }

    /// Peel qualifiers and typedef aliases off the outermost type.
    pub fn strip(&self) -> &TypeDesc {
        let mut ty = self;
        loop {
            match ty {
                Self::Qualified(inner) | Self::Alias(_, inner) => ty = inner,
                _ => return ty,
            }
        }
    }

    /// Tag of the record this type points at, when the type (after
    /// stripping) is a pointer to a tagged record.
    pub fn pointee_tag(&self) -> Option<&str> {
        match self.strip() {
            Self::Pointer(pointee) => match pointee.strip() {
                Self::Record(tag) => Some(tag),
                _ => None,
            },
            _ => None,
        }
    }
}
