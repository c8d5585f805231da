use std::fmt::Display;

/// The primitive types of the language, plus the `Unknown` sentinel the
/// analyzer produces when an expression cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
    Double,
    String,
    Bool,
    Void,
    Unknown,
}

impl Type {
    pub const ALL: [Type; 7] = [
        Type::Int,
        Type::Float,
        Type::Double,
        Type::String,
        Type::Bool,
        Type::Void,
        Type::Unknown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Float => "float",
            Type::Double => "double",
            Type::String => "string",
            Type::Bool => "bool",
            Type::Void => "void",
            Type::Unknown => "unknown",
        }
    }

    pub fn is_void(&self) -> bool {
        *self == Type::Void
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether a value of type `source` may be used where `target` is expected.
///
/// Asymmetric: numeric values widen (`int` -> `float` -> `double`) and `bool`
/// converts to `int`, but nothing narrows and `string` only matches itself.
/// An `Unknown` source is always accepted, since its cause has already been
/// reported.
pub fn compatible(target: Type, source: Type) -> bool {
    match (target, source) {
        (target, source) if target == source => true,
        (_, Type::Unknown) => true,
        (Type::String, _) | (_, Type::String) => false,
        (Type::Double, Type::Float | Type::Int) => true,
        (Type::Float, Type::Int) => true,
        (Type::Int, Type::Bool) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{compatible, Type};

    #[test]
    fn test_every_type_is_compatible_with_itself() {
        for ty in Type::ALL {
            assert!(compatible(ty, ty), "{} should accept itself", ty);
        }
    }

    #[test]
    fn test_unknown_source_is_always_accepted() {
        for ty in Type::ALL {
            assert!(compatible(ty, Type::Unknown));
        }
        assert!(!compatible(Type::Unknown, Type::Int));
    }

    #[test]
    fn test_strings_only_match_strings() {
        assert!(!compatible(Type::String, Type::Int));
        assert!(!compatible(Type::Int, Type::String));
        assert!(!compatible(Type::Double, Type::String));
        assert!(!compatible(Type::String, Type::Bool));
    }

    #[test]
    fn test_numeric_widening() {
        assert!(compatible(Type::Double, Type::Int));
        assert!(compatible(Type::Double, Type::Float));
        assert!(compatible(Type::Float, Type::Int));
        assert!(compatible(Type::Int, Type::Bool));
    }

    #[test]
    fn test_no_narrowing() {
        assert!(!compatible(Type::Int, Type::Float));
        assert!(!compatible(Type::Int, Type::Double));
        assert!(!compatible(Type::Float, Type::Double));
        assert!(!compatible(Type::Bool, Type::Int));
        assert!(!compatible(Type::Float, Type::Bool));
        assert!(!compatible(Type::Void, Type::Int));
    }

    #[test]
    fn test_type_display() {
        assert_eq!(Type::Double.to_string(), "double");
        assert_eq!(Type::Unknown.to_string(), "unknown");
    }
}
