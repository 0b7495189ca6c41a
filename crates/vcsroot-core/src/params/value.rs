use crate::error::{Result, VcsRootError};

/// A type that can be stored as a string parameter.
///
/// `encode` returning `None` means the parameter should be removed from the
/// store rather than written.
pub trait ParamValue: Sized {
    /// Encodes the value into its stored text.
    fn encode(&self) -> Option<String>;

    /// Decodes the text stored under `key`.
    fn decode(key: &str, raw: &str) -> Result<Self>;
}

impl ParamValue for String {
    fn encode(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.clone())
        }
    }

    fn decode(_key: &str, raw: &str) -> Result<Self> {
        Ok(raw.to_string())
    }
}

impl ParamValue for bool {
    fn encode(&self) -> Option<String> {
        Some(self.to_string())
    }

    /// Only a case-insensitive `"true"` decodes to `true`.
    fn decode(_key: &str, raw: &str) -> Result<Self> {
        Ok(raw.eq_ignore_ascii_case("true"))
    }
}

/// A closed enumeration stored by constant name.
///
/// # Example
///
/// ```
/// use vcsroot_core::ParamEnum;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Policy {
///     Never,
///     Always,
/// }
///
/// impl ParamEnum for Policy {
///     const VARIANTS: &'static [Self] = &[Policy::Never, Policy::Always];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Policy::Never => "NEVER",
///             Policy::Always => "ALWAYS",
///         }
///     }
/// }
///
/// assert_eq!(Policy::from_name("ALWAYS"), Some(Policy::Always));
/// assert_eq!(Policy::from_name("always"), None);
/// ```
pub trait ParamEnum: Copy + 'static {
    /// Every constant, in declaration order.
    const VARIANTS: &'static [Self];

    /// The canonical constant name written to the store.
    fn name(&self) -> &'static str;

    /// Looks up a constant by exact name.
    fn from_name(raw: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.name() == raw)
    }

    /// All constant names, in declaration order.
    fn names() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|v| v.name()).collect()
    }
}

impl<E: ParamEnum> ParamValue for E {
    fn encode(&self) -> Option<String> {
        Some(self.name().to_string())
    }

    fn decode(key: &str, raw: &str) -> Result<Self> {
        E::from_name(raw).ok_or_else(|| VcsRootError::unknown_variant(key, raw, &E::names()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Mode {
        Fast,
        Slow,
    }

    impl ParamEnum for Mode {
        const VARIANTS: &'static [Self] = &[Mode::Fast, Mode::Slow];

        fn name(&self) -> &'static str {
            match self {
                Mode::Fast => "FAST",
                Mode::Slow => "SLOW",
            }
        }
    }

    #[test]
    fn test_string_codec() {
        assert_eq!("main".to_string().encode().as_deref(), Some("main"));
        assert_eq!(String::new().encode(), None);
        assert_eq!(String::decode("branch", "main").unwrap(), "main");
    }

    #[test]
    fn test_bool_codec() {
        assert_eq!(true.encode().as_deref(), Some("true"));
        assert_eq!(false.encode().as_deref(), Some("false"));

        assert!(bool::decode("k", "true").unwrap());
        assert!(bool::decode("k", "TRUE").unwrap());
        assert!(!bool::decode("k", "false").unwrap());
        assert!(!bool::decode("k", "yes").unwrap());
    }

    #[test]
    fn test_enum_codec() {
        assert_eq!(Mode::Slow.encode().as_deref(), Some("SLOW"));
        assert_eq!(Mode::decode("mode", "FAST").unwrap(), Mode::Fast);
        assert_eq!(Mode::names(), vec!["FAST", "SLOW"]);
    }

    #[test]
    fn test_enum_decode_requires_exact_name() {
        let err = Mode::decode("mode", "fast").unwrap_err();

        match err {
            VcsRootError::UnknownVariant {
                key,
                value,
                expected,
            } => {
                assert_eq!(key, "mode");
                assert_eq!(value, "fast");
                assert_eq!(expected, vec!["FAST", "SLOW"]);
            },
            other => panic!("Expected UnknownVariant, got {other:?}"),
        }
    }
}
