/// Placeholder signing secret shipped in sample configuration.
pub const DEFAULT_SECRET: &str = "your-secret-key";

/// Symmetric key shared by token signing and verification.
#[derive(Clone)]
pub struct Secret(String);

/// Signing secret that must not be used outside development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeakSecret {
    Empty,
    Default,
}

impl Secret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
    pub fn bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
    pub fn check(&self) -> Result<(), WeakSecret> {
        match self.0.trim() {
            "" => Err(WeakSecret::Empty),
            DEFAULT_SECRET => Err(WeakSecret::Default),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(..)")
    }
}

impl std::fmt::Display for WeakSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "signing secret is empty"),
            Self::Default => write!(f, "signing secret is the built-in default"),
        }
    }
}

impl std::error::Error for WeakSecret {}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn flags_empty_and_default() {
        assert_eq!(Secret::new("").check(), Err(WeakSecret::Empty));
        assert_eq!(Secret::new("   ").check(), Err(WeakSecret::Empty));
        assert_eq!(Secret::new(DEFAULT_SECRET).check(), Err(WeakSecret::Default));
        assert_eq!(Secret::new("s3cr3t-from-vault").check(), Ok(()));
    }
    #[test]
    fn debug_is_redacted() {
        assert_eq!(format!("{:?}", Secret::new("hunter2")), "Secret(..)");
    }
}
