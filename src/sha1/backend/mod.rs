//! Interchangeable implementations of the block transform. Every backend produces exactly the output of `Reference`
//! and differs only in speed and in the CPU features it requires.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::sha1::{Block, ChainingState, Workspace};

pub mod reference;
pub mod unrolled;
pub mod windowed;
#[cfg(all(feature = "sha-ni", target_arch = "x86_64"))]
pub mod x86;

pub use self::reference::Reference;
pub use self::unrolled::Unrolled;
pub use self::windowed::Windowed;
#[cfg(all(feature = "sha-ni", target_arch = "x86_64"))]
pub use self::x86::ShaNi;

/// An implementation of the SHA-1 compression function.
pub trait BlockTransform {
    /// Human readable name of the implementation
    const NAME: &'static str;

    /// Whether the implementation can run on the current CPU.
    fn is_supported() -> bool {
        true
    }

    /// Compress one block into the chaining state. The workspace may contain arbitrary data on entry and its
    /// contents are unspecified on return.
    ///
    /// # Panics
    /// If the backend is not supported on the current CPU.
    fn transform(state: &mut ChainingState, block: &Block, workspace: &mut Workspace);
}

/// Selects one of the implementations of this crate at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Backend {
    Reference,
    Windowed,
    Unrolled,
    ShaNi,
}

impl Backend {
    /// All backends known to this crate, supported or not.
    pub const ALL: [Backend; 4] = [Backend::Reference, Backend::Windowed, Backend::Unrolled, Backend::ShaNi];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Reference => Reference::NAME,
            Backend::Windowed => Windowed::NAME,
            Backend::Unrolled => Unrolled::NAME,
            Backend::ShaNi => "sha-ni",
        }
    }

    pub fn is_supported(self) -> bool {
        match self {
            Backend::Reference => Reference::is_supported(),
            Backend::Windowed => Windowed::is_supported(),
            Backend::Unrolled => Unrolled::is_supported(),
            #[cfg(all(feature = "sha-ni", target_arch = "x86_64"))]
            Backend::ShaNi => ShaNi::is_supported(),
            #[cfg(not(all(feature = "sha-ni", target_arch = "x86_64")))]
            Backend::ShaNi => false,
        }
    }

    /// Iterate over the backends that can run on the current CPU.
    pub fn supported() -> impl Iterator<Item = Backend> {
        IntoIterator::into_iter(Backend::ALL).filter(|backend| backend.is_supported())
    }

    /// Compress one block into the chaining state using this backend.
    ///
    /// # Panics
    /// If the backend is not supported on the current CPU.
    pub fn transform(self, state: &mut ChainingState, block: &Block, workspace: &mut Workspace) {
        match self {
            Backend::Reference => Reference::transform(state, block, workspace),
            Backend::Windowed => Windowed::transform(state, block, workspace),
            Backend::Unrolled => Unrolled::transform(state, block, workspace),
            #[cfg(all(feature = "sha-ni", target_arch = "x86_64"))]
            Backend::ShaNi => ShaNi::transform(state, block, workspace),
            #[cfg(not(all(feature = "sha-ni", target_arch = "x86_64")))]
            Backend::ShaNi => panic!("the sha-ni backend is not available in this build"),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = UnknownBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reference" => Ok(Backend::Reference),
            "windowed" => Ok(Backend::Windowed),
            "unrolled" => Ok(Backend::Unrolled),
            "sha-ni" | "shani" => Ok(Backend::ShaNi),
            _ => Err(UnknownBackendError { name: s.to_owned() }),
        }
    }
}

/// Returned when a backend name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBackendError {
    pub name: String,
}

impl fmt::Display for UnknownBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sha1 backend \"{}\"", self.name)
    }
}

impl Error for UnknownBackendError {}

#[cfg(test)]
mod tests {
    use crate::sha1::tests::{abc_block, empty_message_block};
    use crate::sha1::{raw, INITIAL, SCHEDULE_LENGTH};

    use super::*;

    #[test]
    fn test_backend_names_round_trip() {
        for &backend in Backend::ALL.iter() {
            assert_eq!(backend.name().parse::<Backend>(), Ok(backend));
            assert_eq!(backend.to_string(), backend.name());
        }

        assert_eq!(" SHANI ".parse::<Backend>(), Ok(Backend::ShaNi));
    }

    #[test]
    fn test_unknown_backend() {
        let error = "neon".parse::<Backend>().unwrap_err();
        assert_eq!(error.name, "neon");
        assert_eq!(error.to_string(), "unknown sha1 backend \"neon\"");
    }

    #[test]
    fn test_portable_backends_always_supported() {
        let supported: Vec<Backend> = Backend::supported().collect();
        assert!(supported.contains(&Backend::Reference));
        assert!(supported.contains(&Backend::Windowed));
        assert!(supported.contains(&Backend::Unrolled));
    }

    #[test]
    fn test_supported_backends_known_answers() {
        for backend in Backend::supported() {
            let mut workspace = [0xA5A5_A5A5u32; SCHEDULE_LENGTH];

            let mut state = INITIAL;
            backend.transform(&mut state, &empty_message_block(), &mut workspace);
            assert_eq!(hex::encode(raw(&state)), "da39a3ee5e6b4b0d3255bfef95601890afd80709", "{}", backend);

            let mut state = INITIAL;
            backend.transform(&mut state, &abc_block(), &mut workspace);
            assert_eq!(hex::encode(raw(&state)), "a9993e364706816aba3e25717850c26c9cd0d89d", "{}", backend);
        }
    }
}
