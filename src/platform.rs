//! Host queries: platform family and home directory
//!
//! The descriptor writer only talks to the host through [`Host`], so tests can
//! swap in a fake that reports any platform and points home at a temp dir.

use std::fmt;
use std::path::PathBuf;

/// Operating system family the process is running on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformFamily {
    MacOs,
    Linux,
    Windows,
    Other(String),
}

impl PlatformFamily {
    /// Map an `std::env::consts::OS` value to a family
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MacOs => write!(f, "macOS"),
            Self::Linux => write!(f, "Linux"),
            Self::Windows => write!(f, "Windows"),
            Self::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Read-only queries against the host OS
pub trait Host {
    /// Family of the running operating system
    fn platform_family(&self) -> PlatformFamily;

    /// Current user's home directory, if it can be determined
    fn home_dir(&self) -> Option<PathBuf>;
}

/// The real host, backed by `std::env::consts` and `dirs`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl Host for SystemHost {
    fn platform_family(&self) -> PlatformFamily {
        PlatformFamily::from_os(std::env::consts::OS)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os() {
        assert_eq!(PlatformFamily::from_os("macos"), PlatformFamily::MacOs);
        assert_eq!(PlatformFamily::from_os("linux"), PlatformFamily::Linux);
        assert_eq!(PlatformFamily::from_os("windows"), PlatformFamily::Windows);
        assert_eq!(
            PlatformFamily::from_os("freebsd"),
            PlatformFamily::Other("freebsd".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(PlatformFamily::MacOs.to_string(), "macOS");
        assert_eq!(PlatformFamily::Other("haiku".into()).to_string(), "haiku");
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_system_host_is_macos() {
        assert_eq!(SystemHost.platform_family(), PlatformFamily::MacOs);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_system_host_is_linux() {
        assert_eq!(SystemHost.platform_family(), PlatformFamily::Linux);
    }
}
