use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Content type served for all checksum sidecar files
pub const CHECKSUM_CONTENT_TYPE: &str = "text/plain";

/// Common behavior of the closed sets of 'subordinate' file kinds, i.e. sidecar files that live
///  next to an artifact (or a maven-metadata.xml) and are named like it plus an extra extension.
///
/// Lookups are linear scans in declaration order, so the first declared type wins if a path
///  happens to match several of them.
pub trait SubordinateType: Copy + Sized + 'static {
    /// all variants, in declaration order
    fn values() -> &'static [Self];

    /// file extension without the leading '.', e.g. "sha1"
    fn extension(self) -> &'static str;
    fn algorithm(self) -> &'static str;
    fn content_type(self) -> &'static str;

    fn path_matches(self, path: &str) -> bool {
        path.strip_suffix(self.extension())
            .map_or(false, |rest| rest.ends_with('.'))
    }

    fn path_of(self, path: &str) -> String {
        format!("{}.{}", path, self.extension())
    }

    fn of_path(path: &str) -> Option<Self> {
        Self::values().iter()
            .copied()
            .find(|t| t.path_matches(path))
    }

    fn for_algorithm(algorithm: &str) -> Option<Self> {
        Self::values().iter()
            .copied()
            .find(|t| t.algorithm() == algorithm)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChecksumType {
    Sha1,
    Sha256,
    Sha512,
    Md5,
}

const CHECKSUM_TYPES: [ChecksumType; 4] = [
    ChecksumType::Sha1,
    ChecksumType::Sha256,
    ChecksumType::Sha512,
    ChecksumType::Md5,
];

impl SubordinateType for ChecksumType {
    fn values() -> &'static [ChecksumType] {
        &CHECKSUM_TYPES
    }

    fn extension(self) -> &'static str {
        match self {
            ChecksumType::Sha1 => "sha1",
            ChecksumType::Sha256 => "sha256",
            ChecksumType::Sha512 => "sha512",
            ChecksumType::Md5 => "md5",
        }
    }

    fn algorithm(self) -> &'static str {
        match self {
            ChecksumType::Sha1 => "SHA-1",
            ChecksumType::Sha256 => "SHA-256",
            ChecksumType::Sha512 => "SHA-512",
            ChecksumType::Md5 => "MD5",
        }
    }

    fn content_type(self) -> &'static str {
        CHECKSUM_CONTENT_TYPE
    }
}

impl Display for ChecksumType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.algorithm())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SignatureType {
    Pgp,
}

const SIGNATURE_TYPES: [SignatureType; 1] = [
    SignatureType::Pgp,
];

impl SubordinateType for SignatureType {
    fn values() -> &'static [SignatureType] {
        &SIGNATURE_TYPES
    }

    fn extension(self) -> &'static str {
        match self {
            SignatureType::Pgp => "asc",
        }
    }

    fn algorithm(self) -> &'static str {
        match self {
            SignatureType::Pgp => "PGP",
        }
    }

    fn content_type(self) -> &'static str {
        match self {
            SignatureType::Pgp => "application/pgp-signature",
        }
    }
}

impl Display for SignatureType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.algorithm())
    }
}

pub fn checksum_type_of_path(path: &str) -> Option<ChecksumType> {
    ChecksumType::of_path(path)
}

pub fn signature_type_of_path(path: &str) -> Option<SignatureType> {
    SignatureType::of_path(path)
}

/// true if the file name is a checksum or signature sidecar of some other file
pub fn is_subordinate(file_name: &str) -> bool {
    ChecksumType::values().iter().any(|t| t.path_matches(file_name))
        || SignatureType::values().iter().any(|t| t.path_matches(file_name))
}
