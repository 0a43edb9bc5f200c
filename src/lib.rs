pub mod maven;

pub use maven::RepositoryLayout;
pub use maven::checksums::{checksum_type_of_path, is_subordinate, signature_type_of_path, ChecksumType, SignatureType, SubordinateType};
pub use maven::coordinates::{ArtifactPath, MavenMetadataPath, MavenPath, MetadataLevel, RepoPath, SnapshotArtifactPath};
pub use maven::maven1_parser::parse_maven1_path;
pub use maven::maven2_parser::parse_maven2_path;
