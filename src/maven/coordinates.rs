use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::maven::checksums::is_subordinate;

/// Version suffix marking an unresolved snapshot version in layout 2
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Path records are immutable, and equality and hashing only consider the raw path string. Two
///  records for the same path are equal even if they were parsed differently.
macro_rules! path_identity {
    ($t:ty) => {
        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                self.path() == other.path()
            }
        }
        impl Eq for $t {}
        impl Hash for $t {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.path().hash(state);
            }
        }
    };
}

/// A path relative to the repository root, e.g. "org/example/a/1.0/a-1.0.jar". Never starts or
///  ends with '/'.
#[derive(Debug, Clone, Serialize)]
pub struct RepoPath {
    path: String,
    file_name: String,
}
impl RepoPath {
    pub fn new(path: &str, file_name: &str) -> RepoPath {
        RepoPath {
            path: path.to_string(),
            file_name: file_name.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// last segment of the path
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
path_identity!(RepoPath);

#[derive(Debug, Clone, Serialize)]
pub struct ArtifactPath {
    #[serde(flatten)]
    base: RepoPath,
    group_id: String,
    artifact_id: String,
    version: String,
    classifier: Option<String>,
    extension: String,
}
impl ArtifactPath {
    /// The file name is expected to be `<artifact_id>-<version>[-<classifier>].<extension>`.
    pub fn new(path: &str, file_name: &str, group_id: &str, artifact_id: &str, version: &str, classifier: Option<&str>, extension: &str) -> ArtifactPath {
        ArtifactPath {
            base: RepoPath::new(path, file_name),
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            classifier: classifier.map(|c| c.to_string()),
            extension: extension.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        self.base.path()
    }

    pub fn file_name(&self) -> &str {
        self.base.file_name()
    }

    /// dot separated, e.g. "org.example"
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// the version as it appears in the file name
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// everything after the version / classifier, e.g. "jar", "tar.gz" or "jar.sha1"
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn is_subordinate(&self) -> bool {
        is_subordinate(self.file_name())
    }

    /// NB: this only looks at the version string. A record that was parsed as a
    ///  [SnapshotArtifactPath] is always a snapshot, use [MavenPath::is_snapshot_version] to
    ///  take that into account.
    pub fn is_snapshot_version(&self) -> bool {
        self.version.ends_with(SNAPSHOT_SUFFIX)
    }

    fn fmt_fields(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "groupId={}, artifactId={}, version={}", self.group_id, self.artifact_id, self.version)
    }

    fn fmt_classifier_and_extension(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, ", classifier={}, extension={}", self.classifier.as_deref().unwrap_or("null"), self.extension)
    }
}
path_identity!(ArtifactPath);

impl Display for ArtifactPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ArtifactPath{{")?;
        self.fmt_fields(f)?;
        self.fmt_classifier_and_extension(f)?;
        write!(f, "}}")
    }
}

/// A snapshot artifact. In layout 2, [ArtifactPath::version] holds the resolved timestamped
///  version (e.g. "1.0-20200101.120000-3") while `base_version` is the directory name
///  ("1.0-SNAPSHOT"). Layout 1 has no timestamped snapshots, so both versions are the same there.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotArtifactPath {
    #[serde(flatten)]
    artifact: ArtifactPath,
    base_version: String,
    timestamp: Option<String>,
    build: Option<String>,
}
impl SnapshotArtifactPath {
    pub fn new(artifact: ArtifactPath, base_version: &str, timestamp: &str, build: &str) -> SnapshotArtifactPath {
        SnapshotArtifactPath {
            artifact,
            base_version: base_version.to_string(),
            timestamp: Some(timestamp.to_string()),
            build: Some(build.to_string()),
        }
    }

    pub fn new_layout1(artifact: ArtifactPath) -> SnapshotArtifactPath {
        let base_version = artifact.version.clone();
        SnapshotArtifactPath {
            artifact,
            base_version,
            timestamp: None,
            build: None,
        }
    }

    pub fn artifact(&self) -> &ArtifactPath {
        &self.artifact
    }

    pub fn path(&self) -> &str {
        self.artifact.path()
    }

    pub fn file_name(&self) -> &str {
        self.artifact.file_name()
    }

    pub fn base_version(&self) -> &str {
        &self.base_version
    }

    /// e.g. "20200101.120000"
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }
}
path_identity!(SnapshotArtifactPath);

impl Display for SnapshotArtifactPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SnapshotArtifactPath{{")?;
        self.artifact.fmt_fields(f)?;
        write!(f, ", baseVersion={}, timestamp={}, build={}",
               self.base_version,
               self.timestamp.as_deref().unwrap_or("null"),
               self.build.as_deref().unwrap_or("null"),
        )?;
        self.artifact.fmt_classifier_and_extension(f)?;
        write!(f, "}}")
    }
}

/// How much of the coordinates a maven-metadata.xml path addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetadataLevel {
    Group,
    Artifact,
    Version,
}

/// maven-metadata.xml or one of its checksum / signature files
#[derive(Debug, Clone, Serialize)]
pub struct MavenMetadataPath {
    #[serde(flatten)]
    base: RepoPath,
    /// everything before the file name
    prefix: String,
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    subordinate_type: Option<String>,
}
impl MavenMetadataPath {
    pub fn for_group(path: &str, file_name: &str, prefix: &str, group_id: &str, subordinate_type: Option<&str>) -> MavenMetadataPath {
        Self::create(path, file_name, prefix, Some(group_id), None, None, subordinate_type)
    }

    pub fn for_artifact(path: &str, file_name: &str, prefix: &str, group_id: &str, artifact_id: &str, subordinate_type: Option<&str>) -> MavenMetadataPath {
        Self::create(path, file_name, prefix, Some(group_id), Some(artifact_id), None, subordinate_type)
    }

    pub fn for_version(path: &str, file_name: &str, prefix: &str, group_id: &str, artifact_id: &str, version: &str, subordinate_type: Option<&str>) -> MavenMetadataPath {
        Self::create(path, file_name, prefix, Some(group_id), Some(artifact_id), Some(version), subordinate_type)
    }

    // private so that only the three well-formed combinations can be built
    fn create(path: &str, file_name: &str, prefix: &str, group_id: Option<&str>, artifact_id: Option<&str>, version: Option<&str>, subordinate_type: Option<&str>) -> MavenMetadataPath {
        MavenMetadataPath {
            base: RepoPath::new(path, file_name),
            prefix: prefix.to_string(),
            group_id: group_id.map(|s| s.to_string()),
            artifact_id: artifact_id.map(|s| s.to_string()),
            version: version.map(|s| s.to_string()),
            subordinate_type: subordinate_type.map(|s| s.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        self.base.path()
    }

    pub fn file_name(&self) -> &str {
        self.base.file_name()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// e.g. "sha1" for "maven-metadata.xml.sha1", None for the metadata document itself
    pub fn subordinate_type(&self) -> Option<&str> {
        self.subordinate_type.as_deref()
    }

    pub fn is_subordinate(&self) -> bool {
        self.subordinate_type.is_some()
    }

    pub fn level(&self) -> MetadataLevel {
        match (&self.artifact_id, &self.version) {
            (Some(_), Some(_)) => MetadataLevel::Version,
            (Some(_), None) => MetadataLevel::Artifact,
            _ => MetadataLevel::Group,
        }
    }
}
path_identity!(MavenMetadataPath);

impl Display for MavenMetadataPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let or_null = |s: &Option<String>| s.clone().unwrap_or_else(|| "null".to_string());
        write!(f, "MavenMetadataPath{{prefix={}, groupId={}, artifactId={}, version={}, subordinateType={}}}",
               self.prefix,
               or_null(&self.group_id),
               or_null(&self.artifact_id),
               or_null(&self.version),
               or_null(&self.subordinate_type),
        )
    }
}

/// Everything a path parser can produce
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MavenPath {
    Plain(RepoPath),
    Artifact(ArtifactPath),
    SnapshotArtifact(SnapshotArtifactPath),
    Metadata(MavenMetadataPath),
}
impl MavenPath {
    pub fn path(&self) -> &str {
        match self {
            MavenPath::Plain(p) => p.path(),
            MavenPath::Artifact(p) => p.path(),
            MavenPath::SnapshotArtifact(p) => p.path(),
            MavenPath::Metadata(p) => p.path(),
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            MavenPath::Plain(p) => p.file_name(),
            MavenPath::Artifact(p) => p.file_name(),
            MavenPath::SnapshotArtifact(p) => p.file_name(),
            MavenPath::Metadata(p) => p.file_name(),
        }
    }

    pub fn is_subordinate(&self) -> bool {
        match self {
            MavenPath::Artifact(p) => p.is_subordinate(),
            MavenPath::SnapshotArtifact(p) => p.artifact().is_subordinate(),
            MavenPath::Metadata(p) => p.is_subordinate(),
            MavenPath::Plain(_) => false,
        }
    }

    /// A snapshot record is always a snapshot, a plain artifact is one if its version string ends
    ///  in "-SNAPSHOT". Anything that is no artifact is not.
    pub fn is_snapshot_version(&self) -> bool {
        match self {
            MavenPath::SnapshotArtifact(_) => true,
            MavenPath::Artifact(p) => p.is_snapshot_version(),
            MavenPath::Metadata(_) | MavenPath::Plain(_) => false,
        }
    }

    /// the artifact coordinates, for snapshot records as well
    pub fn as_artifact(&self) -> Option<&ArtifactPath> {
        match self {
            MavenPath::Artifact(p) => Some(p),
            MavenPath::SnapshotArtifact(p) => Some(p.artifact()),
            _ => None,
        }
    }

    pub fn as_snapshot_artifact(&self) -> Option<&SnapshotArtifactPath> {
        match self {
            MavenPath::SnapshotArtifact(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_metadata(&self) -> Option<&MavenMetadataPath> {
        match self {
            MavenPath::Metadata(p) => Some(p),
            _ => None,
        }
    }
}
path_identity!(MavenPath);

impl Display for MavenPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MavenPath::Plain(p) => write!(f, "MavenPath{{path={}}}", p.path()),
            MavenPath::Artifact(p) => p.fmt(f),
            MavenPath::SnapshotArtifact(p) => p.fmt(f),
            MavenPath::Metadata(p) => p.fmt(f),
        }
    }
}

impl From<RepoPath> for MavenPath {
    fn from(value: RepoPath) -> Self {
        MavenPath::Plain(value)
    }
}

impl From<ArtifactPath> for MavenPath {
    fn from(value: ArtifactPath) -> Self {
        MavenPath::Artifact(value)
    }
}

impl From<SnapshotArtifactPath> for MavenPath {
    fn from(value: SnapshotArtifactPath) -> Self {
        MavenPath::SnapshotArtifact(value)
    }
}

impl From<MavenMetadataPath> for MavenPath {
    fn from(value: MavenMetadataPath) -> Self {
        MavenPath::Metadata(value)
    }
}


#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use rstest::*;
    use super::*;

    fn artifact(version: &str, file_name: &str) -> ArtifactPath {
        ArtifactPath::new(&format!("g/a/{}/{}", version, file_name), file_name, "g", "a", version, None, "jar")
    }

    #[test]
    fn test_equality_only_considers_path() {
        let a = ArtifactPath::new("g/a/1/a-1.jar", "a-1.jar", "g", "a", "1", None, "jar");
        let b = ArtifactPath::new("g/a/1/a-1.jar", "other", "x", "y", "2", Some("c"), "zip");
        let c = ArtifactPath::new("g/a/1/a-1.pom", "a-1.pom", "g", "a", "1", None, "pom");

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<MavenPath> = vec![a.into(), b.into(), c.into()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_equality_across_variants() {
        let artifact = artifact("1.0-SNAPSHOT", "a-1.0-SNAPSHOT.jar");
        let snapshot = SnapshotArtifactPath::new_layout1(artifact.clone());
        assert_eq!(MavenPath::from(artifact), MavenPath::from(snapshot));
    }

    #[rstest]
    #[case::release(artifact("1.0", "a-1.0.jar").into(), false)]
    #[case::snapshot_version_string(artifact("1.0-SNAPSHOT", "a-1.0-SNAPSHOT.jar").into(), true)]
    #[case::snapshot_without_dash(artifact("1.0SNAPSHOT", "a-1.0SNAPSHOT.jar").into(), false)]
    #[case::snapshot_lowercase(artifact("1.0-snapshot", "a-1.0-snapshot.jar").into(), false)]
    #[case::snapshot_variant_without_dash(SnapshotArtifactPath::new_layout1(artifact("1.0SNAPSHOT", "a-1.0SNAPSHOT.jar")).into(), true)]
    #[case::snapshot_variant(SnapshotArtifactPath::new(artifact("1.0-20200101.120000-3", "a-1.0-20200101.120000-3.jar"), "1.0-SNAPSHOT", "20200101.120000", "3").into(), true)]
    #[case::metadata(MavenMetadataPath::for_version("g/a/1.0-SNAPSHOT/maven-metadata.xml", "maven-metadata.xml", "g/a/1.0-SNAPSHOT", "g", "a", "1.0-SNAPSHOT", None).into(), false)]
    #[case::plain(RepoPath::new("x-SNAPSHOT", "x-SNAPSHOT").into(), false)]
    fn test_is_snapshot_version(#[case] path: MavenPath, #[case] expected: bool) {
        assert_eq!(path.is_snapshot_version(), expected);
    }

    #[rstest]
    #[case::artifact(artifact("1.0", "a-1.0.jar").into(), false)]
    #[case::artifact_sha1(artifact("1.0", "a-1.0.jar.sha1").into(), true)]
    #[case::artifact_asc(artifact("1.0", "a-1.0.jar.asc").into(), true)]
    #[case::snapshot_md5(SnapshotArtifactPath::new_layout1(artifact("1.0SNAPSHOT", "a-1.0SNAPSHOT.jar.md5")).into(), true)]
    #[case::metadata(MavenMetadataPath::for_group("g/maven-metadata.xml", "maven-metadata.xml", "g", "g", None).into(), false)]
    #[case::metadata_sha1(MavenMetadataPath::for_group("g/maven-metadata.xml.sha1", "maven-metadata.xml.sha1", "g", "g", Some("sha1")).into(), true)]
    #[case::plain_sha1(RepoPath::new("x/y.sha1", "y.sha1").into(), false)]
    fn test_is_subordinate(#[case] path: MavenPath, #[case] expected: bool) {
        assert_eq!(path.is_subordinate(), expected);
    }

    #[test]
    fn test_layout1_snapshot_has_no_timestamp() {
        let snapshot = SnapshotArtifactPath::new_layout1(artifact("1.0-SNAPSHOT", "a-1.0-SNAPSHOT.jar"));
        assert_eq!(snapshot.base_version(), "1.0-SNAPSHOT");
        assert_eq!(snapshot.artifact().version(), "1.0-SNAPSHOT");
        assert_eq!(snapshot.timestamp(), None);
        assert_eq!(snapshot.build(), None);
    }

    #[test]
    fn test_metadata_level() {
        let group = MavenMetadataPath::for_group("g/maven-metadata.xml", "maven-metadata.xml", "g", "g", None);
        let artifact = MavenMetadataPath::for_artifact("g/a/maven-metadata.xml", "maven-metadata.xml", "g/a", "g", "a", None);
        let version = MavenMetadataPath::for_version("g/a/1-SNAPSHOT/maven-metadata.xml", "maven-metadata.xml", "g/a/1-SNAPSHOT", "g", "a", "1-SNAPSHOT", None);

        assert_eq!(group.level(), MetadataLevel::Group);
        assert_eq!(artifact.level(), MetadataLevel::Artifact);
        assert_eq!(version.level(), MetadataLevel::Version);
    }

    #[test]
    fn test_display() {
        let a = ArtifactPath::new("g/a/1/a-1-src.tar.gz", "a-1-src.tar.gz", "g", "a", "1", Some("src"), "tar.gz");
        assert_eq!(a.to_string(), "ArtifactPath{groupId=g, artifactId=a, version=1, classifier=src, extension=tar.gz}");

        let m = MavenMetadataPath::for_artifact("g/a/maven-metadata.xml", "maven-metadata.xml", "g/a", "g", "a", None);
        assert_eq!(MavenPath::from(m).to_string(), "MavenMetadataPath{prefix=g/a, groupId=g, artifactId=a, version=null, subordinateType=null}");
    }

    #[test]
    fn test_serialize_tagged() {
        let a = ArtifactPath::new("g/a/1/a-1.jar", "a-1.jar", "g", "a", "1", None, "jar");
        let json = serde_json::to_value(MavenPath::from(a)).unwrap();

        assert_eq!(json["kind"], "artifact");
        assert_eq!(json["path"], "g/a/1/a-1.jar");
        assert_eq!(json["file_name"], "a-1.jar");
        assert_eq!(json["group_id"], "g");
        assert_eq!(json["classifier"], serde_json::Value::Null);
    }
}
