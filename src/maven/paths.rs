use crate::maven::coordinates::*;
use crate::maven::maven2_parser::metadata_for_prefix;

pub const MAVEN_METADATA_FILENAME: &str = "maven-metadata.xml";
pub const TYPE_POM: &str = "pom";

// Layout 2 paths for given coordinates. The group id's dots become directories.

/// `<group>/<artifact>/<version>`
pub fn artifact_base_path(group_id: &str, artifact_id: &str, version: &str) -> String {
    format!("{}/{}/{}", group_id.replace('.', "/"), artifact_id, version)
}

/// `<group>/<artifact>/<version>/<artifact>-<version>`, i.e. the path without classifier and
///  extension
pub fn artifact_path_prefix(group_id: &str, artifact_id: &str, version: &str) -> String {
    format!("{}/{}-{}", artifact_base_path(group_id, artifact_id, version), artifact_id, version)
}

/// `<artifact>-<version>[-<classifier>].<extension>`
pub fn artifact_filename(artifact_id: &str, version: &str, classifier: Option<&str>, extension: &str) -> String {
    let classifier_string = match classifier {
        None => "".to_string(),
        Some(c) => format!("-{}", c),
    };

    format!("{}-{}{}.{}", artifact_id, version, classifier_string, extension)
}

pub fn artifact_path(group_id: &str, artifact_id: &str, version: &str, classifier: Option<&str>, extension: &str) -> String {
    format!(
        "{}/{}",
        artifact_base_path(group_id, artifact_id, version),
        artifact_filename(artifact_id, version, classifier, extension),
    )
}

pub fn pom_path(group_id: &str, artifact_id: &str, version: &str) -> String {
    artifact_path(group_id, artifact_id, version, None, TYPE_POM)
}

fn metadata_filename(subordinate_type: Option<&str>) -> String {
    match subordinate_type {
        None => MAVEN_METADATA_FILENAME.to_string(),
        Some(t) => format!("{}.{}", MAVEN_METADATA_FILENAME, t),
    }
}

fn metadata_prefix(group_id: &str, artifact_id: Option<&str>) -> String {
    let group_path = group_id.replace('.', "/");
    match artifact_id {
        None => group_path,
        Some(a) => format!("{}/{}", group_path, a),
    }
}

/// `<group>[/<artifact>]/maven-metadata.xml[.<subordinate_type>]`
pub fn metadata_path(group_id: &str, artifact_id: Option<&str>, subordinate_type: Option<&str>) -> String {
    format!("{}/{}", metadata_prefix(group_id, artifact_id), metadata_filename(subordinate_type))
}

pub fn create_artifact(group_id: &str, artifact_id: &str, version: &str, classifier: Option<&str>, extension: &str) -> ArtifactPath {
    let file_name = artifact_filename(artifact_id, version, classifier, extension);
    let path = format!("{}/{}", artifact_base_path(group_id, artifact_id, version), file_name);

    ArtifactPath::new(&path, &file_name, group_id, artifact_id, version, classifier, extension)
}

/// A timestamped snapshot: the file lives in the `base_version` directory (e.g. "1.0-SNAPSHOT")
///  and is named after the resolved version (e.g. "1.0-20200101.120000-3").
///
/// Returns None if `base_version` does not end in "-SNAPSHOT".
pub fn create_snapshot_artifact(group_id: &str, artifact_id: &str, base_version: &str, timestamp: &str, build: &str, classifier: Option<&str>, extension: &str) -> Option<SnapshotArtifactPath> {
    let version_prefix = base_version.strip_suffix(SNAPSHOT_SUFFIX)?;
    let version = format!("{}-{}-{}", version_prefix, timestamp, build);

    let file_name = artifact_filename(artifact_id, &version, classifier, extension);
    let path = format!("{}/{}", artifact_base_path(group_id, artifact_id, base_version), file_name);

    let artifact = ArtifactPath::new(&path, &file_name, group_id, artifact_id, &version, classifier, extension);
    Some(SnapshotArtifactPath::new(artifact, base_version, timestamp, build))
}

/// group level metadata if `artifact_id` is None, artifact level metadata otherwise
pub fn create_maven_metadata(group_id: &str, artifact_id: Option<&str>, subordinate_type: Option<&str>) -> MavenMetadataPath {
    let prefix = metadata_prefix(group_id, artifact_id);
    let file_name = metadata_filename(subordinate_type);
    let path = format!("{}/{}", prefix, file_name);

    match artifact_id {
        None => MavenMetadataPath::for_group(&path, &file_name, &prefix, group_id, subordinate_type),
        Some(a) => MavenMetadataPath::for_artifact(&path, &file_name, &prefix, group_id, a, subordinate_type),
    }
}

/// Metadata for an arbitrary directory. Coordinates are guessed from the prefix the same way
///  the layout 2 parser guesses them.
pub fn create_maven_metadata_for_prefix(prefix: &str, subordinate_type: Option<&str>) -> MavenMetadataPath {
    let file_name = metadata_filename(subordinate_type);
    let path = format!("{}/{}", prefix, file_name);

    metadata_for_prefix(&path, &file_name, prefix, subordinate_type)
}
