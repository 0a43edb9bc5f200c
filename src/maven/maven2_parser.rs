use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::maven::coordinates::*;

// NB: '.' in the layout patterns never matches a line terminator (\n, \r, \u{85}, \u{2028} or
//  \u{2029}), so the patterns spell that out instead of relying on the regex crate's '.'
lazy_static! {
    static ref METADATA_REGEX: Regex = Regex::new(r"^(?P<prefix>[^\n\r\x{85}\x{2028}\x{2029}]+)/(?P<filename>maven-metadata\.xml(\.(?P<subtype>[^\n\r\x{85}\x{2028}\x{2029}]+))?)$").unwrap();

    /// what follows `<artifactId>-<version>` in a release file name
    static ref ARTIFACT_SUFFIX_REGEX: Regex = Regex::new(r"^(-(?P<classifier>[^.]+))?\.(?P<extension>[^\n\r\x{85}\x{2028}\x{2029}]+)$").unwrap();

    /// what follows `<artifactId>-<versionPrefix>-` in a timestamped snapshot file name
    static ref SNAPSHOT_SUFFIX_REGEX: Regex = Regex::new(r"^(?P<timestamp>[0-9]+\.[0-9]+)-(?P<build>[0-9]+)(-(?P<classifier>[^.]+))?\.(?P<extension>[^\n\r\x{85}\x{2028}\x{2029}]+)$").unwrap();
}

/// Parses a path relative to the root of a layout 2 ("default") repository.
///
/// Three shapes are tried in turn: maven-metadata.xml (and subordinates), release artifacts
///  and timestamped snapshot artifacts. The file name of an artifact must repeat the artifact id
///  and version from its directories, e.g. "org/example/a/1.0/a-1.0-sources.jar".
pub fn parse_maven2_path(path: &str) -> Option<MavenPath> {
    trace!("parsing layout 2 path {:?}", path);

    if path.starts_with('/') || path.ends_with('/') {
        return None;
    }

    if let Some(metadata) = parse_metadata(path) {
        trace!("{:?} is maven metadata", path);
        return Some(metadata.into());
    }
    if let Some(artifact) = directory_candidates(path).find_map(|c| parse_artifact(path, &c)) {
        trace!("{:?} is an artifact", path);
        return Some(artifact.into());
    }
    if let Some(snapshot) = directory_candidates(path).find_map(|c| parse_snapshot_artifact(path, &c)) {
        trace!("{:?} is a snapshot artifact", path);
        return Some(snapshot.into());
    }

    trace!("{:?} is not a layout 2 path", path);
    None
}

fn parse_metadata(path: &str) -> Option<MavenMetadataPath> {
    let captures = METADATA_REGEX.captures(path)?;
    let prefix = captures.name("prefix")?.as_str();
    let file_name = captures.name("filename")?.as_str();
    let subordinate_type = captures.name("subtype").map(|m| m.as_str());

    Some(metadata_for_prefix(path, file_name, prefix, subordinate_type))
}

/// Guesses from the last segment of the prefix whether a metadata file belongs to a group, an
///  artifact or a (snapshot) version.
///
/// NB: This is a heuristic and it is ambiguous: a group whose last segment contains a '.' or '-'
///  looks exactly like an artifact.
pub(crate) fn metadata_for_prefix(path: &str, file_name: &str, prefix: &str, subordinate_type: Option<&str>) -> MavenMetadataPath {
    let mut segments: Vec<&str> = prefix.split('/').collect();
    // trailing empty segments do not count
    while segments.len() > 1 && segments.last().map_or(false, |s| s.is_empty()) {
        segments.pop();
    }
    let last_segment = segments.last().copied().unwrap_or(prefix);

    if segments.len() > 2 && last_segment.ends_with("SNAPSHOT") {
        let artifact_id = segments[segments.len() - 2];
        let group_id = segments[..segments.len() - 2].join(".");
        MavenMetadataPath::for_version(path, file_name, prefix, &group_id, artifact_id, last_segment, subordinate_type)
    }
    else if segments.len() > 1 && (last_segment.contains('.') || last_segment.contains('-')) {
        let group_id = segments[..segments.len() - 1].join(".");
        MavenMetadataPath::for_artifact(path, file_name, prefix, &group_id, last_segment, subordinate_type)
    }
    else {
        MavenMetadataPath::for_group(path, file_name, prefix, &prefix.replace('/', "."), subordinate_type)
    }
}

/// A split of a path into `<group>/<artifact>/<version>/<rest>`.
#[derive(Debug, Eq, PartialEq)]
struct DirectoryCandidate<'a> {
    group: &'a str,
    artifact_id: &'a str,
    version: &'a str,
    /// usually the file name, but may contain '/' if the path is deeper than expected
    rest: &'a str,
}

/// All ways of splitting the path into group, artifact and version directories, longest group
///  first. Artifact and version are single segments, the group may span any number of segments.
fn directory_candidates(path: &str) -> impl Iterator<Item = DirectoryCandidate<'_>> {
    path.match_indices('/')
        .rev()
        .filter_map(move |(idx, _)| {
            if idx == 0 {
                return None;
            }

            let (artifact_id, remainder) = path[idx + 1..].split_once('/')?;
            let (version, rest) = remainder.split_once('/')?;
            let group = &path[..idx];
            if artifact_id.is_empty() || version.is_empty() || rest.is_empty() || group.contains(is_line_terminator) {
                return None;
            }

            Some(DirectoryCandidate {
                group,
                artifact_id,
                version,
                rest,
            })
        })
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// `<artifactId>-<version>[-<classifier>].<extension>`
fn parse_artifact(path: &str, candidate: &DirectoryCandidate) -> Option<ArtifactPath> {
    let suffix = candidate.rest
        .strip_prefix(candidate.artifact_id)?
        .strip_prefix('-')?
        .strip_prefix(candidate.version)?;

    let captures = ARTIFACT_SUFFIX_REGEX.captures(suffix)?;
    let classifier = captures.name("classifier").map(|m| m.as_str());
    let extension = captures.name("extension")?.as_str();

    Some(ArtifactPath::new(
        path,
        candidate.rest,
        &candidate.group.replace('/', "."),
        candidate.artifact_id,
        candidate.version,
        classifier,
        extension,
    ))
}

/// `<artifactId>-<versionPrefix>-<timestamp>-<build>[-<classifier>].<extension>` in a directory
///  named `<versionPrefix>-SNAPSHOT`
fn parse_snapshot_artifact(path: &str, candidate: &DirectoryCandidate) -> Option<SnapshotArtifactPath> {
    let version_prefix = strip_snapshot_suffix(candidate.version)?;

    let suffix = candidate.rest
        .strip_prefix(candidate.artifact_id)?
        .strip_prefix('-')?
        .strip_prefix(version_prefix)?
        .strip_prefix('-')?;

    let captures = SNAPSHOT_SUFFIX_REGEX.captures(suffix)?;
    let timestamp = captures.name("timestamp")?.as_str();
    let build = captures.name("build")?.as_str();
    let classifier = captures.name("classifier").map(|m| m.as_str());
    let extension = captures.name("extension")?.as_str();

    let version = format!("{}-{}-{}", version_prefix, timestamp, build);

    let artifact = ArtifactPath::new(
        path,
        candidate.rest,
        &candidate.group.replace('/', "."),
        candidate.artifact_id,
        &version,
        classifier,
        extension,
    );
    Some(SnapshotArtifactPath::new(artifact, candidate.version, timestamp, build))
}

/// "1.0-SNAPSHOT" -> "1.0", ignoring the case of "SNAPSHOT"
fn strip_snapshot_suffix(version: &str) -> Option<&str> {
    let split = version.len().checked_sub(SNAPSHOT_SUFFIX.len())?;
    let (prefix, suffix) = (version.get(..split)?, version.get(split..)?);
    if prefix.is_empty() || !suffix.eq_ignore_ascii_case(SNAPSHOT_SUFFIX) {
        return None;
    }
    Some(prefix)
}
