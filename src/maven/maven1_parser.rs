use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::maven::coordinates::*;

// see https://cwiki.apache.org/confluence/display/MAVENOLD/Repository+Layout+-+Final
lazy_static! {
    static ref ARTIFACT_REGEX: Regex = Regex::new(r"^(?P<group>[^/]+)/(?P<types>[^/]+s)/(?P<filename>(?P<artifact>[^0-9]+|[a-z0-9_-]+)-(?P<version>[0-9][^\n\r\x{85}\x{2028}\x{2029}]+)\.(?P<type>[^0-9]+(\.md5|\.sha1)?))$").unwrap();
}

/// Parses a path relative to the root of a layout 1 ("legacy") repository, i.e.
///  `<groupId>/<type>s/<artifactId>-<version>.<extension>`.
///
/// Layout 1 has no classifiers in the path, but the type directories of sources, javadoc and EJB
///  client jars imply one.
pub fn parse_maven1_path(path: &str) -> Option<MavenPath> {
    trace!("parsing layout 1 path {:?}", path);

    if path.starts_with('/') || path.ends_with('/') {
        return None;
    }

    let captures = match ARTIFACT_REGEX.captures(path) {
        Some(c) => c,
        None => {
            trace!("{:?} is not a layout 1 path", path);
            return None;
        }
    };

    let group = captures.name("group")?.as_str();
    let types = captures.name("types")?.as_str();
    let file_name = captures.name("filename")?.as_str();
    let artifact_id = captures.name("artifact")?.as_str();
    let version = captures.name("version")?.as_str();
    let extension = captures.name("type")?.as_str();

    let classifier = classifier_for_type(types, file_name);

    // the regex can not tell version and classifier apart, so the classifier is part of the version
    let version = match classifier {
        Some(classifier) => {
            // counted in characters, not bytes
            let keep = version.chars().count().checked_sub(classifier.len() + 1)?;
            let end = version.char_indices().nth(keep).map_or(version.len(), |(i, _)| i);
            &version[..end]
        }
        None => version,
    };

    let artifact = ArtifactPath::new(path, file_name, group, artifact_id, version, classifier, extension);
    if version.ends_with("SNAPSHOT") {
        trace!("{:?} is a snapshot artifact", path);
        Some(SnapshotArtifactPath::new_layout1(artifact).into())
    }
    else {
        trace!("{:?} is an artifact", path);
        Some(artifact.into())
    }
}

fn classifier_for_type(types: &str, file_name: &str) -> Option<&'static str> {
    match types {
        "java-sources" => Some("sources"),
        "javadocs" => Some("javadoc"),
        "ejbs" if ["client.jar", "client.jar.sha1", "client.jar.md5"].iter().any(|s| file_name.ends_with(s)) => Some("client"),
        _ => None,
    }
}
