use proptest::prelude::*;
use rstest::*;

use maven_paths::maven::paths::{artifact_path, create_artifact, metadata_path, pom_path};
use maven_paths::{checksum_type_of_path, is_subordinate, parse_maven1_path, parse_maven2_path, ChecksumType, MavenPath, RepositoryLayout};

#[test]
fn test_subordinate_file_names() {
    assert!(is_subordinate("foo.jar.sha1"));
    assert!(is_subordinate("foo.jar.sha256"));
    assert!(is_subordinate("foo.jar.asc"));
    assert!(!is_subordinate("foo.jar"));
}

#[test]
fn test_checksum_type_of_path() {
    assert_eq!(checksum_type_of_path("x.pom.md5"), Some(ChecksumType::Md5));
    assert_eq!(checksum_type_of_path("x.pom"), None);
}

#[test]
fn test_maven1_artifact() {
    let parsed = parse_maven1_path("commons-lang/jars/commons-lang-2.1.jar").unwrap();
    let artifact = match &parsed {
        MavenPath::Artifact(a) => a,
        other => panic!("expected an artifact, was {:?}", other),
    };

    assert_eq!(artifact.group_id(), "commons-lang");
    assert_eq!(artifact.artifact_id(), "commons-lang");
    assert_eq!(artifact.version(), "2.1");
    assert_eq!(artifact.classifier(), None);
    assert_eq!(artifact.extension(), "jar");
}

#[test]
fn test_maven1_classifier_is_stripped_from_version() {
    let parsed = parse_maven1_path("foo/java-sources/foo-1.0-sources.jar").unwrap();
    let artifact = parsed.as_artifact().unwrap();

    assert_eq!(artifact.classifier(), Some("sources"));
    assert_eq!(artifact.version(), "1.0");
}

#[test]
fn test_maven2_snapshot() {
    let parsed = parse_maven2_path("g/a/1.0-SNAPSHOT/a-1.0-20200101.120000-3.jar").unwrap();
    let snapshot = parsed.as_snapshot_artifact().unwrap();

    assert_eq!(snapshot.base_version(), "1.0-SNAPSHOT");
    assert_eq!(snapshot.artifact().version(), "1.0-20200101.120000-3");
    assert_eq!(snapshot.timestamp(), Some("20200101.120000"));
    assert_eq!(snapshot.build(), Some("3"));
    assert!(parsed.is_snapshot_version());
    assert!(!parsed.is_subordinate());
}

#[rstest]
#[case::group("com/example/maven-metadata.xml", "com.example", None)]
#[case::artifact("com/my-lib/maven-metadata.xml", "com", Some("my-lib"))]
fn test_maven2_metadata_heuristic(#[case] path: &str, #[case] group_id: &str, #[case] artifact_id: Option<&str>) {
    let parsed = parse_maven2_path(path).unwrap();
    let metadata = parsed.as_metadata().unwrap();

    assert_eq!(metadata.group_id(), Some(group_id));
    assert_eq!(metadata.artifact_id(), artifact_id);
    assert_eq!(metadata.version(), None);
}

#[rstest]
#[case::artifact("g/a/1.0/a-1.0.jar")]
#[case::metadata("g/a/maven-metadata.xml")]
#[case::legacy("g/jars/a-1.0.jar")]
#[case::empty_segment("g/a//a-.jar")]
fn test_slashes_at_either_end_are_rejected(#[case] path: &str) {
    for candidate in [format!("/{}", path), format!("{}/", path), format!("/{}/", path)] {
        assert!(parse_maven1_path(&candidate).is_none(), "{}", candidate);
        assert!(parse_maven2_path(&candidate).is_none(), "{}", candidate);
    }
}

#[rstest]
#[case::maven1_artifact(RepositoryLayout::Maven1, "commons-lang/jars/commons-lang-2.1.jar")]
#[case::maven1_snapshot(RepositoryLayout::Maven1, "foo/jars/foo-1.0-SNAPSHOT.jar.md5")]
#[case::maven1_javadoc(RepositoryLayout::Maven1, "foo/javadocs/foo-1.0-javadoc.jar")]
#[case::maven2_artifact(RepositoryLayout::Maven2, "org/example/lib/1.0/lib-1.0-sources.jar")]
#[case::maven2_snapshot(RepositoryLayout::Maven2, "g/a/1.0-SNAPSHOT/a-1.0-20200101.120000-3.jar.sha1")]
#[case::maven2_metadata(RepositoryLayout::Maven2, "org/example/lib/1.0-SNAPSHOT/maven-metadata.xml.asc")]
fn test_reparsing_is_idempotent(#[case] layout: RepositoryLayout, #[case] path: &str) {
    let parsed = layout.parse(path).unwrap();
    let reparsed = layout.parse(parsed.path()).unwrap();

    assert_eq!(reparsed, parsed);
    assert_eq!(reparsed.path(), parsed.path());
    assert_eq!(reparsed.file_name(), parsed.file_name());
    assert_eq!(reparsed.to_string(), parsed.to_string());
}

#[test]
fn test_generated_pom_and_metadata_paths_parse() {
    let pom = parse_maven2_path(&pom_path("org.example", "lib", "1.0")).unwrap();
    assert_eq!(pom.as_artifact().unwrap().extension(), "pom");

    let metadata = parse_maven2_path(&metadata_path("org.example", Some("my-lib"), Some("sha1"))).unwrap();
    let metadata = metadata.as_metadata().unwrap();
    assert_eq!(metadata.group_id(), Some("org.example"));
    assert_eq!(metadata.artifact_id(), Some("my-lib"));
    assert_eq!(metadata.subordinate_type(), Some("sha1"));
}

#[test]
fn test_metadata_round_trip_is_not_guaranteed() {
    // an artifact id without '.' or '-' looks like the last segment of a group
    let parsed = parse_maven2_path(&metadata_path("org.example", Some("lib"), None)).unwrap();
    let metadata = parsed.as_metadata().unwrap();

    assert_eq!(metadata.group_id(), Some("org.example.lib"));
    assert_eq!(metadata.artifact_id(), None);
}

proptest! {
    #[test]
    fn test_artifact_path_round_trip(
        group_id in "[a-z]{1,8}(\\.[a-z][a-z0-9]{0,7}){0,3}",
        artifact_id in "[a-z][a-z0-9-]{0,10}",
        version in "[0-9]{1,3}(\\.[0-9]{1,3}){0,2}(-[a-z]{1,5}[0-9]?)?",
        classifier in proptest::option::of("[a-z][a-z0-9_-]{0,8}"),
        extension in "(jar|pom|war|zip|tar\\.gz)(\\.sha1|\\.md5|\\.asc)?",
    ) {
        let path = artifact_path(&group_id, &artifact_id, &version, classifier.as_deref(), &extension);
        let parsed = parse_maven2_path(&path);

        let artifact = match &parsed {
            Some(MavenPath::Artifact(a)) => a,
            other => panic!("{} was parsed as {:?}", path, other),
        };
        prop_assert_eq!(artifact.group_id(), group_id.as_str());
        prop_assert_eq!(artifact.artifact_id(), artifact_id.as_str());
        prop_assert_eq!(artifact.version(), version.as_str());
        prop_assert_eq!(artifact.classifier(), classifier.as_deref());
        prop_assert_eq!(artifact.extension(), extension.as_str());

        let created = create_artifact(&group_id, &artifact_id, &version, classifier.as_deref(), &extension);
        prop_assert_eq!(created.path(), path.as_str());
        prop_assert_eq!(created.file_name(), artifact.file_name());
    }
}
