use rstest::rstest;
use version_detector::{Error, Stability, StructureReason, Version, VersionData, VersionFactory};

#[rstest]
#[case("34.0.1760.0", "34", "0", "1760", Some("0"), None, Stability::Stable, None, "34.0.1760.0")]
#[case("3.9.0.0.22", "3", "9", "0", Some("0"), Some("22"), Stability::Stable, None, "3.9.0.0.22")]
#[case("4.1.1", "4", "1", "1", None, None, Stability::Stable, None, "4.1.1")]
#[case("7.0", "7", "0", "0", None, None, Stability::Stable, None, "7.0.0")]
#[case("1.17.0-rc", "1", "17", "0", None, None, Stability::Rc, None, "1.17.0-RC")]
#[case("4.3.2f1", "4", "3", "2", None, None, Stability::Stable, None, "4.3.2")]
#[case("v0.1.4", "0", "1", "4", None, None, Stability::Stable, None, "0.1.4")]
#[case("2.0b8", "2", "0", "0", None, None, Stability::Beta, Some("8"), "2.0.0-beta+8")]
#[case("4.0a1", "4", "0", "0", None, None, Stability::Alpha, Some("1"), "4.0.0-alpha+1")]
#[case("4.0dev2", "4", "0", "0", None, None, Stability::Dev, Some("2"), "4.0.0-dev+2")]
#[case("0.0.0", "0", "0", "0", None, None, Stability::Stable, None, "0.0.0")]
#[case("2.0p12", "2", "0", "0", None, None, Stability::Patch, Some("12"), "2.0.0-patch+12")]
#[case("2.0pl3", "2", "0", "0", None, None, Stability::Patch, Some("3"), "2.0.0-patch+3")]
#[case("2.0.0-patch+12", "2", "0", "0", None, None, Stability::Patch, Some("12"), "2.0.0-patch+12")]
#[case("4.0.0-beta+8", "4", "0", "0", None, None, Stability::Beta, Some("8"), "4.0.0-beta+8")]
#[case("4.0.0-alpha+1", "4", "0", "0", None, None, Stability::Alpha, Some("1"), "4.0.0-alpha+1")]
#[case("5.0 RC2", "5", "0", "0", None, None, Stability::Rc, Some("2"), "5.0.0-RC+2")]
#[case("6.1B", "6", "1", "0", None, None, Stability::Beta, None, "6.1.0-beta")]
fn test_version_set(
    #[case] input: &str,
    #[case] major: &str,
    #[case] minor: &str,
    #[case] micro: &str,
    #[case] patch: Option<&str>,
    #[case] micropatch: Option<&str>,
    #[case] stability: Stability,
    #[case] build: Option<&str>,
    #[case] complete: &str,
) {
    let v = VersionFactory::new().set(input);

    assert!(v.is_found(), "no version in {:?}", input);
    assert_eq!(v.major(), Some(major), "major is wrong");
    assert_eq!(v.minor(), Some(minor), "minor is wrong");
    assert_eq!(v.micro(), Some(micro), "micro is wrong");
    assert_eq!(v.patch(), patch, "patch is wrong");
    assert_eq!(v.micropatch(), micropatch, "micropatch is wrong");
    assert_eq!(v.stability(), Some(stability), "stability is wrong");
    assert_eq!(v.build(), build, "build is wrong");
    assert_eq!(v.version().as_deref(), Some(complete), "complete is wrong");
}

#[rstest]
#[case("XP")]
#[case("abc")]
#[case("")]
#[case("Windows NT")]
fn test_version_set_without_digits(#[case] input: &str) {
    assert_eq!(VersionFactory::new().set(input), Version::NotFound);
}

#[rstest]
#[case("Chrome/34.0.1760.0", &[Some("Chrome")], "34.0.1760.0")]
#[case("Firefox/4.0b8", &[Some("Firefox")], "4.0.0-beta+8")]
#[case("Firefox%20/4.0b8", &[Some("Firefox%20")], "4.0.0-beta+8")]
#[case("Firefox/4.0b8", &[None, Some(""), Some("Firefox")], "4.0.0-beta+8")]
#[case(
    "Mozilla/5.0 (iPhone; CPU iPhone OS 7_0_1 like Mac OS X)",
    &[Some("iPhone OS")],
    "7.0.1"
)]
#[case("Mozilla/5.0 (Windows NT 6.1; rv:11.0)", &[Some("Trident"), Some("rv:")], "11.0.0")]
#[case("App/1%2E5", &[Some("App")], "1.0.0")]
fn test_version_detect_version(
    #[case] ua: &str,
    #[case] markers: &[Option<&str>],
    #[case] complete: &str,
) {
    let v = VersionFactory::new().detect_version(ua, markers);
    assert_eq!(v.version().as_deref(), Some(complete));
}

#[rstest]
#[case("Firefox/4.0b8", &[Some("Chrome")])]
#[case("Firefox/4.0b8", &[None, None])]
#[case("Firefox/4.0b8", &[])]
#[case("Firefox/beta", &[Some("Firefox")])]
fn test_version_detect_not_found(#[case] ua: &str, #[case] markers: &[Option<&str>]) {
    let v = VersionFactory::new().detect_version(ua, markers);
    assert_eq!(v, Version::NotFound);
    assert_eq!(v.major(), None);
    assert_eq!(v.version(), None);
    assert_eq!(v.is_beta(), None);
}

#[test]
fn test_from_array() {
    let data = VersionData {
        major: Some("4".to_owned()),
        minor: Some("0".to_owned()),
        micro: Some("0".to_owned()),
        stability: Some("beta".to_owned()),
        build: Some("8".to_owned()),
        ..Default::default()
    };
    let v = VersionFactory::from_array(&data).unwrap();

    assert_eq!(v.major(), Some("4"));
    assert_eq!(v.minor(), Some("0"));
    assert_eq!(v.micro(), Some("0"));
    assert_eq!(v.stability(), Some(Stability::Beta));
    assert_eq!(v.build(), Some("8"));
    assert_eq!(v.is_beta(), Some(true));
    assert_eq!(v.is_alpha(), Some(false));
}

#[test]
fn test_from_json() {
    let text = r#"{"major":"4","minor":"0","micro":"0","stability":"beta","build":"8"}"#;
    let v = VersionFactory::from_json(text).unwrap();

    assert_eq!(v.version().as_deref(), Some("4.0.0-beta+8"));
    assert_eq!(v.is_beta(), Some(true));
    assert_eq!(v.is_alpha(), Some(false));
}

#[test]
fn test_from_json_invalid() {
    let err = VersionFactory::from_json("major=4").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(!err.is_config());
}

#[rstest]
#[case("7.0")]
#[case("3.9.0.0.22")]
#[case("2.0b8")]
#[case("1.17.0-rc")]
#[case("v10.03.1_2 dev 5")]
fn test_from_array_round_trip(#[case] input: &str) {
    let v = VersionFactory::new().set(input);
    let again = VersionFactory::from_array(&v.to_array()).unwrap();
    assert_eq!(again, v);

    let json = serde_json::to_string(&v.to_array()).unwrap();
    assert_eq!(VersionFactory::from_json(&json).unwrap(), v);
}

#[test]
fn test_custom_grammar() {
    let factory = VersionFactory::with_regex(r"\s*(?P<major>\d+)\s+build\s+(?P<build>\d+)").unwrap();
    assert!(!factory.is_default());

    let v = factory.detect_version("Windows 10 Build 19041", &["Windows"]);
    assert_eq!(v.version().as_deref(), Some("10.0.0+19041"));
    assert_eq!(factory.detect_version("Windows 10", &["Windows"]), Version::NotFound);
}

#[test]
fn test_missing_major_defaults_to_zero() {
    let factory = VersionFactory::with_regex(r"(?P<major>\d+)?\.(?P<minor>\d+)").unwrap();
    let v = factory.set(".5");
    assert_eq!(v.major(), Some("0"));
    assert_eq!(v.version().as_deref(), Some("0.5.0"));

    // a match that captured nothing is still no version
    let factory = VersionFactory::with_regex(r"(?P<major>\d*)").unwrap();
    assert_eq!(factory.set("x"), Version::NotFound);
}

#[test]
fn test_from_json_rejects_non_digits() {
    let err = VersionFactory::from_json(r#"{"major":"abc","minor":"1.2","build":"x y"}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Structure {
            key: "major",
            reason: StructureReason::NotDigits(_)
        }
    ));
}

#[test]
fn test_set_regex_fails_early() {
    let mut factory = VersionFactory::new();

    let err = factory.set_regex("(").unwrap_err();
    assert!(err.is_config());
    let err = factory.set_regex(r"(?P<version>\d+)").unwrap_err();
    assert!(err.is_config());
    let err = VersionFactory::with_regex(r"[0-9").unwrap_err();
    assert!(err.is_config());

    // the built-in grammar is still in place
    assert!(factory.is_default());
    assert_eq!(factory.set("7.0").version().as_deref(), Some("7.0.0"));
}
