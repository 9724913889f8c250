//! AS-004: Invocation building — one pure function per directive.
//!
//! Each downstream tool parses its own flags, and they disagree on how
//! `keyname` is tokenized: `describe-instances` takes `--keyname <v>` as a
//! single argument, `upload-app` and `terminate-instances` take two. Keep
//! them as they are.

use super::types::{Invocation, OptionValue, ParsedConfig};

pub const RUN_INSTANCES: &str = "run-instances";
pub const DESCRIBE_INSTANCES: &str = "describe-instances";
pub const UPLOAD_APP: &str = "upload-app";
pub const TERMINATE_INSTANCES: &str = "terminate-instances";

const KEYNAME: &str = "keyname";

/// `up`: every option flattened to flags, in file order.
pub fn up(config: &ParsedConfig) -> Invocation {
    let mut inv = Invocation::new(RUN_INSTANCES);
    for (key, value) in &config.options {
        inv.arg(format!("--{}", key));
        if let OptionValue::Scalar(s) = value {
            inv.arg(s.as_str());
        }
    }
    inv
}

/// `status`: only the deployment identifier, as one combined token.
pub fn status(config: &ParsedConfig) -> Invocation {
    let mut inv = Invocation::new(DESCRIBE_INSTANCES);
    if let Some(keyname) = config.truthy(KEYNAME) {
        inv.arg(format!("--{} {}", KEYNAME, keyname));
    }
    inv
}

/// `deploy`: optional keyname, then the application path. Order is fixed.
pub fn deploy(config: &ParsedConfig, app: &str) -> Invocation {
    let mut inv = Invocation::new(UPLOAD_APP);
    push_keyname(&mut inv, config);
    inv.arg("--file").arg(app);
    inv
}

/// `destroy`: optional keyname as two tokens.
///
/// Like `status`, only `keyname` is read. `terminate-instances` parses
/// flags the way `upload-app` does, so the value is its own argument
/// rather than `status`'s combined `--keyname <v>`.
pub fn destroy(config: &ParsedConfig) -> Invocation {
    let mut inv = Invocation::new(TERMINATE_INSTANCES);
    push_keyname(&mut inv, config);
    inv
}

fn push_keyname(inv: &mut Invocation, config: &ParsedConfig) {
    if let Some(keyname) = config.truthy(KEYNAME) {
        inv.arg(format!("--{}", KEYNAME)).arg(keyname.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_config;
    use proptest::prelude::*;

    fn keyname_abc() -> ParsedConfig {
        [("keyname", OptionValue::Scalar("abc".into()))]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_as004_up_flattens_in_order() {
        let config: ParsedConfig = [
            ("keyname", OptionValue::Scalar("abc".into())),
            ("flag_x", OptionValue::Flag),
            ("opt_y", OptionValue::Scalar("5".into())),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            up(&config).argv(),
            vec!["run-instances", "--keyname", "abc", "--flag_x", "--opt_y", "5"]
        );
    }

    #[test]
    fn test_as004_up_from_yaml() {
        let config = parse_config("infrastructure: ec2\ntest: true\nmin: 1\nverbose: false\n").unwrap();
        assert_eq!(
            up(&config).argv(),
            vec![
                "run-instances",
                "--infrastructure",
                "ec2",
                "--test",
                "--min",
                "1",
                "--verbose",
                "false"
            ]
        );
    }

    #[test]
    fn test_as004_up_empty() {
        assert_eq!(up(&ParsedConfig::default()).argv(), vec!["run-instances"]);
    }

    #[test]
    fn test_as004_up_no_quoting() {
        let config: ParsedConfig = [("group", OptionValue::Scalar("a b; rm -rf /".into()))]
            .into_iter()
            .collect();
        assert_eq!(up(&config).args, vec!["--group", "a b; rm -rf /"]);
    }

    #[test]
    fn test_as004_status_combined_token() {
        assert_eq!(
            status(&keyname_abc()).argv(),
            vec!["describe-instances", "--keyname abc"]
        );
    }

    #[test]
    fn test_as004_status_without_keyname() {
        assert_eq!(status(&ParsedConfig::default()).argv(), vec!["describe-instances"]);
    }

    #[test]
    fn test_as004_status_ignores_other_keys() {
        let config = parse_config("keyname: abc\ninfrastructure: ec2\ntest: true\n").unwrap();
        assert_eq!(status(&config).args, vec!["--keyname abc"]);
    }

    #[test]
    fn test_as004_status_falsy_keyname() {
        let config = parse_config("keyname: \"\"\n").unwrap();
        assert_eq!(status(&config).argv(), vec!["describe-instances"]);
        let config = parse_config("keyname: false\n").unwrap();
        assert_eq!(status(&config).argv(), vec!["describe-instances"]);
    }

    #[test]
    fn test_as004_deploy_with_keyname() {
        assert_eq!(
            deploy(&keyname_abc(), "/tmp/app").argv(),
            vec!["upload-app", "--keyname", "abc", "--file", "/tmp/app"]
        );
    }

    #[test]
    fn test_as004_deploy_without_keyname() {
        assert_eq!(
            deploy(&ParsedConfig::default(), "/tmp/app").argv(),
            vec!["upload-app", "--file", "/tmp/app"]
        );
    }

    #[test]
    fn test_as004_deploy_keyname_precedes_file() {
        // keyname appears after other keys in the file; still first in argv
        let config = parse_config("group: g\nkeyname: abc\n").unwrap();
        assert_eq!(
            deploy(&config, "guestbook").args,
            vec!["--keyname", "abc", "--file", "guestbook"]
        );
    }

    #[test]
    fn test_as004_destroy() {
        assert_eq!(
            destroy(&keyname_abc()).argv(),
            vec!["terminate-instances", "--keyname", "abc"]
        );
        assert_eq!(destroy(&ParsedConfig::default()).argv(), vec!["terminate-instances"]);
    }

    #[test]
    fn test_as004_numeric_keyname_stringified() {
        let config = parse_config("keyname: 42\n").unwrap();
        assert_eq!(status(&config).args, vec!["--keyname 42"]);
        assert_eq!(deploy(&config, "app").args, vec!["--keyname", "42", "--file", "app"]);
    }

    fn option_value() -> impl Strategy<Value = OptionValue> {
        prop_oneof![
            Just(OptionValue::Flag),
            "[a-z0-9._-]{0,12}".prop_map(OptionValue::Scalar),
        ]
    }

    proptest! {
        /// Every option contributes `--key` plus its value (unless a flag), in order.
        #[test]
        fn prop_as004_up_flattening(
            entries in proptest::collection::vec(("[a-z_]{1,10}", option_value()), 0..12)
        ) {
            let config: ParsedConfig = entries.into_iter().collect();
            let inv = up(&config);
            prop_assert_eq!(&inv.program, RUN_INSTANCES);

            let mut expected = Vec::new();
            for (key, value) in &config.options {
                expected.push(format!("--{}", key));
                if let OptionValue::Scalar(s) = value {
                    expected.push(s.clone());
                }
            }
            prop_assert_eq!(inv.args, expected);
        }
    }
}
