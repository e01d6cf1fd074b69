//! Tests for command execution.

use want::config::{Cli, TomlConfig, ValidatedConfig};
use want::layout::ParseValueError;

use super::*;

fn config(args: &[&str]) -> ValidatedConfig {
    let mut full_args = vec!["want"];
    full_args.extend(args);
    full_args.push("layout");
    ValidatedConfig::from_raw(&Cli::parse_from_iter(full_args), None).unwrap()
}

fn config_with(args: &[&str], toml: &str) -> ValidatedConfig {
    let mut full_args = vec!["want"];
    full_args.extend(args);
    full_args.push("profiles");
    ValidatedConfig::from_raw(
        &Cli::parse_from_iter(full_args),
        Some(TomlConfig::parse(toml).unwrap()),
    )
    .unwrap()
}

fn encode_cmd(values: &[&str]) -> Command {
    Command::Encode {
        values: values.iter().map(ToString::to_string).collect(),
    }
}

mod encode {
    use super::*;

    #[test]
    fn defaults_render_all_categories() {
        let out = execute(&encode_cmd(&[]), &config(&[])).unwrap();

        assert!(out.starts_with("bits    41 (0x29)"));
        assert!(out.contains("links   url"));
        assert!(out.contains("match   exact (loose: false, completion: false)"));
        assert!(out.contains("local   ref"));
        assert!(out.contains("remote  ref"));
    }

    #[test]
    fn json_output_has_every_accessor() {
        let out = execute(&encode_cmd(&["local=uri"]), &config(&["--json"])).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["local_type"], "uri");
        assert_eq!(json["remote_type"], "none");
        assert_eq!(json["links_type"], "none");
        assert_eq!(json["local_uri"], true);
        assert_eq!(json["remote"], false);
        assert_eq!(json["bits"], u64::from(Want::from_values([want::Local::Uri.into()]).bits()));
    }

    #[test]
    fn bad_token_is_parse_error() {
        let result = execute(&encode_cmd(&["local"]), &config(&[]));
        assert!(matches!(
            result,
            Err(RunError::Encode(WantError::Parse(ParseValueError::Malformed(_))))
        ));
    }

    #[test]
    fn lenient_conflict_keeps_last() {
        let out = execute(&encode_cmd(&["local=ref", "local=url"]), &config(&[])).unwrap();
        assert!(out.contains("local   url"));
    }

    #[test]
    fn strict_conflict_is_error() {
        let result = execute(&encode_cmd(&["local=ref", "local=url"]), &config(&["--strict"]));
        assert!(matches!(
            result,
            Err(RunError::Encode(WantError::Conflict { .. }))
        ));
    }
}

mod decode {
    use super::*;

    #[test]
    fn decodes_hex() {
        let out = execute(
            &Command::Decode {
                bits: "0x29".to_string(),
            },
            &config(&[]),
        )
        .unwrap();
        assert_eq!(out, render(Want::default(), false).unwrap());
    }

    #[test]
    fn decodes_value_outside_encoder_range() {
        let out = execute(
            &Command::Decode {
                bits: "4294967295".to_string(),
            },
            &config(&[]),
        )
        .unwrap();
        assert!(out.contains("match   loose+completion (loose: true, completion: true)"));
    }

    #[test]
    fn invalid_bits_reported() {
        let result = execute(
            &Command::Decode {
                bits: "0xZZ".to_string(),
            },
            &config(&[]),
        );
        assert!(matches!(result, Err(RunError::InvalidBits { ref value, .. }) if value == "0xZZ"));
    }
}

mod parse_bits_tests {
    use super::*;

    #[test]
    fn accepts_decimal_hex_and_binary() {
        assert_eq!(parse_bits("41").unwrap(), 41);
        assert_eq!(parse_bits("0x29").unwrap(), 41);
        assert_eq!(parse_bits("0X29").unwrap(), 41);
        assert_eq!(parse_bits("0b010_1001").unwrap(), 41);
        assert_eq!(parse_bits(" 41 ").unwrap(), 41);
    }

    #[test]
    fn rejects_overflow_and_negatives() {
        assert!(parse_bits("4294967296").is_err());
        assert!(parse_bits("-1").is_err());
        assert!(parse_bits("").is_err());
    }
}

mod profiles {
    use super::*;

    #[test]
    fn builtin_profile_encodes() {
        let out = execute(
            &Command::Profile {
                name: "image".to_string(),
            },
            &config(&[]),
        )
        .unwrap();
        assert!(out.contains("links   none"));
        assert!(out.contains("local   uri"));
        assert!(out.contains("remote  uri"));
    }

    #[test]
    fn unknown_profile_is_error() {
        let result = execute(
            &Command::Profile {
                name: "nope".to_string(),
            },
            &config(&[]),
        );
        assert!(matches!(result, Err(RunError::UnknownProfile(ref n)) if n == "nope"));
    }

    #[test]
    fn listing_marks_source() {
        let config = config_with(&[], "[profiles.wiki]\nremote = \"url\"");
        let out = execute(&Command::Profiles, &config).unwrap();

        let wiki = out.lines().find(|l| l.starts_with("wiki")).unwrap();
        assert!(wiki.contains("config"));
        assert!(wiki.contains("remote=url"));

        let default = out.lines().find(|l| l.starts_with("default")).unwrap();
        assert!(default.contains("builtin"));
        assert!(default.contains("(defaults)"));
    }
}

mod layout {
    use super::*;

    #[test]
    fn table_lists_every_category() {
        let out = execute(&Command::Layout, &config(&[])).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("links"));
        assert!(lines[2].contains("exact, loose, completion, loose+completion"));
        assert!(lines[3].contains("none, ref, uri, url"));
        assert!(lines[4].starts_with("remote"));
    }

    #[test]
    fn init_is_not_executed_here() {
        let result = execute(
            &Command::Init {
                output: "want.toml".into(),
            },
            &config(&[]),
        );
        assert!(matches!(result, Err(RunError::Init)));
    }
}
