//! Tests for CLI argument parsing.

use std::path::PathBuf;

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn parse_encode_values() {
        let cli = Cli::parse_from_iter(["want", "encode", "local=uri", "match=loose"]);

        match cli.command {
            Command::Encode { values } => assert_eq!(values, vec!["local=uri", "match=loose"]),
            other => panic!("Expected Encode, got {other:?}"),
        }
    }

    #[test]
    fn parse_encode_without_values() {
        let cli = Cli::parse_from_iter(["want", "encode"]);
        assert!(matches!(cli.command, Command::Encode { ref values } if values.is_empty()));
    }

    #[test]
    fn parse_decode() {
        let cli = Cli::parse_from_iter(["want", "decode", "0x29"]);
        assert!(matches!(cli.command, Command::Decode { ref bits } if bits == "0x29"));
    }

    #[test]
    fn parse_profile() {
        let cli = Cli::parse_from_iter(["want", "profile", "image"]);
        assert!(matches!(cli.command, Command::Profile { ref name } if name == "image"));
    }

    #[test]
    fn parse_listing_commands() {
        let profiles = Cli::parse_from_iter(["want", "profiles"]);
        assert!(matches!(profiles.command, Command::Profiles));

        let layout = Cli::parse_from_iter(["want", "layout"]);
        assert!(matches!(layout.command, Command::Layout));
    }

    #[test]
    fn command_is_required() {
        assert!(<Cli as clap::Parser>::try_parse_from(["want"]).is_err());
    }
}

mod global_flags {
    use super::*;

    #[test]
    fn flags_default_off() {
        let cli = Cli::parse_from_iter(["want", "encode"]);
        assert!(!cli.strict);
        assert!(!cli.json);
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn flags_accepted_after_subcommand() {
        let cli = Cli::parse_from_iter([
            "want",
            "encode",
            "local=ref",
            "--strict",
            "--json",
            "-v",
            "-c",
            "custom.toml",
        ]);

        assert!(cli.strict);
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn flags_accepted_before_subcommand() {
        let cli = Cli::parse_from_iter(["want", "--strict", "--config", "a.toml", "profiles"]);
        assert!(cli.strict);
        assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
    }
}

mod init {
    use super::*;

    #[test]
    fn init_default_output() {
        let cli = Cli::parse_from_iter(["want", "init"]);

        assert!(cli.is_init());
        match cli.command {
            Command::Init { output } => assert_eq!(output, PathBuf::from("want.toml")),
            other => panic!("Expected Init, got {other:?}"),
        }
    }

    #[test]
    fn init_custom_output() {
        let cli = Cli::parse_from_iter(["want", "init", "--output", "custom.toml"]);

        match cli.command {
            Command::Init { output } => assert_eq!(output, PathBuf::from("custom.toml")),
            other => panic!("Expected Init, got {other:?}"),
        }
    }

    #[test]
    fn other_commands_are_not_init() {
        let cli = Cli::parse_from_iter(["want", "layout"]);
        assert!(!cli.is_init());
    }
}
