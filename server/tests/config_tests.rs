#![allow(clippy::unwrap_used)]

use serial_test::serial;
use server_lib::config::{DEFAULT_OUTPUT_NAME, SiteConfig};
use server_lib::error::SiteError;
use std::net::SocketAddr;

const VARS: [&str; 4] = [
    "LEPTOS_SITE_ADDR",
    "LEPTOS_SITE_ROOT",
    "LEPTOS_SITE_PKG_DIR",
    "LEPTOS_OUTPUT_NAME",
];

#[test]
#[serial]
fn test_defaults_when_unset() {
    temp_env::with_vars_unset(VARS, || {
        let config = SiteConfig::from_env().unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
    });
}

#[test]
#[serial]
fn test_reads_all_variables() {
    temp_env::with_vars(
        [
            ("LEPTOS_SITE_ADDR", Some("0.0.0.0:8080")),
            ("LEPTOS_SITE_ROOT", Some("/srv/site")),
            ("LEPTOS_SITE_PKG_DIR", Some("assets")),
            ("LEPTOS_OUTPUT_NAME", Some("guide")),
        ],
        || {
            let config = SiteConfig::from_env().unwrap();
            assert_eq!(config.addr.port(), 8080);
            assert_eq!(config.site_root, "/srv/site");
            assert_eq!(config.site_pkg_dir, "assets");
            assert_eq!(config.output_name, "guide");

            let options = config.leptos_options();
            assert_eq!(&*options.site_pkg_dir, "assets");
            assert_eq!(&*options.output_name, "guide");
        },
    );
}

#[test]
#[serial]
fn test_empty_values_fall_back_to_defaults() {
    temp_env::with_vars(
        [("LEPTOS_SITE_ADDR", Some("")), ("LEPTOS_OUTPUT_NAME", Some(""))],
        || {
            let config = SiteConfig::from_env().unwrap();
            assert_eq!(config.addr.port(), 3000);
            assert_eq!(config.output_name, DEFAULT_OUTPUT_NAME);
        },
    );
}

#[test]
#[serial]
fn test_invalid_address_is_config_error() {
    temp_env::with_var("LEPTOS_SITE_ADDR", Some("not-an-address"), || {
        let err = SiteConfig::from_env().unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
        assert!(err.to_string().contains("LEPTOS_SITE_ADDR"));
    });
}
