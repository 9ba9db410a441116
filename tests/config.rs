use profile_doctor::config::Config;
use profile_doctor::icons::IconTheme;
use profile_doctor::pages::PageKind;
use profile_doctor::router::RouteConfig;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.sidebar_width, 24);
    assert_eq!(config.ui.collapsed_sidebar_width, 6);
    assert_eq!(config.ui.narrow_breakpoint, 80);
    assert_eq!(config.ui.start_path, "/");
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.icon_theme, IconTheme::Unicode);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.routes.len(), 8);
    assert_eq!(config.routes[0].path, "/");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 10;
    assert!(config.validate().is_err());

    // Collapsed width must stay below the expanded width
    config.ui.sidebar_width = 12;
    config.ui.collapsed_sidebar_width = 10;
    assert!(config.validate().is_ok());
    config.ui.sidebar_width = 12;
    config.ui.collapsed_sidebar_width = 2;
    assert!(config.validate().is_err());

    // The breakpoint has to leave room for content next to the sidebar
    config = Config::default();
    config.ui.narrow_breakpoint = 30;
    assert!(config.validate().is_err());

    // Reset and test the start path
    config = Config::default();
    config.ui.start_path = "scans".to_string();
    assert!(config.validate().is_err());

    // Unknown log level
    config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_route_table_validation() {
    let mut config = Config::default();
    config.routes.push(RouteConfig::new("/scans", "Scans again", PageKind::Scans));
    let err = config.validate().unwrap_err();
    assert!(format!("{err:#}").contains("/scans"));

    config.routes.clear();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("sidebar_width = 24"));
    assert!(toml_str.contains("icon_theme = \"unicode\""));
    assert!(toml_str.contains("[[routes]]"));
    assert!(toml_str.contains("page = \"dashboard\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
sidebar_width = 30

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.sidebar_width, 30);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.ui.collapsed_sidebar_width, 6);
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.routes.len(), 8);
}

#[test]
fn test_custom_routes_replace_defaults() {
    let custom = r#"
[[routes]]
path = "/"
label = "Home"
page = "dashboard"

[[routes]]
path = "/who"
label = "People"
page = "profiles"
"#;

    let config: Config = toml::from_str(custom).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.routes.len(), 2);
    assert_eq!(config.routes[1], RouteConfig::new("/who", "People", PageKind::Profiles));
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.sidebar_width, default_config.ui.sidebar_width);
    assert_eq!(config.ui.start_path, default_config.ui.start_path);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.routes, default_config.routes);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("profile_doctor_test_invalid_config");
    let _ = fs::remove_dir_all(&temp_dir);
    fs::create_dir_all(&temp_dir).unwrap();
    let config_path = temp_dir.join("config.toml");
    fs::write(&config_path, "[ui]\nsidebar_width = 99\n").unwrap();

    let err = Config::load_from_file(&config_path).unwrap_err();
    assert!(format!("{err:#}").contains("sidebar_width"));

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("profile_doctor_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(temp_dir.exists());
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Profile Doctor Configuration File"));
    assert!(content.contains("narrow_breakpoint = 80"));

    // The generated file loads back cleanly
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.routes, Config::default().routes);

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
