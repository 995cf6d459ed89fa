#![cfg(unix)]

use claims::*;
use engine::{ColorMode, ToolOutcome};
use hueshift::app;
use hueshift::cli::{ApplyArgs, ModeArgs};
use hueshift::config::{AppConfig, load_config_from};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const LIGHT: &str = r##"{
    "wallpaper": "/walls/day.png",
    "alpha": "100",
    "special": { "background": "#eff1f5", "foreground": "#4c4f69", "cursor": "#dc8a78" },
    "colors": { "color0": "#5c5f77", "color1": "#d20f39", "color2": "#40a02b" }
}"##;

const DARK: &str = r##"{
    "special": { "background": "#1e1e2e", "foreground": "#cdd6f4", "cursor": "#f5e0dc" },
    "colors": { "color0": "#45475a", "color1": "#f38ba8", "color2": "#a6e3a1" }
}"##;

/// A scratch directory holding schemes, fake tools and a config file
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("schemes")).unwrap();
        fs::write(dir.path().join("schemes/light.json"), LIGHT).unwrap();
        fs::write(dir.path().join("schemes/dark.json"), DARK).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Install a shell script that records its arguments to `<name>.args`
    fn fake_tool(&self, name: &str, exit_code: i32) -> PathBuf {
        let path = self.path().join(name);
        let record = self.path().join(format!("{name}.args"));
        fs::write(
            &path,
            format!(
                "#!/bin/sh\nprintf '%s\\n' \"$*\" > {}\nexit {exit_code}\n",
                record.display()
            ),
        )
        .unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn recorded(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.path().join(format!("{name}.args")))
            .ok()
            .map(|s| s.trim().to_string())
    }

    fn config(&self, body: &str) -> AppConfig {
        let file = self.path().join("config.toml");
        let source = format!(
            "[schemes]\ndir = \"{}\"\n\n{body}",
            self.path().join("schemes").display()
        );
        fs::write(&file, source).unwrap();
        assert_ok!(load_config_from(Some(&file), false).into_validated())
    }
}

#[tokio::test]
async fn test_apply_runs_pywal_then_matugen() {
    let ws = Workspace::new();
    let wal = ws.fake_tool("wal", 0);
    let matugen = ws.fake_tool("matugen", 0);
    let cache = ws.path().join("cache");
    let config = ws.config(&format!(
        "[pywal]\nenabled = true\nprogram = \"{}\"\nvte_fix = true\ncache_dir = \"{}\"\n\n\
         [matugen]\nprogram = \"{}\"\nwallpaper = \"/walls/night.png\"\n",
        wal.display(),
        cache.display(),
        matugen.display()
    ));

    let mut out = Vec::new();
    let report = assert_ok!(app::apply(&config, &ApplyArgs::default(), &mut out).await);

    assert_eq!(report.mode, ColorMode::Dark);
    assert_eq!(report.pywal, ToolOutcome::Completed);
    assert_eq!(report.matugen, ToolOutcome::Completed);
    assert!(out.is_empty());

    let scheme_file = cache.join("wal-colors.json");
    assert_eq!(
        ws.recorded("wal").unwrap(),
        format!("-n --vte -f {}", scheme_file.display())
    );
    let written = fs::read_to_string(&scheme_file).unwrap();
    assert!(written.contains("#1e1e2e"));
    assert_eq!(
        ws.recorded("matugen").unwrap(),
        "-m dark image /walls/night.png"
    );
}

#[tokio::test]
async fn test_terminal_override_picks_light_for_both_tools() {
    let ws = Workspace::new();
    let wal = ws.fake_tool("wal", 0);
    let matugen = ws.fake_tool("matugen", 0);
    let cache = ws.path().join("cache");
    let config = ws.config(&format!(
        "[mode]\nlight = false\n\n\
         [pywal]\nprogram = \"{}\"\ncache_dir = \"{}\"\n\n\
         [matugen]\nprogram = \"{}\"\n",
        wal.display(),
        cache.display(),
        matugen.display()
    ));
    let args = ApplyArgs {
        mode: ModeArgs {
            pywal_light: true,
            ..ModeArgs::default()
        },
        pywal: true,
        print: true,
        matugen: Some("/walls/day.png".to_string()),
        ..ApplyArgs::default()
    };

    let mut out = Vec::new();
    let report = assert_ok!(app::apply(&config, &args, &mut out).await);

    assert_eq!(report.mode, ColorMode::Light);
    let written = fs::read_to_string(cache.join("wal-colors.json")).unwrap();
    assert!(written.contains("#eff1f5"));
    assert!(written.contains("/walls/day.png"));
    assert_eq!(
        ws.recorded("matugen").unwrap(),
        "-m light image /walls/day.png"
    );

    let swatch = String::from_utf8(out).unwrap();
    assert!(swatch.starts_with("\x1b[48;2;92;95;119;39m #5c5f77 \x1b[0m"));
    assert!(swatch.ends_with("\x1b[0m\n"));
}

#[tokio::test]
async fn test_tool_failures_do_not_fail_apply() {
    let ws = Workspace::new();
    let wal = ws.fake_tool("wal", 1);
    let matugen = ws.fake_tool("matugen", 3);
    let config = ws.config(&format!(
        "[pywal]\nenabled = true\nprogram = \"{}\"\ncache_dir = \"{}\"\n\n\
         [matugen]\nprogram = \"{}\"\n",
        wal.display(),
        ws.path().join("cache").display(),
        matugen.display()
    ));
    let args = ApplyArgs {
        matugen: Some("/walls/a.png".to_string()),
        ..ApplyArgs::default()
    };

    let report = assert_ok!(app::apply(&config, &args, &mut Vec::new()).await);

    assert_eq!(report.pywal, ToolOutcome::Failed);
    assert_eq!(report.matugen, ToolOutcome::Failed);
}

#[tokio::test]
async fn test_missing_tools_are_reported_unavailable() {
    let ws = Workspace::new();
    let config = ws.config(&format!(
        "[pywal]\nenabled = true\nprogram = \"{}\"\n\n[matugen]\nprogram = \"{}\"\n",
        ws.path().join("no-such-wal").display(),
        ws.path().join("no-such-matugen").display()
    ));
    let args = ApplyArgs {
        matugen: Some("/walls/a.png".to_string()),
        ..ApplyArgs::default()
    };

    let report = assert_ok!(app::apply(&config, &args, &mut Vec::new()).await);

    assert_eq!(report.pywal, ToolOutcome::Unavailable);
    assert_eq!(report.matugen, ToolOutcome::Unavailable);
}

#[tokio::test]
async fn test_no_pywal_flag_beats_config() {
    let ws = Workspace::new();
    let wal = ws.fake_tool("wal", 0);
    let config = ws.config(&format!(
        "[pywal]\nenabled = true\nprogram = \"{}\"\ncache_dir = \"{}\"\n",
        wal.display(),
        ws.path().join("cache").display()
    ));
    let args = ApplyArgs {
        no_pywal: true,
        ..ApplyArgs::default()
    };

    let report = assert_ok!(app::apply(&config, &args, &mut Vec::new()).await);

    assert_eq!(report.pywal, ToolOutcome::Skipped);
    assert_eq!(report.matugen, ToolOutcome::Skipped);
    assert_none!(ws.recorded("wal"));
}

#[tokio::test]
async fn test_invalid_scheme_aborts_before_tools_run() {
    let ws = Workspace::new();
    fs::write(
        ws.path().join("schemes/dark.json"),
        r##"{ "special": { "background": "#000", "foreground": "#fff", "cursor": "#fff" },
             "colors": { "color0": "#000000" } }"##,
    )
    .unwrap();
    let wal = ws.fake_tool("wal", 0);
    let config = ws.config(&format!(
        "[pywal]\nenabled = true\nprogram = \"{}\"\n",
        wal.display()
    ));

    let result = app::apply(&config, &ApplyArgs::default(), &mut Vec::new()).await;

    assert_matches!(result, Err(hueshift::AppError::Scheme(_)));
    assert_none!(ws.recorded("wal"));
}
