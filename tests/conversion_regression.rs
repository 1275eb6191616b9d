//! End-to-end conversions through the public engine API.

mod fixtures;

use fixtures::Scratch;
use ghostty_ghost::convert::{
    backup_path, convert_file_with, converter_with_home, ConversionReport, ConversionRequest,
    TerminalKind,
};
use ghostty_ghost::error::{ConvertError, InputError, ThemeError};

/// Convert with `home` pinned inside the scratch tree.
fn convert(
    scratch: &Scratch,
    kind: TerminalKind,
    source: &str,
    target: &str,
) -> Result<ConversionReport, ConvertError> {
    let request = ConversionRequest {
        kind,
        source: scratch.path(source),
        target: scratch.path(target),
    };
    let converter = converter_with_home(kind, &request.source, Some(scratch.path("home")));
    convert_file_with(converter.as_ref(), &request)
}

#[test]
fn kitty_with_current_theme() {
    let scratch = Scratch::new("kitty-theme");
    scratch.write(
        "kitty/kitty.conf",
        "# managed by hand\n\
         font_family \"JetBrains Mono\"\n\
         font_size 13\n\
         background_opacity 0.9\n\
         \n\
         include current-theme.conf\n",
    );
    scratch.write(
        "kitty/current-theme.conf",
        "## name: Tokyo Night\n\
         background #1a1b26\n\
         color4 #7aa2f7\n",
    );

    let report = convert(&scratch, TerminalKind::Kitty, "kitty/kitty.conf", "ghostty/config")
        .expect("kitty conversion");

    assert!(report.diagnostics.warnings.is_empty());
    assert_eq!(report.backup, None);
    assert_eq!(report.mapped, 4);
    assert_eq!(report.unmapped, 2);
    assert_eq!(
        scratch.read("ghostty/config"),
        "# Unmapped settings = \n\
         # background_opacity = 0.9\n\
         # include = current-theme.conf\n\
         background = #1a1b26\n\
         font-family = JetBrains Mono\n\
         font-size = 13\n\
         palette = 4=  #7aa2f7\n"
    );
}

#[test]
fn kitty_bundled_theme_include() {
    let scratch = Scratch::new("kitty-bundled");
    scratch.write("kitty.conf", "include themes/Dracula.conf\nfont_size 14\n");

    convert(&scratch, TerminalKind::Kitty, "kitty.conf", "out/config").expect("convert");

    let text = scratch.read("out/config");
    assert!(text.contains("theme = Dracula\n"));
    assert!(text.contains("font-size = 14\n"));
}

#[test]
fn alacritty_with_nested_theme_imports() {
    let scratch = Scratch::new("alacritty-nested");
    scratch.write(
        "alacritty/alacritty.toml",
        "[general]\n\
         import = [\"./themes/outer.toml\"]\n\
         \n\
         [font]\n\
         size = 12.0\n\
         normal = { family = \"Fira Code\", style = \"Regular\" }\n\
         \n\
         [window]\n\
         opacity = 0.9\n\
         blur = true\n",
    );
    scratch.write(
        "alacritty/themes/outer.toml",
        "import = [\"./themes/inner.toml\"]\n\
         [colors.primary]\n\
         background = \"#282a36\"\n\
         [font]\n\
         size = 99\n",
    );
    scratch.write(
        "alacritty/themes/inner.toml",
        "[colors.normal]\nred = \"#ff5555\"\n",
    );

    let report = convert(
        &scratch,
        TerminalKind::Alacritty,
        "alacritty/alacritty.toml",
        "ghostty/config",
    )
    .expect("alacritty conversion");

    assert!(report.diagnostics.warnings.is_empty());
    assert_eq!(
        scratch.read("ghostty/config"),
        "# Unmapped settings = \n\
         # window_blur = true\n\
         background = #282a36\n\
         background-blur-radius = 10\n\
         background-opacity = 0.9\n\
         font-family = Fira Code\n\
         font-size = 12.0\n\
         palette = 1=  #ff5555\n"
    );
}

#[test]
fn alacritty_home_theme_missing_is_reported_not_fatal() {
    let scratch = Scratch::new("alacritty-missing");
    scratch.write(
        "alacritty.toml",
        "import = [\"~/.config/alacritty/themes/themes/gone.toml\"]\n\
         [font]\n\
         size = 11\n",
    );

    let report = convert(&scratch, TerminalKind::Alacritty, "alacritty.toml", "config")
        .expect("missing theme is not fatal");

    assert_eq!(report.diagnostics.warnings.len(), 1);
    assert!(report.diagnostics.warnings[0].contains("gone.toml"));
    assert_eq!(scratch.read("config"), "font-size = 11\n");
}

#[test]
fn self_importing_theme_fails_without_writing() {
    let scratch = Scratch::new("alacritty-cycle");
    scratch.write("a/alacritty.toml", "import = [\"./themes/loop.toml\"]\n");
    scratch.write("a/themes/loop.toml", "import = [\"./themes/loop.toml\"]\n");

    let err = convert(&scratch, TerminalKind::Alacritty, "a/alacritty.toml", "config")
        .expect_err("cycle must fail");

    assert!(matches!(
        err,
        ConvertError::Theme(ThemeError::DepthExceeded { limit: 2, .. })
    ));
    assert!(!scratch.path("config").exists());
}

#[test]
fn empty_key_reports_line_number() {
    let scratch = Scratch::new("alacritty-empty-key");
    scratch.write("alacritty.toml", "[window]\nopacity = 1\n= 0.5\n");

    let err = convert(&scratch, TerminalKind::Alacritty, "alacritty.toml", "config")
        .expect_err("empty key");

    match err {
        ConvertError::Input(InputError::EmptyKey { line, .. }) => assert_eq!(line, 3),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn second_conversion_keeps_first_output_as_backup() {
    let scratch = Scratch::new("backup");
    scratch.write("kitty.conf", "font_size 12\n");
    convert(&scratch, TerminalKind::Kitty, "kitty.conf", "config").expect("first");
    let first = scratch.read("config");

    scratch.write("kitty.conf", "font_size 16\ncursor_shape beam\n");
    let report = convert(&scratch, TerminalKind::Kitty, "kitty.conf", "config").expect("second");

    assert_eq!(report.backup, Some(backup_path(&scratch.path("config"))));
    assert_eq!(scratch.read("config.bak"), first);
    assert_eq!(scratch.read("config"), "cursor-style = beam\nfont-size = 16\n");

    // A third run replaces the backup rather than stacking another one.
    convert(&scratch, TerminalKind::Kitty, "kitty.conf", "config").expect("third");
    assert_eq!(
        scratch.read("config.bak"),
        "cursor-style = beam\nfont-size = 16\n"
    );
    assert!(!scratch.path("config.bak.bak").exists());
}

#[test]
fn independent_runs_are_byte_identical() {
    let scratch = Scratch::new("determinism");
    scratch.write(
        "kitty.conf",
        "zz_unknown yes\n\
         font_size 10\n\
         cursor_shape block\n\
         scrollback_lines 5000\n\
         aa_unknown no\n",
    );

    convert(&scratch, TerminalKind::Kitty, "kitty.conf", "one/config").expect("one");
    convert(&scratch, TerminalKind::Kitty, "kitty.conf", "two/config").expect("two");

    let one = scratch.read("one/config");
    assert_eq!(one, scratch.read("two/config"));
    let keys: Vec<&str> = one.lines().map(|l| l.split(" = ").next().unwrap_or(l)).collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}

#[test]
fn missing_source_is_an_input_error() {
    let scratch = Scratch::new("missing-source");
    let err = convert(&scratch, TerminalKind::Kitty, "nope.conf", "config").expect_err("missing");
    assert!(matches!(err, ConvertError::Input(InputError::Read { .. })));
    assert!(scratch.root().read_dir().expect("scratch").next().is_none());
}

#[test]
fn unsupported_terminal_name_is_rejected() {
    let err = "iterm2".parse::<TerminalKind>().expect_err("unsupported");
    assert_eq!(err.to_string(), "unsupported terminal type: iterm2");
}
