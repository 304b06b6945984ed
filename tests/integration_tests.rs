//! Integration tests for the chopro converter
//!
//! Runs whole conversions into a temporary output directory and checks the files
//! that come out.

use std::fs;
use std::path::{Path, PathBuf};

use chopro::{compile, expand_inputs, ChoproError, Config, Session};
use pretty_assertions::assert_eq;

const SONGBOOK: &str = r#"# Campfire songbook
{section: Traditional}
{title: Amazing Grace}
{subtitle: John Newton}

{c: Slowly}
[G]Amazing [G7]grace, how [C]sweet the [G]sound

{soc}
[G]I once was [Em]lost, but [D]now am found
{eoc}

{title: House of the Rising Sun}
{transpose: -2}
There [Am]is a [C]house in [D]New Or[F]leans
{section: Rock}
{title: Knockin' on Heaven's Door}
[G]Mama, take this [D]badge off of [Am]me
"#;

fn convert(dir: &Path, sources: &[(&str, &str)]) -> Result<usize, ChoproError> {
    let mut inputs = Vec::new();
    for (name, content) in sources {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        inputs.push(path);
    }
    let config = Config {
        output_dir: dir.join("Songs"),
        ..Config::default()
    };
    Session::new(config).run(&inputs)
}

fn read(path: PathBuf) -> String {
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e))
}

#[test]
fn test_full_songbook() {
    let dir = tempfile::tempdir().unwrap();
    let songs = convert(dir.path(), &[("book.cho", SONGBOOK)]).unwrap();
    assert_eq!(songs, 3);

    let out = dir.path().join("Songs");
    for file in [
        "chord.css",
        "chord.js",
        "index.html",
        "Amazing_Grace.html",
        "House_of_the_Rising_Sun.html",
        "Knockin__on_Heaven_s_Door.html",
    ] {
        assert!(out.join(file).exists(), "missing {}", file);
    }

    let grace = read(out.join("Amazing_Grace.html"));
    assert!(grace.contains("<SPAN class='subtitle'>John Newton</SPAN>"));
    assert!(grace.contains("<SPAN class='comment'>Slowly</SPAN>"));
    assert!(grace.contains("<span class='text'>Amazing grace, how sweet the sound</span>"));
    assert!(grace.contains("<DIV class='chorus'>"));
    assert!(!grace.contains("Campfire"));
}

#[test]
fn test_transpose_directive_applies_to_chords() {
    let dir = tempfile::tempdir().unwrap();
    convert(dir.path(), &[("book.cho", SONGBOOK)]).unwrap();
    let rising = read(dir.path().join("Songs/House_of_the_Rising_Sun.html"));

    // Am C D F down two semitones: Gm Bb C Eb
    assert!(rising.contains("<CHORD class='chord' base='10' mod='m' pos='6'></CHORD>"));
    assert!(rising.contains("<CHORD class='chord' base='1' mod='' pos='11'></CHORD>"));
    assert!(rising.contains("id='cl0text'>      Gm   Bb       C     Eb          </span>"));

    // the next song starts untransposed
    let knockin = read(dir.path().join("Songs/Knockin__on_Heaven_s_Door.html"));
    assert!(knockin.contains("base='10' mod='' pos='0'"));
}

#[test]
fn test_index_lists_sections_alphabetically() {
    let dir = tempfile::tempdir().unwrap();
    convert(dir.path(), &[("book.cho", SONGBOOK)]).unwrap();
    let index = read(dir.path().join("Songs/index.html"));

    let rock = index.find("<LI>Rock</LI>").unwrap();
    let traditional = index.find("<LI>Traditional</LI>").unwrap();
    assert!(rock < traditional);

    let grace = index.find("Amazing_Grace.html").unwrap();
    let rising = index.find("House_of_the_Rising_Sun.html").unwrap();
    assert!(traditional < grace && grace < rising);
    assert!(index.contains(
        "<LI><A href='Knockin__on_Heaven_s_Door.html'>Knockin&apos; on Heaven&apos;s Door</A></LI>"
    ));
}

#[test]
fn test_songs_before_any_section_are_not_indexed() {
    let dir = tempfile::tempdir().unwrap();
    convert(
        dir.path(),
        &[("a.cho", "{title: Loose}\nla\n"), ("b.cho", "{section: Kept}\n{title: Listed}\n")],
    )
    .unwrap();
    let index = read(dir.path().join("Songs/index.html"));
    assert!(!index.contains("Loose"));
    assert!(index.contains("Listed"));
    assert!(dir.path().join("Songs/Loose.html").exists());
}

#[test]
fn test_default_section_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.cho");
    fs::write(&input, "{title: Loose}\nla\n").unwrap();
    let config = Config::from_yaml(&format!(
        "output-dir: {}\nindex-title: Campfire\ndefault-section: Other\n",
        dir.path().join("out").display()
    ))
    .unwrap();
    Session::new(config).run(&[input]).unwrap();

    let index = read(dir.path().join("out/index.html"));
    assert!(index.contains("<CENTER><H1>Campfire</H1></CENTER>"));
    assert!(index.contains("<LI>Other</LI><UL>\n<LI><A href='Loose.html'>Loose</A></LI>"));
}

#[test]
fn test_list_file_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let song = dir.path().join("song.cho");
    fs::write(&song, "{section: S}\n{title: From List}\n[D]x\n").unwrap();
    let list = dir.path().join("list.txt");
    fs::write(&list, format!("{}\n", song.display())).unwrap();

    let inputs = expand_inputs(&[format!("@{}", list.display())]).unwrap();
    let config = Config {
        output_dir: dir.path().join("Songs"),
        ..Config::default()
    };
    assert_eq!(Session::new(config).run(&inputs).unwrap(), 1);
    assert!(dir.path().join("Songs/From_List.html").exists());
}

#[test]
fn test_bad_transpose_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let result = convert(
        dir.path(),
        &[
            ("bad.cho", "{title: Bad}\n{transpose: half}\n"),
            ("good.cho", "{title: Never}\n"),
        ],
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("bad.cho"));
    assert!(!dir.path().join("Songs/Never.html").exists());
    assert!(!dir.path().join("Songs/index.html").exists());
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        output_dir: dir.path().join("Songs"),
        ..Config::default()
    };
    let err = Session::new(config)
        .run(&[dir.path().join("missing.cho")])
        .unwrap_err();
    assert!(matches!(err, ChoproError::Read { .. }));
}

#[test]
fn test_compile_without_files() {
    let pages = compile("{title: One}\n[C]a\n{title: Two}\n[X7]b\n").unwrap();
    assert_eq!(pages.len(), 2);
    assert!(pages[0].contains("<TITLE>One</TITLE>"));
    assert!(pages[1].contains("<CHORD class='chord' base='' mod='X7' pos='0'></CHORD>"));
    assert!(pages[1].contains("id='cl0text'>X7          </span>"));
}

#[test]
fn test_unterminated_bracket_line() {
    let pages = compile("{title: t}\n[C Hello\n").unwrap();
    assert!(pages[0].contains("<span class='text'></span>"));
    assert!(!pages[0].contains("chordlist"));
}
