//! End-to-end tests for `--install` and `--remove`
//!
//! The answer is piped on stdin, so the prompt falls back to reading one line.

use super::FakeBackends;
use predicates::prelude::*;

#[test]
fn install_none_aborts() {
    let fakes = FakeBackends::all();
    fakes
        .command()
        .args(["-i", "firefox"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Install firefox with which source? [y]ay, [f]latpak, [s]nap, [n]one",
        ))
        .stdout(predicate::str::contains("Aborted, firefox was not installed"));

    assert_eq!(
        fakes.calls(),
        vec!["yay -Ss firefox", "flatpak search firefox", "snap find firefox"]
    );
}

#[test]
fn install_with_yay() {
    let fakes = FakeBackends::all();
    fakes
        .command()
        .args(["--install", "firefox"])
        .write_stdin("y\n")
        .assert()
        .success();

    let calls = fakes.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[3], "yay -S firefox");
}

#[test]
fn install_with_flatpak_uses_sudo() {
    let fakes = FakeBackends::all();
    fakes
        .command()
        .args(["-i", "gimp"])
        .write_stdin("Flatpak\n")
        .assert()
        .success();

    let calls = fakes.calls();
    assert_eq!(&calls[3..], ["sudo flatpak install gimp", "flatpak install gimp"]);
}

#[test]
fn install_unknown_choice_fails() {
    let fakes = FakeBackends::all();
    fakes
        .command()
        .args(["-i", "firefox"])
        .write_stdin("x\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown source 'x'"));
    assert_eq!(fakes.calls().len(), 3);
}

#[test]
fn install_without_answer_fails() {
    let fakes = FakeBackends::all();
    fakes
        .command()
        .args(["-i", "firefox"])
        .write_stdin("")
        .assert()
        .code(1);
}

#[test]
fn remove_shows_matches_then_removes() {
    let fakes = FakeBackends::all().with_script(
        "flatpak",
        "echo \"flatpak $*\" >> '@LOG@'\n\
         if [ \"$1\" = list ]; then printf 'VLC\\torg.videolan.VLC\\nGIMP\\torg.gimp.GIMP\\n'; fi",
    );
    fakes
        .command()
        .args(["-r", "vlc"])
        .write_stdin("f\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("org.videolan.VLC"))
        .stdout(predicate::str::contains("org.gimp.GIMP").not())
        .stdout(predicate::str::contains("vlc is not installed"));

    assert_eq!(
        fakes.calls(),
        vec![
            "yay -Q",
            "flatpak list",
            "snap list",
            "sudo flatpak uninstall vlc",
            "flatpak uninstall vlc",
        ]
    );
}

#[test]
fn remove_none_aborts() {
    let fakes = FakeBackends::all();
    fakes
        .command()
        .args(["--remove", "vlc"])
        .write_stdin("none\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted, vlc was not removed"));
    assert_eq!(fakes.calls(), vec!["yay -Q", "flatpak list", "snap list"]);
}

#[test]
fn remove_skips_note_for_missing_backends() {
    let fakes = FakeBackends::empty().with_logging_script("flatpak", "");
    let output = fakes
        .command()
        .args(["-r", "vlc"])
        .write_stdin("n\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("yay is not installed, skipping"));
    assert!(stdout.contains("snap is not installed, skipping"));
    // only flatpak ran its listing, so only flatpak gets the package note
    assert_eq!(stdout.matches("vlc is not installed").count(), 1);
    assert_eq!(fakes.calls(), vec!["flatpak list"]);
}
