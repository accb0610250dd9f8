use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn browse_help_lists_paging_flags() {
    let mut cmd = cargo_bin_cmd!("reelviewctl");
    cmd.arg("browse")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--next"))
        .stdout(predicate::str::contains("--prev"))
        .stdout(predicate::str::contains("--detail"));
}

#[test]
fn image_needs_no_configuration() {
    let mut cmd = cargo_bin_cmd!("reelviewctl");
    cmd.env_remove("TMDB_API_KEY")
        .arg("image")
        .arg("/kqjL17yufvn9OVLyXYpvtyrFfak.jpg")
        .arg("--size")
        .arg("w500")
        .assert()
        .success()
        .stdout(
            "https://image.tmdb.org/t/p/w500/kqjL17yufvn9OVLyXYpvtyrFfak.jpg\n",
        );
}

#[test]
fn image_without_size_is_original() {
    let mut cmd = cargo_bin_cmd!("reelviewctl");
    cmd.args(["image", "abc.jpg", "--base", "https://cdn.example/p/"])
        .assert()
        .success()
        .stdout("https://cdn.example/p/original/abc.jpg\n");
}

#[test]
fn categories_lists_every_endpoint() {
    let mut cmd = cargo_bin_cmd!("reelviewctl");
    cmd.arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("/movie/now_playing"))
        .stdout(predicate::str::contains("/tv/on_the_air"));
}
