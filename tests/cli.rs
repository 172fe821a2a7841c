//! End-to-end tests of the `ff1` binary (stdin to stdout).

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

const KEY_HEX: &str = "2B7E151628AED2A6ABF7158809CF4F3C";
const TWEAK_HEX: &str = "0123456789abcdef";
const PLAIN: &str = "00112233445566778899aabbccddeeff0123456789abcdef";

fn make_key(td: &assert_fs::TempDir) -> std::path::PathBuf {
    let k = td.child("key.hex");
    k.write_str(&format!("{KEY_HEX}\n")).expect("write key");
    k.path().to_path_buf()
}

fn make_tweak(td: &assert_fs::TempDir) -> std::path::PathBuf {
    let t = td.child("tweak.hex");
    t.write_str(&format!("{TWEAK_HEX}\n")).expect("write tweak");
    t.path().to_path_buf()
}

fn run_ff1(
    key: &std::path::Path,
    tweak: &std::path::Path,
    extra: &[&str],
    stdin: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let out = Command::cargo_bin("ff1")?
        .arg("-k")
        .arg(key)
        .arg("-t")
        .arg(tweak)
        .args(extra)
        .write_stdin(stdin)
        .output()?;
    assert!(out.status.success(), "ff1 failed: {}", String::from_utf8_lossy(&out.stderr));
    Ok(String::from_utf8(out.stdout)?)
}

// ------------------------------ Round trips ----------------------------------

#[test]
fn cli_encrypt_decrypt_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let key = make_key(&td);
    let tweak = make_tweak(&td);

    let ct = run_ff1(&key, &tweak, &[], PLAIN)?;
    assert_eq!(ct.len(), PLAIN.len());
    assert_ne!(ct, PLAIN);
    assert!(ct.chars().all(|c| c.is_ascii_hexdigit()));

    let pt = run_ff1(&key, &tweak, &["-d"], &ct)?;
    assert_eq!(pt, PLAIN);
    td.close()?;
    Ok(())
}

#[test]
fn cli_long_flags_match_short_flags() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let key = make_key(&td);
    let tweak = make_tweak(&td);

    let short = run_ff1(&key, &tweak, &[], PLAIN)?;

    let long = Command::cargo_bin("ff1")?
        .arg("--key-file")
        .arg(&key)
        .arg("--tweak-file")
        .arg(&tweak)
        .write_stdin(PLAIN)
        .output()?;
    assert!(long.status.success());
    assert_eq!(String::from_utf8(long.stdout)?, short);
    td.close()?;
    Ok(())
}

#[test]
fn cli_output_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let key = make_key(&td);
    let tweak = make_tweak(&td);

    let a = run_ff1(&key, &tweak, &[], PLAIN)?;
    let b = run_ff1(&key, &tweak, &[], PLAIN)?;
    assert_eq!(a, b);
    td.close()?;
    Ok(())
}

#[test]
fn cli_trailing_newline_on_stdin_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let key = make_key(&td);
    let tweak = make_tweak(&td);

    let plain = run_ff1(&key, &tweak, &[], PLAIN)?;
    let with_newline = run_ff1(&key, &tweak, &[], &format!("{PLAIN}\n"))?;
    assert_eq!(plain, with_newline);
    td.close()?;
    Ok(())
}

// --------------------------- Padding and width -------------------------------

#[test]
fn cli_width_wraps_and_decrypt_unwraps() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let key = make_key(&td);
    let tweak = make_tweak(&td);

    let wrapped = run_ff1(&key, &tweak, &["-w", "16"], PLAIN)?;
    let lines: Vec<&str> = wrapped.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.len() == 16));
    assert!(wrapped.ends_with('\n'));

    let pt = run_ff1(&key, &tweak, &["-d"], &wrapped)?;
    assert_eq!(pt, PLAIN);
    td.close()?;
    Ok(())
}

#[test]
fn cli_padding_extends_short_input() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let key = make_key(&td);
    let tweak = make_tweak(&td);

    let ct = run_ff1(&key, &tweak, &["-p", "32"], "abcdef")?;
    assert_eq!(ct.len(), 32);

    let pt = run_ff1(&key, &tweak, &["-d"], &ct)?;
    assert_eq!(pt, format!("abcdef{}", "0".repeat(26)));

    // Padding is a lower bound only.
    let unpadded = run_ff1(&key, &tweak, &["-p", "4"], PLAIN)?;
    assert_eq!(unpadded.len(), PLAIN.len());
    td.close()?;
    Ok(())
}

// ------------------------------- Failures ------------------------------------

#[test]
fn cli_missing_key_prints_usage() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let tweak = make_tweak(&td);

    Command::cargo_bin("ff1")?
        .arg("-t")
        .arg(&tweak)
        .write_stdin(PLAIN)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage: ff1 -k <keyfile>"));
    td.close()?;
    Ok(())
}

#[test]
fn cli_unknown_flag_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("ff1")?
        .arg("--bogus")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--bogus"));
    Ok(())
}

#[test]
fn cli_help_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("ff1")?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--key-file"));
    Ok(())
}

#[test]
fn cli_unreadable_key_file() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let tweak = make_tweak(&td);

    Command::cargo_bin("ff1")?
        .arg("-k")
        .arg(td.child("missing.hex").path())
        .arg("-t")
        .arg(&tweak)
        .write_stdin(PLAIN)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error reading key file"));
    td.close()?;
    Ok(())
}

#[test]
fn cli_bad_key_hex() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let key = td.child("key.hex");
    key.write_str("not hex at all\n")?;
    let tweak = make_tweak(&td);

    Command::cargo_bin("ff1")?
        .arg("-k")
        .arg(key.path())
        .arg("-t")
        .arg(&tweak)
        .write_stdin(PLAIN)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error decoding key hex"));
    td.close()?;
    Ok(())
}

#[test]
fn cli_wrong_key_length() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let key = td.child("key.hex");
    key.write_str("00112233445566778899")?;
    let tweak = make_tweak(&td);

    Command::cargo_bin("ff1")?
        .arg("-k")
        .arg(key.path())
        .arg("-t")
        .arg(&tweak)
        .write_stdin(PLAIN)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error creating FF1 cipher"))
        .stderr(predicate::str::contains("invalid key length 10"));
    td.close()?;
    Ok(())
}

#[test]
fn cli_tweak_longer_than_64_bits() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let key = make_key(&td);
    let tweak = td.child("tweak.hex");
    tweak.write_str("000102030405060708")?;

    Command::cargo_bin("ff1")?
        .arg("-k")
        .arg(&key)
        .arg("-t")
        .arg(tweak.path())
        .write_stdin(PLAIN)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid tweak length 9"));
    td.close()?;
    Ok(())
}

#[test]
fn cli_non_hex_input() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let key = make_key(&td);
    let tweak = make_tweak(&td);

    Command::cargo_bin("ff1")?
        .arg("-k")
        .arg(&key)
        .arg("-t")
        .arg(&tweak)
        .write_stdin("0123456789abcdefg")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error encrypting data"));
    td.close()?;
    Ok(())
}

#[test]
fn cli_multi_line_plaintext_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let key = make_key(&td);
    let tweak = make_tweak(&td);

    Command::cargo_bin("ff1")?
        .arg("-k")
        .arg(&key)
        .arg("-t")
        .arg(&tweak)
        .write_stdin("00112233\n44556677\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid character"));
    td.close()?;
    Ok(())
}

#[test]
fn cli_empty_input_fails() -> Result<(), Box<dyn std::error::Error>> {
    let td = assert_fs::TempDir::new()?;
    let key = make_key(&td);
    let tweak = make_tweak(&td);

    Command::cargo_bin("ff1")?
        .arg("-k")
        .arg(&key)
        .arg("-t")
        .arg(&tweak)
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid input length 0"));
    td.close()?;
    Ok(())
}
