use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

fn test_key_path(name: &str) -> String {
    project_root()
        .join("testdata")
        .join(name)
        .to_string_lossy()
        .to_string()
}

fn hedwig() -> Command {
    let mut cmd = Command::cargo_bin("hedwig").unwrap();
    cmd.current_dir(project_root());
    cmd
}

#[test]
fn test_key_inspect_file_text() {
    hedwig()
        .args(["key", "inspect", &test_key_path("rsa4096.asc")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Modulus (n): 4096 bits"))
        .stdout(predicate::str::contains("Size: 512 bytes"))
        .stdout(predicate::str::contains("b3:5a:c0:66"))
        .stdout(predicate::str::contains(
            "Public Exponent (e): 65537 (0x10001)",
        ));
}

#[test]
fn test_key_inspect_wrapped_file_json() {
    hedwig()
        .args(["key", "inspect", &test_key_path("rsa1024.asc"), "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""key_size": 1024"#))
        .stdout(predicate::str::contains(r#""modulus_bytes": 128"#))
        .stdout(predicate::str::contains(r#""exponent": "10001""#));
}

#[test]
fn test_key_inspect_stdin_with_armor_framing() {
    let body = std::fs::read_to_string(test_key_path("rsa1024.asc")).unwrap();
    let block = format!(
        "-----BEGIN PGP PUBLIC KEY BLOCK-----\nVersion: test\n\n{body}-----END PGP PUBLIC KEY BLOCK-----\n"
    );

    hedwig()
        .args(["key", "inspect"])
        .write_stdin(block)
        .assert()
        .success()
        .stdout(predicate::str::contains("Modulus (n): 1024 bits"));
}

#[test]
fn test_key_inspect_legacy_mpi_length() {
    hedwig()
        .args([
            "key",
            "inspect",
            &test_key_path("rsa4096.asc"),
            "--legacy-mpi-length",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Public Exponent (e): 256 (0x100)"));
}

#[test]
fn test_key_inspect_input_too_large() {
    hedwig()
        .args([
            "key",
            "inspect",
            &test_key_path("rsa4096.asc"),
            "--max-input-bytes",
            "100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InputTooLarge"));
}

#[test]
fn test_key_inspect_checksum_mismatch() {
    hedwig()
        .args(["key", "inspect"])
        .write_stdin("AAAA=AAAA")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ChecksumMismatch"));
}

#[test]
fn test_armor_decode_hex() {
    hedwig()
        .args(["armor", "decode", &test_key_path("rsa4096.asc"), "--hex"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("00000000  99 02 0d 04"));
}

#[test]
fn test_armor_decode_binary() {
    let output = hedwig()
        .args(["armor", "decode", &test_key_path("rsa1024.asc")])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(666, output.stdout.len());
    assert_eq!([0x98, 0x8d, 0x04], output.stdout[..3]);
}

#[test]
fn test_armor_encode_then_decode() {
    hedwig()
        .args(["armor", "encode"])
        .write_stdin(vec![0x00, 0x00, 0x00])
        .assert()
        .success()
        .stdout("AAAA\n=Je8i\n");

    hedwig()
        .args(["armor", "decode", "--hex"])
        .write_stdin("AAAA\n=Je8i\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("00000000  00 00 00 "));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    hedwig()
        .args(["--debug", "key", "inspect", &test_key_path("rsa1024.asc")])
        .assert()
        .success()
        .stderr(predicate::str::contains("assembled RSA public key"))
        .stdout(predicate::str::contains("RSA Public Key (OpenPGP)"));
}
