use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::Server;
use predicates::prelude::*;
use tempfile::tempdir;

const LINUX_WHEEL: &str =
    "algebraic_immunity-1.2.0-cp311-cp311-manylinux_2_17_x86_64.manylinux2014_x86_64.whl";

/// Command pinned to a platform and Python 3.11 so results don't depend on the host.
fn cmd_for(os: &str, arch: &str) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("ai-wheel"));
    cmd.env_remove("AI_WHEEL_PYTHON")
        .env_remove("AI_WHEEL_REPO")
        .env_remove("GITHUB_TOKEN")
        .args(["--os", os, "--arch", arch, "--python-version", "3.11"]);
    cmd
}

fn pinned_cmd() -> Command {
    cmd_for("Linux", "x86_64")
}

#[test]
fn test_prints_url_for_version() {
    pinned_cmd()
        .args(["-v", "1.2.0"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "https://github.com/LucaBonamino/algebraic_immunity/releases/download/1.2.0/{}\n",
            LINUX_WHEEL
        )));
}

#[test]
fn test_default_version_is_0_1_0() {
    pinned_cmd()
        .arg("url")
        .assert()
        .success()
        .stdout(predicate::str::contains("/releases/download/0.1.0/"))
        .stdout(predicate::str::contains("algebraic_immunity-0.1.0-cp311-cp311-"));
}

#[test]
fn test_every_platform_key() {
    let cases = [
        ("Linux", "aarch64", "manylinux_2_17_aarch64.manylinux2014_aarch64.whl"),
        ("Windows", "AMD64", "win_amd64.whl"),
        ("Windows", "x86", "win32.whl"),
        ("Darwin", "x86_64", "macosx_10_9_x86_64.whl"),
        ("Darwin", "arm64", "macosx_11_0_arm64.whl"),
    ];

    for (os, arch, suffix) in cases {
        cmd_for(os, arch)
            .args(["-v", "3.0.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("-3.0.0-cp311-cp311-"))
            .stdout(predicate::str::ends_with(format!("{}\n", suffix)));
    }
}

#[test]
fn test_unsupported_os_fails() {
    cmd_for("Plan9", "x86_64")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Unsupported platform: Plan9 x86_64"));
}

#[test]
fn test_unsupported_arch_fails() {
    cmd_for("Linux", "armv7l")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported platform: Linux armv7l"));
}

#[test]
fn test_install_dry_run_prints_pip_command() {
    pinned_cmd()
        .args([
            "--interpreter",
            "/opt/python3.11",
            "-v",
            "1.2.0",
            "install",
            "--dry-run",
            "--",
            "--user",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "/opt/python3.11 -m pip install --user https://github.com/",
        ))
        .stdout(predicate::str::contains(LINUX_WHEEL));
}

#[test]
fn test_download_from_release_host() {
    let mut server = Server::new();
    let mock = server
        .mock(
            "GET",
            format!(
                "/LucaBonamino/algebraic_immunity/releases/download/1.2.0/{}",
                LINUX_WHEEL
            )
            .as_str(),
        )
        .with_status(200)
        .with_body("wheel-bytes")
        .create();

    let dir = tempdir().unwrap();

    pinned_cmd()
        .args(["-v", "1.2.0", "--download-url"])
        .arg(server.url())
        .arg("download")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(LINUX_WHEEL));

    mock.assert();
    let saved = dir.path().join(LINUX_WHEEL);
    assert_eq!(std::fs::read(saved).unwrap(), b"wheel-bytes");
}

#[test]
fn test_download_missing_wheel_fails() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", mockito::Matcher::Any)
        .with_status(404)
        .create();

    let dir = tempdir().unwrap();

    pinned_cmd()
        .args(["-v", "9.9.9", "--download-url"])
        .arg(server.url())
        .args(["download", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_latest_version_from_api() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/repos/LucaBonamino/algebraic_immunity/releases/latest")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"tag_name": "v0.4.0", "prerelease": false, "assets": []}"#)
        .create();

    pinned_cmd()
        .args(["-v", "latest", "--api-url"])
        .arg(server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/releases/download/v0.4.0/algebraic_immunity-0.4.0-cp311-cp311-",
        ));
}

#[test]
fn test_check_against_release_assets() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/repos/LucaBonamino/algebraic_immunity/releases/tags/1.2.0")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{
                "tag_name": "1.2.0",
                "assets": [
                    {{"name": "{}", "size": 2048, "browser_download_url": "https://example.com/{}"}}
                ]
            }}"#,
            LINUX_WHEEL, LINUX_WHEEL
        ))
        .create();

    pinned_cmd()
        .args(["-v", "1.2.0", "--api-url"])
        .arg(server.url())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("2048 bytes"));

    // Same release, but Windows has no wheel there
    cmd_for("Windows", "AMD64")
        .args(["-v", "1.2.0", "--api-url"])
        .arg(server.url())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Available wheels"))
        .stderr(predicate::str::contains(LINUX_WHEEL));
}

#[test]
fn test_download_rejects_path_like_version() {
    let dir = tempdir().unwrap();
    pinned_cmd()
        .args(["-v", "1.0/../../x", "download", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid version '1.0/../../x'"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_os_only_override_uses_host_arch() {
    let expected = match std::env::consts::ARCH {
        "x86_64" => "win_amd64.whl",
        "x86" => "win32.whl",
        _ => return,
    };
    Command::new(cargo::cargo_bin!("ai-wheel"))
        .env_remove("AI_WHEEL_PYTHON")
        .args(["--os", "Windows", "--python-version", "3.11"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!("{}\n", expected)));
}
