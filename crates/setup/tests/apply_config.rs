use config::AppPaths;
use icon_source::mock::MockIconSource;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use setup::{apply_config, HtmlOutcome, IconOutcome, LockOutcome};
use std::fs;
use std::path::Path;

const ICON_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nicon";

const CONFIG: &str = r##"{
  "name": "My App",
  "version": "2.0.0",
  "description": "d",
  "color": "#112233",
  "ID": "abc123",
  "windowsicon": "https://cdn.example.com/icon.png"
}"##;

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head>
  <title>Starter</title>
  <style>
    html, body { margin: 0; background: #ffffff; }
    .card { background: #fafafa; }
  </style>
</head>
<body>
  <script>localStorage.setItem('NAME', 'starter');</script>
</body>
</html>
"#;

fn fixture(root: &Path, manifest: &str, with_html: bool) -> AppPaths {
    let paths = AppPaths::under(root);
    fs::write(&paths.config, CONFIG).expect("write config");
    fs::write(&paths.package, manifest).expect("write package.json");
    if with_html {
        fs::create_dir_all(&paths.public_dir).expect("public dir");
        fs::write(&paths.index_html, INDEX_HTML).expect("write index.html");
    }
    paths
}

fn read_value(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read json")).expect("parse json")
}

#[tokio::test]
async fn empty_manifest_gets_config_fields_and_build_section() {
    let td = tempfile::tempdir().expect("tmpdir");
    let paths = fixture(td.path(), "{}", true);
    let icons = MockIconSource::serving(ICON_BYTES);

    let report = apply_config(&paths, icons.as_ref()).await.expect("apply");

    assert_eq!(
        read_value(&paths.package),
        json!({
            "name": "my-app",
            "version": "2.0.0",
            "description": "d",
            "build": {
                "productName": "My App",
                "win": { "icon": "public/icon.png", "target": "nsis" },
                "mac": { "icon": "public/icon.png", "target": "dmg" },
                "linux": { "icon": "public/icon.png", "target": "AppImage" },
                "directories": { "output": "dist" }
            }
        })
    );
    assert_eq!(report.sanitized_name, "my-app");
    assert_eq!(icons.calls(), 1);
    assert_eq!(fs::read(&paths.icon).expect("icon"), ICON_BYTES);
    assert!(matches!(
        report.icon,
        IconOutcome::Downloaded { bytes, .. } if bytes == ICON_BYTES.len()
    ));
    assert_eq!(report.lock, LockOutcome::Missing);

    let html = fs::read_to_string(&paths.index_html).expect("html");
    assert!(html.contains("<title>My App</title>"));
    assert!(html.contains("html, body { margin: 0; background: #112233; }"));
    assert!(html.contains(".card { background: #fafafa; }"));
    assert!(html.contains("localStorage.setItem('NAME', 'abc123');"));
    match report.html {
        HtmlOutcome::Updated(applied) => {
            assert!(applied.title && applied.background && applied.stored_name)
        }
        HtmlOutcome::Missing => panic!("index.html should have been updated"),
    }
}

#[tokio::test]
async fn existing_icon_is_never_fetched() {
    let td = tempfile::tempdir().expect("tmpdir");
    let paths = fixture(td.path(), "{}", true);
    fs::write(&paths.icon, b"cached").expect("seed icon");
    let icons = MockIconSource::failing();

    let report = apply_config(&paths, icons.as_ref()).await.expect("apply");

    assert_eq!(icons.calls(), 0);
    assert_eq!(report.icon, IconOutcome::Present);
    assert_eq!(fs::read(&paths.icon).expect("icon"), b"cached");
}

#[tokio::test]
async fn failed_fetch_leaves_documents_untouched() {
    let td = tempfile::tempdir().expect("tmpdir");
    let manifest = r#"{"name":"starter","version":"0.0.1"}"#;
    let paths = fixture(td.path(), manifest, true);
    let icons = MockIconSource::failing();

    let err = apply_config(&paths, icons.as_ref())
        .await
        .expect_err("fetch failure is fatal");

    assert!(format!("{err:#}").contains("Failed to download icon from https://cdn.example.com/icon.png"));
    assert_eq!(icons.calls(), 1);
    assert_eq!(fs::read_to_string(&paths.package).expect("pkg"), manifest);
    assert_eq!(fs::read_to_string(&paths.index_html).expect("html"), INDEX_HTML);
    assert!(!paths.icon.exists());
}

#[tokio::test]
async fn missing_icon_url_is_fatal_when_icon_absent() {
    let td = tempfile::tempdir().expect("tmpdir");
    let paths = fixture(td.path(), "{}", false);
    fs::write(&paths.config, r#"{"name":"My App"}"#).expect("write config");
    let icons = MockIconSource::serving(ICON_BYTES);

    let err = apply_config(&paths, icons.as_ref())
        .await
        .expect_err("no url");

    assert!(err.to_string().contains("windowsicon is not configured"));
    assert_eq!(icons.calls(), 0);
    assert_eq!(fs::read_to_string(&paths.package).expect("pkg"), "{}");
}

#[tokio::test]
async fn second_run_reproduces_the_same_files() {
    let td = tempfile::tempdir().expect("tmpdir");
    let paths = fixture(td.path(), r#"{"name":"x","private":true}"#, true);
    fs::write(&paths.package_lock, r#"{"name":"x","lockfileVersion":3}"#).expect("lock");
    let icons = MockIconSource::serving(ICON_BYTES);

    apply_config(&paths, icons.as_ref()).await.expect("first run");
    let snapshot = |p: &Path| fs::read(p).expect("snapshot");
    let first = [
        snapshot(&paths.package),
        snapshot(&paths.package_lock),
        snapshot(&paths.index_html),
        snapshot(&paths.icon),
    ];

    let report = apply_config(&paths, icons.as_ref()).await.expect("second run");
    let second = [
        snapshot(&paths.package),
        snapshot(&paths.package_lock),
        snapshot(&paths.index_html),
        snapshot(&paths.icon),
    ];

    assert_eq!(first, second);
    assert_eq!(icons.calls(), 1);
    assert_eq!(report.icon, IconOutcome::Present);
}

#[tokio::test]
async fn missing_index_html_only_warns() {
    let td = tempfile::tempdir().expect("tmpdir");
    let paths = fixture(td.path(), "{}", false);
    let icons = MockIconSource::serving(ICON_BYTES);

    let report = apply_config(&paths, icons.as_ref()).await.expect("apply");

    assert_eq!(report.html, HtmlOutcome::Missing);
    assert!(!paths.index_html.exists());
    assert_eq!(read_value(&paths.package)["name"], "my-app");
    assert!(paths.icon.exists());
}

#[tokio::test]
async fn lock_manifest_name_follows_sanitized_name() {
    let td = tempfile::tempdir().expect("tmpdir");
    let paths = fixture(td.path(), "{}", false);
    fs::write(
        &paths.package_lock,
        r#"{"name":"starter","lockfileVersion":3,"packages":{"":{"name":"starter"}}}"#,
    )
    .expect("lock");
    let icons = MockIconSource::serving(ICON_BYTES);

    let report = apply_config(&paths, icons.as_ref()).await.expect("apply");

    assert_eq!(report.lock, LockOutcome::Updated);
    let lock = read_value(&paths.package_lock);
    assert_eq!(lock["name"], "my-app");
    assert_eq!(lock["packages"][""]["name"], "starter");
}

#[tokio::test]
async fn lock_manifest_without_name_is_left_alone() {
    let td = tempfile::tempdir().expect("tmpdir");
    let paths = fixture(td.path(), "{}", false);
    let lock = r#"{"lockfileVersion":3}"#;
    fs::write(&paths.package_lock, lock).expect("lock");
    let icons = MockIconSource::serving(ICON_BYTES);

    let report = apply_config(&paths, icons.as_ref()).await.expect("apply");

    assert_eq!(report.lock, LockOutcome::NoName);
    assert_eq!(fs::read_to_string(&paths.package_lock).expect("lock"), lock);
}

#[tokio::test]
async fn explicit_product_name_and_app_id_are_used() {
    let td = tempfile::tempdir().expect("tmpdir");
    let paths = fixture(td.path(), "{}", false);
    fs::write(
        &paths.config,
        r#"{"name":"My App","appId":"com.example.myapp","productName":"My Fancy App","windowsicon":"https://x/i.png"}"#,
    )
    .expect("write config");
    let icons = MockIconSource::serving(ICON_BYTES);

    apply_config(&paths, icons.as_ref()).await.expect("apply");

    let pkg = read_value(&paths.package);
    assert_eq!(pkg["build"]["appId"], "com.example.myapp");
    assert_eq!(pkg["build"]["productName"], "My Fancy App");
    assert!(pkg.get("version").is_none());
}

#[tokio::test]
async fn unparseable_config_is_fatal() {
    let td = tempfile::tempdir().expect("tmpdir");
    let paths = fixture(td.path(), "{}", true);
    fs::write(&paths.config, "{ not json").expect("write config");
    let icons = MockIconSource::serving(ICON_BYTES);

    let err = apply_config(&paths, icons.as_ref())
        .await
        .expect_err("bad config");

    assert!(format!("{err:#}").contains("Failed to parse"));
    assert_eq!(icons.calls(), 0);
    assert_eq!(fs::read_to_string(&paths.package).expect("pkg"), "{}");
}

#[tokio::test]
async fn unparseable_manifest_is_fatal() {
    let td = tempfile::tempdir().expect("tmpdir");
    let paths = fixture(td.path(), "[1, 2", true);
    let icons = MockIconSource::serving(ICON_BYTES);

    let err = apply_config(&paths, icons.as_ref())
        .await
        .expect_err("bad manifest");

    assert!(format!("{err:#}").contains("Failed to load package manifest"));
    assert_eq!(icons.calls(), 0);
    assert_eq!(fs::read_to_string(&paths.index_html).expect("html"), INDEX_HTML);
}

#[tokio::test]
async fn numeric_id_is_written_into_the_page() {
    let td = tempfile::tempdir().expect("tmpdir");
    let paths = fixture(td.path(), "{}", true);
    fs::write(
        &paths.config,
        r##"{"name":"My App","ID":12345,"color":"#000","windowsicon":"https://x/i.png"}"##,
    )
    .expect("write config");
    let icons = MockIconSource::serving(ICON_BYTES);

    apply_config(&paths, icons.as_ref()).await.expect("apply");

    let html = fs::read_to_string(&paths.index_html).expect("html");
    assert!(html.contains("localStorage.setItem('NAME', '12345');"));
    assert!(html.contains("html, body { margin: 0; background: #000; }"));
}

#[tokio::test]
async fn numeric_version_is_copied_unchanged() {
    let td = tempfile::tempdir().expect("tmpdir");
    let paths = fixture(td.path(), r#"{"version":"0.0.1"}"#, false);
    fs::write(
        &paths.config,
        r#"{"name":"My App","version":2,"windowsicon":"https://x/i.png"}"#,
    )
    .expect("write config");
    let icons = MockIconSource::serving(ICON_BYTES);

    apply_config(&paths, icons.as_ref()).await.expect("apply");

    let pkg = read_value(&paths.package);
    assert_eq!(pkg["version"], json!(2));
    assert_eq!(pkg["name"], "my-app");
}
